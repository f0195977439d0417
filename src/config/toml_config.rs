use crate::core::report::{ReportFormat, SUPPORTED_FORMATS};
use crate::core::scenario::ScenarioPlan;
use crate::domain::model::{ErrorPolicy, ListKind, Operation};
use crate::utils::error::{ListError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scenario: ScenarioConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub operations: Vec<Operation>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
    pub error_handling: Option<ErrorHandlingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default)]
    pub kind: ListKind,
    pub initial_capacity: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default)]
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl TomlConfig {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ListError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ITEM})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ListError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("scenario.name", &self.scenario.name)?;

        if self.operations.is_empty() {
            return Err(ListError::MissingConfigError {
                field: "operations".to_string(),
            });
        }

        if let Some(capacity) = self.list.initial_capacity {
            validate_range("list.initial_capacity", capacity, 1, MAX_INITIAL_CAPACITY)?;
        }

        validate_path("output.path", self.output_path())?;
        for format in self.output_formats() {
            validate_one_of("output.formats", &format, &SUPPORTED_FORMATS)?;
        }

        Ok(())
    }

    pub fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .map(|o| o.path.as_str())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    /// Configured formats, lowercased. Defaults to JSON only.
    pub fn output_formats(&self) -> Vec<String> {
        match &self.output {
            Some(output) if !output.formats.is_empty() => output
                .formats
                .iter()
                .map(|f| f.trim().to_ascii_lowercase())
                .collect(),
            _ => vec!["json".to_string()],
        }
    }

    pub fn report_formats(&self) -> Result<Vec<ReportFormat>> {
        self.output_formats().iter().map(|f| f.parse()).collect()
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_handling
            .as_ref()
            .map(|e| e.on_error)
            .unwrap_or_default()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn to_plan(&self) -> ScenarioPlan {
        ScenarioPlan {
            name: self.scenario.name.clone(),
            kind: self.list.kind,
            initial_capacity: self.list.initial_capacity,
            policy: self.error_policy(),
            operations: self.operations.clone(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
