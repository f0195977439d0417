use crate::config::toml_config::{MonitoringConfig, OutputConfig, TomlConfig};
use crate::core::report::SUPPORTED_FORMATS;
use crate::domain::model::ListKind;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "custom-lists")]
#[command(about = "Run list operation scenarios against the array and linked list implementations")]
pub struct CliConfig {
    /// Path to TOML scenario file
    #[arg(short, long, default_value = "scenario.toml")]
    pub config: String,

    /// Override the list implementation from the scenario
    #[arg(long, value_enum)]
    pub list: Option<ListKind>,

    /// Override the report directory from the scenario
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override report formats (comma separated: json,csv,tsv)
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Sample process CPU and memory around each run")]
    pub monitor: bool,

    /// Show what would run without executing any operation
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Command-line values win over the scenario file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(kind) = self.list {
            config.list.kind = kind;
            tracing::info!("🔧 List implementation overridden to: {}", kind);
        }

        if self.output_path.is_some() || !self.format.is_empty() {
            let path = self
                .output_path
                .clone()
                .unwrap_or_else(|| config.output_path().to_string());
            let formats = if self.format.is_empty() {
                config.output_formats()
            } else {
                self.format.clone()
            };
            config.output = Some(OutputConfig { path, formats });
        }

        if self.monitor {
            config.monitoring = Some(MonitoringConfig { enabled: true });
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        for format in &self.format {
            validate_one_of("format", &format.trim().to_ascii_lowercase(), &SUPPORTED_FORMATS)?;
        }
        Ok(())
    }
}
