use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("Requested index: {index}, but size: {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Operation {step} failed: {message}")]
    OperationError { step: usize, message: String },

    #[error("Implementations diverged at step {step}: {message}")]
    ConsistencyError { step: usize, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Bounds,
    Io,
    Serialization,
    Configuration,
    Operation,
    Consistency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ListError {
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::ConfigParseError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::OperationError { .. } => ErrorCategory::Operation,
            Self::ConsistencyError { .. } => ErrorCategory::Consistency,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Bounds | ErrorCategory::Operation => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Consistency => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IndexOutOfBounds { size, .. } if *size == 0 => {
                "The list is empty; add elements before addressing them by index".to_string()
            }
            Self::IndexOutOfBounds { size, .. } => {
                format!("Use an index between 0 and {}", size - 1)
            }
            Self::IoError(_) => "Check that the output directory exists and is writable".to_string(),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Try a different output format or inspect the scenario values".to_string()
            }
            Self::ConfigParseError { .. } => {
                "Make sure the scenario file is valid TOML and every operation has an 'op' field"
                    .to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the scenario file or on the command line", field)
            }
            Self::MissingConfigError { field } => {
                format!("Add '{}' to the scenario file", field)
            }
            Self::OperationError { step, .. } => {
                format!("Review operation #{} or set error_handling.on_error = \"continue\"", step)
            }
            Self::ConsistencyError { .. } => {
                "Run the scenario against each implementation separately with --list to isolate the fault"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Bounds => format!("Index out of range. {}", self),
            ErrorCategory::Io => format!("Could not read or write a file. {}", self),
            ErrorCategory::Serialization => format!("Could not render the report. {}", self),
            ErrorCategory::Configuration => format!("The scenario configuration is invalid. {}", self),
            ErrorCategory::Operation => format!("A list operation failed. {}", self),
            ErrorCategory::Consistency => {
                format!("The list implementations disagree. {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
