use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing job field: {field}")]
    MissingJobField { field: String },

    #[error("nothing to import: file contains no data rows")]
    EmptyInput,

    #[error("missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ImportError {
    pub fn missing_field(field: &str) -> Self {
        ImportError::MissingJobField {
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
