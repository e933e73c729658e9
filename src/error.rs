//! Error handling for the job comparison tool

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobCompareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobCompareError>;

impl From<toml::de::Error> for JobCompareError {
    fn from(err: toml::de::Error) -> Self {
        JobCompareError::InvalidInput(format!("TOML parse error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = JobCompareError::Configuration("weights must sum to 1.0".to_string());
        assert_eq!(err.to_string(), "Configuration error: weights must sum to 1.0");

        let err = JobCompareError::UnsupportedFormat("jobs.xyz".to_string());
        assert_eq!(err.to_string(), "File format not supported: jobs.xyz");

        let err = JobCompareError::OutputFormatting("key must be a string".to_string());
        assert_eq!(err.to_string(), "Output formatting error: key must be a string");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: JobCompareError = io.into();
        assert!(matches!(err, JobCompareError::Io(_)));
    }
}
