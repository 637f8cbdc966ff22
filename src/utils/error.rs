use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ZooError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ZooError::IoError(e) => format!("Could not read or write: {}", e),
            ZooError::SerializationError(e) => format!("Could not render the zoo report: {}", e),
            ZooError::TomlError(e) => format!("The roster file is not valid TOML: {}", e),
            ZooError::ConfigError { message } => format!("Configuration problem: {}", message),
            ZooError::MissingConfigError { field } => {
                format!("The roster is missing the '{}' field", field)
            }
            ZooError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {} ({})", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ZooError::IoError(_) => "Check that the file exists and that stdout is writable",
            ZooError::SerializationError(_) => "Run again without --json",
            ZooError::TomlError(_) => "Each animal needs a [[animals]] table with a kind field",
            ZooError::ConfigError { .. } | ZooError::MissingConfigError { .. } => {
                "Compare the roster file against the bundled zoo.toml"
            }
            ZooError::InvalidConfigValueError { .. } => {
                "Names must be non-empty and measurements must be non-negative numbers"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = ZooError::InvalidConfigValueError {
            field: "animals[0].name".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert!(err.to_string().contains("animals[0].name"));
        assert!(err.user_friendly_message().contains("animals[0].name"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ZooError = io.into();
        assert!(matches!(err, ZooError::IoError(_)));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
