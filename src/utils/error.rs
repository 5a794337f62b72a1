use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    ApiStatusError { status: u16, message: String },

    #[error("Not authorized: {message}")]
    Unauthorized { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Session error: {message}")]
    SessionError { message: String },
}

impl RentalError {
    pub fn is_auth_error(&self) -> bool {
        matches!(self, RentalError::Unauthorized { .. })
    }

    /// Short message suitable for printing to a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RentalError::ApiError(e) if e.is_timeout() => {
                "The rental service did not respond in time".to_string()
            }
            RentalError::ApiError(e) if e.is_connect() => {
                "Could not reach the rental service".to_string()
            }
            RentalError::ApiError(_) => "Request to the rental service failed".to_string(),
            RentalError::ApiStatusError { message, .. } => message.clone(),
            RentalError::Unauthorized { .. } => {
                "You are not logged in or your session has expired".to_string()
            }
            RentalError::IoError(e) => format!("File access failed: {}", e),
            RentalError::SerializationError(_) => {
                "Received data in an unexpected format".to_string()
            }
            RentalError::ConfigError { message } => format!("Configuration problem: {}", message),
            RentalError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            RentalError::InvalidConfigValueError { field, reason, .. } => {
                format!("Value for '{}' is invalid: {}", field, reason)
            }
            RentalError::SessionError { message } => format!("Session problem: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;
