use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Customer API returned {status} for customer '{customer_id}'")]
    UnexpectedStatus { status: u16, customer_id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LookupError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::Http(e) if e.is_timeout() => {
                "The customer API did not answer in time".to_string()
            }
            LookupError::Http(e) if e.is_decode() => {
                "Customer API sent a response that is not a customer record".to_string()
            }
            LookupError::Http(_) => "Could not reach the customer API".to_string(),
            LookupError::UnexpectedStatus { status, customer_id } => format!(
                "Customer API rejected the lookup of '{}' (HTTP {})",
                customer_id, status
            ),
            LookupError::Io(e) => format!("File access failed: {}", e),
            LookupError::ConfigError { message } => format!("Configuration problem: {}", message),
            LookupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            LookupError::ConfigError { .. } | LookupError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_customer() {
        let err = LookupError::UnexpectedStatus {
            status: 404,
            customer_id: "789".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Customer API returned 404 for customer '789'"
        );
        assert!(err.user_friendly_message().contains("HTTP 404"));
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_config_errors_are_classified() {
        let err = LookupError::InvalidConfigValueError {
            field: "customer_api.base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert!(err.is_config_error());
        assert!(err.user_friendly_message().contains("customer_api.base_url"));
    }
}
