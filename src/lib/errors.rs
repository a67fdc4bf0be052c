use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Extracts the backend-supplied error detail for inline display, if any.
    ///
    /// Backends answer either with a bare string body or with a JSON object
    /// carrying a nested `message` field; both shapes are surfaced verbatim.
    /// Non-HTTP failures carry no backend detail.
    pub fn backend_detail(&self) -> Option<String> {
        let AppError::Http { message, .. } = self else {
            return None;
        };
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
            if let Some(nested) = value.get("message").and_then(serde_json::Value::as_str) {
                let nested = nested.trim();
                if !nested.is_empty() {
                    return Some(nested.to_string());
                }
            }
            // A JSON body without a message field is backend noise, not a
            // user-facing detail.
            if value.is_object() {
                return None;
            }
        }
        Some(trimmed.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn backend_detail_surfaces_plain_body() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials for this role".to_string(),
        };
        assert_eq!(
            err.backend_detail(),
            Some("Invalid credentials for this role".to_string())
        );
    }

    #[test]
    fn backend_detail_unwraps_nested_message() {
        let err = AppError::Http {
            status: 409,
            message: r#"{"message":"Email already registered","code":"conflict"}"#.to_string(),
        };
        assert_eq!(
            err.backend_detail(),
            Some("Email already registered".to_string())
        );
    }

    #[test]
    fn backend_detail_ignores_empty_and_non_http() {
        let empty = AppError::Http {
            status: 500,
            message: "   ".to_string(),
        };
        assert_eq!(empty.backend_detail(), None);

        let object_without_message = AppError::Http {
            status: 500,
            message: r#"{"error":"boom"}"#.to_string(),
        };
        assert_eq!(object_without_message.backend_detail(), None);

        let network = AppError::Network("connection refused".to_string());
        assert_eq!(network.backend_detail(), None);
    }
}
