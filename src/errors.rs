//! Unified error handling.
//!
//! A macro generates the error enum together with error codes and type names.

use std::fmt;

macro_rules! define_peereval_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PeerEvalError {
            $($variant(String),)*
        }

        impl PeerEvalError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(PeerEvalError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PeerEvalError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(PeerEvalError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl PeerEvalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PeerEvalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_peereval_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    StateConflict("E008", "State Conflict"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
}

impl PeerEvalError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PeerEvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PeerEvalError {}

impl From<sea_orm::DbErr> for PeerEvalError {
    fn from(err: sea_orm::DbErr) -> Self {
        PeerEvalError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PeerEvalError {
    fn from(err: std::io::Error) -> Self {
        PeerEvalError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PeerEvalError {
    fn from(err: serde_json::Error) -> Self {
        PeerEvalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PeerEvalError {
    fn from(err: chrono::ParseError) -> Self {
        PeerEvalError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PeerEvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PeerEvalError::cache_connection("test").code(), "E001");
        assert_eq!(PeerEvalError::database_config("test").code(), "E003");
        assert_eq!(PeerEvalError::validation("test").code(), "E006");
        assert_eq!(PeerEvalError::state_conflict("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PeerEvalError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            PeerEvalError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = PeerEvalError::state_conflict("event is closed");
        let formatted = err.format_simple();
        assert!(formatted.contains("State Conflict"));
        assert!(formatted.contains("event is closed"));
    }
}
