use std::fmt;

/// Classified failure from the link registry.
///
/// Everything above the client layer matches on these variants instead of
/// transport-level status codes: `Conflict` and `NotFound` get field- or
/// view-scoped handling, the rest surface as transient notifications.
#[derive(Debug, Clone)]
pub enum RegistryError {
    /// Requested short code is already taken (HTTP 409)
    Conflict(String),
    /// Unknown short code (HTTP 404)
    NotFound(String),
    /// Transport failure: connect, DNS, timeout
    Network(String),
    /// Remote failure (HTTP 5xx)
    Server(String),
    /// Anything uncategorized; handled like Network/Server
    Unknown(String),
}

impl RegistryError {
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::Conflict(_) => "E001",
            RegistryError::NotFound(_) => "E002",
            RegistryError::Network(_) => "E003",
            RegistryError::Server(_) => "E004",
            RegistryError::Unknown(_) => "E005",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            RegistryError::Conflict(_) => "Code Conflict",
            RegistryError::NotFound(_) => "Not Found",
            RegistryError::Network(_) => "Network Error",
            RegistryError::Server(_) => "Server Error",
            RegistryError::Unknown(_) => "Unknown Error",
        }
    }

    /// The underlying message, suitable for toast display.
    pub fn message(&self) -> &str {
        match self {
            RegistryError::Conflict(msg) => msg,
            RegistryError::NotFound(msg) => msg,
            RegistryError::Network(msg) => msg,
            RegistryError::Server(msg) => msg,
            RegistryError::Unknown(msg) => msg,
        }
    }

    /// Format as simple output (CLI/TUI status lines)
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, RegistryError::Conflict(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RegistryError {}

// Convenience constructors
impl RegistryError {
    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        RegistryError::Conflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        RegistryError::NotFound(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        RegistryError::Network(msg.into())
    }

    pub fn server<T: Into<String>>(msg: T) -> Self {
        RegistryError::Server(msg.into())
    }

    pub fn unknown<T: Into<String>>(msg: T) -> Self {
        RegistryError::Unknown(msg.into())
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        RegistryError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Unknown(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = [
            RegistryError::conflict("a"),
            RegistryError::not_found("b"),
            RegistryError::network("c"),
            RegistryError::server("d"),
            RegistryError::unknown("e"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_message_preserved() {
        let err = RegistryError::server("backend exploded");
        assert_eq!(err.message(), "backend exploded");
        assert_eq!(err.format_simple(), "Server Error: backend exploded");
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = RegistryError::not_found("no such code");
        assert_eq!(format!("{}", err), "Not Found: no such code");
    }

    #[test]
    fn test_classification_helpers() {
        assert!(RegistryError::conflict("x").is_conflict());
        assert!(!RegistryError::conflict("x").is_not_found());
        assert!(RegistryError::not_found("x").is_not_found());
        assert!(!RegistryError::network("x").is_conflict());
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RegistryError = parse_err.into();
        assert!(matches!(err, RegistryError::Unknown(_)));
    }

    #[test]
    fn test_is_std_error() {
        let err = RegistryError::unknown("test");
        let _: &dyn std::error::Error = &err;
    }
}
