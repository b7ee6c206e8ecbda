//! Syntactic validation of candidate link fields.
//!
//! Only format is checked here; code uniqueness is the registry's concern
//! and surfaces later as a `Conflict` from the create call.

use url::Url;

pub const CODE_MIN_LEN: usize = 6;
pub const CODE_MAX_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TargetUrl,
    CustomCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: &'static str,
}

/// Field-name -> error mapping, rebuilt fresh on every validation attempt.
/// Any present entry rejects the candidate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    target_url: Option<FieldError>,
    custom_code: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.target_url.is_none() && self.custom_code.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::TargetUrl => self.target_url.as_ref(),
            Field::CustomCode => self.custom_code.as_ref(),
        }
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|e| e.message)
    }

    pub fn set(&mut self, field: Field, kind: FieldErrorKind, message: &'static str) {
        let entry = FieldError { kind, message };
        match field {
            Field::TargetUrl => self.target_url = Some(entry),
            Field::CustomCode => self.custom_code = Some(entry),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::TargetUrl => self.target_url = None,
            Field::CustomCode => self.custom_code = None,
        }
    }
}

/// True when the code is 6-8 chars, all ASCII alphanumeric.
fn is_valid_code(code: &str) -> bool {
    (CODE_MIN_LEN..=CODE_MAX_LEN).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Explicit Result-typed URL parse; failure is data, not control flow.
fn parse_absolute_url(raw: &str) -> Result<Url, url::ParseError> {
    Url::parse(raw)
}

/// Validate a candidate link. `custom_code` may be empty, meaning "let the
/// registry generate one".
pub fn validate_link_fields(target_url: &str, custom_code: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let target_url = target_url.trim();
    if target_url.is_empty() {
        errors.set(Field::TargetUrl, FieldErrorKind::Required, "URL is required");
    } else if parse_absolute_url(target_url).is_err() {
        errors.set(
            Field::TargetUrl,
            FieldErrorKind::InvalidFormat,
            "Please enter a valid URL",
        );
    }

    let custom_code = custom_code.trim();
    if !custom_code.is_empty() && !is_valid_code(custom_code) {
        errors.set(
            Field::CustomCode,
            FieldErrorKind::InvalidFormat,
            "Code must be 6-8 alphanumeric characters",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candidates() {
        assert!(validate_link_fields("https://example.com", "").is_empty());
        assert!(validate_link_fields("http://localhost:8080/a?b=1", "docs123").is_empty());
        assert!(validate_link_fields("https://example.com/path", "ABCdef12").is_empty());
    }

    #[test]
    fn test_empty_url_is_required() {
        let errors = validate_link_fields("", "");
        let err = errors.get(Field::TargetUrl).unwrap();
        assert_eq!(err.kind, FieldErrorKind::Required);
        assert_eq!(err.message, "URL is required");

        let errors = validate_link_fields("   ", "");
        assert_eq!(
            errors.get(Field::TargetUrl).unwrap().kind,
            FieldErrorKind::Required
        );
    }

    #[test]
    fn test_unparsable_url_is_invalid_format() {
        for bad in ["not a url", "example.com", "/relative/path", "http//x"] {
            let errors = validate_link_fields(bad, "");
            let err = errors.get(Field::TargetUrl).unwrap_or_else(|| {
                panic!("expected rejection for {:?}", bad);
            });
            assert_eq!(err.kind, FieldErrorKind::InvalidFormat, "input: {:?}", bad);
            assert_eq!(err.message, "Please enter a valid URL");
        }
    }

    #[test]
    fn test_code_length_bounds() {
        assert!(validate_link_fields("https://example.com", "abc123").is_empty());
        assert!(validate_link_fields("https://example.com", "abcd1234").is_empty());

        for bad in ["abc12", "abcd12345", "a"] {
            let errors = validate_link_fields("https://example.com", bad);
            let err = errors.get(Field::CustomCode).unwrap();
            assert_eq!(err.kind, FieldErrorKind::InvalidFormat, "input: {:?}", bad);
            assert_eq!(err.message, "Code must be 6-8 alphanumeric characters");
        }
    }

    #[test]
    fn test_code_rejects_non_alphanumeric() {
        for bad in ["abc-12", "abc_123", "abc 12", "abc1235!", "ábc123"] {
            let errors = validate_link_fields("https://example.com", bad);
            assert!(
                errors.get(Field::CustomCode).is_some(),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_empty_code_is_accepted() {
        assert!(validate_link_fields("https://example.com", "").is_empty());
        assert!(validate_link_fields("https://example.com", "  ").is_empty());
    }

    #[test]
    fn test_both_fields_reported_together() {
        let errors = validate_link_fields("", "x");
        assert!(errors.get(Field::TargetUrl).is_some());
        assert!(errors.get(Field::CustomCode).is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = validate_link_fields("", "x");
        errors.clear(Field::CustomCode);
        assert!(errors.get(Field::CustomCode).is_none());
        assert!(errors.get(Field::TargetUrl).is_some());
    }
}
