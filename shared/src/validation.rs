//! Validation utilities for form submissions.
//!
//! These checks run in the browser before any network call. The form inputs
//! carry the same constraints declaratively (`required`, `pattern`,
//! `min`/`max`), but browsers are not obligated to enforce them, so the
//! submit path re-checks the ones that matter.

use crate::dto::auth::RegisterRequest;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a registration submission.
///
/// A request that fails here must never reach the network; the caller shows
/// the error inline and stays on the form.
pub fn validate_registration(request: &RegisterRequest) -> ValidationResult {
    if request.password != request.confirm_password {
        return ValidationResult::err("Passwords do not match.");
    }

    let phone = validate_phone_number(&request.phone_number);
    if !phone.is_valid {
        return phone;
    }

    validate_age(request.age.as_deref())
}

/// Validate the phone number against the form's `[0-9]{8}` pattern.
pub fn validate_phone_number(phone_number: &str) -> ValidationResult {
    if phone_number.len() != 8 || !phone_number.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number must be exactly 8 digits.");
    }

    ValidationResult::ok()
}

/// Validate the optional age field. Absent is fine; present must parse to
/// a number in 0..=120.
pub fn validate_age(age: Option<&str>) -> ValidationResult {
    let Some(age) = age else {
        return ValidationResult::ok();
    };

    match age.parse::<u32>() {
        Ok(value) if value <= 120 => ValidationResult::ok(),
        _ => ValidationResult::err("Age must be a number between 0 and 120."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::auth::Role;

    fn request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "p1".to_string(),
            confirm_password: "p1".to_string(),
            age: None,
            address: "1 Main St".to_string(),
            phone_number: "12345678".to_string(),
            role: Role::Guardian,
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_registration(&request()).is_valid);
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut mismatched = request();
        mismatched.confirm_password = "p2".to_string();

        let result = validate_registration(&mismatched);
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Passwords do not match."));
    }

    #[test]
    fn test_phone_number_pattern() {
        assert!(validate_phone_number("12345678").is_valid);
        assert!(!validate_phone_number("1234567").is_valid); // too short
        assert!(!validate_phone_number("123456789").is_valid); // too long
        assert!(!validate_phone_number("1234567a").is_valid);
        assert!(!validate_phone_number("").is_valid);
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(None).is_valid);
        assert!(validate_age(Some("0")).is_valid);
        assert!(validate_age(Some("120")).is_valid);
        assert!(!validate_age(Some("121")).is_valid);
        assert!(!validate_age(Some("-3")).is_valid);
        assert!(!validate_age(Some("abc")).is_valid);
    }
}
