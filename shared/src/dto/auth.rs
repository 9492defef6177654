use serde::{Deserialize, Serialize};

/// Account role selected at registration.
///
/// Guardians manage accounts for their dependents; dependents get
/// restricted accounts supervised by a guardian.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Guardian,
    Dependent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guardian => "GUARDIAN",
            Role::Dependent => "DEPENDENT",
        }
    }

    /// Parse the value submitted by the role `<select>` control.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "GUARDIAN" => Some(Role::Guardian),
            "DEPENDENT" => Some(Role::Dependent),
            _ => None,
        }
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request.
///
/// Wire names mirror the signup form, so `confirm-password` and
/// `phoneNumber` are renamed rather than snake_cased. The backend ignores
/// `confirm-password`; the equality check happens client-side before the
/// request is built (see [`crate::validation::validate_registration`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirm-password")]
    pub confirm_password: String,
    /// Optional on the form; omitted from the body when not filled in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    pub address: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub role: Role,
}

/// Login success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// Error body returned by the backend on a failed request.
///
/// The `message` field is best-effort: the backend may answer with an empty
/// body or an unrelated shape, so everything is optional here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// The backend-provided message when present and non-empty, otherwise
    /// the endpoint's fixed fallback string.
    pub fn into_message(self, fallback: &str) -> String {
        match self.message {
            Some(message) if !message.trim().is_empty() => message,
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_wire_names() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "p1".to_string(),
            confirm_password: "p1".to_string(),
            age: Some("34".to_string()),
            address: "1 Main St".to_string(),
            phone_number: "12345678".to_string(),
            role: Role::Guardian,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "p1",
                "confirm-password": "p1",
                "age": "34",
                "address": "1 Main St",
                "phoneNumber": "12345678",
                "role": "GUARDIAN",
            })
        );
    }

    #[test]
    fn test_register_request_omits_missing_age() {
        let request = RegisterRequest {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "p1".to_string(),
            confirm_password: "p1".to_string(),
            age: None,
            address: "2 Main St".to_string(),
            phone_number: "87654321".to_string(),
            role: Role::Dependent,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("age").is_none());
        assert_eq!(value["role"], "DEPENDENT");
    }

    #[test]
    fn test_role_from_form_value() {
        assert_eq!(Role::from_form_value("GUARDIAN"), Some(Role::Guardian));
        assert_eq!(Role::from_form_value("DEPENDENT"), Some(Role::Dependent));
        assert_eq!(Role::from_form_value(""), None);
        assert_eq!(Role::from_form_value("guardian"), None);
    }

    #[test]
    fn test_token_response_parses() {
        let response: TokenResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(response.token, "abc123");
    }

    #[test]
    fn test_api_message_prefers_backend_message() {
        let body: ApiMessage = serde_json::from_str(r#"{"message":"username taken"}"#).unwrap();
        assert_eq!(body.into_message("fallback"), "username taken");
    }

    #[test]
    fn test_api_message_falls_back_when_absent_or_blank() {
        let empty: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.into_message("fallback"), "fallback");

        let blank: ApiMessage = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(blank.into_message("fallback"), "fallback");
    }
}
