//! User record as returned by the backend, and the login request body.

use serde::{Deserialize, Serialize};

/// An application user as the backend serves it.
///
/// Field names follow the backend's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub age: i64,
    /// Subscriber flag.
    pub is_pro: bool,
    pub mobile: String,
    pub last_name: String,
    pub first_name: String,
}

impl User {
    /// `"First Last"`, used by the terminal renderer.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub first_name: String,
}

impl LoginPayload {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_camel_case() {
        let json = r#"{
            "id": 1,
            "age": 34,
            "isPro": true,
            "mobile": "07700 900123",
            "lastName": "Smith",
            "firstName": "Alice"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.age, 34);
        assert!(user.is_pro);
        assert_eq!(user.mobile, "07700 900123");
        assert_eq!(user.full_name(), "Alice Smith");
    }

    #[test]
    fn user_missing_field_is_rejected() {
        let json = r#"{"id": 1, "age": 34, "isPro": false, "mobile": "", "lastName": "Smith"}"#;
        let err = serde_json::from_str::<User>(json).unwrap_err();
        assert!(err.to_string().contains("firstName"), "got: {err}");
    }

    #[test]
    fn login_payload_serializes_first_name() {
        let body = serde_json::to_value(LoginPayload::new("Alice")).unwrap();
        assert_eq!(body, serde_json::json!({ "firstName": "Alice" }));
    }
}
