use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the session API.
///
/// Immutable from the client's perspective once fetched; the session either
/// holds exactly one of these or nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,
}

/// Credentials for `POST /api/login`. Transient; never stored beyond the
/// call that uses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Credentials for `POST /api/register`. Transient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The requested username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Error body shape used by the session API on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    /// Human-readable message describing the rejection.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_round_trip() {
        let user = User {
            id: 7,
            username: "marla".to_string(),
            email: "marla@example.com".to_string(),
        };

        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, user);
    }

    #[test]
    fn user_deserializes_from_api_shape() {
        let body = r#"{"id":1,"username":"demo","email":"demo@example.com"}"#;
        let user: User = serde_json::from_str(body).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "demo");
        assert_eq!(user.email, "demo@example.com");
    }

    #[test]
    fn login_request_serializes_expected_fields() {
        let request = LoginRequest {
            email: "demo@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "demo@example.com");
        assert_eq!(value["password"], "hunter2");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn api_message_parses_rejection_body() {
        let body = r#"{"message":"bad credentials"}"#;
        let parsed: ApiMessage = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.message, "bad credentials");
    }
}
