//! Tests for the API client.
//!
//! Validates URL construction for both services, rejection-body parsing,
//! and the silent-failure policy for the accounts service.

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use crate::api::{AuthError, LimelightClient, rejection, silently_empty};

    fn client() -> LimelightClient {
        LimelightClient::new("/api", "http://localhost:3000")
    }

    #[test]
    fn session_urls_are_same_origin() {
        let client = client();

        assert_eq!(client.session_url("user"), "/api/user");
        assert_eq!(client.session_url("login"), "/api/login");
        assert_eq!(client.session_url("register"), "/api/register");
        assert_eq!(client.session_url("logout"), "/api/logout");
        assert_eq!(client.session_url("/user"), "/api/user");
    }

    #[test]
    fn accounts_urls_use_absolute_base() {
        let client = client();

        assert_eq!(
            client.accounts_url("accounts/1"),
            "http://localhost:3000/api/auths/accounts/1"
        );
        assert_eq!(
            client.accounts_url("accounts/1/status-summary"),
            "http://localhost:3000/api/auths/accounts/1/status-summary"
        );
        assert_eq!(
            client.accounts_url("42"),
            "http://localhost:3000/api/auths/42"
        );
        assert_eq!(
            client.accounts_url("fetch?initialize=true"),
            "http://localhost:3000/api/auths/fetch?initialize=true"
        );
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let client = LimelightClient::new("/api/", "http://localhost:3000/");

        assert_eq!(client.session_url("user"), "/api/user");
        assert_eq!(
            client.accounts_url("accounts/1"),
            "http://localhost:3000/api/auths/accounts/1"
        );
    }

    #[test]
    fn rejection_uses_server_message() {
        let error = rejection(r#"{"message":"bad credentials"}"#, "Login failed");

        match error {
            AuthError::Rejected { message } => assert_eq!(message, "bad credentials"),
            AuthError::Transport(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn rejection_falls_back_on_unparsable_body() {
        for body in ["", "<html>502</html>", r#"{"error":"nope"}"#] {
            let error = rejection(body, "Login failed");
            match error {
                AuthError::Rejected { message } => assert_eq!(message, "Login failed"),
                AuthError::Transport(_) => panic!("expected rejection"),
            }
        }
    }

    #[test]
    fn rejection_message_is_the_display_text() {
        let error = rejection(r#"{"message":"bad credentials"}"#, "Login failed");
        assert_eq!(error.to_string(), "bad credentials");
    }

    #[test]
    fn transport_and_backend_errors_render_as_empty_state() {
        // Network failure: no status at all.
        assert!(silently_empty(None));
        // Auth and server errors render as "no accounts" so the page
        // stays usable.
        assert!(silently_empty(Some(StatusCode::UNAUTHORIZED)));
        assert!(silently_empty(Some(StatusCode::INTERNAL_SERVER_ERROR)));
    }

    #[test]
    fn other_statuses_surface_an_error() {
        assert!(!silently_empty(Some(StatusCode::NOT_FOUND)));
        assert!(!silently_empty(Some(StatusCode::BAD_REQUEST)));
        assert!(!silently_empty(Some(StatusCode::FORBIDDEN)));
        assert!(!silently_empty(Some(StatusCode::BAD_GATEWAY)));
    }
}
