use limelight_shared::models::{
    AccountRecord, Envelope, LinkedAccount, LoginRequest, QrCode, RegisterRequest, StatusSummary,
    User, map_accounts,
};
use once_cell::unsync::OnceCell;
use reqwest::{Client, Error, StatusCode};
use thiserror::Error as ThisError;

use crate::config::FrontendConfig;

const DEFAULT_SESSION_BASE: &str = "/api";

thread_local! {
    static SHARED_CLIENT: OnceCell<LimelightClient> = OnceCell::new();
}

/// Why a session-mutating call failed. Exactly two kinds: the server said
/// no, or it could not be reached at all. Neither is retried.
#[derive(Debug, ThisError)]
pub enum AuthError {
    /// The remote rejected the request; carries the server-provided message.
    #[error("{message}")]
    Rejected {
        /// Human-readable rejection reason, shown verbatim in the UI.
        message: String,
    },

    /// The request never produced a usable response.
    #[error("Unable to reach the server")]
    Transport(#[from] Error),
}

/// Build the rejection error for a non-2xx session response, preferring the
/// server's `{message}` body over the generic fallback.
pub(crate) fn rejection(body: &str, fallback: &str) -> AuthError {
    let message = serde_json::from_str::<limelight_shared::models::ApiMessage>(body)
        .map_or_else(|_| fallback.to_string(), |parsed| parsed.message);
    AuthError::Rejected { message }
}

/// Whether an accounts-service failure renders as the empty state instead of
/// an error banner. Transport failures, 401 and 500 are silent so the
/// dashboard stays usable when the backend is unreachable.
pub fn silently_empty(status: Option<StatusCode>) -> bool {
    match status {
        None => true,
        Some(status) => {
            status == StatusCode::UNAUTHORIZED || status == StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// HTTP client for the session API and the accounts service.
///
/// Session calls are same-origin, so the session cookie rides along on the
/// fetch defaults; the client never reads or parses it. Accounts-service
/// calls use an absolute base URL and attach no authorization header.
#[derive(Clone, Debug)]
pub struct LimelightClient {
    session_base: String,
    accounts_base: String,
    client: Client,
}

impl LimelightClient {
    /// Create a client with explicit base URLs.
    pub fn new(session_base: &str, accounts_base: &str) -> Self {
        Self {
            session_base: session_base.trim_end_matches('/').to_string(),
            accounts_base: accounts_base.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(DEFAULT_SESSION_BASE, &config.accounts_service_url)
            })
            .clone()
        })
    }

    pub(crate) fn session_url(&self, path: &str) -> String {
        format!("{}/{}", self.session_base, path.trim_start_matches('/'))
    }

    pub(crate) fn accounts_url(&self, path: &str) -> String {
        format!(
            "{}/api/auths/{}",
            self.accounts_base,
            path.trim_start_matches('/')
        )
    }

    /// Ask who the ambient session cookie belongs to. Any non-200 outcome is
    /// reported as an error the caller treats as anonymous.
    pub async fn current_user(&self) -> Result<User, Error> {
        let response = self.client.get(self.session_url("user")).send().await?;
        response.error_for_status()?.json().await
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<User, AuthError> {
        let response = self
            .client
            .post(self.session_url("login"))
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(rejection(&body, "Login failed"))
        }
    }

    /// Create an account and start a session for it.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<User, AuthError> {
        let response = self
            .client
            .post(self.session_url("register"))
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(rejection(&body, "Registration failed"))
        }
    }

    /// Terminate the current session. The response is ignored; callers clear
    /// the local session regardless of the outcome.
    pub async fn logout(&self) -> Result<(), Error> {
        self.client.post(self.session_url("logout")).send().await?;
        Ok(())
    }

    /// List the organization's linked accounts, mapped into local shapes.
    pub async fn list_accounts(&self, org_id: i64) -> Result<Vec<LinkedAccount>, Error> {
        let url = self.accounts_url(&format!("accounts/{org_id}"));
        let response = self.client.get(url).send().await?;
        let envelope: Envelope<Vec<AccountRecord>> =
            response.error_for_status()?.json().await?;
        Ok(map_accounts(envelope.into_data().unwrap_or_default()))
    }

    /// Active/inactive counts for the organization's linked accounts.
    pub async fn status_summary(&self, org_id: i64) -> Result<StatusSummary, Error> {
        let url = self.accounts_url(&format!("accounts/{org_id}/status-summary"));
        let response = self.client.get(url).send().await?;
        let envelope: Envelope<StatusSummary> = response.error_for_status()?.json().await?;
        Ok(envelope.into_data().unwrap_or_default())
    }

    /// Disconnect a linked account by id.
    pub async fn disconnect_account(&self, account_id: i64) -> Result<(), Error> {
        let url = self.accounts_url(&account_id.to_string());
        self.client
            .delete(url)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Start a linking session and fetch its QR code.
    pub async fn fetch_qr_code(&self) -> Result<QrCode, Error> {
        let url = self.accounts_url("fetch?initialize=true");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }
}
