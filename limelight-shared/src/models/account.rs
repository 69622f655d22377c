use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response wrapper used by every accounts-service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// Whether the service considered the request successful.
    pub success: bool,

    /// The payload; absent on unsuccessful responses.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload of a successful envelope. Unsuccessful or empty
    /// envelopes yield `None`, which callers render as the empty state.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// A linked-account row as the accounts service sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRecord {
    /// Account identifier.
    pub id: i64,

    /// Identifier of the user who linked the account.
    #[serde(default)]
    pub created_by_id: Option<i64>,

    /// E.164-ish phone number, when the service knows it.
    #[serde(default)]
    pub phone_number: Option<String>,

    /// Display name, when one was set at link time.
    #[serde(default)]
    pub name: Option<String>,

    /// Lifecycle status; `"active"` is the only state treated as connected.
    pub status: String,

    /// When the account was linked.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last observed activity.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AccountRecord {
    /// Map the wire row into the dashboard's local shape, applying the
    /// fallbacks for fields the service may omit.
    #[must_use]
    pub fn into_linked(self) -> LinkedAccount {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("Account {}", self.id));
        let phone_number = self
            .phone_number
            .filter(|phone| !phone.is_empty())
            .unwrap_or_else(|| "No phone number".to_string());

        LinkedAccount {
            id: self.id,
            user_id: self.created_by_id.unwrap_or(1),
            phone_number,
            name,
            is_active: self.status == "active",
            connected_at: self.created_at,
            last_activity: self.updated_at,
        }
    }
}

/// A connected messaging account in the shape the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedAccount {
    /// Account identifier.
    pub id: i64,

    /// Identifier of the owning user.
    pub user_id: i64,

    /// Display phone number.
    pub phone_number: String,

    /// Display name.
    pub name: String,

    /// Whether the account is currently connected.
    pub is_active: bool,

    /// When the account was linked.
    pub connected_at: Option<DateTime<Utc>>,

    /// Last observed activity.
    pub last_activity: Option<DateTime<Utc>>,
}

/// Map a full accounts-service payload into local shapes.
#[must_use]
pub fn map_accounts(records: Vec<AccountRecord>) -> Vec<LinkedAccount> {
    records.into_iter().map(AccountRecord::into_linked).collect()
}

/// Active/inactive counts from the status-summary endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSummary {
    /// Number of accounts in the `active` state.
    #[serde(default)]
    pub active: u32,

    /// Number of accounts in any other state.
    #[serde(default)]
    pub inactive: u32,
}

impl StatusSummary {
    /// Total number of linked accounts.
    #[must_use]
    pub fn total(self) -> u32 {
        self.active + self.inactive
    }
}

/// Payload of the QR-code linking endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QrCode {
    /// The QR code rendered as an image data URL.
    #[serde(rename = "qrDataURL")]
    pub qr_data_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, status: &str) -> AccountRecord {
        AccountRecord {
            id,
            created_by_id: Some(4),
            phone_number: Some("+1".to_string()),
            name: Some("A".to_string()),
            status: status.to_string(),
            created_at: "2023-04-12T10:00:00Z".parse().ok(),
            updated_at: "2023-04-13T10:00:00Z".parse().ok(),
        }
    }

    #[test]
    fn active_record_maps_to_active_account() {
        let mapped = map_accounts(vec![record(1, "active")]);

        assert_eq!(mapped.len(), 1);
        let account = &mapped[0];
        assert_eq!(account.id, 1);
        assert!(account.is_active);
        assert_eq!(account.phone_number, "+1");
        assert_eq!(account.name, "A");
    }

    #[test]
    fn non_active_status_maps_to_inactive() {
        for status in ["pending", "disconnected", "ACTIVE", ""] {
            let account = record(2, status).into_linked();
            assert!(!account.is_active, "status {status:?} should be inactive");
        }
    }

    #[test]
    fn missing_fields_get_fallbacks() {
        let sparse = AccountRecord {
            id: 9,
            created_by_id: None,
            phone_number: None,
            name: None,
            status: "active".to_string(),
            created_at: None,
            updated_at: None,
        };

        let account = sparse.into_linked();
        assert_eq!(account.user_id, 1);
        assert_eq!(account.phone_number, "No phone number");
        assert_eq!(account.name, "Account 9");
    }

    #[test]
    fn envelope_parses_account_list() {
        let body = r#"{
            "success": true,
            "data": [
                {"id":1,"status":"active","phone_number":"+1","name":"A","created_at":"2023-04-12T10:00:00Z"}
            ]
        }"#;

        let envelope: Envelope<Vec<AccountRecord>> = serde_json::from_str(body).unwrap();
        let mapped = map_accounts(envelope.into_data().unwrap_or_default());

        assert_eq!(mapped.len(), 1);
        assert!(mapped[0].is_active);
    }

    #[test]
    fn unsuccessful_envelope_yields_no_data() {
        let body = r#"{"success": false, "data": null}"#;
        let envelope: Envelope<Vec<AccountRecord>> = serde_json::from_str(body).unwrap();
        assert!(envelope.into_data().is_none());
    }

    #[test]
    fn status_summary_totals_and_defaults() {
        let summary: StatusSummary = serde_json::from_str(r#"{"active":3}"#).unwrap();
        assert_eq!(summary.active, 3);
        assert_eq!(summary.inactive, 0);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn qr_code_uses_wire_field_name() {
        let body = r#"{"qrDataURL":"data:image/png;base64,abc"}"#;
        let qr: QrCode = serde_json::from_str(body).unwrap();
        assert_eq!(qr.qr_data_url, "data:image/png;base64,abc");
    }
}
