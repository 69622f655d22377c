use serde::{Deserialize, Serialize};

/// User-tunable dashboard preferences.
///
/// Persisted best-effort in browser local storage; every field has the
/// product default so a missing or unreadable store falls back cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// UI language code.
    pub language: String,

    /// Display timezone.
    pub timezone: String,

    /// Date format pattern used by the formatting helpers.
    pub date_format: String,

    /// Dark color scheme.
    pub dark_mode: bool,

    /// Denser list layout.
    pub compact_mode: bool,

    /// Model used for chat extraction.
    pub ai_model: String,

    /// Sampling temperature, 0–100.
    pub temperature: u8,

    /// Process new messages automatically.
    pub auto_processing: bool,

    /// Send email notifications.
    pub email_notifications: bool,

    /// Send browser notifications.
    pub browser_notifications: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC-8".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            dark_mode: false,
            compact_mode: false,
            ai_model: "gpt-4".to_string(),
            temperature: 70,
            auto_processing: true,
            email_notifications: true,
            browser_notifications: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_defaults() {
        let settings = WorkspaceSettings::default();

        assert_eq!(settings.language, "en");
        assert_eq!(settings.date_format, "MM/DD/YYYY");
        assert!(!settings.dark_mode);
        assert_eq!(settings.temperature, 70);
        assert!(settings.auto_processing);
        assert!(!settings.browser_notifications);
    }

    #[test]
    fn partial_payload_falls_back_to_defaults() {
        let settings: WorkspaceSettings =
            serde_json::from_str(r#"{"dark_mode":true,"temperature":30}"#).unwrap();

        assert!(settings.dark_mode);
        assert_eq!(settings.temperature, 30);
        assert_eq!(settings.ai_model, "gpt-4");
        assert_eq!(settings.timezone, "UTC-8");
    }
}
