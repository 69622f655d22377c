use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A monitored supplier chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chat {
    /// Chat identifier.
    pub id: i64,

    /// The linked account this chat belongs to.
    pub account_id: i64,

    /// Contact or group name.
    pub name: String,

    /// Contact phone number.
    pub phone_number: String,

    /// Whether extraction is enabled for this chat.
    pub is_subscribed: bool,

    /// Extraction prompt configured for this chat.
    pub prompt: Option<String>,

    /// Preview of the most recent message.
    pub last_message: Option<String>,

    /// When the most recent message arrived.
    pub last_message_at: Option<DateTime<Utc>>,

    /// Avatar initials; derived from the name when absent.
    pub avatar: Option<String>,
}

/// A message inside a chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Message identifier.
    pub id: i64,

    /// The chat the message belongs to.
    pub chat_id: i64,

    /// Message text.
    pub content: String,

    /// Whether the dashboard user sent it.
    pub is_sent_by_me: bool,

    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
}

/// A reusable extraction prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Template identifier.
    pub id: i64,

    /// Template name.
    pub name: String,

    /// Prompt text.
    pub content: String,
}

/// Product fields the extraction demo produces from a chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedProduct {
    /// Product name.
    pub product_name: String,
    /// Brand name.
    pub brand: String,
    /// Material.
    pub material: String,
    /// Color.
    pub color: String,
    /// Hardware finish.
    pub hardware: String,
    /// Condition grade.
    pub condition: String,
    /// Quoted price.
    pub price: String,
    /// What the sale includes.
    pub includes: String,
}

/// Client-side filter state for the chat list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatFilter {
    /// Case-insensitive search over name; phone numbers match verbatim.
    pub search: String,

    /// Keep only chats with extraction enabled.
    pub subscribed_only: bool,
}

impl ChatFilter {
    /// Apply the filter, preserving catalog order.
    #[must_use]
    pub fn apply(&self, chats: &[Chat]) -> Vec<Chat> {
        let needle = self.search.to_lowercase();
        chats
            .iter()
            .filter(|chat| {
                chat.name.to_lowercase().contains(&needle)
                    || chat.phone_number.contains(&self.search)
            })
            .filter(|chat| !self.subscribed_only || chat.is_subscribed)
            .cloned()
            .collect()
    }
}

/// The `count` most recently active chats, newest first.
#[must_use]
pub fn recent_chats(chats: &[Chat], count: usize) -> Vec<Chat> {
    let mut sorted: Vec<Chat> = chats.to_vec();
    sorted.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn empty_filter_keeps_all_chats() {
        let chats = sample::chats();
        assert_eq!(ChatFilter::default().apply(&chats).len(), chats.len());
    }

    #[test]
    fn search_matches_name_or_phone() {
        let chats = sample::chats();

        let by_name = ChatFilter {
            search: "milano".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&chats).len(), 1);

        let by_phone = ChatFilter {
            search: "+852".to_string(),
            ..Default::default()
        };
        let result = by_phone.apply(&chats);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Hong Kong Dealer");
    }

    #[test]
    fn subscribed_tab_hides_unsubscribed_chats() {
        let chats = sample::chats();
        let filter = ChatFilter {
            subscribed_only: true,
            ..Default::default()
        };

        let result = filter.apply(&chats);
        assert!(!result.is_empty());
        assert!(result.iter().all(|chat| chat.is_subscribed));
        assert!(result.len() < chats.len());
    }

    #[test]
    fn recent_chats_sorts_newest_first() {
        let chats = sample::chats();
        let recent = recent_chats(&chats, 3);

        assert_eq!(recent.len(), 3);
        for pair in recent.windows(2) {
            assert!(pair[0].last_message_at >= pair[1].last_message_at);
        }
    }
}
