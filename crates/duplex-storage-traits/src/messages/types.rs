//! Types for the messages module

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::ids::{ConversationId, MessageId, ParticipantId};
use crate::timestamp::Timestamp;

/// An immutable, ordered, content-bearing record owned by one conversation.
///
/// Messages never move between conversations and are never edited or
/// deleted. `created_at` and `id` are assigned at the storage layer on
/// append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Storage-assigned identifier, monotonically creation-ordered.
    pub id: MessageId,
    /// The owning conversation.
    pub conversation_id: ConversationId,
    /// The participant who authored the message.
    pub sender_id: ParticipantId,
    /// Validated text, 1-5000 characters after trimming.
    pub content: String,
    /// Server-assigned timestamp; defines the total order within a
    /// conversation, with `id` breaking ties.
    pub created_at: Timestamp,
}

impl Message {
    /// Compares two messages for history ordering (oldest first).
    ///
    /// Messages are sorted ascending by:
    /// 1. `created_at`
    /// 2. `id` (insertion sequence, as a tiebreaker)
    ///
    /// This ordering is the single source of truth used by all storage
    /// implementations, so history reads agree across backends.
    pub fn history_order_cmp(&self, other: &Self) -> Ordering {
        Self::compare_history_keys(self.created_at, self.id, other.created_at, other.id)
    }

    /// Compares history-order keys without requiring full [`Message`] structs.
    pub fn compare_history_keys(
        a_created_at: Timestamp,
        a_id: MessageId,
        b_created_at: Timestamp,
        b_id: MessageId,
    ) -> Ordering {
        a_created_at
            .cmp(&b_created_at)
            .then_with(|| a_id.cmp(&b_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_history_keys_created_at_wins() {
        // Later created_at sorts after, even with a smaller id.
        let result = Message::compare_history_keys(
            Timestamp::from_millis(200),
            MessageId::new(1),
            Timestamp::from_millis(100),
            MessageId::new(9),
        );
        assert_eq!(result, Ordering::Greater);
    }

    #[test]
    fn test_compare_history_keys_id_tiebreaker() {
        // Same created_at: the insertion sequence decides.
        let result = Message::compare_history_keys(
            Timestamp::from_millis(100),
            MessageId::new(2),
            Timestamp::from_millis(100),
            MessageId::new(1),
        );
        assert_eq!(result, Ordering::Greater);
    }

    #[test]
    fn test_compare_history_keys_equal() {
        let result = Message::compare_history_keys(
            Timestamp::from_millis(100),
            MessageId::new(1),
            Timestamp::from_millis(100),
            MessageId::new(1),
        );
        assert_eq!(result, Ordering::Equal);
    }

    #[test]
    fn test_history_order_cmp_sorts_oldest_first() {
        let older = Message {
            id: MessageId::new(1),
            conversation_id: ConversationId::generate(),
            sender_id: ParticipantId::new("alice"),
            content: "hello".to_string(),
            created_at: Timestamp::from_millis(100),
        };
        let newer = Message {
            created_at: Timestamp::from_millis(200),
            id: MessageId::new(2),
            ..older.clone()
        };

        let mut messages = vec![newer.clone(), older.clone()];
        messages.sort_by(|a, b| a.history_order_cmp(b));
        assert_eq!(messages, vec![older, newer]);
    }

    #[test]
    fn test_message_serialization() {
        let message = Message {
            id: MessageId::new(7),
            conversation_id: ConversationId::from("conv-1".to_string()),
            sender_id: ParticipantId::new("alice"),
            content: "Test message".to_string(),
            created_at: Timestamp::from_millis(1_677_721_600_000),
        };

        let serialized = serde_json::to_value(&message).unwrap();
        assert_eq!(serialized["id"], serde_json::json!(7));
        assert_eq!(serialized["sender_id"], serde_json::json!("alice"));
        assert_eq!(serialized["content"], serde_json::json!("Test message"));

        let back: Message = serde_json::from_value(serialized).unwrap();
        assert_eq!(back, message);
    }
}
