//! Database utilities for SQLite storage.

use duplex_storage_traits::conversations::types::Conversation;
use duplex_storage_traits::messages::types::Message;
use duplex_storage_traits::profiles::types::Profile;
use duplex_storage_traits::{ConversationId, MessageId, ParticipantId, Timestamp};
use rusqlite::{Result as SqliteResult, Row};

/// Map a `conversations` row (id, participant_a, participant_b, created_at).
pub(crate) fn row_to_conversation(row: &Row) -> SqliteResult<Conversation> {
    Ok(Conversation {
        id: ConversationId::from(row.get::<_, String>(0)?),
        participant_a: ParticipantId::new(row.get::<_, String>(1)?),
        participant_b: ParticipantId::new(row.get::<_, String>(2)?),
        created_at: Timestamp::from_millis(row.get::<_, i64>(3)?),
    })
}

/// Map a `messages` row (id, conversation_id, sender_id, content, created_at).
pub(crate) fn row_to_message(row: &Row) -> SqliteResult<Message> {
    Ok(Message {
        id: MessageId::new(row.get::<_, i64>(0)?),
        conversation_id: ConversationId::from(row.get::<_, String>(1)?),
        sender_id: ParticipantId::new(row.get::<_, String>(2)?),
        content: row.get::<_, String>(3)?,
        created_at: Timestamp::from_millis(row.get::<_, i64>(4)?),
    })
}

/// Map a `profiles` row (participant_id, username, display_color, updated_at).
pub(crate) fn row_to_profile(row: &Row) -> SqliteResult<Profile> {
    Ok(Profile {
        participant_id: ParticipantId::new(row.get::<_, String>(0)?),
        username: row.get::<_, String>(1)?,
        display_color: row.get::<_, Option<String>>(2)?,
        updated_at: Timestamp::from_millis(row.get::<_, i64>(3)?),
    })
}
