//! Implementation of ConversationStorage trait for SQLite storage.

use duplex_storage_traits::conversations::ConversationStorage;
use duplex_storage_traits::conversations::error::ConversationError;
use duplex_storage_traits::conversations::types::{Conversation, ParticipantPair};
use duplex_storage_traits::{ConversationId, ParticipantId};
use rusqlite::{OptionalExtension, params};

use crate::{DuplexSqliteStorage, db};

#[inline]
fn into_conversation_err<T>(e: T) -> ConversationError
where
    T: std::error::Error,
{
    ConversationError::DatabaseError(e.to_string())
}

impl ConversationStorage for DuplexSqliteStorage {
    fn find_conversation(
        &self,
        pair: &ParticipantPair,
    ) -> Result<Option<Conversation>, ConversationError> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, participant_a, participant_b, created_at
                     FROM conversations
                     WHERE participant_a = ? AND participant_b = ?",
                )
                .map_err(into_conversation_err)?;

            stmt.query_row(
                params![pair.low().as_str(), pair.high().as_str()],
                db::row_to_conversation,
            )
            .optional()
            .map_err(into_conversation_err)
        })
    }

    fn find_conversation_by_id(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, ConversationError> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, participant_a, participant_b, created_at
                     FROM conversations
                     WHERE id = ?",
                )
                .map_err(into_conversation_err)?;

            stmt.query_row(params![id.as_str()], db::row_to_conversation)
                .optional()
                .map_err(into_conversation_err)
        })
    }

    fn insert_conversation(&self, conversation: Conversation) -> Result<(), ConversationError> {
        self.with_connection(|conn| {
            let result = conn.execute(
                "INSERT INTO conversations (id, participant_a, participant_b, created_at)
                 VALUES (?, ?, ?, ?)",
                params![
                    conversation.id.as_str(),
                    conversation.participant_a.as_str(),
                    conversation.participant_b.as_str(),
                    conversation.created_at.as_millis(),
                ],
            );

            match result {
                Ok(_) => Ok(()),
                // The UNIQUE (participant_a, participant_b) constraint is the
                // arbiter of concurrent first-contact inserts: the loser gets
                // this typed error and re-reads the winner's row.
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    Err(ConversationError::AlreadyExists)
                }
                Err(e) => Err(into_conversation_err(e)),
            }
        })
    }

    fn conversations_for(
        &self,
        participant: &ParticipantId,
    ) -> Result<Vec<Conversation>, ConversationError> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, participant_a, participant_b, created_at
                     FROM conversations
                     WHERE participant_a = ?1 OR participant_b = ?1
                     ORDER BY created_at DESC, id ASC",
                )
                .map_err(into_conversation_err)?;

            let rows = stmt
                .query_map(params![participant.as_str()], db::row_to_conversation)
                .map_err(into_conversation_err)?;

            rows.collect::<Result<Vec<_>, _>>()
                .map_err(into_conversation_err)
        })
    }
}
