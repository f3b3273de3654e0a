//! Implementation of MessageStorage trait for SQLite storage.

use duplex_storage_traits::messages::error::MessageError;
use duplex_storage_traits::messages::types::Message;
use duplex_storage_traits::messages::{MessageStorage, Pagination, resolve_pagination};
use duplex_storage_traits::{ConversationId, MessageId, ParticipantId, Timestamp};
use rusqlite::{Connection, OptionalExtension, params};

use crate::{DuplexSqliteStorage, db};

#[inline]
fn into_message_err<T>(e: T) -> MessageError
where
    T: std::error::Error,
{
    MessageError::DatabaseError(e.to_string())
}

fn conversation_exists(conn: &Connection, conversation_id: &ConversationId) -> Result<bool, MessageError> {
    conn.query_row(
        "SELECT 1 FROM conversations WHERE id = ?",
        params![conversation_id.as_str()],
        |row| row.get::<_, i64>(0),
    )
    .optional()
    .map(|found| found.is_some())
    .map_err(into_message_err)
}

impl MessageStorage for DuplexSqliteStorage {
    fn append_message(
        &self,
        conversation_id: &ConversationId,
        sender_id: &ParticipantId,
        content: &str,
    ) -> Result<Message, MessageError> {
        self.with_connection(|conn| {
            if !conversation_exists(conn, conversation_id)? {
                return Err(MessageError::ConversationNotFound);
            }

            // created_at is assigned here, at the storage layer, so the
            // per-conversation order never trusts a client clock.
            let created_at = Timestamp::now();
            let id: i64 = conn
                .query_row(
                    "INSERT INTO messages (conversation_id, sender_id, content, created_at)
                     VALUES (?, ?, ?, ?)
                     RETURNING id",
                    params![
                        conversation_id.as_str(),
                        sender_id.as_str(),
                        content,
                        created_at.as_millis(),
                    ],
                    |row| row.get(0),
                )
                .map_err(into_message_err)?;

            Ok(Message {
                id: MessageId::new(id),
                conversation_id: conversation_id.clone(),
                sender_id: sender_id.clone(),
                content: content.to_owned(),
                created_at,
            })
        })
    }

    fn conversation_messages(
        &self,
        conversation_id: &ConversationId,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Message>, MessageError> {
        let (limit, offset) = resolve_pagination(pagination)?;

        self.with_connection(|conn| {
            if !conversation_exists(conn, conversation_id)? {
                return Err(MessageError::ConversationNotFound);
            }

            // A single statement on the shared connection: the snapshot is
            // consistent even while other participants append.
            let mut stmt = conn
                .prepare(
                    "SELECT id, conversation_id, sender_id, content, created_at
                     FROM messages
                     WHERE conversation_id = ?
                     ORDER BY created_at ASC, id ASC
                     LIMIT ? OFFSET ?",
                )
                .map_err(into_message_err)?;

            let rows = stmt
                .query_map(
                    params![conversation_id.as_str(), limit as i64, offset as i64],
                    db::row_to_message,
                )
                .map_err(into_message_err)?;

            rows.collect::<Result<Vec<_>, _>>().map_err(into_message_err)
        })
    }

    fn last_message(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<Message>, MessageError> {
        self.with_connection(|conn| {
            if !conversation_exists(conn, conversation_id)? {
                return Err(MessageError::ConversationNotFound);
            }

            let mut stmt = conn
                .prepare(
                    "SELECT id, conversation_id, sender_id, content, created_at
                     FROM messages
                     WHERE conversation_id = ?
                     ORDER BY created_at DESC, id DESC
                     LIMIT 1",
                )
                .map_err(into_message_err)?;

            stmt.query_row(params![conversation_id.as_str()], db::row_to_message)
                .optional()
                .map_err(into_message_err)
        })
    }
}
