//! Messages module
//!
//! This module is responsible for storing and retrieving messages.
//!
//! Messages form an append-only log scoped to a conversation: the storage
//! layer assigns both the timestamp and the monotone id at append time, so
//! the per-conversation order never depends on client clocks.
//!
//! Here we also define the storage traits that are used to store and
//! retrieve messages.

use crate::ids::{ConversationId, ParticipantId};

pub mod error;
pub mod types;

use self::error::MessageError;
use self::types::*;

/// Default limit for history queries to prevent unbounded memory usage
pub const DEFAULT_MESSAGE_LIMIT: usize = 1000;

/// Maximum allowed limit for history queries to prevent resource exhaustion
pub const MAX_MESSAGE_LIMIT: usize = 10000;

/// Pagination parameters for querying messages
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Maximum number of messages to return
    pub limit: Option<usize>,
    /// Number of messages to skip
    pub offset: Option<usize>,
}

impl Pagination {
    /// Create a new Pagination with specified limit and offset
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self { limit, offset }
    }

    /// Get the limit value, using default if not specified
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_MESSAGE_LIMIT)
    }

    /// Get the offset value, using 0 if not specified
    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_MESSAGE_LIMIT),
            offset: Some(0),
        }
    }
}

/// Validate and resolve optional pagination into concrete `(limit, offset)`.
///
/// Shared by every backend so the bounds checks cannot drift apart.
///
/// # Errors
///
/// Returns [`MessageError::InvalidParameters`] if `limit` is 0 or exceeds
/// [`MAX_MESSAGE_LIMIT`].
pub fn resolve_pagination(pagination: Option<Pagination>) -> Result<(usize, usize), MessageError> {
    let pagination = pagination.unwrap_or_default();
    let limit = pagination.limit();
    if limit == 0 {
        return Err(MessageError::InvalidParameters(
            "limit must be greater than 0".to_string(),
        ));
    }
    if limit > MAX_MESSAGE_LIMIT {
        return Err(MessageError::InvalidParameters(format!(
            "limit {} exceeds maximum of {}",
            limit, MAX_MESSAGE_LIMIT
        )));
    }
    Ok((limit, pagination.offset()))
}

/// Storage traits for the messages module
pub trait MessageStorage {
    /// Append a message to a conversation's log.
    ///
    /// The storage layer assigns `created_at` and the monotone `id`; the
    /// returned [`Message`] is the committed record. Content is expected to
    /// be already validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::ConversationNotFound`] when the conversation
    /// does not exist.
    fn append_message(
        &self,
        conversation_id: &ConversationId,
        sender_id: &ParticipantId,
        content: &str,
    ) -> Result<Message, MessageError>;

    /// Ordered history snapshot for a conversation, oldest first.
    ///
    /// Messages are ordered `created_at ASC, id ASC` and read as one
    /// consistent snapshot: concurrent appends during the call either
    /// appear entirely or not at all, never as a partial merge.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::ConversationNotFound`] for an unknown
    /// conversation, [`MessageError::InvalidParameters`] for out-of-range
    /// pagination (see [`resolve_pagination`]).
    fn conversation_messages(
        &self,
        conversation_id: &ConversationId,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Message>, MessageError>;

    /// The newest message of a conversation, or `None` when it has none.
    ///
    /// Equivalent to the last element of the full history, but may be
    /// implemented more efficiently. Used for chat-list previews.
    fn last_message(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<Message>, MessageError>;
}
