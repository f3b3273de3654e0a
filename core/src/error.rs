//! Core error taxonomy.
//!
//! Validation failures are user-correctable; `SelfConversation` and
//! `ConversationNotFound` are usage errors; `StorageUnavailable` is the
//! retryable infrastructure bucket, with retry policy left to the caller.
//! The expected first-contact race (`AlreadyExists` from the storage layer)
//! is consumed inside the resolver and never reaches this enum.

use duplex_storage_traits::conversations::error::ConversationError;
use duplex_storage_traits::messages::error::MessageError;
use duplex_storage_traits::profiles::error::ProfileError;

use crate::validate::ValidationError;

/// Errors surfaced by [`DuplexCore`](crate::DuplexCore) operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input rejected by the message validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A conversation was requested between a participant and themselves.
    #[error("cannot open a conversation with yourself")]
    SelfConversation,
    /// The addressed conversation does not exist.
    #[error("conversation not found")]
    ConversationNotFound,
    /// A query parameter was out of range (pagination bounds).
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// The storage collaborator failed; retryable by the caller.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<MessageError> for CoreError {
    fn from(e: MessageError) -> Self {
        match e {
            MessageError::ConversationNotFound => Self::ConversationNotFound,
            MessageError::InvalidParameters(message) => Self::InvalidQuery(message),
            MessageError::DatabaseError(message) => Self::StorageUnavailable(message),
        }
    }
}

impl From<ProfileError> for CoreError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::InvalidParameters(message) => Self::InvalidQuery(message),
            ProfileError::DatabaseError(message) => Self::StorageUnavailable(message),
        }
    }
}

impl From<ConversationError> for CoreError {
    fn from(e: ConversationError) -> Self {
        match e {
            ConversationError::SelfConversation => Self::SelfConversation,
            ConversationError::InvalidParameters(message) => Self::InvalidQuery(message),
            // AlreadyExists is handled where it can occur (the resolver);
            // anywhere else it means the storage layer misbehaved.
            ConversationError::AlreadyExists | ConversationError::DatabaseError(_) => {
                Self::StorageUnavailable(e.to_string())
            }
        }
    }
}
