//! Conversations module
//!
//! This module is responsible for storing and retrieving conversations:
//! the unique relationship record between exactly two participants.
//!
//! A conversation is looked up by its canonical participant pair or by id.
//! Here we also define the storage traits that are used to store and
//! retrieve conversations.

use crate::ids::{ConversationId, ParticipantId};

pub mod error;
pub mod types;

use self::error::ConversationError;
use self::types::*;

/// Storage traits for the conversations module
pub trait ConversationStorage {
    /// Find the conversation for a canonical participant pair.
    ///
    /// Because the pair is canonicalized before storage, a single equality
    /// lookup covers both orderings of the two participants.
    fn find_conversation(
        &self,
        pair: &ParticipantPair,
    ) -> Result<Option<Conversation>, ConversationError>;

    /// Find a conversation by id.
    fn find_conversation_by_id(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, ConversationError>;

    /// Insert a newly created conversation.
    ///
    /// Fails with [`ConversationError::AlreadyExists`] when a conversation
    /// for the same participant pair is already stored. Callers racing on
    /// first contact must treat that error as "somebody else won" and
    /// re-read instead of propagating it; the uniqueness guarantee is what
    /// keeps the pair-to-conversation mapping single-valued under
    /// concurrent creation.
    fn insert_conversation(&self, conversation: Conversation) -> Result<(), ConversationError>;

    /// All conversations a participant takes part in, newest first.
    fn conversations_for(
        &self,
        participant: &ParticipantId,
    ) -> Result<Vec<Conversation>, ConversationError>;
}
