//! Memory-based implementation of the ConversationStorage trait

use duplex_storage_traits::conversations::ConversationStorage;
use duplex_storage_traits::conversations::error::ConversationError;
use duplex_storage_traits::conversations::types::{Conversation, ParticipantPair};
use duplex_storage_traits::{ConversationId, ParticipantId};

use crate::DuplexMemoryStorage;

impl ConversationStorage for DuplexMemoryStorage {
    fn find_conversation(
        &self,
        pair: &ParticipantPair,
    ) -> Result<Option<Conversation>, ConversationError> {
        let inner = self.inner.read();
        Ok(inner
            .conversations_by_pair
            .get(pair)
            .and_then(|id| inner.conversations.get(id))
            .cloned())
    }

    fn find_conversation_by_id(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, ConversationError> {
        let inner = self.inner.read();
        Ok(inner.conversations.get(id).cloned())
    }

    fn insert_conversation(&self, conversation: Conversation) -> Result<(), ConversationError> {
        // Single write lock: the contains-check and the insert are atomic,
        // which is what makes racing first-contact inserts lose cleanly.
        let mut inner = self.inner.write();

        let pair = conversation.pair();
        if inner.conversations_by_pair.contains_key(&pair) {
            return Err(ConversationError::AlreadyExists);
        }
        if inner.conversations.contains_key(&conversation.id) {
            return Err(ConversationError::InvalidParameters(
                "conversation id already in use".to_string(),
            ));
        }

        inner
            .conversations_by_pair
            .insert(pair, conversation.id.clone());
        inner
            .conversations
            .insert(conversation.id.clone(), conversation);
        Ok(())
    }

    fn conversations_for(
        &self,
        participant: &ParticipantId,
    ) -> Result<Vec<Conversation>, ConversationError> {
        let inner = self.inner.read();
        let mut list: Vec<Conversation> = inner
            .conversations
            .values()
            .filter(|c| c.pair().contains(participant))
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(list)
    }
}
