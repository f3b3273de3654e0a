//! Memory-based implementation of the MessageStorage trait

use duplex_storage_traits::messages::error::MessageError;
use duplex_storage_traits::messages::types::Message;
use duplex_storage_traits::messages::{MessageStorage, Pagination, resolve_pagination};
use duplex_storage_traits::{ConversationId, MessageId, ParticipantId, Timestamp};

use crate::DuplexMemoryStorage;

impl MessageStorage for DuplexMemoryStorage {
    fn append_message(
        &self,
        conversation_id: &ConversationId,
        sender_id: &ParticipantId,
        content: &str,
    ) -> Result<Message, MessageError> {
        let mut inner = self.inner.write();

        if !inner.conversations.contains_key(conversation_id) {
            return Err(MessageError::ConversationNotFound);
        }

        inner.next_message_id += 1;
        let message = Message {
            id: MessageId::new(inner.next_message_id),
            conversation_id: conversation_id.clone(),
            sender_id: sender_id.clone(),
            content: content.to_owned(),
            created_at: Timestamp::now(),
        };

        inner
            .messages_by_conversation
            .entry(conversation_id.clone())
            .or_default()
            .push(message.clone());

        Ok(message)
    }

    fn conversation_messages(
        &self,
        conversation_id: &ConversationId,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Message>, MessageError> {
        let (limit, offset) = resolve_pagination(pagination)?;

        // One read lock for the whole call: a consistent snapshot even with
        // concurrent appenders.
        let inner = self.inner.read();
        if !inner.conversations.contains_key(conversation_id) {
            return Err(MessageError::ConversationNotFound);
        }

        let mut messages = inner
            .messages_by_conversation
            .get(conversation_id)
            .cloned()
            .unwrap_or_default();
        messages.sort_by(|a, b| a.history_order_cmp(b));

        Ok(messages.into_iter().skip(offset).take(limit).collect())
    }

    fn last_message(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<Message>, MessageError> {
        let inner = self.inner.read();
        if !inner.conversations.contains_key(conversation_id) {
            return Err(MessageError::ConversationNotFound);
        }

        Ok(inner
            .messages_by_conversation
            .get(conversation_id)
            .and_then(|messages| messages.iter().max_by(|a, b| a.history_order_cmp(b)))
            .cloned())
    }
}
