//! Conversation-resolution and realtime message-fanout core for a
//! two-party direct-messaging system.
//!
//! Given two participant identities, [`DuplexCore`] deterministically finds
//! or creates the single conversation representing their relationship, then
//! delivers every message appended to that conversation, in commit order,
//! to every open subscription session, joined with the sender's profile.
//!
//! The core is a library over collaborators: identity comes from the
//! caller, durability from any [`DuplexStorageProvider`]. All methods are
//! blocking; fanout happens on per-session pump threads.

mod config;
mod error;
mod logging;
mod notifier;
mod profiles;
mod resolver;
mod session;
mod validate;

use std::sync::Arc;

use parking_lot::Mutex;

use duplex_storage_traits::conversations::types::Conversation;
use duplex_storage_traits::messages::Pagination;
use duplex_storage_traits::messages::types::Message;
use duplex_storage_traits::profiles::types::Profile;
use duplex_storage_traits::{ConversationId, DuplexStorageProvider, ParticipantId};

use crate::notifier::{ChangeEvent, ChangeNotifier, ListenerScope};
use crate::profiles::ProfileCache;

pub use config::{CoreConfig, load_config};
pub use error::CoreError;
pub use logging::init_logging;
pub use session::{
    DeliveredMessage, MessageSink, ProfileSink, SessionHandle, UNKNOWN_SENDER,
};
pub use validate::{MAX_MESSAGE_CHARS, ValidationError, validate_message};

/// The message core: conversation resolution, ordered append + history,
/// and realtime fanout to subscription sessions.
///
/// Clients load history *before* subscribing: the notifier only reaches
/// listeners registered at publish time, so the history snapshot is what
/// closes the gap.
pub struct DuplexCore<S> {
    storage: Arc<S>,
    notifier: Arc<ChangeNotifier>,
    profiles: Arc<ProfileCache<S>>,
    // Publish order must equal storage commit order for every listener, so
    // append + publish form one critical section.
    commit_lock: Mutex<()>,
}

impl<S: DuplexStorageProvider> DuplexCore<S> {
    /// Build a core over `storage` with default configuration.
    pub fn new(storage: Arc<S>) -> Self {
        Self::with_config(storage, CoreConfig::default())
    }

    /// Build a core over `storage` with explicit configuration.
    pub fn with_config(storage: Arc<S>, config: CoreConfig) -> Self {
        Self {
            notifier: Arc::new(ChangeNotifier::new(config.listener_queue_capacity)),
            profiles: Arc::new(ProfileCache::new(storage.clone(), config.profile_cache_size)),
            storage,
            commit_lock: Mutex::new(()),
        }
    }

    /// Find or create the conversation between two participants.
    ///
    /// Order-independent: `resolve(a, b)` and `resolve(b, a)` return the
    /// same id, and concurrent first-contact callers all converge on one
    /// conversation (see the resolver's race handling).
    pub fn resolve_conversation(
        &self,
        requester: &ParticipantId,
        peer: &ParticipantId,
    ) -> Result<ConversationId, CoreError> {
        resolver::resolve(self.storage.as_ref(), requester, peer)
    }

    /// Validate, append and fan out a message; returns the committed record.
    pub fn send_message(
        &self,
        conversation_id: &ConversationId,
        sender_id: &ParticipantId,
        raw_content: &str,
    ) -> Result<Message, CoreError> {
        // Validation runs before any storage mutation.
        let content = validate::validate_message(raw_content)?;

        let _commit = self.commit_lock.lock();
        let message = self
            .storage
            .append_message(conversation_id, sender_id, &content)?;
        self.notifier.publish(&ChangeEvent::MessageInserted {
            conversation_id: conversation_id.clone(),
            message: message.clone(),
        });
        Ok(message)
    }

    /// Ordered history snapshot for a conversation, oldest first.
    pub fn load_history(
        &self,
        conversation_id: &ConversationId,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Message>, CoreError> {
        Ok(self
            .storage
            .conversation_messages(conversation_id, pagination)?)
    }

    /// Open a realtime session for one conversation.
    ///
    /// The sink receives every message committed to the conversation after
    /// this call, in commit order, joined with the sender's display name.
    pub fn subscribe(
        &self,
        conversation_id: &ConversationId,
        sink: Box<dyn MessageSink>,
    ) -> SessionHandle {
        let (listener_id, rx) = self
            .notifier
            .register(ListenerScope::Conversation(conversation_id.clone()));
        let handle = SessionHandle::new(listener_id, self.notifier.clone());
        session::spawn_message_pump(rx, handle.closed_flag(), self.profiles.clone(), sink);
        handle
    }

    /// Open a global profile-change session (contact list updates).
    pub fn subscribe_profiles(&self, sink: Box<dyn ProfileSink>) -> SessionHandle {
        let (listener_id, rx) = self.notifier.register(ListenerScope::Profiles);
        let handle = SessionHandle::new(listener_id, self.notifier.clone());
        session::spawn_profile_pump(rx, handle.closed_flag(), sink);
        handle
    }

    /// Write a participant's profile and notify profile sessions.
    pub fn upsert_profile(&self, profile: Profile) -> Result<(), CoreError> {
        let participant_id = profile.participant_id.clone();

        let _commit = self.commit_lock.lock();
        self.storage.upsert_profile(profile)?;
        // Invalidate before publishing so subscribers re-reading on the
        // event can only see the new row.
        self.profiles.invalidate(&participant_id);
        self.notifier
            .publish(&ChangeEvent::ProfileChanged { participant_id });
        Ok(())
    }

    /// All known profiles, ordered by username (contact list backing).
    pub fn contacts(&self) -> Result<Vec<Profile>, CoreError> {
        Ok(self.storage.all_profiles()?)
    }

    /// All conversations a participant takes part in, newest first.
    pub fn conversations_for(
        &self,
        participant: &ParticipantId,
    ) -> Result<Vec<Conversation>, CoreError> {
        Ok(self.storage.conversations_for(participant)?)
    }

    /// The newest message of a conversation (chat-list preview).
    pub fn last_message(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<Message>, CoreError> {
        Ok(self.storage.last_message(conversation_id)?)
    }
}
