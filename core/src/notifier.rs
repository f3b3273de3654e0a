//! Change notifier: fanout of committed storage changes to registered
//! listeners.
//!
//! Process-local. Listeners registered at publish time receive the event;
//! nobody gets retroactive delivery - backfill is `load_history`'s job.

use std::sync::atomic::{AtomicU64, Ordering};

use duplex_storage_traits::messages::types::Message;
use duplex_storage_traits::{ConversationId, ParticipantId};
use parking_lot::Mutex;

/// A change committed to storage, as seen by subscribers.
#[derive(Debug, Clone)]
pub(crate) enum ChangeEvent {
    /// A message was appended to a conversation's log.
    MessageInserted {
        conversation_id: ConversationId,
        message: Message,
    },
    /// A participant's profile was created or updated.
    ProfileChanged { participant_id: ParticipantId },
}

/// What a listener wants to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListenerScope {
    /// Message insertions for one conversation.
    Conversation(ConversationId),
    /// Profile changes, regardless of conversation (contact list).
    Profiles,
}

impl ListenerScope {
    fn matches(&self, event: &ChangeEvent) -> bool {
        match (self, event) {
            (Self::Conversation(scope_id), ChangeEvent::MessageInserted { conversation_id, .. }) => {
                scope_id == conversation_id
            }
            (Self::Profiles, ChangeEvent::ProfileChanged { .. }) => true,
            _ => false,
        }
    }
}

pub(crate) type ListenerId = u64;

#[derive(Debug)]
struct Listener {
    id: ListenerId,
    scope: ListenerScope,
    tx: flume::Sender<ChangeEvent>,
}

/// Process-local listener registry.
///
/// Each listener has its own bounded queue, so publishing never blocks on a
/// slow consumer. A listener whose queue is gone or full can no longer be
/// given gap-free ordered delivery, so it is dropped from the registry; the
/// client reopens and backfills from history.
#[derive(Debug)]
pub(crate) struct ChangeNotifier {
    queue_capacity: usize,
    next_id: AtomicU64,
    listeners: Mutex<Vec<Listener>>,
}

impl ChangeNotifier {
    pub(crate) fn new(queue_capacity: usize) -> Self {
        Self {
            queue_capacity: queue_capacity.max(1),
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Add a listener; returns its id and the receiving end of its queue.
    pub(crate) fn register(
        &self,
        scope: ListenerScope,
    ) -> (ListenerId, flume::Receiver<ChangeEvent>) {
        let (tx, rx) = flume::bounded(self.queue_capacity);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push(Listener { id, scope, tx });
        (id, rx)
    }

    /// Remove a listener. Unknown ids are ignored, which is what makes
    /// session close idempotent.
    pub(crate) fn unregister(&self, id: ListenerId) {
        self.listeners.lock().retain(|listener| listener.id != id);
    }

    /// Number of currently registered listeners (leak checks in tests).
    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Deliver `event` to every listener whose scope matches.
    ///
    /// Callers serialize publishes per commit order (the core's commit
    /// lock), and the queue preserves order per listener, so each listener
    /// observes events in exactly the order they were committed.
    pub(crate) fn publish(&self, event: &ChangeEvent) {
        self.listeners.lock().retain(|listener| {
            if !listener.scope.matches(event) {
                return true;
            }
            match listener.tx.try_send(event.clone()) {
                Ok(()) => true,
                Err(flume::TrySendError::Full(_)) => {
                    tracing::warn!(
                        listener = listener.id,
                        "listener queue full, dropping listener"
                    );
                    false
                }
                Err(flume::TrySendError::Disconnected(_)) => {
                    tracing::debug!(listener = listener.id, "listener disconnected, dropping");
                    false
                }
            }
        });
    }
}
