//! Subscription sessions: per-client realtime channels over the change
//! notifier.
//!
//! Each open session owns a pump thread that drains its bounded queue,
//! joins the sender's display name onto message events and hands the
//! result to the caller's sink. Sessions are process-local and die with
//! their handle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use duplex_storage_traits::messages::types::Message;
use duplex_storage_traits::{DuplexStorageProvider, ParticipantId};

use crate::notifier::{ChangeEvent, ChangeNotifier, ListenerId};
use crate::profiles::ProfileCache;

/// Display name used when the sender's profile cannot be resolved at
/// delivery time. Delivery of the message itself is never blocked or
/// dropped because of a failed profile lookup.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// A message joined with its sender's display name at delivery time.
///
/// The join is derived per delivery and never stored with the message.
#[derive(Debug, Clone)]
pub struct DeliveredMessage {
    /// The committed message.
    pub message: Message,
    /// The sender's username at delivery time, or [`UNKNOWN_SENDER`].
    pub sender_name: String,
}

/// Callback receiving messages for a conversation-scoped session.
///
/// Invoked from the session's pump thread, one call per committed message,
/// in commit order.
pub trait MessageSink: Send + Sync + 'static {
    /// Handle one delivered message.
    fn on_message(&self, delivered: DeliveredMessage);
}

/// Callback receiving profile-change notifications (contact list).
pub trait ProfileSink: Send + Sync + 'static {
    /// Handle one profile change.
    fn on_profile_changed(&self, participant_id: ParticipantId);
}

/// Handle to an open subscription session.
///
/// Closing (or dropping) the handle unregisters the listener and stops the
/// delivery pump. `close` is idempotent and immediate: after it returns,
/// the sink is never invoked again, not even for events already queued.
pub struct SessionHandle {
    listener_id: ListenerId,
    notifier: Arc<ChangeNotifier>,
    closed: Arc<AtomicBool>,
}

impl SessionHandle {
    pub(crate) fn new(listener_id: ListenerId, notifier: Arc<ChangeNotifier>) -> Self {
        Self {
            listener_id,
            notifier,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn closed_flag(&self) -> Arc<AtomicBool> {
        self.closed.clone()
    }

    /// Close the session. Calling this twice is a no-op, not an error.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.notifier.unregister(self.listener_id);
    }

    /// Whether `close` has been called (or the handle dropped elsewhere).
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Pump message events for one conversation-scoped session.
///
/// Exactly one profile lookup per delivered message; the receiver closing
/// (session close or notifier eviction) ends the thread.
pub(crate) fn spawn_message_pump<S: DuplexStorageProvider>(
    rx: flume::Receiver<ChangeEvent>,
    closed: Arc<AtomicBool>,
    profiles: Arc<ProfileCache<S>>,
    sink: Box<dyn MessageSink>,
) {
    thread::spawn(move || {
        while let Ok(event) = rx.recv() {
            if closed.load(Ordering::SeqCst) {
                break;
            }
            if let ChangeEvent::MessageInserted { message, .. } = event {
                let sender_name = profiles
                    .display_name(&message.sender_id)
                    .unwrap_or_else(|| UNKNOWN_SENDER.to_owned());
                sink.on_message(DeliveredMessage {
                    message,
                    sender_name,
                });
            }
        }
    });
}

/// Pump profile-change events for a global session.
pub(crate) fn spawn_profile_pump(
    rx: flume::Receiver<ChangeEvent>,
    closed: Arc<AtomicBool>,
    sink: Box<dyn ProfileSink>,
) {
    thread::spawn(move || {
        while let Ok(event) = rx.recv() {
            if closed.load(Ordering::SeqCst) {
                break;
            }
            if let ChangeEvent::ProfileChanged { participant_id } = event {
                sink.on_profile_changed(participant_id);
            }
        }
    });
}
