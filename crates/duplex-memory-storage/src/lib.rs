//! Memory-based storage implementation for the duplex core.
//!
//! This module provides a memory-based storage backend implementing the
//! `DuplexStorageProvider` trait.
//!
//! Memory-based storage is non-persistent and will be cleared when the
//! process terminates. It's useful for testing or ephemeral applications
//! where persistence isn't required.
//!
//! All state lives behind a single `RwLock`, so every operation observes a
//! consistent snapshot: a history read taken while another thread appends
//! sees either all of the append or none of it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

use std::collections::HashMap;

use duplex_storage_traits::conversations::types::{Conversation, ParticipantPair};
use duplex_storage_traits::messages::types::Message;
use duplex_storage_traits::profiles::types::Profile;
use duplex_storage_traits::{Backend, ConversationId, DuplexStorageProvider, ParticipantId};
use parking_lot::RwLock;

mod conversations;
mod messages;
mod profiles;

/// An in-memory storage implementation for the duplex core.
#[derive(Debug, Default)]
pub struct DuplexMemoryStorage {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    conversations: HashMap<ConversationId, Conversation>,
    conversations_by_pair: HashMap<ParticipantPair, ConversationId>,
    messages_by_conversation: HashMap<ConversationId, Vec<Message>>,
    profiles: HashMap<ParticipantId, Profile>,
    // Monotone id source; also the insertion sequence for timestamp ties.
    next_message_id: i64,
}

impl DuplexMemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DuplexStorageProvider for DuplexMemoryStorage {
    fn backend(&self) -> Backend {
        Backend::Memory
    }
}
