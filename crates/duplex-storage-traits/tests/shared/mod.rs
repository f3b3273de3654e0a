//! Shared test functions that run against any storage backend.

pub mod conversation_tests;
pub mod message_tests;
pub mod profile_tests;

use duplex_storage_traits::ParticipantId;
use duplex_storage_traits::conversations::types::{Conversation, ParticipantPair};

/// Canonical pair for two participant id strings.
pub fn pair(a: &str, b: &str) -> ParticipantPair {
    ParticipantPair::new(ParticipantId::new(a), ParticipantId::new(b)).unwrap()
}

/// Fresh conversation record for two participant id strings.
pub fn create_test_conversation(a: &str, b: &str) -> Conversation {
    Conversation::new(pair(a, b))
}
