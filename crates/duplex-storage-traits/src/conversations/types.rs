//! Types for the conversations module

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::error::ConversationError;
use crate::ids::{ConversationId, ParticipantId};
use crate::timestamp::Timestamp;

/// Canonical representation of an unordered pair of distinct participants.
///
/// The two ids are sorted on construction (`low < high`), so every pair has
/// exactly one storage representation and the at-most-one-conversation
/// invariant can be enforced with a plain two-column uniqueness constraint.
/// Construction fails for a pair of one: a participant cannot converse with
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantPair {
    low: ParticipantId,
    high: ParticipantId,
}

impl ParticipantPair {
    /// Canonicalize `(a, b)`; order does not matter.
    pub fn new(a: ParticipantId, b: ParticipantId) -> Result<Self, ConversationError> {
        match a.cmp(&b) {
            Ordering::Less => Ok(Self { low: a, high: b }),
            Ordering::Greater => Ok(Self { low: b, high: a }),
            Ordering::Equal => Err(ConversationError::SelfConversation),
        }
    }

    /// The canonically first participant.
    pub fn low(&self) -> &ParticipantId {
        &self.low
    }

    /// The canonically second participant.
    pub fn high(&self) -> &ParticipantId {
        &self.high
    }

    /// Whether `participant` is one of the two sides.
    pub fn contains(&self, participant: &ParticipantId) -> bool {
        &self.low == participant || &self.high == participant
    }
}

/// The unique relationship record between exactly two participants.
///
/// `participant_a` and `participant_b` hold the canonical pair
/// (`participant_a < participant_b`). Conversations are created lazily on
/// first message intent and are never deleted or merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier, generated on creation.
    pub id: ConversationId,
    /// Canonically first participant.
    pub participant_a: ParticipantId,
    /// Canonically second participant.
    pub participant_b: ParticipantId,
    /// When the record was created.
    pub created_at: Timestamp,
}

impl Conversation {
    /// Create the record for a pair with a freshly generated id.
    pub fn new(pair: ParticipantPair) -> Self {
        let ParticipantPair { low, high } = pair;
        Self {
            id: ConversationId::generate(),
            participant_a: low,
            participant_b: high,
            created_at: Timestamp::now(),
        }
    }

    /// The canonical pair this conversation belongs to.
    pub fn pair(&self) -> ParticipantPair {
        ParticipantPair {
            low: self.participant_a.clone(),
            high: self.participant_b.clone(),
        }
    }

    /// The other side of the conversation, if `me` takes part in it.
    pub fn peer_of(&self, me: &ParticipantId) -> Option<&ParticipantId> {
        if &self.participant_a == me {
            Some(&self.participant_b)
        } else if &self.participant_b == me {
            Some(&self.participant_a)
        } else {
            None
        }
    }
}
