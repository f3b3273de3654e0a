//! Types for the profiles module

use serde::{Deserialize, Serialize};

use crate::ids::ParticipantId;
use crate::timestamp::Timestamp;

/// Display metadata for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The participant this profile belongs to.
    pub participant_id: ParticipantId,
    /// Display name shown next to delivered messages and in the contact
    /// list.
    pub username: String,
    /// Accent color for rendering, if the participant picked one.
    pub display_color: Option<String>,
    /// When the profile was last written.
    pub updated_at: Timestamp,
}

impl Profile {
    /// Build a profile stamped with the current time.
    pub fn new(
        participant_id: ParticipantId,
        username: impl Into<String>,
        display_color: Option<String>,
    ) -> Self {
        Self {
            participant_id,
            username: username.into(),
            display_color,
            updated_at: Timestamp::now(),
        }
    }
}
