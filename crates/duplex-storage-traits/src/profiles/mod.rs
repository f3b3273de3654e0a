//! Profiles module
//!
//! This module is responsible for storing and retrieving participant
//! profiles: the display metadata joined onto messages at delivery time and
//! rendered in the contact list.
//!
//! Profiles are written through upserts; this core never deletes them.

use crate::ids::ParticipantId;

pub mod error;
pub mod types;

use self::error::ProfileError;
use self::types::*;

/// Storage traits for the profiles module
pub trait ProfileStorage {
    /// Insert or update a participant's profile.
    fn upsert_profile(&self, profile: Profile) -> Result<(), ProfileError>;

    /// Look up one profile.
    fn find_profile(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Option<Profile>, ProfileError>;

    /// All stored profiles, ordered by username (contact list).
    fn all_profiles(&self) -> Result<Vec<Profile>, ProfileError>;
}
