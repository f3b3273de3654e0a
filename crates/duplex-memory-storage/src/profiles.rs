//! Memory-based implementation of the ProfileStorage trait

use duplex_storage_traits::ParticipantId;
use duplex_storage_traits::profiles::ProfileStorage;
use duplex_storage_traits::profiles::error::ProfileError;
use duplex_storage_traits::profiles::types::Profile;

use crate::DuplexMemoryStorage;

impl ProfileStorage for DuplexMemoryStorage {
    fn upsert_profile(&self, profile: Profile) -> Result<(), ProfileError> {
        let mut inner = self.inner.write();
        inner
            .profiles
            .insert(profile.participant_id.clone(), profile);
        Ok(())
    }

    fn find_profile(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Option<Profile>, ProfileError> {
        let inner = self.inner.read();
        Ok(inner.profiles.get(participant_id).cloned())
    }

    fn all_profiles(&self) -> Result<Vec<Profile>, ProfileError> {
        let inner = self.inner.read();
        let mut profiles: Vec<Profile> = inner.profiles.values().cloned().collect();
        profiles.sort_by(|a, b| {
            a.username
                .cmp(&b.username)
                .then_with(|| a.participant_id.cmp(&b.participant_id))
        });
        Ok(profiles)
    }
}
