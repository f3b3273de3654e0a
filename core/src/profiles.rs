//! Read-through profile cache.
//!
//! Sender-name joins happen once per delivered message, so lookups go
//! through a bounded LRU in front of profile storage. Invalidation is
//! incremental: a profile change evicts exactly one entry, there is no
//! full re-fetch anywhere.

use std::num::NonZeroUsize;
use std::sync::Arc;

use duplex_storage_traits::profiles::types::Profile;
use duplex_storage_traits::{DuplexStorageProvider, ParticipantId};
use lru::LruCache;
use parking_lot::Mutex;

pub(crate) struct ProfileCache<S> {
    storage: Arc<S>,
    cache: Mutex<LruCache<ParticipantId, Profile>>,
}

impl<S: DuplexStorageProvider> ProfileCache<S> {
    pub(crate) fn new(storage: Arc<S>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            storage,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up a profile, hitting storage at most once on a cache miss.
    ///
    /// Storage failures degrade to `None` (logged): delivery must never be
    /// blocked by an auxiliary lookup.
    pub(crate) fn get(&self, participant_id: &ParticipantId) -> Option<Profile> {
        if let Some(hit) = self.cache.lock().get(participant_id) {
            return Some(hit.clone());
        }

        match self.storage.find_profile(participant_id) {
            Ok(Some(profile)) => {
                self.cache
                    .lock()
                    .put(participant_id.clone(), profile.clone());
                Some(profile)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(participant = %participant_id, error = %e, "profile lookup failed");
                None
            }
        }
    }

    /// Display name for a participant, if resolvable.
    pub(crate) fn display_name(&self, participant_id: &ParticipantId) -> Option<String> {
        self.get(participant_id).map(|profile| profile.username)
    }

    /// Evict one participant's cached entry (the profile-changed hook).
    pub(crate) fn invalidate(&self, participant_id: &ParticipantId) {
        self.cache.lock().pop(participant_id);
    }
}
