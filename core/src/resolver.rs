//! Conversation resolution: one conversation per unordered participant pair.

use duplex_storage_traits::conversations::error::ConversationError;
use duplex_storage_traits::conversations::types::{Conversation, ParticipantPair};
use duplex_storage_traits::{ConversationId, DuplexStorageProvider, ParticipantId};

use crate::error::CoreError;

/// Find or create the conversation between `requester` and `peer`.
///
/// The read-then-insert is the only place in the core that races: two
/// clients opening the same chat for the first time can both miss the read
/// and both try to insert. The storage uniqueness constraint on the
/// canonical pair arbitrates - the loser gets `AlreadyExists`, re-reads
/// exactly once, and returns the winner's id. The conflict never escapes
/// this function, and there are no further retries: any other storage
/// failure surfaces as `StorageUnavailable`.
pub(crate) fn resolve<S: DuplexStorageProvider>(
    storage: &S,
    requester: &ParticipantId,
    peer: &ParticipantId,
) -> Result<ConversationId, CoreError> {
    let pair = match ParticipantPair::new(requester.clone(), peer.clone()) {
        Ok(pair) => pair,
        Err(ConversationError::SelfConversation) => return Err(CoreError::SelfConversation),
        Err(e) => return Err(storage_err(e)),
    };

    // Read-mostly fast path.
    if let Some(existing) = storage.find_conversation(&pair).map_err(storage_err)? {
        return Ok(existing.id);
    }

    let candidate = Conversation::new(pair.clone());
    let candidate_id = candidate.id.clone();

    match storage.insert_conversation(candidate) {
        Ok(()) => Ok(candidate_id),
        Err(ConversationError::AlreadyExists) => {
            tracing::debug!(%requester, %peer, "conversation insert raced, re-reading winner");
            match storage.find_conversation(&pair).map_err(storage_err)? {
                Some(winner) => Ok(winner.id),
                None => Err(CoreError::StorageUnavailable(
                    "conversation missing after uniqueness conflict".to_owned(),
                )),
            }
        }
        Err(e) => Err(storage_err(e)),
    }
}

fn storage_err(e: ConversationError) -> CoreError {
    CoreError::StorageUnavailable(e.to_string())
}
