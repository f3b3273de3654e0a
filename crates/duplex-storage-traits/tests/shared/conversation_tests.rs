//! Conversation storage test functions

use duplex_storage_traits::ParticipantId;
use duplex_storage_traits::conversations::ConversationStorage;
use duplex_storage_traits::conversations::error::ConversationError;
use duplex_storage_traits::ids::ConversationId;

use super::{create_test_conversation, pair};

/// Test basic conversation save and find functionality
pub fn test_insert_and_find_conversation<S>(storage: S)
where
    S: ConversationStorage,
{
    let conversation = create_test_conversation("alice", "bob");
    let id = conversation.id.clone();

    storage.insert_conversation(conversation.clone()).unwrap();

    // Find by pair
    let found = storage.find_conversation(&pair("alice", "bob")).unwrap();
    assert_eq!(found.as_ref().map(|c| &c.id), Some(&id));
    let found = found.unwrap();
    assert_eq!(found.participant_a.as_str(), "alice");
    assert_eq!(found.participant_b.as_str(), "bob");

    // Find by id
    let by_id = storage.find_conversation_by_id(&id).unwrap();
    assert_eq!(by_id, Some(found));

    // Non-existent lookups
    assert!(storage.find_conversation(&pair("carol", "dave")).unwrap().is_none());
    assert!(
        storage
            .find_conversation_by_id(&ConversationId::generate())
            .unwrap()
            .is_none()
    );
}

/// The canonical pair makes lookup order-independent
pub fn test_find_conversation_is_order_independent<S>(storage: S)
where
    S: ConversationStorage,
{
    let conversation = create_test_conversation("bob", "alice");
    let id = conversation.id.clone();
    storage.insert_conversation(conversation).unwrap();

    let ab = storage.find_conversation(&pair("alice", "bob")).unwrap();
    let ba = storage.find_conversation(&pair("bob", "alice")).unwrap();
    assert_eq!(ab.map(|c| c.id), Some(id.clone()));
    assert_eq!(ba.map(|c| c.id), Some(id));
}

/// A second insert for the same pair must conflict, leaving the winner's row
pub fn test_duplicate_insert_conflicts<S>(storage: S)
where
    S: ConversationStorage,
{
    let winner = create_test_conversation("alice", "bob");
    let winner_id = winner.id.clone();
    storage.insert_conversation(winner).unwrap();

    // Reversed order on purpose: canonicalization makes it the same pair.
    let err = storage
        .insert_conversation(create_test_conversation("bob", "alice"))
        .unwrap_err();
    assert!(matches!(err, ConversationError::AlreadyExists));

    let found = storage.find_conversation(&pair("alice", "bob")).unwrap();
    assert_eq!(found.map(|c| c.id), Some(winner_id));
}

/// conversations_for returns only the participant's conversations
pub fn test_conversations_for<S>(storage: S)
where
    S: ConversationStorage,
{
    let alice = ParticipantId::new("alice");

    assert!(storage.conversations_for(&alice).unwrap().is_empty());

    let with_bob = create_test_conversation("alice", "bob");
    let with_carol = create_test_conversation("carol", "alice");
    let unrelated = create_test_conversation("dave", "erin");

    storage.insert_conversation(with_bob.clone()).unwrap();
    storage.insert_conversation(with_carol.clone()).unwrap();
    storage.insert_conversation(unrelated).unwrap();

    let conversations = storage.conversations_for(&alice).unwrap();
    assert_eq!(conversations.len(), 2);
    let ids: Vec<_> = conversations.iter().map(|c| c.id.clone()).collect();
    assert!(ids.contains(&with_bob.id));
    assert!(ids.contains(&with_carol.id));

    assert!(
        storage
            .conversations_for(&ParticipantId::new("nobody"))
            .unwrap()
            .is_empty()
    );
}
