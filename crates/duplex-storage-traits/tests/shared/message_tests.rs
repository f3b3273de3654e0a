//! Message storage test functions

use duplex_storage_traits::ParticipantId;
use duplex_storage_traits::conversations::ConversationStorage;
use duplex_storage_traits::ids::ConversationId;
use duplex_storage_traits::messages::error::MessageError;
use duplex_storage_traits::messages::{MAX_MESSAGE_LIMIT, MessageStorage, Pagination};

use super::create_test_conversation;

/// Appends get monotone ids and non-decreasing timestamps
pub fn test_append_assigns_monotone_ids<S>(storage: S)
where
    S: ConversationStorage + MessageStorage,
{
    let conversation = create_test_conversation("alice", "bob");
    let conversation_id = conversation.id.clone();
    storage.insert_conversation(conversation).unwrap();

    let alice = ParticipantId::new("alice");
    let first = storage
        .append_message(&conversation_id, &alice, "one")
        .unwrap();
    let second = storage
        .append_message(&conversation_id, &alice, "two")
        .unwrap();
    let third = storage
        .append_message(&conversation_id, &alice, "three")
        .unwrap();

    assert!(first.id < second.id);
    assert!(second.id < third.id);
    assert!(first.created_at <= second.created_at);
    assert!(second.created_at <= third.created_at);
    assert_eq!(first.conversation_id, conversation_id);
    assert_eq!(first.sender_id, alice);
}

/// Appending to an unknown conversation is a typed failure
pub fn test_append_to_unknown_conversation<S>(storage: S)
where
    S: MessageStorage,
{
    let err = storage
        .append_message(
            &ConversationId::generate(),
            &ParticipantId::new("alice"),
            "hello",
        )
        .unwrap_err();
    assert!(matches!(err, MessageError::ConversationNotFound));
}

/// The two-user first-contact exchange reads back in order with senders intact
pub fn test_history_ordering<S>(storage: S)
where
    S: ConversationStorage + MessageStorage,
{
    let conversation = create_test_conversation("u1", "u2");
    let conversation_id = conversation.id.clone();
    storage.insert_conversation(conversation).unwrap();

    let u1 = ParticipantId::new("u1");
    let u2 = ParticipantId::new("u2");
    storage.append_message(&conversation_id, &u1, "hello").unwrap();
    storage.append_message(&conversation_id, &u2, "hi!").unwrap();

    let history = storage.conversation_messages(&conversation_id, None).unwrap();
    let contents: Vec<&str> = history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["hello", "hi!"]);
    assert_eq!(history[0].sender_id, u1);
    assert_eq!(history[1].sender_id, u2);

    // Append-then-reread shows the new message last.
    storage.append_message(&conversation_id, &u1, "how are you?").unwrap();
    let history = storage.conversation_messages(&conversation_id, None).unwrap();
    assert_eq!(history.last().unwrap().content, "how are you?");
    assert!(
        history
            .windows(2)
            .all(|w| w[0].history_order_cmp(&w[1]).is_le())
    );
}

/// Pagination bounds and windows
pub fn test_history_pagination<S>(storage: S)
where
    S: ConversationStorage + MessageStorage,
{
    let conversation = create_test_conversation("alice", "bob");
    let conversation_id = conversation.id.clone();
    storage.insert_conversation(conversation).unwrap();

    let alice = ParticipantId::new("alice");
    for i in 0..5 {
        storage
            .append_message(&conversation_id, &alice, &format!("message {i}"))
            .unwrap();
    }

    let window = storage
        .conversation_messages(&conversation_id, Some(Pagination::new(Some(2), Some(1))))
        .unwrap();
    let contents: Vec<&str> = window.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["message 1", "message 2"]);

    let err = storage
        .conversation_messages(&conversation_id, Some(Pagination::new(Some(0), None)))
        .unwrap_err();
    assert!(matches!(err, MessageError::InvalidParameters(_)));

    let err = storage
        .conversation_messages(
            &conversation_id,
            Some(Pagination::new(Some(MAX_MESSAGE_LIMIT + 1), None)),
        )
        .unwrap_err();
    assert!(matches!(err, MessageError::InvalidParameters(_)));

    // Offset past the end is empty, not an error.
    let past_end = storage
        .conversation_messages(&conversation_id, Some(Pagination::new(Some(10), Some(99))))
        .unwrap();
    assert!(past_end.is_empty());
}

/// History for an unknown conversation is a typed failure
pub fn test_history_unknown_conversation<S>(storage: S)
where
    S: MessageStorage,
{
    let err = storage
        .conversation_messages(&ConversationId::generate(), None)
        .unwrap_err();
    assert!(matches!(err, MessageError::ConversationNotFound));
}

/// last_message tracks the newest append
pub fn test_last_message<S>(storage: S)
where
    S: ConversationStorage + MessageStorage,
{
    let conversation = create_test_conversation("alice", "bob");
    let conversation_id = conversation.id.clone();
    storage.insert_conversation(conversation).unwrap();

    assert!(storage.last_message(&conversation_id).unwrap().is_none());

    let alice = ParticipantId::new("alice");
    storage.append_message(&conversation_id, &alice, "first").unwrap();
    let newest = storage.append_message(&conversation_id, &alice, "second").unwrap();

    let last = storage.last_message(&conversation_id).unwrap().unwrap();
    assert_eq!(last, newest);
}

/// Messages stay scoped to their conversation
pub fn test_messages_scoped_to_conversation<S>(storage: S)
where
    S: ConversationStorage + MessageStorage,
{
    let first = create_test_conversation("alice", "bob");
    let second = create_test_conversation("alice", "carol");
    let first_id = first.id.clone();
    let second_id = second.id.clone();
    storage.insert_conversation(first).unwrap();
    storage.insert_conversation(second).unwrap();

    let alice = ParticipantId::new("alice");
    storage.append_message(&first_id, &alice, "for bob").unwrap();
    storage.append_message(&second_id, &alice, "for carol").unwrap();

    let first_history = storage.conversation_messages(&first_id, None).unwrap();
    assert_eq!(first_history.len(), 1);
    assert_eq!(first_history[0].content, "for bob");

    let second_history = storage.conversation_messages(&second_id, None).unwrap();
    assert_eq!(second_history.len(), 1);
    assert_eq!(second_history[0].content, "for carol");
}
