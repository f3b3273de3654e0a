//! Profile storage test functions

use duplex_storage_traits::ParticipantId;
use duplex_storage_traits::profiles::ProfileStorage;
use duplex_storage_traits::profiles::types::Profile;

/// Upsert then find round-trips all fields
pub fn test_profile_roundtrip<S>(storage: S)
where
    S: ProfileStorage,
{
    let alice = ParticipantId::new("alice");
    let profile = Profile::new(alice.clone(), "Alice", Some("#00d9ff".to_string()));
    storage.upsert_profile(profile.clone()).unwrap();

    let found = storage.find_profile(&alice).unwrap().unwrap();
    assert_eq!(found, profile);

    assert!(
        storage
            .find_profile(&ParticipantId::new("nobody"))
            .unwrap()
            .is_none()
    );
}

/// A second upsert overwrites the first
pub fn test_profile_upsert_overwrites<S>(storage: S)
where
    S: ProfileStorage,
{
    let alice = ParticipantId::new("alice");
    storage
        .upsert_profile(Profile::new(alice.clone(), "Alice", None))
        .unwrap();
    storage
        .upsert_profile(Profile::new(
            alice.clone(),
            "Alice Cooper",
            Some("#ff00aa".to_string()),
        ))
        .unwrap();

    let found = storage.find_profile(&alice).unwrap().unwrap();
    assert_eq!(found.username, "Alice Cooper");
    assert_eq!(found.display_color.as_deref(), Some("#ff00aa"));
}

/// all_profiles returns every row ordered by username
pub fn test_all_profiles_sorted<S>(storage: S)
where
    S: ProfileStorage,
{
    assert!(storage.all_profiles().unwrap().is_empty());

    storage
        .upsert_profile(Profile::new(ParticipantId::new("p3"), "carol", None))
        .unwrap();
    storage
        .upsert_profile(Profile::new(ParticipantId::new("p1"), "alice", None))
        .unwrap();
    storage
        .upsert_profile(Profile::new(ParticipantId::new("p2"), "bob", None))
        .unwrap();

    let profiles = storage.all_profiles().unwrap();
    let usernames: Vec<&str> = profiles.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(usernames, vec!["alice", "bob", "carol"]);
}
