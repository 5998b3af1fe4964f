use super::*;

fn fixture() -> Vec<UserRecord> {
    vec![
        UserRecord {
            username: "blue".into(),
            password: "1234".into(),
            profile: Profile { name: "blueStragglr".into() },
        },
        UserRecord {
            username: "white".into(),
            password: "5678".into(),
            profile: Profile { name: "whiteDwarf".into() },
        },
    ]
}

// =============================================================================
// find_by_credentials
// =============================================================================

#[test]
fn find_by_credentials_matches_exact_pair() {
    let users = fixture();
    let user = find_by_credentials(&users, "blue", "1234").expect("should match");
    assert_eq!(user.profile.name, "blueStragglr");
}

#[test]
fn find_by_credentials_rejects_wrong_password() {
    let users = fixture();
    assert!(find_by_credentials(&users, "blue", "5678").is_none());
}

#[test]
fn find_by_credentials_rejects_unknown_username() {
    let users = fixture();
    assert!(find_by_credentials(&users, "green", "1234").is_none());
}

#[test]
fn find_by_credentials_rejects_empty_strings() {
    let users = fixture();
    assert!(find_by_credentials(&users, "", "").is_none());
    assert!(find_by_credentials(&users, "blue", "").is_none());
    assert!(find_by_credentials(&users, "", "1234").is_none());
}

#[test]
fn find_by_credentials_is_case_sensitive() {
    let users = fixture();
    assert!(find_by_credentials(&users, "Blue", "1234").is_none());
    assert!(find_by_credentials(&users, "BLUE", "1234").is_none());
}

#[test]
fn find_by_credentials_does_not_trim() {
    let users = fixture();
    assert!(find_by_credentials(&users, " blue", "1234").is_none());
    assert!(find_by_credentials(&users, "blue", "1234 ").is_none());
}

#[test]
fn find_by_credentials_first_match_wins_on_duplicate_pairs() {
    let users = vec![
        UserRecord {
            username: "dup".into(),
            password: "pw".into(),
            profile: Profile { name: "first".into() },
        },
        UserRecord {
            username: "dup".into(),
            password: "pw".into(),
            profile: Profile { name: "second".into() },
        },
    ];
    let user = find_by_credentials(&users, "dup", "pw").expect("should match");
    assert_eq!(user.profile.name, "first");
}

// =============================================================================
// find_by_profile_name
// =============================================================================

#[test]
fn find_by_profile_name_matches_exact_name() {
    let users = fixture();
    let user = find_by_profile_name(&users, "whiteDwarf").expect("should match");
    assert_eq!(user.username, "white");
}

#[test]
fn find_by_profile_name_rejects_unknown_name() {
    let users = fixture();
    assert!(find_by_profile_name(&users, "redGiant").is_none());
    assert!(find_by_profile_name(&users, "").is_none());
}

#[test]
fn find_by_profile_name_is_case_sensitive() {
    let users = fixture();
    assert!(find_by_profile_name(&users, "bluestragglr").is_none());
}

#[test]
fn find_by_profile_name_first_match_wins_on_shared_names() {
    // Two distinct credential pairs behind one display name: resolution by
    // name cannot tell them apart, so the first record is returned.
    let users = vec![
        UserRecord {
            username: "a".into(),
            password: "pw-a".into(),
            profile: Profile { name: "shared".into() },
        },
        UserRecord {
            username: "b".into(),
            password: "pw-b".into(),
            profile: Profile { name: "shared".into() },
        },
    ];
    let user = find_by_profile_name(&users, "shared").expect("should match");
    assert_eq!(user.username, "a");
}

// =============================================================================
// serde shapes
// =============================================================================

#[test]
fn profile_serde_round_trip() {
    let profile = Profile { name: "blueStragglr".into() };
    let json = serde_json::to_string(&profile).unwrap();
    assert_eq!(json, r#"{"name":"blueStragglr"}"#);
    let restored: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, profile);
}

#[test]
fn user_record_serde_round_trip() {
    let users = fixture();
    let json = serde_json::to_string(&users[0]).unwrap();
    let restored: UserRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, users[0]);
}
