use super::*;

/// Tests parsing policy names.
///
/// Expected: names parse case-insensitively, surrounding whitespace ignored
#[test]
fn parses_policy_names() {
    assert_eq!("public".parse::<AccessPolicy>(), Ok(AccessPolicy::Public));
    assert_eq!("User".parse::<AccessPolicy>(), Ok(AccessPolicy::User));
    assert_eq!(" ADMIN ".parse::<AccessPolicy>(), Ok(AccessPolicy::Admin));
}

/// Tests parsing an unknown policy name.
///
/// Expected: Err naming the value
#[test]
fn rejects_unknown_policy() {
    let result = "staff".parse::<AccessPolicy>();

    assert!(result.unwrap_err().contains("staff"));
}

/// Tests that Display output parses back to the same policy.
///
/// Expected: identical policy
#[test]
fn display_matches_parse() {
    for policy in [AccessPolicy::Public, AccessPolicy::User, AccessPolicy::Admin] {
        assert_eq!(policy.to_string().parse::<AccessPolicy>(), Ok(policy));
    }
}
