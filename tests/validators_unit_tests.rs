/// Unit tests for signup input validators
///
/// This test module covers:
/// - Username length bounds
/// - Password length and character-class requirements
/// - Enumeration of every violated rule at once
use brain_service::validators::{
    password_violations, signup_violations, username_violations, PASSWORD_SPECIAL_CHARS,
};

// ============================================================================
// Username Validation Tests
// ============================================================================

#[test]
fn test_valid_usernames() {
    assert!(username_violations("abc").is_empty());
    assert!(username_violations("alice").is_empty());
    assert!(username_violations("abcdefghij").is_empty());
}

#[test]
fn test_username_too_short() {
    assert_eq!(username_violations("ab").len(), 1);
    assert_eq!(username_violations("").len(), 1);
}

#[test]
fn test_username_too_long() {
    assert_eq!(username_violations("abcdefghijk").len(), 1);
}

#[test]
fn test_username_length_counts_characters_not_bytes() {
    // three characters, nine bytes
    assert!(username_violations("äöü").is_empty());
}

// ============================================================================
// Password Validation Tests
// ============================================================================

#[test]
fn test_valid_passwords() {
    assert!(password_violations("Abcdef1!").is_empty());
    assert!(password_violations("Str0ng?Password").is_empty());
    // exactly 8 and exactly 20 characters
    assert!(password_violations("Aa1!aaaa").is_empty());
    assert!(password_violations("Aa1!aaaaaaaaaaaaaaaa").is_empty());
}

#[test]
fn test_password_too_short() {
    let violations = password_violations("Aa1!a");
    assert!(violations.contains(&"Password must be between 8 and 20 characters"));
}

#[test]
fn test_password_too_long() {
    let violations = password_violations("Aa1!aaaaaaaaaaaaaaaaa");
    assert_eq!(
        violations,
        vec!["Password must be between 8 and 20 characters"]
    );
}

#[test]
fn test_password_missing_lowercase() {
    let violations = password_violations("ABCDEF1!");
    assert_eq!(violations, vec!["Must include at least one lowercase letter"]);
}

#[test]
fn test_password_missing_uppercase() {
    let violations = password_violations("abcdef1!");
    assert_eq!(violations, vec!["Must include at least one uppercase letter"]);
}

#[test]
fn test_password_missing_digit() {
    let violations = password_violations("Abcdefg!");
    assert_eq!(violations, vec!["Must include at least one number"]);
}

#[test]
fn test_password_missing_special() {
    let violations = password_violations("Abcdefg1");
    assert_eq!(
        violations,
        vec!["Must include at least one special character"]
    );
}

#[test]
fn test_special_characters_outside_the_fixed_set_do_not_count() {
    // '-' and '_' are not in the accepted set
    let violations = password_violations("Abcdef1-");
    assert_eq!(
        violations,
        vec!["Must include at least one special character"]
    );
}

#[test]
fn test_every_character_of_the_fixed_set_counts() {
    for special in PASSWORD_SPECIAL_CHARS.chars() {
        let password = format!("Abcdef1{}", special);
        assert!(
            password_violations(&password).is_empty(),
            "{:?} should satisfy the special-character rule",
            special
        );
    }
}

#[test]
fn test_all_password_rules_reported_at_once() {
    // too short, no lowercase, no uppercase, no digit, no special
    let violations = password_violations("");
    assert_eq!(violations.len(), 5);
}

// ============================================================================
// Combined Signup Validation Tests
// ============================================================================

#[test]
fn test_signup_violations_combine_username_and_password_rules() {
    let violations = signup_violations("ab", "abcdefg1!");
    assert_eq!(
        violations,
        vec![
            "Username must be between 3 and 10 characters",
            "Must include at least one uppercase letter",
        ]
    );
}

#[test]
fn test_valid_signup_has_no_violations() {
    assert!(signup_violations("alice", "Abcdef1!").is_empty());
}
