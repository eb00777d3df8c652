use gravatar::{identity_hash, identity_hash_with, Charset, EMPTY_IDENTITY_HASH};

const EXAMPLE_EMAIL: &str = "example@example.com";
const EXAMPLE_HASH: &str = "23463b99b62a72f26ed677cc556c44e8";

#[test]
fn known_hash_for_example_email() {
    assert_eq!(identity_hash(EXAMPLE_EMAIL), EXAMPLE_HASH);
}

#[test]
fn hash_ignores_case() {
    assert_eq!(identity_hash("eXaMpLe@eXaMpLe.cOm"), EXAMPLE_HASH);
}

#[test]
fn hash_ignores_surrounding_whitespace() {
    assert_eq!(identity_hash("   example@example.com   "), EXAMPLE_HASH);
    assert_eq!(identity_hash("\texample@example.com\n"), EXAMPLE_HASH);
}

#[test]
fn absent_email_hashes_like_empty_string() {
    assert_eq!(identity_hash(None), EMPTY_IDENTITY_HASH);
    assert_eq!(identity_hash(""), EMPTY_IDENTITY_HASH);
    assert_eq!(identity_hash("   "), EMPTY_IDENTITY_HASH);
}

#[test]
fn hash_is_32_lowercase_hex_chars() {
    let hash = identity_hash("Someone@Somewhere.org");
    assert_eq!(hash.len(), 32);
    assert!(hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn non_ascii_is_hashed_as_windows_1252() {
    // MD5 over the UTF-8 bytes would be 1020b8f7b35fa04503bbb1a6c0182ca9.
    assert_eq!(
        identity_hash("Jörg@Example.com"),
        "5207ba0a4f4753bc0c3009507886aa3f"
    );
}

#[test]
fn windows_1252_specific_characters() {
    assert_eq!(
        identity_hash("€uro@example.com"),
        "e3dfc0f1f6cccb6ad8ae8e2018276fcc"
    );
}

#[test]
fn unmappable_characters_hash_as_question_mark() {
    assert_eq!(
        identity_hash("snow☃@example.com"),
        identity_hash("snow?@example.com")
    );
    assert_eq!(
        identity_hash("snow☃@example.com"),
        "88e2b2200d16a40c59b4d35f4b2ac749"
    );
}

#[test]
fn explicit_charset_changes_non_ascii_hash() {
    let latin9 = Charset::for_label("iso-8859-15").unwrap();
    assert_eq!(
        identity_hash_with("€uro@example.com", &latin9),
        "9c727541b1da47c6fd09635bab760621"
    );
}

#[test]
fn explicit_charset_leaves_ascii_hash_alone() {
    let latin9 = Charset::for_label("iso8859-15").unwrap();
    assert_eq!(identity_hash_with(EXAMPLE_EMAIL, &latin9), EXAMPLE_HASH);
}
