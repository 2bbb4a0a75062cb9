use folio_tui::form::rules::{
    email_shape, long_enough, present, EMAIL_MESSAGE, MESSAGE_LENGTH_MESSAGE, REQUIRED_MESSAGE,
};
use folio_tui::form::{Field, FieldRole};

fn email_field(value: &str) -> Field {
    let mut field = Field::new(FieldRole::Email, "email", "Email");
    field.value = value.to_string();
    field
}

fn message_field(value: &str) -> Field {
    let mut field = Field::new(FieldRole::Message, "message", "Message");
    field.value = value.to_string();
    field
}

// ============================================================================
// Rule predicates
// ============================================================================

#[test]
fn test_present_rejects_whitespace_only() {
    assert!(present("hello"));
    assert!(present("  x  "));
    assert!(!present(""));
    assert!(!present("   "));
    assert!(!present("\t\n"));
}

#[test]
fn test_email_shape_accepts_local_at_domain_tld() {
    assert!(email_shape("user@example.com"));
    assert!(email_shape("USER@EXAMPLE.COM"));
    assert!(email_shape("a@b.co"));
    assert!(email_shape("first.last@sub.example.org"));
}

#[test]
fn test_email_shape_rejects_malformed() {
    assert!(!email_shape("user@localhost"), "domain needs a dot");
    assert!(!email_shape("plainaddress"));
    assert!(!email_shape("user @example.com"), "no whitespace allowed");
    assert!(!email_shape("user@example.com "), "raw value, untrimmed");
    assert!(!email_shape("a@@b.c"));
    assert!(!email_shape("@example.com"));
    assert!(!email_shape("user@"));
}

#[test]
fn test_long_enough_counts_raw_chars() {
    assert!(long_enough("0123456789"));
    assert!(!long_enough("012345678"));
    // Leading whitespace counts; only the required rule trims.
    assert!(long_enough("        hi"));
    // Chars, not bytes.
    assert!(long_enough("こんにちは世界!!!"));
    assert!(!long_enough("こんにちは"));
}

// ============================================================================
// Field validation: rule order, single error, healing
// ============================================================================

#[test]
fn test_empty_value_fails_required_before_role_rules() {
    let mut field = email_field("   ");
    assert!(!field.validate());
    assert_eq!(field.error.as_deref(), Some(REQUIRED_MESSAGE));
    assert!(!field.valid);
}

#[test]
fn test_email_role_fails_with_email_message() {
    let mut field = email_field("bad");
    assert!(!field.validate());
    assert_eq!(field.error.as_deref(), Some(EMAIL_MESSAGE));
}

#[test]
fn test_message_role_fails_with_length_message() {
    let mut field = message_field("hi");
    assert!(!field.validate());
    assert_eq!(field.error.as_deref(), Some(MESSAGE_LENGTH_MESSAGE));
}

#[test]
fn test_name_role_only_requires_presence() {
    let mut field = Field::new(FieldRole::Name, "name", "Name");
    field.value = "x".to_string();
    assert!(field.validate());
    assert!(field.error.is_none());
    assert!(field.valid);
}

#[test]
fn test_revalidating_unchanged_value_keeps_one_error() {
    let mut field = message_field("short");
    assert!(!field.validate());
    assert!(!field.validate());
    assert_eq!(field.error.as_deref(), Some(MESSAGE_LENGTH_MESSAGE));
}

#[test]
fn test_error_message_tracks_the_first_failing_rule() {
    let mut field = email_field("");
    field.validate();
    assert_eq!(field.error.as_deref(), Some(REQUIRED_MESSAGE));

    // Now non-empty but still not an email: the error must swap, not stack.
    field.edited("bad".to_string());
    assert_eq!(field.error.as_deref(), Some(EMAIL_MESSAGE));

    field.edited("good@mail.com".to_string());
    assert!(field.error.is_none());
    assert!(field.valid);
}

#[test]
fn test_editing_a_pristine_field_does_not_nag() {
    let mut field = message_field("");
    field.edited("short".to_string());
    assert!(field.error.is_none(), "no error until blur or submit");
}

#[test]
fn test_reset_clears_value_and_error() {
    let mut field = email_field("bad");
    field.validate();
    field.reset();
    assert!(field.value.is_empty());
    assert!(field.error.is_none());
    assert!(field.valid);
}
