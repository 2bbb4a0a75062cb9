//! Validation rules. Pure predicates over the field value; the messages
//! are fixed per rule.

use std::sync::LazyLock;

use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const MESSAGE_LENGTH_MESSAGE: &str = "Message must be at least 10 characters long";

pub const MIN_MESSAGE_CHARS: usize = 10;

/// local@domain.tld shape: no whitespace, exactly one @, a dot in the
/// domain part. Not RFC validation; `user@localhost` must fail.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Non-empty after trimming.
pub fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Counts chars on the raw value, untrimmed.
pub fn long_enough(value: &str) -> bool {
    value.chars().count() >= MIN_MESSAGE_CHARS
}
