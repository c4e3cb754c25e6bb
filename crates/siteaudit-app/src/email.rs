//! Email address format check for the report capture form

use std::sync::LazyLock;

use regex::Regex;

/// Shown when a submitted address fails the format check
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Same shape a browser accepts for `<input type="email">`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Email regex is valid")
});

/// Whether `input` is a well-formed email address
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}
