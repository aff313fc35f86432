//! Ready-made predicates for common text checks.
//!
//! Each function returns a closure suitable for
//! [`add_neutral_trigger`](crate::ValidationEngine::add_neutral_trigger) or
//! [`add_error_trigger`](crate::ValidationEngine::add_error_trigger). Note
//! that triggers fire when the predicate returns `true`, so an error trigger
//! wants a predicate that describes the *bad* input.

use regex::Regex;

/// Text is empty or only whitespace.
pub fn blank() -> impl Fn(&str) -> bool + Send + Sync + 'static {
    |text: &str| text.trim().is_empty()
}

/// Text has fewer than `min` characters.
pub fn shorter_than(min: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |text: &str| text.chars().count() < min
}

/// Text has more than `max` characters.
pub fn longer_than(max: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |text: &str| text.chars().count() > max
}

/// Text contains `needle`, ignoring case.
pub fn contains_ignore_case(needle: &str) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    let needle = needle.to_lowercase();
    move |text: &str| text.to_lowercase().contains(&needle)
}

/// Text does not match `re`.
pub fn mismatches(re: Regex) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |text: &str| !re.is_match(text)
}

/// Text does not match `pattern`.
///
/// Fails if the pattern does not compile.
pub fn mismatches_pattern(
    pattern: &str,
) -> Result<impl Fn(&str) -> bool + Send + Sync + 'static, regex::Error> {
    Regex::new(pattern).map(mismatches)
}

/// Text is non-empty and not a valid email address.
///
/// Empty text is left to a [`blank`] trigger.
pub fn invalid_email() -> impl Fn(&str) -> bool + Send + Sync + 'static {
    |text: &str| !text.is_empty() && !email_address::EmailAddress::is_valid(text)
}
