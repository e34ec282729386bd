//! Built-in field formats.
//!
//! Compiled patterns for the fields request bodies commonly carry, plus
//! predicates that accept any [`Value`] and reject non-strings.

use crate::core::Value;
use regex::Regex;
use std::sync::LazyLock;

// RFC 5322 style address; quoted local parts and bracketed IPv4 hosts allowed.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\n\r\u{2028}\u{2029}]{2,36}$").expect("name pattern is valid")
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

// Calendar part shared by both ISO patterns. Day ranges follow the month,
// except February which always allows 01-29 (no leap-year check).
const ISO_CALENDAR_DATE: &str = r"(?:19|20)[0-9][0-9]-(?:(?:01|03|05|07|08|10|12)-(?:0[1-9]|[1-2][0-9]|3[0-1])|(?:04|06|09|11)-(?:0[1-9]|[1-2][0-9]|30)|02-(?:0[1-9]|[1-2][0-9]))";

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{ISO_CALENDAR_DATE}T(?:[0-1][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9].[0-9]{{3}}Z$"
    ))
    .expect("ISO date pattern is valid")
});

// Not end-anchored: anything may follow the trailing `Z`.
static ISO_DATE_15MIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{ISO_CALENDAR_DATE}T(?:[0-1][0-9]|2[0-3]):(?:00|15|30|45):00.000Z"
    ))
    .expect("ISO 15-minute date pattern is valid")
});

/// Email address.
pub fn email() -> &'static Regex {
    &EMAIL
}

/// Human name: 2 to 36 characters on a single line.
///
/// The regex counts chars. [`is_valid_human_name`] bounds the length in
/// UTF-16 code units instead, so astral characters count twice there.
pub fn name() -> &'static Regex {
    &NAME
}

/// Exactly ten digits.
pub fn phone() -> &'static Regex {
    &PHONE
}

/// One or more digits, nothing else.
pub fn digits_only() -> &'static Regex {
    &DIGITS_ONLY
}

/// Strict `Date.prototype.toISOString()` output for years 1900-2099,
/// e.g. `2021-09-17T12:34:56.789Z`.
pub fn iso_date() -> &'static Regex {
    &ISO_DATE
}

/// Like [`iso_date`], restricted to quarter-hour times with zero seconds and
/// milliseconds, e.g. `2021-09-17T12:15:00.000Z`.
pub fn iso_date_15min_increments() -> &'static Regex {
    &ISO_DATE_15MIN
}

/// Look up a built-in pattern by name, as used by `@name` in rule set
/// declarations.
pub fn named(name: &str) -> Option<&'static Regex> {
    match name {
        "email" => Some(email()),
        "name" => Some(self::name()),
        "phone" => Some(phone()),
        "digits_only" => Some(digits_only()),
        "iso_date" => Some(iso_date()),
        "iso_date_15min_increments" => Some(iso_date_15min_increments()),
        _ => None,
    }
}

/// 2 to 36 UTF-16 code units on a single line.
pub fn is_valid_human_name(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| is_single_line(s) && (2..=36).contains(&utf16_len(s)))
}

/// Email of 6 to 254 UTF-16 code units that matches [`email`].
pub fn is_valid_email(value: &Value) -> bool {
    value.as_str().is_some_and(|s| {
        let len = utf16_len(s);
        len > 5 && len < 255 && EMAIL.is_match(s)
    })
}

pub fn is_valid_phone(value: &Value) -> bool {
    value.as_str().is_some_and(|s| PHONE.is_match(s))
}

/// 8 to 24 UTF-16 code units on a single line, with at least one digit, one
/// uppercase and one lowercase ASCII letter.
pub fn is_valid_password(value: &Value) -> bool {
    value.as_str().is_some_and(password_matches)
}

fn password_matches(s: &str) -> bool {
    is_single_line(s)
        && (8..=24).contains(&utf16_len(s))
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_lowercase())
}

// Lengths are measured the way browsers measure `String.length`.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn is_single_line(s: &str) -> bool {
    !s.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
}
