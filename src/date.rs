//! Date predicates and small date helpers.

use crate::core::Value;
use crate::patterns;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a value could not be read as a date range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Date range must be an object")]
    NotAnObject,

    #[error("Date range bound `{0}` is missing")]
    MissingBound(&'static str),

    #[error("Date range bound `{0}` is not a valid date")]
    InvalidBound(&'static str),

    #[error("Date range start must be before its end")]
    NotIncreasing,
}

/// True for a date instance holding a real instant.
pub fn is_valid_date_instance(value: &Value) -> bool {
    value.as_date().is_some()
}

/// A strictly increasing pair of instants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// `None` unless `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Read `start` and `end` date instances off an object value.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl TryFrom<&Value> for DateRange {
    type Error = DateRangeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let start = *bound(value, "start")?
            .as_date()
            .ok_or(DateRangeError::InvalidBound("start"))?;
        let end = *bound(value, "end")?
            .as_date()
            .ok_or(DateRangeError::InvalidBound("end"))?;
        Self::new(start, end).ok_or(DateRangeError::NotIncreasing)
    }
}

fn bound<'a>(value: &'a Value, name: &'static str) -> Result<&'a Value, DateRangeError> {
    if !value.is_object() {
        return Err(DateRangeError::NotAnObject);
    }
    value
        .own_property(name)
        .ok_or(DateRangeError::MissingBound(name))
}

/// Object with valid `start` and `end` dates where `start < end`.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use shapeguard::core::Value;
/// use shapeguard::date::is_date_range;
///
/// let day = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
/// let range: Value = [
///     ("start".to_string(), Value::from(day)),
///     ("end".to_string(), Value::from(day)),
/// ]
/// .into_iter()
/// .collect();
///
/// // Equal bounds are not a range.
/// assert!(!is_date_range(&range));
/// ```
pub fn is_date_range(value: &Value) -> bool {
    DateRange::from_value(value).is_some()
}

/// A strictly increasing pair of ISO instant strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoDateRange {
    pub start: String,
    pub end: String,
}

impl IsoDateRange {
    /// Read `start` and `end` strings matching `pattern` off an object value.
    ///
    /// Both must also name a real instant: a pattern-valid string like
    /// `2023-02-29T00:00:00.000Z` does not, so the range is rejected.
    pub fn from_value(value: &Value, pattern: &Regex) -> Option<Self> {
        Self::parse(value, pattern).ok()
    }

    /// Like [`IsoDateRange::from_value`], reporting why the value was rejected.
    pub fn parse(value: &Value, pattern: &Regex) -> Result<Self, DateRangeError> {
        let start = iso_bound(value, "start", pattern)?;
        let end = iso_bound(value, "end", pattern)?;

        let instants = (parse_instant(start), parse_instant(end));
        match instants {
            (None, _) => Err(DateRangeError::InvalidBound("start")),
            (_, None) => Err(DateRangeError::InvalidBound("end")),
            (Some(a), Some(b)) if a < b => Ok(Self {
                start: start.to_string(),
                end: end.to_string(),
            }),
            _ => Err(DateRangeError::NotIncreasing),
        }
    }

    /// Both bounds as instants.
    pub fn to_date_range(&self) -> Option<DateRange> {
        DateRange::new(parse_instant(&self.start)?, parse_instant(&self.end)?)
    }
}

/// Reads against [`patterns::iso_date`]; use [`IsoDateRange::parse`] for the
/// 15-minute variant.
impl TryFrom<&Value> for IsoDateRange {
    type Error = DateRangeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::parse(value, patterns::iso_date())
    }
}

fn iso_bound<'a>(
    value: &'a Value,
    name: &'static str,
    pattern: &Regex,
) -> Result<&'a str, DateRangeError> {
    bound(value, name)?
        .as_str()
        .filter(|s| pattern.is_match(s))
        .ok_or(DateRangeError::InvalidBound(name))
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

pub fn is_iso_date_string(s: &str) -> bool {
    patterns::iso_date().is_match(s)
}

pub fn is_iso_date_string_15min_increments(s: &str) -> bool {
    patterns::iso_date_15min_increments().is_match(s)
}

pub fn is_iso_date_range(value: &Value) -> bool {
    IsoDateRange::from_value(value, patterns::iso_date()).is_some()
}

pub fn is_iso_date_range_15min_increments(value: &Value) -> bool {
    IsoDateRange::from_value(value, patterns::iso_date_15min_increments()).is_some()
}

fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// Integer strictly between 2000 and 2050.
pub fn is_reasonable_year_number(year: f64) -> bool {
    is_integer(year) && year > 2000.0 && year < 2050.0
}

/// Integer from 1 to 12.
pub fn is_month_number(month: f64) -> bool {
    is_integer(month) && month > 0.0 && month < 13.0
}

/// Integer from 1 to 31.
pub fn is_day_number(day: f64) -> bool {
    is_integer(day) && day > 0.0 && day < 32.0
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

fn format_timestamp<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `None` if the result is out of range.
pub fn add_minutes_to_date(date: DateTime<Utc>, minutes: i64) -> Option<DateTime<Utc>> {
    Duration::try_minutes(minutes).and_then(|delta| date.checked_add_signed(delta))
}

/// Same calendar day in the dates' own time zone.
pub fn is_same_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.date_naive() == b.date_naive()
}
