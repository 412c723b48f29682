//! The immutable temporal value produced by parsing.

use std::fmt;

use serde::Serialize;

use crate::approx;
use crate::calendar::{self, CalendarDate, CalendarModel};
use crate::error::{Result, TimeError};
use crate::parse::parse_with_settings;
use crate::precision::Precision;
use crate::settings::TimeSettings;

/// An immutable temporal value: calendar fields plus a precision.
///
/// A value is either valid (it has a year) or invalid (built from
/// unparseable free text); [`TimeValue::is_valid`] distinguishes the two,
/// and no calendar projection is defined for an invalid value.
///
/// Equality is calendar-normalized: two values are equal when they have the
/// same precision and the same ISO 8601 rendering, which projects through
/// the Gregorian calendar. A Julian date and the Gregorian date naming the
/// same day therefore compare equal.
///
/// ```
/// use chronotext::{CalendarModel, Precision, TimeValue};
///
/// let julian = TimeValue::new(1582, 10, 4, Precision::Day, CalendarModel::Julian).unwrap();
/// let gregorian = TimeValue::new(1582, 10, 14, Precision::Day, CalendarModel::Gregorian).unwrap();
/// assert_eq!(julian, gregorian);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TimeValue {
    pub(crate) year: Option<i64>,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    pub(crate) utc_offset_minutes: i32,
    pub(crate) precision: Precision,
    pub(crate) calendar: CalendarModel,
    pub(crate) before: u32,
    pub(crate) after: u32,
}

impl TimeValue {
    /// Construct a value from explicit fields, at midnight.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::FieldOutOfRange`] when the month is outside
    /// 1-12 or the day outside 1-31. Month-specific day counts are not
    /// checked.
    pub fn new(
        year: i64,
        month: u8,
        day: u8,
        precision: Precision,
        calendar: CalendarModel,
    ) -> Result<TimeValue> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::FieldOutOfRange(format!("month {month}")));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::FieldOutOfRange(format!("day {day}")));
        }
        Ok(TimeValue {
            year: Some(year),
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            utc_offset_minutes: 0,
            precision,
            calendar,
            before: 0,
            after: 0,
        })
    }

    /// Replace the time of day.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::FieldOutOfRange`] for an hour above 23 or a
    /// minute or second above 59.
    pub fn with_hms(self, hour: u8, minute: u8, second: u8) -> Result<TimeValue> {
        if hour > 23 {
            return Err(TimeError::FieldOutOfRange(format!("hour {hour}")));
        }
        if minute > 59 {
            return Err(TimeError::FieldOutOfRange(format!("minute {minute}")));
        }
        if second > 59 {
            return Err(TimeError::FieldOutOfRange(format!("second {second}")));
        }
        Ok(TimeValue {
            hour,
            minute,
            second,
            ..self
        })
    }

    /// Replace the uncertainty bounds (units of the value's precision).
    pub fn with_uncertainty(self, before: u32, after: u32) -> TimeValue {
        TimeValue {
            before,
            after,
            ..self
        }
    }

    /// Parse free text with the default English settings.
    ///
    /// This is lenient: unparseable input yields an invalid value rather
    /// than an error.
    pub fn from_free_text(text: &str) -> TimeValue {
        TimeValue::from_free_text_with(text, &TimeSettings::default(), None)
    }

    /// Parse free text with explicit settings and an optional precision
    /// override applied after resolution.
    pub fn from_free_text_with(
        text: &str,
        settings: &TimeSettings,
        precision: Option<Precision>,
    ) -> TimeValue {
        match parse_with_settings(text, settings) {
            Some(resolved) => TimeValue {
                year: Some(resolved.year),
                month: resolved.month.unwrap_or(1),
                day: resolved.day.unwrap_or(1),
                hour: 0,
                minute: 0,
                second: 0,
                utc_offset_minutes: 0,
                precision: precision.unwrap_or(resolved.precision),
                calendar: resolved.calendar,
                before: 0,
                after: 0,
            },
            None => TimeValue::invalid(),
        }
    }

    /// Parse a strict ISO 8601 datetime, Gregorian calendar.
    ///
    /// See [`TimeValue::from_iso8601_with`].
    pub fn from_iso8601(text: &str) -> Result<TimeValue> {
        TimeValue::from_iso8601_with(text, None)
    }

    /// Parse a strict ISO 8601 datetime with an optional precision
    /// override.
    ///
    /// Accepts an optional leading sign, a year of up to eleven digits, and
    /// an optional trailing `Z`. The literal `T` time separator is
    /// mandatory: date-only strings are rejected, and callers wanting them
    /// accepted must append `T00:00:00` themselves. Without an override the
    /// precision is the finest nonzero time component, or day.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidIso8601`] for a malformed string and
    /// [`TimeError::FieldOutOfRange`] for out-of-range components.
    pub fn from_iso8601_with(text: &str, precision: Option<Precision>) -> Result<TimeValue> {
        let fields = parse_iso_fields(text)?;
        let precision = precision.unwrap_or_else(|| fields.finest_precision());
        Ok(TimeValue {
            year: Some(fields.year),
            month: fields.month,
            day: fields.day,
            hour: fields.hour,
            minute: fields.minute,
            second: fields.second,
            utc_offset_minutes: 0,
            precision,
            calendar: CalendarModel::Gregorian,
            before: 0,
            after: 0,
        })
    }

    fn invalid() -> TimeValue {
        TimeValue {
            year: None,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            utc_offset_minutes: 0,
            precision: Precision::Year,
            calendar: CalendarModel::Gregorian,
            before: 0,
            after: 0,
        }
    }

    /// Whether the value holds a year (false for values built from
    /// unparseable free text).
    pub fn is_valid(&self) -> bool {
        self.year.is_some()
    }

    pub fn year(&self) -> Option<i64> {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn calendar(&self) -> CalendarModel {
        self.calendar
    }

    pub fn before(&self) -> u32 {
        self.before
    }

    pub fn after(&self) -> u32 {
        self.after
    }

    /// The stored date projected into the Gregorian calendar.
    pub fn gregorian(&self) -> Option<CalendarDate> {
        let year = self.year?;
        Some(match self.calendar {
            CalendarModel::Gregorian => CalendarDate {
                year,
                month: self.month,
                day: self.day,
            },
            CalendarModel::Julian => calendar::julian_to_gregorian(year, self.month, self.day),
        })
    }

    /// The stored date projected into the Julian calendar.
    pub fn julian(&self) -> Option<CalendarDate> {
        let year = self.year?;
        Some(match self.calendar {
            CalendarModel::Julian => CalendarDate {
                year,
                month: self.month,
                day: self.day,
            },
            CalendarModel::Gregorian => calendar::gregorian_to_julian(year, self.month, self.day),
        })
    }

    /// The Julian Day Number of the stored date.
    pub fn julian_day_number(&self) -> Option<i64> {
        let year = self.year?;
        Some(match self.calendar {
            CalendarModel::Julian => calendar::julian_to_jdn(year, self.month, self.day),
            CalendarModel::Gregorian => calendar::gregorian_to_jdn(year, self.month, self.day),
        })
    }

    /// The ISO 8601 rendering: `±YYYYYYYYYYY-MM-DDTHH:MM:SSZ`, with the
    /// year always signed and padded to eleven digits, in the Gregorian
    /// projection of the stored fields. `None` for invalid values.
    pub fn to_iso8601(&self) -> Option<String> {
        let date = self.gregorian()?;
        Some(format_time(
            date.year,
            date.month,
            date.day,
            self.hour,
            self.minute,
            self.second,
        ))
    }

    /// Render a human-readable string at the given precision, default
    /// settings.
    pub fn text_at(&self, precision: Precision) -> String {
        self.text_at_with(precision, &TimeSettings::default())
    }

    /// Render a human-readable string at the given precision.
    ///
    /// Coarser than a year: the approximate phrasing ("3 billion years").
    /// Year: the era-phrased year ("45 BCE" for year -44). Month: month
    /// name and year. Day or finer: the full date, in the locale's
    /// day/month order. Invalid values render as the empty string.
    pub fn text_at_with(&self, precision: Precision, settings: &TimeSettings) -> String {
        let Some(year) = self.year else {
            return String::new();
        };

        if precision < Precision::Year {
            return approx::render_approximate_year(year, precision, settings)
                .unwrap_or_default();
        }

        let year_text = if year < 1 {
            match settings.bce_marker() {
                Some(marker) => format!("{} {marker}", 1 - year),
                None => year.to_string(),
            }
        } else {
            year.to_string()
        };

        match precision {
            Precision::Year => year_text,
            Precision::Month => format!("{} {year_text}", self.month_text(settings)),
            _ => {
                if settings.day_before_month {
                    format!("{} {} {year_text}", self.day, self.month_text(settings))
                } else {
                    format!("{} {} {year_text}", self.month_text(settings), self.day)
                }
            }
        }
    }

    fn month_text(&self, settings: &TimeSettings) -> String {
        settings
            .month_name(self.month)
            .map(str::to_string)
            .unwrap_or_else(|| self.month.to_string())
    }
}

impl PartialEq for TimeValue {
    fn eq(&self, other: &TimeValue) -> bool {
        self.precision == other.precision && self.to_iso8601() == other.to_iso8601()
    }
}

impl Eq for TimeValue {}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_at(self.precision))
    }
}

/// Format calendar fields as `±YYYYYYYYYYY-MM-DDTHH:MM:SSZ`.
pub(crate) fn format_time(year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> String {
    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{sign}{:011}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z",
        year.unsigned_abs()
    )
}

/// The components of a strict ISO 8601 datetime string.
pub(crate) struct IsoFields {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl IsoFields {
    /// The finest nonzero time component, or day.
    fn finest_precision(&self) -> Precision {
        if self.second > 0 {
            Precision::Second
        } else if self.minute > 0 {
            Precision::Minute
        } else if self.hour > 0 {
            Precision::Hour
        } else {
            Precision::Day
        }
    }
}

/// Parse a strict ISO 8601 datetime into its components.
///
/// The date fields are validated before the `T` separator is required, so
/// `"1200-13-23"` reports the out-of-range month rather than the missing
/// time part.
pub(crate) fn parse_iso_fields(text: &str) -> Result<IsoFields> {
    let malformed = || TimeError::InvalidIso8601(format!("'{text}'"));

    let s = text.trim();
    let s = s.strip_suffix('Z').unwrap_or(s);
    let (date_part, time_part) = match s.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (s, None),
    };

    let (negative, date_digits) = if let Some(rest) = date_part.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = date_part.strip_prefix('+') {
        (false, rest)
    } else {
        (false, date_part)
    };

    let mut parts = date_digits.splitn(3, '-');
    let year_s = parts.next().ok_or_else(malformed)?;
    let month_s = parts.next().ok_or_else(malformed)?;
    let day_s = parts.next().ok_or_else(malformed)?;

    if year_s.is_empty() || year_s.len() > 11 || !year_s.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }
    let year: i64 = year_s.parse().map_err(|_| malformed())?;
    let year = if negative { -year } else { year };

    let month = parse_component(month_s, 2).ok_or_else(malformed)?;
    if !(1..=12).contains(&month) {
        return Err(TimeError::FieldOutOfRange(format!("month {month}")));
    }
    let day = parse_component(day_s, 2).ok_or_else(malformed)?;
    if !(1..=31).contains(&day) {
        return Err(TimeError::FieldOutOfRange(format!("day {day}")));
    }

    let time_part = time_part.ok_or_else(|| {
        TimeError::InvalidIso8601(format!("'{text}': missing 'T' time separator"))
    })?;
    let mut parts = time_part.splitn(3, ':');
    let hour_s = parts.next().ok_or_else(malformed)?;
    let minute_s = parts.next().ok_or_else(malformed)?;
    let second_s = parts.next().ok_or_else(malformed)?;

    let hour = parse_component(hour_s, 2).ok_or_else(malformed)?;
    if hour > 23 {
        return Err(TimeError::FieldOutOfRange(format!("hour {hour}")));
    }
    let minute = parse_component(minute_s, 2).ok_or_else(malformed)?;
    if minute > 59 {
        return Err(TimeError::FieldOutOfRange(format!("minute {minute}")));
    }
    let second = parse_component(second_s, 2).ok_or_else(malformed)?;
    if second > 59 {
        return Err(TimeError::FieldOutOfRange(format!("second {second}")));
    }

    Ok(IsoFields {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

/// Parse an all-digit component of at most `max_len` digits.
fn parse_component(s: &str, max_len: usize) -> Option<u8> {
    if s.is_empty() || s.len() > max_len || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
