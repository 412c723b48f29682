//! Proleptic Julian/Gregorian calendar conversion via Julian Day Numbers.
//!
//! The Julian Day Number (JDN) is a continuous day count used as the
//! calendar-agnostic intermediate: every conversion between the two
//! calendars goes through it. The formulas are the standard public-domain
//! integer algorithms (Fliegel/Richards), evaluated with floor division so
//! they remain exact for arbitrarily negative proleptic years.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Calendar-model entity URI for the proleptic Gregorian calendar.
pub const GREGORIAN_URI: &str = "http://www.wikidata.org/entity/Q1985727";

/// Calendar-model entity URI for the proleptic Julian calendar.
pub const JULIAN_URI: &str = "http://www.wikidata.org/entity/Q1985786";

/// The calendar system a date's fields are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarModel {
    Gregorian,
    Julian,
}

impl CalendarModel {
    /// The entity URI naming this calendar in wire records.
    pub fn uri(self) -> &'static str {
        match self {
            CalendarModel::Gregorian => GREGORIAN_URI,
            CalendarModel::Julian => JULIAN_URI,
        }
    }

    /// Resolve a calendar-model entity URI.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidCalendar`] for any URI other than the two
    /// known calendar models.
    pub fn from_uri(uri: &str) -> Result<Self, TimeError> {
        match uri {
            GREGORIAN_URI => Ok(CalendarModel::Gregorian),
            JULIAN_URI => Ok(CalendarModel::Julian),
            other => Err(TimeError::InvalidCalendar(format!("'{other}'"))),
        }
    }
}

impl FromStr for CalendarModel {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, TimeError> {
        if s.eq_ignore_ascii_case("gregorian") {
            Ok(CalendarModel::Gregorian)
        } else if s.eq_ignore_ascii_case("julian") {
            Ok(CalendarModel::Julian)
        } else {
            Err(TimeError::InvalidCalendar(format!("'{s}'")))
        }
    }
}

impl fmt::Display for CalendarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarModel::Gregorian => f.write_str("Gregorian"),
            CalendarModel::Julian => f.write_str("Julian"),
        }
    }
}

/// A {year, month, day} triple in some calendar.
///
/// Years use astronomical numbering (year 0 exists; 1 BCE is year 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

/// Julian Day Number of a proleptic Julian calendar date.
pub fn julian_to_jdn(year: i64, month: u8, day: u8) -> i64 {
    let m = month as i64;
    let a = (14 - m).div_euclid(12);
    let y = year + 4800 - a;
    let m = m + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
}

/// Julian Day Number of a proleptic Gregorian calendar date.
///
/// ```
/// use chronotext::calendar::gregorian_to_jdn;
///
/// assert_eq!(gregorian_to_jdn(2000, 1, 1), 2451545);
/// ```
pub fn gregorian_to_jdn(year: i64, month: u8, day: u8) -> i64 {
    let m = month as i64;
    let a = (14 - m).div_euclid(12);
    let y = year + 4800 - a;
    let m = m + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// The proleptic Julian calendar date of a Julian Day Number.
pub fn jdn_to_julian(jdn: i64) -> CalendarDate {
    let a = jdn + 32082;
    let b = (4 * a + 3).div_euclid(1461);
    let c = a - (1461 * b).div_euclid(4);
    let d = (5 * c + 2).div_euclid(153);
    let day = c - (153 * d + 2).div_euclid(5) + 1;
    let month = d + 3 - 12 * d.div_euclid(10);
    let year = b - 4800 + d.div_euclid(10);
    CalendarDate {
        year,
        month: month as u8,
        day: day as u8,
    }
}

/// The proleptic Gregorian calendar date of a Julian Day Number.
pub fn jdn_to_gregorian(jdn: i64) -> CalendarDate {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146097);
    let c = a - (146097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    CalendarDate {
        year,
        month: month as u8,
        day: day as u8,
    }
}

/// Convert a Julian calendar date to its Gregorian equivalent.
///
/// ```
/// use chronotext::calendar::julian_to_gregorian;
///
/// // The last day of the Julian calendar in Rome was followed by
/// // Gregorian October 15, 1582.
/// let date = julian_to_gregorian(1582, 10, 4);
/// assert_eq!((date.year, date.month, date.day), (1582, 10, 14));
/// ```
pub fn julian_to_gregorian(year: i64, month: u8, day: u8) -> CalendarDate {
    jdn_to_gregorian(julian_to_jdn(year, month, day))
}

/// Convert a Gregorian calendar date to its Julian equivalent.
pub fn gregorian_to_julian(year: i64, month: u8, day: u8) -> CalendarDate {
    jdn_to_julian(gregorian_to_jdn(year, month, day))
}
