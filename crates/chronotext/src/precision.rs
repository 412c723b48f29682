//! The 15-level precision scale for temporal values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// How precisely a temporal value is known, from billion-year granularity
/// down to the second.
///
/// The discriminants are the wire-level precision levels (0 through 14) and
/// the ordering is by fineness: a coarser precision compares less than a
/// finer one.
///
/// ```
/// use chronotext::Precision;
///
/// assert!(Precision::Decade < Precision::Year);
/// assert_eq!(Precision::Day.level(), 11);
/// assert_eq!(Precision::try_from(8).unwrap(), Precision::Decade);
/// assert!(Precision::try_from(15).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Precision {
    /// 10⁹ years.
    BillionYears,
    /// 10⁸ years.
    HundredMillionYears,
    /// 10⁷ years.
    TenMillionYears,
    /// 10⁶ years.
    MillionYears,
    /// 10⁵ years.
    HundredThousandYears,
    /// 10⁴ years.
    TenThousandYears,
    /// 10³ years.
    Millennium,
    /// 10² years.
    Century,
    /// 10 years.
    Decade,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Precision {
    /// The coarsest representable precision (billion years, level 0).
    pub const COARSEST: Precision = Precision::BillionYears;

    /// The finest representable precision (second, level 14).
    pub const FINEST: Precision = Precision::Second;

    /// The numeric precision level (0 = billion years, 14 = second).
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> u8 {
        precision as u8
    }
}

impl TryFrom<u8> for Precision {
    type Error = TimeError;

    fn try_from(level: u8) -> Result<Self, TimeError> {
        Ok(match level {
            0 => Precision::BillionYears,
            1 => Precision::HundredMillionYears,
            2 => Precision::TenMillionYears,
            3 => Precision::MillionYears,
            4 => Precision::HundredThousandYears,
            5 => Precision::TenThousandYears,
            6 => Precision::Millennium,
            7 => Precision::Century,
            8 => Precision::Decade,
            9 => Precision::Year,
            10 => Precision::Month,
            11 => Precision::Day,
            12 => Precision::Hour,
            13 => Precision::Minute,
            14 => Precision::Second,
            _ => return Err(TimeError::InvalidPrecision(level)),
        })
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precision::BillionYears => "billion years",
            Precision::HundredMillionYears => "100 million years",
            Precision::TenMillionYears => "10 million years",
            Precision::MillionYears => "million years",
            Precision::HundredThousandYears => "100,000 years",
            Precision::TenThousandYears => "10,000 years",
            Precision::Millennium => "millennium",
            Precision::Century => "century",
            Precision::Decade => "decade",
            Precision::Year => "year",
            Precision::Month => "month",
            Precision::Day => "day",
            Precision::Hour => "hour",
            Precision::Minute => "minute",
            Precision::Second => "second",
        };
        f.write_str(name)
    }
}
