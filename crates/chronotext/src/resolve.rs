//! Precision and era resolution for grammar matches.
//!
//! Turns the sparse field assignments of a grammar match into a normalized
//! record: a signed astronomical year, an inferred precision, and a default
//! calendar when none was named in the input.

use serde::Serialize;

use crate::calendar::CalendarModel;
use crate::grammar::TimeMatch;
use crate::precision::Precision;

/// Years inside this range keep YEAR precision regardless of trailing
/// zeros; outside it, round years are read as approximations.
const MAGNITUDE_LOW: i64 = -1500;
const MAGNITUDE_HIGH: i64 = 5000;

/// First year for which a day-precise date defaults to the Gregorian
/// calendar instead of the Julian one.
const GREGORIAN_START_YEAR: i64 = 1583;

/// The normalized result of parsing a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTime {
    /// Signed year in astronomical numbering (1 BCE is year 0).
    pub year: i64,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub precision: Precision,
    pub calendar: CalendarModel,
}

/// Resolve a grammar match into normalized time fields.
///
/// An explicit era marker overrides a leading minus: the minus is consumed
/// and ignored. An era marker next to a raw year below 1 makes the whole
/// parse fail (`None`), keeping the lenient no-result contract. BCE years
/// shift into astronomical numbering (`45 BC` becomes year -44).
pub fn resolve_match(matched: &TimeMatch) -> Option<ResolvedTime> {
    let raw = matched.year?;

    // The precision heuristic reads the year before any BCE shift, so
    // "3000000 BCE" infers its precision from 3000000 and stores -2999999.
    let (basis, year) = match matched.bce {
        Some(bce) => {
            if raw < 1 {
                return None;
            }
            (raw, if bce { -(raw - 1) } else { raw })
        }
        None => {
            let signed = if matched.minus { -raw } else { raw };
            (signed, signed)
        }
    };

    let mut precision = Precision::Year;
    if !(MAGNITUDE_LOW..=MAGNITUDE_HIGH).contains(&basis) {
        precision = magnitude_precision(basis)?;
    }
    if matched.month.is_some() {
        precision = Precision::Month;
    }
    if matched.day.is_some() {
        precision = Precision::Day;
    }

    let calendar = match matched.calendar {
        Some(calendar) => calendar,
        None if year < GREGORIAN_START_YEAR && precision > Precision::Month => {
            CalendarModel::Julian
        }
        None => CalendarModel::Gregorian,
    };

    Some(ResolvedTime {
        year,
        month: matched.month,
        day: matched.day,
        precision,
        calendar,
    })
}

/// Infer a coarse precision from the trailing zeros of a far-past or
/// far-future year: one level coarser per stripped zero, clamped at the
/// coarsest level.
fn magnitude_precision(year: i64) -> Option<Precision> {
    let mut n = year;
    let mut level = Precision::Year.level();
    while n != 0 && n % 10 == 0 && level > Precision::COARSEST.level() {
        n /= 10;
        level -= 1;
    }
    Precision::try_from(level).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_match(year: i64) -> TimeMatch {
        TimeMatch {
            year: Some(year),
            ..TimeMatch::default()
        }
    }

    #[test]
    fn plain_year_keeps_year_precision() {
        let resolved = resolve_match(&year_match(1981)).unwrap();
        assert_eq!(resolved.year, 1981);
        assert_eq!(resolved.precision, Precision::Year);
        assert_eq!(resolved.calendar, CalendarModel::Gregorian);
    }

    #[test]
    fn bce_marker_shifts_to_astronomical_numbering() {
        let matched = TimeMatch {
            year: Some(45),
            bce: Some(true),
            ..TimeMatch::default()
        };
        let resolved = resolve_match(&matched).unwrap();
        assert_eq!(resolved.year, -44);
        assert_eq!(resolved.precision, Precision::Year);
    }

    #[test]
    fn era_marker_overrides_leading_minus() {
        let matched = TimeMatch {
            year: Some(45),
            bce: Some(true),
            minus: true,
            ..TimeMatch::default()
        };
        assert_eq!(resolve_match(&matched).unwrap().year, -44);
    }

    #[test]
    fn era_marker_with_nonpositive_year_fails() {
        let matched = TimeMatch {
            year: Some(0),
            bce: Some(true),
            ..TimeMatch::default()
        };
        assert_eq!(resolve_match(&matched), None);
    }

    #[test]
    fn missing_year_fails() {
        let matched = TimeMatch {
            month: Some(4),
            ..TimeMatch::default()
        };
        assert_eq!(resolve_match(&matched), None);
    }

    #[test]
    fn minus_negates_without_a_shift() {
        let matched = TimeMatch {
            year: Some(1000),
            minus: true,
            ..TimeMatch::default()
        };
        let resolved = resolve_match(&matched).unwrap();
        assert_eq!(resolved.year, -1000);
        assert_eq!(resolved.precision, Precision::Year);
    }

    #[test]
    fn trailing_zeros_coarsen_far_years() {
        assert_eq!(
            resolve_match(&year_match(10_000)).unwrap().precision,
            Precision::TenThousandYears
        );
        assert_eq!(
            resolve_match(&year_match(2_000_000)).unwrap().precision,
            Precision::MillionYears
        );
        // Non-zero trailing digit stops the stripping immediately.
        assert_eq!(
            resolve_match(&year_match(2_000_001)).unwrap().precision,
            Precision::Year
        );
    }

    #[test]
    fn stripping_clamps_at_the_coarsest_level() {
        assert_eq!(
            resolve_match(&year_match(10_000_000_000)).unwrap().precision,
            Precision::BillionYears
        );
    }

    #[test]
    fn magnitude_heuristic_runs_before_the_bce_shift() {
        let matched = TimeMatch {
            year: Some(3_000_000),
            bce: Some(true),
            ..TimeMatch::default()
        };
        let resolved = resolve_match(&matched).unwrap();
        assert_eq!(resolved.year, -2_999_999);
        assert_eq!(resolved.precision, Precision::MillionYears);
    }

    #[test]
    fn threshold_boundaries_keep_year_precision() {
        assert_eq!(resolve_match(&year_match(5000)).unwrap().precision, Precision::Year);
        assert_eq!(resolve_match(&year_match(-1500)).unwrap().precision, Precision::Year);
        assert_eq!(
            resolve_match(&year_match(-1510)).unwrap().precision,
            Precision::Decade
        );
    }

    #[test]
    fn day_precision_in_the_deep_past_defaults_to_julian() {
        let matched = TimeMatch {
            year: Some(1492),
            month: Some(10),
            day: Some(12),
            ..TimeMatch::default()
        };
        let resolved = resolve_match(&matched).unwrap();
        assert_eq!(resolved.precision, Precision::Day);
        assert_eq!(resolved.calendar, CalendarModel::Julian);
    }

    #[test]
    fn coarser_precisions_default_to_gregorian() {
        let matched = TimeMatch {
            year: Some(1492),
            month: Some(10),
            ..TimeMatch::default()
        };
        assert_eq!(resolve_match(&matched).unwrap().calendar, CalendarModel::Gregorian);
    }

    #[test]
    fn explicit_calendar_is_kept() {
        let matched = TimeMatch {
            year: Some(1700),
            month: Some(2),
            day: Some(11),
            calendar: Some(CalendarModel::Julian),
            ..TimeMatch::default()
        };
        assert_eq!(resolve_match(&matched).unwrap().calendar, CalendarModel::Julian);
    }
}
