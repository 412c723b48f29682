//! The parse pipeline: recognizer short-circuit, then tokenize, match,
//! resolve.

use crate::approx;
use crate::grammar;
use crate::resolve::{self, ResolvedTime};
use crate::settings::TimeSettings;
use crate::token;

/// Parse a free-text date string with the default English settings.
///
/// Unparseable input returns `None`, never an error.
///
/// ```
/// use chronotext::{parse, Precision};
///
/// let resolved = parse("45 BC").unwrap();
/// assert_eq!(resolved.year, -44);
/// assert_eq!(resolved.precision, Precision::Year);
///
/// assert_eq!(parse("random string"), None);
/// ```
pub fn parse(text: &str) -> Option<ResolvedTime> {
    parse_with_settings(text, &TimeSettings::default())
}

/// Parse a free-text date string with explicit settings.
pub fn parse_with_settings(text: &str, settings: &TimeSettings) -> Option<ResolvedTime> {
    if let Some(resolved) = approx::try_reconvert(text, settings) {
        return Some(resolved);
    }
    let tokens = token::tokenize(text, settings)?;
    let matched = grammar::match_tokens(&tokens, settings)?;
    resolve::resolve_match(&matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarModel;
    use crate::precision::Precision;

    #[test]
    fn ambiguous_numbers_follow_the_locale_priority() {
        let resolved = parse("5 9 1981").unwrap();
        assert_eq!((resolved.day, resolved.month, resolved.year), (Some(5), Some(9), 1981));

        let resolved = parse("9 1981").unwrap();
        assert_eq!((resolved.month, resolved.year), (Some(9), 1981));
        assert_eq!(resolved.precision, Precision::Month);
    }

    #[test]
    fn precision_inference_examples() {
        let resolved = parse("1980s").unwrap();
        assert_eq!((resolved.year, resolved.precision), (1980, Precision::Decade));

        let resolved = parse("-1000").unwrap();
        assert_eq!((resolved.year, resolved.precision), (-1000, Precision::Year));

        let resolved = parse("45 BC").unwrap();
        assert_eq!((resolved.year, resolved.precision), (-44, Precision::Year));
    }

    #[test]
    fn calendar_defaulting_examples() {
        let resolved = parse("12 October 1492").unwrap();
        assert_eq!(resolved.calendar, CalendarModel::Julian);

        let resolved = parse("2001-01-02").unwrap();
        assert_eq!(resolved.calendar, CalendarModel::Gregorian);
        assert_eq!((resolved.month, resolved.day), (Some(1), Some(2)));
    }

    #[test]
    fn era_marker_overrides_a_leading_minus() {
        let resolved = parse("-45 BC").unwrap();
        assert_eq!(resolved.year, -44);
    }

    #[test]
    fn garbage_returns_none() {
        assert_eq!(parse("random string"), None);
        assert_eq!(parse("42 abc"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn recognizer_runs_before_the_tokenizer() {
        // "3 billion years ago" would abort in the tokenizer ("billion" is
        // not a configured word); the recognizer claims it first.
        let resolved = parse("3 billion years ago").unwrap();
        assert_eq!(resolved.year, -3_000_000_000);
        assert_eq!(resolved.precision, Precision::BillionYears);
    }

    #[test]
    fn alternate_locale_settings() {
        let mut settings = TimeSettings::default();
        settings.month_names[2] = vec!["März".to_string(), "Mär".to_string()];
        let resolved = parse_with_settings("22. März 1616", &settings).unwrap();
        assert_eq!((resolved.day, resolved.month, resolved.year), (Some(22), Some(3), 1616));
    }
}
