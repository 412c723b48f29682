//! The approximate-output formats: rendering and reconversion.
//!
//! Precisions coarser than a year render through templates like
//! `"% billion years"` or `"%0s"`. The inverse path, [`try_reconvert`],
//! recognizes strings already in one of those output shapes and turns them
//! straight back into a year and precision. It runs before tokenization on
//! every parse, so `"3 billion years ago"` never reaches the grammar
//! matcher.

use crate::calendar::CalendarModel;
use crate::precision::Precision;
use crate::resolve::ResolvedTime;
use crate::settings::TimeSettings;

/// Render a year at a precision coarser than [`Precision::Year`].
///
/// The year is divided (rounding) by the template's scale and substituted
/// for the `%` placeholder; negative years get the settings' primary BCE
/// marker appended. Returns `None` when no template exists for the
/// precision (YEAR and finer have none).
pub fn render_approximate_year(
    year: i64,
    precision: Precision,
    settings: &TimeSettings,
) -> Option<String> {
    let format = settings.formats.iter().find(|f| f.precision == precision)?;
    let significand = (year.abs() + format.scale / 2) / format.scale;
    let text = format.template.replacen('%', &significand.to_string(), 1);
    if year < 0 {
        let marker = settings.bce_marker()?;
        Some(format!("{text} {marker}"))
    } else {
        Some(text)
    }
}

/// Recognize a string in one of the approximate output formats.
///
/// Strips one optional era or past-tense marker, then tries each template
/// coarsest-first: the text around the `%` placeholder must match literally
/// and the placeholder itself must be a plain digit run. On a match the
/// significand times the template scale recovers the year, negated when a
/// BCE or past marker was present.
pub fn try_reconvert(text: &str, settings: &TimeSettings) -> Option<ResolvedTime> {
    let (body, negate) = strip_marker(text.trim(), settings);

    for format in &settings.formats {
        let Some((prefix, suffix)) = format.template.split_once('%') else {
            continue;
        };
        let Some(rest) = body.strip_prefix(prefix) else {
            continue;
        };
        let Some(significand) = rest.strip_suffix(suffix) else {
            continue;
        };
        if significand.is_empty()
            || significand.len() > 11
            || !significand.chars().all(|c| c.is_ascii_digit())
        {
            continue;
        }
        let value: i64 = significand.parse().ok()?;
        let year = value.checked_mul(format.scale)?;
        return Some(ResolvedTime {
            year: if negate { -year } else { year },
            month: None,
            day: None,
            precision: format.precision,
            calendar: CalendarModel::Gregorian,
        });
    }
    None
}

/// Strip one era or past-tense marker from either end of the text.
/// The boolean is whether the year should be negated.
fn strip_marker<'a>(text: &'a str, settings: &TimeSettings) -> (&'a str, bool) {
    for (marker, bce) in &settings.era_markers {
        if let Some(rest) = strip_suffix_word(text, marker).or_else(|| strip_prefix_word(text, marker))
        {
            return (rest, *bce);
        }
    }
    for marker in &settings.past_markers {
        if let Some(rest) = strip_suffix_word(text, marker) {
            return (rest, true);
        }
    }
    (text, false)
}

/// Case-insensitive whole-word suffix strip; the marker must be preceded by
/// whitespace.
fn strip_suffix_word<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(marker.len())?;
    if split == 0 || !text.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = text.split_at(split);
    if tail.eq_ignore_ascii_case(marker) && head.ends_with(|c: char| c.is_whitespace()) {
        Some(head.trim_end())
    } else {
        None
    }
}

/// Case-insensitive whole-word prefix strip; the marker must be followed by
/// whitespace.
fn strip_prefix_word<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    if text.len() <= marker.len() || !text.is_char_boundary(marker.len()) {
        return None;
    }
    let (head, tail) = text.split_at(marker.len());
    if head.eq_ignore_ascii_case(marker) && tail.starts_with(|c: char| c.is_whitespace()) {
        Some(tail.trim_start())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconvert(input: &str) -> Option<ResolvedTime> {
        try_reconvert(input, &TimeSettings::default())
    }

    #[test]
    fn recognizes_decade_shorthand() {
        let resolved = reconvert("1980s").unwrap();
        assert_eq!(resolved.year, 1980);
        assert_eq!(resolved.precision, Precision::Decade);
        assert_eq!(resolved.calendar, CalendarModel::Gregorian);
    }

    #[test]
    fn recognizes_deep_time_with_past_marker() {
        let resolved = reconvert("3 billion years ago").unwrap();
        assert_eq!(resolved.year, -3_000_000_000);
        assert_eq!(resolved.precision, Precision::BillionYears);
    }

    #[test]
    fn recognizes_grouped_digits_literally() {
        let resolved = reconvert("300,000 years").unwrap();
        assert_eq!(resolved.year, 300_000);
        assert_eq!(resolved.precision, Precision::HundredThousandYears);
    }

    #[test]
    fn recognizes_ordinal_century_and_millennium() {
        let resolved = reconvert("20. century").unwrap();
        assert_eq!(resolved.year, 2000);
        assert_eq!(resolved.precision, Precision::Century);

        let resolved = reconvert("2. millennium BCE").unwrap();
        assert_eq!(resolved.year, -2000);
        assert_eq!(resolved.precision, Precision::Millennium);
    }

    #[test]
    fn rejects_plain_dates() {
        assert_eq!(reconvert("1981"), None);
        assert_eq!(reconvert("22 April 1616"), None);
        assert_eq!(reconvert("2001-01-02"), None);
    }

    #[test]
    fn rendering_rounds_and_marks_bce() {
        let settings = TimeSettings::default();
        assert_eq!(
            render_approximate_year(3_000_000_000, Precision::BillionYears, &settings).as_deref(),
            Some("3 billion years")
        );
        assert_eq!(
            render_approximate_year(-1980, Precision::Decade, &settings).as_deref(),
            Some("1980s BCE")
        );
        assert_eq!(
            render_approximate_year(2_400_000_000, Precision::BillionYears, &settings).as_deref(),
            Some("2 billion years")
        );
        assert_eq!(
            render_approximate_year(1981, Precision::Year, &settings),
            None
        );
    }

    #[test]
    fn reconversion_inverts_rendering() {
        let settings = TimeSettings::default();
        for &(year, precision) in &[
            (7_000_000_000, Precision::BillionYears),
            (300_000_000, Precision::HundredMillionYears),
            (30_000_000, Precision::TenMillionYears),
            (3_000_000, Precision::MillionYears),
            (300_000, Precision::HundredThousandYears),
            (30_000, Precision::TenThousandYears),
            (3_000, Precision::Millennium),
            (300, Precision::Century),
            (1980, Precision::Decade),
        ] {
            let text = render_approximate_year(year, precision, &settings).unwrap();
            let resolved = try_reconvert(&text, &settings).unwrap();
            assert_eq!((resolved.year, resolved.precision), (year, precision), "{text}");
        }
    }
}
