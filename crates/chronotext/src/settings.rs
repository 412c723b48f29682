//! Parser configuration: localized name tables and ordering preferences.
//!
//! All configuration is an immutable value passed explicitly into the parse
//! entry points. There is no process-wide mutable state: a settings value is
//! built once (usually [`TimeSettings::default`], the English table) and
//! shared by reference.

use crate::calendar::CalendarModel;
use crate::precision::Precision;

/// One approximate-output template, such as `"% billion years"`.
///
/// The `%` placeholder stands for the significand; multiplying the
/// significand by `scale` recovers the year. The template literal may carry
/// digit-grouping text of its own (`"%00,000 years"` with significand 3
/// renders as `"300,000 years"`).
#[derive(Debug, Clone)]
pub struct ApproxFormat {
    pub template: String,
    pub scale: i64,
    pub precision: Precision,
}

impl ApproxFormat {
    pub fn new(template: &str, scale: i64, precision: Precision) -> ApproxFormat {
        ApproxFormat {
            template: template.to_string(),
            scale,
            precision,
        }
    }
}

/// Immutable parser configuration.
///
/// Fields are public so callers can build alternate locales; the lookup
/// methods are all case-insensitive.
#[derive(Debug, Clone)]
pub struct TimeSettings {
    /// Prefer day-month order over month-day order for ambiguous numeric
    /// dates like `"5 9 1981"`.
    pub day_before_month: bool,
    /// Alias lists per month, index 0 = January. The first alias is the
    /// primary name used when rendering.
    pub month_names: Vec<Vec<String>>,
    /// Words that denote a fixed day number (empty in the English table).
    pub day_names: Vec<(String, u8)>,
    /// Era markers and whether each one means BCE.
    pub era_markers: Vec<(String, bool)>,
    /// Past-tense markers recognized by the approximate-output parser.
    pub past_markers: Vec<String>,
    /// Calendar-name aliases.
    pub calendar_names: Vec<(String, CalendarModel)>,
    /// Approximate-output templates, coarsest first.
    pub formats: Vec<ApproxFormat>,
}

impl TimeSettings {
    /// The month number (1-12) a word names, if any.
    pub fn month_number(&self, word: &str) -> Option<u8> {
        let needle = word.to_lowercase();
        self.month_names
            .iter()
            .position(|aliases| aliases.iter().any(|a| a.to_lowercase() == needle))
            .map(|i| (i + 1) as u8)
    }

    /// The primary name of a month (1-12), used when rendering.
    pub fn month_name(&self, month: u8) -> Option<&str> {
        self.month_names
            .get(month.checked_sub(1)? as usize)?
            .first()
            .map(String::as_str)
    }

    /// The day number a word names, if any.
    pub fn day_number(&self, word: &str) -> Option<u8> {
        let needle = word.to_lowercase();
        self.day_names
            .iter()
            .find(|(name, _)| name.to_lowercase() == needle)
            .map(|&(_, day)| day)
    }

    /// Whether a word is an era marker, and if so whether it means BCE.
    pub fn era(&self, word: &str) -> Option<bool> {
        let needle = word.to_lowercase();
        self.era_markers
            .iter()
            .find(|(name, _)| name.to_lowercase() == needle)
            .map(|&(_, bce)| bce)
    }

    /// The calendar a word names, if any.
    pub fn calendar(&self, word: &str) -> Option<CalendarModel> {
        let needle = word.to_lowercase();
        self.calendar_names
            .iter()
            .find(|(name, _)| name.to_lowercase() == needle)
            .map(|&(_, calendar)| calendar)
    }

    /// The primary BCE marker, used when rendering negative years.
    pub fn bce_marker(&self) -> Option<&str> {
        self.era_markers
            .iter()
            .find(|&&(_, bce)| bce)
            .map(|(name, _)| name.as_str())
    }
}

fn aliases(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for TimeSettings {
    fn default() -> TimeSettings {
        TimeSettings {
            day_before_month: true,
            month_names: vec![
                aliases(&["January", "Jan"]),
                aliases(&["February", "Feb"]),
                aliases(&["March", "Mar"]),
                aliases(&["April", "Apr"]),
                aliases(&["May"]),
                aliases(&["June", "Jun"]),
                aliases(&["July", "Jul"]),
                aliases(&["August", "Aug"]),
                aliases(&["September", "Sep", "Sept"]),
                aliases(&["October", "Oct"]),
                aliases(&["November", "Nov"]),
                aliases(&["December", "Dec"]),
            ],
            day_names: Vec::new(),
            era_markers: vec![
                ("BCE".to_string(), true),
                ("BC".to_string(), true),
                ("CE".to_string(), false),
                ("AD".to_string(), false),
            ],
            past_markers: vec!["ago".to_string()],
            calendar_names: vec![
                ("Gregorian".to_string(), CalendarModel::Gregorian),
                ("Julian".to_string(), CalendarModel::Julian),
            ],
            formats: vec![
                ApproxFormat::new("% billion years", 1_000_000_000, Precision::BillionYears),
                ApproxFormat::new("%00 million years", 100_000_000, Precision::HundredMillionYears),
                ApproxFormat::new("%0 million years", 10_000_000, Precision::TenMillionYears),
                ApproxFormat::new("% million years", 1_000_000, Precision::MillionYears),
                ApproxFormat::new("%00,000 years", 100_000, Precision::HundredThousandYears),
                ApproxFormat::new("%0,000 years", 10_000, Precision::TenThousandYears),
                ApproxFormat::new("%. millennium", 1_000, Precision::Millennium),
                ApproxFormat::new("%. century", 100, Precision::Century),
                ApproxFormat::new("%0s", 10, Precision::Decade),
            ],
        }
    }
}
