//! Ordered token-pattern grammars and the first-match scanner.
//!
//! Each grammar is a fixed shape of [`GrammarSymbol`]s. A grammar matches a
//! token sequence only when the lengths are equal and every position is
//! compatible, and the first full match wins — the table order encodes
//! priority, which is what disambiguates numeric-only inputs like
//! `"5 9 1981"`.

use crate::calendar::CalendarModel;
use crate::settings::TimeSettings;
use crate::token::Token;

/// One position of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarSymbol {
    Year,
    Month,
    Day,
    Calendar,
    Era,
    Minus,
}

impl GrammarSymbol {
    fn swapped(self) -> GrammarSymbol {
        match self {
            GrammarSymbol::Month => GrammarSymbol::Day,
            GrammarSymbol::Day => GrammarSymbol::Month,
            other => other,
        }
    }
}

/// The sparse field assignments produced by one grammar match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeMatch {
    pub year: Option<i64>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub calendar: Option<CalendarModel>,
    pub bce: Option<bool>,
    pub minus: bool,
}

struct GrammarEntry {
    symbols: &'static [GrammarSymbol],
    /// Whether the day/month pair follows the locale order preference.
    /// ISO-shaped year-first patterns keep their fixed order instead.
    locale_order: bool,
}

use GrammarSymbol::{Calendar, Day, Era, Minus, Month, Year};

/// The grammar table, written month-first. When `day_before_month` is set,
/// every `locale_order` entry has its Month/Day symbols swapped at match
/// time, which reorders day-first shapes ahead of month-first ones while
/// leaving year-first and month-year shapes intact.
const GRAMMARS: &[GrammarEntry] = &[
    GrammarEntry {
        symbols: &[Month, Day, Year, Calendar, Era],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Day, Month, Year, Calendar, Era],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Month, Day, Year, Era, Calendar],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Day, Month, Year, Era, Calendar],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Month, Day, Year, Calendar],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Day, Month, Year, Calendar],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Month, Day, Year, Era],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Day, Month, Year, Era],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Month, Day, Year],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Day, Month, Year],
        locale_order: true,
    },
    GrammarEntry {
        symbols: &[Year, Month, Day],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Minus, Year, Month, Day],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Month, Year, Era],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Month, Year],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Year, Month],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Year, Era],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Year, Calendar],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Minus, Year, Era],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Minus, Year],
        locale_order: false,
    },
    GrammarEntry {
        symbols: &[Year],
        locale_order: false,
    },
];

/// Scan the grammar table in priority order and return the first full match.
pub fn match_tokens(tokens: &[Token], settings: &TimeSettings) -> Option<TimeMatch> {
    GRAMMARS
        .iter()
        .find_map(|entry| try_grammar(entry, tokens, settings.day_before_month))
}

fn try_grammar(entry: &GrammarEntry, tokens: &[Token], day_before_month: bool) -> Option<TimeMatch> {
    if entry.symbols.len() != tokens.len() {
        return None;
    }
    let swap = day_before_month && entry.locale_order;

    let mut matched = TimeMatch::default();
    for (&symbol, token) in entry.symbols.iter().zip(tokens) {
        let symbol = if swap { symbol.swapped() } else { symbol };
        match (symbol, token) {
            (Year, Token::Year(y)) => matched.year = Some(*y),
            (Year, Token::Number { value, .. }) => matched.year = Some(*value as i64),
            (Month, Token::Month(m)) => matched.month = Some(*m),
            (
                Month,
                Token::Number {
                    value,
                    could_be_month: true,
                    ..
                },
            ) => matched.month = Some(*value as u8),
            (Day, Token::Day(d)) => matched.day = Some(*d),
            (
                Day,
                Token::Number {
                    value,
                    could_be_day: true,
                    ..
                },
            ) => matched.day = Some(*value as u8),
            (Calendar, Token::Calendar(c)) => matched.calendar = Some(*c),
            (Era, Token::Era { bce }) => matched.bce = Some(*bce),
            (Minus, Token::Minus) => matched.minus = true,
            _ => return None,
        }
    }
    Some(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn matched(input: &str, settings: &TimeSettings) -> TimeMatch {
        let tokens = tokenize(input, settings).expect(input);
        match_tokens(&tokens, settings).expect(input)
    }

    #[test]
    fn day_first_locale_wins_ambiguous_numeric_dates() {
        let settings = TimeSettings::default();
        let m = matched("5 9 1981", &settings);
        assert_eq!((m.day, m.month, m.year), (Some(5), Some(9), Some(1981)));
    }

    #[test]
    fn month_first_locale_flips_the_preference() {
        let settings = TimeSettings {
            day_before_month: false,
            ..TimeSettings::default()
        };
        let m = matched("5 9 1981", &settings);
        assert_eq!((m.day, m.month, m.year), (Some(9), Some(5), Some(1981)));
    }

    #[test]
    fn explicit_month_words_match_in_either_order() {
        let settings = TimeSettings::default();
        let m = matched("22 April 1616", &settings);
        assert_eq!((m.day, m.month, m.year), (Some(22), Some(4), Some(1616)));
        let m = matched("April 22 1616", &settings);
        assert_eq!((m.day, m.month, m.year), (Some(22), Some(4), Some(1616)));
    }

    #[test]
    fn year_first_shapes_keep_iso_order() {
        // Locale preference must not flip year-month-day input.
        let settings = TimeSettings::default();
        let m = matched("2001-01-02", &settings);
        assert_eq!((m.year, m.month, m.day), (Some(2001), Some(1), Some(2)));
    }

    #[test]
    fn month_year_stays_month_year() {
        let settings = TimeSettings::default();
        let m = matched("9 1981", &settings);
        assert_eq!((m.month, m.year, m.day), (Some(9), Some(1981), None));
    }

    #[test]
    fn era_and_calendar_positions() {
        let settings = TimeSettings::default();
        let m = matched("45 BC", &settings);
        assert_eq!((m.year, m.bce), (Some(45), Some(true)));

        let m = matched("12 October 1582 Julian AD", &settings);
        assert_eq!(m.day, Some(12));
        assert_eq!(m.month, Some(10));
        assert_eq!(m.year, Some(1582));
        assert_eq!(m.calendar, Some(CalendarModel::Julian));
        assert_eq!(m.bce, Some(false));
    }

    #[test]
    fn leading_minus_is_captured() {
        let settings = TimeSettings::default();
        let m = matched("-1000", &settings);
        assert_eq!((m.minus, m.year), (true, Some(1000)));
    }

    #[test]
    fn length_mismatch_is_no_match() {
        let settings = TimeSettings::default();
        let tokens = tokenize("1 2 3 4 5 6", &settings).unwrap();
        assert_eq!(match_tokens(&tokens, &settings), None);
    }
}
