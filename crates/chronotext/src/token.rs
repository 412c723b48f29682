//! Tokenizer for free-text date strings.
//!
//! Splits the input on whitespace, commas, periods, slashes, and hyphens,
//! classifying each run of characters against the settings' name tables.
//! Classification is strict: one unrecognized word aborts the whole
//! tokenization, which makes the overall parse fail without guessing.

use crate::calendar::CalendarModel;
use crate::settings::TimeSettings;

/// Longest digit run accepted as a year (10¹¹ - 1 is the maximum year).
const MAX_YEAR_DIGITS: usize = 11;

/// One classified token of a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A small number that could plausibly fill more than one role; the
    /// grammar position decides which role it binds to.
    Number {
        value: u64,
        could_be_day: bool,
        could_be_month: bool,
    },
    /// A number outside both the day and month ranges.
    Year(i64),
    /// A word naming a month (1-12).
    Month(u8),
    /// A word naming a day (1-31).
    Day(u8),
    /// A word naming a calendar system.
    Calendar(CalendarModel),
    /// An era marker such as "BC" or "CE".
    Era { bce: bool },
    /// A leading hyphen acting as a sign marker.
    Minus,
}

/// Split a date string into classified tokens.
///
/// A hyphen with nothing accumulated becomes a [`Token::Minus`]; after an
/// accumulated run it acts as a delimiter. Runs are also flushed at every
/// digit/letter boundary, so `"22April1616"` tokenizes as three tokens.
///
/// Returns `None` when any run fails classification (unknown word, or a
/// digit run longer than eleven digits) or when the input holds no tokens.
pub fn tokenize(text: &str, settings: &TimeSettings) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut buf = String::new();

    for ch in text.chars() {
        if ch == '-' {
            if buf.is_empty() {
                tokens.push(Token::Minus);
            } else {
                tokens.push(classify(&buf, settings)?);
                buf.clear();
            }
        } else if ch.is_whitespace() || matches!(ch, ',' | '.' | '/') {
            if !buf.is_empty() {
                tokens.push(classify(&buf, settings)?);
                buf.clear();
            }
        } else {
            if let Some(first) = buf.chars().next() {
                if first.is_ascii_digit() != ch.is_ascii_digit() {
                    tokens.push(classify(&buf, settings)?);
                    buf.clear();
                }
            }
            buf.push(ch);
        }
    }
    if !buf.is_empty() {
        tokens.push(classify(&buf, settings)?);
    }

    if tokens.is_empty() {
        None
    } else {
        Some(tokens)
    }
}

fn classify(run: &str, settings: &TimeSettings) -> Option<Token> {
    if run.chars().all(|c| c.is_ascii_digit()) {
        classify_number(run)
    } else {
        classify_word(run, settings)
    }
}

fn classify_number(run: &str) -> Option<Token> {
    if run.len() > MAX_YEAR_DIGITS {
        return None;
    }
    let value: u64 = run.parse().ok()?;
    let could_be_day = (1..=31).contains(&value);
    let could_be_month = (1..=12).contains(&value);
    if could_be_day || could_be_month {
        Some(Token::Number {
            value,
            could_be_day,
            could_be_month,
        })
    } else {
        Some(Token::Year(value as i64))
    }
}

fn classify_word(word: &str, settings: &TimeSettings) -> Option<Token> {
    if let Some(month) = settings.month_number(word) {
        Some(Token::Month(month))
    } else if let Some(day) = settings.day_number(word) {
        Some(Token::Day(day))
    } else if let Some(bce) = settings.era(word) {
        Some(Token::Era { bce })
    } else {
        settings.calendar(word).map(Token::Calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(input: &str) -> Vec<Token> {
        tokenize(input, &TimeSettings::default()).expect(input)
    }

    fn number(value: u64) -> Token {
        Token::Number {
            value,
            could_be_day: (1..=31).contains(&value),
            could_be_month: (1..=12).contains(&value),
        }
    }

    #[test]
    fn splits_on_digit_letter_boundaries() {
        assert_eq!(ok("22April1616"), vec![number(22), Token::Month(4), Token::Year(1616)]);
    }

    #[test]
    fn delimiters_are_interchangeable() {
        let expected = vec![number(22), number(4), Token::Year(1616)];
        assert_eq!(ok("22.4.1616"), expected);
        assert_eq!(ok("22/4/1616"), expected);
        assert_eq!(ok("22, 4, 1616"), expected);
    }

    #[test]
    fn leading_hyphen_is_a_sign_marker() {
        assert_eq!(ok("-1000"), vec![Token::Minus, Token::Year(1000)]);
    }

    #[test]
    fn hyphen_after_a_run_delimits() {
        assert_eq!(ok("2001-01-02"), vec![Token::Year(2001), number(1), number(2)]);
    }

    #[test]
    fn words_classify_case_insensitively() {
        assert_eq!(
            ok("45 bc"),
            vec![Token::Year(45), Token::Era { bce: true }]
        );
        assert_eq!(
            ok("1492 JULIAN"),
            vec![Token::Year(1492), Token::Calendar(CalendarModel::Julian)]
        );
    }

    #[test]
    fn day_words_come_from_settings() {
        let mut settings = TimeSettings::default();
        settings.day_names.push(("ides".to_string(), 15));
        assert_eq!(
            tokenize("ides March 44", &settings).unwrap(),
            vec![Token::Day(15), Token::Month(3), Token::Year(44)]
        );
    }

    #[test]
    fn unknown_words_abort() {
        let settings = TimeSettings::default();
        assert_eq!(tokenize("random string", &settings), None);
        assert_eq!(tokenize("42 abc", &settings), None);
    }

    #[test]
    fn oversized_digit_runs_abort() {
        let settings = TimeSettings::default();
        assert!(tokenize("99999999999", &settings).is_some());
        assert_eq!(tokenize("999999999999", &settings), None);
    }

    #[test]
    fn empty_input_aborts() {
        let settings = TimeSettings::default();
        assert_eq!(tokenize("", &settings), None);
        assert_eq!(tokenize("  , . ", &settings), None);
    }
}
