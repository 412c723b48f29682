//! # chronotext
//!
//! Free-text date parsing with precision inference and exact proleptic
//! Julian/Gregorian calendar conversion.
//!
//! The parser recognizes a fixed set of token grammars over loosely
//! formatted human date strings, infers a precision level from which
//! fields were present (and, for bare years, from the magnitude and
//! trailing zeros of the year), and picks a default calendar by era.
//! Calendar math goes through Julian Day Numbers with exact integer
//! arithmetic, so conversions are correct arbitrarily far into the
//! proleptic past.
//!
//! Everything is a pure function of its inputs: the configuration tables
//! are an immutable [`TimeSettings`] value passed explicitly into each
//! parse call, and nothing touches the clock, the filesystem, or global
//! state.
//!
//! ## Modules
//!
//! - [`token`] — Tokenizer: raw string → classified tokens
//! - [`grammar`] — Ordered token-pattern grammars and the first-match scanner
//! - [`resolve`] — Era application, precision inference, calendar defaulting
//! - [`calendar`] — Julian/Gregorian/JDN conversion math
//! - [`approx`] — Approximate-output rendering and reconversion ("3 billion years ago")
//! - [`value`] — The immutable [`TimeValue`] entity
//! - [`record`] — The wire record consumed by the data-value layer
//! - [`settings`] — Immutable parser configuration
//! - [`parse`] — The pipeline entry points
//! - [`precision`] — The 15-level precision scale
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use chronotext::{parse, Precision, TimeValue};
//!
//! let resolved = parse("12 October 1492").unwrap();
//! assert_eq!(resolved.year, 1492);
//! assert_eq!(resolved.precision, Precision::Day);
//!
//! let value = TimeValue::from_free_text("1980s");
//! assert_eq!(value.precision(), Precision::Decade);
//! assert_eq!(value.to_string(), "1980s");
//! ```

pub mod approx;
pub mod calendar;
pub mod error;
pub mod grammar;
pub mod parse;
pub mod precision;
pub mod record;
pub mod resolve;
pub mod settings;
pub mod token;
pub mod value;

pub use calendar::{
    gregorian_to_jdn, gregorian_to_julian, jdn_to_gregorian, jdn_to_julian, julian_to_gregorian,
    julian_to_jdn, CalendarDate, CalendarModel,
};
pub use error::TimeError;
pub use parse::{parse, parse_with_settings};
pub use precision::Precision;
pub use record::TimeRecord;
pub use resolve::ResolvedTime;
pub use settings::{ApproxFormat, TimeSettings};
pub use value::TimeValue;
