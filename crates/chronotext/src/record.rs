//! The wire record consumed by the surrounding data-value layer.

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarModel;
use crate::error::Result;
use crate::precision::Precision;
use crate::value::{self, TimeValue};

/// The flat wire projection of a [`TimeValue`].
///
/// The `time` string carries the value's native calendar fields; the
/// `calendarmodel` URI names which calendar those fields are in. (This
/// differs from [`TimeValue::to_iso8601`], which always projects to the
/// Gregorian calendar.)
///
/// ```json
/// { "time": "+00000002001-01-02T00:00:00Z", "timezone": 0, "before": 0,
///   "after": 0, "precision": 11,
///   "calendarmodel": "http://www.wikidata.org/entity/Q1985727" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    pub time: String,
    pub timezone: i32,
    pub before: u32,
    pub after: u32,
    pub precision: u8,
    pub calendarmodel: String,
}

impl TimeValue {
    /// The wire record for this value, or `None` for an invalid value.
    pub fn to_record(&self) -> Option<TimeRecord> {
        let year = self.year()?;
        Some(TimeRecord {
            time: value::format_time(
                year,
                self.month(),
                self.day(),
                self.hour(),
                self.minute(),
                self.second(),
            ),
            timezone: self.utc_offset_minutes(),
            before: self.before(),
            after: self.after(),
            precision: self.precision().level(),
            calendarmodel: self.calendar().uri().to_string(),
        })
    }

    /// Reconstruct a value from a wire record.
    ///
    /// # Errors
    ///
    /// Fails for a malformed or out-of-range time string, an unknown
    /// precision level, or an unknown calendar-model URI.
    pub fn from_record(record: &TimeRecord) -> Result<TimeValue> {
        let precision = Precision::try_from(record.precision)?;
        let calendar = CalendarModel::from_uri(&record.calendarmodel)?;
        let fields = value::parse_iso_fields(&record.time)?;
        let built = TimeValue::new(fields.year, fields.month, fields.day, precision, calendar)?
            .with_hms(fields.hour, fields.minute, fields.second)?
            .with_uncertainty(record.before, record.after);
        Ok(built)
    }
}
