//! High-volume date spans.
//!
//! The parking table encodes each span as a pipe-delimited pair of dates, where
//! either side may use a `{year}` placeholder for "the year being evaluated":
//!
//! ```text
//! "{year}-02-19|{year}-03-08"   -> every year, Feb 19 ..= Mar 8
//! "2024-03-01|2024-03-15"       -> only in 2024
//! ```
//!
//! Templates are parsed once into [`DateSpanTemplate`] and resolved against a
//! year on demand. A `{year}` date that does not exist in a given year (Feb 29
//! outside leap years) resolves to `None` and simply never matches.

use super::ConfigError;
use chrono::NaiveDate;

/// Year used to validate `{year}` templates; a leap year so that Feb 29 is
/// accepted.
const PROBE_YEAR: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSpec {
    /// `{year}`: substituted with the year being evaluated.
    Current,
    Fixed(i32),
}

/// One side of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTemplate {
    pub year: YearSpec,
    pub month: u32,
    pub day: u32,
}

impl DateTemplate {
    fn parse(value: &str, span: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidDate { span: span.to_string(), value: value.to_string() };

        let caps = regex!(r"^\s*(\{year\}|\d{4})-(\d{1,2})-(\d{1,2})\s*$").captures(value).ok_or_else(invalid)?;

        let year = match &caps[1] {
            "{year}" => YearSpec::Current,
            digits => YearSpec::Fixed(digits.parse().map_err(|_| invalid())?),
        };
        let month = caps[2].parse().map_err(|_| invalid())?;
        let day = caps[3].parse().map_err(|_| invalid())?;

        let template = DateTemplate { year, month, day };
        template.probe().ok_or_else(invalid)?;
        Ok(template)
    }

    /// Concrete date for `year`, or `None` when the day does not exist that year.
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        let year = match self.year {
            YearSpec::Current => year,
            YearSpec::Fixed(fixed) => fixed,
        };
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    fn probe(&self) -> Option<NaiveDate> {
        self.resolve(PROBE_YEAR)
    }
}

/// A parsed `start|end` span template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpanTemplate {
    raw: String,
    pub start: DateTemplate,
    pub end: DateTemplate,
}

impl DateSpanTemplate {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let (start, end) = raw.split_once('|').ok_or_else(|| ConfigError::MissingDelimiter(raw.to_string()))?;

        let start = DateTemplate::parse(start, raw)?;
        let end = DateTemplate::parse(end, raw)?;

        // Only comparable when both sides move with the same year.
        let comparable = matches!(
            (start.year, end.year),
            (YearSpec::Current, YearSpec::Current) | (YearSpec::Fixed(_), YearSpec::Fixed(_))
        );
        if comparable && end.probe() < start.probe() {
            return Err(ConfigError::InvertedSpan(raw.to_string()));
        }

        Ok(DateSpanTemplate { raw: raw.to_string(), start, end })
    }

    /// The span as written in the table.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Substitute `year` for every `{year}` placeholder.
    pub fn resolve(&self, year: i32) -> Option<DateSpan> {
        Some(DateSpan { start: self.start.resolve(year)?, end: self.end.resolve(year)? })
    }
}

/// A concrete span, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
