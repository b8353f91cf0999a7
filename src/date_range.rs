// src/date_range.rs

use crate::error::CheckerError;
use chrono::{Duration as ChronoDuration, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive calendar date range requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Parses both bounds as `YYYY-MM-DD`; either one failing rejects the whole range.
    pub fn parse(start_date: &str, end_date: &str) -> Result<Self, CheckerError> {
        Ok(DateRange {
            start_date: parse_date(start_date)?,
            end_date: parse_date(end_date)?,
        })
    }

    /// Upper bound handed to the provider, which treats its end as exclusive.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.end_date + ChronoDuration::days(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_exclusive()
    }

    /// Trailing window of `days` days ending on `today`.
    pub fn trailing(today: NaiveDate, days: i64) -> Self {
        DateRange {
            start_date: today - ChronoDuration::days(days),
            end_date: today,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, CheckerError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| CheckerError::BadDateFormat(raw.to_string()))
}
