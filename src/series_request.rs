// src/series_request.rs

use crate::date_range::DateRange;
use chrono::NaiveDate;

/// One provider query: a ticker over the user's inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub ticker: String,
    pub range: DateRange,
    pub adjusted: bool,
}

impl SeriesRequest {
    pub fn new(ticker: impl Into<String>, range: &DateRange, adjusted: bool) -> Self {
        SeriesRequest {
            ticker: ticker.into(),
            range: *range,
            adjusted,
        }
    }

    /// Builds one request per ticker, all sharing the same range, in input order.
    pub fn create_series_requests(tickers: &[String], range: &DateRange, adjusted: bool) -> Vec<Self> {
        tickers
            .iter()
            .map(|ticker| SeriesRequest::new(ticker.as_str(), range, adjusted))
            .collect()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.range.start_date
    }

    /// Exclusive upper bound of the query.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.range.end_exclusive()
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.range.contains(date)
    }
}
