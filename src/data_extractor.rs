// src/data_extractor.rs

use crate::date_range::DateRange;
use crate::error::{CheckerError, ProviderError};
use crate::merged_table::MergedTable;
use crate::price_series::PriceSeries;
use crate::series_request::SeriesRequest;
use crate::session::PriceProvider;
use std::fmt;

/// Result of fetching a single ticker.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(PriceSeries),
    Empty,
    Failed(ProviderError),
}

/// Why a ticker is absent from the merged table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoData,
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoData => write!(f, "no data found"),
            SkipReason::Failed(message) => write!(f, "fetch failed: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTicker {
    pub ticker: String,
    pub reason: SkipReason,
}

/// Merged table plus the tickers that did not make it into it, in input order.
#[derive(Debug, Default)]
pub struct MergeReport {
    pub table: MergedTable,
    pub skipped: Vec<SkippedTicker>,
}

/// Fetches closing prices ticker by ticker and merges them into one date-aligned table.
pub struct CloseExtractor<'a> {
    provider: &'a dyn PriceProvider,
    adjusted: bool,
}

impl<'a> CloseExtractor<'a> {
    /// Extractor asking the provider for split/dividend adjusted closes.
    pub fn new(provider: &'a dyn PriceProvider) -> Self {
        CloseExtractor { provider, adjusted: true }
    }

    pub fn with_adjustment(provider: &'a dyn PriceProvider, adjusted: bool) -> Self {
        CloseExtractor { provider, adjusted }
    }

    /// Fetches every ticker over the inclusive `[start_date, end_date]` range and merges the results.
    ///
    /// Both dates must be `YYYY-MM-DD`; otherwise nothing is fetched. A ticker that
    /// errors or has no data is recorded in `skipped` and never stops the batch.
    pub async fn extract(
        &self,
        tickers: &[String],
        start_date: &str,
        end_date: &str,
    ) -> Result<MergeReport, CheckerError> {
        let range = DateRange::parse(start_date, end_date)?;
        let requests = SeriesRequest::create_series_requests(tickers, &range, self.adjusted);

        let mut report = MergeReport::default();

        for request in requests {
            if request.ticker.is_empty() {
                continue;
            }

            log::info!("Fetching {} ...", request.ticker);
            let reason = match self.fetch_one(&request).await {
                FetchOutcome::Fetched(series) => {
                    log::info!("  -> {}: {} rows", request.ticker, series.len());
                    report.table.insert(series);
                    continue;
                }
                FetchOutcome::Empty => SkipReason::NoData,
                FetchOutcome::Failed(error) => SkipReason::Failed(error.to_string()),
            };

            log::warn!("  -> {}: {reason}", request.ticker);
            report.skipped.push(SkippedTicker {
                ticker: request.ticker,
                reason,
            });
        }

        Ok(report)
    }

    /// Fetches a single ticker and classifies the response.
    pub async fn fetch_one(&self, request: &SeriesRequest) -> FetchOutcome {
        match self.provider.daily_closes(request).await {
            Ok(series) if series.is_empty() => FetchOutcome::Empty,
            Ok(mut series) => {
                series.ticker = request.ticker.clone();
                FetchOutcome::Fetched(series)
            }
            Err(error) => FetchOutcome::Failed(error),
        }
    }
}
