// src/session.rs

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, NaiveDate, NaiveTime};
use reqwest::{Client, Url};

use crate::chart::parse_chart;
use crate::config::{USER_AGENT, YAHOO_CHART_URL};
use crate::error::ProviderError;
use crate::price_series::PriceSeries;
use crate::series_request::SeriesRequest;

const QUERY_PADDING_DAYS: i64 = 1;

/// Source of daily closing-price series.
///
/// Implementations return an empty series when the ticker has no data in range
/// and an error when the query itself fails.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn daily_closes(&self, request: &SeriesRequest) -> Result<PriceSeries, ProviderError>;
}

/// HTTP session against the Yahoo Finance chart endpoint.
pub struct YahooHistorySession {
    client: Client,
    base_url: Url,
}

impl YahooHistorySession {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(YAHOO_CHART_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ProviderError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let base_url = Url::parse(base_url).map_err(|e| ProviderError::Malformed(e.to_string()))?;
        Ok(YahooHistorySession { client, base_url })
    }

    /// Builds the chart URL for `request`; the ticker is percent-encoded as a path segment.
    ///
    /// The UTC period is one day wider on each side so that bars stamped on the
    /// neighbouring UTC day (exchanges far from UTC) are still returned;
    /// [`parse_chart`] trims them back to the exchange-local range.
    pub fn chart_url(&self, request: &SeriesRequest) -> Result<Url, ProviderError> {
        let period_start = request.start_date() - ChronoDuration::days(QUERY_PADDING_DAYS);
        let period_end = request.end_exclusive() + ChronoDuration::days(QUERY_PADDING_DAYS);

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::Malformed(format!("{} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push(&request.ticker);

        url.query_pairs_mut()
            .append_pair("period1", &unix_midnight(period_start).to_string())
            .append_pair("period2", &unix_midnight(period_end).to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "div|split");

        Ok(url)
    }
}

#[async_trait]
impl PriceProvider for YahooHistorySession {
    async fn daily_closes(&self, request: &SeriesRequest) -> Result<PriceSeries, ProviderError> {
        let url = self.chart_url(request)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match parse_chart(&body, request) {
            Ok(series) if status.is_success() => Ok(series),
            // an unknown symbol comes back as 404 with a chart error; keep that message
            Err(error @ ProviderError::Api { .. }) => Err(error),
            _ if !status.is_success() => Err(ProviderError::Status(status.as_u16())),
            other => other,
        }
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
