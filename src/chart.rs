// src/chart.rs

use crate::error::ProviderError;
use crate::price_series::{PricePoint, PriceSeries};
use crate::series_request::SeriesRequest;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Deserialize;

// `chart` schema of the Yahoo Finance v8 endpoint
#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub chart: ChartBody,
}

#[derive(Deserialize, Debug)]
pub struct ChartBody {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChartMeta {
    #[serde(rename = "exchangeTimezoneName")]
    pub exchange_timezone_name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
    #[serde(default)]
    pub adjclose: Vec<AdjClose>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Quote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AdjClose {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

/// Parses a chart response body into the closing-price series asked for by `request`.
///
/// Null closes are dropped, as are dates outside the request's half-open range.
pub fn parse_chart(body: &str, request: &SeriesRequest) -> Result<PriceSeries, ProviderError> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    if let Some(error) = envelope.chart.error {
        return Err(ProviderError::Api {
            description: error.description.unwrap_or_else(|| "no description".to_string()),
            code: error.code,
        });
    }

    let result = match envelope.chart.result.and_then(|results| results.into_iter().next()) {
        Some(result) => result,
        None => return Ok(PriceSeries::empty(request.ticker.as_str())),
    };

    let timezone = exchange_timezone(&result.meta);
    let closes = select_closes(&result.indicators, request.adjusted);

    let points = result
        .timestamp
        .iter()
        .zip(closes.iter())
        .filter_map(|(timestamp, close)| {
            let close = (*close)?;
            let date = local_date(*timestamp, timezone)?;
            request.covers(date).then_some(PricePoint { date, close })
        })
        .collect();

    Ok(PriceSeries::new(request.ticker.as_str(), points))
}

fn select_closes(indicators: &Indicators, adjusted: bool) -> &[Option<f64>] {
    let raw = indicators.quote.first().map(|q| q.close.as_slice()).unwrap_or(&[]);
    if !adjusted {
        return raw;
    }
    match indicators.adjclose.first() {
        Some(adj) if !adj.adjclose.is_empty() => adj.adjclose.as_slice(),
        _ => {
            log::debug!("adjclose missing from chart response; using raw close");
            raw
        }
    }
}

fn exchange_timezone(meta: &ChartMeta) -> Tz {
    meta.exchange_timezone_name
        .as_deref()
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}

fn local_date(timestamp: i64, timezone: Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&timezone).date_naive())
}
