// tests/common/mod.rs

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;
use stockcheck::{PricePoint, PriceProvider, PriceSeries, ProviderError, SeriesRequest};

pub enum Scripted {
    Closes(Vec<(NaiveDate, f64)>),
    Fails(&'static str),
}

/// In-memory provider answering from a fixed script and recording every request.
#[derive(Default)]
pub struct ScriptedProvider {
    script: HashMap<String, Scripted>,
    pub calls: Mutex<Vec<SeriesRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        ScriptedProvider::default()
    }

    pub fn with_closes(mut self, ticker: &str, closes: &[(NaiveDate, f64)]) -> Self {
        self.script.insert(ticker.to_string(), Scripted::Closes(closes.to_vec()));
        self
    }

    pub fn with_failure(mut self, ticker: &str, message: &'static str) -> Self {
        self.script.insert(ticker.to_string(), Scripted::Fails(message));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn requested_tickers(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|r| r.ticker.clone()).collect()
    }
}

#[async_trait]
impl PriceProvider for ScriptedProvider {
    async fn daily_closes(&self, request: &SeriesRequest) -> Result<PriceSeries, ProviderError> {
        self.calls.lock().unwrap().push(request.clone());

        match self.script.get(&request.ticker) {
            Some(Scripted::Closes(closes)) => {
                let points = closes
                    .iter()
                    .filter(|(date, _)| request.covers(*date))
                    .map(|(date, close)| PricePoint { date: *date, close: *close })
                    .collect();
                Ok(PriceSeries::new(request.ticker.as_str(), points))
            }
            Some(Scripted::Fails(message)) => Err(ProviderError::Malformed(message.to_string())),
            None => Ok(PriceSeries::empty(request.ticker.as_str())),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn tickers(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}
