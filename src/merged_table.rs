// src/merged_table.rs

use crate::date_range::DATE_FORMAT;
use crate::price_series::PriceSeries;
use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

pub const DATE_COLUMN: &str = "date";

/// Closing prices of several tickers aligned on the union of their dates.
///
/// Columns keep the order in which series were inserted. A date missing from a
/// ticker's series stays missing in that column; nothing is filled in.
#[derive(Debug, Default, Clone)]
pub struct MergedTable {
    dates: BTreeSet<NaiveDate>,
    columns: Vec<(String, BTreeMap<NaiveDate, f64>)>,
}

impl MergedTable {
    pub fn new() -> Self {
        MergedTable::default()
    }

    /// Adds `series` as a column, outer-joining it on the date index.
    ///
    /// A ticker that is already present has its column replaced in place.
    pub fn insert(&mut self, series: PriceSeries) {
        let column: BTreeMap<NaiveDate, f64> = series.points.iter().map(|p| (p.date, p.close)).collect();

        match self.columns.iter_mut().find(|(ticker, _)| *ticker == series.ticker) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((series.ticker, column)),
        }

        // a replaced column may have been the only one holding some dates
        self.dates = self.columns.iter().flat_map(|(_, col)| col.keys().copied()).collect();
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.dates.is_empty()
    }

    /// Number of distinct dates across all columns.
    pub fn height(&self) -> usize {
        self.dates.len()
    }

    pub fn tickers(&self) -> Vec<&str> {
        self.columns.iter().map(|(ticker, _)| ticker.as_str()).collect()
    }

    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    pub fn value(&self, ticker: &str, date: NaiveDate) -> Option<f64> {
        self.columns
            .iter()
            .find(|(name, _)| name == ticker)
            .and_then(|(_, column)| column.get(&date).copied())
    }

    /// Converts the table into a DataFrame: a `date` column followed by one column per ticker.
    pub fn to_dataframe(&self) -> Result<DataFrame, PolarsError> {
        let mut series = Vec::with_capacity(self.columns.len() + 1);

        let dates: Vec<String> = self.dates.iter().map(|d| d.format(DATE_FORMAT).to_string()).collect();
        series.push(Series::new(DATE_COLUMN, dates));

        for (ticker, column) in &self.columns {
            let values: Vec<Option<f64>> = self.dates.iter().map(|d| column.get(d).copied()).collect();
            series.push(Series::new(ticker.as_str(), values));
        }

        DataFrame::new(series)
    }
}

/// Renders a merged DataFrame as an HTML table with two-decimal prices.
///
/// The `date` column becomes the row header and missing prices are left blank.
pub fn render_table(df: &DataFrame) -> Result<String, PolarsError> {
    let dates = df.column(DATE_COLUMN)?.str()?;
    let prices = df
        .get_columns()
        .iter()
        .filter(|s| s.name() != DATE_COLUMN)
        .map(|s| s.f64().map(|column| (s.name(), column)))
        .collect::<Result<Vec<_>, PolarsError>>()?;

    let mut html = String::from("<table class=\"min-w-full divide-y divide-gray-200\">\n<thead>\n<tr><th>Date</th>");
    for (name, _) in &prices {
        let _ = write!(html, "<th>{}</th>", escape_html(name));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in 0..df.height() {
        let _ = write!(html, "<tr><th>{}</th>", escape_html(dates.get(row).unwrap_or_default()));
        for (_, column) in &prices {
            match column.get(row) {
                Some(price) => {
                    let _ = write!(html, "<td>{price:.2}</td>");
                }
                None => html.push_str("<td></td>"),
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    Ok(html)
}

/// Escapes text for use inside HTML element content or a quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
