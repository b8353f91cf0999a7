// src/handler.rs

use actix_web::{http::header::ContentType, web, HttpResponse};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TICKERS, DEFAULT_WINDOW_DAYS};
use crate::data_extractor::CloseExtractor;
use crate::date_range::{DateRange, DATE_FORMAT};
use crate::merged_table::render_table;
use crate::page::PageView;
use crate::session::PriceProvider;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const NO_DATA_MESSAGE: &str = "No data was found for the given tickers and period.";

/// Submitted form; absent fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PriceForm {
    #[serde(default)]
    pub tickers: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// Splits free text on commas and whitespace into trimmed symbols.
///
/// Empty entries are dropped and repeated symbols keep only their first occurrence.
pub fn parse_tickers(raw: &str) -> Vec<String> {
    let mut tickers: Vec<String> = Vec::new();
    for symbol in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        let symbol = symbol.trim();
        if !symbol.is_empty() && !tickers.iter().any(|t| t == symbol) {
            tickers.push(symbol.to_string());
        }
    }
    tickers
}

/// Form pre-filled with the default tickers and a trailing window ending on `today`.
pub fn default_page(today: NaiveDate) -> PageView {
    let range = DateRange::trailing(today, DEFAULT_WINDOW_DAYS);
    PageView::new(
        DEFAULT_TICKERS,
        &range.start_date.format(DATE_FORMAT).to_string(),
        &range.end_date.format(DATE_FORMAT).to_string(),
    )
}

/// Runs a form submission through fetch-and-merge and builds the page to show.
pub async fn handle_submission(form: PriceForm, provider: &dyn PriceProvider) -> PageView {
    let page = PageView::new(&form.tickers, &form.start_date, &form.end_date);

    if form.tickers.is_empty() || form.start_date.is_empty() || form.end_date.is_empty() {
        return page.with_error(MISSING_FIELDS_MESSAGE);
    }

    let tickers = parse_tickers(&form.tickers);
    let extractor = CloseExtractor::new(provider);

    let report = match extractor.extract(&tickers, &form.start_date, &form.end_date).await {
        Ok(report) => report,
        Err(e) => return page.with_error(format!("An error occurred while processing: {e}")),
    };

    for skipped in &report.skipped {
        log::info!("Omitted {} from the table: {}", skipped.ticker, skipped.reason);
    }

    if report.table.is_empty() {
        return page.with_error(NO_DATA_MESSAGE);
    }

    match report.table.to_dataframe().and_then(|df| render_table(&df)) {
        Ok(table_html) => page.with_results(table_html),
        Err(e) => page.with_error(format!("An error occurred while processing: {e}")),
    }
}

async fn index() -> HttpResponse {
    let page = default_page(Local::now().date_naive());
    html(page)
}

async fn submit(form: web::Form<PriceForm>, provider: web::Data<dyn PriceProvider>) -> HttpResponse {
    let page = handle_submission(form.into_inner(), provider.get_ref()).await;
    html(page)
}

fn html(page: PageView) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(page.render())
}

/// Registers the single `/` resource: `GET` shows the form, `POST` runs a query.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .route(web::post().to(submit)),
    );
}
