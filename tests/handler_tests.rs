// tests/handler_tests.rs
mod common;

use actix_web::{test as actix_test, web, App};
use common::{date, ScriptedProvider};
use std::sync::Arc;
use stockcheck::handler::{self, default_page, handle_submission, parse_tickers, PriceForm, MISSING_FIELDS_MESSAGE, NO_DATA_MESSAGE};
use stockcheck::PriceProvider;

fn form(tickers: &str, start_date: &str, end_date: &str) -> PriceForm {
    PriceForm {
        tickers: tickers.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
    }
}

#[test]
fn test_parse_tickers_splits_on_commas_spaces_newlines() {
    assert_eq!(parse_tickers("AAPL, MSFT  GOOG\nIBM"), vec!["AAPL", "MSFT", "GOOG", "IBM"]);
    assert_eq!(parse_tickers(" 7203.T,,9984.T\r\n\tAAPL "), vec!["7203.T", "9984.T", "AAPL"]);
    assert!(parse_tickers(" , \n ").is_empty());
}

#[test]
fn test_parse_tickers_drops_repeats() {
    assert_eq!(parse_tickers("AAPL MSFT AAPL"), vec!["AAPL", "MSFT"]);
}

#[test]
fn test_default_page_has_fourteen_day_window() {
    let page = default_page(date(2024, 3, 15));
    assert_eq!(page.tickers_value, "7203.T, 9984.T, AAPL, MSFT");
    assert_eq!(page.start_date_value, "2024-03-01");
    assert_eq!(page.end_date_value, "2024-03-15");
    assert!(page.results_html.is_none());
    assert!(page.error_message.is_none());
}

#[tokio::test]
async fn test_missing_field_keeps_submitted_values() {
    let provider = ScriptedProvider::new();
    let page = handle_submission(form("AAPL", "", "2024-01-10"), &provider).await;

    assert_eq!(page.error_message.as_deref(), Some(MISSING_FIELDS_MESSAGE));
    assert_eq!(page.tickers_value, "AAPL");
    assert_eq!(page.end_date_value, "2024-01-10");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_bad_date_is_reported_without_fetching() {
    let provider = ScriptedProvider::new().with_closes("AAPL", &[(date(2024, 2, 28), 181.42)]);
    let page = handle_submission(form("AAPL", "2024-02-30", "2024-03-05"), &provider).await;

    let message = page.error_message.unwrap();
    assert!(message.starts_with("An error occurred while processing"));
    assert!(message.contains("2024-02-30"));
    assert!(page.results_html.is_none());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_all_empty_shows_no_data_message() {
    let provider = ScriptedProvider::new().with_failure("BAD", "boom");
    let page = handle_submission(form("NODATA BAD", "2024-01-01", "2024-01-10"), &provider).await;

    assert_eq!(page.error_message.as_deref(), Some(NO_DATA_MESSAGE));
    assert!(page.results_html.is_none());
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_successful_submission_renders_table() {
    let provider = ScriptedProvider::new()
        .with_closes("AAPL", &[(date(2024, 1, 2), 185.64)])
        .with_failure("BAD", "boom")
        .with_closes("MSFT", &[(date(2024, 1, 3), 370.87)]);

    let page = handle_submission(form("AAPL, BAD\nMSFT", "2024-01-01", "2024-01-10"), &provider).await;

    assert!(page.error_message.is_none());
    let table = page.results_html.unwrap();
    assert!(table.contains("<th>AAPL</th><th>MSFT</th>"));
    assert!(!table.contains("BAD"));
    assert!(table.contains("<td>185.64</td><td></td>"));
}

#[actix_web::test]
async fn test_get_renders_form() {
    let provider: Arc<dyn PriceProvider> = Arc::new(ScriptedProvider::new());
    let app = actix_test::init_service(App::new().app_data(web::Data::from(provider)).configure(handler::routes)).await;

    let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
    assert!(resp.status().is_success());

    let body = actix_test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("name=\"tickers\""));
    assert!(body.contains("7203.T, 9984.T, AAPL, MSFT"));
    assert!(!body.contains("role=\"alert\""));
}

#[actix_web::test]
async fn test_post_renders_results_and_escapes_input() {
    let scripted = Arc::new(ScriptedProvider::new().with_closes("AAPL", &[(date(2024, 1, 10), 186.19)]));
    let provider: Arc<dyn PriceProvider> = scripted.clone();
    let app = actix_test::init_service(App::new().app_data(web::Data::from(provider)).configure(handler::routes)).await;

    let req = actix_test::TestRequest::post()
        .uri("/")
        .set_form(form("AAPL <script>", "2024-01-09", "2024-01-10"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = actix_test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("<td>186.19</td>"));
    assert!(body.contains("AAPL &lt;script&gt;"));
    assert!(!body.contains("AAPL <script>"));
    assert_eq!(scripted.requested_tickers(), vec!["AAPL", "<script>"]);
}

#[actix_web::test]
async fn test_post_with_absent_fields_shows_error() {
    let provider: Arc<dyn PriceProvider> = Arc::new(ScriptedProvider::new());
    let app = actix_test::init_service(App::new().app_data(web::Data::from(provider)).configure(handler::routes)).await;

    let req = actix_test::TestRequest::post()
        .uri("/")
        .set_form([("tickers", "AAPL")])
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = actix_test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains(MISSING_FIELDS_MESSAGE));
}
