// src/lib.rs

pub mod chart;
pub mod config;
pub mod data_extractor;
pub mod date_range;
pub mod error;
pub mod handler;
pub mod merged_table;
pub mod page;
pub mod price_series;
pub mod series_request;
pub mod session;

pub use session::{PriceProvider, YahooHistorySession};

pub use data_extractor::{CloseExtractor, FetchOutcome, MergeReport, SkipReason, SkippedTicker};
pub use date_range::DateRange;
pub use error::{CheckerError, ProviderError};
pub use merged_table::MergedTable;
pub use page::PageView;
pub use price_series::{PricePoint, PriceSeries};
pub use series_request::SeriesRequest;
