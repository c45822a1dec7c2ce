//! Sheet connectors: fetching the published CSV exports.
//!
//! `SheetFetcher` abstracts the transport; `HttpSheetFetcher` is the reqwest
//! implementation and `fetch_all` runs the six sheet fetches concurrently,
//! turning every failure into an empty sheet.

pub mod fetch;
pub mod http;

pub use fetch::fetch_all;
pub use http::{FetchFuture, HttpSheetFetcher, SheetFetcher};
