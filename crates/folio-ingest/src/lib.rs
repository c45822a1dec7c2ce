//! Folio Ingest — turns published sheet CSV text into the portfolio content model.
//!
//! Pure and synchronous: fetching lives in `folio-connectors`, caching in
//! `folio-cache`. Everything here is deterministic string work that never
//! fails; malformed rows are skipped or read as partial data.

pub mod assemble;
pub mod catalog;
pub mod csv;
pub mod fields;
pub mod sources;
pub mod url;

pub use assemble::{assemble, Assembly, CollectionOrigin, CollectionOrigins};
pub use catalog::{filter_by_technology, technology_filters, ALL_TECHNOLOGIES};
pub use csv::{clean_text, split_csv_line};
pub use fields::{AboutRowKind, ProfileField};
pub use sources::{DEFAULT_CATEGORY, PLACEHOLDER_IMAGE_URL};
pub use url::normalize_url;
