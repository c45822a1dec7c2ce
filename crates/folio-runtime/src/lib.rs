//! Folio Runtime — the portfolio service that ties cache, connectors and ingest together.

pub mod service;
pub mod types;

pub use service::PortfolioService;
pub use types::*;
