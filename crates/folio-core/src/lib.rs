//! Folio Core — domain model, sheet descriptors, configuration, defaults.

pub mod config;
pub mod defaults;
pub mod error;
pub mod model;
pub mod sheets;

pub use config::{DataPaths, FolioConfig, IdStrategy};
pub use defaults::Defaults;
pub use error::{Error, Result};
pub use model::*;
pub use sheets::{SheetKind, SheetSources, SheetTexts};
