//! Folio Cache — the single expiring content entry in front of the sheet fetch.
//!
//! The host key-value store and the clock are both injected, so expiry can be
//! tested with a `ManualClock` and a `MemoryStore`.

pub mod clock;
pub mod store;
pub mod timed;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use timed::{CacheEntry, CachePolicy, TimedCache};
