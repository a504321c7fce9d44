//! In-memory monitor for wildlife sighting records.
//!
//! Architecture:
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Vec<Sighting>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────────┐
//!   │ SightingMonitor   │  ordered records; filter, aggregate, remove
//!   └──────────────────┘
//! ```
//!
//! The monitor never does I/O itself: it only consumes validated [`Sighting`]
//! values, so it can be driven from any source that produces them.

pub mod loader;
pub mod model;
pub mod monitor;

pub use loader::{load_file, LoadError};
pub use model::{InvalidRecord, Sighting};
pub use monitor::SightingMonitor;
