//! Merge-and-positioning core for the WiFi radar platform.
//!
//! The modules follow the data path: remote scan submissions arrive through
//! `ingest`, `merge` folds local and remote observations into one position
//! map per cycle, and `radar` turns that map into drawable polar frames.

pub mod ingest;
pub mod merge;
pub mod prelude;
pub mod radar;
pub mod scan;
pub mod telemetry;

pub use prelude::{RadarConfig, RadarError, RadarResult};
