pub mod distance;
pub mod merger;
pub mod position_map;

pub use distance::estimate_distance;
pub use merger::PositionMerger;
pub use position_map::{PositionEntry, PositionMap};
