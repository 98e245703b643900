pub mod direction;
pub mod layout;
pub mod sweep;

pub use direction::Direction;
pub use layout::{layout, RadarFrame, RadarPoint};
pub use sweep::Sweep;
