pub mod observation;
pub mod source;

pub use observation::{NetworkObservation, RemoteSubmission};
pub use source::ScanSource;
