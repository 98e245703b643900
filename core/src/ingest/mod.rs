pub mod buffer;
pub mod listener;

pub use buffer::PendingBuffer;
pub use listener::IngressListener;
