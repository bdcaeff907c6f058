// libpicc/src/transport/mod.rs

pub mod exchange;
pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use exchange::{receive_response, send_frame};
pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::Transport;
