//! Small helpers used across the crate: hex formatting for logs and UIDs,
//! settle-time defaults, and the cancellation token.

pub mod cancel;
pub mod hex;
pub mod timeout;

pub use cancel::CancelToken;
pub use hex::*;
pub use timeout::*;
