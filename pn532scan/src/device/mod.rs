// pn532scan/src/device/mod.rs

pub mod handle;
pub mod prober;
pub mod scanner;

pub use handle::DiscoveredDevice;
pub use prober::{ProbeResult, probe};
pub use scanner::{AttemptOutcome, PortAttempt, Scanner};
