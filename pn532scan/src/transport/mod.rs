// pn532scan/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "serial")]
pub mod ports;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::{MockOpener, MockPortList, MockTransport, SharedMockTransport};
#[cfg(feature = "serial")]
pub use ports::SystemPorts;
#[cfg(feature = "serial")]
pub use serial::{SerialOpener, SerialTransport};
pub use traits::{PortEnumerator, PortOpener, Transport};
