// pn532scan/src/prelude.rs

pub use crate::card::{Card, CardType};
pub use crate::config::{Config, SerialSettings, Timing};
pub use crate::device::{DiscoveredDevice, ProbeResult, Scanner};
pub use crate::protocol::{Command, ResponseMode};
pub use crate::transport::{PortEnumerator, PortOpener, Transport};
pub use crate::utils::CancelToken;
pub use crate::{Error, FirmwareVersion, PortInfo, Result, Uid};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
