// pn532scan/src/lib.rs

//! pn532scan
//!
//! Finds a PN532 NFC reader on the host's serial ports and reads the UID
//! of the first ISO14443A card placed on it.

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
