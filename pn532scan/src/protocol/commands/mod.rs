// pn532scan/src/protocol/commands/mod.rs

use crate::constants::{
    PN532_BRTY_ISO14443A, PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_INLIST_PASSIVE_TARGET,
    PN532_HSU_WAKEUP,
};
use crate::protocol::Frame;

/// HSU wake-up preamble: `55 55 00 00 00`
pub const WAKE_FRAME: [u8; 5] = PN532_HSU_WAKEUP;

/// GetFirmwareVersion: `00 00 FF 02 FE D4 02 2A 00`
pub const FIRMWARE_QUERY_FRAME: [u8; 9] = Frame::host(&[PN532_CMD_GET_FIRMWARE_VERSION]);

/// InListPassiveTarget, MaxTg = 1, BrTy = 106 kbps type A:
/// `00 00 FF 04 FC D4 4A 01 00 E1 00`
pub const READ_UID_FRAME: [u8; 11] = Frame::host(&[
    PN532_CMD_INLIST_PASSIVE_TARGET,
    0x01,
    PN532_BRTY_ISO14443A,
]);

/// Bring the reader out of low-power mode.
pub fn wake_preamble() -> &'static [u8] {
    &WAKE_FRAME
}

pub fn firmware_query() -> &'static [u8] {
    &FIRMWARE_QUERY_FRAME
}

pub fn read_uid_command() -> &'static [u8] {
    &READ_UID_FRAME
}

/// The outbound commands this crate sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Wake,
    GetFirmwareVersion,
    InListPassiveTarget,
}

impl Command {
    /// Command code inside the frame; the wake preamble carries none.
    pub fn command_code(&self) -> Option<u8> {
        match self {
            Self::Wake => None,
            Self::GetFirmwareVersion => Some(PN532_CMD_GET_FIRMWARE_VERSION),
            Self::InListPassiveTarget => Some(PN532_CMD_INLIST_PASSIVE_TARGET),
        }
    }

    /// The complete wire bytes for this command.
    pub fn frame(&self) -> &'static [u8] {
        match self {
            Self::Wake => wake_preamble(),
            Self::GetFirmwareVersion => firmware_query(),
            Self::InListPassiveTarget => read_uid_command(),
        }
    }
}
