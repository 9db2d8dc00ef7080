// pn532scan/src/constants.rs
//! Common protocol constants used across the crate

/// PN532 wire frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 wire frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Framing overhead of a normal information frame:
/// preamble(3) + len(1) + lcs(1) + dcs(1) + postamble(1)
pub const PN532_FRAME_OVERHEAD: usize = 7;

/// Frame identifiers (TFI): host->PN532 (D4) and PN532->host (D5)
pub const PN532_TFI_HOST: u8 = 0xD4;
pub const PN532_TFI_DEVICE: u8 = 0xD5;

/// GetFirmwareVersion command / response codes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_RESP_GET_FIRMWARE_VERSION: u8 = 0x03;

/// PN532 InListPassiveTarget command / response codes
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;
pub const PN532_RESP_INLIST_PASSIVE_TARGET: u8 = 0x4B;

/// InListPassiveTarget BrTy for 106 kbps ISO/IEC 14443 Type A
pub const PN532_BRTY_ISO14443A: u8 = 0x00;

/// HSU wake-up sequence. See "HSU wake up condition" in the PN532 user manual.
pub const PN532_HSU_WAKEUP: [u8; 5] = [0x55, 0x55, 0x00, 0x00, 0x00];

/// Default HSU baud rate
pub const PN532_DEFAULT_BAUD_RATE: u32 = 115_200;
