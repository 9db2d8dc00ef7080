// pn532scan/src/protocol/responses/firmware.rs

use crate::constants::{PN532_RESP_GET_FIRMWARE_VERSION, PN532_TFI_DEVICE};
use crate::protocol::{Frame, parser};
use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Shortest buffer that can carry a GetFirmwareVersion reply
pub const FIRMWARE_MIN_LEN: usize = 10;

// Offsets into the raw buffer (frame starts at 0)
const HEADER_OFFSET: usize = 5;
const IC_OFFSET: usize = 7;
const VER_OFFSET: usize = 8;
const REV_OFFSET: usize = 9;

const HEADER: [u8; 2] = [PN532_TFI_DEVICE, PN532_RESP_GET_FIRMWARE_VERSION];

/// Decode a GetFirmwareVersion reply by fixed offsets.
/// Layout: preamble(3) len lcs D5 03 IC Ver Rev [Support dcs postamble]
///
/// Anything shorter than 10 bytes or without `D5 03` at offsets 5..7 is
/// `Error::NotRecognized`.
pub fn decode_firmware(raw: &[u8]) -> Result<FirmwareVersion> {
    if raw.len() < FIRMWARE_MIN_LEN {
        return Err(Error::NotRecognized);
    }
    if parser::expect_bytes_at(raw, HEADER_OFFSET, &HEADER).is_err() {
        return Err(Error::NotRecognized);
    }

    Ok(FirmwareVersion::new(
        parser::byte_at(raw, IC_OFFSET)?,
        parser::byte_at(raw, VER_OFFSET)?,
        parser::byte_at(raw, REV_OFFSET)?,
    ))
}

/// Like [`decode_firmware`] but also verifies the frame checksums and the
/// response code inside the decoded payload.
pub fn decode_firmware_strict(raw: &[u8]) -> Result<FirmwareVersion> {
    if raw.len() < FIRMWARE_MIN_LEN {
        return Err(Error::NotRecognized);
    }

    let payload = Frame::decode(raw)?;
    parser::expect_bytes_at(payload, 0, &HEADER)?;
    // payload: D5 03 IC Ver Rev Support
    let fields = parser::slice_at(payload, 2, 3)?;
    Ok(FirmwareVersion::new(fields[0], fields[1], fields[2]))
}
