// pn532scan/src/protocol/responses/target.rs

use crate::constants::{PN532_RESP_INLIST_PASSIVE_TARGET, PN532_TFI_DEVICE};
use crate::protocol::{Frame, parser};
use crate::types::Uid;
use crate::{Error, Result};

/// Responses shorter than this mean no card has been listed yet
pub const TARGET_MIN_LEN: usize = 20;

// Offsets into the raw buffer (frame starts at 0):
// preamble(3) len lcs D5 4B NbTg Tg SENS_RES(2) SEL_RES NFCIDLength NFCID..
const SAK_OFFSET: usize = 11;
const UID_LEN_OFFSET: usize = 12;
const UID_OFFSET: usize = 13;

// Same fields relative to the decoded payload (TFI at 0)
const PAYLOAD_NBTG_OFFSET: usize = 2;
const PAYLOAD_SAK_OFFSET: usize = 6;
const PAYLOAD_UID_LEN_OFFSET: usize = 7;
const PAYLOAD_UID_OFFSET: usize = 8;

/// One ISO14443A target listed by InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetResponse {
    pub sak: u8,
    pub uid_length: u8,
    pub uid: Uid,
}

/// Decode an InListPassiveTarget reply by fixed offsets.
///
/// Returns `Ok(None)` while the reply is shorter than 20 bytes (no card
/// yet). A UID length that runs past the buffer is `Error::MalformedFrame`.
pub fn decode_target(raw: &[u8]) -> Result<Option<TargetResponse>> {
    if raw.len() < TARGET_MIN_LEN {
        return Ok(None);
    }
    fields_at(raw, SAK_OFFSET, UID_LEN_OFFSET, UID_OFFSET).map(Some)
}

/// Like [`decode_target`] but verifies the frame checksums and the
/// `D5 4B` response code, and bounds the UID by the frame length rather
/// than the buffer length. A reply listing zero targets is `Ok(None)`.
pub fn decode_target_strict(raw: &[u8]) -> Result<Option<TargetResponse>> {
    if raw.len() < TARGET_MIN_LEN {
        return Ok(None);
    }

    let payload = Frame::decode(raw)?;
    parser::expect_bytes_at(
        payload,
        0,
        &[PN532_TFI_DEVICE, PN532_RESP_INLIST_PASSIVE_TARGET],
    )?;
    if parser::byte_at(payload, PAYLOAD_NBTG_OFFSET)? == 0 {
        return Ok(None);
    }
    fields_at(
        payload,
        PAYLOAD_SAK_OFFSET,
        PAYLOAD_UID_LEN_OFFSET,
        PAYLOAD_UID_OFFSET,
    )
    .map(Some)
}

fn fields_at(
    data: &[u8],
    sak_offset: usize,
    uid_len_offset: usize,
    uid_offset: usize,
) -> Result<TargetResponse> {
    let sak = parser::byte_at(data, sak_offset)?;
    let uid_length = parser::byte_at(data, uid_len_offset)?;

    let uid = parser::slice_at(data, uid_offset, uid_length as usize).map_err(|_| {
        Error::MalformedFrame {
            declared: uid_length as usize,
            available: data.len().saturating_sub(uid_offset),
        }
    })?;

    Ok(TargetResponse {
        sak,
        uid_length,
        uid: Uid::from_bytes(uid),
    })
}
