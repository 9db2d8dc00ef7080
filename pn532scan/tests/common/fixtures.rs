// fixtures.rs: PN532 replies shared by the integration tests

use pn532scan::protocol::Frame;
use pn532scan::test_support::target_reply;

/// GetFirmwareVersion reply as a PN532 v1.6 sends it.
pub fn firmware_reply_bytes() -> Vec<u8> {
    hex::decode("0000ff02fed50332010607e800").unwrap()
}

pub fn sample_uid() -> [u8; 4] {
    [0xDE, 0xAD, 0xBE, 0xEF]
}

/// 25-byte InListPassiveTarget buffer: SAK 0x08, UID DE AD BE EF, zero
/// padded after the frame.
pub fn classic_1k_buffer() -> Vec<u8> {
    target_reply(0x08, &sample_uid(), 25)
}

/// Reply with the given SAK and UID, padded to the 20 bytes the target
/// decoder needs.
pub fn target_buffer(sak: u8, uid: &[u8]) -> Vec<u8> {
    target_reply(sak, uid, 20)
}

/// Correctly framed reply for a 7-byte UID NTAG (SAK 0x00).
pub fn ntag_frame() -> Vec<u8> {
    Frame::encode(&[
        0xD5, 0x4B, 0x01, 0x01, 0x00, 0x44, 0x00, 0x07, 0x04, 0x51, 0x2C, 0x9A, 0x61, 0x3B, 0x80,
    ])
    .unwrap()
}
