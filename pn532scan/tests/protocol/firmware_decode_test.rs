#[path = "../common/mod.rs"]
mod common;

use pn532scan::protocol::{ResponseMode, decode_firmware};
use pn532scan::{Error, FirmwareVersion};

#[test]
fn decodes_version_bytes() {
    let fw = decode_firmware(&common::fixtures::firmware_reply_bytes()).unwrap();
    assert_eq!(fw, FirmwareVersion::new(0x32, 0x01, 0x06));
    assert_eq!(fw.to_string(), "PN532 firmware 1.6");
}

#[test]
fn nine_bytes_is_not_enough() {
    let raw = common::fixtures::firmware_reply_bytes();
    assert!(matches!(decode_firmware(&raw[..9]), Err(Error::NotRecognized)));
}

#[test]
fn wrong_response_code_is_not_recognized() {
    let mut raw = common::fixtures::firmware_reply_bytes();
    raw[6] = 0x4B;
    assert!(matches!(decode_firmware(&raw), Err(Error::NotRecognized)));
}

#[test]
fn strict_mode_needs_real_frame() {
    // The captured reply carries LEN 0x02, which does not match its body.
    let raw = common::fixtures::firmware_reply_bytes();
    assert!(ResponseMode::Lenient.decode_firmware(&raw).is_ok());
    assert!(ResponseMode::Strict.decode_firmware(&raw).is_err());

    let framed = common::helpers::firmware_reply(0x32, 0x01, 0x06);
    assert_eq!(
        ResponseMode::Strict.decode_firmware(&framed).unwrap(),
        FirmwareVersion::new(0x32, 0x01, 0x06)
    );
}
