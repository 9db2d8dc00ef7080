#[path = "../common/mod.rs"]
mod common;

use pn532scan::device::{ProbeResult, probe};
use pn532scan::protocol::ResponseMode;
use pn532scan::protocol::commands::{FIRMWARE_QUERY_FRAME, WAKE_FRAME};
use pn532scan::transport::MockTransport;
use pn532scan::FirmwareVersion;

#[test]
fn probe_reports_firmware() {
    common::init_logging();
    let mut m = MockTransport::new();
    m.push_response(common::fixtures::firmware_reply_bytes());

    let res = probe(&mut m, &common::helpers::instant_config());
    assert_eq!(res, ProbeResult::Found(FirmwareVersion::new(0x32, 0x01, 0x06)));
    assert_eq!(m.sent, vec![WAKE_FRAME.to_vec(), FIRMWARE_QUERY_FRAME.to_vec()]);
}

#[test]
fn probe_with_no_reply() {
    common::init_logging();
    let mut m = MockTransport::new();
    let res = probe(&mut m, &common::helpers::instant_config());
    assert_eq!(res, ProbeResult::NotFound);
    // probing never closes the transport
    assert!(!m.closed);
}

#[test]
fn strict_probe_rejects_bad_checksum() {
    common::init_logging();
    let mut m = MockTransport::new();
    m.push_response(common::fixtures::firmware_reply_bytes());
    let config = common::helpers::instant_config().with_response_mode(ResponseMode::Strict);
    assert_eq!(probe(&mut m, &config), ProbeResult::NotFound);
}

#[test]
fn read_failure_is_not_found() {
    common::init_logging();
    let mut m = MockTransport::new();
    m.push_response(common::fixtures::firmware_reply_bytes());
    m.set_read_failures(1);
    assert!(!probe(&mut m, &common::helpers::instant_config()).is_found());
}
