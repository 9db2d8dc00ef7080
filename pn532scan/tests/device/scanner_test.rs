#[path = "../common/mod.rs"]
mod common;

use pn532scan::config::SerialSettings;
use pn532scan::device::{AttemptOutcome, Scanner};
use pn532scan::transport::{MockOpener, MockPortList, MockTransport, PortOpener, Transport};
use pn532scan::utils::CancelToken;
use pn532scan::{Error, FirmwareVersion, Result};

/// Opener that sets the token once `trigger` is opened, standing in for a
/// Ctrl-C arriving while that port is being probed.
struct CancelOnOpen {
    inner: MockOpener,
    trigger: &'static str,
    token: CancelToken,
}

impl PortOpener for CancelOnOpen {
    fn open(&mut self, port: &str, settings: &SerialSettings) -> Result<Box<dyn Transport>> {
        if port == self.trigger {
            self.token.cancel();
        }
        self.inner.open(port, settings)
    }
}

#[test]
fn empty_port_list() {
    common::init_logging();
    let mut scanner = common::helpers::mock_scanner(&[]);
    assert!(matches!(scanner.scan(&CancelToken::new()), Err(Error::NoPortsFound)));
    assert!(scanner.opener().opened.is_empty());
    assert!(scanner.attempts().is_empty());
}

#[test]
fn zero_byte_port_is_closed_and_skipped() {
    common::init_logging();
    let dead = MockTransport::new().into_shared();
    let live = common::helpers::shared_mock_with_responses(vec![
        common::fixtures::firmware_reply_bytes(),
    ]);
    let mut scanner = common::helpers::mock_scanner(&[
        ("/dev/ttyS0", dead.clone()),
        ("/dev/ttyUSB0", live.clone()),
    ]);

    let dev = scanner.scan(&CancelToken::new()).unwrap();
    assert_eq!(dev.port(), "/dev/ttyUSB0");
    assert_eq!(dev.firmware(), Some(FirmwareVersion::new(0x32, 0x01, 0x06)));
    assert!(dead.is_closed());
    assert!(!live.is_closed());
    // the silent port still saw the full probe
    assert_eq!(dead.sent().len(), 2);
}

#[test]
fn all_ports_silent() {
    common::init_logging();
    let a = MockTransport::new().into_shared();
    let b = MockTransport::new().into_shared();
    let mut scanner = common::helpers::mock_scanner(&[("a", a.clone()), ("b", b.clone())]);

    match scanner.scan(&CancelToken::new()) {
        Err(Error::NoDeviceFound { tried }) => assert_eq!(tried, 2),
        other => panic!("expected NoDeviceFound, got {:?}", other),
    }
    assert!(a.is_closed() && b.is_closed());
    assert!(
        scanner
            .attempts()
            .iter()
            .all(|attempt| attempt.outcome == AttemptOutcome::NoResponse)
    );
}

#[test]
fn uses_configured_serial_settings() {
    common::init_logging();
    let live = common::helpers::shared_mock_with_responses(vec![
        common::fixtures::firmware_reply_bytes(),
    ]);
    let mut scanner = common::helpers::mock_scanner(&[("COM5", live)]);
    scanner.scan(&CancelToken::new()).unwrap();
    let settings = scanner.opener().settings[0];
    assert_eq!(settings.baud_rate, 115_200);
    assert_eq!(settings.read_timeout.as_millis(), 1000);
}

#[test]
fn preferred_port_skips_scan() {
    common::init_logging();
    let live = common::helpers::shared_mock_with_responses(vec![
        common::fixtures::firmware_reply_bytes(),
    ]);
    let other = MockTransport::new().into_shared();
    let mut scanner = common::helpers::mock_scanner(&[("COM1", other), ("COM5", live)]);

    let dev = scanner.connect(Some("COM5"), &CancelToken::new()).unwrap();
    assert_eq!(dev.port(), "COM5");
    assert!(dev.firmware().is_some());
    assert_eq!(scanner.opener().opened, vec!["COM5"]);
}

#[test]
fn cancelled_before_scan_opens_no_port() {
    common::init_logging();
    let silent: Vec<_> = (0..3).map(|_| MockTransport::new().into_shared()).collect();
    let mut scanner = common::helpers::mock_scanner(&[
        ("a", silent[0].clone()),
        ("b", silent[1].clone()),
        ("c", silent[2].clone()),
    ]);
    let token = CancelToken::new();
    token.cancel();

    assert!(matches!(scanner.scan(&token), Err(Error::Cancelled)));
    assert!(scanner.opener().opened.is_empty());
    assert!(silent.iter().all(|m| m.sent().is_empty()));
}

#[test]
fn cancel_during_probe_closes_port_and_stops() {
    common::init_logging();
    let a = MockTransport::new().into_shared();
    // b would answer, but the interrupt arrives while it is probed
    let b = common::helpers::shared_mock_with_responses(vec![
        common::fixtures::firmware_reply_bytes(),
    ]);
    let c = MockTransport::new().into_shared();
    let mut inner = MockOpener::new();
    inner.add("a", a.clone()).add("b", b.clone()).add("c", c.clone());

    let token = CancelToken::new();
    let opener = CancelOnOpen {
        inner,
        trigger: "b",
        token: token.clone(),
    };
    let mut scanner = Scanner::new(
        MockPortList::new(&["a", "b", "c"]),
        opener,
        common::helpers::instant_config(),
    );

    assert!(matches!(scanner.scan(&token), Err(Error::Cancelled)));
    assert!(a.is_closed());
    assert!(b.is_closed());
    assert!(c.sent().is_empty());
    assert_eq!(scanner.opener().inner.opened, vec!["a", "b"]);
}
