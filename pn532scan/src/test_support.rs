//! Test support helpers intended for use by unit and integration tests.
//!
//! They build PN532 replies and mock-backed scanners so tests across the
//! crate and the tests/ directory share one setup path.
#![allow(dead_code)]

use crate::config::{Config, Timing};
use crate::device::{DiscoveredDevice, Scanner};
use crate::protocol::Frame;
use crate::transport::{MockOpener, MockPortList, MockTransport, SharedMockTransport};

/// Config with every settle and poll wait set to zero.
#[doc(hidden)]
pub fn instant_config() -> Config {
    Config::new().with_timing(Timing::immediate())
}

/// Framed GetFirmwareVersion reply for the given IC, version and revision.
#[doc(hidden)]
pub fn firmware_reply(ic: u8, ver: u8, rev: u8) -> Vec<u8> {
    // Payload is at most a few bytes; encode cannot fail
    Frame::encode(&[0xD5, 0x03, ic, ver, rev, 0x07]).unwrap_or_default()
}

/// Framed InListPassiveTarget reply listing one target, padded with zeros
/// to at least `min_len` bytes.
#[doc(hidden)]
pub fn target_reply(sak: u8, uid: &[u8], min_len: usize) -> Vec<u8> {
    let mut payload = vec![0xD5, 0x4B, 0x01, 0x01, 0x00, 0x04, sak, uid.len() as u8];
    payload.extend_from_slice(uid);
    let mut raw = Frame::encode(&payload).unwrap_or_default();
    if raw.len() < min_len {
        raw.resize(min_len, 0x00);
    }
    raw
}

/// Shared mock pre-seeded with `responses`, one per read.
#[doc(hidden)]
pub fn shared_mock_with_responses(responses: Vec<Vec<u8>>) -> SharedMockTransport {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock.into_shared()
}

/// A DiscoveredDevice backed by `mock` using [`instant_config`].
#[doc(hidden)]
pub fn mock_device(mock: &SharedMockTransport) -> DiscoveredDevice {
    DiscoveredDevice::new("mock0", None, mock.boxed(), instant_config())
}

/// Scanner over the given `(port id, mock)` pairs, listed in order.
#[doc(hidden)]
pub fn mock_scanner(ports: &[(&str, SharedMockTransport)]) -> Scanner<MockPortList, MockOpener> {
    let ids: Vec<&str> = ports.iter().map(|(id, _)| *id).collect();
    let mut opener = MockOpener::new();
    for (id, mock) in ports {
        opener.add(id, mock.clone());
    }
    Scanner::new(MockPortList::new(&ids), opener, instant_config())
}
