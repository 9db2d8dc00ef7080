#[path = "../common/mod.rs"]
mod common;

use pn532scan::transport::{MockTransport, PortEnumerator, Transport};
use pn532scan::transport::MockPortList;

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x01]);
    m.write(&[0xAA]).unwrap();
    assert_eq!(m.sent.len(), 1);
    assert_eq!(m.read(20).unwrap(), vec![0x01]);
    assert_eq!(m.pop_sent(), Some(vec![0xAA]));
}

#[test]
fn reads_are_bounded_by_max_len() {
    let mut m = MockTransport::new();
    m.push_response(common::fixtures::classic_1k_buffer());
    let got = m.read(20).unwrap();
    assert_eq!(got.len(), 20);
    assert_eq!(&got[..], &common::fixtures::classic_1k_buffer()[..20]);
}

#[test]
fn shared_mock_observes_boxed_use() {
    let shared = common::helpers::shared_mock_with_responses(vec![vec![0x42]]);
    let mut boxed = shared.boxed();
    boxed.reset_input_buffer().unwrap();
    assert_eq!(boxed.read(64).unwrap(), vec![0x42]);
    assert_eq!(shared.with(|m| m.input_resets), 1);
}

#[test]
fn port_list_keeps_order() {
    let ports = MockPortList::new(&["COM3", "COM1", "COM7"]).list_ports().unwrap();
    let ids: Vec<_> = ports.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["COM3", "COM1", "COM7"]);
    assert_eq!(ports[0].to_string(), "COM3 - mock port");
}
