#[path = "../common/mod.rs"]
mod common;

use pn532scan::card::{Card, CardType};
use pn532scan::protocol::{ResponseMode, decode_target};
use pn532scan::Error;
use proptest::prelude::*;

fn card_from(raw: &[u8]) -> Card {
    Card::from(decode_target(raw).unwrap().unwrap())
}

#[test]
fn classic_1k_from_25_byte_buffer() {
    let card = card_from(&common::fixtures::classic_1k_buffer());
    assert_eq!(card.uid().as_bytes(), &common::fixtures::sample_uid());
    assert_eq!(card.uid().to_string(), "DE AD BE EF");
    assert_eq!(card.sak(), 0x08);
    assert_eq!(card.card_type().to_string(), "MIFARE Classic 1K");
}

#[test]
fn classification_table() {
    let seven = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    let cases: [(u8, &[u8], &str); 5] = [
        (0x08, &[1, 2, 3, 4], "MIFARE Classic 1K"),
        (0x08, &seven, "MIFARE Classic 4K"),
        (0x20, &seven, "MIFARE DESFire or SmartMX"),
        (0x00, &seven, "MIFARE Ultralight/NTAG"),
        (0x99, &[1, 2, 3], "Unknown (SAK: 0x99, UID Length: 3)"),
    ];
    for (sak, uid, label) in cases {
        let card = card_from(&common::fixtures::target_buffer(sak, uid));
        assert_eq!(card.card_type().to_string(), label, "sak {:#04x}", sak);
        assert_eq!(card.uid().as_bytes(), uid);
    }
}

#[test]
fn incomplete_replies_are_none() {
    assert_eq!(decode_target(&[]).unwrap(), None);
    let raw = common::fixtures::classic_1k_buffer();
    assert_eq!(decode_target(&raw[..19]).unwrap(), None);
}

#[test]
fn uid_length_past_buffer_is_malformed() {
    let mut raw = common::fixtures::classic_1k_buffer();
    raw[12] = 0xFF;
    assert!(matches!(
        decode_target(&raw),
        Err(Error::MalformedFrame { declared: 255, .. })
    ));
}

#[test]
fn strict_mode_on_framed_reply() {
    let raw = common::fixtures::ntag_frame();
    let target = ResponseMode::Strict.decode_target(&raw).unwrap().unwrap();
    let card = Card::from(target);
    assert_eq!(card.card_type(), CardType::MifareUltralightOrNtag);
    assert_eq!(card.uid().len(), 7);
}

proptest! {
    #[test]
    fn classified_uid_matches_declared_length(
        sak in any::<u8>(),
        uid in prop::collection::vec(any::<u8>(), 0..12),
    ) {
        let raw = common::fixtures::target_buffer(sak, &uid);
        let card = Card::from(decode_target(&raw).unwrap().unwrap());
        prop_assert_eq!(card.uid().as_bytes(), &uid[..]);
        prop_assert_eq!(card.card_type(), CardType::classify(sak, uid.len()));
    }
}
