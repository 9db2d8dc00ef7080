// pn532scan/src/card/mod.rs

use crate::protocol::TargetResponse;
use crate::types::Uid;

mod card_type;
pub use card_type::{CardType, classify};

/// A card seen by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    uid: Uid,
    sak: u8,
    card_type: CardType,
}

impl Card {
    pub fn new(uid: Uid, sak: u8) -> Self {
        let card_type = classify(sak, uid.len());
        Self {
            uid,
            sak,
            card_type,
        }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn sak(&self) -> u8 {
        self.sak
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }
}

impl From<TargetResponse> for Card {
    /// Classification uses the UID length declared in the frame.
    fn from(target: TargetResponse) -> Self {
        Self {
            card_type: classify(target.sak, target.uid_length as usize),
            uid: target.uid,
            sak: target.sak,
        }
    }
}
