// pn532scan/src/card/card_type.rs

use std::fmt;

/// SAK bit set by MIFARE Classic compatible cards
const SAK_CLASSIC: u8 = 0x08;
/// SAK bit set by ISO/IEC 14443-4 compliant cards (DESFire, SmartMX)
const SAK_ISO14443_4: u8 = 0x20;

/// Card family derived from SAK and UID length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    MifareClassic1K,
    MifareClassic4K,
    MifareDesfireOrSmartMx,
    MifareUltralightOrNtag,
    Unknown { sak: u8, uid_length: usize },
}

impl CardType {
    /// Classify a card, first match wins:
    /// SAK bit 0x08 with a 4 or 7 byte UID is MIFARE Classic 1K / 4K,
    /// SAK bit 0x20 is DESFire or SmartMX, SAK 0x00 is Ultralight/NTAG.
    /// Everything else, including a Classic SAK with an odd UID length,
    /// is `Unknown`.
    pub fn classify(sak: u8, uid_length: usize) -> Self {
        if sak & SAK_CLASSIC == SAK_CLASSIC {
            match uid_length {
                4 => return Self::MifareClassic1K,
                7 => return Self::MifareClassic4K,
                _ => {}
            }
        } else if sak & SAK_ISO14443_4 == SAK_ISO14443_4 {
            return Self::MifareDesfireOrSmartMx;
        } else if sak == 0x00 {
            return Self::MifareUltralightOrNtag;
        }
        Self::Unknown { sak, uid_length }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MifareClassic1K => f.write_str("MIFARE Classic 1K"),
            Self::MifareClassic4K => f.write_str("MIFARE Classic 4K"),
            Self::MifareDesfireOrSmartMx => f.write_str("MIFARE DESFire or SmartMX"),
            Self::MifareUltralightOrNtag => f.write_str("MIFARE Ultralight/NTAG"),
            Self::Unknown { sak, uid_length } => {
                write!(f, "Unknown (SAK: 0x{:02X}, UID Length: {})", sak, uid_length)
            }
        }
    }
}

/// Shorthand for [`CardType::classify`].
pub fn classify(sak: u8, uid_length: usize) -> CardType {
    CardType::classify(sak, uid_length)
}
