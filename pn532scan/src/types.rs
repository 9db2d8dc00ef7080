// pn532scan/src/types.rs

use std::fmt;

/// Card UID - Newtype Pattern (usually 4 or 7 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact lowercase hex, e.g. `deadbeef`
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// Uppercase, space separated: `DE AD BE EF`
impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_upper_spaced(self.as_bytes()))
    }
}

/// Reply to GetFirmwareVersion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// IC version, 0x32 for a PN532
    pub ic_version: u8,
    pub fw_version: u8,
    pub fw_revision: u8,
}

impl FirmwareVersion {
    pub fn new(ic_version: u8, fw_version: u8, fw_revision: u8) -> Self {
        Self {
            ic_version,
            fw_version,
            fw_revision,
        }
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PN5{:02x} firmware {}.{}",
            self.ic_version, self.fw_version, self.fw_revision
        )
    }
}

/// A serial port reported by the system, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortInfo {
    /// Path or name used to open the port (`/dev/ttyUSB0`, `COM5`)
    pub id: String,
    /// Human-readable description
    pub description: String,
}

impl PortInfo {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for PortInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.description)
    }
}
