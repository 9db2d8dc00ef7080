//! Hex helpers for logging raw frames and printing UIDs.

use std::fmt::Write;

fn join_hex(bytes: &[u8], sep: &str, upper: bool) -> String {
    let mut s = String::with_capacity(bytes.len() * (2 + sep.len()));
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push_str(sep);
        }
        // write! never fails writing to a String
        let _ = if upper {
            write!(&mut s, "{:02X}", b)
        } else {
            write!(&mut s, "{:02x}", b)
        };
    }
    s
}

/// Lowercase hex without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    join_hex(bytes, "", false)
}

/// Lowercase hex with a single space between bytes, used for frame dumps.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, " ", false)
}

/// Uppercase hex with a single space between bytes, the usual UID form.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_upper_spaced(bytes: &[u8]) -> String {
    join_hex(bytes, " ", true)
}
