// pn532scan/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - length (mod 256)
pub const fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) for a PN532 frame over TFI + data
/// DCS = 0x100 - (sum(payload) & 0xff)
pub const fn dcs(payload: &[u8]) -> u8 {
    let mut sum = 0u8;
    let mut i = 0;
    while i < payload.len() {
        sum = sum.wrapping_add(payload[i]);
        i += 1;
    }
    0u8.wrapping_sub(sum)
}
