// pn532scan/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    let end = idx.checked_add(len).ok_or(Error::InvalidLength {
        expected: usize::MAX,
        actual: data.len(),
    })?;
    ensure_len(data, end)?;
    Ok(&data[idx..end])
}

/// Ensure the bytes starting at `idx` equal `expected` (TFI + response
/// code). Returns UnexpectedResponse naming the first differing byte.
pub fn expect_bytes_at(data: &[u8], idx: usize, expected: &[u8]) -> Result<()> {
    let actual = slice_at(data, idx, expected.len())?;
    for (&e, &a) in expected.iter().zip(actual) {
        if e != a {
            return Err(Error::UnexpectedResponse {
                expected: e,
                actual: a,
            });
        }
    }
    Ok(())
}
