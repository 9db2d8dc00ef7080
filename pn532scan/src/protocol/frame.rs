// pn532scan/src/protocol/frame.rs

use crate::constants::{PN532_FRAME_OVERHEAD, PN532_POSTAMBLE, PN532_PREAMBLE, PN532_TFI_HOST};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame helper.
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [TFI(1)] [Data(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00 0x00 0xFF
/// Postamble: 0x00
/// Len counts TFI + Data; DCS covers TFI + Data.
pub struct Frame;

impl Frame {
    /// Build a host->PN532 frame at compile time. `data` is the command
    /// code followed by its parameters; `N` must be `data.len() + 8`.
    pub const fn host<const N: usize>(data: &[u8]) -> [u8; N] {
        assert!(N == data.len() + 1 + PN532_FRAME_OVERHEAD);

        let len = (data.len() + 1) as u8;
        let mut out = [0u8; N];
        out[0] = PN532_PREAMBLE[0];
        out[1] = PN532_PREAMBLE[1];
        out[2] = PN532_PREAMBLE[2];
        out[3] = len;
        out[4] = lcs(len);
        out[5] = PN532_TFI_HOST;

        let mut sum = PN532_TFI_HOST;
        let mut i = 0;
        while i < data.len() {
            out[6 + i] = data[i];
            sum = sum.wrapping_add(data[i]);
            i += 1;
        }
        out[6 + data.len()] = 0u8.wrapping_sub(sum);
        out[7 + data.len()] = PN532_POSTAMBLE;
        out
    }

    /// Encode a payload (TFI + data) into a full wire frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > 255 {
            return Err(Error::InvalidLength {
                expected: 255,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(PN532_FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode the frame at the start of `frame` and return its payload
    /// (TFI + data). Bytes after the postamble are ignored.
    pub fn decode(frame: &[u8]) -> Result<&[u8]> {
        if frame.len() < PN532_FRAME_OVERHEAD {
            return Err(Error::InvalidLength {
                expected: PN532_FRAME_OVERHEAD,
                actual: frame.len(),
            });
        }

        if frame[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = frame[3];
        let lcs_actual = frame[4];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        let required_len = PN532_FRAME_OVERHEAD + len as usize;
        if frame.len() < required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let payload_start = 5usize;
        let payload_end = payload_start + len as usize;
        let payload = &frame[payload_start..payload_end];

        let dcs_actual = frame[payload_end];
        let dcs_expected = dcs(payload);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[payload_end + 1] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(payload)
    }
}
