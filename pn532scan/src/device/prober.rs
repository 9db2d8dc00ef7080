// pn532scan/src/device/prober.rs

use crate::Result;
use crate::config::Config;
use crate::protocol::commands::{FIRMWARE_QUERY_FRAME, WAKE_FRAME};
use crate::transport::Transport;
use crate::types::FirmwareVersion;
use crate::utils::{bytes_to_hex_spaced, settle};

/// Bytes requested when reading the firmware reply
pub const FIRMWARE_READ_LEN: usize = 20;

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    Found(FirmwareVersion),
    NotFound,
}

impl ProbeResult {
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeResult::Found(_))
    }

    pub fn firmware(&self) -> Option<FirmwareVersion> {
        match self {
            ProbeResult::Found(fw) => Some(*fw),
            ProbeResult::NotFound => None,
        }
    }
}

/// Wake the chip, ask for its firmware version and report whether a PN532
/// answered. Any failure, transport or protocol, is `NotFound`. The
/// transport is left open either way.
pub fn probe(transport: &mut dyn Transport, config: &Config) -> ProbeResult {
    match try_probe(transport, config) {
        Ok(fw) => {
            log::info!("found {}", fw);
            ProbeResult::Found(fw)
        }
        Err(e) => {
            log::debug!("probe failed: {}", e);
            ProbeResult::NotFound
        }
    }
}

fn try_probe(transport: &mut dyn Transport, config: &Config) -> Result<FirmwareVersion> {
    transport.reset_input_buffer()?;

    log::debug!("wake: {}", bytes_to_hex_spaced(&WAKE_FRAME));
    transport.write(&WAKE_FRAME)?;
    settle(config.timing.wake_settle);

    log::debug!("firmware query: {}", bytes_to_hex_spaced(&FIRMWARE_QUERY_FRAME));
    transport.write(&FIRMWARE_QUERY_FRAME)?;
    settle(config.timing.firmware_settle);

    let raw = transport.read(FIRMWARE_READ_LEN)?;
    log::debug!("firmware reply ({} bytes): {}", raw.len(), bytes_to_hex_spaced(&raw));

    config.response_mode.decode_firmware(&raw)
}
