// pn532scan/src/device/handle.rs

use crate::Result;
use crate::card::Card;
use crate::config::Config;
use crate::protocol::commands::READ_UID_FRAME;
use crate::transport::Transport;
use crate::types::FirmwareVersion;
use crate::utils::{CancelToken, bytes_to_hex_spaced, settle};

/// Bytes requested when reading an InListPassiveTarget reply
pub const TARGET_READ_LEN: usize = 64;

/// A port that answered as a PN532 (or that the caller chose to trust),
/// holding the open transport.
pub struct DiscoveredDevice {
    port: String,
    firmware: Option<FirmwareVersion>,
    transport: Box<dyn Transport>,
    config: Config,
}

impl DiscoveredDevice {
    pub fn new(
        port: impl Into<String>,
        firmware: Option<FirmwareVersion>,
        transport: Box<dyn Transport>,
        config: Config,
    ) -> Self {
        Self {
            port: port.into(),
            firmware,
            transport,
            config,
        }
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// `None` when the port was used without a successful probe.
    pub fn firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issue one InListPassiveTarget and decode the reply.
    ///
    /// Returns `Ok(None)` when no complete target reply arrived, which is
    /// the normal result while no card is in the field.
    pub fn read_uid(&mut self) -> Result<Option<Card>> {
        self.transport.reset_input_buffer()?;
        self.transport.write(&READ_UID_FRAME)?;
        settle(self.config.timing.uid_settle);

        let raw = self.transport.read(TARGET_READ_LEN)?;
        if !raw.is_empty() {
            log::debug!(
                "target reply ({} bytes): {}",
                raw.len(),
                bytes_to_hex_spaced(&raw)
            );
        }

        let target = self.config.response_mode.decode_target(&raw)?;
        Ok(target.map(Card::from))
    }

    /// Poll until a card shows up, the token is cancelled, or the
    /// transport fails.
    ///
    /// Replies that do not decode are logged and polling continues;
    /// transport errors end the loop.
    pub fn wait_for_card(&mut self, cancel: &CancelToken) -> Result<Option<Card>> {
        loop {
            if cancel.is_cancelled() {
                log::debug!("polling on {} cancelled", self.port);
                return Ok(None);
            }

            match self.read_uid() {
                Ok(Some(card)) => return Ok(Some(card)),
                Ok(None) => {}
                Err(e) if e.is_transport() => return Err(e),
                Err(e) => log::warn!("ignoring bad reply on {}: {}", self.port, e),
            }

            settle(self.config.timing.poll_interval);
        }
    }

    /// Release the transport.
    pub fn close(mut self) -> Result<()> {
        log::debug!("closing {}", self.port);
        self.transport.close()
    }
}

impl std::fmt::Debug for DiscoveredDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveredDevice")
            .field("port", &self.port)
            .field("firmware", &self.firmware)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
