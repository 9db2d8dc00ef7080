// pn532scan/src/device/scanner.rs

use std::fmt;

use crate::config::Config;
use crate::device::handle::DiscoveredDevice;
use crate::device::prober::{ProbeResult, probe};
use crate::transport::{PortEnumerator, PortOpener, Transport};
use crate::types::FirmwareVersion;
use crate::utils::CancelToken;
use crate::{Error, Result};

/// What happened on one port during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The port could not be opened
    OpenFailed(String),
    /// Opened, but nothing answered the firmware query
    NoResponse,
    Found(FirmwareVersion),
    /// Explicitly requested port used without a firmware reply
    Trusted,
}

/// Per-port record kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortAttempt {
    pub port: String,
    pub outcome: AttemptOutcome,
}

impl fmt::Display for PortAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            AttemptOutcome::OpenFailed(reason) => {
                write!(f, "{}: open failed ({})", self.port, reason)
            }
            AttemptOutcome::NoResponse => write!(f, "{}: no PN532 response", self.port),
            AttemptOutcome::Found(fw) => write!(f, "{}: {}", self.port, fw),
            AttemptOutcome::Trusted => write!(f, "{}: used without probe reply", self.port),
        }
    }
}

/// Walks the available ports in order and returns the first one where a
/// PN532 answers.
pub struct Scanner<E, O> {
    enumerator: E,
    opener: O,
    config: Config,
    attempts: Vec<PortAttempt>,
}

impl<E: PortEnumerator, O: PortOpener> Scanner<E, O> {
    pub fn new(enumerator: E, opener: O, config: Config) -> Self {
        Self {
            enumerator,
            opener,
            config,
            attempts: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Outcome of every port tried by the last `scan` or `connect`.
    pub fn attempts(&self) -> &[PortAttempt] {
        &self.attempts
    }

    /// Probe every listed port until one answers. Ports that fail the
    /// probe are closed before moving on.
    ///
    /// `cancel` is checked before each port and after each probe; once it
    /// is set the port in hand is closed and `Error::Cancelled` returned.
    pub fn scan(&mut self, cancel: &CancelToken) -> Result<DiscoveredDevice> {
        self.attempts.clear();
        self.scan_ports(cancel)
    }

    /// Use `preferred` when given, otherwise scan.
    ///
    /// A preferred port that opens is used even if the firmware probe gets
    /// no answer. If it cannot be opened, all ports are scanned instead.
    pub fn connect(
        &mut self,
        preferred: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<DiscoveredDevice> {
        let Some(port) = preferred else {
            return self.scan(cancel);
        };

        self.attempts.clear();
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match self.opener.open(port, &self.config.serial) {
            Ok(mut transport) => {
                let firmware = probe(&mut *transport, &self.config).firmware();
                if cancel.is_cancelled() {
                    release(&mut *transport, port);
                    return Err(Error::Cancelled);
                }
                let outcome = match firmware {
                    Some(fw) => AttemptOutcome::Found(fw),
                    None => {
                        log::warn!("no firmware reply on {}, using it anyway", port);
                        AttemptOutcome::Trusted
                    }
                };
                self.record(port, outcome);
                Ok(DiscoveredDevice::new(port, firmware, transport, self.config))
            }
            Err(e) => {
                log::warn!("could not open {}: {}; scanning all ports", port, e);
                self.record(port, AttemptOutcome::OpenFailed(e.to_string()));
                self.scan_ports(cancel)
            }
        }
    }

    fn scan_ports(&mut self, cancel: &CancelToken) -> Result<DiscoveredDevice> {
        let ports = self.enumerator.list_ports()?;
        if ports.is_empty() {
            log::warn!("no serial ports found");
            return Err(Error::NoPortsFound);
        }

        log::info!("scanning {} port(s)", ports.len());
        for info in &ports {
            if cancel.is_cancelled() {
                log::info!("scan cancelled");
                return Err(Error::Cancelled);
            }
            log::info!("trying {}", info);
            if let Some(device) = self.try_port(&info.id, cancel)? {
                return Ok(device);
            }
        }

        Err(Error::NoDeviceFound { tried: ports.len() })
    }

    fn try_port(&mut self, port: &str, cancel: &CancelToken) -> Result<Option<DiscoveredDevice>> {
        let mut transport = match self.opener.open(port, &self.config.serial) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("could not open {}: {}", port, e);
                self.record(port, AttemptOutcome::OpenFailed(e.to_string()));
                return Ok(None);
            }
        };

        let result = probe(&mut *transport, &self.config);
        if cancel.is_cancelled() {
            release(&mut *transport, port);
            return Err(Error::Cancelled);
        }

        match result {
            ProbeResult::Found(fw) => {
                self.record(port, AttemptOutcome::Found(fw));
                Ok(Some(DiscoveredDevice::new(port, Some(fw), transport, self.config)))
            }
            ProbeResult::NotFound => {
                log::info!("no PN532 on {}", port);
                release(&mut *transport, port);
                self.record(port, AttemptOutcome::NoResponse);
                Ok(None)
            }
        }
    }

    fn record(&mut self, port: &str, outcome: AttemptOutcome) {
        self.attempts.push(PortAttempt {
            port: port.to_string(),
            outcome,
        });
    }
}

fn release(transport: &mut dyn Transport, port: &str) {
    if let Err(e) = transport.close() {
        log::debug!("error closing {}: {}", port, e);
    }
}

#[cfg(feature = "serial")]
impl Scanner<crate::transport::SystemPorts, crate::transport::SerialOpener> {
    /// Scanner over the host's real serial ports.
    pub fn system(config: Config) -> Self {
        Self::new(
            crate::transport::SystemPorts,
            crate::transport::SerialOpener,
            config,
        )
    }
}

impl<E, O> fmt::Debug for Scanner<E, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("config", &self.config)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}
