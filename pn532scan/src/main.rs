// pn532scan/src/main.rs

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use pn532scan::constants::PN532_DEFAULT_BAUD_RATE;
use pn532scan::prelude::*;
use pn532scan::utils::DEFAULT_READ_TIMEOUT_MS;

/// Find a PN532 reader on a serial port and read the UID of one card.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Serial port to try before scanning, e.g. /dev/ttyUSB0 or COM5
    port: Option<String>,

    /// HSU baud rate
    #[arg(long, short = 'b', default_value_t = PN532_DEFAULT_BAUD_RATE)]
    baud: u32,

    /// Upper bound for a single serial read, in milliseconds
    #[arg(long = "timeout-ms", default_value_t = DEFAULT_READ_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Verify frame checksums and response codes
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mode = if self.strict {
            ResponseMode::Strict
        } else {
            ResponseMode::Lenient
        };
        Config::new()
            .with_baud_rate(self.baud)
            .with_read_timeout(ms(self.timeout_ms))
            .with_response_mode(mode)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        eprintln!(" received, stopping...");
        handler_token.cancel();
    })
    .context("failed to install Ctrl-C handler")?;

    let mut scanner = Scanner::system(cli.config());
    let mut device = match scanner.connect(cli.port.as_deref(), &cancel) {
        Ok(device) => device,
        Err(Error::Cancelled) => {
            println!("Exiting.");
            return Ok(());
        }
        Err(e) => {
            for attempt in scanner.attempts() {
                log::info!("{}", attempt);
            }
            eprintln!("Could not find a PN532. Check the wiring, or name the port: pn532scan COM5");
            return Err(e).context("discovery failed");
        }
    };

    println!("Connected to PN532 on {}", device.port());
    if let Some(fw) = device.firmware() {
        println!("{}", fw);
    }
    println!("Waiting for a card... Press Ctrl+C to exit.");

    let polled = device.wait_for_card(&cancel);
    let port = device.port().to_string();
    if let Err(e) = device.close() {
        log::warn!("error closing {}: {}", port, e);
    }

    match polled.with_context(|| format!("lost connection to {}", port))? {
        Some(card) => {
            println!("Card detected! UID: {}", card.uid());
            println!("Card type: {}", card.card_type());
        }
        None => println!("Exiting."),
    }
    Ok(())
}
