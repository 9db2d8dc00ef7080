#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use pn532scan::Result;
use serial_test::serial;

// Needs a PN532 in HSU mode on a serial port. Run manually with:
//
// cargo test -p pn532scan --test hardware -- --ignored

#[test]
#[ignore]
#[serial]
fn discover_and_close() -> Result<()> {
    match common::open_device()? {
        Some(dev) => {
            eprintln!("PN532 on {} ({:?})", dev.port(), dev.firmware());
            dev.close()
        }
        None => Ok(()),
    }
}

#[test]
#[ignore]
#[serial]
fn single_read_without_card() -> Result<()> {
    if let Some(mut dev) = common::open_device()? {
        // With no card in the field the reply is incomplete, not an error
        let card = dev.read_uid()?;
        eprintln!("read_uid: {:?}", card);
        dev.close()?;
    }
    Ok(())
}
