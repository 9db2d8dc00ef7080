// pn532scan/src/transport/ports.rs

#![cfg(feature = "serial")]

use serialport::SerialPortType;

use crate::Result;
use crate::transport::traits::PortEnumerator;
use crate::types::PortInfo;

/// Enumerates the serial ports the operating system reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPorts;

impl PortEnumerator for SystemPorts {
    fn list_ports(&self) -> Result<Vec<PortInfo>> {
        let ports = serialport::available_ports()?;
        Ok(ports
            .into_iter()
            .map(|p| {
                let description = describe(&p.port_type);
                PortInfo::new(p.port_name, description)
            })
            .collect())
    }
}

/// Human readable description for a port type.
pub fn describe(port_type: &SerialPortType) -> String {
    match port_type {
        SerialPortType::UsbPort(usb) => match (&usb.product, &usb.manufacturer) {
            (Some(product), _) => product.clone(),
            (None, Some(manufacturer)) => manufacturer.clone(),
            (None, None) => format!("USB device {:04x}:{:04x}", usb.vid, usb.pid),
        },
        SerialPortType::PciPort => "PCI device".to_string(),
        SerialPortType::BluetoothPort => "Bluetooth device".to_string(),
        SerialPortType::Unknown => "n/a".to_string(),
    }
}
