//! Serial port enumeration strategies.
//!
//! The default strategy asks `serialport` for every port the OS knows about
//! and attaches the interface label the platform offers:
//!
//! - **Linux**: the `interface` attribute under `/sys/class/tty/<name>/device`
//! - **macOS**: the first interface label under the port's USB device node in
//!   the IOKit registry (see [`registry`])
//! - **elsewhere**: the USB product string reported by `serialport`
//!
//! On macOS the device-level lookup hands both CDC interfaces of a composite
//! board the same label. [`registry::list_ports`] is the corrected strategy
//! that reads per-interface labels instead; [`crate::compat`] decides when it
//! is needed.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod registry;
pub mod sysfs;

use log::trace;

use crate::port::PortDescriptor;
#[cfg(not(feature = "native"))]
use crate::error::Error;
use crate::error::Result;

/// Attach an interface label to every USB port using `label`.
///
/// Non-USB ports never carry a label. Order is preserved.
pub fn label_ports<F>(ports: Vec<PortDescriptor>, label: F) -> Vec<PortDescriptor>
where
    F: Fn(&PortDescriptor) -> Option<String>,
{
    ports
        .into_iter()
        .map(|mut port| {
            port.interface = if port.vid.is_some() { label(&port) } else { None };
            trace!("Labelled {} (interface: {:?})", port.device, port.interface);
            port
        })
        .collect()
}

/// Enumerate every serial port currently reported by the OS, in OS order.
///
/// No filtering happens here. Enumeration failures propagate unchanged.
#[cfg(feature = "native")]
pub fn list_all_ports() -> Result<Vec<PortDescriptor>> {
    let ports: Vec<PortDescriptor> = serialport::available_ports()?
        .iter()
        .map(describe)
        .collect();
    log::debug!("OS reported {} serial port(s)", ports.len());

    with_default_labels(ports)
}

/// Enumerate every serial port (stub without native support).
#[cfg(not(feature = "native"))]
pub fn list_all_ports() -> Result<Vec<PortDescriptor>> {
    Err(Error::Unsupported(
        "serial port enumeration requires the `native` feature".to_string(),
    ))
}

/// Convert a `serialport` record into a descriptor without an interface label.
#[cfg(feature = "native")]
pub(crate) fn describe(info: &serialport::SerialPortInfo) -> PortDescriptor {
    let port = PortDescriptor::new(info.port_name.clone(), None);

    match &info.port_type {
        serialport::SerialPortType::UsbPort(usb) => port
            .with_usb(usb.vid, usb.pid, usb.serial_number.as_deref())
            .with_strings(usb.manufacturer.as_deref(), usb.product.as_deref()),
        _ => port,
    }
}

#[cfg(all(feature = "native", target_os = "linux"))]
fn with_default_labels(ports: Vec<PortDescriptor>) -> Result<Vec<PortDescriptor>> {
    let root = std::path::Path::new(sysfs::SYSFS_TTY_ROOT);
    Ok(label_ports(ports, |port| sysfs::interface_label(root, &port.device)))
}

#[cfg(all(feature = "native", target_os = "macos"))]
fn with_default_labels(ports: Vec<PortDescriptor>) -> Result<Vec<PortDescriptor>> {
    let names = registry::registry_labels(registry::LabelScope::Device)?;
    Ok(label_ports(ports, |port| {
        names
            .get(&port.device)
            .cloned()
    }))
}

#[cfg(all(
    feature = "native",
    not(any(target_os = "linux", target_os = "macos"))
))]
fn with_default_labels(ports: Vec<PortDescriptor>) -> Result<Vec<PortDescriptor>> {
    Ok(label_ports(ports, |port| {
        port.product
            .clone()
    }))
}
