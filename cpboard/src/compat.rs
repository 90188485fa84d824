//! Platform compatibility shim.
//!
//! Some serial enumeration backends collapse the interfaces of a composite
//! USB device: a CircuitPython board exposing "CircuitPython CDC control" and
//! "CircuitPython CDC2 control" shows up as two device paths that both carry
//! one of those labels. The shim looks for concrete evidence of that
//! (one label, one physical device, two device paths) and only then swaps
//! the whole list for the corrected enumeration.

use std::collections::HashMap;

use log::debug;

use crate::{error::Result, port::PortDescriptor};

/// Check whether two different device paths of the same physical USB device
/// report an identical interface label.
///
/// The first device seen for each `(label, usb identity)` pair is recorded;
/// a later port with the same pair and another device path is a collision.
/// Ports without a label are ignored. Distinct boards (different serial
/// numbers) may legitimately share a label and never collide.
pub fn has_label_collision(ports: &[PortDescriptor]) -> bool {
    let mut first_device = HashMap::new();

    for port in ports {
        let Some(interface) = port.interface() else {
            continue;
        };

        let first = first_device
            .entry((interface, port.usb_identity()))
            .or_insert(port.device.as_str());
        if *first != port.device {
            debug!(
                "Interface label {interface:?} reported by both {first} and {}",
                port.device
            );
            return true;
        }
    }

    false
}

/// Run the `default` enumeration and fall back to `corrected` on a collision.
///
/// `default` is called exactly once. `corrected` is called at most once, and
/// only when the default list shows a label collision; its result replaces
/// the default list entirely and its errors propagate unchanged.
pub fn reconcile<D, C>(default: D, corrected: C) -> Result<Vec<PortDescriptor>>
where
    D: FnOnce() -> Result<Vec<PortDescriptor>>,
    C: FnOnce() -> Result<Vec<PortDescriptor>>,
{
    let ports = default()?;

    if has_label_collision(&ports) {
        debug!("Duplicate interface labels detected, using corrected enumeration");
        return corrected();
    }

    Ok(ports)
}

/// Enumerate all serial ports, correcting for the macOS composite-device
/// labeling defect when it is observed.
#[cfg(all(target_os = "macos", feature = "native"))]
pub fn comports() -> Result<Vec<PortDescriptor>> {
    reconcile(
        crate::enumerate::list_all_ports,
        crate::enumerate::registry::list_ports,
    )
}

/// Enumerate all serial ports.
#[cfg(not(all(target_os = "macos", feature = "native")))]
pub fn comports() -> Result<Vec<PortDescriptor>> {
    crate::enumerate::list_all_ports()
}
