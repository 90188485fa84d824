//! Linux sysfs interface labels.
//!
//! The kernel exposes the USB interface string of the interface a tty is
//! bound to as `/sys/class/tty/<name>/device/interface`. For usb-serial
//! drivers (`ttyUSB*`) the tty's `device` node is one level below the USB
//! interface, so the parent directory is checked as well.

use std::{fs, path::Path};

use log::trace;

/// Root of the tty class directory.
pub const SYSFS_TTY_ROOT: &str = "/sys/class/tty";

/// Read the USB interface label for `device` under the sysfs tty root.
///
/// Returns `None` when the port has no such attribute or it can't be read.
pub fn interface_label(root: &Path, device: &str) -> Option<String> {
    let name = Path::new(device).file_name()?;
    let device_dir = root
        .join(name)
        .join("device");

    [device_dir.join("interface"), device_dir.join("../interface")]
        .iter()
        .find_map(|path| match fs::read_to_string(path) {
            Ok(text) => Some(
                text.trim_end()
                    .to_string(),
            ),
            Err(e) => {
                trace!("No interface label at {}: {e}", path.display());
                None
            },
        })
}
