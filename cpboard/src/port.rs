//! Port descriptor data model.
//!
//! A [`PortDescriptor`] is a snapshot of one serial device as the host
//! reported it at enumeration time. Descriptors are never cached: every
//! query in [`crate::host`] enumerates afresh, because boards can be
//! attached or detached between calls.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of the physical USB device behind a port: `(vid, pid, serial)`.
pub type UsbIdentity<'a> = (Option<u16>, Option<u16>, Option<&'a str>);

/// One serial device currently visible to the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PortDescriptor {
    /// Host identifier used to open the port (e.g. "/dev/ttyACM0" or "COM3").
    pub device: String,
    /// USB interface label, if the device advertises one.
    ///
    /// `None` and `Some("")` are distinct: the former means the host reported
    /// no label at all.
    pub interface: Option<String>,
    /// USB Vendor ID (if available).
    pub vid: Option<u16>,
    /// USB Product ID (if available).
    pub pid: Option<u16>,
    /// USB serial number string (if available).
    pub serial_number: Option<String>,
    /// Manufacturer string (if available).
    pub manufacturer: Option<String>,
    /// Product string (if available).
    pub product: Option<String>,
}

impl PortDescriptor {
    /// Create a descriptor with a device path and optional interface label.
    pub fn new(device: impl Into<String>, interface: Option<&str>) -> Self {
        Self {
            device: device.into(),
            interface: interface.map(str::to_owned),
            ..Default::default()
        }
    }

    /// Attach USB vendor/product IDs and serial number.
    #[must_use]
    pub fn with_usb(mut self, vid: u16, pid: u16, serial_number: Option<&str>) -> Self {
        self.vid = Some(vid);
        self.pid = Some(pid);
        self.serial_number = serial_number.map(str::to_owned);
        self
    }

    /// Attach manufacturer and product strings.
    #[must_use]
    pub fn with_strings(mut self, manufacturer: Option<&str>, product: Option<&str>) -> Self {
        self.manufacturer = manufacturer.map(str::to_owned);
        self.product = product.map(str::to_owned);
        self
    }

    /// Interface label as a string slice.
    pub fn interface(&self) -> Option<&str> {
        self.interface
            .as_deref()
    }

    /// Identity of the physical USB device this port belongs to.
    ///
    /// Ports without USB metadata all share `(None, None, None)`.
    pub fn usb_identity(&self) -> UsbIdentity<'_> {
        (self.vid, self.pid, self.serial_number.as_deref())
    }
}
