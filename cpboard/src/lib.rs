//! # cpboard
//!
//! A library for finding the serial ports of CircuitPython boards.
//!
//! CircuitPython boards expose two USB CDC interfaces: the first carries the
//! interactive REPL, the second a raw data channel. This crate enumerates the
//! host's serial ports and tells them apart by their USB interface label:
//!
//! - [`circuitpython_ports`]: every CircuitPython CDC port
//! - [`repl_ports`]: ports presenting the REPL
//! - [`data_ports`]: ports used for data transfer
//!
//! No port is ever opened; only OS-level enumeration is performed.
//!
//! ## Supported Platforms
//!
//! - **Linux**: interface labels are read from sysfs
//! - **macOS**: interface labels come from the IOKit registry, looked up per
//!   USB device; when two device paths of one composite board end up with the
//!   same label, the list is re-read per USB interface (see [`compat`])
//! - **Windows**: interface labels come from `serialport`
//!
//! ## Features
//!
//! - `native` (default): native serial port enumeration via `serialport`
//! - `serde`: Serialization support for data types
//!
//! ## Example
//!
//! ```rust,no_run
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     for port in cpboard::repl_ports()? {
//!         println!("REPL on {}", port.device);
//!     }
//!     for port in cpboard::data_ports()? {
//!         println!("Data on {}", port.device);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod compat;
pub mod enumerate;
pub mod error;
pub mod host;
pub mod port;

// Re-exports for convenience
pub use {
    classify::{CIRCUITPYTHON_PREFIX, DATA_PREFIX, PortKind, REPL_PREFIX, classify},
    compat::comports,
    enumerate::list_all_ports,
    error::{Error, Result},
    host::{circuitpython_ports, data_ports, repl_ports},
    port::PortDescriptor,
};
