//! CircuitPython port classification.
//!
//! CircuitPython labels its USB CDC interfaces "CircuitPython CDC ..." for
//! the console and "CircuitPython CDC2 ..." for the data channel. The three
//! prefixes below are matched exactly:
//!
//! | prefix                   | matches                           |
//! |--------------------------|-----------------------------------|
//! | `"CircuitPython CDC"`    | every CircuitPython CDC interface |
//! | `"CircuitPython CDC "`   | the REPL interface only           |
//! | `"CircuitPython CDC2"`   | the data interface only           |
//!
//! Any further CDC interface (e.g. `"CircuitPython CDC3"`) is a CircuitPython
//! port but neither REPL nor data.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::port::PortDescriptor;

/// Prefix shared by every CircuitPython CDC interface label.
pub const CIRCUITPYTHON_PREFIX: &str = "CircuitPython CDC";

/// Prefix of the first CDC interface, which carries the REPL.
pub const REPL_PREFIX: &str = "CircuitPython CDC ";

/// Prefix of the second CDC interface, used for data transfer.
pub const DATA_PREFIX: &str = "CircuitPython CDC2";

/// Role of a CircuitPython serial port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PortKind {
    /// Interactive console (first CDC interface).
    Repl,
    /// Data channel (second CDC interface).
    Data,
    /// Any other CircuitPython CDC interface.
    Other,
}

impl PortKind {
    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Repl => "repl",
            Self::Data => "data",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn label_starts_with(port: &PortDescriptor, prefix: &str) -> bool {
    port.interface()
        .is_some_and(|label| label.starts_with(prefix))
}

/// Whether the port belongs to a CircuitPython board.
pub fn is_circuitpython(port: &PortDescriptor) -> bool {
    label_starts_with(port, CIRCUITPYTHON_PREFIX)
}

/// Whether the port is a CircuitPython REPL.
pub fn is_repl(port: &PortDescriptor) -> bool {
    label_starts_with(port, REPL_PREFIX)
}

/// Whether the port is a CircuitPython data channel.
pub fn is_data(port: &PortDescriptor) -> bool {
    label_starts_with(port, DATA_PREFIX)
}

/// Classify a port. Returns `None` for non-CircuitPython ports.
pub fn classify(port: &PortDescriptor) -> Option<PortKind> {
    if is_repl(port) {
        Some(PortKind::Repl)
    } else if is_data(port) {
        Some(PortKind::Data)
    } else if is_circuitpython(port) {
        Some(PortKind::Other)
    } else {
        None
    }
}

/// Keep only CircuitPython ports, in order.
pub fn circuitpython_only(ports: Vec<PortDescriptor>) -> Vec<PortDescriptor> {
    ports
        .into_iter()
        .filter(is_circuitpython)
        .collect()
}

/// Keep only CircuitPython REPL ports, in order.
pub fn repl_only(ports: Vec<PortDescriptor>) -> Vec<PortDescriptor> {
    circuitpython_only(ports)
        .into_iter()
        .filter(is_repl)
        .collect()
}

/// Keep only CircuitPython data ports, in order.
pub fn data_only(ports: Vec<PortDescriptor>) -> Vec<PortDescriptor> {
    circuitpython_only(ports)
        .into_iter()
        .filter(is_data)
        .collect()
}
