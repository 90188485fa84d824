//! Host-side queries for CircuitPython board ports.
//!
//! Every call enumerates the OS device list afresh; nothing is cached, since
//! boards can be attached or detached between calls.

use crate::{classify, compat, error::Result, port::PortDescriptor};

/// Enumerate with `enumerate` and keep what `filter` selects.
pub(crate) fn query<E, F>(enumerate: E, filter: F) -> Result<Vec<PortDescriptor>>
where
    E: FnOnce() -> Result<Vec<PortDescriptor>>,
    F: FnOnce(Vec<PortDescriptor>) -> Vec<PortDescriptor>,
{
    Ok(filter(enumerate()?))
}

/// All ports belonging to CircuitPython boards, in enumeration order.
pub fn circuitpython_ports() -> Result<Vec<PortDescriptor>> {
    query(compat::comports, classify::circuitpython_only)
}

/// CircuitPython ports presenting the REPL.
pub fn repl_ports() -> Result<Vec<PortDescriptor>> {
    query(compat::comports, classify::repl_only)
}

/// CircuitPython ports used for data transfer, not the REPL.
pub fn data_ports() -> Result<Vec<PortDescriptor>> {
    query(compat::comports, classify::data_only)
}
