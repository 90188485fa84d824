//! Port listing commands: `list`, `repl` and `data`.

use anyhow::{Context, Result, bail};
use console::style;
use cpboard::PortDescriptor;
use log::debug;

/// Which ports a listing command selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    /// Every enumerated port, CircuitPython or not.
    All,
    /// CircuitPython ports of any kind.
    CircuitPython,
    /// REPL ports only.
    Repl,
    /// Data ports only.
    Data,
}

impl Selection {
    /// Human-readable description used in headers and errors.
    fn describe(self) -> &'static str {
        match self {
            Self::All => "serial ports",
            Self::CircuitPython => "CircuitPython ports",
            Self::Repl => "CircuitPython REPL ports",
            Self::Data => "CircuitPython data ports",
        }
    }

    /// Run the matching library query.
    fn query(self) -> cpboard::Result<Vec<PortDescriptor>> {
        match self {
            Self::All => cpboard::comports(),
            Self::CircuitPython => cpboard::circuitpython_ports(),
            Self::Repl => cpboard::repl_ports(),
            Self::Data => cpboard::data_ports(),
        }
    }
}

/// How to print the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutputMode {
    /// Machine-readable JSON on stdout.
    pub json: bool,
    /// Only the first matching device path on stdout.
    pub first: bool,
}

/// List ports for the given selection.
pub(crate) fn cmd_ports(selection: Selection, mode: OutputMode) -> Result<()> {
    let ports = selection
        .query()
        .with_context(|| format!("Failed to enumerate {}", selection.describe()))?;
    debug!("{} matching port(s) for {selection:?}", ports.len());

    if mode.first {
        let Some(port) = ports.first() else {
            bail!("No {} found", selection.describe());
        };
        if mode.json {
            println!("{}", serde_json::to_string_pretty(&port_json(port)?)?);
        } else {
            println!("{}", port.device);
        }
        return Ok(());
    }

    if mode.json {
        let values = ports
            .iter()
            .map(port_json)
            .collect::<serde_json::Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    eprintln!(
        "{}",
        style(format!("Available {}:", selection.describe()))
            .bold()
            .underlined()
    );

    if ports.is_empty() {
        eprintln!("  {}", style("No matching ports found").dim());
    } else {
        for port in &ports {
            eprintln!("  {} {}", style("•").green(), format_port(port));
        }
    }

    Ok(())
}

/// JSON representation of a port, including its classification.
pub(crate) fn port_json(port: &PortDescriptor) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(port)?;
    value["kind"] = serde_json::to_value(cpboard::classify(port))?;
    Ok(value)
}

/// One-line human description of a port.
pub(crate) fn format_port(port: &PortDescriptor) -> String {
    let kind = cpboard::classify(port)
        .map(|kind| format!(" [{}]", style(kind).yellow()))
        .unwrap_or_default();

    let vid_pid = if let (Some(vid), Some(pid)) = (port.vid, port.pid) {
        format!(" ({vid:04X}:{pid:04X})")
    } else {
        String::new()
    };

    let interface = port
        .interface()
        .map(|label| format!(" - {}", style(label).dim()))
        .unwrap_or_default();

    format!("{}{kind}{vid_pid}{interface}", style(&port.device).cyan())
}
