//! macOS interface labels from the IOKit registry.
//!
//! The serial client of a CDC interface sits below the `IOUSBHostInterface`
//! (or, on older systems, `IOUSBInterface`) node it belongs to, and that node
//! carries the interface's own `"USB Interface Name"`. Reading the label from
//! there keeps the two CDC interfaces of a composite board distinct; this is
//! the corrected strategy ([`list_ports`]).
//!
//! The default strategy reads the same registry rooted at the USB device
//! node and labels every serial client with the first interface name found
//! under that device. For a board with a single CDC interface that is the
//! right label; for a composite board every client gets the same one, which
//! [`crate::compat`] detects.
//!
//! The registry is read through `ioreg`'s text dump:
//!
//! ```text
//! +-o CircuitPython CDC2 data@3  <class IOUSBHostInterface, id 0x1000..., registered>
//!   | {
//!   |   "USB Interface Name" = "CircuitPython CDC2 data"
//!   | }
//!   |
//!   +-o AppleUSBACMData  <class AppleUSBACMData, id 0x1000...>
//!     +-o IOModemSerialStreamSync  <class IOModemSerialStreamSync, ...>
//!       +-o IOSerialBSDClient  <class IOSerialBSDClient, ...>
//!           {
//!             "IOCalloutDevice" = "/dev/cu.usbmodem1103"
//!             "IODialinDevice" = "/dev/tty.usbmodem1103"
//!           }
//! ```
//!
//! The parser is platform-independent; only the `ioreg` calls are
//! macOS-specific.

use std::collections::HashMap;

/// Registry classes that represent a single USB interface.
const INTERFACE_CLASSES: &[&str] = &["IOUSBHostInterface", "IOUSBInterface"];

/// Registry classes that represent a whole USB device.
const DEVICE_CLASSES: &[&str] = &["IOUSBHostDevice", "IOUSBDevice"];

/// Property holding the interface's label.
const INTERFACE_NAME_KEY: &str = "USB Interface Name";

/// Properties naming the BSD device files of a serial client.
const DEVICE_PATH_KEYS: &[&str] = &["IOCalloutDevice", "IODialinDevice"];

/// Registry node a serial client takes its interface label from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelScope {
    /// The USB interface node the client hangs under.
    Interface,
    /// The first labelled interface of the USB device the client belongs to.
    Device,
}

impl LabelScope {
    /// Registry classes whose nodes open a labelling scope.
    pub fn root_classes(self) -> &'static [&'static str] {
        match self {
            Self::Interface => INTERFACE_CLASSES,
            Self::Device => DEVICE_CLASSES,
        }
    }
}

/// A scope node opened at a given tree column.
struct Scope {
    column: usize,
    label: Option<String>,
}

/// Map every serial device path in an `ioreg -l` dump to the label of the
/// USB interface node it hangs under.
///
/// Device paths outside any interface node, or under an interface without a
/// label, are left out.
pub fn interface_names(dump: &str) -> HashMap<String, String> {
    labels(dump, LabelScope::Interface)
}

/// Map every serial device path in an `ioreg -l` dump to the first interface
/// label found under its USB device node.
pub fn device_interface_names(dump: &str) -> HashMap<String, String> {
    labels(dump, LabelScope::Device)
}

/// Map serial device paths to labels, scoping labels by `scope`.
pub fn labels(dump: &str, scope: LabelScope) -> HashMap<String, String> {
    let roots = scope.root_classes();
    let mut names = HashMap::new();
    let mut scopes: Vec<Scope> = Vec::new();
    // Whether the most recent node header opened a scope; its properties
    // follow directly.
    let mut in_root_props = false;

    for line in dump.lines() {
        if let Some(column) = header_column(line) {
            while scopes
                .last()
                .is_some_and(|open| open.column >= column)
            {
                scopes.pop();
            }

            in_root_props = node_class(&line[column..]).is_some_and(|class| roots.contains(&class));
            if in_root_props {
                scopes.push(Scope {
                    column,
                    label: None,
                });
            }
            continue;
        }

        let Some((key, value)) = parse_property(line) else {
            continue;
        };

        if key == INTERFACE_NAME_KEY {
            let Some(current) = scopes.last_mut() else {
                continue;
            };
            match scope {
                LabelScope::Interface if in_root_props => {
                    current.label = Some(value.to_string());
                },
                LabelScope::Device if current.label.is_none() => {
                    current.label = Some(value.to_string());
                },
                _ => {},
            }
        } else if DEVICE_PATH_KEYS.contains(&key) {
            if let Some(label) = scopes
                .last()
                .and_then(|open| {
                    open.label
                        .as_ref()
                })
            {
                names.insert(value.to_string(), label.clone());
            }
        }
    }

    names
}

/// Column of the `+-o ` marker when the line is a node header.
///
/// Only tree drawing (spaces and `|`) may precede the marker, so property
/// values that happen to contain `+-o ` are not mistaken for nodes.
fn header_column(line: &str) -> Option<usize> {
    let column = line.find("+-o ")?;
    line[..column]
        .chars()
        .all(|c| c == ' ' || c == '|')
        .then_some(column)
}

/// Class name from a node header such as `+-o Name  <class IOUSBHostInterface, id ...>`.
fn node_class(header: &str) -> Option<&str> {
    let rest = &header[header.rfind("<class ")? + "<class ".len()..];
    rest.split([',', '>'])
        .next()
        .map(str::trim)
}

/// Parse a `"Key" = "Value"` property line. Non-string values are skipped.
fn parse_property(line: &str) -> Option<(&str, &str)> {
    let body = line
        .trim_start_matches([' ', '|'])
        .trim_end();
    let (key, value) = body.split_once(" = ")?;

    let key = key
        .strip_prefix('"')?
        .strip_suffix('"')?;
    let value = value
        .strip_prefix('"')?
        .strip_suffix('"')?;
    Some((key, value))
}

/// Read the registry and label serial device paths by `scope`.
///
/// Failing to run `ioreg` is fatal for the call.
#[cfg(all(target_os = "macos", feature = "native"))]
pub(crate) fn registry_labels(scope: LabelScope) -> crate::Result<HashMap<String, String>> {
    let mut names = HashMap::new();
    for class in scope.root_classes() {
        names.extend(labels(&ioreg_dump(class)?, scope));
    }
    log::debug!(
        "IOKit registry labels {} serial device(s) by {scope:?}",
        names.len()
    );
    Ok(names)
}

/// Enumerate serial ports with interface labels taken from the IOKit registry.
///
/// Port order and metadata come from `serialport`; only the interface label
/// is replaced. Failing to read the registry is fatal for the call.
#[cfg(all(target_os = "macos", feature = "native"))]
pub fn list_ports() -> crate::Result<Vec<crate::PortDescriptor>> {
    let names = registry_labels(LabelScope::Interface)?;

    let ports = serialport::available_ports()?
        .iter()
        .map(super::describe)
        .collect();
    Ok(super::label_ports(ports, |port| {
        names
            .get(&port.device)
            .cloned()
    }))
}

/// Run `ioreg` rooted at every node of `class`, with properties.
#[cfg(all(target_os = "macos", feature = "native"))]
fn ioreg_dump(class: &str) -> crate::Result<String> {
    use crate::Error;
    use std::process::Command;

    let output = Command::new("ioreg")
        .args(["-r", "-l", "-w0", "-c", class])
        .output()
        .map_err(|e| Error::Registry(format!("failed to run ioreg: {e}")))?;

    if !output
        .status
        .success()
    {
        return Err(Error::Registry(format!(
            "ioreg -c {class} exited with {}",
            output.status
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| Error::Registry(format!("ioreg produced invalid UTF-8: {e}")))
}
