//! Registry dumps shared by the enumeration tests.

/// A board with only the REPL CDC enabled, rooted at its USB device node.
pub(crate) const SINGLE_CDC_DEVICE: &str = r#"+-o Feather M4 Express@01100000  <class IOUSBHostDevice, id 0x100000a00, registered, matched, active, busy 0 (0 ms), retain 30>
  | {
  |   "USB Product Name" = "Feather M4 Express"
  |   "USB Serial Number" = "DE6185100F4A2F39"
  | }
  |
  +-o CircuitPython CDC control@0  <class IOUSBHostInterface, id 0x100000a01, registered, matched, active, busy 0 (0 ms), retain 7>
  | | {
  | |   "USB Interface Name" = "CircuitPython CDC control"
  | | }
  | |
  | +-o AppleUSBACMControl  <class AppleUSBACMControl, id 0x100000a05, registered, matched, active, busy 0 (0 ms), retain 6>
  |     {
  |     }
  |
  +-o CircuitPython CDC data@1  <class IOUSBHostInterface, id 0x100000a02, registered, matched, active, busy 0 (0 ms), retain 7>
  | | {
  | |   "USB Interface Name" = "CircuitPython CDC data"
  | | }
  | |
  | +-o AppleUSBACMData  <class AppleUSBACMData, id 0x100000a06, registered, matched, active, busy 0 (0 ms), retain 6>
  |   +-o IOModemSerialStreamSync  <class IOModemSerialStreamSync, id 0x100000a08, registered, matched, active, busy 0 (0 ms), retain 5>
  |     +-o IOSerialBSDClient  <class IOSerialBSDClient, id 0x100000a09, registered, matched, active, busy 0 (0 ms), retain 5>
  |         {
  |           "IOCalloutDevice" = "/dev/cu.usbmodem1101"
  |           "IODialinDevice" = "/dev/tty.usbmodem1101"
  |         }
  |
  +-o CircuitPython Mass Storage@2  <class IOUSBHostInterface, id 0x100000a03, registered, matched, active, busy 0 (0 ms), retain 7>
      {
        "USB Interface Name" = "CircuitPython Mass Storage"
      }
"#;

/// A board with both CDC interfaces enabled and no product name.
pub(crate) const COMPOSITE_DEVICE: &str = r#"+-o IOUSBHostDevice@01100000  <class IOUSBHostDevice, id 0x100000b00, registered, matched, active, busy 0 (0 ms), retain 34>
  | {
  |   "USB Serial Number" = "E6614103E7735B2F"
  | }
  |
  +-o CircuitPython CDC control@0  <class IOUSBHostInterface, id 0x100000b01, registered, matched, active, busy 0 (0 ms), retain 7>
  | | {
  | |   "USB Interface Name" = "CircuitPython CDC control"
  | | }
  | |
  | +-o AppleUSBACMControl  <class AppleUSBACMControl, id 0x100000b05, registered, matched, active, busy 0 (0 ms), retain 6>
  |
  +-o CircuitPython CDC data@1  <class IOUSBHostInterface, id 0x100000b02, registered, matched, active, busy 0 (0 ms), retain 7>
  | | {
  | |   "USB Interface Name" = "CircuitPython CDC data"
  | | }
  | |
  | +-o AppleUSBACMData  <class AppleUSBACMData, id 0x100000b06, registered, matched, active, busy 0 (0 ms), retain 6>
  |   +-o IOModemSerialStreamSync  <class IOModemSerialStreamSync, id 0x100000b08, registered, matched, active, busy 0 (0 ms), retain 5>
  |     +-o IOSerialBSDClient  <class IOSerialBSDClient, id 0x100000b09, registered, matched, active, busy 0 (0 ms), retain 5>
  |         {
  |           "IOCalloutDevice" = "/dev/cu.usbmodem1101"
  |         }
  |
  +-o CircuitPython CDC2 control@2  <class IOUSBHostInterface, id 0x100000b03, registered, matched, active, busy 0 (0 ms), retain 7>
  | | {
  | |   "USB Interface Name" = "CircuitPython CDC2 control"
  | | }
  | |
  | +-o AppleUSBACMControl  <class AppleUSBACMControl, id 0x100000b07, registered, matched, active, busy 0 (0 ms), retain 6>
  |
  +-o CircuitPython CDC2 data@3  <class IOUSBHostInterface, id 0x100000b04, registered, matched, active, busy 0 (0 ms), retain 7>
    | {
    |   "USB Interface Name" = "CircuitPython CDC2 data"
    | }
    |
    +-o AppleUSBACMData  <class AppleUSBACMData, id 0x100000b0a, registered, matched, active, busy 0 (0 ms), retain 6>
      +-o IOModemSerialStreamSync  <class IOModemSerialStreamSync, id 0x100000b0b, registered, matched, active, busy 0 (0 ms), retain 5>
        +-o IOSerialBSDClient  <class IOSerialBSDClient, id 0x100000b0c, registered, matched, active, busy 0 (0 ms), retain 5>
            {
              "IOCalloutDevice" = "/dev/cu.usbmodem1103"
            }
"#;
