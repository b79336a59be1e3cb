use serde::ser::{Serialize, Serializer};

/// PropertyValue value object holding a decoded device tree property
///
/// The variants mirror the value kinds a device tree decoder can tell
/// apart: flags, 32-bit cell arrays, string lists and opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Property without a value (e.g. `dma-coherent;`)
    Empty,
    /// Big-endian 32-bit cells (e.g. `reg = <0x10 0x100>;`)
    Cells(Vec<u32>),
    /// NUL-separated string list (e.g. `compatible = "a", "b";`)
    Strings(Vec<String>),
    /// Any other byte sequence
    Bytes(Vec<u8>),
}

impl PropertyValue {
    /// Convenience constructor for a single-string value
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Strings(vec![value.into()])
    }

    /// Convenience constructor for a single-cell value
    pub fn cell(value: u32) -> Self {
        PropertyValue::Cells(vec![value])
    }

    /// Text view of the value: the first string of a string list
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Strings(strings) => strings.first().map(String::as_str),
            _ => None,
        }
    }

    /// Numeric view of the value: the first cell of a cell array
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            PropertyValue::Cells(cells) => cells.first().map(|cell| u64::from(*cell)),
            _ => None,
        }
    }

    /// Short human-readable rendering used by text reports
    pub fn display(&self) -> String {
        match self {
            PropertyValue::Empty => "true".to_string(),
            PropertyValue::Cells(cells) => cells
                .iter()
                .map(|cell| format!("{:#x}", cell))
                .collect::<Vec<_>>()
                .join(" "),
            PropertyValue::Strings(strings) => strings.join(", "),
            PropertyValue::Bytes(bytes) => bytes
                .iter()
                .map(|byte| format!("{:02x}", byte))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Empty => serializer.serialize_bool(true),
            PropertyValue::Cells(cells) if cells.len() == 1 => serializer.serialize_u32(cells[0]),
            PropertyValue::Cells(cells) => cells.serialize(serializer),
            PropertyValue::Strings(strings) if strings.len() == 1 => {
                serializer.serialize_str(&strings[0])
            }
            PropertyValue::Strings(strings) => strings.serialize(serializer),
            PropertyValue::Bytes(bytes) => bytes.serialize(serializer),
        }
    }
}
