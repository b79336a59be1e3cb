use super::SourceLocation;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::fmt;

/// Serialization of a device tree input, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTreeFormat {
    /// Flattened device tree blob (`.dtb`, `.dtbo`)
    Blob,
    /// Device tree source text (`.dts`, `.dtsi`)
    Source,
}

impl DeviceTreeFormat {
    /// Detects the format from the location's extension (case-insensitive)
    ///
    /// # Errors
    /// Returns `GraphError::UnsupportedFormat` when the extension is missing
    /// or not a device tree extension
    pub fn detect(location: &SourceLocation) -> Result<Self> {
        location
            .file_name()
            .and_then(|name| {
                let (_, extension) = name.rsplit_once('.')?;
                Self::from_extension(extension)
            })
            .ok_or_else(|| {
                GraphError::UnsupportedFormat {
                    location: location.to_string(),
                }
                .into()
            })
    }

    fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "dtb" | "dtbo" => Some(DeviceTreeFormat::Blob),
            "dts" | "dtsi" => Some(DeviceTreeFormat::Source),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceTreeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceTreeFormat::Blob => write!(f, "dtb"),
            DeviceTreeFormat::Source => write!(f, "dts"),
        }
    }
}
