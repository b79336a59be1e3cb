/// Device tree adapters: blob parsing and source compilation
mod dtc_compiler;
mod fdt_decoder;
mod property_decoder;

pub use dtc_compiler::{DtcCompiler, DEFAULT_DTC};
pub use fdt_decoder::FdtDecoder;
pub use property_decoder::classify;

use crate::graph_projection::domain::{DeviceTreeFormat, DeviceTreeNode, SourceLocation};
use crate::ports::outbound::DeviceTreeDecoder;
use crate::shared::Result;

/// DeviceTreeDecoder adapter handling both blobs and sources
///
/// Blobs go straight to the FDT parser; sources are compiled to a blob
/// with `dtc` first.
pub struct FdtDeviceTreeDecoder {
    compiler: DtcCompiler,
    blob_decoder: FdtDecoder,
}

impl FdtDeviceTreeDecoder {
    pub fn new(compiler: DtcCompiler) -> Self {
        Self {
            compiler,
            blob_decoder: FdtDecoder::new(),
        }
    }
}

impl Default for FdtDeviceTreeDecoder {
    fn default() -> Self {
        Self::new(DtcCompiler::default())
    }
}

impl DeviceTreeDecoder for FdtDeviceTreeDecoder {
    fn decode(
        &self,
        bytes: &[u8],
        format: DeviceTreeFormat,
        origin: &SourceLocation,
    ) -> Result<DeviceTreeNode> {
        let label = origin.to_string();
        match format {
            DeviceTreeFormat::Blob => self.blob_decoder.decode_blob(bytes, &label),
            DeviceTreeFormat::Source => {
                let blob = self.compiler.compile(bytes, origin)?;
                self.blob_decoder.decode_blob(&blob, &label)
            }
        }
    }
}
