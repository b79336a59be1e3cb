use crate::graph_projection::domain::PropertyValue;

/// Classifies raw property bytes into a typed value
///
/// A blob does not record property types, so the same heuristic as
/// `dtc -O dts` decompilation is applied:
/// - no bytes is a flag
/// - NUL-terminated, non-empty, printable strings are a string list
/// - a length that is a multiple of 4 is a list of big-endian cells
/// - anything else stays raw bytes
pub fn classify(bytes: &[u8]) -> PropertyValue {
    if bytes.is_empty() {
        return PropertyValue::Empty;
    }
    if let Some(strings) = string_list(bytes) {
        return PropertyValue::Strings(strings);
    }
    if bytes.len() % 4 == 0 {
        return PropertyValue::Cells(
            bytes
                .chunks_exact(4)
                .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
                .collect(),
        );
    }
    PropertyValue::Bytes(bytes.to_vec())
}

fn string_list(bytes: &[u8]) -> Option<Vec<String>> {
    let body = bytes.strip_suffix(&[0u8])?;
    body.split(|byte| *byte == 0)
        .map(|segment| {
            let printable = !segment.is_empty()
                && segment
                    .iter()
                    .all(|byte| byte.is_ascii_graphic() || *byte == b' ' || *byte == b'\t');
            printable.then(|| String::from_utf8_lossy(segment).into_owned())
        })
        .collect()
}
