//! Minimal flattened device tree encoder for building test blobs.

const FDT_MAGIC: u32 = 0xd00d_feed;
const FDT_BEGIN_NODE: u32 = 0x1;
const FDT_END_NODE: u32 = 0x2;
const FDT_PROP: u32 = 0x3;
const FDT_END: u32 = 0x9;

const HEADER_SIZE: usize = 40;
const RSVMAP_SIZE: usize = 16;

/// A node to encode; the root is the node with an empty name.
#[derive(Debug, Clone, Default)]
pub struct DtbNode {
    name: String,
    properties: Vec<(String, Vec<u8>)>,
    children: Vec<DtbNode>,
}

impl DtbNode {
    pub fn root() -> Self {
        Self::new("")
    }

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn prop(mut self, name: &str, value: &[u8]) -> Self {
        self.properties.push((name.to_string(), value.to_vec()));
        self
    }

    pub fn prop_str(self, name: &str, value: &str) -> Self {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        self.prop(name, &bytes)
    }

    pub fn prop_cells(self, name: &str, cells: &[u32]) -> Self {
        let bytes: Vec<u8> = cells.iter().flat_map(|cell| cell.to_be_bytes()).collect();
        self.prop(name, &bytes)
    }

    pub fn flag(self, name: &str) -> Self {
        self.prop(name, &[])
    }

    pub fn child(mut self, child: DtbNode) -> Self {
        self.children.push(child);
        self
    }

    /// Encodes this node as the root of a version 17 blob
    pub fn to_dtb(&self) -> Vec<u8> {
        let mut strings = StringTable::default();
        let mut structure = Vec::new();
        self.encode(&mut structure, &mut strings);
        push_u32(&mut structure, FDT_END);

        let off_dt_struct = HEADER_SIZE + RSVMAP_SIZE;
        let off_dt_strings = off_dt_struct + structure.len();
        let total_size = off_dt_strings + strings.bytes.len();

        let mut blob = Vec::with_capacity(total_size);
        for field in [
            FDT_MAGIC,
            total_size as u32,
            off_dt_struct as u32,
            off_dt_strings as u32,
            HEADER_SIZE as u32,
            17,
            16,
            0,
            strings.bytes.len() as u32,
            structure.len() as u32,
        ] {
            push_u32(&mut blob, field);
        }
        blob.extend_from_slice(&[0u8; RSVMAP_SIZE]);
        blob.extend_from_slice(&structure);
        blob.extend_from_slice(&strings.bytes);
        blob
    }

    fn encode(&self, out: &mut Vec<u8>, strings: &mut StringTable) {
        push_u32(out, FDT_BEGIN_NODE);
        out.extend_from_slice(self.name.as_bytes());
        out.push(0);
        pad(out);

        for (name, value) in &self.properties {
            push_u32(out, FDT_PROP);
            push_u32(out, value.len() as u32);
            push_u32(out, strings.offset_of(name));
            out.extend_from_slice(value);
            pad(out);
        }

        for child in &self.children {
            child.encode(out, strings);
        }

        push_u32(out, FDT_END_NODE);
    }
}

#[derive(Default)]
struct StringTable {
    bytes: Vec<u8>,
    offsets: Vec<(String, u32)>,
}

impl StringTable {
    fn offset_of(&mut self, name: &str) -> u32 {
        if let Some((_, offset)) = self.offsets.iter().find(|(known, _)| known == name) {
            return *offset;
        }
        let offset = self.bytes.len() as u32;
        self.bytes.extend_from_slice(name.as_bytes());
        self.bytes.push(0);
        self.offsets.push((name.to_string(), offset));
        offset
    }
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn pad(out: &mut Vec<u8>) {
    while out.len() % 4 != 0 {
        out.push(0);
    }
}

/// A small board: `/` with a model, a `cpus` node holding one Cortex-A53,
/// a PL011 serial port and a `chosen` node.
pub fn sample_board() -> DtbNode {
    DtbNode::root()
        .prop_str("model", "Test Board")
        .prop_str("compatible", "acme,test-board")
        .prop_cells("#address-cells", &[1])
        .prop_cells("#size-cells", &[1])
        .child(
            DtbNode::new("cpus")
                .prop_cells("#address-cells", &[1])
                .prop_cells("#size-cells", &[0])
                .child(
                    DtbNode::new("cpu@0")
                        .prop_str("device_type", "cpu")
                        .prop_str("compatible", "arm,cortex-a53")
                        .prop_cells("reg", &[0]),
                ),
        )
        .child(
            DtbNode::new("serial@7e201000")
                .prop("compatible", b"arm,pl011\0arm,primecell\0")
                .prop_cells("reg", &[0x7e20_1000, 0x200])
                .prop_str("status", "okay")
                .flag("u-boot,dm-pre-reloc"),
        )
        .child(DtbNode::new("chosen").prop_str("bootargs", "console=ttyAMA0"))
}
