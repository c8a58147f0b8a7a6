//! COP2 Macro-Mode Opcode Catalog.
//!
//! Defines every VU0 macro-mode instruction the decoder recognizes, together
//! with its encoding layout and whether it carries a destination lane mask.
//!
//! The catalog is turned into an [`InstructionTable`] once per decoding
//! session: entries are sorted by opcode, mnemonics are lowercased, and the
//! first index of each opcode high-nibble group (`0x100`..=`0x400`) is
//! recorded so lookups can skip the groups below.

use tracing::{debug, error};

use crate::common::TableError;
use crate::common::constants::{OPCODE_GROUP_MASK, WIDE_OPCODE_MASK};
use crate::isa::decode::Layout;

/// High-nibble groups that get a partition index, in order.
pub const PARTITION_GROUPS: [u16; 4] = [0x100, 0x200, 0x300, 0x400];

/// Raw catalog entry, as written in the source table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Opcode (6-bit, or 11-bit for the wide encodings).
    pub opcode: u16,
    /// Assembler mnemonic in conventional casing.
    pub mnemonic: &'static str,
    /// Layout id (see [`Layout`]).
    pub layout: u8,
    /// Whether a destination lane mask follows the mnemonic.
    pub dest: bool,
    /// Short description.
    pub description: &'static str,
}

impl CatalogEntry {
    /// Creates a catalog entry.
    pub const fn new(
        opcode: u16,
        mnemonic: &'static str,
        layout: u8,
        dest: bool,
        description: &'static str,
    ) -> Self {
        Self {
            opcode,
            mnemonic,
            layout,
            dest,
            description,
        }
    }
}

/// COP2 macro-mode instructions.
pub const CATALOG: &[CatalogEntry] = &[
    // Coprocessor calculation instructions
    CatalogEntry::new(0x1FD, "VABS", 1, true, "Absolute"),
    CatalogEntry::new(0x028, "VADD", 2, true, "Addition"),
    CatalogEntry::new(0x022, "VADDi", 3, true, "ADD broadcast I register"),
    CatalogEntry::new(0x020, "VADDq", 4, true, "ADD broadcast Q register"),
    CatalogEntry::new(0x000, "VADDx", 2, true, "ADD broadcast bc field"),
    CatalogEntry::new(0x001, "VADDy", 2, true, "ADD broadcast bc field"),
    CatalogEntry::new(0x002, "VADDz", 2, true, "ADD broadcast bc field"),
    CatalogEntry::new(0x003, "VADDw", 2, true, "ADD broadcast bc field"),
    CatalogEntry::new(0x2BC, "VADDA", 5, true, "ADD output to ACC"),
    CatalogEntry::new(0x23E, "VADDAi", 6, true, "ADD output to ACC broadcast I register"),
    CatalogEntry::new(0x23C, "VADDAq", 7, true, "ADD output to ACC broadcast Q register"),
    CatalogEntry::new(0x03C, "VADDAx", 8, true, "ADD output to ACC broadcast bc field"),
    CatalogEntry::new(0x03D, "VADDAy", 8, true, "ADD output to ACC broadcast bc field"),
    CatalogEntry::new(0x03E, "VADDAz", 8, true, "ADD output to ACC broadcast bc field"),
    CatalogEntry::new(0x03F, "VADDAw", 8, true, "ADD output to ACC broadcast bc field"),
    CatalogEntry::new(0x02C, "VSUB", 2, true, "Subtraction"),
    CatalogEntry::new(0x026, "VSUBi", 3, true, "SUB broadcast I register"),
    CatalogEntry::new(0x024, "VSUBq", 4, true, "SUB broadcast Q register"),
    CatalogEntry::new(0x004, "VSUBx", 2, true, "SUB broadcast bc field"),
    CatalogEntry::new(0x005, "VSUBy", 2, true, "SUB broadcast bc field"),
    CatalogEntry::new(0x006, "VSUBz", 2, true, "SUB broadcast bc field"),
    CatalogEntry::new(0x007, "VSUBw", 2, true, "SUB broadcast bc field"),
    CatalogEntry::new(0x2FC, "VSUBA", 5, true, "SUB output to ACC"),
    CatalogEntry::new(0x27E, "VSUBAi", 6, true, "SUB output to ACC broadcast I register"),
    CatalogEntry::new(0x27C, "VSUBAq", 7, true, "SUB output to ACC broadcast Q register"),
    CatalogEntry::new(0x07C, "VSUBAx", 8, true, "SUB output to ACC broadcast bc field"),
    CatalogEntry::new(0x07D, "VSUBAy", 8, true, "SUB output to ACC broadcast bc field"),
    CatalogEntry::new(0x07E, "VSUBAz", 8, true, "SUB output to ACC broadcast bc field"),
    CatalogEntry::new(0x07F, "VSUBAw", 8, true, "SUB output to ACC broadcast bc field"),
    CatalogEntry::new(0x02A, "VMUL", 2, true, "Multiply"),
    CatalogEntry::new(0x01E, "VMULi", 3, true, "MUL broadcast I register"),
    CatalogEntry::new(0x01C, "VMULq", 4, true, "MUL broadcast Q register"),
    CatalogEntry::new(0x018, "VMULx", 2, true, "MUL broadcast bc field"),
    CatalogEntry::new(0x019, "VMULy", 2, true, "MUL broadcast bc field"),
    CatalogEntry::new(0x01A, "VMULz", 2, true, "MUL broadcast bc field"),
    CatalogEntry::new(0x01B, "VMULw", 2, true, "MUL broadcast bc field"),
    CatalogEntry::new(0x2BE, "VMULA", 5, true, "MUL output to ACC"),
    CatalogEntry::new(0x1FE, "VMULAi", 6, true, "MUL output to ACC broadcast I register"),
    CatalogEntry::new(0x1FC, "VMULAq", 7, true, "MUL output to ACC broadcast Q register"),
    CatalogEntry::new(0x1BC, "VMULAx", 8, true, "MUL output to ACC broadcast bc field"),
    CatalogEntry::new(0x1BD, "VMULAy", 8, true, "MUL output to ACC broadcast bc field"),
    CatalogEntry::new(0x1BE, "VMULAz", 8, true, "MUL output to ACC broadcast bc field"),
    CatalogEntry::new(0x1BF, "VMULAw", 8, true, "MUL output to ACC broadcast bc field"),
    CatalogEntry::new(0x029, "VMADD", 2, true, "MUL and ADD"),
    CatalogEntry::new(0x023, "VMADDi", 3, true, "MUL and ADD broadcast I register"),
    CatalogEntry::new(0x021, "VMADDq", 4, true, "MUL and ADD broadcast Q register"),
    CatalogEntry::new(0x008, "VMADDx", 2, true, "MUL and ADD broadcast bc field"),
    CatalogEntry::new(0x009, "VMADDy", 2, true, "MUL and ADD broadcast bc field"),
    CatalogEntry::new(0x00A, "VMADDz", 2, true, "MUL and ADD broadcast bc field"),
    CatalogEntry::new(0x00B, "VMADDw", 2, true, "MUL and ADD broadcast bc field"),
    CatalogEntry::new(0x2BD, "VMADDA", 5, true, "MUL and ADD output to ACC"),
    CatalogEntry::new(0x23F, "VMADDAi", 6, true, "MUL and ADD output to ACC broadcast I register"),
    CatalogEntry::new(0x23D, "VMADDAq", 7, true, "MUL and ADD output to ACC broadcast Q register"),
    CatalogEntry::new(0x0BC, "VMADDAx", 8, true, "MUL and ADD output to ACC broadcast bc field"),
    CatalogEntry::new(0x0BD, "VMADDAy", 8, true, "MUL and ADD output to ACC broadcast bc field"),
    CatalogEntry::new(0x0BE, "VMADDAz", 8, true, "MUL and ADD output to ACC broadcast bc field"),
    CatalogEntry::new(0x0BF, "VMADDAw", 8, true, "MUL and ADD output to ACC broadcast bc field"),
    CatalogEntry::new(0x02D, "VMSUB", 2, true, "MUL and SUB"),
    CatalogEntry::new(0x027, "VMSUBi", 3, true, "MUL and SUB broadcast I register"),
    CatalogEntry::new(0x025, "VMSUBq", 4, true, "MUL and SUB broadcast Q register"),
    CatalogEntry::new(0x00C, "VMSUBx", 2, true, "MUL and SUB broadcast bc field"),
    CatalogEntry::new(0x00D, "VMSUBy", 2, true, "MUL and SUB broadcast bc field"),
    CatalogEntry::new(0x00E, "VMSUBz", 2, true, "MUL and SUB broadcast bc field"),
    CatalogEntry::new(0x00F, "VMSUBw", 2, true, "MUL and SUB broadcast bc field"),
    CatalogEntry::new(0x2FD, "VMSUBA", 5, true, "MUL and SUB output to ACC"),
    CatalogEntry::new(0x27F, "VMSUBAi", 6, true, "MUL and SUB output to ACC broadcast I register"),
    CatalogEntry::new(0x27D, "VMSUBAq", 7, true, "MUL and SUB output to ACC broadcast Q register"),
    CatalogEntry::new(0x0FC, "VMSUBAx", 8, true, "MUL and SUB output to ACC broadcast bc field"),
    CatalogEntry::new(0x0FD, "VMSUBAy", 8, true, "MUL and SUB output to ACC broadcast bc field"),
    CatalogEntry::new(0x0FE, "VMSUBAz", 8, true, "MUL and SUB output to ACC broadcast bc field"),
    CatalogEntry::new(0x0FF, "VMSUBAw", 8, true, "MUL and SUB output to ACC broadcast bc field"),
    CatalogEntry::new(0x02B, "VMAX", 2, true, "Maximum"),
    CatalogEntry::new(0x01D, "VMAXi", 3, true, "Maximum broadcast I register"),
    CatalogEntry::new(0x010, "VMAXx", 2, true, "Maximum broadcast bc field"),
    CatalogEntry::new(0x011, "VMAXy", 2, true, "Maximum broadcast bc field"),
    CatalogEntry::new(0x012, "VMAXz", 2, true, "Maximum broadcast bc field"),
    CatalogEntry::new(0x013, "VMAXw", 2, true, "Maximum broadcast bc field"),
    CatalogEntry::new(0x02F, "VMINI", 2, true, "Minimum"),
    CatalogEntry::new(0x01F, "VMINIi", 3, true, "Minimum broadcast I register"),
    CatalogEntry::new(0x014, "VMINIx", 2, true, "Minimum broadcast bc field"),
    CatalogEntry::new(0x015, "VMINIy", 2, true, "Minimum broadcast bc field"),
    CatalogEntry::new(0x016, "VMINIz", 2, true, "Minimum broadcast bc field"),
    CatalogEntry::new(0x017, "VMINIw", 2, true, "Minimum broadcast bc field"),
    CatalogEntry::new(0x2FE, "VOPMULA", 9, false, "Outer product MULA"),
    CatalogEntry::new(0x02E, "VOPMSUB", 10, false, "Outer product MSUB"),
    CatalogEntry::new(0x2FF, "VNOP", 0, false, "No operation"),
    // Format conversion
    CatalogEntry::new(0x17C, "VFTOI0", 1, true, "Float to integer, fixed point 0 bit"),
    CatalogEntry::new(0x17D, "VFTOI4", 1, true, "Float to integer, fixed point 4 bits"),
    CatalogEntry::new(0x17E, "VFTOI12", 1, true, "Float to integer, fixed point 12 bits"),
    CatalogEntry::new(0x17F, "VFTOI15", 1, true, "Float to integer, fixed point 15 bits"),
    CatalogEntry::new(0x13C, "VITOF0", 1, true, "Integer to float, fixed point 0 bit"),
    CatalogEntry::new(0x13D, "VITOF4", 1, true, "Integer to float, fixed point 4 bits"),
    CatalogEntry::new(0x13E, "VITOF12", 1, true, "Integer to float, fixed point 12 bits"),
    CatalogEntry::new(0x13F, "VITOF15", 1, true, "Integer to float, fixed point 15 bits"),
    // Clipping and division unit
    CatalogEntry::new(0x1FF, "VCLIP", 11, false, "Clipping"),
    CatalogEntry::new(0x3BC, "VDIV", 12, false, "Floating divide"),
    CatalogEntry::new(0x3BD, "VSQRT", 13, false, "Floating square-root"),
    CatalogEntry::new(0x3BE, "VRSQRT", 12, false, "Floating reciprocal square-root"),
    // Integer calculation
    CatalogEntry::new(0x030, "VIADD", 14, false, "Integer ADD"),
    CatalogEntry::new(0x032, "VIADDI", 15, false, "Integer ADD immediate"),
    CatalogEntry::new(0x034, "VIAND", 14, false, "Integer AND"),
    CatalogEntry::new(0x035, "VIOR", 14, false, "Integer OR"),
    CatalogEntry::new(0x031, "VISUB", 14, false, "Integer SUB"),
    // Register transfer and load/store
    CatalogEntry::new(0x33C, "VMOVE", 16, true, "Move floating register"),
    CatalogEntry::new(0x3FD, "VMFIR", 17, true, "Move from integer register"),
    CatalogEntry::new(0x3FC, "VMTIR", 18, false, "Move to integer register"),
    CatalogEntry::new(0x33D, "VMR32", 16, true, "Rotate right 32 bits"),
    CatalogEntry::new(0x37E, "VLQD", 17, true, "Load quadword with pre-decrement"),
    CatalogEntry::new(0x37C, "VLQI", 17, true, "Load quadword with post-increment"),
    CatalogEntry::new(0x37F, "VSQD", 19, true, "Store quadword with pre-decrement"),
    CatalogEntry::new(0x37D, "VSQI", 19, true, "Store quadword with post-increment"),
    CatalogEntry::new(0x3FE, "VILWR", 20, true, "Integer load word register"),
    CatalogEntry::new(0x3FF, "VISWR", 20, true, "Integer store word register"),
    // Random unit
    CatalogEntry::new(0x43E, "VRINIT", 21, false, "Random-unit init R register"),
    CatalogEntry::new(0x43D, "VRGET", 22, true, "Random-unit get R register"),
    CatalogEntry::new(0x43C, "VRNEXT", 22, true, "Random-unit next M sequence"),
    CatalogEntry::new(0x43F, "VRXOR", 21, false, "Random-unit XOR R register"),
    // Synchronization
    CatalogEntry::new(0x3BF, "VWAITQ", 0, false, "Wait Q register"),
];

/// A resolved catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionDescriptor {
    /// Opcode, unique within the table.
    pub opcode: u16,
    /// Lowercase mnemonic.
    pub mnemonic: String,
    /// Encoding layout.
    pub layout: Layout,
    /// Whether a destination lane mask follows the mnemonic.
    pub has_dest_field: bool,
    /// Short description, used only as a comment.
    pub description: &'static str,
}

/// The sorted instruction table and its partition indices.
#[derive(Clone, Debug)]
pub struct InstructionTable {
    entries: Vec<InstructionDescriptor>,
    partitions: [usize; PARTITION_GROUPS.len()],
}

impl InstructionTable {
    /// Builds the table from the built-in [`CATALOG`].
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the catalog is inconsistent.
    pub fn build() -> Result<Self, TableError> {
        Self::from_entries(CATALOG)
    }

    /// Builds a table from an arbitrary catalog.
    ///
    /// # Errors
    ///
    /// * [`TableError::OpcodeOutOfRange`] - an opcode does not fit in 11 bits.
    /// * [`TableError::UnknownLayout`] - a layout id has no field decoder.
    /// * [`TableError::DuplicateOpcode`] - two entries share an opcode.
    pub fn from_entries(catalog: &[CatalogEntry]) -> Result<Self, TableError> {
        let mut sorted: Vec<&CatalogEntry> = catalog.iter().collect();
        sorted.sort_by_key(|entry| entry.opcode);

        let mut entries = Vec::with_capacity(sorted.len());
        let mut previous: Option<&CatalogEntry> = None;
        for entry in sorted {
            if u32::from(entry.opcode) > WIDE_OPCODE_MASK {
                error!(mnemonic = entry.mnemonic, opcode = entry.opcode, "opcode out of range");
                return Err(TableError::OpcodeOutOfRange {
                    mnemonic: entry.mnemonic,
                    opcode: entry.opcode,
                });
            }
            let Some(layout) = Layout::from_id(entry.layout) else {
                error!(mnemonic = entry.mnemonic, layout = entry.layout, "unknown layout");
                return Err(TableError::UnknownLayout {
                    mnemonic: entry.mnemonic,
                    layout: entry.layout,
                });
            };
            if let Some(prev) = previous.filter(|prev| prev.opcode == entry.opcode) {
                error!(opcode = entry.opcode, "duplicate opcode");
                return Err(TableError::DuplicateOpcode {
                    opcode: entry.opcode,
                    first: prev.mnemonic,
                    second: entry.mnemonic,
                });
            }
            previous = Some(entry);

            entries.push(InstructionDescriptor {
                opcode: entry.opcode,
                mnemonic: entry.mnemonic.to_lowercase(),
                layout,
                has_dest_field: entry.dest,
                description: entry.description,
            });
        }

        // A group with no entries starts past the end, so its scans are empty.
        let partitions = PARTITION_GROUPS.map(|group| {
            entries
                .iter()
                .position(|entry| entry.opcode & OPCODE_GROUP_MASK == group)
                .unwrap_or(entries.len())
        });

        debug!(entries = entries.len(), ?partitions, "COP2 instruction table built");
        Ok(Self {
            entries,
            partitions,
        })
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&InstructionDescriptor> {
        self.entries.get(index)
    }

    /// All entries, sorted by opcode.
    pub fn entries(&self) -> &[InstructionDescriptor] {
        &self.entries
    }

    /// First index of each high-nibble group in [`PARTITION_GROUPS`].
    pub const fn partitions(&self) -> [usize; PARTITION_GROUPS.len()] {
        self.partitions
    }

    /// Index at which a scan for `opcode` starts.
    ///
    /// Opcodes whose high nibble has no partition start at 0.
    pub fn partition_start(&self, opcode: u16) -> usize {
        let group = opcode & OPCODE_GROUP_MASK;
        PARTITION_GROUPS
            .iter()
            .position(|&g| g == group)
            .map_or(0, |slot| self.partitions[slot])
    }

    /// Scans forward from `start` for an entry with exactly `opcode`.
    pub fn find_from(&self, start: usize, opcode: u16) -> Option<usize> {
        self.entries
            .get(start..)?
            .iter()
            .position(|entry| entry.opcode == opcode)
            .map(|offset| start + offset)
    }

    /// Looks `opcode` up, starting at its partition.
    pub fn find(&self, opcode: u16) -> Option<usize> {
        self.find_from(self.partition_start(opcode), opcode)
    }
}
