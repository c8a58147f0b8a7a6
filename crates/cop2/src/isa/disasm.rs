//! COP2 Mnemonic Formatter and Disassembler.
//!
//! Builds the mnemonic column of a listing: the lowercase mnemonic followed,
//! for instructions that write selected lanes, by a destination suffix built
//! from bits 24-21 (`x` = bit 3 .. `w` = bit 0).
//!
//! # Usage
//!
//! ```
//! use cop2_core::isa::disasm::disassemble;
//! use cop2_core::isa::table::InstructionTable;
//!
//! let table = InstructionTable::build().unwrap();
//! // vadd.xyzw $vf7, $vf3, $vf5
//! let text = disassemble(&table, 0x4BE5_19E8).unwrap();
//! assert_eq!(text, "vadd.xyzw     $vf7, $vf3, $vf5");
//! ```

use std::fmt;

use crate::common::MNEMONIC_WIDTH;
use crate::isa::decode::Layout;
use crate::isa::instruction::InstructionBits;
use crate::isa::resolve::resolve;
use crate::isa::table::{InstructionDescriptor, InstructionTable};

/// Lane letters in suffix order, most significant mask bit first.
const DEST_LANES: [(u8, char); 4] = [(0b1000, 'x'), (0b0100, 'y'), (0b0010, 'z'), (0b0001, 'w')];

/// A mnemonic ready for display in a fixed-width column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mnemonic {
    /// Lowercase mnemonic.
    pub name: String,
    /// Destination suffix (`.xyzw`, `.x`, bare `.`), or empty.
    pub suffix: String,
    /// Column width; padding only, never truncation.
    pub width: usize,
}

impl Mnemonic {
    /// Creates a mnemonic with no suffix.
    pub fn plain(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            suffix: String::new(),
            width,
        }
    }

    /// Mnemonic and suffix, unpadded.
    pub fn text(&self) -> String {
        format!("{}{}", self.name, self.suffix)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<width$}", self.text(), width = self.width)
    }
}

/// Renders a 4-bit destination mask as a suffix.
///
/// A mask with no lanes set renders as the bare `"."`.
pub fn dest_suffix(mask: u8) -> String {
    let mut suffix = String::with_capacity(5);
    suffix.push('.');
    for (bit, lane) in DEST_LANES {
        if mask & bit != 0 {
            suffix.push(lane);
        }
    }
    suffix
}

/// Formats the mnemonic of `descriptor` as encoded in `word`.
pub fn format_mnemonic(descriptor: &InstructionDescriptor, word: u32, width: usize) -> Mnemonic {
    let suffix = if descriptor.has_dest_field {
        dest_suffix(word.dest())
    } else {
        String::new()
    };
    Mnemonic {
        name: descriptor.mnemonic.clone(),
        suffix,
        width,
    }
}

/// Disassembles a COP2 word into a listing line.
///
/// Returns `None` for words outside the macro-mode space or with unknown
/// opcodes.
pub fn disassemble(table: &InstructionTable, word: u32) -> Option<String> {
    let index = resolve(table, word)?;
    let descriptor = table.get(index)?;
    let mnemonic = format_mnemonic(descriptor, word, MNEMONIC_WIDTH);
    if descriptor.layout == Layout::Void {
        return Some(mnemonic.text());
    }
    let operands = descriptor
        .layout
        .decode(word)
        .iter()
        .filter(|op| !op.is_none())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{mnemonic} {operands}"))
}
