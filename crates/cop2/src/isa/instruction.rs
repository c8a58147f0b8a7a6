//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the COP2 macro-mode fields and the structure
//! handed back to the host after a successful decode.
//!
//! Field positions:
//!
//! ```text
//!  31     25 24  21 20  16 15  11 10   6 5        0
//! | 0100101 | dest |  ft  |  fs  |  fd  |  opcode  |
//!             ftf fsf
//! ```

use crate::common::INSTRUCTION_SIZE;
use crate::common::constants::{
    COP2_PREFIX, NARROW_OPCODE_MASK, PREFIX_SHIFT, WIDE_OPCODE_MASK, WIDE_OPCODE_SELECT,
};
use crate::isa::operand::Operand;

/// Bit mask for 5-bit register fields (ft, fs, fd) and the immediate.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 4-bit destination mask.
pub const DEST_MASK: u32 = 0xF;
/// Bit mask for 2-bit field selectors.
pub const FIELD_MASK: u32 = 0x3;

/// Trait for extracting COP2 instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the extension prefix (bits 31-25).
    fn prefix(&self) -> u32;

    /// Returns whether the prefix identifies a COP2 macro-mode instruction.
    fn is_cop2(&self) -> bool;

    /// Extracts the opcode.
    ///
    /// When bits 5-2 are all set the opcode is the low 11 bits; otherwise it
    /// is the low 6 bits.
    fn cop2_opcode(&self) -> u16;

    /// Extracts the ft register field (bits 20-16).
    fn ft(&self) -> u8;

    /// Extracts the fs register field (bits 15-11).
    fn fs(&self) -> u8;

    /// Extracts the fd register field (bits 10-6).
    ///
    /// The same bits hold the 5-bit immediate of `viaddi`.
    fn fd(&self) -> u8;

    /// Extracts the destination lane mask (bits 24-21), x in bit 3, w in bit 0.
    fn dest(&self) -> u8;

    /// Extracts the fs field selector (bits 22-21).
    fn fsf(&self) -> u8;

    /// Extracts the ft field selector (bits 24-23).
    fn ftf(&self) -> u8;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn prefix(&self) -> u32 {
        self >> PREFIX_SHIFT
    }

    #[inline(always)]
    fn is_cop2(&self) -> bool {
        self.prefix() == COP2_PREFIX
    }

    #[inline(always)]
    fn cop2_opcode(&self) -> u16 {
        if self & WIDE_OPCODE_SELECT == WIDE_OPCODE_SELECT {
            (self & WIDE_OPCODE_MASK) as u16
        } else {
            (self & NARROW_OPCODE_MASK) as u16
        }
    }

    #[inline(always)]
    fn ft(&self) -> u8 {
        ((self >> 16) & REG_MASK) as u8
    }

    #[inline(always)]
    fn fs(&self) -> u8 {
        ((self >> 11) & REG_MASK) as u8
    }

    #[inline(always)]
    fn fd(&self) -> u8 {
        ((self >> 6) & REG_MASK) as u8
    }

    #[inline(always)]
    fn dest(&self) -> u8 {
        ((self >> 21) & DEST_MASK) as u8
    }

    #[inline(always)]
    fn fsf(&self) -> u8 {
        ((self >> 21) & FIELD_MASK) as u8
    }

    #[inline(always)]
    fn ftf(&self) -> u8 {
        ((self >> 23) & FIELD_MASK) as u8
    }
}

/// Operand slots of a decoded instruction, destination first.
pub type Operands = [Operand; 3];

/// A successfully decoded COP2 instruction.
///
/// Owned by the caller; carries no reference back into the decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Index of the matching entry in the instruction table.
    pub itype: usize,
    /// Raw 32-bit instruction encoding.
    pub word: u32,
    /// Operand slots; unused slots hold [`Operand::None`].
    pub operands: Operands,
    /// Number of bytes consumed (always 4).
    pub size: usize,
}

impl DecodedInstruction {
    /// Creates a decoded instruction record.
    pub const fn new(itype: usize, word: u32, operands: Operands) -> Self {
        Self {
            itype,
            word,
            operands,
            size: INSTRUCTION_SIZE,
        }
    }

    /// Returns the operand in `slot`, if the slot exists and is populated.
    pub fn operand(&self, slot: usize) -> Option<&Operand> {
        self.operands.get(slot).filter(|op| !op.is_none())
    }

    /// Iterates over the populated operand slots in order.
    pub fn operands(&self) -> impl Iterator<Item = &Operand> {
        self.operands.iter().take_while(|op| !op.is_none())
    }

    /// Number of populated operand slots.
    pub fn operand_count(&self) -> usize {
        self.operands().count()
    }
}
