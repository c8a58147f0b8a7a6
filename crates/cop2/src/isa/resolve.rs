//! COP2 Opcode Resolver.
//!
//! Decides whether a word belongs to the macro-mode instruction space and, if
//! so, which table entry it encodes:
//!
//! 1. Bits 31-25 must equal `0b0100101`.
//! 2. If bits 5-2 are all set the opcode is 11 bits wide, otherwise 6.
//! 3. The scan starts at the partition of the opcode's high nibble.
//!
//! Both ways of declining are ordinary outcomes reported as [`Miss`].

use crate::common::Miss;
use crate::isa::instruction::InstructionBits;
use crate::isa::table::InstructionTable;

/// Resolves `word` to a table index, or reports why it was declined.
///
/// # Errors
///
/// * [`Miss::ForeignWord`] - the word is not a COP2 macro-mode instruction.
/// * [`Miss::UnknownOpcode`] - the opcode is not in the table.
pub fn classify(table: &InstructionTable, word: u32) -> Result<usize, Miss> {
    if !word.is_cop2() {
        return Err(Miss::ForeignWord(word));
    }
    let opcode = word.cop2_opcode();
    table.find(opcode).ok_or(Miss::UnknownOpcode(opcode))
}

/// Resolves `word` to a table index.
pub fn resolve(table: &InstructionTable, word: u32) -> Option<usize> {
    classify(table, word).ok()
}
