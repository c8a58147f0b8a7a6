//! Host integration traits.
//!
//! The decoder never talks to a disassembler directly. A host provides memory
//! reads and a text sink through these traits; hook registration and the
//! host's own decoding stay on the host side.

use crate::isa::disasm::Mnemonic;

/// Read access to the program being disassembled.
pub trait MemoryReader {
    /// Reads the little-endian 32-bit word at `address`.
    fn read_word(&self, address: u64) -> u32;
}

/// Text output for one listing line.
pub trait OutputContext {
    /// Emits the mnemonic column; `mnemonic.width` is the column width.
    fn out_mnemonic(&mut self, mnemonic: &Mnemonic);

    /// Emits one register operand.
    fn out_register(&mut self, text: &str);
}

/// Any slice of bytes can be read as little-endian words, offset from zero.
///
/// Reads past the end yield `0`, which never decodes as a COP2 instruction.
impl MemoryReader for [u8] {
    fn read_word(&self, address: u64) -> u32 {
        usize::try_from(address)
            .ok()
            .and_then(|start| self.get(start..start.checked_add(4)?))
            .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
            .map_or(0, u32::from_le_bytes)
    }
}
