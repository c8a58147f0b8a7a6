//! Encoding constants for the COP2 macro-mode instruction space.

/// Size in bytes of every COP2 instruction.
pub const INSTRUCTION_SIZE: usize = 4;

/// Default display column width for mnemonics.
pub const MNEMONIC_WIDTH: usize = 13;

/// Shift that isolates the extension prefix (bits 31-25).
pub const PREFIX_SHIFT: u32 = 25;

/// Value of bits 31-25 for COP2 macro-mode instructions (`0b0100101`).
///
/// This is the COP2 major opcode (`0b010010`) with the CO bit set.
pub const COP2_PREFIX: u32 = 0b0100101;

/// Sub-field (bits 5-2) pattern that selects the wide 11-bit opcode.
pub const WIDE_OPCODE_SELECT: u32 = 0x3C;

/// Mask for the narrow 6-bit opcode.
pub const NARROW_OPCODE_MASK: u32 = 0x3F;

/// Mask for the wide 11-bit opcode.
pub const WIDE_OPCODE_MASK: u32 = 0x7FF;

/// Mask selecting the high nibble of an 11-bit opcode.
pub const OPCODE_GROUP_MASK: u16 = 0xF00;
