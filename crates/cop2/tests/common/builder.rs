//! Encoders that assemble raw COP2 words from their fields.

/// Bits 31-25 of every COP2 macro-mode word.
pub const PREFIX: u32 = 0x25 << 25;

/// Places ft, fs, fd and the destination mask, with no opcode.
pub fn fields(ft: u32, fs: u32, fd: u32, dest: u32) -> u32 {
    PREFIX | (dest & 0xF) << 21 | (ft & 0x1F) << 16 | (fs & 0x1F) << 11 | (fd & 0x1F) << 6
}

/// Encodes a complete COP2 instruction.
///
/// Wide opcodes occupy bits 10-0, so `fd` is dropped for them.
pub fn encode(opcode: u16, ft: u32, fs: u32, fd: u32, dest: u32) -> u32 {
    let opcode = u32::from(opcode);
    if opcode & 0x3C == 0x3C {
        fields(ft, fs, 0, dest) | (opcode & 0x7FF)
    } else {
        fields(ft, fs, fd, dest) | (opcode & 0x3F)
    }
}

/// Encodes an instruction with all register fields zero and a full mask.
pub fn bare(opcode: u16) -> u32 {
    encode(opcode, 0, 0, 0, 0xF)
}
