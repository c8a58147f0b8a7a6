//! COP2 Instruction Set Definitions.
//!
//! Contains the macro-mode opcode catalog and everything needed to turn a raw
//! word into a rendered instruction.
//!
//! # Structure
//!
//! * `table`: The 118-entry opcode catalog and its partition indices.
//! * `resolve`: Extension check and opcode lookup.
//! * `decode`: Encoding layouts and their field extractors.
//! * `operand`: Register classes and operand rendering.
//! * `disasm`: Mnemonic and destination-mask formatting.
//! * `generic`: Register fix-ups for the host's generic COP2 transfer instructions.

/// Encoding layouts and per-layout field extraction.
pub mod decode;

/// Mnemonic formatter and text disassembler.
pub mod disasm;

/// Register fix-ups for generic COP2 transfer instructions.
pub mod generic;

/// Instruction field extraction and the decoded instruction record.
pub mod instruction;

/// Register classes and operand rendering.
pub mod operand;

/// Opcode resolution against the instruction table.
pub mod resolve;

/// Opcode catalog.
pub mod table;
