//! PS2 Emotion Engine COP2 (VU0 macro mode) instruction decoder.
//!
//! This crate turns 32-bit COP2 words into structured instruction records for a
//! disassembly host:
//! 1. **Table:** A load-once catalog of the 118 macro-mode opcodes.
//! 2. **Resolution:** Extension check, opcode width selection and partitioned lookup.
//! 3. **Fields:** One pure extractor per encoding layout (23 layouts).
//! 4. **Operands:** Vector-float, vector-integer, field-selected and control registers.
//! 5. **Formatting:** Mnemonics with per-lane destination suffixes at a fixed width.
//!
//! The host is reached only through the traits in [`host`], so the decoder can
//! be driven from tests without one.

/// Common types shared by the decoder (errors and decline reasons).
pub mod common;
/// Decoder configuration (defaults and JSON deserialization).
pub mod config;
/// Decode orchestrator tying table, resolver, field decoder and formatter together.
pub mod decoder;
/// Host integration traits (memory reads and text output).
pub mod host;
/// Instruction set (catalog, layouts, operands, resolution, formatting).
pub mod isa;

/// Root configuration type; use `DecoderConfig::default()` or deserialize from JSON.
pub use crate::config::DecoderConfig;
/// Main entry point; build once with `Cop2Decoder::new` and share.
pub use crate::decoder::Cop2Decoder;
/// Per-call decode result.
pub use crate::isa::instruction::DecodedInstruction;
