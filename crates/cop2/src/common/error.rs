//! Error and decline definitions.
//!
//! This module defines the failure modes of the decoder. It provides:
//! 1. **Integrity Errors:** Defects in the opcode catalog, fatal at construction time.
//! 2. **Configuration Errors:** Malformed or out-of-range decoder settings.
//! 3. **Decline Reasons:** Why a single word was not decoded (expected, never fatal).
//! 4. **Construction Errors:** Either of the first two, as reported by `Cop2Decoder::new`.

use thiserror::Error;

/// Defects detected while building the instruction table.
///
/// Any of these means the catalog is inconsistent and the decoder must not
/// be used; they are reported once from `Cop2Decoder::new` and never while
/// decoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two catalog entries share the same opcode.
    #[error("duplicate opcode {opcode:#05x}: '{first}' and '{second}'")]
    DuplicateOpcode {
        /// The colliding opcode.
        opcode: u16,
        /// Mnemonic of the entry that sorted first.
        first: &'static str,
        /// Mnemonic of the entry that collided with it.
        second: &'static str,
    },

    /// A catalog entry references a layout id with no field decoder.
    #[error("'{mnemonic}' references layout {layout}, which has no field decoder")]
    UnknownLayout {
        /// Mnemonic of the offending entry.
        mnemonic: &'static str,
        /// The unsupported layout id.
        layout: u8,
    },

    /// A catalog entry's opcode does not fit the 11-bit opcode field.
    #[error("'{mnemonic}' has opcode {opcode:#x}, wider than 11 bits")]
    OpcodeOutOfRange {
        /// Mnemonic of the offending entry.
        mnemonic: &'static str,
        /// The out-of-range opcode.
        opcode: u16,
    },
}

/// Errors raised while loading a [`DecoderConfig`](crate::config::DecoderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a configuration.
    #[error("invalid decoder configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The mnemonic column width must be at least one character.
    #[error("mnemonic width must be non-zero")]
    InvalidWidth,
}

/// Errors that prevent a decoder from being constructed.
#[derive(Debug, Error)]
pub enum DecoderError {
    /// The built-in catalog is inconsistent.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The supplied configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Reason a word was declined by the resolver.
///
/// Both cases are normal outcomes: the host falls back to its own decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Miss {
    /// Bits 31-25 do not carry the COP2 macro-mode prefix.
    #[error("word {0:#010x} is not a COP2 macro-mode instruction")]
    ForeignWord(u32),

    /// The word is COP2-shaped but its opcode is not in the catalog.
    #[error("COP2 opcode {0:#05x} is not recognized")]
    UnknownOpcode(u16),
}
