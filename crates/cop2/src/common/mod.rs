//! Common types used throughout the COP2 decoder.
//!
//! This module provides the building blocks shared by the table, the resolver
//! and the orchestrator:
//! 1. **Constants:** Instruction size and bit patterns identifying the extension.
//! 2. **Error Handling:** Table, configuration and construction errors, plus decline reasons.

/// Encoding constants shared across the decoder.
pub mod constants;

/// Error types and decline reasons.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, MNEMONIC_WIDTH};
pub use error::{ConfigError, DecoderError, Miss, TableError};
