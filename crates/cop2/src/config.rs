//! Configuration for the COP2 decoder.
//!
//! This module defines the knobs a host can set when constructing a decoder:
//! 1. **Defaults:** Baseline values matching the usual listing layout.
//! 2. **Structure:** A flat `DecoderConfig` deserialized from JSON.
//!
//! Use `DecoderConfig::default()` or `DecoderConfig::from_json` to build one.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the decoder.
mod defaults {
    /// Display column width for mnemonics (shared with generic instructions).
    pub const MNEMONIC_WIDTH: usize = crate::common::MNEMONIC_WIDTH;

    /// Generic host mnemonics are padded to the same column by default.
    pub const PAD_GENERIC_MNEMONICS: bool = true;

    /// Per-word decode tracing is off unless asked for.
    pub const TRACE_DECODES: bool = false;
}

/// Decoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DecoderConfig {
    /// Column width reserved for the mnemonic (including destination suffix).
    ///
    /// Shorter mnemonics are padded with spaces; longer ones are never truncated.
    #[serde(default = "DecoderConfig::default_mnemonic_width")]
    pub mnemonic_width: usize,

    /// Pad mnemonics of non-COP2 instructions to `mnemonic_width` as well.
    #[serde(default = "DecoderConfig::default_pad_generic_mnemonics")]
    pub pad_generic_mnemonics: bool,

    /// Emit a `trace` event for every decode attempt and its outcome.
    #[serde(default = "DecoderConfig::default_trace_decodes")]
    pub trace_decodes: bool,
}

impl DecoderConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidWidth`] for a zero mnemonic width.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] if `mnemonic_width` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.mnemonic_width == 0 {
            return Err(ConfigError::InvalidWidth);
        }
        Ok(())
    }

    const fn default_mnemonic_width() -> usize {
        defaults::MNEMONIC_WIDTH
    }

    const fn default_pad_generic_mnemonics() -> bool {
        defaults::PAD_GENERIC_MNEMONICS
    }

    const fn default_trace_decodes() -> bool {
        defaults::TRACE_DECODES
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            mnemonic_width: defaults::MNEMONIC_WIDTH,
            pad_generic_mnemonics: defaults::PAD_GENERIC_MNEMONICS,
            trace_decodes: defaults::TRACE_DECODES,
        }
    }
}
