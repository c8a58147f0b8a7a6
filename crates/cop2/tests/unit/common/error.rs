//! Error Display Tests.

use cop2_core::common::{ConfigError, DecoderError, Miss, TableError};
use pretty_assertions::assert_eq;

#[test]
fn duplicate_opcode_message_names_both_entries() {
    let err = TableError::DuplicateOpcode {
        opcode: 0x028,
        first: "VADD",
        second: "VFOO",
    };
    assert_eq!(err.to_string(), "duplicate opcode 0x028: 'VADD' and 'VFOO'");
}

#[test]
fn unknown_layout_message() {
    let err = TableError::UnknownLayout {
        mnemonic: "VFOO",
        layout: 23,
    };
    assert_eq!(
        err.to_string(),
        "'VFOO' references layout 23, which has no field decoder"
    );
}

#[test]
fn opcode_out_of_range_message() {
    let err = TableError::OpcodeOutOfRange {
        mnemonic: "VFOO",
        opcode: 0x800,
    };
    assert_eq!(err.to_string(), "'VFOO' has opcode 0x800, wider than 11 bits");
}

#[test]
fn miss_messages() {
    assert_eq!(
        Miss::ForeignWord(0x0000_0000).to_string(),
        "word 0x00000000 is not a COP2 macro-mode instruction"
    );
    assert_eq!(
        Miss::UnknownOpcode(0x3B).to_string(),
        "COP2 opcode 0x03b is not recognized"
    );
}

#[test]
fn config_width_message() {
    assert_eq!(
        ConfigError::InvalidWidth.to_string(),
        "mnemonic width must be non-zero"
    );
}

#[test]
fn decoder_error_forwards_inner_message() {
    let err = DecoderError::from(TableError::UnknownLayout {
        mnemonic: "VFOO",
        layout: 30,
    });
    assert_eq!(
        err.to_string(),
        "'VFOO' references layout 30, which has no field decoder"
    );
    assert_eq!(
        DecoderError::from(ConfigError::InvalidWidth).to_string(),
        "mnemonic width must be non-zero"
    );
}

#[test]
fn errors_implement_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<TableError>();
    assert_error::<ConfigError>();
    assert_error::<DecoderError>();
    assert_error::<Miss>();
}
