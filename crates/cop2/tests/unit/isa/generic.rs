//! Generic COP2 Transfer Fix-up Tests.

use cop2_core::isa::generic::{GenericInsn, UnknownGenericInsn};
use cop2_core::isa::operand::Register;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(GenericInsn::Cfc2, 1, Register::VectorInteger(4))]
#[case(GenericInsn::Ctc2, 1, Register::VectorInteger(4))]
#[case(GenericInsn::Qmfc2, 1, Register::VectorFloat(4))]
#[case(GenericInsn::Qmtc2, 1, Register::VectorFloat(4))]
#[case(GenericInsn::Lqc2, 0, Register::VectorFloat(4))]
#[case(GenericInsn::Sqc2, 0, Register::VectorFloat(4))]
fn cop2_slot_is_reclassified(
    #[case] insn: GenericInsn,
    #[case] slot: usize,
    #[case] expected: Register,
) {
    assert_eq!(insn.cop2_slot(), slot);
    assert_eq!(insn.fixup(slot, 4), Some(expected));
}

#[test]
fn other_slots_keep_host_rendering() {
    for insn in GenericInsn::ALL {
        for slot in 0..3 {
            if slot != insn.cop2_slot() {
                assert_eq!(insn.fixup(slot, 4), None, "{insn:?} slot {slot}");
            }
        }
    }
}

#[test]
fn rendered_text() {
    assert_eq!(GenericInsn::Cfc2.fixup(1, 16).unwrap().to_string(), "$vi16");
    assert_eq!(GenericInsn::Lqc2.fixup(0, 1).unwrap().to_string(), "$vf1");
}

#[test]
fn parse_host_mnemonics() {
    for insn in GenericInsn::ALL {
        assert_eq!(insn.mnemonic().parse::<GenericInsn>(), Ok(insn));
    }
    assert_eq!("QMFC2".parse::<GenericInsn>(), Ok(GenericInsn::Qmfc2));
    assert_eq!(
        "mfc2".parse::<GenericInsn>(),
        Err(UnknownGenericInsn("mfc2".to_string()))
    );
}
