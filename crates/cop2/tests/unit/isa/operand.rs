//! Register Classifier Tests.

use cop2_core::isa::operand::{
    ControlRegister, FieldRegister, Lane, Operand, Register, RegisterClass,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn field_selector_packs_into_bits_8_and_9() {
    let field = FieldRegister::new(9, 0b10);
    assert_eq!(field.pack(), 0x209);
    assert_eq!(field.lane, Lane::Z);
}

#[test]
fn packed_field_register_renders_lane_letter() {
    let reg = Register::from_class(RegisterClass::VectorFloatWithField, 0x209).unwrap();
    assert_eq!(reg, Register::VectorFloatField(FieldRegister { index: 9, lane: Lane::Z }));
    assert_eq!(reg.to_string(), "$vf9.z");
    assert_eq!(reg.raw(), 0x209);
}

#[rstest]
#[case(0, 'x')]
#[case(1, 'y')]
#[case(2, 'z')]
#[case(3, 'w')]
fn lane_letters(#[case] selector: u8, #[case] letter: char) {
    let lane = Lane::from_selector(selector);
    assert_eq!(lane.letter(), letter);
    assert_eq!(lane.selector(), selector);
}

#[test]
fn unpack_inverts_pack() {
    for index in 0..32u8 {
        for selector in 0..4u8 {
            let field = FieldRegister::new(index, selector);
            assert_eq!(FieldRegister::unpack(field.pack()), field);
        }
    }
}

#[rstest]
#[case(Register::VectorFloat(0), "$vf0")]
#[case(Register::VectorFloat(31), "$vf31")]
#[case(Register::VectorInteger(12), "$vi12")]
#[case(Register::VectorFloatField(FieldRegister::new(4, 3)), "$vf4.w")]
#[case(Register::Control(ControlRegister::Accumulator), "$A")]
#[case(Register::Control(ControlRegister::BroadcastI), "$I")]
#[case(Register::Control(ControlRegister::BroadcastQ), "$Q")]
#[case(Register::Control(ControlRegister::Random), "$R")]
fn register_rendering(#[case] reg: Register, #[case] text: &str) {
    assert_eq!(reg.to_string(), text);
}

#[test]
fn control_registers_are_ascii_codes() {
    for (ctl, code) in [
        (ControlRegister::Accumulator, b'A'),
        (ControlRegister::BroadcastI, b'I'),
        (ControlRegister::BroadcastQ, b'Q'),
        (ControlRegister::Random, b'R'),
    ] {
        assert_eq!(ctl.ascii(), code);
        assert_eq!(ControlRegister::from_ascii(code), Some(ctl));
        let reg = Register::Control(ctl);
        assert_eq!(reg.raw(), u16::from(code));
        assert_eq!(Register::from_class(RegisterClass::Control, reg.raw()), Some(reg));
    }
    assert_eq!(Register::from_class(RegisterClass::Control, u16::from(b'X')), None);
}

#[test]
fn classes_round_trip_through_raw() {
    let regs = [
        Register::VectorFloat(17),
        Register::VectorInteger(3),
        Register::VectorFloatField(FieldRegister::new(30, 1)),
    ];
    for reg in regs {
        assert_eq!(Register::from_class(reg.class(), reg.raw()), Some(reg));
    }
}

#[test]
fn operand_display() {
    assert_eq!(Operand::vf(7).to_string(), "$vf7");
    assert_eq!(Operand::vi(0).to_string(), "$vi0");
    assert_eq!(Operand::Immediate(31).to_string(), "31");
    assert_eq!(Operand::None.to_string(), "");
    assert!(Operand::default().is_none());
}
