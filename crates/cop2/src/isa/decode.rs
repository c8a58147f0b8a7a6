//! COP2 Field Decoder.
//!
//! Each macro-mode instruction uses one of 23 encoding layouts. A layout
//! decides which of the common fields (ft, fs, fd, field selectors, the 5-bit
//! immediate) become operands, in which order, and with which register class.
//! Synthetic operands (accumulator, I, Q, R) are inserted by the layout rather
//! than read from the word.
//!
//! Dispatch goes through [`Layout::decoder`], which indexes a fixed table of
//! function references; each extractor is a pure `u32 -> Operands` function.

use crate::isa::instruction::{InstructionBits, Operands};
use crate::isa::operand::{ControlRegister, Operand, RegisterClass};

use RegisterClass::{
    Control as CTL, VectorFloat as VF, VectorFloatWithField as VFF, VectorInteger as VI,
};

/// Signature shared by all layout field extractors.
pub type FieldDecoder = fn(u32) -> Operands;

/// Number of encoding layouts.
pub const LAYOUT_COUNT: usize = 23;

const ACC: Operand = Operand::control(ControlRegister::Accumulator);
const I: Operand = Operand::control(ControlRegister::BroadcastI);
const Q: Operand = Operand::control(ControlRegister::BroadcastQ);
const R: Operand = Operand::control(ControlRegister::Random);
const NONE: Operand = Operand::None;

/// Encoding layout of a macro-mode instruction.
///
/// The discriminant is the layout id used in the opcode catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Layout {
    /// No operands (`vnop`, `vwaitq`).
    Void = 0,
    /// `ft, fs` vector-float pair.
    FtFs = 1,
    /// `fd, fs, ft` vector-float triple.
    FdFsFt = 2,
    /// `fd, fs, $I`.
    FdFsI = 3,
    /// `fd, fs, $Q`.
    FdFsQ = 4,
    /// `$ACC, fs, ft`.
    AccFsFt = 5,
    /// `$ACC, fs, $I`.
    AccFsI = 6,
    /// `$ACC, fs, $Q`.
    AccFsQ = 7,
    /// `$ACC, fs, ft` with the broadcast lane encoded in the opcode.
    AccFsFtBroadcast = 8,
    /// `$ACC, fs, ft` outer-product accumulate.
    AccFsFtOuter = 9,
    /// `fd, fs, ft` outer-product.
    FdFsFtOuter = 10,
    /// `fs, ft` vector-float pair.
    FsFt = 11,
    /// `$Q, fs.fsf, ft.ftf` divider.
    QFsfFtf = 12,
    /// `$Q, ft.ftf` square root.
    QFtf = 13,
    /// `id, is, it` vector-integer triple.
    IntTriple = 14,
    /// `it, is, imm5`.
    IntImmediate = 15,
    /// `ft, fs` vector-float move.
    Move = 16,
    /// `ft` vector-float, `is` vector-integer.
    FtIs = 17,
    /// `it` vector-integer, `fs.fsf` field register.
    ItFsf = 18,
    /// `fs` vector-float, `it` vector-integer.
    FsIt = 19,
    /// `it, is` vector-integer pair.
    IntPair = 20,
    /// `$R, fs.fsf`.
    RFsf = 21,
    /// `ft, $R`.
    FtR = 22,
}

/// Every layout, indexed by its id.
const LAYOUTS: [Layout; LAYOUT_COUNT] = [
    Layout::Void,
    Layout::FtFs,
    Layout::FdFsFt,
    Layout::FdFsI,
    Layout::FdFsQ,
    Layout::AccFsFt,
    Layout::AccFsI,
    Layout::AccFsQ,
    Layout::AccFsFtBroadcast,
    Layout::AccFsFtOuter,
    Layout::FdFsFtOuter,
    Layout::FsFt,
    Layout::QFsfFtf,
    Layout::QFtf,
    Layout::IntTriple,
    Layout::IntImmediate,
    Layout::Move,
    Layout::FtIs,
    Layout::ItFsf,
    Layout::FsIt,
    Layout::IntPair,
    Layout::RFsf,
    Layout::FtR,
];

/// Field extractors, indexed by layout id.
const DECODERS: [FieldDecoder; LAYOUT_COUNT] = [
    decode_void,
    decode_ft_fs,
    decode_fd_fs_ft,
    decode_fd_fs_i,
    decode_fd_fs_q,
    decode_acc_fs_ft,
    decode_acc_fs_i,
    decode_acc_fs_q,
    decode_acc_fs_ft,
    decode_acc_fs_ft,
    decode_fd_fs_ft,
    decode_fs_ft,
    decode_q_fsf_ftf,
    decode_q_ftf,
    decode_int_triple,
    decode_int_immediate,
    decode_ft_fs,
    decode_ft_is,
    decode_it_fsf,
    decode_fs_it,
    decode_int_pair,
    decode_r_fsf,
    decode_ft_r,
];

/// Register classes of each layout's operand slots, indexed by layout id.
const REGISTER_CLASSES: [&[RegisterClass]; LAYOUT_COUNT] = [
    &[],
    &[VF, VF],
    &[VF, VF, VF],
    &[VF, VF, CTL],
    &[VF, VF, CTL],
    &[CTL, VF, VF],
    &[CTL, VF, CTL],
    &[CTL, VF, CTL],
    &[CTL, VF, VF],
    &[CTL, VF, VF],
    &[VF, VF, VF],
    &[VF, VF],
    &[CTL, VFF, VFF],
    &[CTL, VFF],
    &[VI, VI, VI],
    // The third slot is an immediate and has no register class.
    &[VI, VI],
    &[VF, VF],
    &[VF, VI],
    &[VI, VFF],
    &[VF, VI],
    &[VI, VI],
    &[CTL, VFF],
    &[VF, CTL],
];

impl Layout {
    /// Looks a layout up by its catalog id.
    pub fn from_id(id: u8) -> Option<Self> {
        LAYOUTS.get(usize::from(id)).copied()
    }

    /// Catalog id of this layout.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Field extractor for this layout.
    pub const fn decoder(self) -> FieldDecoder {
        DECODERS[self as usize]
    }

    /// Register class of each register slot, destination first.
    ///
    /// Immediate slots are not listed.
    pub const fn register_classes(self) -> &'static [RegisterClass] {
        REGISTER_CLASSES[self as usize]
    }

    /// Applies this layout to `word`.
    #[inline]
    pub fn decode(self, word: u32) -> Operands {
        (self.decoder())(word)
    }
}

const fn decode_void(_word: u32) -> Operands {
    [NONE; 3]
}

fn decode_ft_fs(word: u32) -> Operands {
    [Operand::vf(word.ft()), Operand::vf(word.fs()), NONE]
}

fn decode_fs_ft(word: u32) -> Operands {
    [Operand::vf(word.fs()), Operand::vf(word.ft()), NONE]
}

fn decode_fd_fs_ft(word: u32) -> Operands {
    [
        Operand::vf(word.fd()),
        Operand::vf(word.fs()),
        Operand::vf(word.ft()),
    ]
}

fn decode_fd_fs_i(word: u32) -> Operands {
    [Operand::vf(word.fd()), Operand::vf(word.fs()), I]
}

fn decode_fd_fs_q(word: u32) -> Operands {
    [Operand::vf(word.fd()), Operand::vf(word.fs()), Q]
}

fn decode_acc_fs_ft(word: u32) -> Operands {
    [ACC, Operand::vf(word.fs()), Operand::vf(word.ft())]
}

fn decode_acc_fs_i(word: u32) -> Operands {
    [ACC, Operand::vf(word.fs()), I]
}

fn decode_acc_fs_q(word: u32) -> Operands {
    [ACC, Operand::vf(word.fs()), Q]
}

fn decode_q_fsf_ftf(word: u32) -> Operands {
    [
        Q,
        Operand::vf_field(word.fs(), word.fsf()),
        Operand::vf_field(word.ft(), word.ftf()),
    ]
}

fn decode_q_ftf(word: u32) -> Operands {
    [Q, Operand::vf_field(word.ft(), word.ftf()), NONE]
}

fn decode_int_triple(word: u32) -> Operands {
    [
        Operand::vi(word.fd()),
        Operand::vi(word.fs()),
        Operand::vi(word.ft()),
    ]
}

fn decode_int_immediate(word: u32) -> Operands {
    [
        Operand::vi(word.ft()),
        Operand::vi(word.fs()),
        Operand::Immediate(word.fd()),
    ]
}

fn decode_ft_is(word: u32) -> Operands {
    [Operand::vf(word.ft()), Operand::vi(word.fs()), NONE]
}

fn decode_it_fsf(word: u32) -> Operands {
    [
        Operand::vi(word.ft()),
        Operand::vf_field(word.fs(), word.fsf()),
        NONE,
    ]
}

fn decode_fs_it(word: u32) -> Operands {
    [Operand::vf(word.fs()), Operand::vi(word.ft()), NONE]
}

fn decode_int_pair(word: u32) -> Operands {
    [Operand::vi(word.ft()), Operand::vi(word.fs()), NONE]
}

fn decode_r_fsf(word: u32) -> Operands {
    [R, Operand::vf_field(word.fs(), word.fsf()), NONE]
}

fn decode_ft_r(word: u32) -> Operands {
    [Operand::vf(word.ft()), R, NONE]
}
