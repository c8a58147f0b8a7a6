//! Register fix-ups for generic COP2 transfer instructions.
//!
//! The host decodes the COP2 transfer instructions itself but does not know
//! which COP2 register file their coprocessor operand refers to. These
//! instructions are recognized by their host identity and one operand slot is
//! re-rendered:
//!
//! | Instruction     | Slot | Rendered as |
//! |-----------------|------|-------------|
//! | `cfc2`, `ctc2`  | 1    | `$viN`      |
//! | `qmfc2`, `qmtc2`| 1    | `$vfN`      |
//! | `lqc2`, `sqc2`  | 0    | `$vfN`      |
//!
//! Every other slot keeps the host's own rendering.

use std::str::FromStr;

use crate::isa::operand::Register;

/// Generic host instructions whose COP2 operand needs reclassifying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericInsn {
    /// Move control word from COP2.
    Cfc2,
    /// Move control word to COP2.
    Ctc2,
    /// Move quadword from COP2.
    Qmfc2,
    /// Move quadword to COP2.
    Qmtc2,
    /// Load quadword to COP2.
    Lqc2,
    /// Store quadword from COP2.
    Sqc2,
}

impl GenericInsn {
    /// All generic instructions that receive a fix-up.
    pub const ALL: [Self; 6] = [
        Self::Cfc2,
        Self::Ctc2,
        Self::Qmfc2,
        Self::Qmtc2,
        Self::Lqc2,
        Self::Sqc2,
    ];

    /// Host mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Cfc2 => "cfc2",
            Self::Ctc2 => "ctc2",
            Self::Qmfc2 => "qmfc2",
            Self::Qmtc2 => "qmtc2",
            Self::Lqc2 => "lqc2",
            Self::Sqc2 => "sqc2",
        }
    }

    /// Operand slot holding the COP2 register.
    pub const fn cop2_slot(self) -> usize {
        match self {
            Self::Cfc2 | Self::Ctc2 | Self::Qmfc2 | Self::Qmtc2 => 1,
            Self::Lqc2 | Self::Sqc2 => 0,
        }
    }

    /// Reclassifies operand `slot` holding register number `reg`.
    ///
    /// Returns `None` when the slot keeps its generic rendering.
    pub const fn fixup(self, slot: usize, reg: u8) -> Option<Register> {
        if slot != self.cop2_slot() {
            return None;
        }
        match self {
            Self::Cfc2 | Self::Ctc2 => Some(Register::VectorInteger(reg)),
            Self::Qmfc2 | Self::Qmtc2 | Self::Lqc2 | Self::Sqc2 => {
                Some(Register::VectorFloat(reg))
            }
        }
    }
}

/// Error returned when a host mnemonic names no fixed-up instruction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a COP2 transfer instruction")]
pub struct UnknownGenericInsn(pub String);

impl FromStr for GenericInsn {
    type Err = UnknownGenericInsn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|insn| insn.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGenericInsn(s.to_string()))
    }
}
