//! COP2 register classes and operand rendering.
//!
//! Every register operand produced by the field decoder is one of four
//! classes. Rendering follows the usual PS2 assembler spelling:
//!
//! | Class                | Example    |
//! |----------------------|------------|
//! | Vector float         | `$vf12`    |
//! | Vector integer       | `$vi3`     |
//! | Vector float + field | `$vf9.z`   |
//! | Control              | `$A`, `$I`, `$Q`, `$R` |

use std::fmt;

/// Shift of the lane selector inside a packed field register.
const LANE_SHIFT: u32 = 8;
/// Mask of the register index inside a packed field register.
const PACKED_INDEX_MASK: u16 = 0xFF;

/// One of the four 32-bit lanes of a vector register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Lane 0.
    X,
    /// Lane 1.
    Y,
    /// Lane 2.
    Z,
    /// Lane 3.
    W,
}

impl Lane {
    /// Maps a 2-bit field selector to its lane; only the low two bits are used.
    pub const fn from_selector(selector: u8) -> Self {
        match selector & 0x3 {
            0 => Self::X,
            1 => Self::Y,
            2 => Self::Z,
            _ => Self::W,
        }
    }

    /// The 2-bit selector value of this lane.
    pub const fn selector(self) -> u8 {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
            Self::W => 3,
        }
    }

    /// Lowercase lane letter.
    pub const fn letter(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::W => 'w',
        }
    }
}

/// A vector-float register restricted to a single lane (`$vfN.l`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldRegister {
    /// Register index (0-31).
    pub index: u8,
    /// Selected lane.
    pub lane: Lane,
}

impl FieldRegister {
    /// Creates a field register from a register index and a raw 2-bit selector.
    pub const fn new(index: u8, selector: u8) -> Self {
        Self {
            index,
            lane: Lane::from_selector(selector),
        }
    }

    /// Packs the register as `index | (selector << 8)`.
    pub const fn pack(self) -> u16 {
        self.index as u16 | ((self.lane.selector() as u16) << LANE_SHIFT)
    }

    /// Unpacks a value produced by [`FieldRegister::pack`].
    pub const fn unpack(packed: u16) -> Self {
        Self {
            index: (packed & PACKED_INDEX_MASK) as u8,
            lane: Lane::from_selector((packed >> LANE_SHIFT) as u8),
        }
    }
}

/// Synthetic, non-indexed COP2 registers.
///
/// Each is identified by the ASCII code of its one-letter name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlRegister {
    /// The accumulator (`$A`).
    Accumulator,
    /// The I broadcast scalar (`$I`).
    BroadcastI,
    /// The Q broadcast scalar, also the divider result (`$Q`).
    BroadcastQ,
    /// The random-unit register (`$R`).
    Random,
}

impl ControlRegister {
    /// ASCII code naming this register.
    pub const fn ascii(self) -> u8 {
        match self {
            Self::Accumulator => b'A',
            Self::BroadcastI => b'I',
            Self::BroadcastQ => b'Q',
            Self::Random => b'R',
        }
    }

    /// Looks a control register up by its ASCII code.
    pub const fn from_ascii(code: u8) -> Option<Self> {
        match code {
            b'A' => Some(Self::Accumulator),
            b'I' => Some(Self::BroadcastI),
            b'Q' => Some(Self::BroadcastQ),
            b'R' => Some(Self::Random),
            _ => None,
        }
    }
}

/// Register class of an operand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterClass {
    /// Vector-float register file (`$vf`).
    VectorFloat,
    /// Vector-integer register file (`$vi`).
    VectorInteger,
    /// Vector-float register with a lane selector.
    VectorFloatWithField,
    /// Synthetic control register.
    Control,
}

/// A classified register operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register {
    /// `$vfN`.
    VectorFloat(u8),
    /// `$viN`.
    VectorInteger(u8),
    /// `$vfN.l`.
    VectorFloatField(FieldRegister),
    /// `$A`, `$I`, `$Q` or `$R`.
    Control(ControlRegister),
}

impl Register {
    /// Class of this register.
    pub const fn class(&self) -> RegisterClass {
        match self {
            Self::VectorFloat(_) => RegisterClass::VectorFloat,
            Self::VectorInteger(_) => RegisterClass::VectorInteger,
            Self::VectorFloatField(_) => RegisterClass::VectorFloatWithField,
            Self::Control(_) => RegisterClass::Control,
        }
    }

    /// Raw number of the register as a host would store it.
    ///
    /// Field registers are packed, control registers are their ASCII code.
    pub const fn raw(&self) -> u16 {
        match self {
            Self::VectorFloat(n) | Self::VectorInteger(n) => *n as u16,
            Self::VectorFloatField(field) => field.pack(),
            Self::Control(ctl) => ctl.ascii() as u16,
        }
    }

    /// Rebuilds a register from its class and raw number.
    ///
    /// Returns `None` for a control class whose code names no control register.
    pub const fn from_class(class: RegisterClass, raw: u16) -> Option<Self> {
        match class {
            RegisterClass::VectorFloat => Some(Self::VectorFloat(raw as u8)),
            RegisterClass::VectorInteger => Some(Self::VectorInteger(raw as u8)),
            RegisterClass::VectorFloatWithField => {
                Some(Self::VectorFloatField(FieldRegister::unpack(raw)))
            }
            RegisterClass::Control => match ControlRegister::from_ascii(raw as u8) {
                Some(ctl) => Some(Self::Control(ctl)),
                None => None,
            },
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VectorFloat(n) => write!(f, "$vf{n}"),
            Self::VectorInteger(n) => write!(f, "$vi{n}"),
            Self::VectorFloatField(field) => {
                write!(f, "$vf{}.{}", field.index, field.lane.letter())
            }
            Self::Control(ctl) => write!(f, "${}", char::from(ctl.ascii())),
        }
    }
}

/// One operand slot of a decoded instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Unused slot.
    #[default]
    None,
    /// A register operand.
    Register(Register),
    /// A 5-bit unsigned immediate; carries no register class.
    Immediate(u8),
}

impl Operand {
    /// Returns whether the slot is unused.
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The register in this slot, if any.
    pub const fn register(&self) -> Option<Register> {
        match self {
            Self::Register(reg) => Some(*reg),
            _ => None,
        }
    }

    /// `$vfN` operand.
    pub const fn vf(n: u8) -> Self {
        Self::Register(Register::VectorFloat(n))
    }

    /// `$viN` operand.
    pub const fn vi(n: u8) -> Self {
        Self::Register(Register::VectorInteger(n))
    }

    /// `$vfN.l` operand from a register index and a raw 2-bit selector.
    pub const fn vf_field(n: u8, selector: u8) -> Self {
        Self::Register(Register::VectorFloatField(FieldRegister::new(n, selector)))
    }

    /// Control register operand.
    pub const fn control(ctl: ControlRegister) -> Self {
        Self::Register(Register::Control(ctl))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Register(reg) => reg.fmt(f),
            Self::Immediate(imm) => write!(f, "{imm}"),
        }
    }
}
