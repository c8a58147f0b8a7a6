//! COP2 Decode Orchestrator.
//!
//! [`Cop2Decoder`] is the single object a host holds. It owns the
//! instruction table, built once in [`Cop2Decoder::new`], and answers the
//! three questions a disassembler asks about each word:
//!
//! 1. **Analysis:** Is this a COP2 instruction, and what are its operands?
//! 2. **Mnemonic:** What goes in the mnemonic column?
//! 3. **Operands:** How is each register operand spelled?
//!
//! The decoder holds no mutable state and can be shared across threads.

use tracing::trace;

use crate::common::{ConfigError, DecoderError, Miss};
use crate::config::DecoderConfig;
use crate::host::{MemoryReader, OutputContext};
use crate::isa::disasm::{Mnemonic, format_mnemonic};
use crate::isa::generic::GenericInsn;
use crate::isa::instruction::DecodedInstruction;
use crate::isa::operand::Operand;
use crate::isa::resolve::classify;
use crate::isa::table::{InstructionDescriptor, InstructionTable};

/// COP2 macro-mode decoder.
#[derive(Debug, Clone)]
pub struct Cop2Decoder {
    table: InstructionTable,
    config: DecoderConfig,
}

impl Cop2Decoder {
    /// Builds the instruction table and returns a ready decoder.
    ///
    /// # Errors
    ///
    /// * [`DecoderError::Config`] - `config` fails [`DecoderConfig::validate`].
    /// * [`DecoderError::Table`] - the built-in catalog is inconsistent.
    pub fn new(config: DecoderConfig) -> Result<Self, DecoderError> {
        let table = InstructionTable::build()?;
        Self::with_table(table, config).map_err(DecoderError::from)
    }

    /// Wraps an already built table.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails [`DecoderConfig::validate`].
    pub fn with_table(
        table: InstructionTable,
        config: DecoderConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { table, config })
    }

    /// The instruction table.
    pub const fn table(&self) -> &InstructionTable {
        &self.table
    }

    /// The active configuration.
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Resolves `word` against the table without decoding its fields.
    ///
    /// # Errors
    ///
    /// Returns the [`Miss`] explaining why the word was declined.
    pub fn classify(&self, word: u32) -> Result<usize, Miss> {
        classify(&self.table, word)
    }

    /// Decodes `word`, or returns `None` if it is not a known COP2 instruction.
    pub fn try_decode(&self, word: u32) -> Option<DecodedInstruction> {
        match self.classify(word) {
            Ok(itype) => {
                let descriptor = self.table.get(itype)?;
                let operands = descriptor.layout.decode(word);
                if self.config.trace_decodes {
                    trace!(
                        word = %format_args!("{word:#010x}"),
                        itype,
                        mnemonic = %descriptor.mnemonic,
                        "decoded"
                    );
                }
                Some(DecodedInstruction::new(itype, word, operands))
            }
            Err(miss) => {
                if self.config.trace_decodes {
                    trace!(%miss, "declined");
                }
                None
            }
        }
    }

    /// Fetches the word at `address` from `reader` and decodes it.
    pub fn analyze<R: MemoryReader + ?Sized>(
        &self,
        reader: &R,
        address: u64,
    ) -> Option<DecodedInstruction> {
        self.try_decode(reader.read_word(address))
    }

    /// Returns whether `itype` is a COP2 instruction index of this decoder.
    ///
    /// `itype` must be [`DecodedInstruction::itype`] as returned by this
    /// decoder. Indices start at zero, so a host whose own instruction ids
    /// share that range must remember which decoder produced the record
    /// rather than ask this function.
    ///
    /// COP2 macro instructions never change control flow, so a host can treat
    /// any such index as falling through to the next word.
    pub fn is_extension(&self, itype: usize) -> bool {
        itype < self.table.len()
    }

    /// Descriptor of a decoded instruction.
    pub fn descriptor(&self, insn: &DecodedInstruction) -> Option<&InstructionDescriptor> {
        self.table.get(insn.itype)
    }

    /// Description of `itype`, suitable as an automatic comment.
    pub fn comment(&self, itype: usize) -> Option<&'static str> {
        self.table.get(itype).map(|descriptor| descriptor.description)
    }

    /// Mnemonic of a decoded instruction, including its destination suffix.
    pub fn render_mnemonic(&self, insn: &DecodedInstruction) -> Option<Mnemonic> {
        let descriptor = self.descriptor(insn)?;
        Some(format_mnemonic(
            descriptor,
            insn.word,
            self.config.mnemonic_width,
        ))
    }

    /// Text of a register operand.
    ///
    /// Immediates and empty slots return `None`; the host renders those.
    #[allow(clippy::unused_self)]
    pub fn render_operand(&self, operand: &Operand) -> Option<String> {
        operand.register().map(|reg| reg.to_string())
    }

    /// Emits the mnemonic of `insn`. Returns `false` if `insn` is not ours.
    pub fn out_mnemonic<C: OutputContext + ?Sized>(
        &self,
        insn: &DecodedInstruction,
        ctx: &mut C,
    ) -> bool {
        let Some(mnemonic) = self.render_mnemonic(insn) else {
            return false;
        };
        ctx.out_mnemonic(&mnemonic);
        true
    }

    /// Emits a generic host mnemonic padded to the configured width.
    ///
    /// Returns `false` when padding of generic mnemonics is disabled, leaving
    /// the host to emit it unchanged.
    pub fn out_generic_mnemonic<C: OutputContext + ?Sized>(
        &self,
        name: &str,
        ctx: &mut C,
    ) -> bool {
        if !self.config.pad_generic_mnemonics {
            return false;
        }
        ctx.out_mnemonic(&Mnemonic::plain(name, self.config.mnemonic_width));
        true
    }

    /// Emits operand `slot` of `insn` if it is a register.
    ///
    /// Returns `false` for immediates and empty slots so the host renders them.
    pub fn out_operand<C: OutputContext + ?Sized>(
        &self,
        insn: &DecodedInstruction,
        slot: usize,
        ctx: &mut C,
    ) -> bool {
        let Some(text) = insn
            .operand(slot)
            .and_then(|operand| self.render_operand(operand))
        else {
            return false;
        };
        ctx.out_register(&text);
        true
    }

    /// Emits operand `slot` of a generic COP2 transfer instruction.
    ///
    /// `reg` is the raw register number the host decoded. Returns `false` if
    /// the slot keeps the host's rendering.
    #[allow(clippy::unused_self)]
    pub fn out_generic_operand<C: OutputContext + ?Sized>(
        &self,
        insn: GenericInsn,
        slot: usize,
        reg: u8,
        ctx: &mut C,
    ) -> bool {
        let Some(register) = insn.fixup(slot, reg) else {
            return false;
        };
        ctx.out_register(&register.to_string());
        true
    }
}
