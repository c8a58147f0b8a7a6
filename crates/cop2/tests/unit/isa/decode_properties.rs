//! Property-based tests for the COP2 decoder.
//!
//! Arbitrary words must decode safely, and every word the decoder accepts
//! must satisfy the shape its layout declares.

use std::sync::LazyLock;

use cop2_core::Cop2Decoder;
use cop2_core::isa::decode::Layout;
use cop2_core::isa::disasm::disassemble;
use cop2_core::isa::operand::Operand;
use proptest::prelude::*;

use crate::common::builder::encode;
use crate::common::harness;

static DECODER: LazyLock<Cop2Decoder> = LazyLock::new(harness::decoder);

/// Words carrying the COP2 prefix in bits 31-25.
fn cop2_word() -> impl Strategy<Value = u32> {
    any::<u32>().prop_map(|word| (word & 0x01FF_FFFF) | (0x25 << 25))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5000))]

    /// Decoding never panics on arbitrary input.
    #[test]
    fn decode_never_panics(word in any::<u32>()) {
        let _ = DECODER.try_decode(word);
        let _ = disassemble(DECODER.table(), word);
    }

    /// Words without the COP2 prefix are always declined.
    #[test]
    fn foreign_prefix_declined(word in any::<u32>()) {
        prop_assume!(word >> 25 != 0x25);
        prop_assert!(DECODER.try_decode(word).is_none());
    }

    /// Accepted words are one word long and match their layout's classes.
    #[test]
    fn accepted_words_match_layout(word in cop2_word()) {
        if let Some(insn) = DECODER.try_decode(word) {
            prop_assert_eq!(insn.size, 4);
            prop_assert_eq!(insn.word, word);
            let descriptor = DECODER.descriptor(&insn).unwrap();
            let classes: Vec<_> = insn
                .operands()
                .filter_map(Operand::register)
                .map(|reg| reg.class())
                .collect();
            prop_assert_eq!(classes.as_slice(), descriptor.layout.register_classes());
        }
    }

    /// Void layouts decode to no operands at all.
    #[test]
    fn void_layout_has_no_operands(word in cop2_word()) {
        if let Some(insn) = DECODER.try_decode(word) {
            let descriptor = DECODER.descriptor(&insn).unwrap();
            if descriptor.layout == Layout::Void {
                prop_assert_eq!(insn.operand_count(), 0);
            }
        }
    }

    /// Decoding is deterministic.
    #[test]
    fn decode_is_deterministic(word in cop2_word()) {
        prop_assert_eq!(DECODER.try_decode(word), DECODER.try_decode(word));
    }

    /// Partitioned lookup finds the same entry as a scan of the whole table.
    #[test]
    fn partitioned_lookup_matches_full_scan(opcode in 0u16..0x800) {
        let table = DECODER.table();
        prop_assert_eq!(table.find(opcode), table.find_from(0, opcode));
    }

    /// Register fields never change which instruction a known opcode is.
    #[test]
    fn register_fields_do_not_affect_lookup(
        index in 0usize..118,
        ft in 0u32..32,
        fs in 0u32..32,
        fd in 0u32..32,
        dest in 0u32..16,
    ) {
        let table = DECODER.table();
        let opcode = table.get(index).unwrap().opcode;
        let word = encode(opcode, ft, fs, fd, dest);
        prop_assert_eq!(DECODER.try_decode(word).map(|insn| insn.itype), Some(index));
    }
}
