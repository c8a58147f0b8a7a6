//! Opcode Resolution Tests.
//!
//! Covers the extension prefix check, the 6/11-bit opcode width boundary and
//! partitioned lookup.

use std::collections::HashSet;

use cop2_core::common::Miss;
use cop2_core::isa::instruction::InstructionBits;
use cop2_core::isa::resolve::{classify, resolve};
use cop2_core::isa::table::InstructionTable;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::{bare, encode};

fn table() -> InstructionTable {
    InstructionTable::build().unwrap()
}

#[test]
fn every_opcode_resolves_to_its_own_entry() {
    let table = table();
    let mut seen = HashSet::new();
    for (index, entry) in table.entries().iter().enumerate() {
        let word = encode(entry.opcode, 1, 2, 3, 0xF);
        assert_eq!(
            resolve(&table, word),
            Some(index),
            "{} ({:#05x}) from word {word:#010x}",
            entry.mnemonic,
            entry.opcode
        );
        assert!(seen.insert(index));
    }
    assert_eq!(seen.len(), table.len());
}

#[test]
fn resolution_ignores_register_fields() {
    let table = table();
    for ft in [0, 7, 31] {
        for fs in [0, 15, 31] {
            let word = encode(0x028, ft, fs, 31, 0);
            assert_eq!(table.get(resolve(&table, word).unwrap()).unwrap().mnemonic, "vadd");
        }
    }
}

#[test]
fn wide_opcode_selected_when_bits_5_to_2_set() {
    // Low 11 bits 0x2FC: bits 5-2 = 1111.
    let word = 0x4A00_02FC;
    assert_eq!(word.cop2_opcode(), 0x2FC);
    let table = table();
    assert_eq!(table.get(resolve(&table, word).unwrap()).unwrap().mnemonic, "vsuba");
}

#[test]
fn narrow_opcode_selected_when_bit_2_clear() {
    // Same word with bit 2 cleared: bits 5-2 = 1110, opcode is the low 6 bits.
    let word = 0x4A00_02F8;
    assert_eq!(word.cop2_opcode(), 0x38);
    assert_eq!(classify(&table(), word), Err(Miss::UnknownOpcode(0x38)));
}

#[test]
fn narrow_opcode_ignores_fd_bits() {
    // vadd (0x28) with fd = 31: bits 10-6 set but bits 5-2 = 1010.
    let word = encode(0x028, 0, 0, 31, 0);
    assert_eq!(word & 0x7FF, 0x7E8);
    assert_eq!(word.cop2_opcode(), 0x028);
}

#[test]
fn unknown_wide_opcode_declined() {
    let word = 0x4A00_07FD;
    assert_eq!(classify(&table(), word), Err(Miss::UnknownOpcode(0x7FD)));
    assert_eq!(resolve(&table(), word), None);
}

#[rstest]
#[case::zero(0x0000_0000)]
#[case::cop2_transfer(0x4800_0000)]
#[case::next_prefix(0x4C00_0000 | 0x028)]
#[case::all_ones(0xFFFF_FFFF)]
#[case::mips_addiu(0x2401_0001)]
fn foreign_words_declined(#[case] word: u32) {
    assert_eq!(classify(&table(), word), Err(Miss::ForeignWord(word)));
}

#[test]
fn both_prefix_encodings_accepted() {
    // Bit 25 belongs to the prefix, so 0x4A.. and 0x4B.. both carry 0b0100101.
    let table = table();
    assert_eq!(resolve(&table, 0x4A00_0028), resolve(&table, 0x4BE0_0028));
    assert!(resolve(&table, 0x4A00_0028).is_some());
}

#[test]
fn opcode_0x3ff_found_from_0x300_partition() {
    let table = table();
    let start = table.partition_start(0x3FF);
    assert_eq!(start, table.partitions()[2]);
    assert!(start > 0);
    let partitioned = table.find_from(start, 0x3FF).unwrap();
    let unpartitioned = table.find_from(0, 0x3FF).unwrap();
    assert_eq!(partitioned, unpartitioned);
    assert_eq!(table.get(partitioned).unwrap().mnemonic, "viswr");
    assert_eq!(resolve(&table, bare(0x3FF)), Some(partitioned));
}

#[test]
fn partitioned_scan_agrees_with_full_scan() {
    let table = table();
    for opcode in 0..=0x7FFu16 {
        assert_eq!(
            table.find(opcode),
            table.find_from(0, opcode),
            "opcode {opcode:#05x}"
        );
    }
}

#[test]
fn scan_from_past_end_finds_nothing() {
    let table = table();
    assert_eq!(table.find_from(table.len(), 0x000), None);
    assert_eq!(table.find_from(table.len() + 10, 0x000), None);
}
