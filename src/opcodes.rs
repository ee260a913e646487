use crate::decoder::Op;

#[derive(Debug, Clone, Copy)]
pub struct OpcodeEntry {
    pub pattern: u32,
    pub op: Op,
}

/// One shared pattern table for every opcode-field width.
///
/// Patterns of different widths live side by side; the decoder decides
/// which width it is holding when it probes. A narrow pattern can
/// therefore also match as the low bits of a wider field, and that
/// aliasing is observable output behavior.
pub const TABLE: &[OpcodeEntry] = &[
    OpcodeEntry { pattern: 0b10001011000, op: Op::Add },
    OpcodeEntry { pattern: 0b1001000100, op: Op::Addi },
    OpcodeEntry { pattern: 0b10001010000, op: Op::And },
    OpcodeEntry { pattern: 0b1001001000, op: Op::Andi },
    OpcodeEntry { pattern: 0b000101, op: Op::B },
    OpcodeEntry { pattern: 0b01010100, op: Op::BCond },
    OpcodeEntry { pattern: 0b100101, op: Op::Bl },
    OpcodeEntry { pattern: 0b11010110000, op: Op::Br },
    OpcodeEntry { pattern: 0b10110101, op: Op::Cbnz },
    OpcodeEntry { pattern: 0b10110100, op: Op::Cbz },
    OpcodeEntry { pattern: 0b11001010000, op: Op::Eor },
    OpcodeEntry { pattern: 0b1101001000, op: Op::Eori },
    OpcodeEntry { pattern: 0b11111000010, op: Op::Ldur },
    OpcodeEntry { pattern: 0b11010011011, op: Op::Lsl },
    OpcodeEntry { pattern: 0b11010011010, op: Op::Lsr },
    OpcodeEntry { pattern: 0b10101010000, op: Op::Orr },
    OpcodeEntry { pattern: 0b1011001000, op: Op::Orri },
    OpcodeEntry { pattern: 0b11111000000, op: Op::Stur },
    OpcodeEntry { pattern: 0b11001011000, op: Op::Sub },
    OpcodeEntry { pattern: 0b1101000100, op: Op::Subi },
    OpcodeEntry { pattern: 0b1111000100, op: Op::Subis },
    OpcodeEntry { pattern: 0b11101011000, op: Op::Subs },
    OpcodeEntry { pattern: 0b10011011000, op: Op::Mul },
    OpcodeEntry { pattern: 0b11111111101, op: Op::Prnt },
    OpcodeEntry { pattern: 0b11111111100, op: Op::Prnl },
    OpcodeEntry { pattern: 0b11111111110, op: Op::Dump },
    OpcodeEntry { pattern: 0b11111111111, op: Op::Halt },
];

pub fn lookup(field: u32) -> Option<&'static OpcodeEntry> {
    TABLE.iter().find(|e| e.pattern == field)
}

/// Condition-code suffixes for the conditional branch, indexed by the
/// 4-bit condition field. 0xE and 0xF are reserved and render empty.
pub const CONDITIONS: [&str; 16] = [
    "EQ", "NE", "HS", "LO", "MI", "PL", "VS", "VC", "HI", "LS", "GE", "LT", "GT", "LE", "", "",
];

pub fn condition(code: u8) -> &'static str {
    CONDITIONS[(code & 0xF) as usize]
}
