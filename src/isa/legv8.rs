use crate::decoder::{Decoded, Decoder, Format, Op, Operands};
use crate::opcodes;

/// LEGv8 decoder (educational subset)
/// Classifies a word by probing the four opcode-field widths against the
/// shared pattern table, widest field first. The first hit wins.
pub struct Legv8Decoder;

impl Legv8Decoder {
    pub fn new() -> Self {
        Self
    }
}

struct FieldProbe {
    format: Format,
    shift: u32,
    mask: u32,
}

/// Some narrow patterns also occur as the low bits of a wider field, and a
/// wider hit must shadow the narrower one, so probes run widest first.
const PROBES: &[FieldProbe] = &[
    FieldProbe { format: Format::R, shift: 21, mask: 0x7FF },
    FieldProbe { format: Format::I, shift: 22, mask: 0x3FF },
    FieldProbe { format: Format::Cb, shift: 24, mask: 0xFF },
    FieldProbe { format: Format::B, shift: 26, mask: 0x3F },
];

#[inline]
fn sign_ext(v: u32, bits: u32) -> i32 {
    let s = 32 - bits;
    ((v << s) as i32) >> s
}

#[inline]
fn reg(raw32: u32, shift: u32) -> u8 {
    ((raw32 >> shift) & 0x1F) as u8
}

/// Operand extraction depends on the format that matched AND on the op:
/// the register formats carry per-op field layouts, while a pattern that
/// reaches the R probe without a register layout renders bare.
fn operands(format: Format, op: Op, raw32: u32) -> Operands {
    match format {
        Format::R => match op {
            Op::Add | Op::And | Op::Eor | Op::Orr | Op::Sub | Op::Subs | Op::Mul => {
                Operands::ThreeReg {
                    rd: reg(raw32, 0),
                    rn: reg(raw32, 5),
                    rm: reg(raw32, 16),
                }
            }
            Op::Br => Operands::SingleReg { rn: reg(raw32, 5) },
            Op::Prnt => Operands::RegPair {
                rn: reg(raw32, 5),
                rd: reg(raw32, 0),
            },
            Op::Lsl | Op::Lsr => Operands::ShiftImm {
                rd: reg(raw32, 0),
                rn: reg(raw32, 5),
                shamt: ((raw32 >> 10) & 0x3F) as u8,
            },
            Op::Ldur | Op::Stur => Operands::MemOffset {
                rt: reg(raw32, 0),
                rn: reg(raw32, 5),
                offset: sign_ext((raw32 >> 12) & 0x1FF, 9),
            },
            // Aliased immediate/branch patterns reached through the 11-bit
            // probe, plus the operand-less service ops.
            Op::Addi
            | Op::Andi
            | Op::Eori
            | Op::Orri
            | Op::Subi
            | Op::Subis
            | Op::B
            | Op::BCond
            | Op::Bl
            | Op::Cbnz
            | Op::Cbz
            | Op::Prnl
            | Op::Dump
            | Op::Halt => Operands::None,
        },
        Format::I => Operands::AluImm {
            rd: reg(raw32, 0),
            rn: reg(raw32, 5),
            imm: sign_ext((raw32 >> 10) & 0xFFF, 12),
        },
        Format::Cb => Operands::CondBranch {
            offset: sign_ext((raw32 >> 5) & 0x7FFFF, 19),
        },
        Format::B => Operands::Branch {
            offset: sign_ext(raw32 & 0x3FF_FFFF, 26),
        },
    }
}

impl Decoder for Legv8Decoder {
    fn decode(&self, raw32: u32) -> Option<Decoded> {
        for probe in PROBES {
            let field = (raw32 >> probe.shift) & probe.mask;
            if let Some(entry) = opcodes::lookup(field) {
                return Some(Decoded {
                    op: entry.op,
                    format: probe.format,
                    operands: operands(probe.format, entry.op, raw32),
                });
            }
        }
        None
    }
}
