use serde::{Deserialize, Serialize};

/// Instruction format, named after the opcode-field width that matched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Format {
    /// 11-bit opcode field (bits 31..21)
    R,
    /// 10-bit opcode field (bits 31..22)
    I,
    /// 8-bit opcode field (bits 31..24)
    Cb,
    /// 6-bit opcode field (bits 31..26)
    B,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Op {
    Add,
    Addi,
    And,
    Andi,
    B,
    BCond,
    Bl,
    Br,
    Cbnz,
    Cbz,
    Eor,
    Eori,
    Ldur,
    Lsl,
    Lsr,
    Orr,
    Orri,
    Stur,
    Sub,
    Subi,
    Subis,
    Subs,
    Mul,
    Prnt,
    Prnl,
    Dump,
    Halt,
}

impl Op {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Add => "ADD",
            Op::Addi => "ADDI",
            Op::And => "AND",
            Op::Andi => "ANDI",
            Op::B => "B",
            Op::BCond => "B.",
            Op::Bl => "BL",
            Op::Br => "BR",
            Op::Cbnz => "CBNZ",
            Op::Cbz => "CBZ",
            Op::Eor => "EOR",
            Op::Eori => "EORI",
            Op::Ldur => "LDUR",
            Op::Lsl => "LSL",
            Op::Lsr => "LSR",
            Op::Orr => "ORR",
            Op::Orri => "ORRI",
            Op::Stur => "STUR",
            Op::Sub => "SUB",
            Op::Subi => "SUBI",
            Op::Subis => "SUBIS",
            Op::Subs => "SUBS",
            Op::Mul => "MUL",
            Op::Prnt => "PRNT",
            Op::Prnl => "PRNL",
            Op::Dump => "DUMP",
            Op::Halt => "HALT",
        }
    }
}

/// Operand fields of one instruction, grouped by how they render.
///
/// The shape is chosen from the matching format AND the opcode: a pattern
/// reached through the 11-bit probe only carries register operands when it
/// names one of the register-form ops, everything else renders bare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Operands {
    /// `Rd, Rn, Rm` register arithmetic/logic
    ThreeReg { rd: u8, rn: u8, rm: u8 },
    /// `Rn` only (BR)
    SingleReg { rn: u8 },
    /// `Rn, Rd` in that order (PRNT)
    RegPair { rn: u8, rd: u8 },
    /// `Rd, Rn, #shamt` with a 6-bit unsigned shift amount
    ShiftImm { rd: u8, rn: u8, shamt: u8 },
    /// `Rt, [Rn, #offset]` with a 9-bit signed offset
    MemOffset { rt: u8, rn: u8, offset: i32 },
    /// `Rd, Rn, #imm` with a 12-bit signed immediate
    AluImm { rd: u8, rn: u8, imm: i32 },
    /// 19-bit signed word offset, label-relative
    CondBranch { offset: i32 },
    /// 26-bit signed word offset, label-relative
    Branch { offset: i32 },
    /// Mnemonic renders alone
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decoded {
    pub op: Op,
    pub format: Format,
    pub operands: Operands,
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Option<Decoded>;
}
