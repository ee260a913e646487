use crate::decoder::{Decoded, Operands};

/// Render the mnemonic and operand text of one decoded instruction.
/// `label` is the instruction's own sequence label; branch targets are
/// expressed relative to it.
pub fn fmt_decoded(d: &Decoded, label: u32) -> String {
    let mn = d.op.mnemonic();
    match d.operands {
        Operands::ThreeReg { rd, rn, rm } => {
            format!("{} {}, {}, {}", mn, register_name(rd), register_name(rn), register_name(rm))
        }
        Operands::SingleReg { rn } => format!("{} {}", mn, register_name(rn)),
        Operands::RegPair { rn, rd } => {
            format!("{} {}, {}", mn, register_name(rn), register_name(rd))
        }
        Operands::ShiftImm { rd, rn, shamt } => {
            format!("{} {}, {}, #{}", mn, register_name(rd), register_name(rn), shamt)
        }
        Operands::MemOffset { rt, rn, offset } => {
            format!("{} {}, [{}, #{}]", mn, register_name(rt), register_name(rn), offset)
        }
        Operands::AluImm { rd, rn, imm } => {
            format!("{} {}, {}, #{}", mn, register_name(rd), register_name(rn), imm)
        }
        Operands::CondBranch { offset } | Operands::Branch { offset } => {
            format!("{} L{}", mn, branch_target(label, offset))
        }
        Operands::None => mn.to_string(),
    }
}

/// Register names: 28..31 carry the reserved roles, the rest are X<n>.
pub fn register_name(code: u8) -> String {
    match code {
        28 => "SP".to_string(),
        29 => "FP".to_string(),
        30 => "LR".to_string(),
        31 => "XZR".to_string(),
        _ => format!("X{}", code),
    }
}

/// Branch targets are label-relative: the signed word offset is added to
/// the branching instruction's own label number. The result can leave the
/// 1-based range and still renders as written (L0, L-3, ...).
pub fn branch_target(label: u32, offset: i32) -> i64 {
    i64::from(label) + i64::from(offset)
}
