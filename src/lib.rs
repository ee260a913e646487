pub mod decoder;
pub mod disasm;
pub mod listing;
pub mod opcodes;
pub mod stream;

pub mod isa {
    pub mod legv8; // LEGv8 educational-subset variant
}

pub use listing::{Disassembler, Error};
pub use stream::WordStream;
