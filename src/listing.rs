use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::Decoder;
use crate::disasm::fmt_decoded;
use crate::stream::WordStream;

/// Exact diagnostic line emitted in place of a listing line when no
/// opcode field of a word matches the table.
pub const OPCODE_NOT_FOUND: &str = "Opcode not found --> Error with program";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no opcode field of {word:#010x} matches the instruction table")]
    UnknownOpcode { word: u32 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Sequential-listing state, the one mutable piece of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disassembler {
    /// Next label to assign, 1-based. Advances only on successful decodes.
    pub label: u32,
}

impl Disassembler {
    pub fn new() -> Self {
        Self { label: 1 }
    }

    pub fn reset(&mut self) {
        self.label = 1;
    }

    /// Decode one word and render its listing line (`L<n>: ...`).
    ///
    /// A word with no table match returns `UnknownOpcode` and leaves the
    /// label counter untouched, so the next decodable word takes the label
    /// the failed word would have received.
    pub fn line<D: Decoder>(&mut self, dec: &D, word: u32) -> Result<String, Error> {
        let Some(d) = dec.decode(word) else {
            debug!("no opcode field of {word:#010x} matched");
            return Err(Error::UnknownOpcode { word });
        };
        let line = format!("L{}: {}", self.label, fmt_decoded(&d, self.label));
        self.label += 1;
        Ok(line)
    }

    /// Disassemble a whole word stream into `out`, one line per word:
    /// listing lines for decodable words, the fixed diagnostic for the
    /// rest. I/O failure on either side aborts the run.
    pub fn write_listing<D, R, W>(&mut self, dec: &D, input: R, out: &mut W) -> Result<(), Error>
    where
        D: Decoder,
        R: Read,
        W: Write,
    {
        let mut lines = 0usize;
        let mut misses = 0usize;
        for word in WordStream::new(input) {
            match self.line(dec, word?) {
                Ok(line) => {
                    writeln!(out, "{line}")?;
                    lines += 1;
                }
                Err(Error::UnknownOpcode { .. }) => {
                    writeln!(out, "{OPCODE_NOT_FOUND}")?;
                    misses += 1;
                }
                Err(err) => return Err(err),
            }
        }
        debug!(lines, misses, "listing complete");
        Ok(())
    }
}
