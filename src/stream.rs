use std::io::{self, Read};

/// Iterator over big-endian 32-bit instruction words from any byte source.
///
/// The input carries no header and no count; its length is implicitly
/// `bytes / 4`. A trailing partial word (1..=3 leftover bytes) is treated
/// as end of input and dropped without a diagnostic.
pub struct WordStream<R> {
    inner: R,
}

impl<R: Read> WordStream<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> Iterator for WordStream<R> {
    type Item = io::Result<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = [0u8; 4];
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => return None, // EOF, any partial tail included
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        Some(Ok(u32::from_be_bytes(buf)))
    }
}
