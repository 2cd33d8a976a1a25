use crate::{DecodeError, Result};

/// Sequential reader over a borrowed byte buffer. Every read advances the
/// cursor; a read past the end fails without moving it.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    cursor: usize,
    data: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { cursor: 0, data }
    }

    pub const fn position(&self) -> usize {
        self.cursor
    }

    pub const fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    fn eof(&self, len: usize) -> Result<()> {
        if self.remaining() < len {
            return Err(DecodeError::TruncatedInput {
                offset: self.cursor,
                needed: len,
                len: self.data.len(),
            });
        }

        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.eof(1)?;

        let b = self.data[self.cursor];
        self.cursor += 1;

        Ok(b)
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        self.eof(len)?;

        let slice = &self.data[self.cursor..self.cursor + len];
        self.cursor += len;

        Ok(slice)
    }
}
