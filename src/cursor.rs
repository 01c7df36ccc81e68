use crate::tools::encoding::decode_iso_8859_1;
use crate::Error;

/// Bounds-checked reader over a caller-supplied byte buffer. The only
/// state is the read offset; the buffer itself is never touched.
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Cursor<'a> {
        Cursor { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Next `n` bytes, advancing the offset.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if n > self.remaining() {
            return Err(Error::OutOfBounds);
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_exact(1)?[0])
    }

    /// Next `n` bytes without advancing.
    pub fn peek(&self, n: usize) -> Result<&'a [u8], Error> {
        if n > self.remaining() {
            return Err(Error::OutOfBounds);
        }
        Ok(&self.data[self.pos..self.pos + n])
    }

    /// Reads an `n`-byte fixed-width Latin-1 field, stripping trailing
    /// NUL and space padding. All ID3v1 text fields come through here;
    /// ID3v2.2 frame text carries its own encoding selector and is
    /// decoded from the payload slice instead, so no selector parameter
    /// is needed at the cursor.
    pub fn read_fixed_string(&mut self, n: usize) -> Result<String, Error> {
        let raw = self.read_exact(n)?;
        Ok(decode_iso_8859_1(raw)
            .trim_end_matches(|c| c == '\0' || c == ' ')
            .to_string())
    }

    pub fn skip(&mut self, n: usize) -> Result<(), Error> {
        self.read_exact(n).map(|_| ())
    }
}
