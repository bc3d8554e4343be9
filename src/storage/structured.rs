//! Structured binary I/O for the index format.
//!
//! All values are big-endian and fixed-width. Writers refuse values that do
//! not fit their field; readers report a short stream as a decode error.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Result, TermidxError};

/// A structured writer for big-endian binary data.
pub struct StructWriter<W: Write> {
    writer: W,
    position: u64,
}

impl<W: Write> StructWriter<W> {
    /// Create a new structured writer.
    pub fn new(writer: W) -> Self {
        StructWriter {
            writer,
            position: 0,
        }
    }

    /// Write an i32 value.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.writer.write_i32::<BigEndian>(value)?;
        self.position += 4;
        Ok(())
    }

    /// Write a u16 value.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.writer.write_u16::<BigEndian>(value)?;
        self.position += 2;
        Ok(())
    }

    /// Write a count or length into an i32 field.
    pub fn write_i32_len(&mut self, len: usize, what: &str) -> Result<()> {
        self.write_i32(checked_i32(len, what)?)
    }

    /// Write a sequence of u16 values.
    pub fn write_u16s(&mut self, values: &[u16]) -> Result<()> {
        for &value in values {
            self.writer.write_u16::<BigEndian>(value)?;
        }
        self.position += 2 * values.len() as u64;
        Ok(())
    }

    /// Write raw bytes without length prefix.
    pub fn write_raw(&mut self, value: &[u8]) -> Result<()> {
        self.writer.write_all(value)?;
        self.position += value.len() as u64;
        Ok(())
    }

    /// Get the number of bytes written so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// A structured reader for big-endian binary data.
pub struct StructReader<R: Read> {
    reader: R,
    position: u64,
}

impl<R: Read> StructReader<R> {
    /// Create a new structured reader.
    pub fn new(reader: R) -> Self {
        StructReader {
            reader,
            position: 0,
        }
    }

    /// Read an i32 value.
    pub fn read_i32(&mut self) -> Result<i32> {
        let value = self
            .reader
            .read_i32::<BigEndian>()
            .map_err(|e| self.eof_error(e, "i32"))?;
        self.position += 4;
        Ok(value)
    }

    /// Read a u16 value.
    pub fn read_u16(&mut self) -> Result<u16> {
        let value = self
            .reader
            .read_u16::<BigEndian>()
            .map_err(|e| self.eof_error(e, "u16"))?;
        self.position += 2;
        Ok(value)
    }

    /// Read `count` u16 values.
    pub fn read_u16s(&mut self, count: usize) -> Result<Vec<u16>> {
        let mut values = vec![0u16; count];
        self.reader
            .read_u16_into::<BigEndian>(&mut values)
            .map_err(|e| self.eof_error(e, "u16 array"))?;
        self.position += 2 * count as u64;
        Ok(values)
    }

    /// Read exactly `length` raw bytes.
    pub fn read_raw(&mut self, length: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; length];
        self.reader
            .read_exact(&mut bytes)
            .map_err(|e| self.eof_error(e, "byte string"))?;
        self.position += length as u64;
        Ok(bytes)
    }

    /// Read a UTF-8 string of `length` bytes.
    pub fn read_string(&mut self, length: usize) -> Result<String> {
        let offset = self.position;
        let bytes = self.read_raw(length)?;
        String::from_utf8(bytes)
            .map_err(|e| TermidxError::decode(format!("invalid UTF-8 at offset {offset}: {e}")))
    }

    /// Whether the underlying stream has no bytes left.
    pub fn is_eof(&mut self) -> Result<bool> {
        let mut probe = [0u8; 1];
        loop {
            match self.reader.read(&mut probe) {
                Ok(0) => return Ok(true),
                Ok(_) => return Ok(false),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Get the number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    fn eof_error(&self, error: io::Error, what: &str) -> TermidxError {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            TermidxError::decode(format!(
                "unexpected end of stream reading {what} at offset {}",
                self.position
            ))
        } else {
            TermidxError::Io(error)
        }
    }
}

/// Narrow a length to a u16 field.
pub fn checked_u16(value: usize, what: &str) -> Result<u16> {
    u16::try_from(value).map_err(|_| {
        TermidxError::encode(format!(
            "{what} {value} exceeds the 16-bit field limit of {}",
            u16::MAX
        ))
    })
}

/// Narrow a length to an i32 field.
pub fn checked_i32(value: usize, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        TermidxError::encode(format!(
            "{what} {value} exceeds the 32-bit field limit of {}",
            i32::MAX
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_big_endian_layout() {
        let mut writer = StructWriter::new(Vec::new());
        writer.write_i32(2).unwrap();
        writer.write_u16(0x0102).unwrap();
        writer.write_raw(b"ab").unwrap();
        writer.write_u16s(&[7, 256]).unwrap();
        assert_eq!(writer.position(), 12);

        let bytes = writer.into_inner().unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 2, 1, 2, b'a', b'b', 0, 7, 1, 0]);
    }

    #[test]
    fn test_read_back() {
        let bytes = vec![0xff, 0xff, 0xff, 0xfe, 0, 3, b'x', b'y', b'z', 0, 1, 0, 2];
        let mut reader = StructReader::new(Cursor::new(bytes));

        assert_eq!(reader.read_i32().unwrap(), -2);
        let len = reader.read_u16().unwrap() as usize;
        assert_eq!(reader.read_string(len).unwrap(), "xyz");
        assert_eq!(reader.read_u16s(2).unwrap(), vec![1, 2]);
        assert!(reader.is_eof().unwrap());
        assert_eq!(reader.position(), 13);
    }

    #[test]
    fn test_truncated_is_decode_error() {
        let mut reader = StructReader::new(Cursor::new(vec![0, 0, 0]));
        assert!(reader.read_i32().unwrap_err().is_decode());

        let mut reader = StructReader::new(Cursor::new(vec![0, 1, 0]));
        assert!(reader.read_u16s(2).unwrap_err().is_decode());

        let mut reader = StructReader::new(Cursor::new(b"ab".to_vec()));
        assert!(reader.read_raw(3).unwrap_err().is_decode());
    }

    #[test]
    fn test_invalid_utf8() {
        let mut reader = StructReader::new(Cursor::new(vec![0xc3, 0x28]));
        assert!(reader.read_string(2).unwrap_err().is_decode());
    }

    #[test]
    fn test_u16_capacity() {
        assert_eq!(checked_u16(65535, "posting count").unwrap(), u16::MAX);

        let error = checked_u16(65536, "posting count").unwrap_err();
        assert!(error.is_encode());
        assert!(error.to_string().contains("posting count 65536"));
    }

    #[test]
    fn test_i32_capacity() {
        assert_eq!(checked_i32(i32::MAX as usize, "term count").unwrap(), i32::MAX);
        assert!(checked_i32(i32::MAX as usize + 1, "term count").unwrap_err().is_encode());
    }
}
