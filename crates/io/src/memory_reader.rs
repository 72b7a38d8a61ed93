use crate::{IoError, IoResult};

/// Cursor over a borrowed byte slice.
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline(always)]
    fn ensure_position(&self, move_by: usize) -> IoResult<()> {
        if move_by > self.remaining() {
            Err(IoError::UnexpectedEof {
                position: self.pos,
                wanted: move_by,
            })
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> IoResult<u8> {
        self.ensure_position(1)?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> IoResult<u16> {
        let bytes = self.read_array::<2>()?;
        Ok(u16::from_le_bytes(bytes))
    }

    #[inline(always)]
    pub fn read_i64(&mut self) -> IoResult<i64> {
        let bytes = self.read_array::<8>()?;
        Ok(i64::from_le_bytes(bytes))
    }

    pub fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_memory(N)?);
        Ok(buf)
    }

    #[inline(always)]
    pub fn read_memory(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure_position(count)?;
        let result = &self.memory[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reader() {
        let data = [0x01, 0x31, 0x00, 0xFF, 0xFF, 0xAA, 0xBB];
        let mut reader = MemoryReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u16().unwrap(), 49);
        assert_eq!(reader.read_u16().unwrap(), u16::MAX);
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.read_array::<2>().unwrap(), [0xAA, 0xBB]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_unexpected_eof() {
        let data = [0x30, 0x02];
        let mut reader = MemoryReader::new(&data);
        reader.read_u8().unwrap();

        assert_eq!(
            reader.read_memory(2).unwrap_err(),
            IoError::UnexpectedEof {
                position: 1,
                wanted: 2
            }
        );
        // nothing is consumed by a failed read
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_u8().unwrap(), 0x02);
        assert!(reader.read_u8().is_err());
    }

    #[test]
    fn test_read_i64() {
        let expiry: i64 = 1_750_000_000;
        let data = expiry.to_le_bytes();
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_i64().unwrap(), expiry);
    }
}
