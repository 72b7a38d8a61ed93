use crate::{IoError, IoResult};

/// A binary writer over a buffer allocated once for its final size.
///
/// Every write is checked against the capacity fixed at construction, so a
/// layout that disagrees with its own size arithmetic fails instead of
/// silently reallocating.
///
/// # Examples
///
/// ```rust
/// use r1_io::BinaryWriter;
///
/// let mut writer = BinaryWriter::with_capacity(4);
/// writer.write_u8(1).unwrap();
/// writer.write_u8(0).unwrap();
/// writer.write_u16(0x0031).unwrap();
///
/// assert_eq!(writer.remaining(), 0);
/// assert_eq!(writer.into_inner(), [1, 0, 0x31, 0x00]);
/// ```
#[derive(Debug)]
pub struct BinaryWriter {
    inner: Vec<u8>,
    capacity: usize,
}

impl BinaryWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Offset the next write lands at.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.capacity - self.inner.len()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    #[inline(always)]
    fn ensure_capacity(&self, wanted: usize) -> IoResult<()> {
        if wanted > self.remaining() {
            Err(IoError::CapacityExceeded {
                position: self.position(),
                wanted,
                capacity: self.capacity,
            })
        } else {
            Ok(())
        }
    }

    pub fn write_u8(&mut self, value: u8) -> IoResult<()> {
        self.ensure_capacity(1)?;
        self.inner.push(value);
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_bytes(&mut self, buffer: &[u8]) -> IoResult<()> {
        self.ensure_capacity(buffer.len())?;
        self.inner.extend_from_slice(buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_writer() {
        let mut writer = BinaryWriter::with_capacity(7);

        writer.write_u8(1).unwrap();
        writer.write_u8(0).unwrap();
        writer.write_u16(0xFFFF).unwrap();
        writer.write_u16(113).unwrap();
        assert_eq!(writer.position(), 6);

        writer.write_bytes(&[0xAA]).unwrap();
        assert_eq!(writer.remaining(), 0);
        assert_eq!(writer.into_inner(), [1, 0, 0xFF, 0xFF, 0x71, 0x00, 0xAA]);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut writer = BinaryWriter::with_capacity(3);
        writer.write_u16(7).unwrap();

        let err = writer.write_u16(8).unwrap_err();
        assert_eq!(
            err,
            IoError::CapacityExceeded {
                position: 2,
                wanted: 2,
                capacity: 3
            }
        );
        assert!(writer.write_bytes(&[1, 2]).is_err());
        // failed writes leave the buffer untouched
        writer.write_u8(9).unwrap();
        assert_eq!(writer.into_inner(), [7, 0, 9]);
    }
}
