use r1_config::{
    COMPRESSED_PUBKEY_SIZE, CURRENT_INSTRUCTION_INDEX, DATA_START, SIGNATURE_OFFSETS_SIZE,
    SIGNATURE_SIZE,
};
use r1_io::{BinaryWriter, IoResult, MemoryReader};

/// Where one signature's key, signature and message live.
///
/// Serialized as seven little-endian u16 fields in declaration order.
/// An instruction index of `0xFFFF` points at the instruction carrying
/// the table itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SignatureOffsets {
    pub signature_offset: u16,
    pub signature_instruction_index: u16,
    pub public_key_offset: u16,
    pub public_key_instruction_index: u16,
    pub message_data_offset: u16,
    pub message_data_size: u16,
    pub message_instruction_index: u16,
}

impl SignatureOffsets {
    pub const SIZE: usize = SIGNATURE_OFFSETS_SIZE;

    /// Layout for a payload carrying one signature with everything inline:
    /// key at 16, signature at 49, message at 113.
    pub fn inline(message_len: u16) -> Self {
        let public_key_offset = DATA_START as u16;
        let signature_offset = public_key_offset + COMPRESSED_PUBKEY_SIZE as u16;
        let message_data_offset = signature_offset + SIGNATURE_SIZE as u16;

        Self {
            signature_offset,
            signature_instruction_index: CURRENT_INSTRUCTION_INDEX,
            public_key_offset,
            public_key_instruction_index: CURRENT_INSTRUCTION_INDEX,
            message_data_offset,
            message_data_size: message_len,
            message_instruction_index: CURRENT_INSTRUCTION_INDEX,
        }
    }

    /// Byte just past the message.
    #[inline]
    pub fn message_end(&self) -> usize {
        self.message_data_offset as usize + self.message_data_size as usize
    }

    pub fn to_fields(&self) -> [u16; 7] {
        [
            self.signature_offset,
            self.signature_instruction_index,
            self.public_key_offset,
            self.public_key_instruction_index,
            self.message_data_offset,
            self.message_data_size,
            self.message_instruction_index,
        ]
    }

    pub fn write(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.to_fields()
            .into_iter()
            .try_for_each(|field| writer.write_u16(field))
    }

    pub fn read(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self {
            signature_offset: reader.read_u16()?,
            signature_instruction_index: reader.read_u16()?,
            public_key_offset: reader.read_u16()?,
            public_key_instruction_index: reader.read_u16()?,
            message_data_offset: reader.read_u16()?,
            message_data_size: reader.read_u16()?,
            message_instruction_index: reader.read_u16()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_layout() {
        let offsets = SignatureOffsets::inline(4);
        assert_eq!(offsets.to_fields(), [49, 0xFFFF, 16, 0xFFFF, 113, 4, 0xFFFF]);
        assert_eq!(offsets.message_end(), 117);
    }

    #[test]
    fn test_wire_format() {
        let offsets = SignatureOffsets::inline(0x0102);
        let mut writer = BinaryWriter::with_capacity(SignatureOffsets::SIZE);
        offsets.write(&mut writer).unwrap();

        let bytes = writer.into_inner();
        assert_eq!(
            bytes,
            [0x31, 0x00, 0xFF, 0xFF, 0x10, 0x00, 0xFF, 0xFF, 0x71, 0x00, 0x02, 0x01, 0xFF, 0xFF]
        );

        let mut reader = MemoryReader::new(&bytes);
        assert_eq!(SignatureOffsets::read(&mut reader).unwrap(), offsets);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_truncated() {
        let mut reader = MemoryReader::new(&[0x31, 0x00, 0xFF]);
        assert!(SignatureOffsets::read(&mut reader).is_err());
    }
}
