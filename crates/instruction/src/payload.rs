use core::fmt::{self, Debug, Formatter};

use r1_config::{
    COMPRESSED_PUBKEY_SIZE, CURRENT_INSTRUCTION_INDEX, HEADER_SIZE, SIGNATURE_OFFSETS_SIZE,
    SIGNATURE_SIZE,
};
use r1_cryptography::{CompressedPublicKey, RawSignature, Secp256r1Verify};
use r1_io::MemoryReader;

use crate::{InstructionError, Result, SignatureOffsets};

/// Finished instruction data, ready to hand to the submitting client.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct InstructionPayload(Vec<u8>);

impl InstructionPayload {
    #[inline]
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The offsets record of the single signature.
    pub fn offsets(&self) -> Result<SignatureOffsets> {
        self.parse()?.offsets(0).copied()
    }

    #[inline]
    pub fn parse(&self) -> Result<ParsedInstruction<'_>> {
        ParsedInstruction::parse(&self.0)
    }
}

impl AsRef<[u8]> for InstructionPayload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for InstructionPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstructionPayload")
            .field("len", &self.0.len())
            .field("data", &hex::encode(&self.0))
            .finish()
    }
}

/// Read-only view over verification instruction data.
///
/// Accepts any signature count, unlike the builder. Sections are resolved
/// lazily, so a bad offset only fails the accessor that touches it.
#[derive(Debug, Clone)]
pub struct ParsedInstruction<'a> {
    data: &'a [u8],
    offsets: Vec<SignatureOffsets>,
}

impl<'a> ParsedInstruction<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(InstructionError::Truncated {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let mut reader = MemoryReader::new(data);
        let count = reader.read_u8()? as usize;
        let _padding = reader.read_u8()?;

        let table_end = HEADER_SIZE + count * SIGNATURE_OFFSETS_SIZE;
        if data.len() < table_end {
            return Err(InstructionError::Truncated {
                expected: table_end,
                actual: data.len(),
            });
        }

        let offsets = (0..count)
            .map(|_| SignatureOffsets::read(&mut reader))
            .collect::<r1_io::IoResult<Vec<_>>>()?;

        tracing::trace!(count, len = data.len(), "parsed verification instruction");
        Ok(Self { data, offsets })
    }

    #[inline]
    pub fn num_signatures(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn offsets(&self, index: usize) -> Result<&SignatureOffsets> {
        self.offsets
            .get(index)
            .ok_or(InstructionError::SignatureIndexOutOfBounds {
                index,
                count: self.offsets.len(),
            })
    }

    pub fn signer(&self, index: usize) -> Result<&'a [u8; COMPRESSED_PUBKEY_SIZE]> {
        let offsets = self.offsets(index)?;
        self.array(offsets.public_key_instruction_index, offsets.public_key_offset)
    }

    pub fn signature(&self, index: usize) -> Result<&'a [u8; SIGNATURE_SIZE]> {
        let offsets = self.offsets(index)?;
        self.array(offsets.signature_instruction_index, offsets.signature_offset)
    }

    pub fn message(&self, index: usize) -> Result<&'a [u8]> {
        let offsets = self.offsets(index)?;
        self.section(
            offsets.message_instruction_index,
            offsets.message_data_offset as usize,
            offsets.message_data_size as usize,
        )
    }

    /// Checks signature `index` the way the verifying program would.
    pub fn verify(&self, index: usize) -> Result<()> {
        let signer = CompressedPublicKey::from_bytes(*self.signer(index)?)?;
        let signature = RawSignature::from_bytes(*self.signature(index)?);
        signer.secp256r1_verify(self.message(index)?, &signature)?;
        Ok(())
    }

    pub fn verify_all(&self) -> Result<()> {
        (0..self.num_signatures()).try_for_each(|index| self.verify(index))
    }

    fn array<const N: usize>(&self, instruction_index: u16, offset: u16) -> Result<&'a [u8; N]> {
        let section = self.section(instruction_index, offset as usize, N)?;
        section
            .try_into()
            .map_err(|_| self.out_of_bounds(offset as usize, N))
    }

    fn section(&self, instruction_index: u16, offset: usize, len: usize) -> Result<&'a [u8]> {
        if instruction_index != CURRENT_INSTRUCTION_INDEX {
            return Err(InstructionError::ExternalInstructionReference(instruction_index));
        }
        self.data
            .get(offset..offset + len)
            .ok_or_else(|| self.out_of_bounds(offset, len))
    }

    fn out_of_bounds(&self, offset: usize, len: usize) -> InstructionError {
        InstructionError::OffsetOutOfBounds {
            offset,
            end: offset + len,
            data_len: self.data.len(),
        }
    }
}
