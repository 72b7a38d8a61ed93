//! Verification payload construction.
//!
//! ```text
//! 0        2                  16          49            113
//! | n | 0  | SignatureOffsets | pubkey:33 | signature:64 | message:N |
//! ```

use r1_config::{COMPRESSED_PUBKEY_SIZE, NUM_SIGNATURES, SIGNATURE_SIZE};
use r1_cryptography::{CompressedPublicKey, RawSignature};
use r1_io::BinaryWriter;

use crate::{InstructionError, InstructionPayload, Result, SignatureOffsets};

/// Assembles the payload for one signature over `message`.
///
/// `pubkey` must be a 33-byte compressed key and `signature` a 64-byte
/// `r || s`; their contents are copied as-is.
pub fn build(pubkey: &[u8], signature: &[u8], message: &[u8]) -> Result<InstructionPayload> {
    if pubkey.len() != COMPRESSED_PUBKEY_SIZE {
        tracing::warn!(len = pubkey.len(), "rejecting public key");
        return Err(InstructionError::InvalidKeyLength(pubkey.len()));
    }
    if signature.len() != SIGNATURE_SIZE {
        tracing::warn!(len = signature.len(), "rejecting signature");
        return Err(InstructionError::InvalidSignatureLength(signature.len()));
    }
    let message_len = u16::try_from(message.len()).map_err(|_| {
        tracing::warn!(len = message.len(), "rejecting message");
        InstructionError::MessageTooLarge(message.len())
    })?;

    let offsets = SignatureOffsets::inline(message_len);
    let mut writer = BinaryWriter::with_capacity(offsets.message_end());

    writer.write_u8(NUM_SIGNATURES)?;
    writer.write_u8(0)?;
    offsets.write(&mut writer)?;

    debug_assert_eq!(writer.position(), offsets.public_key_offset as usize);
    writer.write_bytes(pubkey)?;
    debug_assert_eq!(writer.position(), offsets.signature_offset as usize);
    writer.write_bytes(signature)?;
    debug_assert_eq!(writer.position(), offsets.message_data_offset as usize);
    writer.write_bytes(message)?;
    debug_assert_eq!(writer.remaining(), 0);

    tracing::debug!(
        message_len,
        total = writer.position(),
        "built secp256r1 verification payload"
    );
    Ok(InstructionPayload::from_vec(writer.into_inner()))
}

/// [`build`] for values that already carry their lengths in the type.
#[inline]
pub fn build_from_parts(
    pubkey: &CompressedPublicKey,
    signature: &RawSignature,
    message: &[u8],
) -> Result<InstructionPayload> {
    build(pubkey.as_ref(), signature.as_ref(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use r1_config::MAX_MESSAGE_SIZE;

    fn test_key() -> [u8; 33] {
        let mut key = [0u8; 33];
        key[0] = 0x02;
        key
    }

    fn test_signature() -> [u8; 64] {
        let mut signature = [0u8; 64];
        signature[63] = 0x01;
        signature
    }

    #[test]
    fn test_build_reference_payload() {
        let payload = build(&test_key(), &test_signature(), b"test").unwrap();
        let bytes = payload.as_bytes();

        assert_eq!(bytes.len(), 117);
        assert_eq!(&bytes[..2], &[1, 0]);
        assert_eq!(payload.offsets().unwrap().to_fields(), [49, 0xFFFF, 16, 0xFFFF, 113, 4, 0xFFFF]);
        assert_eq!(&bytes[16..49], &test_key());
        assert_eq!(&bytes[49..113], &test_signature());
        assert_eq!(&bytes[113..], b"test");
    }

    #[test]
    fn test_build_rejects_key_lengths() {
        for len in [0, 32, 34, 65] {
            let key = vec![0x02; len];
            assert_eq!(
                build(&key, &test_signature(), b"test"),
                Err(InstructionError::InvalidKeyLength(len))
            );
        }
    }

    #[test]
    fn test_build_rejects_signature_lengths() {
        for len in [0, 63, 65, 72] {
            let signature = vec![0x01; len];
            assert_eq!(
                build(&test_key(), &signature, b"test"),
                Err(InstructionError::InvalidSignatureLength(len))
            );
        }
    }

    #[test]
    fn test_message_size_limit() {
        let largest = vec![0xAB; MAX_MESSAGE_SIZE];
        let payload = build(&test_key(), &test_signature(), &largest).unwrap();
        assert_eq!(payload.len(), 113 + MAX_MESSAGE_SIZE);
        assert_eq!(payload.offsets().unwrap().message_data_size, u16::MAX);

        for len in [MAX_MESSAGE_SIZE + 1, MAX_MESSAGE_SIZE + 2] {
            let message = vec![0u8; len];
            assert_eq!(
                build(&test_key(), &test_signature(), &message),
                Err(InstructionError::MessageTooLarge(len))
            );
        }
    }

    #[test]
    fn test_empty_message() {
        let payload = build(&test_key(), &test_signature(), &[]).unwrap();
        assert_eq!(payload.len(), 113);
        assert_eq!(payload.offsets().unwrap().message_data_size, 0);
    }

    #[test]
    fn test_build_from_parts() {
        let key = CompressedPublicKey::from_bytes(test_key()).unwrap();
        let signature = RawSignature::from_bytes(test_signature());

        assert_eq!(
            build_from_parts(&key, &signature, b"test").unwrap(),
            build(&test_key(), &test_signature(), b"test").unwrap()
        );
    }
}
