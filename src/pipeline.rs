use r1_config::CodecSettings;
use r1_cryptography::{decode_to_raw_with, uncompressed_point_from_spki};
use r1_instruction::{build_from_parts, InstructionPayload};

use crate::Result;

/// Builds a verification payload straight from exported key and signer output.
///
/// `spki_der` is a DER SubjectPublicKeyInfo whose last 65 bytes are the
/// uncompressed point. `der_signature` is the ASN.1 signature over `message`.
/// With `settings.signature.normalize_low_s` set, a high `s` is folded to
/// `n - s` before it is written.
pub fn verification_instruction(
    spki_der: &[u8],
    der_signature: &[u8],
    message: &[u8],
    settings: &CodecSettings,
) -> Result<InstructionPayload> {
    let pubkey = uncompressed_point_from_spki(spki_der)?.compress();

    let mut signature = decode_to_raw_with(der_signature, &settings.der)?;
    if settings.signature.normalize_low_s {
        signature = signature.normalize_low_s()?;
    }

    tracing::debug!(
        prefix = pubkey.prefix(),
        message_len = message.len(),
        normalize_low_s = settings.signature.normalize_low_s,
        "assembling verification instruction"
    );
    Ok(build_from_parts(&pubkey, &signature, message)?)
}
