//! SEC1 `EC PRIVATE KEY` fixtures built from a raw private scalar.
//!
//! The DER body is a fixed template around the scalar and its public point:
//!
//! ```text
//! 30 77                                  SEQUENCE
//!    02 01 01                            version 1
//!    04 20 <scalar:32>                   privateKey
//!    a0 0a 06 08 2a8648ce3d030107        [0] namedCurve prime256v1
//!    a1 44 03 42 00 <point:65>           [1] publicKey
//! ```
//!
//! The `[0]` parameters are always present, unlike `SecretKey::to_sec1_der`
//! in `p256`, which leaves them out. Armor comes from the RFC 7468 encoder
//! that `p256` re-exports: 64-column base64 lines, LF line endings, and a
//! final LF after the closing boundary.

use p256::pkcs8::der::pem::{self, LineEnding};
use p256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use r1_config::{FIELD_SIZE, UNCOMPRESSED_POINT_SIZE};

use crate::{Error, Result};

const SCALAR_HEADER: [u8; 7] = [0x30, 0x77, 0x02, 0x01, 0x01, 0x04, 0x20];
const POINT_HEADER: [u8; 17] = [
    0xa0, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, // curve
    0xa1, 0x44, 0x03, 0x42, 0x00, // bit string, no unused bits
];

/// Length of the encoded structure, 0x77 plus the outer tag and length.
pub const SEC1_DER_SIZE: usize =
    SCALAR_HEADER.len() + FIELD_SIZE + POINT_HEADER.len() + UNCOMPRESSED_POINT_SIZE;

pub const PEM_LABEL: &str = "EC PRIVATE KEY";

/// Encodes a 32-byte big-endian scalar as SEC1 `ECPrivateKey` DER.
///
/// The public point is derived from the scalar with `p256`.
pub fn sec1_der_from_scalar(scalar: &[u8]) -> Result<Vec<u8>> {
    if scalar.len() != FIELD_SIZE {
        tracing::warn!(len = scalar.len(), "rejecting private scalar");
        return Err(Error::InvalidScalarLength(scalar.len()));
    }
    let secret = SecretKey::from_slice(scalar).map_err(|_| Error::InvalidScalar)?;
    let point = secret.public_key().to_encoded_point(false);

    let mut der = Vec::with_capacity(SEC1_DER_SIZE);
    der.extend_from_slice(&SCALAR_HEADER);
    der.extend_from_slice(scalar);
    der.extend_from_slice(&POINT_HEADER);
    der.extend_from_slice(point.as_bytes());
    debug_assert_eq!(der.len(), SEC1_DER_SIZE);
    Ok(der)
}

/// Renders a scalar as an `EC PRIVATE KEY` PEM document.
pub fn private_key_pem_from_scalar(scalar: &[u8]) -> Result<String> {
    let der = sec1_der_from_scalar(scalar)?;
    let pem = pem::encode_string(PEM_LABEL, LineEnding::LF, &der).map_err(|_| Error::PemEncoding)?;
    tracing::debug!(der_len = der.len(), pem_len = pem.len(), "built private key fixture");
    Ok(pem)
}
