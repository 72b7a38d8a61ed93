//! SEC1 public key encodings for secp256r1.

use core::fmt::{self, Debug, Formatter};

use p256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey};
use r1_config::{COMPRESSED_PUBKEY_SIZE, FIELD_SIZE, UNCOMPRESSED_POINT_SIZE};

use crate::{Error, Result};

const TAG_UNCOMPRESSED: u8 = 0x04;
const TAG_EVEN_Y: u8 = 0x02;
const TAG_ODD_Y: u8 = 0x03;

/// 33-byte compressed key: parity prefix followed by big-endian X.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct CompressedPublicKey([u8; COMPRESSED_PUBKEY_SIZE]);

impl CompressedPublicKey {
    #[inline]
    pub fn from_bytes(bytes: [u8; COMPRESSED_PUBKEY_SIZE]) -> Result<Self> {
        match bytes[0] {
            TAG_EVEN_Y | TAG_ODD_Y => Ok(Self(bytes)),
            _ => Err(Error::InvalidPointFormat("compressed key prefix must be 0x02 or 0x03")),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; COMPRESSED_PUBKEY_SIZE] =
            slice.try_into().map_err(|_| Error::InvalidKeyLength {
                expected: COMPRESSED_PUBKEY_SIZE,
                actual: slice.len(),
            })?;
        Self::from_bytes(bytes)
    }

    #[inline]
    pub fn prefix(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn is_y_odd(&self) -> bool {
        self.0[0] == TAG_ODD_Y
    }

    #[inline]
    pub fn x(&self) -> &[u8] {
        &self.0[1..]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_PUBKEY_SIZE] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; COMPRESSED_PUBKEY_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for CompressedPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for CompressedPublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompressedPublicKey")
            .field(&hex::encode(self.0))
            .finish()
    }
}

/// 65-byte uncompressed point: 0x04 || X || Y.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct UncompressedPoint([u8; UNCOMPRESSED_POINT_SIZE]);

impl UncompressedPoint {
    /// Callers guarantee the 0x04 tag.
    #[inline]
    pub(crate) fn from_bytes(bytes: [u8; UNCOMPRESSED_POINT_SIZE]) -> Self {
        debug_assert_eq!(bytes[0], TAG_UNCOMPRESSED);
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; UNCOMPRESSED_POINT_SIZE] = slice
            .try_into()
            .map_err(|_| Error::InvalidPointFormat("uncompressed point must be 65 bytes"))?;
        if bytes[0] != TAG_UNCOMPRESSED {
            return Err(Error::InvalidPointFormat("uncompressed point must start with 0x04"));
        }
        Ok(Self(bytes))
    }

    #[inline]
    pub fn x(&self) -> &[u8] {
        &self.0[1..1 + FIELD_SIZE]
    }

    #[inline]
    pub fn y(&self) -> &[u8] {
        &self.0[1 + FIELD_SIZE..]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; UNCOMPRESSED_POINT_SIZE] {
        &self.0
    }

    /// Keeps X and folds Y down to its parity bit.
    #[inline]
    pub fn compress(&self) -> CompressedPublicKey {
        let mut buf = [0u8; COMPRESSED_PUBKEY_SIZE];
        buf[0] = TAG_EVEN_Y + (self.0[UNCOMPRESSED_POINT_SIZE - 1] & 0x01);
        buf[1..].copy_from_slice(self.x());
        CompressedPublicKey(buf)
    }
}

impl AsRef<[u8]> for UncompressedPoint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for UncompressedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UncompressedPoint")
            .field("x", &hex::encode(self.x()))
            .field("y", &hex::encode(self.y()))
            .finish()
    }
}

/// Compresses a 65-byte SEC1 uncompressed point.
///
/// Only the encoding is checked; curve membership is the signer's concern.
pub fn compress(point: &[u8]) -> Result<CompressedPublicKey> {
    let point = UncompressedPoint::from_slice(point).map_err(|err| {
        tracing::warn!(len = point.len(), %err, "rejecting uncompressed point");
        err
    })?;
    let compressed = point.compress();
    tracing::trace!(prefix = compressed.prefix(), "compressed public key");
    Ok(compressed)
}

/// Recovers Y for a compressed key by solving the curve equation.
pub fn decompress(key: &CompressedPublicKey) -> Result<UncompressedPoint> {
    let public = PublicKey::from_sec1_bytes(key.as_bytes()).map_err(|_| Error::InvalidPublicKey)?;
    UncompressedPoint::from_slice(public.to_encoded_point(false).as_bytes())
}

/// Takes the trailing uncompressed point out of a DER SubjectPublicKeyInfo block.
pub fn uncompressed_point_from_spki(spki: &[u8]) -> Result<UncompressedPoint> {
    let start = spki
        .len()
        .checked_sub(UNCOMPRESSED_POINT_SIZE)
        .ok_or(Error::InvalidPointFormat("key block shorter than an uncompressed point"))?;
    UncompressedPoint::from_slice(&spki[start..])
}
