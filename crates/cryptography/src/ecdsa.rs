//! secp256r1 signing and verification on top of `p256`.
//!
//! Signatures are over SHA-256 of the message with RFC 6979 nonces, the
//! digest the verifying program recomputes.

use core::fmt::{self, Debug, Formatter};

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::EncodePublicKey;
use p256::SecretKey;
use r1_config::{FIELD_SIZE, UNCOMPRESSED_POINT_SIZE};
use p256::elliptic_curve::rand_core::CryptoRngCore;

use crate::der::{DerSignature, RawSignature};
use crate::pem::private_key_pem_from_scalar;
use crate::point::{CompressedPublicKey, UncompressedPoint};
use crate::{Error, Result};

pub trait Secp256r1Sign {
    type Sign;
    type Error;

    fn secp256r1_sign<T: AsRef<[u8]>>(&self, message: T) -> core::result::Result<Self::Sign, Self::Error>;
}

pub trait Secp256r1Verify {
    type Sign;
    type Error;

    fn secp256r1_verify<T: AsRef<[u8]>>(
        &self,
        message: T,
        sign: &Self::Sign,
    ) -> core::result::Result<(), Self::Error>;
}

/// A P-256 private key and everything derived from it.
#[derive(Clone)]
pub struct Keypair {
    secret: SecretKey,
}

impl Keypair {
    pub fn generate(rng: &mut impl CryptoRngCore) -> Self {
        Self {
            secret: SecretKey::random(rng),
        }
    }

    /// Loads a 32-byte big-endian scalar.
    pub fn from_scalar(scalar: &[u8]) -> Result<Self> {
        if scalar.len() != FIELD_SIZE {
            return Err(Error::InvalidScalarLength(scalar.len()));
        }
        let secret = SecretKey::from_slice(scalar).map_err(|_| Error::InvalidScalar)?;
        Ok(Self { secret })
    }

    pub fn scalar(&self) -> [u8; FIELD_SIZE] {
        let mut buf = [0u8; FIELD_SIZE];
        buf.copy_from_slice(&self.secret.to_bytes());
        buf
    }

    pub fn uncompressed_point(&self) -> UncompressedPoint {
        let encoded = self.secret.public_key().to_encoded_point(false);
        let mut buf = [0u8; UNCOMPRESSED_POINT_SIZE];
        buf.copy_from_slice(encoded.as_bytes());
        UncompressedPoint::from_bytes(buf)
    }

    #[inline]
    pub fn compressed_public_key(&self) -> CompressedPublicKey {
        self.uncompressed_point().compress()
    }

    /// DER SubjectPublicKeyInfo, the usual key-export format.
    pub fn spki_der(&self) -> Result<Vec<u8>> {
        self.secret
            .public_key()
            .to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|_| Error::InvalidPublicKey)
    }

    pub fn private_key_pem(&self) -> Result<String> {
        private_key_pem_from_scalar(&self.scalar())
    }
}

impl Debug for Keypair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.compressed_public_key())
            .finish_non_exhaustive()
    }
}

impl Secp256r1Sign for Keypair {
    type Sign = DerSignature;
    type Error = Error;

    fn secp256r1_sign<T: AsRef<[u8]>>(&self, message: T) -> Result<Self::Sign> {
        let sk = SigningKey::from(&self.secret);
        let sign: Signature = sk
            .try_sign(message.as_ref())
            .map_err(|_err| Error::InvalidScalar)?;

        Ok(DerSignature::from(sign.to_der().as_bytes()))
    }
}

impl Secp256r1Verify for CompressedPublicKey {
    type Sign = RawSignature;
    type Error = Error;

    fn secp256r1_verify<T: AsRef<[u8]>>(&self, message: T, sign: &Self::Sign) -> Result<()> {
        let vk = VerifyingKey::from_sec1_bytes(self.as_bytes()).map_err(|_err| Error::InvalidPublicKey)?;
        let sign = Signature::from_slice(sign.as_bytes())
            .map_err(|_err| Error::MalformedSignature("r or s is zero or not below the curve order"))?;

        vk.verify(message.as_ref(), &sign)
            .map_err(|_err| Error::VerificationFailed)
    }
}
