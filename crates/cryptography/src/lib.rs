//! P-256 key and signature encodings for the secp256r1 verification payload.
//!
//! - [`point`] converts SEC1 uncompressed points to the 33-byte compressed form.
//! - [`der`] converts ASN.1 DER ECDSA signatures to and from raw `r || s`.
//! - [`pem`] renders a raw private scalar as a SEC1 `EC PRIVATE KEY` PEM.
//! - [`ecdsa`] adapts the `p256` crate for key generation, signing and verification.

pub mod der;
pub mod ecdsa;
pub mod pem;
pub mod point;

mod error;

pub use der::{decode_to_raw, decode_to_raw_with, encode_from_raw, DerSignature, RawSignature};
pub use ecdsa::{Keypair, Secp256r1Sign, Secp256r1Verify};
pub use error::{Error, Result};
pub use pem::{private_key_pem_from_scalar, sec1_der_from_scalar};
pub use point::{compress, decompress, uncompressed_point_from_spki, CompressedPublicKey, UncompressedPoint};
