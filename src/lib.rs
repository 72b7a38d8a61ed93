//! # R1-Verify: secp256r1 verification payloads in Rust
//!
//! Turns the encodings standard P-256 tooling produces (SubjectPublicKeyInfo
//! keys, DER signatures) into the byte layout a native secp256r1
//! signature-verification program reads.
//!
//! ## Quick Start
//!
//! ```rust
//! use r1_verify::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let keypair = Keypair::generate(&mut StdRng::seed_from_u64(1));
//! let der = keypair.secp256r1_sign(b"hello").unwrap();
//!
//! let payload = verification_instruction(
//!     &keypair.spki_der().unwrap(),
//!     der.as_bytes(),
//!     b"hello",
//!     &CodecSettings::default(),
//! )
//! .unwrap();
//! assert_eq!(payload.len(), 113 + 5);
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Wire constants and codec settings
//! - [`io`] - Fixed-capacity writer and bounds-checked reader
//! - [`crypto`] - Point compression, DER signature codec, PEM fixtures
//! - [`instruction`] - Payload builder, parser and withdraw authorization

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use r1_config as config;
pub use r1_cryptography as crypto;
pub use r1_instruction as instruction;
pub use r1_io as io;

mod error;
mod pipeline;

pub use error::{Error, Result};
pub use pipeline::verification_instruction;

/// Common imports for building verification payloads
pub mod prelude {
    pub use crate::config::CodecSettings;
    pub use crate::crypto::{
        compress, decode_to_raw, CompressedPublicKey, DerSignature, Keypair, RawSignature,
        Secp256r1Sign, Secp256r1Verify,
    };
    pub use crate::instruction::{build, InstructionPayload, ParsedInstruction, WithdrawAuthorization};
    pub use crate::{verification_instruction, Error, Result};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
