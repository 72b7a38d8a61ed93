//! secp256r1 signature-verification instruction payloads.
//!
//! [`build`] lays out one compressed key, one raw signature and a message
//! behind a [`SignatureOffsets`] table. [`ParsedInstruction`] reads any such
//! payload back, and [`authorization`] covers the withdraw message signed
//! by a vault owner.

pub mod authorization;
mod builder;
mod error;
mod offsets;
mod payload;

pub use authorization::{authorized_signer, WithdrawAuthorization, AUTHORIZATION_MESSAGE_SIZE};
pub use builder::{build, build_from_parts};
pub use error::{InstructionError, Result};
pub use offsets::SignatureOffsets;
pub use payload::{InstructionPayload, ParsedInstruction};
