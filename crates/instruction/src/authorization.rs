//! The message a vault owner signs to release funds to a payer.
//!
//! ```text
//! | payer:32 | expiry:i64 LE |
//! ```

use r1_config::{COMPRESSED_PUBKEY_SIZE, FIELD_SIZE};
use r1_io::MemoryReader;

use crate::{InstructionError, ParsedInstruction, Result};

pub const AUTHORIZATION_MESSAGE_SIZE: usize = FIELD_SIZE + 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawAuthorization {
    /// Account allowed to receive the funds.
    pub payer: [u8; FIELD_SIZE],
    /// Last unix timestamp, in seconds, at which the signature is honoured.
    pub expiry: i64,
}

impl WithdrawAuthorization {
    pub fn new(payer: [u8; FIELD_SIZE], expiry: i64) -> Self {
        Self { payer, expiry }
    }

    pub fn to_message(&self) -> [u8; AUTHORIZATION_MESSAGE_SIZE] {
        let mut message = [0u8; AUTHORIZATION_MESSAGE_SIZE];
        message[..FIELD_SIZE].copy_from_slice(&self.payer);
        message[FIELD_SIZE..].copy_from_slice(&self.expiry.to_le_bytes());
        message
    }

    pub fn from_message(message: &[u8]) -> Result<Self> {
        if message.len() != AUTHORIZATION_MESSAGE_SIZE {
            return Err(InstructionError::InvalidAuthorizationMessage(message.len()));
        }
        let mut reader = MemoryReader::new(message);
        Ok(Self {
            payer: reader.read_array::<FIELD_SIZE>()?,
            expiry: reader.read_i64()?,
        })
    }

    /// `now` equal to `expiry` is still valid.
    pub fn check_not_expired(&self, now: i64) -> Result<()> {
        if now > self.expiry {
            tracing::warn!(expiry = self.expiry, now, "authorization expired");
            return Err(InstructionError::AuthorizationExpired {
                expiry: self.expiry,
                now,
            });
        }
        Ok(())
    }

    /// Builds the verification payload for this authorization.
    pub fn to_payload(&self, pubkey: &[u8], signature: &[u8]) -> Result<crate::InstructionPayload> {
        crate::build(pubkey, signature, &self.to_message())
    }
}

/// Accepts a verification instruction as a withdraw approval.
///
/// The instruction must carry exactly one signature whose message names
/// `payer` and has not expired at `now`. Returns the approving key. The
/// signature itself is checked by the verifying program, or by
/// [`ParsedInstruction::verify`] when running offline.
pub fn authorized_signer<'a>(
    instruction: &ParsedInstruction<'a>,
    payer: &[u8; FIELD_SIZE],
    now: i64,
) -> Result<&'a [u8; COMPRESSED_PUBKEY_SIZE]> {
    if instruction.num_signatures() != 1 {
        return Err(InstructionError::UnexpectedSignatureCount {
            expected: 1,
            actual: instruction.num_signatures(),
        });
    }

    let signer = instruction.signer(0)?;
    let authorization = WithdrawAuthorization::from_message(instruction.message(0)?)?;
    if &authorization.payer != payer {
        return Err(InstructionError::PayerMismatch);
    }
    authorization.check_not_expired(now)?;

    tracing::debug!(expiry = authorization.expiry, now, "withdraw authorized");
    Ok(signer)
}
