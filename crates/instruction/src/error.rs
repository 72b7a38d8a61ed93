use r1_io::IoError;

/// Errors raised while building or reading a verification payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstructionError {
    #[error("instruction: public key must be 33 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("instruction: signature must be 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("instruction: message of {0} bytes does not fit a u16 length")]
    MessageTooLarge(usize),

    #[error("instruction: need {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("instruction: signature index {index} out of bounds ({count} signatures)")]
    SignatureIndexOutOfBounds { index: usize, count: usize },

    #[error("instruction: data lives in instruction {0}, not this one")]
    ExternalInstructionReference(u16),

    #[error("instruction: range {offset}..{end} exceeds {data_len} bytes of data")]
    OffsetOutOfBounds {
        offset: usize,
        end: usize,
        data_len: usize,
    },

    #[error("instruction: expected exactly {expected} signature(s), got {actual}")]
    UnexpectedSignatureCount { expected: usize, actual: usize },

    #[error("instruction: authorization message must be 40 bytes, got {0}")]
    InvalidAuthorizationMessage(usize),

    #[error("instruction: authorization names a different payer")]
    PayerMismatch,

    #[error("instruction: authorization expired at {expiry}, now {now}")]
    AuthorizationExpired { expiry: i64, now: i64 },

    #[error(transparent)]
    Cryptography(#[from] r1_cryptography::Error),

    #[error(transparent)]
    Io(#[from] IoError),
}

pub type Result<T> = core::result::Result<T, InstructionError>;
