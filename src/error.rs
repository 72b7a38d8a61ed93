use r1_config::ConfigError;
use r1_cryptography::Error as CryptoError;
use r1_instruction::InstructionError;

/// Any failure along the key, signature and payload path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Key or signature encoding was rejected
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Payload could not be built or read
    #[error(transparent)]
    Instruction(#[from] InstructionError),
}

/// Result alias for [`Error`]
pub type Result<T> = core::result::Result<T, Error>;
