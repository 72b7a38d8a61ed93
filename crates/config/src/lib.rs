//! R1 Configuration Module
//!
//! Protocol constants for the secp256r1 signature-verification payload and
//! the settings that tune the codecs feeding it.

use serde::{Deserialize, Serialize};

/// Size of a P-256 field element / scalar in bytes
pub const FIELD_SIZE: usize = 32;
/// Size of a SEC1 compressed public key (parity prefix + X)
pub const COMPRESSED_PUBKEY_SIZE: usize = 33;
/// Size of a SEC1 uncompressed public key (0x04 + X + Y)
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;
/// Size of a raw r || s signature
pub const SIGNATURE_SIZE: usize = 64;

/// Payload header: num_signatures (u8) + reserved padding (u8)
pub const HEADER_SIZE: usize = 2;
/// Seven little-endian u16 fields
pub const SIGNATURE_OFFSETS_SIZE: usize = 7 * 2;
/// Signatures carried by a payload this crate builds
pub const NUM_SIGNATURES: u8 = 1;
/// Instruction index meaning "the instruction holding these offsets"
pub const CURRENT_INSTRUCTION_INDEX: u16 = u16::MAX;
/// First byte after the header and the single offsets record
pub const DATA_START: usize = HEADER_SIZE + NUM_SIGNATURES as usize * SIGNATURE_OFFSETS_SIZE;
/// Message length must fit the u16 `message_data_size` field
pub const MAX_MESSAGE_SIZE: usize = u16::MAX as usize;

/// Address of the native secp256r1 signature-verification program
pub const SECP256R1_PROGRAM_ID: &str = "Secp256r1SigVerify1111111111111111111111111";

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config: invalid toml: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for every codec in the workspace
///
/// Unknown tables and keys are rejected rather than ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecSettings {
    pub der: DerSettings,
    pub signature: SignatureSettings,
}

impl CodecSettings {
    /// Parses settings from a TOML document; missing tables keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// DER signature decoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DerSettings {
    /// Require the SEQUENCE length to cover exactly the remaining bytes.
    pub strict: bool,
}

/// Raw signature post-processing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignatureSettings {
    /// Rewrite `s` to `n - s` when it lies in the upper half of the order.
    pub normalize_low_s: bool,
}
