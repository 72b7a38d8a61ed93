/// Errors raised by the key and signature codecs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid point format: {0}")]
    InvalidPointFormat(&'static str),

    #[error("invalid public key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    #[error("invalid private scalar length: expected 32 bytes, got {0}")]
    InvalidScalarLength(usize),

    #[error("malformed DER signature: {0}")]
    MalformedSignature(&'static str),

    #[error("unsupported DER encoding: long-form length byte {0:#04x}")]
    UnsupportedDerEncoding(u8),

    #[error("private scalar is zero or not below the curve order")]
    InvalidScalar,

    #[error("PEM armor could not be encoded")]
    PemEncoding,

    #[error("public key is not a point on secp256r1")]
    InvalidPublicKey,

    #[error("signature does not verify under this key")]
    VerificationFailed,
}

pub type Result<T> = core::result::Result<T, Error>;
