//! ECDSA signature encodings: ASN.1 DER and fixed-width `r || s`.
//!
//! Only the `SEQUENCE { INTEGER r, INTEGER s }` shape is understood. Lengths
//! must be short-form; a P-256 signature never needs more than 72 bytes, so a
//! long-form length byte is reported as unsupported rather than parsed.
//!
//! ```text
//! 0x30 [total-len] 0x02 [r-len] [r] 0x02 [s-len] [s]
//! ```

use core::fmt::{self, Debug, Formatter};

use p256::ecdsa::Signature;
use r1_config::{DerSettings, FIELD_SIZE, SIGNATURE_SIZE};
use r1_io::{IoError, MemoryReader};

use crate::{Error, Result};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;
const LONG_FORM: u8 = 0x80;

/// Fixed-width signature: big-endian `r` then `s`, each zero-padded to 32 bytes.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct RawSignature([u8; SIGNATURE_SIZE]);

impl RawSignature {
    pub fn new(r: [u8; FIELD_SIZE], s: [u8; FIELD_SIZE]) -> Self {
        let mut buf = [0u8; SIGNATURE_SIZE];
        buf[..FIELD_SIZE].copy_from_slice(&r);
        buf[FIELD_SIZE..].copy_from_slice(&s);
        Self(buf)
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidSignatureLength {
                expected: SIGNATURE_SIZE,
                actual: slice.len(),
            })
    }

    #[inline]
    pub fn r(&self) -> &[u8] {
        &self.0[..FIELD_SIZE]
    }

    #[inline]
    pub fn s(&self) -> &[u8] {
        &self.0[FIELD_SIZE..]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }

    #[inline]
    pub fn to_der(&self) -> DerSignature {
        encode_from_raw(self)
    }

    /// Returns the signature with `s` folded into the lower half of the group order.
    ///
    /// The verifying program rejects high-S signatures to rule out malleability.
    pub fn normalize_low_s(&self) -> Result<Self> {
        let signature = Signature::from_slice(&self.0)
            .map_err(|_| Error::MalformedSignature("r or s is zero or not below the curve order"))?;
        let normalized = signature.normalize_s().unwrap_or(signature);

        let mut buf = [0u8; SIGNATURE_SIZE];
        buf.copy_from_slice(&normalized.to_bytes());
        Ok(Self(buf))
    }
}

impl AsRef<[u8]> for RawSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for RawSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSignature")
            .field("r", &hex::encode(self.r()))
            .field("s", &hex::encode(self.s()))
            .finish()
    }
}

/// DER-encoded signature as produced by standard signing APIs.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct DerSignature(Vec<u8>);

impl DerSignature {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn to_raw(&self) -> Result<RawSignature> {
        decode_to_raw(&self.0)
    }
}

impl From<Vec<u8>> for DerSignature {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for DerSignature {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl AsRef<[u8]> for DerSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for DerSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DerSignature")
            .field(&hex::encode(&self.0))
            .finish()
    }
}

/// Decodes a DER signature with the default (lenient) settings.
#[inline]
pub fn decode_to_raw(der: &[u8]) -> Result<RawSignature> {
    decode_to_raw_with(der, &DerSettings::default())
}

/// Decodes a DER signature into `r || s`.
///
/// Lenient mode reads the SEQUENCE length without checking it against the
/// content; strict mode requires it to cover exactly the bytes that follow.
pub fn decode_to_raw_with(der: &[u8], settings: &DerSettings) -> Result<RawSignature> {
    let result = decode(der, settings);
    match &result {
        Ok(_) => tracing::trace!(len = der.len(), strict = settings.strict, "decoded DER signature"),
        Err(err) => tracing::warn!(len = der.len(), strict = settings.strict, %err, "rejecting DER signature"),
    }
    result
}

fn decode(der: &[u8], settings: &DerSettings) -> Result<RawSignature> {
    let mut reader = MemoryReader::new(der);

    expect_tag(&mut reader, TAG_SEQUENCE, "expected SEQUENCE tag")?;
    let total = read_length(&mut reader)?;
    if settings.strict && total != reader.remaining() {
        return Err(Error::MalformedSignature("SEQUENCE length does not match content"));
    }

    let r = read_integer(&mut reader)?;
    let s = read_integer(&mut reader)?;
    if settings.strict && !reader.is_empty() {
        return Err(Error::MalformedSignature("trailing bytes after s"));
    }

    Ok(RawSignature::new(to_field(r)?, to_field(s)?))
}

fn truncated(_: IoError) -> Error {
    Error::MalformedSignature("unexpected end of signature")
}

fn expect_tag(reader: &mut MemoryReader<'_>, tag: u8, reason: &'static str) -> Result<()> {
    match reader.read_u8().map_err(truncated)? {
        found if found == tag => Ok(()),
        _ => Err(Error::MalformedSignature(reason)),
    }
}

fn read_length(reader: &mut MemoryReader<'_>) -> Result<usize> {
    let len = reader.read_u8().map_err(truncated)?;
    if len & LONG_FORM != 0 {
        return Err(Error::UnsupportedDerEncoding(len));
    }
    Ok(len as usize)
}

fn read_integer<'a>(reader: &mut MemoryReader<'a>) -> Result<&'a [u8]> {
    expect_tag(reader, TAG_INTEGER, "expected INTEGER tag")?;
    let len = read_length(reader)?;
    if len == 0 {
        return Err(Error::MalformedSignature("empty INTEGER"));
    }
    reader.read_memory(len).map_err(truncated)
}

/// Drops the DER sign byte and left-pads to the field width.
fn to_field(component: &[u8]) -> Result<[u8; FIELD_SIZE]> {
    let component = match component {
        [0x00, rest @ ..] if component.len() > FIELD_SIZE => rest,
        _ => component,
    };
    if component.len() > FIELD_SIZE {
        return Err(Error::MalformedSignature("INTEGER wider than 32 bytes"));
    }

    let mut buf = [0u8; FIELD_SIZE];
    buf[FIELD_SIZE - component.len()..].copy_from_slice(component);
    Ok(buf)
}

/// Encodes `r || s` as a minimal DER SEQUENCE.
pub fn encode_from_raw(raw: &RawSignature) -> DerSignature {
    let (r, r_pad) = minimal_integer(raw.r());
    let (s, s_pad) = minimal_integer(raw.s());

    // at most 2 * (2 + 33) = 70 bytes, always short-form
    let content_len = 2 + r_pad as usize + r.len() + 2 + s_pad as usize + s.len();
    let mut out = Vec::with_capacity(2 + content_len);
    out.push(TAG_SEQUENCE);
    out.push(content_len as u8);
    push_integer(&mut out, r, r_pad);
    push_integer(&mut out, s, s_pad);
    DerSignature(out)
}

/// Strips leading zeros (keeping one) and reports whether a sign byte is needed.
fn minimal_integer(component: &[u8]) -> (&[u8], bool) {
    let first = component
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(component.len() - 1);
    let trimmed = &component[first..];
    (trimmed, trimmed[0] & LONG_FORM != 0)
}

fn push_integer(out: &mut Vec<u8>, value: &[u8], pad: bool) {
    out.push(TAG_INTEGER);
    out.push((value.len() + pad as usize) as u8);
    if pad {
        out.push(0x00);
    }
    out.extend_from_slice(value);
}
