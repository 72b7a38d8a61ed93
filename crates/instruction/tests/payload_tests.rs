//! Payload layout and round-trip tests

use hex_literal::hex;
use proptest::prelude::*;
use r1_cryptography::{Keypair, Secp256r1Sign};
use r1_instruction::{
    authorized_signer, build, build_from_parts, InstructionError, ParsedInstruction,
    WithdrawAuthorization,
};
use rand::{rngs::StdRng, SeedableRng};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

proptest! {
    #[test]
    fn test_layout_for_any_message(
        key in any::<[u8; 32]>(),
        parity in 0u8..2,
        r in any::<[u8; 32]>(),
        s in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 0..2048),
    ) {
        let mut pubkey = [0u8; 33];
        pubkey[0] = 0x02 + parity;
        pubkey[1..].copy_from_slice(&key);
        let mut signature = [0u8; 64];
        signature[..32].copy_from_slice(&r);
        signature[32..].copy_from_slice(&s);

        let payload = build(&pubkey, &signature, &message).unwrap();
        let bytes = payload.as_bytes();

        prop_assert_eq!(bytes.len(), 113 + message.len());
        prop_assert_eq!(&bytes[..2], &[1u8, 0][..]);
        prop_assert_eq!(
            payload.offsets().unwrap().to_fields(),
            [49, 0xFFFF, 16, 0xFFFF, 113, message.len() as u16, 0xFFFF]
        );

        let parsed = payload.parse().unwrap();
        prop_assert_eq!(parsed.signer(0).unwrap(), &pubkey);
        prop_assert_eq!(parsed.signature(0).unwrap(), &signature);
        prop_assert_eq!(parsed.message(0).unwrap(), &message[..]);
    }

    #[test]
    fn test_parse_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        if let Ok(parsed) = ParsedInstruction::parse(&data) {
            for index in 0..parsed.num_signatures() + 1 {
                let _ = parsed.signer(index);
                let _ = parsed.signature(index);
                let _ = parsed.message(index);
            }
        }
    }
}

#[test]
fn test_reference_header_bytes() {
    let mut pubkey = [0u8; 33];
    pubkey[0] = 0x02;
    let mut signature = [0u8; 64];
    signature[63] = 0x01;

    let payload = build(&pubkey, &signature, b"test").unwrap();
    let bytes = payload.as_bytes();

    // count, padding, then 49, -, 16, -, 113, 4, -
    assert_eq!(bytes[..16], hex!("0100 3100 ffff 1000 ffff 7100 0400 ffff"));
    assert_eq!(bytes[16..18], hex!("0200"));
    assert_eq!(bytes[111..], hex!("0001 74657374"));
}

#[test]
fn test_signed_payload_verifies() {
    init_tracing();
    let keypair = Keypair::generate(&mut StdRng::seed_from_u64(11));
    let message = b"secp256r1 verification";

    let raw = keypair.secp256r1_sign(message).unwrap().to_raw().unwrap();
    let payload = build_from_parts(&keypair.compressed_public_key(), &raw, message).unwrap();
    let parsed = payload.parse().unwrap();

    assert_eq!(parsed.verify(0), Ok(()));
    assert_eq!(parsed.verify_all(), Ok(()));

    // flip one message bit
    let mut tampered = payload.into_inner();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;
    let parsed = ParsedInstruction::parse(&tampered).unwrap();
    assert_eq!(
        parsed.verify(0),
        Err(InstructionError::Cryptography(r1_cryptography::Error::VerificationFailed))
    );
}

#[test]
fn test_withdraw_flow() {
    init_tracing();
    let keypair = Keypair::generate(&mut StdRng::seed_from_u64(12));
    let payer = [0x42; 32];
    let auth = WithdrawAuthorization::new(payer, 1_800_000_000);

    let raw = keypair.secp256r1_sign(auth.to_message()).unwrap().to_raw().unwrap();
    let public = keypair.compressed_public_key();
    let payload = auth.to_payload(public.as_ref(), raw.as_ref()).unwrap();
    let parsed = payload.parse().unwrap();

    parsed.verify(0).unwrap();
    assert_eq!(
        authorized_signer(&parsed, &payer, 1_799_999_999).unwrap(),
        public.as_bytes()
    );
    assert!(matches!(
        authorized_signer(&parsed, &payer, 1_800_000_001),
        Err(InstructionError::AuthorizationExpired { .. })
    ));
}

#[test]
fn test_two_signature_instruction() {
    // hand-assembled: the builder only emits one signature
    let mut data = vec![2u8, 0];
    let key_a = [0x02; 33];
    let key_b = [0x03; 33];
    let table_end = 2 + 2 * 14;
    let first = table_end as u16;
    let second = first + 33 + 64 + 1;

    for (key_at, len) in [(first, 1u16), (second, 2u16)] {
        for field in [key_at + 33, 0xFFFF, key_at, 0xFFFF, key_at + 97, len, 0xFFFF] {
            data.extend_from_slice(&field.to_le_bytes());
        }
    }
    data.extend_from_slice(&key_a);
    data.extend_from_slice(&[0xAA; 64]);
    data.push(b'a');
    data.extend_from_slice(&key_b);
    data.extend_from_slice(&[0xBB; 64]);
    data.extend_from_slice(b"bb");

    let parsed = ParsedInstruction::parse(&data).unwrap();
    assert_eq!(parsed.num_signatures(), 2);
    assert_eq!(parsed.signer(0).unwrap(), &key_a);
    assert_eq!(parsed.signer(1).unwrap(), &key_b);
    assert_eq!(parsed.signature(1).unwrap(), &[0xBB; 64]);
    assert_eq!(parsed.message(0).unwrap(), b"a");
    assert_eq!(parsed.message(1).unwrap(), b"bb");
    assert!(matches!(
        authorized_signer(&parsed, &[0; 32], 0),
        Err(InstructionError::UnexpectedSignatureCount { actual: 2, .. })
    ));
}
