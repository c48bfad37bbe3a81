// tests/core/cid.rs
use content_addresser::core::base58;
use content_addresser::{compute_cid, verify_cid, CidV0, CoreError};

use crate::common::{setup, ALPHABET};

// SHA-256 multihash of the raw bytes, no framing
const EMPTY_RAW: &str = "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n";
const HELLO_WORLD_RAW: &str = "QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4";
const CERTIFICATE_RAW: &str = "QmPTaMWvRRVNNAh64cKktLmcRxcRZ48X3WUyyEN8KZG6Jx";
const ALL_BYTES_RAW: &str = "QmShAQs9hZUv4y5ofQE89T53vy5ZQhguXvNrRDUK2YPvA3";

#[test]
fn empty_input_has_fixed_cid() {
    setup();
    assert_eq!(compute_cid(b""), EMPTY_RAW);
}

#[test]
fn known_vectors() {
    setup();
    assert_eq!(compute_cid(b"hello world"), HELLO_WORLD_RAW);
    assert_eq!(compute_cid(b"GouvChain certificate"), CERTIFICATE_RAW);

    let all_bytes: Vec<u8> = (0..=255u8).collect();
    assert_eq!(compute_cid(&all_bytes), ALL_BYTES_RAW);
}

#[test]
fn deterministic() {
    let payload = b"%PDF-1.7 certificate #2024-0042";
    assert_eq!(compute_cid(payload), compute_cid(payload));
    assert_eq!(CidV0::of(payload), CidV0::of(payload));
}

#[test]
fn output_stays_in_alphabet() {
    let payloads: [&[u8]; 5] = [b"", b"a", b"hello world", &[0u8; 64], &[0xffu8; 64]];
    for payload in payloads {
        let cid = compute_cid(payload);
        assert!(cid.chars().all(|c| ALPHABET.contains(c)), "{cid}");
        assert!(!cid.contains(['0', 'O', 'I', 'l']));
        assert!(cid.starts_with("Qm"));
        assert_eq!(cid.len(), 46);
    }
}

#[test]
fn decoded_cid_is_sha256_multihash() {
    let cid = compute_cid(b"hello world");
    let bytes = base58::decode(&cid).unwrap();
    assert_eq!(bytes.len(), 34);
    assert_eq!(&bytes[..2], &[0x12, 0x20]);
    assert_eq!(
        hex::encode(&bytes[2..]),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

#[test]
fn reencoding_decoded_cid_is_identity() {
    for cid in [EMPTY_RAW, HELLO_WORLD_RAW, CERTIFICATE_RAW, ALL_BYTES_RAW] {
        let bytes = base58::decode(cid).unwrap();
        assert_eq!(base58::encode(&bytes), cid);
    }
}

#[test]
fn parse_and_display_roundtrip() {
    let cid: CidV0 = HELLO_WORLD_RAW.parse().unwrap();
    assert_eq!(cid.to_string(), HELLO_WORLD_RAW);
    assert_eq!(cid, CidV0::of(b"hello world"));
    assert_eq!(
        cid.digest_hex(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
    assert_eq!(format!("{cid:?}"), format!("CidV0({HELLO_WORLD_RAW})"));
}

#[test]
fn parse_rejects_malformed_strings() {
    // ambiguous glyph
    assert!(matches!(
        "Qm0aozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L".parse::<CidV0>(),
        Err(CoreError::InvalidBase58 { ch: '0', index: 2 })
    ));
    // valid Base58, wrong length
    assert!(matches!(
        "QmaozNR7DZ".parse::<CidV0>(),
        Err(CoreError::InvalidMultihash(_))
    ));
    // a CIDv1 string is not a CIDv0
    assert!(matches!(
        "bafkreifzjut3te2nhyekklss27nh3k72ysco7y32koao5eei66wof36n5e".parse::<CidV0>(),
        Err(_)
    ));
}

#[test]
fn verify_cid_matches_and_mismatches() {
    assert!(verify_cid(b"hello world", HELLO_WORLD_RAW).unwrap());
    assert!(!verify_cid(b"hello world!", HELLO_WORLD_RAW).unwrap());
    assert!(verify_cid(b"", EMPTY_RAW).unwrap());
}

#[test]
fn verify_cid_errors_on_malformed_expected() {
    assert!(matches!(
        verify_cid(b"hello world", "not-a-cid"),
        Err(CoreError::InvalidBase58 { ch: '-', index: 3 })
    ));
}

#[test]
fn serde_uses_string_form() {
    let cid = CidV0::of(b"hello world");
    let json = serde_json::to_string(&cid).unwrap();
    assert_eq!(json, format!("\"{HELLO_WORLD_RAW}\""));

    let back: CidV0 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cid);

    assert!(serde_json::from_str::<CidV0>("\"QmInvalid\"").is_err());
}
