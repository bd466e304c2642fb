//! PKCS#8 private key decoding tests

use cryptop::{Error, ObjectIdentifier, decode_pkcs8, decode_sec1};

const SECP112R1_PKCS8: &[u8] = include_bytes!("examples/secp112r1-pkcs8.der");
const SECP128R1_PKCS8: &[u8] = include_bytes!("examples/secp128r1-pkcs8.der");
const SECP160R1_PKCS8: &[u8] = include_bytes!("examples/secp160r1-pkcs8.der");
const SECP256K1_PKCS8: &[u8] = include_bytes!("examples/secp256k1-pkcs8.der");
const P256_PKCS8: &[u8] = include_bytes!("examples/p256-pkcs8.der");

const SECP112R1_SEC1: &[u8] = include_bytes!("examples/secp112r1-sec1.der");
const SECP128R1_SEC1: &[u8] = include_bytes!("examples/secp128r1-sec1.der");
const SECP160R1_SEC1: &[u8] = include_bytes!("examples/secp160r1-sec1.der");
const SECP256K1_SEC1: &[u8] = include_bytes!("examples/secp256k1-sec1.der");

#[test]
fn agrees_with_sec1() {
    for (pkcs8, sec1) in [
        (SECP112R1_PKCS8, SECP112R1_SEC1),
        (SECP128R1_PKCS8, SECP128R1_SEC1),
        (SECP160R1_PKCS8, SECP160R1_SEC1),
        (SECP256K1_PKCS8, SECP256K1_SEC1),
    ] {
        let from_pkcs8 = decode_pkcs8(pkcs8).unwrap();
        let from_sec1 = decode_sec1(sec1, None).unwrap();

        assert_eq!(from_pkcs8.curve(), from_sec1.curve());
        assert_eq!(from_pkcs8.secret_scalar(), from_sec1.secret_scalar());
        assert_eq!(from_pkcs8.public_point(), from_sec1.public_point());
    }
}

#[test]
fn nested_sec1_without_parameters_uses_outer_curve() {
    let key = decode_pkcs8(SECP256K1_PKCS8).unwrap();
    assert_eq!(key.curve().name(), "secp256k1");
    assert!(key.public_point().is_some());
}

#[test]
fn unsupported_curve() {
    assert_eq!(
        decode_pkcs8(P256_PKCS8).err(),
        Some(Error::UnsupportedCurve(ObjectIdentifier::new_unwrap(
            "1.2.840.10045.3.1.7"
        )))
    );
}

#[test]
fn trailing_data() {
    let mut der = SECP160R1_PKCS8.to_vec();
    der.push(0);
    assert!(matches!(
        decode_pkcs8(&der),
        Err(Error::MalformedEncoding(_))
    ));
}

#[test]
fn truncated() {
    for len in [0, 3, SECP112R1_PKCS8.len() - 1] {
        assert!(matches!(
            decode_pkcs8(&SECP112R1_PKCS8[..len]),
            Err(Error::MalformedEncoding(_))
        ));
    }
}

#[test]
fn sec1_is_not_pkcs8() {
    assert!(matches!(
        decode_pkcs8(SECP112R1_SEC1),
        Err(Error::MalformedEncoding(_))
    ));
}

#[test]
fn version_must_be_zero() {
    let mut der = SECP112R1_PKCS8.to_vec();
    assert_eq!(der[2..5], [0x02, 0x01, 0x00]);
    der[4] = 0x01;
    assert!(matches!(
        decode_pkcs8(&der),
        Err(Error::MalformedEncoding(_))
    ));
}
