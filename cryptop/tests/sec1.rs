//! SEC1 private key decoding tests

use cryptop::{CurveRegistry, Error, ObjectIdentifier, decode_sec1};
use hex_literal::hex;

const SECP112R1_SEC1: &[u8] = include_bytes!("examples/secp112r1-sec1.der");
const SECP128R1_SEC1: &[u8] = include_bytes!("examples/secp128r1-sec1.der");
const SECP160R1_SEC1: &[u8] = include_bytes!("examples/secp160r1-sec1.der");
const SECP256K1_SEC1: &[u8] = include_bytes!("examples/secp256k1-sec1.der");
const P256_SEC1: &[u8] = include_bytes!("examples/p256-sec1.der");

#[test]
fn decode_secp256k1() {
    let key = decode_sec1(SECP256K1_SEC1, None).unwrap();
    assert_eq!(key.curve().name(), "secp256k1");
    assert_eq!(
        key.to_bytes(),
        hex!("3b1f356be05f075b50a43d229eacab4b6f4de5eaaf623e066b1e687ecddaf75c")
    );

    let public_key = key.public_key().unwrap();
    assert_eq!(
        public_key.to_uncompressed(),
        hex!(
            "04989c33ed8fd09679ce6a838a4622596ae7597ee565cf5437924995623b977a04"
            "3da04df8170d93f301f74ec429b719db9253a51f7e27281b39959be78fdb51d1"
        )
    );
}

#[test]
fn decode_short_curves() {
    for (der, name, scalar) in [
        (SECP112R1_SEC1, "secp112r1", &hex!("19740bf92c42db50d5bf0acf1402")[..]),
        (SECP128R1_SEC1, "secp128r1", &hex!("0533f0d35985d6f13ef33dc8baa7d94e")[..]),
        (
            SECP160R1_SEC1,
            "secp160r1",
            &hex!("00ac3f97c84e7dee92328d68baabd6c093fb879cdb")[..],
        ),
    ] {
        let key = decode_sec1(der, None).unwrap();
        assert_eq!(key.curve().name(), name);
        assert_eq!(key.to_bytes(), scalar);
        assert!(key.is_scalar_in_range());
    }
}

#[test]
fn embedded_point_matches_derived_point() {
    for der in [SECP112R1_SEC1, SECP128R1_SEC1, SECP160R1_SEC1, SECP256K1_SEC1] {
        let key = decode_sec1(der, None).unwrap();
        let embedded = key.public_key().unwrap();
        let derived = key.derive_public_key().unwrap();
        assert_eq!(embedded, derived, "{}", key.curve().name());
    }
}

#[test]
fn secp160r1_point_coordinates_use_field_length() {
    let key = decode_sec1(SECP160R1_SEC1, None).unwrap();
    let point = key.public_key().unwrap().to_uncompressed();
    assert_eq!(point.len(), 41);
    assert_eq!(
        point,
        hex!(
            "043122885d10f91a05bbf6724e4719bd37f874f3e2"
            "85f3719e7ddc66f21085a8c81702da64a21ce51a"
        )
    );
}

#[test]
fn unsupported_curve() {
    let prime256v1 = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
    assert_eq!(
        decode_sec1(P256_SEC1, None).err(),
        Some(Error::UnsupportedCurve(prime256v1))
    );

    // a default curve does not override an unknown embedded one
    let secp256k1 = CurveRegistry::global().by_name("secp256k1");
    assert_eq!(
        decode_sec1(P256_SEC1, secp256k1).err(),
        Some(Error::UnsupportedCurve(prime256v1))
    );
}

#[test]
fn trailing_data() {
    let mut der = SECP128R1_SEC1.to_vec();
    der.push(0);
    assert!(matches!(
        decode_sec1(&der, None),
        Err(Error::MalformedEncoding(_))
    ));
}

#[test]
fn truncated() {
    for len in [0, 1, 2, SECP128R1_SEC1.len() / 2, SECP128R1_SEC1.len() - 1] {
        assert!(
            matches!(
                decode_sec1(&SECP128R1_SEC1[..len], None),
                Err(Error::MalformedEncoding(_))
            ),
            "length {len}"
        );
    }
}

#[test]
fn malformed_encoding_has_a_source() {
    let err = decode_sec1(&SECP128R1_SEC1[..2], None).unwrap_err();
    let Error::MalformedEncoding(der_err) = err else {
        panic!("unexpected error: {err}");
    };

    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), der_err.to_string());
}

#[test]
fn wrong_outer_tag() {
    let mut der = SECP112R1_SEC1.to_vec();
    der[0] = 0x31;
    assert!(matches!(
        decode_sec1(&der, None),
        Err(Error::MalformedEncoding(_))
    ));
}

#[test]
fn version_must_be_one() {
    // INTEGER 1 at offset 2..5
    let mut der = SECP112R1_SEC1.to_vec();
    assert_eq!(der[2..5], [0x02, 0x01, 0x01]);

    der[4] = 0x00;
    assert!(matches!(
        decode_sec1(&der, None),
        Err(Error::MalformedEncoding(_))
    ));

    der[4] = 0x02;
    assert!(matches!(
        decode_sec1(&der, None),
        Err(Error::MalformedEncoding(_))
    ));
}

#[test]
fn bad_version_with_unsupported_curve() {
    let mut der = P256_SEC1.to_vec();
    assert_eq!(der[2..5], [0x02, 0x01, 0x01]);
    der[4] = 0x07;

    assert!(matches!(
        decode_sec1(&der, None),
        Err(Error::MalformedEncoding(_))
    ));
}

#[test]
fn out_of_range_scalar_decodes_but_cannot_derive() {
    // replace the 14-byte secp112r1 scalar with all ones, which exceeds n
    let mut der = SECP112R1_SEC1.to_vec();
    der[7..21].fill(0xff);

    let key = decode_sec1(&der, None).unwrap();
    assert!(!key.is_scalar_in_range());
    assert_eq!(key.derive_public_key().err(), Some(Error::InvalidScalar));
}
