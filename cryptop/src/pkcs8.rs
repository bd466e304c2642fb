//! PKCS#8 private keys.
//!
//! ```text
//! PrivateKeyInfo ::= SEQUENCE {
//!   version                   Version,
//!   privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
//!   privateKey                PrivateKey
//! }
//! ```
//!
//! Defined in [RFC 5208 Section 5](https://datatracker.ietf.org/doc/html/rfc5208#section-5).
//! For elliptic curve keys the algorithm is `id-ecPublicKey`, its
//! parameters name the curve and `privateKey` holds a SEC1 `ECPrivateKey`.

use crate::{
    CurveRegistry, Error, PrivateKeyRecord, Result,
    pkix::ID_EC_PUBLIC_KEY,
    sec1,
};
use der::{Decode, Sequence, Tag, asn1::OctetStringRef};
use spki::AlgorithmIdentifierRef;

/// `v1`, the only version supported.
pub const VERSION: u8 = 0;

/// Borrowed `PrivateKeyInfo` structure.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct PrivateKeyInfo<'a> {
    /// Structure version, always [`VERSION`].
    pub version: u8,

    /// Key algorithm and its parameters.
    pub algorithm: AlgorithmIdentifierRef<'a>,

    /// Algorithm-specific private key encoding.
    pub private_key: OctetStringRef<'a>,
}

/// Decode a DER-encoded PKCS#8 elliptic curve private key.
///
/// The curve comes from the algorithm parameters. If the nested SEC1
/// structure names a curve too, it must be the same one.
pub fn decode_pkcs8(der: &[u8]) -> Result<PrivateKeyRecord> {
    let info = PrivateKeyInfo::from_der(der)?;

    if info.version != VERSION {
        return Err(Error::MalformedEncoding(Tag::Integer.value_error()));
    }

    if info.algorithm.oid != ID_EC_PUBLIC_KEY {
        tracing::debug!(algorithm = %info.algorithm.oid, "PKCS#8 key is not an EC key");
        return Err(Error::UnsupportedKeyAlgorithm(info.algorithm.oid));
    }

    let key = sec1::parse(info.private_key.as_bytes())?;
    let curve = CurveRegistry::global().resolve(&info.algorithm.parameters_oid()?)?;

    if let Some(inner) = key.parameters {
        if inner != curve.oid() {
            tracing::debug!(outer = %curve.oid(), %inner, "PKCS#8 curve parameters disagree");
            return Err(Error::MalformedEncoding(
                Tag::ObjectIdentifier.value_error(),
            ));
        }
    }

    sec1::into_record(&key, curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sec1::EcPrivateKey;
    use der::{
        Encode,
        asn1::{AnyRef, ObjectIdentifier},
    };
    use spki::AlgorithmIdentifier;

    const SECP128R1_PKCS8: &[u8] = include_bytes!("../tests/examples/secp128r1-pkcs8.der");

    #[test]
    fn rejects_version_one() {
        let info = PrivateKeyInfo::from_der(SECP128R1_PKCS8).unwrap();
        let der = PrivateKeyInfo { version: 1, ..info }.to_der().unwrap();

        assert!(matches!(
            decode_pkcs8(&der),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn rejects_mismatched_nested_curve() {
        let info = PrivateKeyInfo::from_der(SECP128R1_PKCS8).unwrap();
        let secp112r1 = CurveRegistry::global().by_name("secp112r1").unwrap();

        let mut inner = EcPrivateKey::from_der(info.private_key.as_bytes()).unwrap();
        inner.parameters = Some(secp112r1.oid());
        let inner = inner.to_der().unwrap();

        let der = PrivateKeyInfo {
            private_key: OctetStringRef::new(&inner).unwrap(),
            ..info
        }
        .to_der()
        .unwrap();

        assert!(matches!(decode_pkcs8(&der), Err(Error::MalformedEncoding(_))));
    }

    #[test]
    fn nested_version_is_checked_before_curves() {
        let info = PrivateKeyInfo::from_der(SECP128R1_PKCS8).unwrap();
        let secp112r1 = CurveRegistry::global().by_name("secp112r1").unwrap();

        let mut inner = EcPrivateKey::from_der(info.private_key.as_bytes()).unwrap();
        inner.version = 7;
        inner.parameters = Some(secp112r1.oid());
        let inner = inner.to_der().unwrap();

        let p256 = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
        let algorithm = AlgorithmIdentifier {
            oid: ID_EC_PUBLIC_KEY,
            parameters: Some(AnyRef::from(&p256)),
        };

        let der = PrivateKeyInfo {
            algorithm,
            private_key: OctetStringRef::new(&inner).unwrap(),
            ..info
        }
        .to_der()
        .unwrap();

        assert!(matches!(decode_pkcs8(&der), Err(Error::MalformedEncoding(_))));
    }

    #[test]
    fn accepts_matching_nested_curve() {
        let info = PrivateKeyInfo::from_der(SECP128R1_PKCS8).unwrap();
        let secp128r1 = CurveRegistry::global().by_name("secp128r1").unwrap();

        let mut inner = EcPrivateKey::from_der(info.private_key.as_bytes()).unwrap();
        inner.parameters = Some(secp128r1.oid());
        let inner = inner.to_der().unwrap();

        let der = PrivateKeyInfo {
            private_key: OctetStringRef::new(&inner).unwrap(),
            ..info
        }
        .to_der()
        .unwrap();

        assert_eq!(decode_pkcs8(&der).unwrap().curve(), secp128r1);
    }

    #[test]
    fn rejects_non_ec_algorithms() {
        let ed25519 = ObjectIdentifier::new_unwrap("1.3.101.112");
        let der = PrivateKeyInfo {
            version: 0,
            algorithm: AlgorithmIdentifier {
                oid: ed25519,
                parameters: None,
            },
            private_key: OctetStringRef::new(&[0x04, 0x00]).unwrap(),
        }
        .to_der()
        .unwrap();

        assert_eq!(
            decode_pkcs8(&der).err(),
            Some(Error::UnsupportedKeyAlgorithm(ed25519))
        );
    }
}
