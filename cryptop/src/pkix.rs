//! PKIX (X.509 `SubjectPublicKeyInfo`) public keys.
//!
//! ```text
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!   algorithm         AlgorithmIdentifier,
//!   subjectPublicKey  BIT STRING
//! }
//! ```
//!
//! Elliptic curve keys are decoded here, including on curves that X.509
//! libraries usually do not resolve. Every other algorithm is handed to a
//! [`GenericKeyDecoder`].

use crate::{CurveRegistry, Error, PublicKeyRecord, Result, point::right_align};
use core::convert::Infallible;
use der::{Decode, asn1::ObjectIdentifier};
use spki::SubjectPublicKeyInfoRef;

/// `id-ecPublicKey` from RFC 5480 Section 2.1.1.
pub const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Decoder for public keys which are not elliptic curve keys, e.g. RSA.
///
/// Implemented for closures taking the algorithm identifier and the complete
/// DER encoding of the `SubjectPublicKeyInfo`.
pub trait GenericKeyDecoder {
    /// Decoded key type.
    type Key;

    /// Decode a `SubjectPublicKeyInfo` whose algorithm is `algorithm`.
    fn decode_pkix(&self, algorithm: ObjectIdentifier, der: &[u8]) -> Result<Self::Key>;
}

impl<F, K> GenericKeyDecoder for F
where
    F: Fn(ObjectIdentifier, &[u8]) -> Result<K>,
{
    type Key = K;

    fn decode_pkix(&self, algorithm: ObjectIdentifier, der: &[u8]) -> Result<K> {
        self(algorithm, der)
    }
}

/// [`GenericKeyDecoder`] which rejects every algorithm with
/// [`Error::UnsupportedKeyAlgorithm`].
#[derive(Copy, Clone, Debug, Default)]
pub struct NoGenericDecoder;

impl GenericKeyDecoder for NoGenericDecoder {
    type Key = Infallible;

    fn decode_pkix(&self, algorithm: ObjectIdentifier, _der: &[u8]) -> Result<Infallible> {
        Err(Error::UnsupportedKeyAlgorithm(algorithm))
    }
}

/// Result of decoding a `SubjectPublicKeyInfo`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodedPublicKey<K> {
    /// Elliptic curve key on a registered curve.
    EllipticCurve(PublicKeyRecord),

    /// Key produced by the [`GenericKeyDecoder`].
    Other(K),
}

impl<K> DecodedPublicKey<K> {
    /// The elliptic curve key, if this is one.
    pub fn elliptic_curve(&self) -> Option<&PublicKeyRecord> {
        match self {
            DecodedPublicKey::EllipticCurve(key) => Some(key),
            DecodedPublicKey::Other(_) => None,
        }
    }

    /// Convert into the elliptic curve key, if this is one.
    pub fn into_elliptic_curve(self) -> Option<PublicKeyRecord> {
        match self {
            DecodedPublicKey::EllipticCurve(key) => Some(key),
            DecodedPublicKey::Other(_) => None,
        }
    }
}

/// Decode a DER-encoded `SubjectPublicKeyInfo`, accepting elliptic curve
/// keys only.
pub fn decode_pkix(der: &[u8]) -> Result<DecodedPublicKey<Infallible>> {
    decode_pkix_with(der, &NoGenericDecoder)
}

/// Decode a DER-encoded `SubjectPublicKeyInfo`, passing keys of other
/// algorithms to `generic`.
///
/// For elliptic curve keys the point must be uncompressed and lie on the
/// curve named by the algorithm parameters.
pub fn decode_pkix_with<D: GenericKeyDecoder>(
    der: &[u8],
    generic: &D,
) -> Result<DecodedPublicKey<D::Key>> {
    let spki = SubjectPublicKeyInfoRef::from_der(der)?;
    let algorithm = spki.algorithm.oid;

    if algorithm != ID_EC_PUBLIC_KEY {
        tracing::debug!(%algorithm, "delegating non-EC public key");
        return generic
            .decode_pkix(algorithm, der)
            .map(DecodedPublicKey::Other);
    }

    let curve = CurveRegistry::global().resolve(&spki.algorithm.parameters_oid()?)?;
    let point = right_align(&spki.subject_public_key);
    PublicKeyRecord::from_uncompressed(curve, &point).map(DecodedPublicKey::EllipticCurve)
}
