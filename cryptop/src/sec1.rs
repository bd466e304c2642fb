//! SEC1 elliptic curve private keys.
//!
//! ```text
//! ECPrivateKey ::= SEQUENCE {
//!   version        INTEGER { ecPrivkeyVer1(1) } (ecPrivkeyVer1),
//!   privateKey     OCTET STRING,
//!   parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
//!   publicKey  [1] BIT STRING OPTIONAL
//! }
//! ```
//!
//! Defined in [RFC 5915 Section 3](https://datatracker.ietf.org/doc/html/rfc5915#section-3).
//! Only the `namedCurve` choice of `ECParameters` is supported.

use crate::{
    CurveRegistry, Error, NamedCurve, PrivateKeyRecord, Result,
    point::{self, right_align},
};
use der::{
    Decode, Sequence, Tag,
    asn1::{BitStringRef, ObjectIdentifier, OctetStringRef},
};
use num_bigint::BigUint;

/// `ecPrivkeyVer1`
pub const VERSION: u8 = 1;

/// Borrowed `ECPrivateKey` structure.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct EcPrivateKey<'a> {
    /// Structure version, always [`VERSION`].
    pub version: u8,

    /// Big endian secret scalar.
    pub private_key: OctetStringRef<'a>,

    /// Named curve identifier.
    #[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
    pub parameters: Option<ObjectIdentifier>,

    /// Public point in SEC1 encoding.
    #[asn1(context_specific = "1", tag_mode = "EXPLICIT", optional = "true")]
    pub public_key: Option<BitStringRef<'a>>,
}

/// Decode a DER-encoded SEC1 private key.
///
/// SEC1 keys may omit their curve parameters. When they do, `default_curve`
/// names the curve; when they don't, the embedded identifier is used even if
/// it differs from `default_curve`. A key with neither fails with
/// [`Error::MissingCurve`].
///
/// The embedded public point, if any, is decoded but not checked against
/// the curve or the scalar.
pub fn decode_sec1(
    der: &[u8],
    default_curve: Option<&'static NamedCurve>,
) -> Result<PrivateKeyRecord> {
    let key = parse(der)?;
    let curve = match key.parameters {
        Some(oid) => CurveRegistry::global().resolve(&oid)?,
        None => default_curve.ok_or(Error::MissingCurve)?,
    };

    if let (Some(default), Some(_)) = (default_curve, key.parameters) {
        if default != curve {
            tracing::debug!(
                embedded = curve.name(),
                default = default.name(),
                "SEC1 parameters override the default curve"
            );
        }
    }

    into_record(&key, curve)
}

/// Parse an `ECPrivateKey` and check its version.
///
/// The version is checked before anything looks at the curve parameters.
pub(crate) fn parse(der: &[u8]) -> Result<EcPrivateKey<'_>> {
    let key = EcPrivateKey::from_der(der)?;

    if key.version != VERSION {
        tracing::debug!(version = key.version, "unsupported SEC1 version");
        return Err(Error::MalformedEncoding(Tag::Integer.value_error()));
    }

    Ok(key)
}

/// Build a [`PrivateKeyRecord`] from a structure returned by [`parse`]
/// whose curve has already been determined.
pub(crate) fn into_record(
    key: &EcPrivateKey<'_>,
    curve: &'static NamedCurve,
) -> Result<PrivateKeyRecord> {
    let scalar = BigUint::from_bytes_be(key.private_key.as_bytes());
    let public_point = key
        .public_key
        .as_ref()
        .map(|bits| point::decode_uncompressed(curve, &right_align(bits)))
        .transpose()?;

    Ok(PrivateKeyRecord::new(curve, scalar, public_point))
}
