//! secp256k1 elliptic curve

use super::{CoefficientA, CurveParameters};
use crate::arithmetic::Backend;
use der::asn1::ObjectIdentifier;

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
///
/// It's primarily notable for its use in Bitcoin and other cryptocurrencies.
/// Arithmetic is delegated to the constant-time [`k256`] crate.
pub const SECP256K1: CurveParameters = CurveParameters {
    name: "secp256k1",
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.10"),
    bits: 256,
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    a: CoefficientA::Zero,
    b: "0000000000000000000000000000000000000000000000000000000000000007",
    gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    backend: Backend::K256,
};
