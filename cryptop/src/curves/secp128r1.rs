//! secp128r1 elliptic curve

use super::{CoefficientA, CurveParameters};
use crate::arithmetic::Backend;
use der::asn1::ObjectIdentifier;

/// secp128r1 elliptic curve.
///
/// Specified in SEC 2 version 1.0:
///
/// <https://www.secg.org/SEC2-Ver-1.0.pdf>
///
/// Its equation is `y² = x³ - 3x + b` over a 128-bit prime field.
pub const SECP128R1: CurveParameters = CurveParameters {
    name: "secp128r1",
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.28"),
    bits: 128,
    p: "fffffffdffffffffffffffffffffffff",
    n: "fffffffe0000000075a30d1b9038a115",
    a: CoefficientA::MinusThree,
    b: "e87579c11079f43dd824993c2cee5ed3",
    gx: "161ff7528b899b2d0c28607ca52c5b86",
    gy: "cf5ac8395bafeb13c02da292dded7a83",
    backend: Backend::Weierstrass,
};
