//! secp160r1 elliptic curve

use super::{CoefficientA, CurveParameters};
use crate::arithmetic::Backend;
use der::asn1::ObjectIdentifier;

/// secp160r1 elliptic curve.
///
/// Specified in SEC 2 version 1.0:
///
/// <https://www.secg.org/SEC2-Ver-1.0.pdf>
///
/// Its equation is `y² = x³ - 3x + b` over a 160-bit prime field. The group
/// order is a 161-bit prime, so private scalars serialize to 21 bytes while
/// point coordinates serialize to 20.
pub const SECP160R1: CurveParameters = CurveParameters {
    name: "secp160r1",
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.8"),
    bits: 160,
    p: "ffffffffffffffffffffffffffffffff7fffffff",
    n: "0100000000000000000001f4c8f927aed3ca752257",
    a: CoefficientA::MinusThree,
    b: "1c97befc54bd7a8b65acf89f81d4d4adc565fa45",
    gx: "4a96b5688ef573284664698968c38bb913cbfc82",
    gy: "23a628553168947d59dcc912042351377ac5fb32",
    backend: Backend::Weierstrass,
};
