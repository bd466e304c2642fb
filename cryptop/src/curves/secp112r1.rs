//! secp112r1 elliptic curve

use super::{CoefficientA, CurveParameters};
use crate::arithmetic::Backend;
use der::asn1::ObjectIdentifier;

/// secp112r1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain
/// Parameters, version 1.0:
///
/// <https://www.secg.org/SEC2-Ver-1.0.pdf>
///
/// Its equation is `y² = x³ - 3x + b` over a 112-bit prime field. The curve
/// was withdrawn from SEC 2 version 2 and offers no meaningful security
/// today; it is supported for decoding keys issued by legacy systems.
pub const SECP112R1: CurveParameters = CurveParameters {
    name: "secp112r1",
    oid: ObjectIdentifier::new_unwrap("1.3.132.0.6"),
    bits: 112,
    p: "db7c2abf62e35e668076bead208b",
    n: "db7c2abf62e35e7628dfac6561c5",
    a: CoefficientA::MinusThree,
    b: "659ef8ba043916eede8911702b22",
    gx: "09487239995a5ee76b55f9c2f098",
    gy: "a89ce5af8724c0a23e0e0ff77500",
    backend: Backend::Weierstrass,
};
