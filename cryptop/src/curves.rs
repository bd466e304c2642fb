//! Named elliptic curves in short Weierstrass form and the registry which
//! resolves them from their object identifiers.
//!
//! The registry is a fixed table. It is built once, on first use, and every
//! generator point is checked against its curve equation at that time.

mod secp112r1;
mod secp128r1;
mod secp160r1;
mod secp256k1;

pub use self::{
    secp112r1::SECP112R1, secp128r1::SECP128R1, secp160r1::SECP160R1, secp256k1::SECP256K1,
};

use crate::{
    Error, Result,
    arithmetic::{AffinePoint, Backend},
};
use core::fmt;
use der::asn1::ObjectIdentifier;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// The `a` coefficient of a curve equation `y² = x³ + ax + b`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CoefficientA {
    /// `a = -3 mod p`, used by the SECG "verifiably random" (`r1`) curves.
    MinusThree,

    /// `a = 0`, used by the SECG Koblitz (`k1`) curves.
    Zero,
}

/// Compile-time description of a named curve: big endian hex strings for
/// every domain parameter.
#[derive(Copy, Clone, Debug)]
pub struct CurveParameters {
    /// SEC 2 name of the curve.
    pub name: &'static str,

    /// Object identifier under `1.3.132.0` (`certicom-arc curve`).
    pub oid: ObjectIdentifier,

    /// Size of the base field in bits.
    pub bits: usize,

    /// Field modulus `p`.
    pub p: &'static str,

    /// Order `n` of the base point.
    pub n: &'static str,

    /// `a` coefficient of the curve equation.
    pub a: CoefficientA,

    /// `b` coefficient of the curve equation.
    pub b: &'static str,

    /// Affine `x` coordinate of the generator.
    pub gx: &'static str,

    /// Affine `y` coordinate of the generator.
    pub gy: &'static str,

    /// Arithmetic implementation used for this curve.
    pub(crate) backend: Backend,
}

/// Elliptic curve domain parameters for a registered named curve.
#[derive(Clone)]
pub struct NamedCurve {
    name: &'static str,
    oid: ObjectIdentifier,
    bits: usize,
    p: BigUint,
    n: BigUint,
    a: CoefficientA,
    b: BigUint,
    generator: AffinePoint,
    backend: Backend,
}

impl NamedCurve {
    fn new(params: &CurveParameters) -> Self {
        let curve = Self {
            name: params.name,
            oid: params.oid,
            bits: params.bits,
            p: parse_hex(params.p),
            n: parse_hex(params.n),
            a: params.a,
            b: parse_hex(params.b),
            generator: AffinePoint::new(parse_hex(params.gx), parse_hex(params.gy)),
            backend: params.backend,
        };

        assert_eq!(curve.p.bits() as usize, curve.bits, "{}: bad field size", curve.name);
        assert!(
            curve.contains(&curve.generator),
            "{}: generator is not on the curve",
            curve.name
        );
        curve
    }

    /// SEC 2 name of this curve, e.g. `secp256k1`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Object identifier of this curve.
    pub fn oid(&self) -> ObjectIdentifier {
        self.oid
    }

    /// Size of the base field in bits.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Order `n` of the generator.
    ///
    /// Not equal to `p`; for secp160r1 it is even one bit longer.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// `a` coefficient of the curve equation.
    pub fn a(&self) -> CoefficientA {
        self.a
    }

    /// `a` coefficient as an element of the base field.
    pub fn a_value(&self) -> BigUint {
        match self.a {
            CoefficientA::MinusThree => &self.p - 3u32,
            CoefficientA::Zero => BigUint::default(),
        }
    }

    /// `b` coefficient of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Generator point.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Length of a serialized field element (one point coordinate).
    pub fn field_bytes_len(&self) -> usize {
        self.bits.div_ceil(8)
    }

    /// Length of a serialized scalar, which can exceed
    /// [`NamedCurve::field_bytes_len`] when `n > p`.
    pub fn scalar_bytes_len(&self) -> usize {
        (self.n.bits() as usize).div_ceil(8)
    }

    /// Does the point satisfy the curve equation?
    pub fn contains(&self, point: &AffinePoint) -> bool {
        self.backend.is_on_curve(self, point)
    }

    pub(crate) fn backend(&self) -> Backend {
        self.backend
    }
}

impl fmt::Debug for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedCurve")
            .field("name", &self.name)
            .field("oid", &self.oid)
            .field("bits", &self.bits)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NamedCurve {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
    }
}

impl Eq for NamedCurve {}

/// Registry of the named curves supported by this crate.
#[derive(Debug)]
pub struct CurveRegistry {
    curves: [NamedCurve; 4],
}

static REGISTRY: Lazy<CurveRegistry> = Lazy::new(|| CurveRegistry {
    curves: [
        NamedCurve::new(&SECP112R1),
        NamedCurve::new(&SECP128R1),
        NamedCurve::new(&SECP160R1),
        NamedCurve::new(&SECP256K1),
    ],
});

impl CurveRegistry {
    /// Process-wide registry, built on first access.
    pub fn global() -> &'static CurveRegistry {
        &REGISTRY
    }

    /// Resolve a curve from its object identifier.
    ///
    /// Identifiers outside the table, including ones for curves other
    /// libraries know about (e.g. NIST P-256), yield
    /// [`Error::UnsupportedCurve`].
    pub fn resolve(&self, oid: &ObjectIdentifier) -> Result<&NamedCurve> {
        self.curves
            .iter()
            .find(|curve| curve.oid == *oid)
            .ok_or_else(|| {
                tracing::debug!(%oid, "unsupported elliptic curve");
                Error::UnsupportedCurve(*oid)
            })
    }

    /// Look up a curve by its SEC 2 name.
    pub fn by_name(&self, name: &str) -> Option<&NamedCurve> {
        self.curves.iter().find(|curve| curve.name == name)
    }

    /// Iterate over the registered curves.
    pub fn iter(&self) -> impl Iterator<Item = &NamedCurve> {
        self.curves.iter()
    }
}

fn parse_hex(hex: &str) -> BigUint {
    match BigUint::parse_bytes(hex.as_bytes(), 16) {
        Some(n) => n,
        None => panic!("invalid curve constant: {hex}"),
    }
}
