//! Elliptic curve arithmetic.
//!
//! Every curve in the registry is bound to one arithmetic backend:
//!
//! - secp256k1 uses the constant-time [`k256`] crate.
//! - The legacy SEC 2 curves, which no maintained crate implements, use a
//!   small affine implementation over [`BigUint`] driven by the runtime
//!   domain parameters. It is **not** constant time and should only be used
//!   to interoperate with systems which already depend on those curves.

pub(crate) mod secp256k1;
pub(crate) mod weierstrass;

use crate::{Result, curves::NamedCurve};
use core::fmt;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

/// Point on an elliptic curve in affine coordinates.
///
/// The point at infinity has no affine representation; operations which can
/// produce it return `Option<AffinePoint>`.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct AffinePoint {
    x: BigUint,
    y: BigUint,
}

impl AffinePoint {
    /// Create a point from its coordinates. Does not check the curve
    /// equation; see [`NamedCurve::contains`].
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Affine `x` coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Affine `y` coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AffinePoint {{ x: {:x}, y: {:x} }}", self.x, self.y)
    }
}

/// Arithmetic implementation bound to a named curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Backend {
    /// Generic variable-time affine arithmetic.
    Weierstrass,

    /// The `k256` crate.
    K256,
}

impl Backend {
    pub(crate) fn is_on_curve(self, curve: &NamedCurve, point: &AffinePoint) -> bool {
        match self {
            Backend::Weierstrass => weierstrass::is_on_curve(curve, point),
            Backend::K256 => secp256k1::is_on_curve(curve, point),
        }
    }

    /// Compute `d·G`.
    pub(crate) fn mul_base(self, curve: &NamedCurve, d: &BigUint) -> Result<AffinePoint> {
        match self {
            Backend::Weierstrass => weierstrass::mul_base(curve, d),
            Backend::K256 => secp256k1::mul_base(curve, d),
        }
    }

    /// Sign a message digest, returning `(r, s)`.
    pub(crate) fn sign_prehash(
        self,
        curve: &NamedCurve,
        d: &BigUint,
        prehash: &[u8],
        rng: &mut impl CryptoRngCore,
    ) -> Result<(BigUint, BigUint)> {
        match self {
            Backend::Weierstrass => weierstrass::sign_prehash(curve, d, prehash, rng),
            Backend::K256 => secp256k1::sign_prehash(d, prehash, rng),
        }
    }

    pub(crate) fn verify_prehash(
        self,
        curve: &NamedCurve,
        q: &AffinePoint,
        prehash: &[u8],
        r: &BigUint,
        s: &BigUint,
    ) -> bool {
        match self {
            Backend::Weierstrass => weierstrass::verify_prehash(curve, q, prehash, r, s),
            Backend::K256 => secp256k1::verify_prehash(curve, q, prehash, r, s),
        }
    }
}
