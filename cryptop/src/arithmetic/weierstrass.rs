//! Affine arithmetic on `y² = x³ + ax + b` over a prime field, with the
//! domain parameters supplied at runtime.
//!
//! Field inversions use Fermat's little theorem. Nothing in this module runs
//! in constant time.

use super::AffinePoint;
use crate::{Error, Result, curves::NamedCurve};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;

/// Extra random bytes drawn when sampling a nonce, making the bias of the
/// modular reduction negligible (FIPS 186-4 B.5.1).
const NONCE_EXTRA_BYTES: usize = 8;

pub(crate) fn is_on_curve(curve: &NamedCurve, point: &AffinePoint) -> bool {
    let p = curve.p();
    let (x, y) = (point.x(), point.y());

    if x >= p || y >= p {
        return false;
    }

    let lhs = y * y % p;
    let rhs = (x * x * x + curve.a_value() * x + curve.b()) % p;
    lhs == rhs
}

/// Point addition, with `None` standing for the point at infinity.
pub(crate) fn add(
    curve: &NamedCurve,
    lhs: &Option<AffinePoint>,
    rhs: &Option<AffinePoint>,
) -> Option<AffinePoint> {
    let (a, b) = match (lhs, rhs) {
        (None, _) => return rhs.clone(),
        (_, None) => return lhs.clone(),
        (Some(a), Some(b)) => (a, b),
    };

    let p = curve.p();

    let lambda = if a.x() == b.x() {
        // Either `b = -a` or `a` has order two
        if a.y() != b.y() || a.y().is_zero() {
            return None;
        }

        let numerator = (a.x() * a.x() * 3u32 + curve.a_value()) % p;
        let denominator = (a.y() + a.y()) % p;
        numerator * invert(&denominator, p) % p
    } else {
        let numerator = sub(b.y(), a.y(), p);
        let denominator = sub(b.x(), a.x(), p);
        numerator * invert(&denominator, p) % p
    };

    let x = sub(&(&lambda * &lambda % p), &((a.x() + b.x()) % p), p);
    let y = sub(&(&lambda * sub(a.x(), &x, p) % p), a.y(), p);
    Some(AffinePoint::new(x, y))
}

/// Scalar multiplication `k·P` by double-and-add.
pub(crate) fn mul(curve: &NamedCurve, k: &BigUint, point: &AffinePoint) -> Option<AffinePoint> {
    let base = Some(point.clone());
    let mut acc = None;

    for byte in k.to_bytes_be() {
        for i in (0..8).rev() {
            acc = add(curve, &acc, &acc);

            if (byte >> i) & 1 == 1 {
                acc = add(curve, &acc, &base);
            }
        }
    }

    acc
}

pub(crate) fn mul_base(curve: &NamedCurve, d: &BigUint) -> Result<AffinePoint> {
    if d.is_zero() || d >= curve.order() {
        return Err(Error::InvalidScalar);
    }

    mul(curve, d, curve.generator()).ok_or(Error::InvalidScalar)
}

/// Convert a message digest to an integer, keeping its leftmost bits up to
/// the bit length of the group order (SEC 1 section 4.1.3, step 5).
pub(crate) fn bits2int(curve: &NamedCurve, prehash: &[u8]) -> BigUint {
    let order_bits = curve.order().bits() as usize;
    let prehash = &prehash[..prehash.len().min(order_bits.div_ceil(8))];
    let z = BigUint::from_bytes_be(prehash);
    let prehash_bits = prehash.len() * 8;

    if prehash_bits > order_bits {
        z >> (prehash_bits - order_bits)
    } else {
        z
    }
}

pub(crate) fn sign_prehash(
    curve: &NamedCurve,
    d: &BigUint,
    prehash: &[u8],
    rng: &mut impl CryptoRngCore,
) -> Result<(BigUint, BigUint)> {
    let n = curve.order();

    if d.is_zero() || d >= n {
        return Err(Error::InvalidScalar);
    }

    let z = bits2int(curve, prehash);

    loop {
        let k = random_nonce(curve, rng);

        let Some(point) = mul(curve, &k, curve.generator()) else {
            continue;
        };

        let r = point.x() % n;

        if r.is_zero() {
            continue;
        }

        let s = invert(&k, n) * ((&z + &r * d) % n) % n;

        if !s.is_zero() {
            return Ok((r, s));
        }
    }
}

pub(crate) fn verify_prehash(
    curve: &NamedCurve,
    q: &AffinePoint,
    prehash: &[u8],
    r: &BigUint,
    s: &BigUint,
) -> bool {
    let n = curve.order();

    if r.is_zero() || s.is_zero() || r >= n || s >= n {
        return false;
    }

    let z = bits2int(curve, prehash) % n;
    let w = invert(s, n);
    let u1 = z * &w % n;
    let u2 = r * &w % n;

    let sum = add(
        curve,
        &mul(curve, &u1, curve.generator()),
        &mul(curve, &u2, q),
    );

    match sum {
        Some(point) => &(point.x() % n) == r,
        None => false,
    }
}

/// Uniform nonce in `[1, n)`.
fn random_nonce(curve: &NamedCurve, rng: &mut impl CryptoRngCore) -> BigUint {
    let mut bytes = vec![0u8; curve.scalar_bytes_len() + NONCE_EXTRA_BYTES];
    rng.fill_bytes(&mut bytes);
    let n_minus_one = curve.order() - 1u32;
    BigUint::from_bytes_be(&bytes) % n_minus_one + 1u32
}

/// `a - b mod m` for `a, b < m`.
fn sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + m - b) % m
}

/// Inversion modulo a prime `m`.
fn invert(a: &BigUint, m: &BigUint) -> BigUint {
    a.modpow(&(m - 2u32), m)
}
