//! Public keys: a curve point together with the curve it lies on.

use crate::{AffinePoint, Error, NamedCurve, Result, point};

/// Elliptic curve public key.
///
/// Construction checks the curve equation, so every `PublicKeyRecord` holds
/// a valid point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKeyRecord {
    curve: &'static NamedCurve,
    point: AffinePoint,
}

impl PublicKeyRecord {
    /// Create a public key, failing with [`Error::InvalidPoint`] if `point`
    /// is not on `curve`.
    pub fn new(curve: &'static NamedCurve, point: AffinePoint) -> Result<Self> {
        if curve.contains(&point) {
            Ok(Self { curve, point })
        } else {
            tracing::debug!(curve = curve.name(), "public key point is not on the curve");
            Err(Error::InvalidPoint)
        }
    }

    /// Decode a public key from an uncompressed SEC1 point encoding.
    pub fn from_uncompressed(curve: &'static NamedCurve, bytes: &[u8]) -> Result<Self> {
        Self::new(curve, point::decode_uncompressed(curve, bytes)?)
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static NamedCurve {
        self.curve
    }

    /// Public point.
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Serialize as an uncompressed SEC1 point.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        // Coordinates of a point on the curve are reduced, so they always fit
        point::encode_uncompressed(self.curve, &self.point).unwrap_or_default()
    }
}
