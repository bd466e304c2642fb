//! Secret keys: private scalars, optionally with the matching public point.

use crate::{AffinePoint, Error, NamedCurve, PublicKeyRecord, Result};
use core::fmt;
use num_bigint::BigUint;

/// Elliptic curve private key as decoded from SEC1 or PKCS#8.
///
/// # Caller obligations
///
/// - Decoding does not check that the scalar lies in `[1, n)`; signing and
///   public key derivation do, and fail with [`Error::InvalidScalar`].
/// - An embedded public point is kept as-is. It is not compared against
///   `d·G`; use [`PrivateKeyRecord::derive_public_key`] when that matters.
/// - The scalar is **not** zeroized on drop. Callers holding long-lived
///   keys are responsible for scrubbing the memory they decoded from.
#[derive(Clone)]
pub struct PrivateKeyRecord {
    curve: &'static NamedCurve,
    scalar: BigUint,
    public_point: Option<AffinePoint>,
}

impl PrivateKeyRecord {
    /// Create a private key from its parts.
    pub fn new(
        curve: &'static NamedCurve,
        scalar: BigUint,
        public_point: Option<AffinePoint>,
    ) -> Self {
        Self {
            curve,
            scalar,
            public_point,
        }
    }

    /// Create a private key from a big endian scalar, without a public point.
    pub fn from_bytes(curve: &'static NamedCurve, bytes: &[u8]) -> Self {
        Self::new(curve, BigUint::from_bytes_be(bytes), None)
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static NamedCurve {
        self.curve
    }

    /// Expose the secret scalar `d`.
    pub fn secret_scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Serialize the secret scalar as a big endian integer padded to the
    /// curve's scalar size.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.curve.scalar_bytes_len();
        let scalar = self.scalar.to_bytes_be();
        let mut bytes = vec![0u8; len.saturating_sub(scalar.len())];
        bytes.extend_from_slice(&scalar);
        bytes
    }

    /// Public point embedded in the encoded key, if there was one.
    pub fn public_point(&self) -> Option<&AffinePoint> {
        self.public_point.as_ref()
    }

    /// Does the scalar lie in `[1, n)`?
    pub fn is_scalar_in_range(&self) -> bool {
        self.scalar.bits() > 0 && &self.scalar < self.curve.order()
    }

    /// Public key for this private key: the embedded point if present,
    /// otherwise computed as `d·G`.
    pub fn public_key(&self) -> Result<PublicKeyRecord> {
        match &self.public_point {
            Some(point) => PublicKeyRecord::new(self.curve, point.clone()),
            None => self.derive_public_key(),
        }
    }

    /// Compute `d·G`, ignoring any embedded public point.
    pub fn derive_public_key(&self) -> Result<PublicKeyRecord> {
        if !self.is_scalar_in_range() {
            return Err(Error::InvalidScalar);
        }

        let point = self.curve.backend().mul_base(self.curve, &self.scalar)?;
        PublicKeyRecord::new(self.curve, point)
    }
}

impl fmt::Debug for PrivateKeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyRecord")
            .field("curve", &self.curve.name())
            .field("public_point", &self.public_point)
            .finish_non_exhaustive()
    }
}
