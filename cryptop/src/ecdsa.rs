//! Elliptic Curve Digital Signature Algorithm (ECDSA) over message digests.
//!
//! Digests are truncated to the bit length of the group order, so SHA-256
//! can be used with every registered curve. Signatures serialize as:
//!
//! ```text
//! Ecdsa-Sig-Value ::= SEQUENCE {
//!   r INTEGER,
//!   s INTEGER
//! }
//! ```
//!
//! ## Usage
//!
//! ```
//! use cryptop::{decode_sec1, ecdsa};
//! use rand_core::OsRng;
//! use sha2::{Digest, Sha256};
//!
//! # let sec1_der: &[u8] = include_bytes!("../tests/examples/secp160r1-sec1.der");
//! let secret_key = decode_sec1(sec1_der, None)?;
//! let public_key = secret_key.public_key()?;
//!
//! let prehash = Sha256::digest(b"example");
//! let signature = ecdsa::sign_prehash(&secret_key, &prehash, &mut OsRng)?;
//! assert!(ecdsa::verify_prehash(&public_key, &prehash, &signature));
//! # Ok::<(), cryptop::Error>(())
//! ```

use crate::{Error, PrivateKeyRecord, PublicKeyRecord, Result};
use der::{Decode, Encode, Sequence, asn1::UintRef};
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

/// ECDSA signature `(r, s)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

#[derive(Sequence)]
struct EcdsaSigValue<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl Signature {
    /// Create a signature from its components. No range checks are done.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Decode an ASN.1 DER `Ecdsa-Sig-Value`.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let sig = EcdsaSigValue::from_der(bytes)?;
        Ok(Self {
            r: BigUint::from_bytes_be(sig.r.as_bytes()),
            s: BigUint::from_bytes_be(sig.s.as_bytes()),
        })
    }

    /// Encode as an ASN.1 DER `Ecdsa-Sig-Value`.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let r = self.r.to_bytes_be();
        let s = self.s.to_bytes_be();

        let sig = EcdsaSigValue {
            r: UintRef::new(&r)?,
            s: UintRef::new(&s)?,
        };

        Ok(sig.to_der()?)
    }

    /// `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

/// Sign a message digest.
///
/// Fails with [`Error::InvalidScalar`] if the secret scalar is outside
/// `[1, n)`.
pub fn sign_prehash(
    secret_key: &PrivateKeyRecord,
    prehash: &[u8],
    rng: &mut impl CryptoRngCore,
) -> Result<Signature> {
    let curve = secret_key.curve();

    if !secret_key.is_scalar_in_range() {
        return Err(Error::InvalidScalar);
    }

    let (r, s) = curve
        .backend()
        .sign_prehash(curve, secret_key.secret_scalar(), prehash, rng)?;

    Ok(Signature::new(r, s))
}

/// Verify a signature over a message digest.
///
/// Both the low-S and high-S forms of a signature are accepted.
pub fn verify_prehash(public_key: &PublicKeyRecord, prehash: &[u8], signature: &Signature) -> bool {
    let curve = public_key.curve();
    let verified = curve.backend().verify_prehash(
        curve,
        public_key.point(),
        prehash,
        &signature.r,
        &signature.s,
    );

    if !verified {
        tracing::debug!(curve = curve.name(), "ECDSA signature did not verify");
    }

    verified
}
