//! secp256k1 arithmetic and ECDSA provided by the [`k256`] crate.

use super::AffinePoint;
use crate::{Error, Result, curves::NamedCurve, point};
use k256::{
    FieldBytes,
    ecdsa::{
        Signature, SigningKey, VerifyingKey,
        signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner},
    },
};
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

pub(crate) fn is_on_curve(curve: &NamedCurve, point: &AffinePoint) -> bool {
    match point::encode_uncompressed(curve, point) {
        Ok(bytes) => k256::PublicKey::from_sec1_bytes(&bytes).is_ok(),
        Err(_) => false,
    }
}

pub(crate) fn mul_base(curve: &NamedCurve, d: &BigUint) -> Result<AffinePoint> {
    let encoded = signing_key(d)?.verifying_key().to_encoded_point(false);
    point::decode_uncompressed(curve, encoded.as_bytes())
}

pub(crate) fn sign_prehash(
    d: &BigUint,
    prehash: &[u8],
    rng: &mut impl CryptoRngCore,
) -> Result<(BigUint, BigUint)> {
    let signature: Signature = signing_key(d)?
        .sign_prehash_with_rng(rng, prehash)
        .map_err(|_| Error::Signing)?;

    let (r, s) = signature.split_bytes();
    Ok((BigUint::from_bytes_be(&r), BigUint::from_bytes_be(&s)))
}

/// Verify an ECDSA signature.
///
/// Signatures whose `s` lies in the upper half of the scalar field are
/// normalized before verification, as `k256` only accepts low-S signatures
/// while other platforms emit either form.
pub(crate) fn verify_prehash(
    curve: &NamedCurve,
    q: &AffinePoint,
    prehash: &[u8],
    r: &BigUint,
    s: &BigUint,
) -> bool {
    let Ok(encoded) = point::encode_uncompressed(curve, q) else {
        return false;
    };

    let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(&encoded) else {
        return false;
    };

    let (Some(r), Some(s)) = (field_bytes(r), field_bytes(s)) else {
        return false;
    };

    let Ok(signature) = Signature::from_scalars(r, s) else {
        return false;
    };

    let signature = signature.normalize_s().unwrap_or(signature);
    verifying_key.verify_prehash(prehash, &signature).is_ok()
}

fn signing_key(d: &BigUint) -> Result<SigningKey> {
    let bytes = field_bytes(d).ok_or(Error::InvalidScalar)?;
    SigningKey::from_bytes(&bytes).map_err(|_| Error::InvalidScalar)
}

/// Serialize an integer as a left-padded 32-byte big endian value.
fn field_bytes(value: &BigUint) -> Option<FieldBytes> {
    let bytes = value.to_bytes_be();

    if bytes.len() > 32 {
        return None;
    }

    let mut out = FieldBytes::default();
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    Some(out)
}
