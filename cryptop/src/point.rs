//! Uncompressed elliptic curve points.
//!
//! Serialized according to the `Elliptic-Curve-Point-to-Octet-String`
//! algorithm described in SEC 1: Elliptic Curve Cryptography (Version 2.0)
//! section 2.3.3 (page 10):
//!
//! <https://www.secg.org/sec1-v2.pdf>
//!
//! Each coordinate is a big endian integer left-padded to the curve's field
//! size, so the encoding length is fixed per curve.

use crate::{AffinePoint, Error, NamedCurve, Result};
use der::{Tag, asn1::BitStringRef};
use num_bigint::BigUint;

/// Leading tag byte of an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Length of an uncompressed point on `curve`, including the tag byte.
pub fn uncompressed_len(curve: &NamedCurve) -> usize {
    1 + 2 * curve.field_bytes_len()
}

/// Decode an uncompressed point.
///
/// Checks the tag and length only; whether the point is on the curve is
/// the caller's concern (see [`NamedCurve::contains`]).
pub fn decode_uncompressed(curve: &NamedCurve, bytes: &[u8]) -> Result<AffinePoint> {
    let len = curve.field_bytes_len();

    match bytes.split_first() {
        Some((&UNCOMPRESSED_TAG, coordinates)) if coordinates.len() == 2 * len => {
            let (x, y) = coordinates.split_at(len);
            Ok(AffinePoint::new(
                BigUint::from_bytes_be(x),
                BigUint::from_bytes_be(y),
            ))
        }
        _ => Err(Error::MalformedEncoding(Tag::BitString.value_error())),
    }
}

/// Encode a point in uncompressed form.
///
/// Fails with [`Error::InvalidPoint`] if a coordinate does not fit in the
/// curve's field size.
pub fn encode_uncompressed(curve: &NamedCurve, point: &AffinePoint) -> Result<Vec<u8>> {
    let len = curve.field_bytes_len();
    let mut bytes = vec![0u8; uncompressed_len(curve)];
    bytes[0] = UNCOMPRESSED_TAG;

    for (chunk, coordinate) in bytes[1..]
        .chunks_exact_mut(len)
        .zip([point.x(), point.y()])
    {
        let coordinate = coordinate.to_bytes_be();

        if coordinate.len() > len {
            return Err(Error::InvalidPoint);
        }

        chunk[len - coordinate.len()..].copy_from_slice(&coordinate);
    }

    Ok(bytes)
}

/// Contents of a BIT STRING shifted right by its unused bit count, so the
/// last bit of the string becomes the least significant bit of the last byte.
pub(crate) fn right_align(bits: &BitStringRef<'_>) -> Vec<u8> {
    let bytes = bits.raw_bytes();
    let shift = u32::from(bits.unused_bits());

    if shift == 0 || bytes.is_empty() {
        return bytes.to_vec();
    }

    let mut aligned = Vec::with_capacity(bytes.len());
    aligned.push(bytes[0] >> shift);

    for pair in bytes.windows(2) {
        aligned.push((pair[0] << (8 - shift)) | (pair[1] >> shift));
    }

    aligned
}
