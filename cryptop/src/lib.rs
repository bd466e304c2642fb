#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use cryptop::{decode_pkcs8, decode_pkix, DecodedPublicKey, CurveRegistry};
//!
//! # let pkcs8_der: &[u8] = include_bytes!("../tests/examples/secp256k1-pkcs8.der");
//! # let spki_der: &[u8] = include_bytes!("../tests/examples/secp256k1-spki.der");
//! let secret_key = decode_pkcs8(pkcs8_der)?;
//! assert_eq!(secret_key.curve().name(), "secp256k1");
//!
//! match decode_pkix(spki_der)? {
//!     DecodedPublicKey::EllipticCurve(public_key) => {
//!         assert_eq!(Some(&public_key), secret_key.public_key().ok().as_ref());
//!     }
//!     DecodedPublicKey::Other(_) => unreachable!(),
//! }
//!
//! assert!(CurveRegistry::global().by_name("secp160r1").is_some());
//! # Ok::<(), cryptop::Error>(())
//! ```

pub mod arithmetic;
pub mod curves;
pub mod ecdsa;
pub mod pkcs8;
pub mod pkix;
pub mod point;
pub mod sec1;

mod error;
mod public_key;
mod secret_key;

pub use crate::{
    arithmetic::AffinePoint,
    curves::{CoefficientA, CurveRegistry, NamedCurve},
    error::{Error, Result},
    pkcs8::decode_pkcs8,
    pkix::{DecodedPublicKey, GenericKeyDecoder, NoGenericDecoder, decode_pkix, decode_pkix_with},
    public_key::PublicKeyRecord,
    sec1::decode_sec1,
    secret_key::PrivateKeyRecord,
};
pub use der::{self, asn1::ObjectIdentifier};
pub use num_bigint::BigUint;
