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
//! use tls_sig::{SignatureFields, Token, cryptop};
//! use rand_core::OsRng;
//!
//! # let pkcs8_der: &[u8] = include_bytes!("../tests/examples/secp256k1-pkcs8.der");
//! # let spki_der: &[u8] = include_bytes!("../tests/examples/secp256k1-spki.der");
//! let secret_key = cryptop::decode_pkcs8(pkcs8_der)?;
//! let public_key = secret_key.public_key()?;
//!
//! let fields = SignatureFields {
//!     account_type: "1234".into(),
//!     identifier: "alice".into(),
//!     appid_at_3rd: "1234".into(),
//!     sdk_appid: "1400000955".into(),
//!     version: "201512300000".into(),
//!     time: 1_700_000_000,
//!     expire_after: 86_400,
//! };
//!
//! let token = tls_sig::generate(&fields, &secret_key, &mut OsRng)?;
//! assert!(tls_sig::verify(&token, &public_key)?);
//!
//! // expiry is the caller's responsibility
//! let decoded = Token::decode(&token)?;
//! assert!(!decoded.is_expired_at(1_700_000_000));
//! assert!(decoded.is_expired_at(1_700_086_400));
//! # Ok::<(), tls_sig::Error>(())
//! ```

pub mod fields;

mod error;
#[cfg(feature = "pem")]
mod pem;
mod token;

pub use crate::{
    error::{Error, Result},
    fields::{SignatureFields, canonical_message},
    token::{DEFAULT_COMPRESSION_LEVEL, MAX_DOCUMENT_LEN, Token, TokenEncoder, generate, verify},
};
pub use cryptop;
pub use flate2::Compression;

#[cfg(feature = "pem")]
pub use crate::pem::{
    PKCS8_LABEL, PUBLIC_KEY_LABEL, SEC1_LABEL, TlsSignature, private_key_from_pem,
    public_key_from_pem,
};
