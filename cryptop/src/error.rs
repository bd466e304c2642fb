//! Error types

use core::fmt::{self, Display};
use der::asn1::ObjectIdentifier;

/// Result type with the `cryptop` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Key decoding and signing errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The bytes are not a well-formed instance of the expected structure:
    /// truncated input, unexpected tags, a wrong version number, trailing
    /// data or a malformed point encoding.
    MalformedEncoding(der::Error),

    /// The curve identifier is well-formed but not one of the registered
    /// named curves.
    UnsupportedCurve(ObjectIdentifier),

    /// A SEC1 private key omits its curve parameters and the caller did not
    /// supply a curve either.
    MissingCurve,

    /// The decoded coordinates do not satisfy the curve equation.
    InvalidPoint,

    /// The secret scalar is zero or not smaller than the group order.
    InvalidScalar,

    /// The key is not an elliptic curve key and no generic decoder accepted
    /// it.
    UnsupportedKeyAlgorithm(ObjectIdentifier),

    /// The signature primitive failed to produce a signature.
    Signing,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedEncoding(err) => write!(f, "malformed key encoding: {err}"),
            Error::UnsupportedCurve(oid) => write!(f, "unsupported elliptic curve: {oid}"),
            Error::MissingCurve => f.write_str("SEC1 private key does not identify its curve"),
            Error::InvalidPoint => f.write_str("invalid elliptic curve point"),
            Error::InvalidScalar => f.write_str("secret scalar out of range"),
            Error::UnsupportedKeyAlgorithm(oid) => {
                write!(f, "unsupported public key algorithm: {oid}")
            }
            Error::Signing => f.write_str("ECDSA signing failed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedEncoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::MalformedEncoding(err)
    }
}

impl From<spki::Error> for Error {
    fn from(err: spki::Error) -> Error {
        match err {
            spki::Error::Asn1(err) => Error::MalformedEncoding(err),
            spki::Error::OidUnknown { oid } => Error::UnsupportedKeyAlgorithm(oid),
            _ => Error::MalformedEncoding(der::Tag::Sequence.value_error()),
        }
    }
}
