//! Error types

use core::fmt::{self, Display};

/// Result type with the `tls-sig` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Token generation and decoding errors.
///
/// A signature which is well-formed but does not verify is not an error:
/// verification returns `Ok(false)` for it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Key decoding or signing failed.
    Key(cryptop::Error),

    /// The token is not valid base64 once the URL-safe substitutions are
    /// undone.
    Base64,

    /// The decoded bytes are not a valid zlib stream, or they inflate to
    /// more than [`MAX_DOCUMENT_LEN`](crate::MAX_DOCUMENT_LEN) bytes.
    Compression,

    /// The decompressed document is not a JSON object of string values.
    Document,

    /// The document has no `TLS.sig` field.
    MissingSignature,

    /// The `TLS.sig` field is not a base64 encoded DER `SEQUENCE` of two
    /// non-negative integers.
    MalformedSignature,

    /// PEM framing error, or a PEM label other than the expected ones.
    Pem,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Key(err) => write!(f, "key error: {err}"),
            Error::Base64 => f.write_str("token is not valid base64"),
            Error::Compression => f.write_str("token is not a valid zlib stream"),
            Error::Document => f.write_str("token document is not a JSON object of strings"),
            Error::MissingSignature => f.write_str("token has no signature field"),
            Error::MalformedSignature => f.write_str("malformed token signature"),
            Error::Pem => f.write_str("PEM decoding error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Key(err) => Some(err),
            _ => None,
        }
    }
}

impl From<cryptop::Error> for Error {
    fn from(err: cryptop::Error) -> Error {
        Error::Key(err)
    }
}
