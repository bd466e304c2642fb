//! Token encoding, decoding, signing and verification.
//!
//! A token is produced as follows:
//!
//! 1. SHA-256 of the [canonical message](crate::canonical_message).
//! 2. ECDSA signature of the digest, DER encoded, base64 encoded and stored
//!    as [`SIG`] alongside the other fields.
//! 3. The fields serialized as a compact JSON object.
//! 4. zlib compression, base64 encoding, then the substitutions `+` → `*`,
//!    `/` → `-` and `=` → `_`.
//!
//! Verification undoes these steps. It does **not** check expiry; see
//! [`Token::is_expired_at`].

use crate::{
    Error, Result,
    fields::{self, EXPIRE_AFTER, SIG, SignatureFields, TIME},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use cryptop::{PrivateKeyRecord, PublicKeyRecord, ecdsa};
use flate2::{Compression, read::ZlibDecoder, write::ZlibEncoder};
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};
use std::{
    collections::BTreeMap,
    io::{Read, Write},
};

/// zlib compression level used by [`TokenEncoder::default`].
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Largest decompressed document [`Token::decode`] accepts, in bytes.
pub const MAX_DOCUMENT_LEN: usize = 64 * 1024;

/// Generates tokens.
#[derive(Copy, Clone, Debug)]
pub struct TokenEncoder {
    level: Compression,
}

impl TokenEncoder {
    /// Create an encoder compressing at the given level.
    ///
    /// Decoding does not depend on the level.
    pub fn new(level: Compression) -> Self {
        Self { level }
    }

    /// Compression level.
    pub fn level(&self) -> Compression {
        self.level
    }

    /// Sign `fields` with `secret_key` and encode the result as a token.
    pub fn generate(
        &self,
        fields: &SignatureFields,
        secret_key: &PrivateKeyRecord,
        rng: &mut impl CryptoRngCore,
    ) -> Result<String> {
        let mut document = fields.to_document();
        let prehash = Sha256::digest(fields::canonical_message(&document));
        let signature = ecdsa::sign_prehash(secret_key, &prehash, rng)?;

        document.insert(SIG.to_owned(), STANDARD.encode(signature.to_der()?));
        self.encode(&document)
    }

    /// Encode a document as a token without signing it.
    pub fn encode(&self, document: &BTreeMap<String, String>) -> Result<String> {
        let json = serde_json::to_vec(document).map_err(|_| Error::Document)?;

        let mut encoder = ZlibEncoder::new(Vec::new(), self.level);
        encoder.write_all(&json).map_err(|_| Error::Compression)?;
        let compressed = encoder.finish().map_err(|_| Error::Compression)?;

        tracing::trace!(
            document_len = json.len(),
            compressed_len = compressed.len(),
            "encoded token"
        );

        Ok(escape(&STANDARD.encode(compressed)))
    }
}

impl Default for TokenEncoder {
    fn default() -> Self {
        Self::new(Compression::new(DEFAULT_COMPRESSION_LEVEL))
    }
}

/// Decoded token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    document: BTreeMap<String, String>,
}

impl Token {
    /// Decode a token without verifying it.
    ///
    /// Documents which inflate to more than [`MAX_DOCUMENT_LEN`] bytes are
    /// rejected with [`Error::Compression`].
    pub fn decode(token: &str) -> Result<Self> {
        let compressed = STANDARD.decode(unescape(token)).map_err(|err| {
            tracing::debug!(%err, "token is not valid base64");
            Error::Base64
        })?;

        let mut json = Vec::new();
        ZlibDecoder::new(compressed.as_slice())
            .take(MAX_DOCUMENT_LEN as u64 + 1)
            .read_to_end(&mut json)
            .map_err(|err| {
                tracing::debug!(%err, "token is not a valid zlib stream");
                Error::Compression
            })?;

        if json.len() > MAX_DOCUMENT_LEN {
            tracing::debug!(
                compressed_len = compressed.len(),
                max = MAX_DOCUMENT_LEN,
                "token document is too large"
            );
            return Err(Error::Compression);
        }

        let document = serde_json::from_slice(&json).map_err(|err| {
            tracing::debug!(%err, "token document is not a JSON object of strings");
            Error::Document
        })?;

        tracing::trace!(
            compressed_len = compressed.len(),
            document_len = json.len(),
            "decoded token"
        );

        Ok(Self { document })
    }

    /// All document entries, including [`SIG`].
    pub fn document(&self) -> &BTreeMap<String, String> {
        &self.document
    }

    /// Value of the field `name`, e.g. [`fields::IDENTIFIER`].
    pub fn get(&self, name: &str) -> Option<&str> {
        self.document.get(name).map(String::as_str)
    }

    /// Message the signature is expected to cover.
    pub fn canonical_message(&self) -> String {
        fields::canonical_message(&self.document)
    }

    /// Stored signature.
    pub fn signature(&self) -> Result<ecdsa::Signature> {
        let encoded = self.get(SIG).ok_or(Error::MissingSignature)?;
        let der = STANDARD
            .decode(encoded)
            .map_err(|_| Error::MalformedSignature)?;
        ecdsa::Signature::from_der(&der).map_err(|_| Error::MalformedSignature)
    }

    /// Verify the stored signature against `public_key`.
    pub fn verify(&self, public_key: &PublicKeyRecord) -> Result<bool> {
        let signature = self.signature()?;
        let prehash = Sha256::digest(self.canonical_message());
        Ok(ecdsa::verify_prehash(public_key, &prehash, &signature))
    }

    /// Issue time, if present and numeric.
    pub fn time(&self) -> Option<u64> {
        self.get(TIME)?.parse().ok()
    }

    /// Lifetime in seconds, if present and numeric.
    pub fn expire_after(&self) -> Option<u64> {
        self.get(EXPIRE_AFTER)?.parse().ok()
    }

    /// Time at which the token expires.
    pub fn expires_at(&self) -> Option<u64> {
        self.time()?.checked_add(self.expire_after()?)
    }

    /// Is the token expired at `now` (seconds since the Unix epoch)?
    ///
    /// Tokens whose expiry cannot be computed count as expired.
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.expires_at().is_none_or(|expires_at| now >= expires_at)
    }
}

/// Sign `fields` and encode them as a token with the default compression
/// level.
pub fn generate(
    fields: &SignatureFields,
    secret_key: &PrivateKeyRecord,
    rng: &mut impl CryptoRngCore,
) -> Result<String> {
    TokenEncoder::default().generate(fields, secret_key, rng)
}

/// Decode `token` and verify its signature against `public_key`.
///
/// Returns `Ok(false)` for a well-formed token whose signature does not
/// verify, and an error if the token cannot be decoded.
pub fn verify(token: &str, public_key: &PublicKeyRecord) -> Result<bool> {
    Token::decode(token)?.verify(public_key)
}

/// Replace the base64 characters which need escaping in URLs.
fn escape(base64: &str) -> String {
    base64
        .chars()
        .map(|c| match c {
            '+' => '*',
            '/' => '-',
            '=' => '_',
            c => c,
        })
        .collect()
}

fn unescape(token: &str) -> String {
    token
        .chars()
        .map(|c| match c {
            '*' => '+',
            '-' => '/',
            '_' => '=',
            c => c,
        })
        .collect()
}
