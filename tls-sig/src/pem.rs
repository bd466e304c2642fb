//! PEM-encoded keys and the [`TlsSignature`] convenience type.

use crate::{Error, Result, SignatureFields, TokenEncoder, token};
use cryptop::{PrivateKeyRecord, PublicKeyRecord, decode_pkcs8, decode_pkix, decode_sec1};
use rand_core::CryptoRngCore;

/// Label of a PKCS#8 private key.
pub const PKCS8_LABEL: &str = "PRIVATE KEY";

/// Label of a SEC1 private key.
pub const SEC1_LABEL: &str = "EC PRIVATE KEY";

/// Label of a `SubjectPublicKeyInfo`.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Decode a PEM-encoded PKCS#8 or SEC1 private key.
///
/// SEC1 keys must carry their curve parameters.
pub fn private_key_from_pem(pem: &str) -> Result<PrivateKeyRecord> {
    let (label, der) = decode(pem)?;

    match label {
        PKCS8_LABEL => Ok(decode_pkcs8(&der)?),
        SEC1_LABEL => Ok(decode_sec1(&der, None)?),
        _ => {
            tracing::debug!(label, "unexpected PEM label for a private key");
            Err(Error::Pem)
        }
    }
}

/// Decode a PEM-encoded elliptic curve public key.
pub fn public_key_from_pem(pem: &str) -> Result<PublicKeyRecord> {
    let (label, der) = decode(pem)?;

    if label != PUBLIC_KEY_LABEL {
        tracing::debug!(label, "unexpected PEM label for a public key");
        return Err(Error::Pem);
    }

    match decode_pkix(&der)? {
        cryptop::DecodedPublicKey::EllipticCurve(key) => Ok(key),
        cryptop::DecodedPublicKey::Other(never) => match never {},
    }
}

fn decode(pem: &str) -> Result<(&str, Vec<u8>)> {
    pem_rfc7468::decode_vec(pem.trim().as_bytes()).map_err(|err| {
        tracing::debug!(%err, "PEM decoding failed");
        Error::Pem
    })
}

/// Token fields together with the means to sign and check them using
/// PEM-encoded keys.
///
/// ```
/// use tls_sig::{SignatureFields, TlsSignature};
///
/// # let private_key = include_str!("../tests/examples/secp256k1-pkcs8.pem");
/// # let public_key = include_str!("../tests/examples/secp256k1-spki.pem");
/// let signature = TlsSignature::new(SignatureFields {
///     account_type: "1234".into(),
///     identifier: "xiaojun".into(),
///     sdk_appid: "1400000955".into(),
///     time: 1_500_000_000,
///     expire_after: 30 * 24 * 3600,
///     ..Default::default()
/// });
///
/// let token = signature.generate(private_key)?;
/// assert!(TlsSignature::check(&token, public_key)?);
/// # Ok::<(), tls_sig::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TlsSignature {
    fields: SignatureFields,
    encoder: TokenEncoder,
}

impl TlsSignature {
    /// Create a signer for `fields`.
    pub fn new(fields: SignatureFields) -> Self {
        Self {
            fields,
            encoder: TokenEncoder::default(),
        }
    }

    /// Use `encoder` to produce tokens.
    pub fn with_encoder(mut self, encoder: TokenEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Fields signed by this signer.
    pub fn fields(&self) -> &SignatureFields {
        &self.fields
    }

    /// Generate a token signed with a PEM-encoded private key, using the
    /// operating system's random number generator.
    #[cfg(feature = "getrandom")]
    pub fn generate(&self, private_key_pem: &str) -> Result<String> {
        self.generate_with_rng(private_key_pem, &mut rand_core::OsRng)
    }

    /// Generate a token signed with a PEM-encoded private key.
    pub fn generate_with_rng(
        &self,
        private_key_pem: &str,
        rng: &mut impl CryptoRngCore,
    ) -> Result<String> {
        let secret_key = private_key_from_pem(private_key_pem)?;
        self.encoder.generate(&self.fields, &secret_key, rng)
    }

    /// Verify a token against a PEM-encoded public key.
    ///
    /// Like [`verify`](crate::verify), this does not check expiry.
    pub fn check(token: &str, public_key_pem: &str) -> Result<bool> {
        token::verify(token, &public_key_from_pem(public_key_pem)?)
    }
}
