//! PEM-level API tests

#![cfg(all(feature = "pem", feature = "getrandom"))]

use tls_sig::{
    Error, SignatureFields, TlsSignature, TokenEncoder, Compression, cryptop,
    private_key_from_pem, public_key_from_pem,
};

const PKCS8_PEM: &str = include_str!("examples/secp256k1-pkcs8.pem");
const SEC1_PEM: &str = include_str!("examples/secp256k1-sec1.pem");
const SPKI_PEM: &str = include_str!("examples/secp256k1-spki.pem");
const P256_SPKI: &[u8] = include_bytes!("examples/p256-spki.der");

fn signer() -> TlsSignature {
    TlsSignature::new(SignatureFields {
        account_type: "1234".into(),
        identifier: "xiaojun".into(),
        sdk_appid: "1400000955".into(),
        time: 1_500_000_000,
        expire_after: 3600 * 30 * 24,
        ..Default::default()
    })
}

#[test]
fn generate_and_check() {
    let token = signer().generate(PKCS8_PEM).unwrap();
    assert_eq!(TlsSignature::check(&token, SPKI_PEM), Ok(true));
}

#[test]
fn sec1_private_key() {
    let token = signer().generate(SEC1_PEM).unwrap();
    assert_eq!(TlsSignature::check(&token, SPKI_PEM), Ok(true));

    assert_eq!(
        private_key_from_pem(SEC1_PEM).unwrap().secret_scalar(),
        private_key_from_pem(PKCS8_PEM).unwrap().secret_scalar()
    );
}

#[test]
fn custom_encoder() {
    let token = signer()
        .with_encoder(TokenEncoder::new(Compression::best()))
        .generate(PKCS8_PEM)
        .unwrap();
    assert_eq!(TlsSignature::check(&token, SPKI_PEM), Ok(true));
}

#[test]
fn public_key_matches_private_key() {
    let secret_key = private_key_from_pem(PKCS8_PEM).unwrap();
    let public_key = public_key_from_pem(SPKI_PEM).unwrap();
    assert_eq!(secret_key.derive_public_key().unwrap(), public_key);
}

#[test]
fn wrong_labels() {
    assert_eq!(private_key_from_pem(SPKI_PEM).err(), Some(Error::Pem));
    assert_eq!(public_key_from_pem(PKCS8_PEM).err(), Some(Error::Pem));
    assert_eq!(signer().generate(SPKI_PEM).err(), Some(Error::Pem));
}

#[test]
fn not_pem() {
    assert_eq!(private_key_from_pem("").err(), Some(Error::Pem));
    assert_eq!(public_key_from_pem("MFYwEAYHKoZIzj0CAQYF").err(), Some(Error::Pem));
}

#[test]
fn unsupported_public_key_curve() {
    let pem = pem_from_der("PUBLIC KEY", P256_SPKI);
    assert!(matches!(
        public_key_from_pem(&pem),
        Err(Error::Key(cryptop::Error::UnsupportedCurve(_)))
    ));
}

fn pem_from_der(label: &str, der: &[u8]) -> String {
    use base64::{Engine, engine::general_purpose::STANDARD};

    let body = STANDARD.encode(der);
    let mut pem = format!("-----BEGIN {label}-----\n");
    for line in body.as_bytes().chunks(64) {
        pem.push_str(core::str::from_utf8(line).unwrap());
        pem.push('\n');
    }
    pem.push_str(&format!("-----END {label}-----\n"));
    pem
}
