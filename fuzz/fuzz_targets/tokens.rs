#![no_main]
// Targets: tls_sig::Token::decode, tls_sig::verify
use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use tls_sig::{Token, cryptop::PublicKeyRecord};

static PUBLIC_KEY: Lazy<PublicKeyRecord> = Lazy::new(|| {
    tls_sig::public_key_from_pem(include_str!("../../tls-sig/tests/examples/secp256k1-spki.pem"))
        .unwrap()
});

fuzz_target!(|data: &[u8]| {
    let Ok(token) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(decoded) = Token::decode(token) {
        let _ = decoded.canonical_message();
        let _ = decoded.is_expired_at(0);
        assert_eq!(decoded.verify(&PUBLIC_KEY), tls_sig::verify(token, &PUBLIC_KEY));
    }
});
