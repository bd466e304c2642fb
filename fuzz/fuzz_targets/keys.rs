#![no_main]
// Targets: decode_sec1, decode_pkcs8, decode_pkix, ecdsa::Signature::from_der
use cryptop::{CurveRegistry, decode_pkcs8, decode_pkix, decode_sec1, ecdsa::Signature};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, der)) = data.split_first() else {
        return;
    };

    let default_curve = CurveRegistry::global().iter().nth(usize::from(selector & 3));

    for key in [decode_sec1(der, default_curve), decode_pkcs8(der)]
        .into_iter()
        .flatten()
    {
        let _ = key.to_bytes();

        // out of range scalars and off-curve embedded points are errors here
        if let Ok(public_key) = key.public_key() {
            assert!(public_key.curve().contains(public_key.point()));
        }
    }

    if let Ok(public_key) = decode_pkix(der) {
        let public_key = public_key.into_elliptic_curve().unwrap();
        let encoded = public_key.to_uncompressed();
        assert_eq!(
            cryptop::PublicKeyRecord::from_uncompressed(public_key.curve(), &encoded).unwrap(),
            public_key
        );
    }

    if let Ok(signature) = Signature::from_der(der) {
        assert_eq!(Signature::from_der(&signature.to_der().unwrap()).unwrap(), signature);
    }
});
