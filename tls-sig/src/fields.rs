//! Token fields and the canonical message signed over them.

use std::collections::BTreeMap;

/// Third-party application identifier.
pub const APPID_AT_3RD: &str = "TLS.appid_at_3rd";

/// Account type.
pub const ACCOUNT_TYPE: &str = "TLS.account_type";

/// User identifier.
pub const IDENTIFIER: &str = "TLS.identifier";

/// SDK application identifier.
pub const SDK_APPID: &str = "TLS.sdk_appid";

/// Issue time, in seconds since the Unix epoch.
pub const TIME: &str = "TLS.time";

/// Lifetime in seconds, counted from [`TIME`].
pub const EXPIRE_AFTER: &str = "TLS.expire_after";

/// Token format version. Carried in the document but not signed.
pub const VERSION: &str = "TLS.version";

/// Base64 encoded DER signature.
pub const SIG: &str = "TLS.sig";

/// Fields covered by the signature, in signing order.
pub const SIGNED_FIELDS: [&str; 6] = [
    APPID_AT_3RD,
    ACCOUNT_TYPE,
    IDENTIFIER,
    SDK_APPID,
    TIME,
    EXPIRE_AFTER,
];

/// Values of a token before signing.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SignatureFields {
    /// Account type.
    pub account_type: String,

    /// User identifier.
    pub identifier: String,

    /// Third-party application identifier.
    pub appid_at_3rd: String,

    /// SDK application identifier.
    pub sdk_appid: String,

    /// Token format version.
    pub version: String,

    /// Issue time, in seconds since the Unix epoch.
    pub time: u64,

    /// Lifetime in seconds.
    pub expire_after: u64,
}

impl SignatureFields {
    /// Document entries for these fields, keyed by their `TLS.*` names.
    pub fn to_document(&self) -> BTreeMap<String, String> {
        [
            (ACCOUNT_TYPE, self.account_type.clone()),
            (IDENTIFIER, self.identifier.clone()),
            (APPID_AT_3RD, self.appid_at_3rd.clone()),
            (SDK_APPID, self.sdk_appid.clone()),
            (EXPIRE_AFTER, self.expire_after.to_string()),
            (VERSION, self.version.clone()),
            (TIME, self.time.to_string()),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
    }

    /// Message signed for these fields.
    pub fn canonical_message(&self) -> String {
        canonical_message(&self.to_document())
    }

    /// Time at which a token with these fields expires, or `None` on
    /// overflow.
    pub fn expires_at(&self) -> Option<u64> {
        self.time.checked_add(self.expire_after)
    }
}

/// Render the signed fields of a document as one `TLS.<name>:<value>\n`
/// line each, in [`SIGNED_FIELDS`] order.
///
/// Absent fields render with an empty value. Other entries, including
/// [`VERSION`] and [`SIG`], are ignored.
pub fn canonical_message(document: &BTreeMap<String, String>) -> String {
    let mut message = String::new();

    for name in SIGNED_FIELDS {
        let value = document.get(name).map(String::as_str).unwrap_or_default();
        message.push_str(name);
        message.push(':');
        message.push_str(value);
        message.push('\n');
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> SignatureFields {
        SignatureFields {
            account_type: "1234".into(),
            identifier: "xiaojun".into(),
            appid_at_3rd: "1234".into(),
            sdk_appid: "1400000955".into(),
            version: "201512300000".into(),
            time: 1_500_000_000,
            expire_after: 2_592_000,
        }
    }

    #[test]
    fn canonical_message_template() {
        assert_eq!(
            fields().canonical_message(),
            "TLS.appid_at_3rd:1234\n\
             TLS.account_type:1234\n\
             TLS.identifier:xiaojun\n\
             TLS.sdk_appid:1400000955\n\
             TLS.time:1500000000\n\
             TLS.expire_after:2592000\n"
        );
    }

    #[test]
    fn ignores_unsigned_entries() {
        let mut document = fields().to_document();
        let message = canonical_message(&document);

        document.insert(VERSION.into(), "other".into());
        document.insert(SIG.into(), "MAYCAQECAQE=".into());
        document.insert("TLS.extra".into(), "x".into());
        assert_eq!(canonical_message(&document), message);
    }

    #[test]
    fn missing_entries_render_empty() {
        let mut document = fields().to_document();
        document.remove(IDENTIFIER);

        let message = canonical_message(&document);
        assert!(message.contains("\nTLS.identifier:\nTLS.sdk_appid:"));
    }

    #[test]
    fn document_has_seven_entries() {
        let document = fields().to_document();
        assert_eq!(document.len(), 7);
        assert_eq!(document[TIME], "1500000000");
        assert_eq!(document[EXPIRE_AFTER], "2592000");
        assert_eq!(document[VERSION], "201512300000");
    }

    #[test]
    fn expiry_overflow() {
        let fields = SignatureFields {
            time: u64::MAX,
            expire_after: 1,
            ..fields()
        };
        assert_eq!(fields.expires_at(), None);
    }
}
