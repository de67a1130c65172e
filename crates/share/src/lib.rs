//! Share codec: a record becomes a URL-fragment token and back.
//!
//! Encoding is compact JSON, percent-escaped down to ASCII (component
//! style, so Arabic text survives), then base64. Decoding reverses the
//! same three steps and fails soft: any malformed token yields `None`,
//! and the caller decides what the user sees.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pardoc_record::ParRecord;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The escape set of JavaScript's `encodeURIComponent`: everything but
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes a record into a URL-fragment-safe token.
pub fn encode(record: &ParRecord) -> String {
    // Serialization of a well-formed record cannot fail; the record type
    // has no map keys or non-string-representable values.
    let json = serde_json::to_string(record).unwrap_or_default();
    let escaped = utf8_percent_encode(&json, COMPONENT).to_string();
    STANDARD.encode(escaped)
}

/// Decodes a token back into a record. Returns `None` on malformed
/// base64, malformed percent-escapes, or JSON that does not parse into a
/// record.
pub fn decode(token: &str) -> Option<ParRecord> {
    if token.is_empty() {
        return None;
    }
    let escaped = STANDARD.decode(token).ok()?;
    let escaped = String::from_utf8(escaped).ok()?;
    let json = percent_decode_str(&escaped).decode_utf8().ok()?;
    match serde_json::from_str(&json) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("share token carried unparseable record: {e}");
            None
        }
    }
}

/// `{base}/share#data={token}` — the link the user copies.
pub fn share_url(record: &ParRecord, base: &str) -> String {
    format!("{}/share#data={}", base.trim_end_matches('/'), encode(record))
}

/// Extracts and decodes the `data=` parameter from a URL fragment.
/// Accepts the fragment with or without its leading `#`.
pub fn record_from_fragment(fragment: &str) -> Option<ParRecord> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let token = fragment
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))?;
    decode(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pardoc_record::default_record;

    #[test]
    fn test_round_trip() {
        let mut record = default_record();
        record.project_name = "Network Upgrade".into();
        let decoded = decode(&encode(&record)).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_round_trip_with_arabic_text() {
        let mut record = default_record();
        record.project_name = "تحديث الشبكة".into();
        record.background = "خلفية المشروع والسياق العام".into();
        let decoded = decode(&encode(&record)).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_round_trip_with_absent_optionals() {
        let mut record = default_record();
        record.contracting_notes = None;
        record.approval_signoff = None;
        let decoded = decode(&encode(&record)).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_token_is_fragment_safe() {
        let token = encode(&default_record());
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("invalid-base64-data").is_none());
        assert!(decode("").is_none());
        assert!(decode("AAAA").is_none());
    }

    #[test]
    fn test_decode_rejects_tampered_token() {
        let mut token = encode(&default_record());
        token.truncate(token.len() / 2);
        assert!(decode(&token).is_none());
    }

    #[test]
    fn test_share_url_and_fragment_round_trip() {
        let mut record = default_record();
        record.project_name = "Network Upgrade".into();
        let url = share_url(&record, "https://example.test");
        assert!(url.starts_with("https://example.test/share#data="));
        let fragment = url.split('#').nth(1).unwrap();
        let decoded = record_from_fragment(fragment).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_fragment_without_data_parameter() {
        assert!(record_from_fragment("#lang=en").is_none());
        assert!(record_from_fragment("").is_none());
    }
}
