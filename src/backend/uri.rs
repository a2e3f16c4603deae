//! `encodeURI`-style escaping for the target website URL
//!
//! The backend expects the URL parameter to have been escaped this way
//! before the usual query-string encoding is applied on top.

use std::fmt::Write;

/// Bytes left untouched besides ASCII alphanumerics
const URI_SAFE: &[u8] = b"-_.!~*'();/?:@&=+$,#";

/// Percent-encode every byte outside the URI-safe set as `%XX` (uppercase hex)
pub fn encode_uri(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || URI_SAFE.contains(&byte) {
            encoded.push(byte as char);
        } else {
            let _ = write!(encoded, "%{:02X}", byte);
        }
    }
    encoded
}
