//! Conversions between UTF-8 text and the codepoint sequences the metrics
//! operate on. The core itself never transcodes; these helpers sit at the
//! boundary.

/// Decodes a string into a sequence of codepoints.
///
/// ```
/// use seqsim::codepoints;
///
/// assert_eq!(vec!['a', 'ö', '香'], codepoints::from_str("aö香"));
/// ```
pub fn from_str(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Decodes raw bytes into a sequence of codepoints, replacing invalid
/// UTF-8 with U+FFFD.
pub fn from_bytes_lossy(bytes: &[u8]) -> Vec<char> {
    String::from_utf8_lossy(bytes).chars().collect()
}

/// Encodes a sequence of codepoints back into a string.
pub fn to_string(seq: &[char]) -> String {
    seq.iter().collect()
}
