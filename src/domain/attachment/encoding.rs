//! Transport-safe text encoding of stored attachments

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Base64-encodes `data`, keeping at most `max_chars` characters.
/// Base64 output is ASCII, so truncation never splits a character.
pub fn encode_truncated(data: &[u8], max_chars: usize) -> String {
    let mut encoded = STANDARD.encode(data);
    encoded.truncate(max_chars);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_is_untouched() {
        assert_eq!(encode_truncated(b"hello", 100), "aGVsbG8=");
    }

    #[test]
    fn test_long_input_is_truncated() {
        let data = vec![0xABu8; 30_000];
        let encoded = encode_truncated(&data, 10_000);

        assert_eq!(encoded.len(), 10_000);
        assert!(STANDARD.encode(&data).starts_with(&encoded));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode_truncated(&[], 10), "");
    }
}
