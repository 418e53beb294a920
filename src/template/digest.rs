//! Content digests for `[hash]` / `[contenthash]` tokens.
//!
//! Two hash functions are available:
//! - `blake3` (default): cryptographic, 256-bit
//! - `fxhash`: `rustc_hash::FxHasher`, 64-bit, fast but weak
//!
//! Digests are rendered as lowercase hex or with one of the fixed `baseN`
//! alphabets.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use super::TemplateError;

/// Digest length used when a token does not specify one.
pub const DEFAULT_DIGEST_LENGTH: usize = 20;

/// Hash function selected by the `<hashType>:` prefix of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashType {
    #[default]
    Blake3,
    FxHash,
}

impl HashType {
    pub fn parse(name: &str) -> Result<Self, TemplateError> {
        match name.to_ascii_lowercase().as_str() {
            "blake3" => Ok(Self::Blake3),
            "fxhash" => Ok(Self::FxHash),
            _ => Err(TemplateError::UnknownHashType(name.to_string())),
        }
    }

    /// Raw digest bytes of `content`.
    pub fn digest(self, content: &[u8]) -> Vec<u8> {
        match self {
            Self::Blake3 => blake3::hash(content).as_bytes().to_vec(),
            Self::FxHash => {
                let mut hasher = FxHasher::default();
                hasher.write(content);
                hasher.finish().to_be_bytes().to_vec()
            }
        }
    }
}

const BASE26: &str = "abcdefghijklmnopqrstuvwxyz";
const BASE32: &str = "123456789abcdefghjkmnpqrstuvwxyz";
const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const BASE49: &str = "abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
const BASE52: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE58: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
const BASE62: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE64: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

/// Text encoding of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestEncoding {
    #[default]
    Hex,
    /// Positional encoding with a fixed alphabet (`base26` .. `base64`).
    Base(&'static str),
}

impl DigestEncoding {
    pub fn parse(name: &str) -> Result<Self, TemplateError> {
        let alphabet = match name.to_ascii_lowercase().as_str() {
            "hex" => return Ok(Self::Hex),
            "base26" => BASE26,
            "base32" => BASE32,
            "base36" => BASE36,
            "base49" => BASE49,
            "base52" => BASE52,
            "base58" => BASE58,
            "base62" => BASE62,
            "base64" => BASE64,
            _ => return Err(TemplateError::UnknownDigest(name.to_string())),
        };
        Ok(Self::Base(alphabet))
    }

    pub fn encode(self, digest: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(digest),
            Self::Base(alphabet) => encode_base(digest, alphabet.as_bytes()),
        }
    }
}

/// Encode `bytes` (read as a little-endian integer) with `alphabet`.
///
/// Most significant digit first; zero encodes to an empty string.
fn encode_base(bytes: &[u8], alphabet: &[u8]) -> String {
    let base = alphabet.len() as u32;
    // big-endian working copy, divided in place
    let mut number: Vec<u8> = bytes.iter().rev().copied().collect();
    let mut digits = Vec::new();

    while number.iter().any(|&b| b != 0) {
        let mut remainder = 0u32;
        for byte in &mut number {
            let acc = (remainder << 8) | u32::from(*byte);
            *byte = (acc / base) as u8;
            remainder = acc % base;
        }
        digits.push(alphabet[remainder as usize]);
    }

    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Hash `content` and render the digest, truncated to `length` chars.
pub fn content_digest(
    content: &[u8],
    hash: HashType,
    encoding: DigestEncoding,
    length: usize,
) -> String {
    let mut encoded = encoding.encode(&hash.digest(content));
    // every alphabet is ASCII
    encoded.truncate(length);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_type_parse() {
        assert_eq!(HashType::parse("blake3").unwrap(), HashType::Blake3);
        assert_eq!(HashType::parse("FxHash").unwrap(), HashType::FxHash);
        assert!(matches!(
            HashType::parse("md4"),
            Err(TemplateError::UnknownHashType(name)) if name == "md4"
        ));
    }

    #[test]
    fn test_digest_encoding_parse() {
        assert_eq!(DigestEncoding::parse("hex").unwrap(), DigestEncoding::Hex);
        assert!(matches!(
            DigestEncoding::parse("base62").unwrap(),
            DigestEncoding::Base(_)
        ));
        assert!(DigestEncoding::parse("base7").is_err());
    }

    #[test]
    fn test_blake3_hex_matches_reference() {
        let digest = content_digest(b"hello", HashType::Blake3, DigestEncoding::Hex, 64);
        assert_eq!(digest, blake3::hash(b"hello").to_hex().to_string());
    }

    #[test]
    fn test_digest_truncation() {
        let digest = content_digest(b"hello", HashType::Blake3, DigestEncoding::Hex, 8);
        assert_eq!(digest.len(), 8);
    }

    #[test]
    fn test_fxhash_is_16_hex_chars() {
        let digest = content_digest(b"hello", HashType::FxHash, DigestEncoding::Hex, 64);
        assert_eq!(digest.len(), 16);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_encode_base_little_endian() {
        // 0x0100 little-endian = 1, 0x0001 little-endian = 256
        assert_eq!(encode_base(&[1, 0], BASE36.as_bytes()), "1");
        assert_eq!(encode_base(&[0, 1], BASE36.as_bytes()), "74");
        assert_eq!(encode_base(&[0, 0], BASE36.as_bytes()), "");
    }

    #[test]
    fn test_base_alphabet_only() {
        let digest = content_digest(b"logo", HashType::Blake3, DigestEncoding::parse("base26").unwrap(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_lowercase()));
    }
}
