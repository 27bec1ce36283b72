use md5::Md5;
use sha2::{Digest, Sha256};

// Number of leading SHA-256 digest bytes kept for a short code (8 hex chars).
pub const CODE_BYTES: usize = 4;

pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(bytes);
    h.finalize().into()
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha256(bytes))
}

/// Lowercase hex MD5 of a string, for fingerprinting values. Not for anything
/// that needs collision resistance.
pub fn generate_hash(value: &str) -> String {
    let mut h = Md5::new();
    h.update(value.as_bytes());
    hex::encode(h.finalize())
}

/// Short, reproducible, uppercase code derived from `seed`.
///
/// SHA-256 of the UTF-8 seed, truncated to the first [`CODE_BYTES`] bytes,
/// hex encoded and upper-cased. Not a secret: anyone who knows the seed can
/// derive the code.
pub fn make_code(seed: &str) -> String {
    hex::encode_upper(&sha256(seed.as_bytes())[..CODE_BYTES])
}
