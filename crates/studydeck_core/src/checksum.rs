//! Content checksums for deduplication.
//!
//! MD5 is used for fingerprinting only, never for integrity or security.

/// Lowercase hex MD5 digest of `data`.
pub fn checksum(data: impl AsRef<[u8]>) -> String {
    format!("{:x}", md5::compute(data))
}

/// 32-bit fingerprint of a field value.
///
/// Equals the first 8 hex digits of [`checksum`] over the UTF-8 bytes,
/// read as a big-endian integer.
pub fn field_checksum(text: &str) -> u32 {
    let digest = md5::compute(text.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
