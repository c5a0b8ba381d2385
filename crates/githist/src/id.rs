//! Opaque, content-derived commit identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of a raw commit identifier in bytes.
pub const RAW_LEN: usize = 20;

/// A commit identifier: a fixed-width hash value with structural equality.
///
/// `CommitId` is a plain value — `Copy`, byte-wise `Eq`/`Hash`/`Ord` — so it
/// can serve directly as a graph node and map key. It carries no reference to
/// any repository; resolving an id back to commit content is the backend's
/// job.
///
/// Serializes as a 40-character lowercase hex string.
///
/// # Examples
///
/// ```
/// use githist::CommitId;
///
/// let id: CommitId = "0123456789abcdef0123456789abcdef01234567".parse().unwrap();
/// assert_eq!(id.to_string(), "0123456789abcdef0123456789abcdef01234567");
/// assert_eq!(id.short(), "01234567");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId([u8; RAW_LEN]);

impl CommitId {
    /// Wrap a raw hash value.
    pub fn from_bytes(raw: [u8; RAW_LEN]) -> Self {
        Self(raw)
    }

    /// The raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.0
    }

    /// Full lowercase hex form (40 characters).
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(RAW_LEN * 2);
        for byte in self.0 {
            hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            hex.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
        }
        hex
    }

    /// Abbreviated 8-character hex form, for labels and log lines.
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(8);
        hex
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitId({})", self.to_hex())
    }
}

/// Error parsing a hex string into a [`CommitId`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected 40 hexadecimal characters, got {0:?}")]
pub struct ParseCommitIdError(String);

impl FromStr for CommitId {
    type Err = ParseCommitIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != RAW_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseCommitIdError(s.to_string()));
        }
        let mut raw = [0u8; RAW_LEN];
        for (i, pair) in s.as_bytes().chunks_exact(2).enumerate() {
            raw[i] = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }
        Ok(Self(raw))
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

impl Serialize for CommitId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CommitId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let hex = "0123456789abcdef0123456789abcdef01234567";
        let id: CommitId = hex.parse().unwrap();
        assert_eq!(id.to_hex(), hex);
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let id: CommitId = "ABCDEF0123456789abcdef0123456789abcdef01".parse().unwrap();
        assert_eq!(id.to_hex(), "abcdef0123456789abcdef0123456789abcdef01");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!("abc123".parse::<CommitId>().is_err());
        assert!(
            "0123456789abcdef0123456789abcdef012345678"
                .parse::<CommitId>()
                .is_err()
        );
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(
            "g123456789abcdef0123456789abcdef01234567"
                .parse::<CommitId>()
                .is_err()
        );
    }

    #[test]
    fn test_structural_equality() {
        let a = CommitId::from_bytes([0x42; RAW_LEN]);
        let b = CommitId::from_bytes([0x42; RAW_LEN]);
        let c = CommitId::from_bytes([0x43; RAW_LEN]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_short_is_prefix() {
        let id = CommitId::from_bytes([0xab; RAW_LEN]);
        assert_eq!(id.short(), "abababab");
        assert!(id.to_hex().starts_with(&id.short()));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let id = CommitId::from_bytes([0x01; RAW_LEN]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0101010101010101010101010101010101010101\"");
        let back: CommitId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
