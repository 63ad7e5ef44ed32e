//! Supported hash algorithms.
use crate::{md5, sha1, sha256, sha512};
use std::{fmt, str::FromStr};

/// Error returned when parsing an unknown [`HashKind`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hash kind {0:?}, expected one of md5, sha1, sha256, sha512")]
pub struct ParseHashKindError(pub String);

/// Hash algorithm of a fake hash.
/// Serialized as [`HashKind::name`], deserialized with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashKind {
    /// MD5, 32 hex chars.
    Md5,
    /// SHA-1, 40 hex chars.
    Sha1,
    /// SHA-256, 64 hex chars.
    Sha256,
    /// SHA-512, 128 hex chars.
    Sha512,
}

impl HashKind {
    /// All kinds, from the shortest digest to the longest.
    pub const ALL: [HashKind; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Length of the random filler text hashed for this kind.
    ///
    /// Each length is the smallest one which still keeps repeated fake
    /// hashes distinct in practice; longer inputs only cost more time.
    pub fn min_chars(self) -> usize {
        match self {
            Self::Md5 => md5::MIN_CHARS,
            Self::Sha1 => sha1::MIN_CHARS,
            Self::Sha256 => sha256::MIN_CHARS,
            Self::Sha512 => sha512::MIN_CHARS,
        }
    }

    /// Length of the digest in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex rendering of the digest.
    pub fn hex_len(self) -> usize {
        2 * self.digest_len()
    }

    /// Hex digest of `msg`.
    #[cfg(test)]
    pub(crate) fn hex_digest(self, msg: &[u8]) -> String {
        match self {
            Self::Md5 => md5::Md5::new(msg).to_string(),
            Self::Sha1 => sha1::Sha1::new(msg).to_string(),
            Self::Sha256 => sha256::Sha256::new(msg).to_string(),
            Self::Sha512 => sha512::Sha512::new(msg).to_string(),
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashKind {
    type Err = ParseHashKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ParseHashKindError(s.to_owned()))
    }
}

impl<'de> serde::Deserialize<'de> for HashKind {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parsing() {
        assert_eq!("md5".parse::<HashKind>(), Ok(HashKind::Md5));
        assert_eq!("SHA1".parse::<HashKind>(), Ok(HashKind::Sha1));
        assert_eq!("sha-256".parse::<HashKind>(), Ok(HashKind::Sha256));
        assert_eq!(" Sha-512 ".parse::<HashKind>(), Ok(HashKind::Sha512));
        assert_matches!("md4".parse::<HashKind>(), Err(ParseHashKindError(s)) if s == "md4");
        assert!("".parse::<HashKind>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for kind in HashKind::ALL {
            assert_eq!(kind.to_string().parse::<HashKind>(), Ok(kind));
        }
    }

    #[test]
    fn lengths() {
        let got: Vec<_> = HashKind::ALL
            .iter()
            .map(|k| (k.min_chars(), k.hex_len()))
            .collect();
        assert_eq!(got, [(25, 32), (31, 40), (50, 64), (100, 128)]);
    }

    #[test]
    fn hex_digest_matches_wrappers() {
        assert_eq!(
            HashKind::Md5.hex_digest(b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        for kind in HashKind::ALL {
            assert_eq!(kind.hex_digest(b"").len(), kind.hex_len());
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&HashKind::ALL).unwrap();
        assert_eq!(json, r#"["md5","sha1","sha256","sha512"]"#);
        let back: Vec<HashKind> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HashKind::ALL);
    }

    #[test]
    fn serde_accepts_same_names_as_from_str() {
        let got: Vec<HashKind> =
            serde_json::from_str(r#"["MD5", "sha-1", "SHA-256", " Sha512 "]"#).unwrap();
        assert_eq!(got, HashKind::ALL);
        let err = serde_json::from_str::<HashKind>(r#""md4""#).unwrap_err();
        assert!(err.to_string().contains("unknown hash kind"), "{err}");
        assert!(serde_json::from_str::<HashKind>("5").is_err());
    }
}
