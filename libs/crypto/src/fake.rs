//! Fake hash strings.
//!
//! Each function hashes a fresh string of random lowercase letters and
//! returns the lowercase hex digest. The input length per algorithm is
//! [`HashKind::min_chars`]. Values are random, the format is fixed.
use crate::{md5::Md5, sha1::Sha1, sha256::Sha256, sha512::Sha512, HashKind};
use rand::Rng;

/// Fake MD5 hash, 32 hex chars.
///
/// ```
/// let hash = faker_crypto::md5();
/// assert_eq!(hash.len(), 32);
/// ```
pub fn md5() -> String {
    generate(HashKind::Md5)
}

/// Fake SHA1 hash, 40 hex chars.
pub fn sha1() -> String {
    generate(HashKind::Sha1)
}

/// Fake SHA256 hash, 64 hex chars.
pub fn sha256() -> String {
    generate(HashKind::Sha256)
}

/// Fake SHA512 hash, 128 hex chars.
pub fn sha512() -> String {
    generate(HashKind::Sha512)
}

/// Fake hash of the given kind, using the thread-local rng.
pub fn generate(kind: HashKind) -> String {
    generate_with(kind, &mut rand::thread_rng())
}

/// Fake hash of the given kind, drawing the filler text from `rng`.
/// A seeded `rng` makes the output reproducible.
pub fn generate_with<R: Rng + ?Sized>(kind: HashKind, rng: &mut R) -> String {
    let hash = match kind {
        HashKind::Md5 => rng.gen::<Md5>().to_string(),
        HashKind::Sha1 => rng.gen::<Sha1>().to_string(),
        HashKind::Sha256 => rng.gen::<Sha256>().to_string(),
        HashKind::Sha512 => rng.gen::<Sha512>().to_string(),
    };
    tracing::trace!(%kind, %hash, "generated fake hash");
    hash
}
