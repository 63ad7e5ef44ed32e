//! Wrappers for the SHA256 cryptographic hash algorithm.
use crate::{letters, ByteFmt, Text, TextFmt};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use sha2::{digest::Update as _, Digest as _};


/// Number of random letters hashed when sampling a fake [`Sha256`].
pub const MIN_CHARS: usize = 50;

/// SHA256 hash.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sha256(pub(crate) [u8; 32]);

impl Sha256 {
    /// Computes a SHA256 hash of a message.
    pub(crate) fn new(msg: &[u8]) -> Self {
        Self(sha2::Sha256::new().chain(msg).finalize().into())
    }

    /// Returns a reference to the bytes of this hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Hash of [`MIN_CHARS`] random lowercase letters.
impl Distribution<Sha256> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sha256 {
        Sha256::new(letters::sample(rng, MIN_CHARS).as_bytes())
    }
}

impl ByteFmt for Sha256 {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self(bytes.try_into()?))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TextFmt for Sha256 {
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.decode_hex()
    }

    fn encode(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Sha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&TextFmt::encode(self))
    }
}

impl std::fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sha256({self})")
    }
}
