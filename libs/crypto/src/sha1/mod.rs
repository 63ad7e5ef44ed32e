//! Wrappers for the SHA1 hash algorithm.
use crate::{letters, ByteFmt, Text, TextFmt};
use ::sha1::{digest::Update as _, Digest as _};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

#[cfg(test)]
mod tests;

/// Number of random letters hashed when sampling a fake [`Sha1`].
pub const MIN_CHARS: usize = 31;

/// SHA1 hash.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sha1(pub(crate) [u8; 20]);

impl Sha1 {
    /// Computes a SHA1 hash of a message.
    pub(crate) fn new(msg: &[u8]) -> Self {
        Self(::sha1::Sha1::new().chain(msg).finalize().into())
    }

    /// Returns a reference to the bytes of this hash.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl Distribution<Sha1> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sha1 {
        Sha1::new(letters::sample(rng, MIN_CHARS).as_bytes())
    }
}

impl ByteFmt for Sha1 {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self(bytes.try_into()?))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TextFmt for Sha1 {
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.decode_hex()
    }

    fn encode(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Sha1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&TextFmt::encode(self))
    }
}

impl std::fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sha1({self})")
    }
}
