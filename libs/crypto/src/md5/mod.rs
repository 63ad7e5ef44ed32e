//! Wrappers for the MD5 hash algorithm.
//!
//! MD5 is broken as a cryptographic hash; it is only here because fake
//! data commonly needs values that look like MD5 checksums.
use crate::{letters, ByteFmt, Text, TextFmt};
use ::md5::{digest::Update as _, Digest as _};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

#[cfg(test)]
mod tests;

/// Number of random letters hashed when sampling a fake [`Md5`].
pub const MIN_CHARS: usize = 25;

/// MD5 hash.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Md5(pub(crate) [u8; 16]);

impl Md5 {
    /// Computes an MD5 hash of a message.
    pub(crate) fn new(msg: &[u8]) -> Self {
        Self(::md5::Md5::new().chain(msg).finalize().into())
    }

    /// Returns a reference to the bytes of this hash.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl Distribution<Md5> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Md5 {
        Md5::new(letters::sample(rng, MIN_CHARS).as_bytes())
    }
}

impl ByteFmt for Md5 {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self(bytes.try_into()?))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TextFmt for Md5 {
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.decode_hex()
    }

    fn encode(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Md5 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&TextFmt::encode(self))
    }
}

impl std::fmt::Debug for Md5 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Md5({self})")
    }
}
