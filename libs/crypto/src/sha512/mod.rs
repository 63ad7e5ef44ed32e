//! Wrappers for the SHA512 cryptographic hash algorithm.
use crate::{letters, ByteFmt, Text, TextFmt};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use sha2::{digest::Update as _, Digest as _};


/// Number of random letters hashed when sampling a fake [`Sha512`].
pub const MIN_CHARS: usize = 100;

/// SHA512 hash.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sha512(pub(crate) [u8; 64]);

impl Sha512 {
    /// Computes a SHA512 hash of a message.
    pub(crate) fn new(msg: &[u8]) -> Self {
        let mut out = [0; 64];
        out.copy_from_slice(&sha2::Sha512::new().chain(msg).finalize());
        Self(out)
    }

    /// Returns a reference to the bytes of this hash.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self([0; 64])
    }
}

impl Distribution<Sha512> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sha512 {
        Sha512::new(letters::sample(rng, MIN_CHARS).as_bytes())
    }
}

impl ByteFmt for Sha512 {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self(bytes.try_into()?))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TextFmt for Sha512 {
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.decode_hex()
    }

    fn encode(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Sha512 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&TextFmt::encode(self))
    }
}

impl std::fmt::Debug for Sha512 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sha512({self})")
    }
}
