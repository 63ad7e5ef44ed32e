//! Random lowercase filler text.
use rand::{
    distributions::{DistString, Distribution},
    Rng,
};

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Samples ASCII letters `a..=z` uniformly.
///
/// Works like [`rand::distributions::Alphanumeric`]:
/// ```
/// use faker_crypto::letters::Lowercase;
/// use rand::distributions::DistString as _;
///
/// let s = Lowercase.sample_string(&mut rand::thread_rng(), 7);
/// assert_eq!(s.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Distribution<u8> for Lowercase {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        ALPHABET[rng.gen_range(0..ALPHABET.len())]
    }
}

impl Distribution<char> for Lowercase {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        char::from(Distribution::<u8>::sample(self, rng))
    }
}

impl DistString for Lowercase {
    fn append_string<R: Rng + ?Sized>(&self, rng: &mut R, string: &mut String, len: usize) {
        string.reserve(len);
        string.extend((0..len).map(|_| Distribution::<char>::sample(self, rng)));
    }
}

/// Returns `n` random lowercase letters.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    Lowercase.sample_string(rng, n)
}
