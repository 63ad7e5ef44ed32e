//! Byte and text encodings shared by the digest wrappers.
use anyhow::Context as _;

/// Text being decoded via [`TextFmt::decode`].
pub struct Text<'a>(&'a str);

impl<'a> Text<'a> {
    /// Wraps `s` for decoding.
    pub fn new(s: &'a str) -> Self {
        Self(s)
    }

    /// Decodes the text as lowercase hex and converts
    /// the bytes into `T` with [`ByteFmt::decode`].
    pub fn decode_hex<T: ByteFmt>(self) -> anyhow::Result<T> {
        if let Some(c) = self.0.chars().find(|&c| matches!(c, 'A'..='F')) {
            anyhow::bail!("{:?}: uppercase hex digit {c:?}", self.0);
        }
        let raw = hex::decode(self.0).with_context(|| format!("{:?}", self.0))?;
        ByteFmt::decode(&raw).with_context(|| format!("{:?}", self.0))
    }

    /// Shorthand for `<T as TextFmt>::decode(self)`.
    pub fn decode<T: TextFmt>(self) -> anyhow::Result<T> {
        TextFmt::decode(self)
    }
}

/// Human readable encoding. `decode(encode(x)) == x` must hold.
pub trait TextFmt: Sized {
    /// Decodes the value from text.
    fn decode(text: Text) -> anyhow::Result<Self>;
    /// Encodes the value as text.
    fn encode(&self) -> String;
}

/// Raw byte encoding. `decode(encode(x)) == x` must hold.
pub trait ByteFmt: Sized {
    /// Decodes the value from bytes.
    fn decode(bytes: &[u8]) -> anyhow::Result<Self>;
    /// Encodes the value as bytes.
    fn encode(&self) -> Vec<u8>;
}
