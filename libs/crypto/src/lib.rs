//! Fake MD5, SHA1, SHA256 and SHA512 hash strings for test data.
//!
//! The values are real digests of random filler text, so they look like
//! genuine checksums:
//! ```
//! let hash = faker_crypto::sha256();
//! assert_eq!(hash.len(), 64);
//! assert!(hash.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
//! ```
//! This is not a hashing library: only internally generated text is hashed.
//! The digest types can be sampled or decoded, but not computed from
//! caller-supplied bytes:
//! ```compile_fail
//! let _ = faker_crypto::md5::Md5::new(b"abc");
//! ```

pub use fake::*;
pub use fmt::*;
pub use kind::*;

mod fake;
mod fmt;
mod kind;
pub mod letters;
pub mod md5;
pub mod sha1;
pub mod sha256;
pub mod sha512;
pub mod testonly;
