use super::Sha1;
use crate::{ByteFmt, Text, TextFmt};

#[test]
fn test_sha1() -> Result<(), Box<dyn std::error::Error>> {
    // FIPS 180-1 test vectors.
    let test_vectors: Vec<(&[u8], &str)> = vec![
        (b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
    ];

    for (input, expected) in &test_vectors {
        let hash = Sha1::new(input);
        assert_eq!(hash.as_bytes()[..], hex::decode(expected)?[..]);
        assert_eq!(hash.to_string(), *expected);
    }
    Ok(())
}

#[test]
fn text_roundtrip() {
    let hash = Sha1::new(b"abc");
    let text = TextFmt::encode(&hash);
    assert_eq!(hash, Text::new(&text).decode::<Sha1>().unwrap());
    assert!(Text::new(&text[..38]).decode::<Sha1>().is_err());
    assert!(Text::new(&text.to_uppercase()).decode::<Sha1>().is_err());
}

#[test]
fn byte_decoding_checks_length() {
    let hash = Sha1::new(b"abc");
    assert_eq!(hash, ByteFmt::decode(&ByteFmt::encode(&hash)).unwrap());
    assert!(<Sha1 as ByteFmt>::decode(&[0; 19]).is_err());
    assert!(<Sha1 as ByteFmt>::decode(&[0; 21]).is_err());
}
