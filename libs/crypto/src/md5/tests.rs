use super::Md5;
use crate::{ByteFmt, Text, TextFmt};

#[test]
fn test_md5() -> Result<(), Box<dyn std::error::Error>> {
    // RFC 1321 test suite, plus a common sanity check.
    let test_vectors: Vec<(&[u8], &str)> = vec![
        (b"", "d41d8cd98f00b204e9800998ecf8427e"),
        (b"abc", "900150983cd24fb0d6963f7d28e17f72"),
        (b"hello world", "5eb63bbbe01eeed093cb22bb8f5acdc3"),
    ];

    for (input, expected) in &test_vectors {
        let hash = Md5::new(input);
        assert_eq!(hash.as_bytes()[..], hex::decode(expected)?[..]);
        assert_eq!(TextFmt::encode(&hash), *expected);
    }
    Ok(())
}

#[test]
fn text_roundtrip() {
    let hash = Md5::new(b"hello world");
    let got: Md5 = Text::new(&hash.to_string()).decode().unwrap();
    assert_eq!(hash, got);
    assert_eq!(format!("{hash:?}"), "Md5(5eb63bbbe01eeed093cb22bb8f5acdc3)");
}

#[test]
fn byte_decoding_checks_length() {
    let hash = Md5::new(b"abc");
    assert_eq!(hash, ByteFmt::decode(&ByteFmt::encode(&hash)).unwrap());
    assert!(<Md5 as ByteFmt>::decode(&[0; 15]).is_err());
    assert!(<Md5 as ByteFmt>::decode(&[0; 17]).is_err());
}
