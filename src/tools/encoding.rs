extern crate encoding;
use self::encoding::{DecoderTrap, EncoderTrap, Encoding};

use crate::Error;

pub fn encode_iso_8859_1(input: &str) -> Vec<u8> {
    use self::encoding::all::ISO_8859_1;
    ISO_8859_1
        .encode(input, EncoderTrap::Replace)
        .unwrap_or(Vec::new())
}

/// Latin-1 never fails: every byte maps to a code point.
pub fn decode_iso_8859_1(input: &[u8]) -> String {
    use self::encoding::all::ISO_8859_1;
    ISO_8859_1
        .decode(input, DecoderTrap::Replace)
        .unwrap_or("".to_string())
        .trim_end_matches('\0')
        .to_string()
}

/// UTF-16 per the ID3v2.2 rules: a recognized BOM is mandatory and the
/// byte length must be even.
pub fn decode_utf16(input: &[u8]) -> Result<String, Error> {
    use self::encoding::all::{UTF_16BE, UTF_16LE};
    if input.is_empty() {
        return Ok("".to_string());
    }
    if input.len() % 2 != 0 {
        return Err(Error::Encoding(format!(
            "odd UTF-16 byte length ({})",
            input.len()
        )));
    }
    let decoded = match &input[0..2] {
        [0xFF, 0xFE] => UTF_16LE.decode(&input[2..], DecoderTrap::Replace),
        [0xFE, 0xFF] => UTF_16BE.decode(&input[2..], DecoderTrap::Replace),
        _ => return Err(Error::Encoding("missing UTF-16 byte order mark".to_string())),
    };
    Ok(decoded
        .unwrap_or("".to_string())
        .trim_end_matches('\0')
        .to_string())
}

/// Resolves an ID3v2.2 frame encoding selector (0 = ISO-8859-1,
/// 1 = UTF-16 with BOM) and decodes the remainder.
pub fn decode_text(selector: u8, input: &[u8]) -> Result<String, Error> {
    match selector {
        0x00 => Ok(decode_iso_8859_1(input)),
        0x01 => decode_utf16(input),
        b => Err(Error::Encoding(format!(
            "unsupported text encoding byte (0x{:02X})",
            b
        ))),
    }
}

/// The NUL terminator that separates strings under a given selector:
/// one byte for Latin-1, two for UTF-16.
pub fn terminator_width(selector: u8) -> usize {
    match selector {
        0x01 => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn iso_8859_1_test() {
        assert_eq!(decode_iso_8859_1(b"Comment \xE6\xD6"), "Comment æÖ");
        assert_eq!(decode_iso_8859_1(b"plain\x00\x00"), "plain");
        // never fails, whatever the bytes
        assert_eq!(decode_iso_8859_1(&[0xFF, 0xFE, 0x80]), "ÿþ\u{80}");
    }

    #[test]
    fn utf16_test() {
        // little endian with BOM
        assert_eq!(
            decode_utf16(&[0xFF, 0xFE, b'H', 0x00, b'i', 0x00]).unwrap(),
            "Hi"
        );
        // big endian with BOM, trailing NUL stripped
        assert_eq!(
            decode_utf16(&[0xFE, 0xFF, 0x00, b'H', 0x00, b'i', 0x00, 0x00]).unwrap(),
            "Hi"
        );
        // an empty string needs no BOM
        assert_eq!(decode_utf16(&[]).unwrap(), "");
        assert!(matches!(
            decode_utf16(&[0xFF, 0xFE, b'H']),
            Err(Error::Encoding(_))
        ));
        assert!(matches!(
            decode_utf16(&[0x00, b'H', 0x00, b'i']),
            Err(Error::Encoding(_))
        ));
    }

    #[test]
    fn selector_test() {
        assert_eq!(decode_text(0x00, b"Hell").unwrap(), "Hell");
        assert!(matches!(decode_text(0x03, b"x"), Err(Error::Encoding(_))));
        assert_eq!(terminator_width(0x00), 1);
        assert_eq!(terminator_width(0x01), 2);
    }
}
