use crate::id3v2::regex::get_track_number;
use crate::id3v2::structure::Frame;
use crate::tables::language_name;
use crate::tools::encoding::{decode_iso_8859_1, decode_text, terminator_width};
use crate::Comment;
use crate::Error;
use crate::Id3v2Tag;
use crate::RawFrame;

/// Text information frames (TT2, TP1, TAL, TYE, TRK): one encoding
/// selector byte, then the text.
fn text_frame(data: &[u8]) -> Result<String, Error> {
    match data.split_first() {
        Some((selector, text)) => decode_text(*selector, text),
        None => Err(Error::FrameDecode("empty text frame".to_string())),
    }
}

/// Finds the encoding-appropriate NUL terminator; UTF-16 terminators are
/// two bytes and must sit on a code-unit boundary.
fn find_terminator(data: &[u8], width: usize) -> Option<usize> {
    if width == 1 {
        return data.iter().position(|&b| b == 0x00);
    }
    (0..data.len().saturating_sub(1))
        .step_by(2)
        .find(|&i| data[i] == 0x00 && data[i + 1] == 0x00)
}

/// COM: encoding selector + 3-byte ISO-639-2 language code +
/// NUL-terminated short description + the comment itself.
fn comment_frame(data: &[u8]) -> Result<Comment, Error> {
    if data.len() < 4 {
        return Err(Error::FrameDecode("comment frame too short".to_string()));
    }
    let selector = data[0];
    let language = language_name(&decode_iso_8859_1(&data[1..4]));

    let rest = &data[4..];
    let width = terminator_width(selector);
    let sep = find_terminator(rest, width).ok_or_else(|| {
        Error::FrameDecode("comment frame missing description terminator".to_string())
    })?;

    Ok(Comment {
        language,
        description: decode_text(selector, &rest[..sep])?,
        text: decode_text(selector, &rest[sep + width..])?,
    })
}

/// The registry: routes one walked frame into the tag. Known identifiers
/// get their typed decoder; anything else is preserved raw. A decoder
/// failure is recorded against the frame's identifier and never aborts
/// the walk.
pub fn apply(tag: &mut Id3v2Tag, frame: Frame) {
    let result = match frame.id.as_str() {
        "TT2" => text_frame(frame.data).map(|s| tag.title = Some(s)),
        "TP1" => text_frame(frame.data).map(|s| tag.artist = Some(s)),
        "TAL" => text_frame(frame.data).map(|s| tag.album = Some(s)),
        "TYE" => text_frame(frame.data).map(|s| tag.year = Some(s)),
        "TRK" => text_frame(frame.data).map(|s| {
            let (number, total) = get_track_number(&s);
            tag.track_number = number.parse().ok();
            tag.track_total = total.parse().ok();
            tag.track = Some(s);
        }),
        "COM" => comment_frame(frame.data).map(|c| tag.comment = Some(c)),
        _ => {
            tag.raw_frames.push(RawFrame {
                id: frame.id,
                data: frame.data.to_vec(),
            });
            return;
        }
    };

    if let Err(e) = result {
        tag.frame_errors.push((frame.id, e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_frame_test() {
        assert_eq!(text_frame(b"\x00Hell").unwrap(), "Hell");
        assert_eq!(
            text_frame(&[0x01, 0xFF, 0xFE, b'H', 0x00, b'i', 0x00]).unwrap(),
            "Hi"
        );
        assert!(matches!(text_frame(b""), Err(Error::FrameDecode(_))));
        assert!(matches!(text_frame(b"\x05x"), Err(Error::Encoding(_))));
    }

    #[test]
    fn comment_frame_test() {
        let c = comment_frame(b"\x00engliner notes\x00the actual comment").unwrap();
        assert_eq!(c.language, Some("English"));
        assert_eq!(c.description, "liner notes");
        assert_eq!(c.text, "the actual comment");
    }

    #[test]
    fn comment_frame_unknown_language_test() {
        let c = comment_frame(b"\x00qqq\x00hello").unwrap();
        assert_eq!(c.language, None);
        assert_eq!(c.description, "");
        assert_eq!(c.text, "hello");
    }

    #[test]
    fn comment_frame_missing_terminator_test() {
        assert!(matches!(
            comment_frame(b"\x00engno separator here"),
            Err(Error::FrameDecode(_))
        ));
        assert!(matches!(
            comment_frame(b"\x00en"),
            Err(Error::FrameDecode(_))
        ));
    }

    #[test]
    fn comment_frame_utf16_test() {
        let mut data = vec![0x01];
        data.extend_from_slice(b"eng");
        // empty description, double-NUL terminator
        data.extend_from_slice(&[0x00, 0x00]);
        data.extend_from_slice(&[0xFF, 0xFE, b'H', 0x00, b'i', 0x00]);
        let c = comment_frame(&data).unwrap();
        assert_eq!(c.language, Some("English"));
        assert_eq!(c.description, "");
        assert_eq!(c.text, "Hi");
    }

    #[test]
    fn unknown_frame_preserved_test() {
        let mut tag = Id3v2Tag::default();
        apply(
            &mut tag,
            Frame {
                id: "XYZ".to_string(),
                data: b"\x01\x02\x03",
            },
        );
        assert_eq!(
            tag.raw_frames,
            vec![RawFrame {
                id: "XYZ".to_string(),
                data: vec![1, 2, 3],
            }]
        );
        assert!(tag.frame_errors.is_empty());
    }

    #[test]
    fn frame_error_is_scoped_test() {
        let mut tag = Id3v2Tag::default();
        apply(
            &mut tag,
            Frame {
                id: "COM".to_string(),
                data: b"\x00engno separator",
            },
        );
        apply(
            &mut tag,
            Frame {
                id: "TT2".to_string(),
                data: b"\x00Still here",
            },
        );
        assert_eq!(tag.comment, None);
        assert_eq!(tag.title, Some("Still here".to_string()));
        assert_eq!(tag.frame_errors.len(), 1);
        assert_eq!(tag.frame_errors[0].0, "COM");
    }
}
