use crate::cursor::Cursor;
use crate::id3v2::structure::{Frame, Header};
use crate::tools::decode_int_be_u32;
use crate::tools::decode_synch_int;
use crate::Error;

/// Parses the 10-byte ID3v2 header.
///
/// A missing "ID3" marker is `NotAnId3v2Tag` even on a short buffer, so
/// that "no tag here" never surfaces as a bounds error. Everything after
/// a verified marker is structural and fails hard.
pub fn header(data: &[u8]) -> Result<Header, Error> {
    if data.len() < 3 || &data[0..3] != b"ID3" {
        return Err(Error::NotAnId3v2Tag);
    }

    let mut cursor = Cursor::new(data);
    cursor.skip(3)?;

    let major_version = cursor.read_u8()?;
    let revision = cursor.read_u8()?;
    if major_version != 2 {
        return Err(Error::UnsupportedVersion(major_version));
    }

    // ID3v2.2 flags            %ab000000
    let flags = cursor.read_u8()?;
    let is_unsynchronized = flags & 0b10000000 != 0;
    let is_compressed = flags & 0b01000000 != 0;

    let size = decode_synch_int(cursor.read_exact(4)?)?;

    Ok(Header {
        major_version,
        revision,
        size,
        is_unsynchronized,
        is_compressed,
    })
}

fn decode_frame_id(input: &[u8]) -> Option<String> {
    let mut s = String::new();
    for c in input.iter() {
        if (*c >= b'A' && *c <= b'Z') || (*c >= b'0' && *c <= b'9') {
            s.push(*c as char);
        } else {
            return None;
        }
    }
    Some(s)
}

/// Lazy walk over the tag body: 3 identifier bytes + 3 size bytes (plain
/// big-endian at this revision) per frame, until padding or the declared
/// boundary. Consumed exactly once; a `TruncatedFrame` ends the walk.
pub struct Frames<'a> {
    cursor: Cursor<'a>,
    done: bool,
    last_id: Option<String>,
}

impl<'a> Frames<'a> {
    /// `body` is the tag content after the 10-byte header, already
    /// clamped to the declared size.
    pub fn new(body: &'a [u8]) -> Frames<'a> {
        Frames {
            cursor: Cursor::new(body),
            done: false,
            last_id: None,
        }
    }

    /// Identifier of the frame a `TruncatedFrame` was reported for.
    pub fn take_last_id(&mut self) -> String {
        self.last_id.take().unwrap_or_default()
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = Result<Frame<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // a full frame header no longer fits - the rest is padding
        if self.cursor.remaining() < 6 {
            self.done = true;
            return None;
        }

        let raw_id = match self.cursor.read_exact(3) {
            Ok(raw) => raw,
            Err(_) => {
                self.done = true;
                return None;
            }
        };
        // an all-zero identifier is the start of the padding run
        if raw_id == b"\x00\x00\x00" {
            self.done = true;
            return None;
        }
        let id = match decode_frame_id(raw_id) {
            Some(id) => id,
            None => {
                // not a frame identifier; we probably hit garbage
                self.done = true;
                return None;
            }
        };

        let size = match self.cursor.read_exact(3) {
            Ok(raw) => decode_int_be_u32(raw) as usize,
            Err(_) => {
                self.done = true;
                return None;
            }
        };

        match self.cursor.read_exact(size) {
            Ok(data) => Some(Ok(Frame { id, data })),
            Err(_) => {
                self.done = true;
                self.last_id = Some(id);
                Some(Err(Error::TruncatedFrame))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_test() {
        let h = header(b"ID3\x02\x00\x00\x00\x00\x00\x10").unwrap();
        assert_eq!(h.major_version, 2);
        assert_eq!(h.revision, 0);
        assert_eq!(h.size, 16);
        assert!(!h.is_unsynchronized);

        let h = header(b"ID3\x02\x00\x80\x00\x00\x01\x7F").unwrap();
        assert!(h.is_unsynchronized);
        assert_eq!(h.size, 0xFF);
    }

    #[test]
    fn header_marker_test() {
        assert_eq!(header(b"MP3\x02\x00\x00\x00\x00\x00\x10"), Err(Error::NotAnId3v2Tag));
        // short garbage is "no tag", not a bounds error
        assert_eq!(header(b"ID"), Err(Error::NotAnId3v2Tag));
        assert_eq!(header(b""), Err(Error::NotAnId3v2Tag));
        // a verified marker with a cut-off header is a bounds error
        assert_eq!(header(b"ID3\x02\x00"), Err(Error::OutOfBounds));
    }

    #[test]
    fn header_version_test() {
        assert_eq!(
            header(b"ID3\x03\x00\x00\x00\x00\x00\x10"),
            Err(Error::UnsupportedVersion(3))
        );
        assert_eq!(
            header(b"ID3\x04\x00\x00\x00\x00\x00\x10"),
            Err(Error::UnsupportedVersion(4))
        );
    }

    #[test]
    fn header_size_test() {
        // any size byte with the high bit set is invalid
        assert_eq!(
            header(b"ID3\x02\x00\x00\x80\x00\x00\x10"),
            Err(Error::InvalidSize)
        );
        assert_eq!(
            header(b"ID3\x02\x00\x00\x00\x00\x00\xFF"),
            Err(Error::InvalidSize)
        );
    }

    #[test]
    fn frames_stop_at_padding_test() {
        let mut body = Vec::new();
        body.extend_from_slice(b"TT2\x00\x00\x05\x00Hell");
        body.extend_from_slice(&[0; 20]);

        let mut frames = Frames::new(&body);
        let f = frames.next().unwrap().unwrap();
        assert_eq!(f.id, "TT2");
        assert_eq!(f.data, b"\x00Hell");
        assert!(frames.next().is_none());
        assert!(frames.next().is_none());
    }

    #[test]
    fn frames_truncated_test() {
        // declared payload of 0x40 bytes, but only 5 remain
        let body = b"TAL\x00\x00\x40\x00Albu";
        let mut frames = Frames::new(&body[..]);
        assert_eq!(frames.next(), Some(Err(Error::TruncatedFrame)));
        assert!(frames.next().is_none());
    }

    #[test]
    fn frames_empty_body_test() {
        let mut frames = Frames::new(b"");
        assert!(frames.next().is_none());
    }
}
