//! The ID3v2.2 header-plus-frames structure: a 10-byte header declaring
//! a synchronized tag size, then a run of {3-letter id, 3-byte size,
//! payload} frames, then optional zero padding.

mod frames;
mod read;
mod regex;
mod structure;

pub use self::structure::Frame;
pub use self::structure::Header;

use crate::Error;
use crate::Id3v2Tag;

pub fn has_id3v2(data: &[u8]) -> bool {
    data.len() >= 3 && &data[0..3] == b"ID3"
}

/// Parses the 10-byte tag header on its own.
pub fn header(data: &[u8]) -> Result<Header, Error> {
    read::header(data)
}

/// Decodes the leading ID3v2.2 tag of `data`.
///
/// Envelope failures (marker, version, size) abort. Everything inside
/// the frame walk degrades: unknown frames are kept raw, bad frames are
/// listed in `frame_errors`, and a truncated frame ends the walk with
/// the frames decoded so far.
pub fn decode(data: &[u8]) -> Result<Id3v2Tag, Error> {
    let header = read::header(data)?;

    // the declared size bounds the scan; a buffer shorter than declared
    // simply clamps it, and the walker reports the cut as truncation
    let end = usize::min(data.len(), 10 + header.size as usize);
    let body = &data[10..end];

    let mut tag = Id3v2Tag::default();
    let mut walker = read::Frames::new(body);
    while let Some(item) = walker.next() {
        match item {
            Ok(frame) => frames::apply(&mut tag, frame),
            Err(e) => {
                tag.frame_errors.push((walker.take_last_id(), e));
                break;
            }
        }
    }

    Ok(tag)
}
