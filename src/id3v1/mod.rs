//! The fixed 128-byte ID3v1 / ID3v1.1 trailer.
//!
//! Field layout, relative to the start of the trailer:
//! "TAG" marker (3) + title (30) + artist (30) + album (30) + year (4) +
//! comment region (30) + genre index (1). In the v1.1 variant the last
//! two comment bytes are repurposed: byte 125 of the trailer is 0x00 and
//! byte 126 carries the track number.

use crate::cursor::Cursor;
use crate::tables::genre_name;
use crate::tools::encoding::encode_iso_8859_1;
use crate::Error;
use crate::Id3v1Tag;

pub fn has_id3v1(data: &[u8]) -> bool {
    data.len() >= 128 && &data[data.len() - 128..][..3] == b"TAG"
}

/// Decodes the trailing 128 bytes of `data`. Fails with `NotAnId3v1Tag`
/// when the marker is absent and `OutOfBounds` when the buffer cannot
/// even hold a trailer.
pub fn decode(data: &[u8]) -> Result<Id3v1Tag, Error> {
    if data.len() < 128 {
        return Err(Error::OutOfBounds);
    }
    let trailer = &data[data.len() - 128..];

    let mut cursor = Cursor::new(trailer);
    if cursor.read_exact(3)? != b"TAG" {
        return Err(Error::NotAnId3v1Tag);
    }

    let title = cursor.read_fixed_string(30)?;
    let artist = cursor.read_fixed_string(30)?;
    let album = cursor.read_fixed_string(30)?;
    let year = cursor.read_fixed_string(4)?;

    // trailer byte 125 zero and byte 126 non-zero marks the v1.1 split
    let (comment, track_number) = if trailer[125] == 0x00 && trailer[126] != 0x00 {
        let comment = cursor.read_fixed_string(28)?;
        cursor.skip(1)?; // the zero marker
        (comment, Some(cursor.read_u8()?))
    } else {
        (cursor.read_fixed_string(30)?, None)
    };

    let genre_index = cursor.read_u8()?;

    Ok(Id3v1Tag {
        title,
        artist,
        album,
        year,
        comment,
        track_number,
        genre_index,
        genre: genre_name(genre_index),
    })
}

fn push_fixed(out: &mut Vec<u8>, text: &str, width: usize) {
    let mut bytes = encode_iso_8859_1(text);
    bytes.truncate(width);
    bytes.resize(width, 0x00);
    out.extend_from_slice(&bytes);
}

/// Re-encodes a tag into the canonical 128-byte layout (NUL padding).
/// Picks the v1.1 split exactly when a track number is present.
pub fn encode(tag: &Id3v1Tag) -> [u8; 128] {
    let mut out = Vec::with_capacity(128);
    out.extend_from_slice(b"TAG");
    push_fixed(&mut out, &tag.title, 30);
    push_fixed(&mut out, &tag.artist, 30);
    push_fixed(&mut out, &tag.album, 30);
    push_fixed(&mut out, &tag.year, 4);
    match tag.track_number {
        Some(track) => {
            push_fixed(&mut out, &tag.comment, 28);
            out.push(0x00);
            out.push(track);
        }
        None => push_fixed(&mut out, &tag.comment, 30),
    }
    out.push(tag.genre_index);

    let mut arr = [0; 128];
    arr.copy_from_slice(&out);
    arr
}
