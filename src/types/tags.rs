use crate::Error;

/// The fixed 128-byte trailer, decoded. `track_number` is only ever set
/// for the v1.1 layout; `genre` is the table entry for `genre_index`,
/// absent when the index is past the table.
#[derive(Debug, Default, PartialEq)]
pub struct Id3v1Tag {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub comment: String,
    pub track_number: Option<u8>,
    pub genre_index: u8,
    pub genre: Option<&'static str>,
}

impl Id3v1Tag {
    /// True when the trailer carried the v1.1 comment/track split.
    pub fn is_v1_1(&self) -> bool {
        self.track_number.is_some()
    }
}

/// A COM frame: language + short description + the comment itself.
/// `language` is the table entry for the frame's 3-byte ISO-639-2 code,
/// absent when the code is unknown.
#[derive(Debug, Default, PartialEq)]
pub struct Comment {
    pub language: Option<&'static str>,
    pub description: String,
    pub text: String,
}

/// A frame with no registered decoder, preserved untouched.
#[derive(Debug, PartialEq)]
pub struct RawFrame {
    pub id: String,
    pub data: Vec<u8>,
}

/// An ID3v2.2 tag after the frame walk. Registered frames land in the
/// typed fields; everything else is kept in `raw_frames`. Frames whose
/// payload failed to decode are listed in `frame_errors` by identifier,
/// with the rest of the tag intact.
#[derive(Debug, Default, PartialEq)]
pub struct Id3v2Tag {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,

    /// TRK text as written, e.g. "3/12" or "7".
    pub track: Option<String>,
    pub track_number: Option<u32>,
    pub track_total: Option<u32>,

    pub comment: Option<Comment>,

    pub raw_frames: Vec<RawFrame>,
    pub frame_errors: Vec<(String, Error)>,
}
