#[macro_use] extern crate lazy_static;

mod types;
pub use crate::types::Comment;
pub use crate::types::Id3v1Tag;
pub use crate::types::Id3v2Tag;
pub use crate::types::RawFrame;

mod cursor;
mod detect;
mod dispatch;
mod tables;
pub mod tools;

pub mod id3v1;
pub mod id3v2;


pub use crate::cursor::Cursor;
pub use crate::detect::detect_id3_versions;
pub use crate::detect::Id3Version;
pub use crate::dispatch::get_tags;
pub use crate::dispatch::Tag;
pub use crate::tables::genre_name;
pub use crate::tables::language_name;

/// Decoding failures. The envelope kinds (marker, version, size) abort a
/// decode with no partial tag; `Encoding` and `FrameDecode` are scoped to
/// a single frame or field and are collected on the tag instead of
/// propagated.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A read ran past the end of the supplied buffer.
    OutOfBounds,
    /// The trailing 128 bytes do not start with "TAG".
    NotAnId3v1Tag,
    /// The buffer does not start with "ID3".
    NotAnId3v2Tag,
    /// An ID3v2 tag with a major version outside the handled set.
    UnsupportedVersion(u8),
    /// A synchronized size byte had its high bit set.
    InvalidSize,
    /// A frame's declared payload runs past the tag boundary.
    TruncatedFrame,
    /// Malformed multi-byte text (odd length, missing or bad BOM).
    Encoding(String),
    /// A known frame's payload violates its expected internal layout.
    FrameDecode(String),
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfBounds => write!(f, "read past the end of the buffer"),
            Error::NotAnId3v1Tag => write!(f, "ID3v1 marker not found"),
            Error::NotAnId3v2Tag => write!(f, "ID3v2 header not found"),
            Error::UnsupportedVersion(v) => write!(f, "ID3v2.{} is not supported", v),
            Error::InvalidSize => write!(f, "invalid synchronized size field"),
            Error::TruncatedFrame => write!(f, "frame runs past the tag boundary"),
            Error::Encoding(ref e) => write!(f, "text encoding error: {}", e),
            Error::FrameDecode(ref e) => write!(f, "frame decoding error: {}", e),
        }
    }
}

use std::error;
impl error::Error for Error {}
