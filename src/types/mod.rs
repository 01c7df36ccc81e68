mod tags;

pub use self::tags::Comment;
pub use self::tags::Id3v1Tag;
pub use self::tags::Id3v2Tag;
pub use self::tags::RawFrame;
