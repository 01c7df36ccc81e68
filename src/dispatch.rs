use crate::id3v1;
use crate::id3v2;
use crate::Error;
use crate::Id3v1Tag;
use crate::Id3v2Tag;

/// Whichever tag family a buffer turned out to carry.
#[derive(Debug, PartialEq)]
pub enum Tag {
    V1(Id3v1Tag),
    V2(Id3v2Tag),
}

/// Decodes whatever tag `data` carries: the leading ID3v2.2 header is
/// tried first, then the trailing ID3v1 block. Only structural failures
/// inside a recognized v2 envelope are surfaced; "no v2 tag here" and
/// unsupported v2 versions fall through to the v1 trailer.
pub fn get_tags(data: &[u8]) -> Result<Tag, Error> {
    match id3v2::decode(data) {
        Ok(t) => Ok(Tag::V2(t)),
        Err(Error::NotAnId3v2Tag) | Err(Error::UnsupportedVersion(_)) => {
            id3v1::decode(data).map(Tag::V1)
        }
        Err(e) => Err(e),
    }
}
