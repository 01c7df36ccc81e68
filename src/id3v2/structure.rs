/// The 10-byte tag header. `size` is the frame-scan boundary: it counts
/// everything after the header itself.
#[derive(Debug, Default, PartialEq)]
pub struct Header {
    pub major_version: u8,
    pub revision: u8,
    pub size: u32,

    // recorded, but no desynchronization is applied at this revision
    pub is_unsynchronized: bool,
    pub is_compressed: bool,
}

/// One walked frame: 3-letter identifier plus its raw payload slice.
#[derive(Debug, PartialEq)]
pub struct Frame<'a> {
    pub id: String,
    pub data: &'a [u8],
}
