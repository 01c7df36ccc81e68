//! Names the ID3 structures present in a buffer without decoding them.
//! A file can carry a v1 trailer and a v2 header at the same time, so
//! detection reports every match.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Id3Version {
    Id3v1,
    Id3v11,
    Id3v22,
    Id3v23,
    Id3v24,
}

pub fn detect_id3_versions(data: &[u8]) -> Vec<Id3Version> {
    let mut found = Vec::new();

    if data.len() >= 128 {
        let trailer = &data[data.len() - 128..];
        if &trailer[0..3] == b"TAG" {
            if trailer[125] == 0x00 && trailer[126] != 0x00 {
                found.push(Id3Version::Id3v11);
            } else {
                found.push(Id3Version::Id3v1);
            }
        }
    }

    if data.len() >= 4 && &data[0..3] == b"ID3" {
        match data[3] {
            2 => found.push(Id3Version::Id3v22),
            3 => found.push(Id3Version::Id3v23),
            4 => found.push(Id3Version::Id3v24),
            _ => (),
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v1_trailer(marker125: u8, marker126: u8) -> Vec<u8> {
        let mut v = vec![0u8; 128];
        v[0..3].copy_from_slice(b"TAG");
        v[125] = marker125;
        v[126] = marker126;
        v
    }

    #[test]
    fn detect_v1_test() {
        assert_eq!(
            detect_id3_versions(&v1_trailer(b'x', 0x00)),
            vec![Id3Version::Id3v1]
        );
        // both trailing bytes zero still means plain v1
        assert_eq!(
            detect_id3_versions(&v1_trailer(0x00, 0x00)),
            vec![Id3Version::Id3v1]
        );
        assert_eq!(
            detect_id3_versions(&v1_trailer(0x00, 5)),
            vec![Id3Version::Id3v11]
        );
    }

    #[test]
    fn detect_v2_test() {
        let mut data = b"ID3\x02\x00\x00\x00\x00\x00\x00".to_vec();
        data.resize(256, 0);
        assert_eq!(detect_id3_versions(&data), vec![Id3Version::Id3v22]);

        data[3] = 4;
        assert_eq!(detect_id3_versions(&data), vec![Id3Version::Id3v24]);
    }

    #[test]
    fn detect_both_test() {
        let mut data = b"ID3\x02\x00\x00\x00\x00\x00\x00".to_vec();
        data.resize(256, 0);
        data.extend_from_slice(&v1_trailer(0x00, 3));
        assert_eq!(
            detect_id3_versions(&data),
            vec![Id3Version::Id3v11, Id3Version::Id3v22]
        );
    }

    #[test]
    fn detect_nothing_test() {
        assert_eq!(detect_id3_versions(b"RIFF"), vec![]);
        assert_eq!(detect_id3_versions(&[]), vec![]);
        assert_eq!(detect_id3_versions(&vec![0u8; 4096]), vec![]);
    }
}
