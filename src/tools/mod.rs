pub mod encoding;

use crate::Error;

/// Plain big-endian integer, up to 4 bytes. ID3v2.2 frame sizes are 3
/// bytes of this, with no synchronization applied.
pub fn decode_int_be_u32(input: &[u8]) -> u32 {
    debug_assert!(input.len() <= 4);
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        result |= (*b as u32) << (8 * (input.len() - 1 - i));
    }
    result
}

/// Synchronized integer: the high bit of every byte is reserved and must
/// be zero, the value is the low 7 bits of each byte, big-endian
/// weighted. The ID3v2 header size is 4 bytes of this.
pub fn decode_synch_int(input: &[u8]) -> Result<u32, Error> {
    debug_assert!(input.len() <= 4);
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        if b & 0x80 != 0 {
            return Err(Error::InvalidSize);
        }
        result |= (*b as u32) << (7 * (input.len() - 1 - i));
    }
    Ok(result)
}

/// Inverse of `decode_synch_int`, 28-bit range.
pub fn encode_synch_int(input: u32) -> Result<[u8; 4], Error> {
    if input >= 0x10000000 {
        return Err(Error::InvalidSize);
    }
    let mut result = [0; 4];
    for i in 0..4 {
        result[i] = ((input >> (7 * (3 - i))) & 0x7F) as u8;
    }
    Ok(result)
}

pub fn encode_int_be_u24(input: u32) -> [u8; 3] {
    [(input >> 16) as u8, (input >> 8) as u8, input as u8]
}
