use nom::{bytes::complete::tag, IResult};

mod crc;
pub(crate) mod idat;
pub(crate) mod iend;
pub(crate) mod ihdr;

pub(crate) const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

pub(crate) fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(&SIGNATURE[..])(input)
}

/// Frames a payload as a chunk: length, type tag, payload, CRC over type ++ payload.
pub(crate) fn write_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut bytes = (payload.len() as u32).to_be_bytes().to_vec();
    bytes.extend(chunk_type);
    bytes.extend(payload);
    let crc = crc::checksum(&bytes[4..]).to_be_bytes();
    bytes.extend(crc);
    bytes
}
