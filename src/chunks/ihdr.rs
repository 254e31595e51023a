use nom::{bytes::complete::take, number::complete::be_u32, sequence::tuple, IResult};

use super::write_chunk;

pub(crate) const COLOR_TYPE_TRUECOLOR: u8 = 2;

/// The 13-byte IHDR payload. Format bytes stay raw so that files with
/// unknown color types or interlace flags can still be reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IhdrChunk {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bit_depth: u8,
    pub(crate) color_type: u8,
    pub(crate) compression_method: u8,
    pub(crate) filter_method: u8,
    pub(crate) interlace_method: u8,
}

impl IhdrChunk {
    pub(crate) const HEADER: &'static [u8; 4] = b"IHDR";
    pub(crate) const PAYLOAD_SIZE: usize = 13;

    /// Header for an 8-bit, non-interlaced truecolor image.
    pub(crate) fn truecolor(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: 8,
            color_type: COLOR_TYPE_TRUECOLOR,
            compression_method: 0,
            filter_method: 0,
            interlace_method: 0,
        }
    }

    pub(crate) fn from_bytes(chunk_data: &[u8]) -> IResult<&[u8], Self> {
        let (rest, (width, height, other_bytes)) =
            tuple((be_u32, be_u32, take(5usize)))(chunk_data)?;
        Ok((
            rest,
            IhdrChunk {
                width,
                height,
                bit_depth: other_bytes[0],
                color_type: other_bytes[1],
                compression_method: other_bytes[2],
                filter_method: other_bytes[3],
                interlace_method: other_bytes[4],
            },
        ))
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(Self::PAYLOAD_SIZE);
        payload.extend(&self.width.to_be_bytes());
        payload.extend(&self.height.to_be_bytes());
        payload.extend(&[
            self.bit_depth,
            self.color_type,
            self.compression_method,
            self.filter_method,
            self.interlace_method,
        ]);
        write_chunk(Self::HEADER, &payload)
    }
}
