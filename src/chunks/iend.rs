use super::write_chunk;

pub(crate) struct IendChunk;

impl IendChunk {
    pub(crate) const HEADER: &'static [u8; 4] = b"IEND";

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        write_chunk(Self::HEADER, &[])
    }
}
