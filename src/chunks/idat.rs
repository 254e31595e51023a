use super::write_chunk;

#[derive(Debug)]
pub(crate) struct IdatChunk<'a> {
    pub(crate) data: &'a [u8],
}

impl IdatChunk<'_> {
    pub(crate) const HEADER: &'static [u8; 4] = b"IDAT";

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        write_chunk(Self::HEADER, self.data)
    }
}
