use std::{fs, path::Path};

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::{
    chunks::{idat::IdatChunk, iend::IendChunk, ihdr::IhdrChunk, SIGNATURE},
    error::{Error, Result},
    pixel::Rgb,
};

// zlib's default level. Fixed so encoding the same parameters twice is
// byte-identical.
const COMPRESSION_LEVEL: u8 = 6;

/// Encodes a solid-fill, 8-bit, non-interlaced truecolor PNG entirely in
/// memory: signature, IHDR, one IDAT, IEND.
pub fn encode_to_vec(width: u32, height: u32, fill: Rgb) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let compressed = compress_to_vec_zlib(&raw_scanlines(width, height, fill), COMPRESSION_LEVEL);

    let mut output = SIGNATURE.to_vec();
    output.extend(IhdrChunk::truecolor(width, height).to_bytes());
    output.extend(IdatChunk { data: &compressed }.to_bytes());
    output.extend(IendChunk.to_bytes());
    Ok(output)
}

/// Buffers the complete encode, then writes it to `path` in one shot, so a
/// failed encode never leaves a partial file behind.
pub fn write_file<P: AsRef<Path>>(path: P, width: u32, height: u32, fill: Rgb) -> Result<()> {
    let bytes = encode_to_vec(width, height, fill)?;
    fs::write(path, bytes)?;
    Ok(())
}

// Each row is one filter-type byte (0, no filtering) followed by `width`
// RGB triples.
fn raw_scanlines(width: u32, height: u32, fill: Rgb) -> Vec<u8> {
    let mut row = Vec::with_capacity(1 + width as usize * 3);
    row.push(0);
    for _ in 0..width {
        row.extend([fill.red, fill.green, fill.blue]);
    }
    let mut data = Vec::with_capacity(row.len() * height as usize);
    for _ in 0..height {
        data.extend_from_slice(&row);
    }
    data
}
