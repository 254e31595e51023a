use std::{fs, path::Path};

use nom::{bytes::complete::take, number::complete::be_u32, IResult};

use crate::{
    chunks::{ihdr::IhdrChunk, parse_signature},
    error::{Error, Result},
};

/// Structural findings from the first IHDR chunk of a PNG stream.
///
/// This is a diagnostic, not a decode: pixel data is never touched and
/// chunk CRCs are not verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub interlace: u8,
    /// True iff the image is non-interlaced.
    pub compliant: bool,
    pub square: bool,
}

impl Report {
    pub fn classification(&self) -> &'static str {
        match self.color_type {
            2 => "RGB",
            3 => "palette",
            6 => "RGBA",
            _ => "unknown",
        }
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.square {
            warnings.push(format!(
                "image is not square ({}x{}); it may look stretched",
                self.width, self.height
            ));
        }
        if self.interlace != 0 {
            warnings.push(format!(
                "interlace method {} is set; Android AAPT may reject this file",
                self.interlace
            ));
        }
        warnings
    }
}

pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    let input = fs::read(path)?;
    inspect_bytes(&input)
}

/// Checks the signature, then walks chunks until the first IHDR and
/// reports its fields. Later chunks are never read.
pub fn inspect_bytes(input: &[u8]) -> Result<Report> {
    let (mut rest, _) = parse_signature(input).map_err(|_| Error::InvalidSignature)?;
    loop {
        if rest.len() < 4 {
            return Err(Error::NoHeaderFound);
        }
        let (after_length, length) = parse_length(rest).map_err(|_| Error::NoHeaderFound)?;
        let declared = length as usize;
        let (after_type, chunk_type) =
            parse_type(after_length).map_err(|_| Error::TruncatedChunk {
                needed: 4 + declared + 4,
                available: after_length.len(),
            })?;
        if chunk_type == *IhdrChunk::HEADER {
            return parse_header(after_type, declared).map(Report::from);
        }
        // Skip the chunk body and its CRC without validating either.
        let skip = declared + 4;
        if after_type.len() < skip {
            return Err(Error::TruncatedChunk {
                needed: skip,
                available: after_type.len(),
            });
        }
        rest = &after_type[skip..];
    }
}

fn parse_header(input: &[u8], declared: usize) -> Result<IhdrChunk> {
    if declared < IhdrChunk::PAYLOAD_SIZE {
        return Err(Error::TruncatedChunk {
            needed: IhdrChunk::PAYLOAD_SIZE,
            available: declared,
        });
    }
    if input.len() < declared {
        return Err(Error::TruncatedChunk {
            needed: declared,
            available: input.len(),
        });
    }
    let (_, header) =
        IhdrChunk::from_bytes(&input[..declared]).map_err(|_| Error::TruncatedChunk {
            needed: IhdrChunk::PAYLOAD_SIZE,
            available: declared,
        })?;
    Ok(header)
}

impl From<IhdrChunk> for Report {
    fn from(header: IhdrChunk) -> Self {
        Report {
            width: header.width,
            height: header.height,
            bit_depth: header.bit_depth,
            color_type: header.color_type,
            interlace: header.interlace_method,
            compliant: header.interlace_method == 0,
            square: header.width == header.height,
        }
    }
}

fn parse_length(input: &[u8]) -> IResult<&[u8], u32> {
    be_u32(input)
}

fn parse_type(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take(4usize)(input)
}
