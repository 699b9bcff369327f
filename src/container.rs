//! GLB container framing
//!
//! A GLB file is a 12-byte header followed by exactly two length-prefixed
//! chunks: a JSON chunk describing the scene and a BIN chunk holding raw
//! buffer bytes. All integers are little-endian. This module validates the
//! framing and hands back the byte ranges of the two chunk bodies; it never
//! looks inside them.

use crate::error::{Error, Result};

/// Size of the fixed GLB header: magic, version, length
pub(crate) const HEADER_SIZE: usize = 12;

/// Size of a chunk sub-header: chunkLength, chunkType
pub(crate) const CHUNK_HEADER_SIZE: usize = 8;

/// The ASCII bytes "glTF" as a little-endian u32
pub(crate) const MAGIC: u32 = 0x4654_6C67;

/// The only container version this decoder accepts
pub(crate) const VERSION: u32 = 2;

/// Chunk type tag for the JSON chunk ("JSON")
pub(crate) const CHUNK_TYPE_JSON: u32 = 0x4E4F_534A;

/// Chunk type tag for the binary chunk ("BIN\0")
pub(crate) const CHUNK_TYPE_BIN: u32 = 0x004E_4942;

/// Byte ranges of the two chunk bodies within a validated container
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frames {
    /// Body of chunk 0, the scene-description JSON
    pub json: std::ops::Range<usize>,
    /// Body of chunk 1, the raw buffer bytes
    pub bin: std::ops::Range<usize>,
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(raw)
}

/// Validate the 12-byte header against the actual buffer length
fn validate_header(data: &[u8]) -> Result<()> {
    if data.len() < HEADER_SIZE {
        return Err(Error::InvalidContainer(format!(
            "buffer of {} bytes is shorter than the {HEADER_SIZE}-byte header",
            data.len()
        )));
    }

    let magic = read_u32(data, 0);
    if magic != MAGIC {
        return Err(Error::InvalidContainer(format!(
            "bad magic {magic:#010x}, expected {MAGIC:#010x}"
        )));
    }

    let version = read_u32(data, 4);
    if version != VERSION {
        return Err(Error::InvalidContainer(format!(
            "unsupported version {version}, expected {VERSION}"
        )));
    }

    let length = read_u32(data, 8) as usize;
    if length != data.len() {
        return Err(Error::InvalidContainer(format!(
            "declared length {length} does not match buffer length {}",
            data.len()
        )));
    }

    Ok(())
}

/// Read one chunk sub-header at `offset` and bounds-check its body.
///
/// The overrun check happens before any byte of the body is read, so a
/// truncated or malicious chunkLength can never cause a read past the end of
/// the buffer. Returns the body range and the offset of the next chunk.
fn read_chunk(
    data: &[u8],
    offset: usize,
    expected_type: u32,
    label: &str,
) -> Result<(std::ops::Range<usize>, usize)> {
    let header_end = offset
        .checked_add(CHUNK_HEADER_SIZE)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| Error::container_at(offset, format!("truncated {label} chunk header")))?;

    let chunk_length = read_u32(data, offset) as usize;
    let chunk_type = read_u32(data, offset + 4);

    let next = header_end
        .checked_add(chunk_length)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| {
            Error::container_at(
                offset,
                format!("{label} chunk length {chunk_length} overruns the buffer"),
            )
        })?;

    if chunk_type != expected_type {
        return Err(Error::container_at(
            offset,
            format!("expected {label} chunk, found type tag {chunk_type:#010x}"),
        ));
    }

    Ok((header_end..next, next))
}

/// Validate the whole container and locate the two chunk bodies.
///
/// Exactly two chunks are required, in fixed order: JSON then BIN. Fewer
/// chunks, more chunks, or trailing bytes after the BIN chunk all fail.
pub(crate) fn split(data: &[u8]) -> Result<Frames> {
    validate_header(data)?;

    let (json, offset) = read_chunk(data, HEADER_SIZE, CHUNK_TYPE_JSON, "JSON")?;
    let (bin, offset) = read_chunk(data, offset, CHUNK_TYPE_BIN, "BIN")?;

    if offset != data.len() {
        return Err(Error::container_at(
            offset,
            format!("{} trailing bytes after the BIN chunk", data.len() - offset),
        ));
    }

    Ok(Frames { json, bin })
}
