//! Shared helpers that assemble GLB containers in memory

#![allow(dead_code)]

/// The ASCII bytes "glTF" as a little-endian u32
pub const MAGIC: u32 = 0x4654_6C67;
/// Container version accepted by the decoder
pub const VERSION: u32 = 2;
/// Chunk type tag for the JSON chunk
pub const CHUNK_JSON: u32 = 0x4E4F_534A;
/// Chunk type tag for the BIN chunk
pub const CHUNK_BIN: u32 = 0x004E_4942;

/// Assemble a container with an arbitrary chunk sequence
pub fn glb_chunks(chunks: &[(u32, &[u8])]) -> Vec<u8> {
    let total = 12 + chunks.iter().map(|(_, body)| 8 + body.len()).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&MAGIC.to_le_bytes());
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    for (tag, body) in chunks {
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(body);
    }
    out
}

/// Assemble a well-formed two-chunk container
pub fn glb_with(json: &str, bin: &[u8]) -> Vec<u8> {
    glb_chunks(&[(CHUNK_JSON, json.as_bytes()), (CHUNK_BIN, bin)])
}

/// Assemble a well-formed container with an empty BIN chunk
pub fn glb(json: &str) -> Vec<u8> {
    glb_with(json, &[])
}
