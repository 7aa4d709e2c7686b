use crate::types::Dimensions;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Signature (8) + IHDR length (4) + chunk type (4) + width (4) + height (4).
pub const HEADER_LEN: usize = 24;

pub const WIDTH_OFFSET: usize = 16;
pub const HEIGHT_OFFSET: usize = 20;

pub type HeaderBytes = [u8; HEADER_LEN];

/// Decodes width and height from a full header. Signature, length and chunk
/// type are not checked.
#[inline]
pub fn decode_dimensions(header: &HeaderBytes) -> Dimensions {
    let width = u32::from_be_bytes([
        header[WIDTH_OFFSET],
        header[WIDTH_OFFSET + 1],
        header[WIDTH_OFFSET + 2],
        header[WIDTH_OFFSET + 3],
    ]);
    let height = u32::from_be_bytes([
        header[HEIGHT_OFFSET],
        header[HEIGHT_OFFSET + 1],
        header[HEIGHT_OFFSET + 2],
        header[HEIGHT_OFFSET + 3],
    ]);

    Dimensions { width, height }
}

/// Like [`decode_dimensions`] but for an arbitrary slice; anything past the
/// header is ignored.
pub fn dimensions_from_bytes(data: &[u8]) -> Option<Dimensions> {
    let header: &HeaderBytes = data.get(..HEADER_LEN)?.try_into().ok()?;
    Some(decode_dimensions(header))
}

/// Builds a header carrying the given size, with a real PNG signature and
/// IHDR chunk prefix in front of it.
pub fn encode_header(dims: Dimensions) -> HeaderBytes {
    let mut header = [0u8; HEADER_LEN];
    header[..8].copy_from_slice(&PNG_SIGNATURE);
    header[8..12].copy_from_slice(&13u32.to_be_bytes());
    header[12..16].copy_from_slice(b"IHDR");
    header[WIDTH_OFFSET..WIDTH_OFFSET + 4].copy_from_slice(&dims.width.to_be_bytes());
    header[HEIGHT_OFFSET..HEIGHT_OFFSET + 4].copy_from_slice(&dims.height.to_be_bytes());
    header
}
