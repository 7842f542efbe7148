//! Embedded EXIF thumbnail for transcoded output.
//!
//! The thumbnail travels in a minimal APP1 Exif segment: a TIFF header,
//! IFD0 with a single orientation entry, and IFD1 pointing at a small
//! JPEG-compressed rendition (`JPEGInterchangeFormat`/`...Length`).

use image::DynamicImage;

/// Quality for the embedded rendition; it only needs to preview well.
const THUMBNAIL_QUALITY: u8 = 60;

/// A JPEG marker segment length field is 16-bit and counts itself.
const MAX_SEGMENT_LEN: usize = u16::MAX as usize;

/// Build the APP1 Exif segment embedding a thumbnail of `image`.
///
/// Returns `None` when the rendition cannot be encoded or would overflow a
/// single segment; the caller then writes the output without a thumbnail.
pub fn exif_segment(image: &DynamicImage, size: u32) -> Option<Vec<u8>> {
    let thumb = thumbnail_jpeg(image, size)?;
    build_segment(&thumb)
}

/// Encode a small JPEG rendition of `image` (longest edge = `size`,
/// aspect ratio preserved).
pub fn thumbnail_jpeg(image: &DynamicImage, size: u32) -> Option<Vec<u8>> {
    let thumb = image.thumbnail(size, size).to_rgb8();
    let mut buffer = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, THUMBNAIL_QUALITY);
    thumb.write_with_encoder(encoder).ok()?;
    Some(buffer)
}

// Byte offsets within the TIFF body. IFD0 carries one entry plus the IFD1
// pointer; IFD1 carries three entries plus the terminating null pointer.
const IFD0_OFFSET: u32 = 8;
const IFD1_OFFSET: u32 = IFD0_OFFSET + 2 + 12 + 4;
const THUMB_OFFSET: u32 = IFD1_OFFSET + 2 + 3 * 12 + 4;

fn build_segment(thumb: &[u8]) -> Option<Vec<u8>> {
    let tiff_len = THUMB_OFFSET as usize + thumb.len();
    // Length field + "Exif\0\0" identifier + TIFF body
    let segment_len = 2 + 6 + tiff_len;
    if segment_len > MAX_SEGMENT_LEN {
        return None;
    }

    let mut seg = Vec::with_capacity(segment_len + 2);
    seg.extend_from_slice(&[0xFF, 0xE1]);
    seg.extend_from_slice(&(segment_len as u16).to_be_bytes());
    seg.extend_from_slice(b"Exif\0\0");

    // TIFF header, little-endian
    seg.extend_from_slice(&[b'I', b'I', 0x2A, 0x00]);
    seg.extend_from_slice(&IFD0_OFFSET.to_le_bytes());

    // IFD0: orientation top-left, then the pointer to IFD1
    seg.extend_from_slice(&1u16.to_le_bytes());
    push_short(&mut seg, 0x0112, 1);
    seg.extend_from_slice(&IFD1_OFFSET.to_le_bytes());

    // IFD1: JPEG-compressed thumbnail location and length
    seg.extend_from_slice(&3u16.to_le_bytes());
    push_short(&mut seg, 0x0103, 6);
    push_long(&mut seg, 0x0201, THUMB_OFFSET);
    push_long(&mut seg, 0x0202, thumb.len() as u32);
    seg.extend_from_slice(&0u32.to_le_bytes());

    seg.extend_from_slice(thumb);
    Some(seg)
}

/// Append a SHORT (type 3) IFD entry, value left-justified in the slot.
fn push_short(seg: &mut Vec<u8>, tag: u16, value: u16) {
    seg.extend_from_slice(&tag.to_le_bytes());
    seg.extend_from_slice(&3u16.to_le_bytes());
    seg.extend_from_slice(&1u32.to_le_bytes());
    seg.extend_from_slice(&(value as u32).to_le_bytes());
}

/// Append a LONG (type 4) IFD entry.
fn push_long(seg: &mut Vec<u8>, tag: u16, value: u32) {
    seg.extend_from_slice(&tag.to_le_bytes());
    seg.extend_from_slice(&4u16.to_le_bytes());
    seg.extend_from_slice(&1u32.to_le_bytes());
    seg.extend_from_slice(&value.to_le_bytes());
}
