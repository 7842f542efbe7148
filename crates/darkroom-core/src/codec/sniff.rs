//! Magic-byte sniffing for cheap rejection of non-image files.

use std::io::Read;
use std::path::Path;

use super::ProbeError;

/// Check that a file starts with a known image signature.
pub fn check(path: &Path) -> Result<(), ProbeError> {
    let mut file = std::fs::File::open(path).map_err(ProbeError::Open)?;

    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header).unwrap_or(0);

    if bytes_read < 4 {
        return Err(ProbeError::Unrecognized(
            "file too small to be an image".to_string(),
        ));
    }

    if !is_valid_image_header(&header, bytes_read) {
        return Err(ProbeError::Unrecognized(
            "no known image signature".to_string(),
        ));
    }

    Ok(())
}

/// Check if the header bytes match known image formats.
fn is_valid_image_header(header: &[u8; 12], bytes_read: usize) -> bool {
    if bytes_read < 4 {
        return false;
    }

    // JPEG: FF D8 FF
    if header[0] == 0xFF && header[1] == 0xD8 && header[2] == 0xFF {
        return true;
    }

    // PNG: 89 50 4E 47
    if header[0] == 0x89 && header[1] == b'P' && header[2] == b'N' && header[3] == b'G' {
        return true;
    }

    // GIF: GIF8
    if header[0] == b'G' && header[1] == b'I' && header[2] == b'F' && header[3] == b'8' {
        return true;
    }

    // WebP: RIFF....WEBP
    if header[0] == b'R' && header[1] == b'I' && header[2] == b'F' && header[3] == b'F' {
        if bytes_read >= 12 {
            return header[8] == b'W' && header[9] == b'E' && header[10] == b'B' && header[11] == b'P';
        }
        // Could be WebP, allow it to proceed
        return true;
    }

    // BMP: BM
    if header[0] == b'B' && header[1] == b'M' {
        return true;
    }

    // TIFF: II (little-endian) or MM (big-endian) followed by version 42.
    // Also covers TIFF-based RAW containers (CR2, NEF, ARW).
    let is_tiff_le = header[0] == b'I' && header[1] == b'I' && header[2] == 0x2A && header[3] == 0x00;
    let is_tiff_be = header[0] == b'M' && header[1] == b'M' && header[2] == 0x00 && header[3] == 0x2A;
    if is_tiff_le || is_tiff_be {
        return true;
    }

    // HEIC/HEIF/AVIF: ftyp box at offset 4
    if bytes_read >= 12
        && header[4] == b'f'
        && header[5] == b't'
        && header[6] == b'y'
        && header[7] == b'p'
    {
        return true;
    }

    false
}
