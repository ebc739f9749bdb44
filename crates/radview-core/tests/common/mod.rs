use ndarray::Array2;

use radview_core::frame::RawFrame;
use radview_core::io::dicom::{DICOM_MAGIC, DICOM_PREAMBLE_LEN};

/// Build a frame filled with one sample value.
pub fn make_frame(h: usize, w: usize, fill: u16) -> RawFrame {
    RawFrame::new(Array2::from_elem((h, w), fill), 16)
}

/// Build a frame whose samples ramp from 0 across the raster.
pub fn make_ramp_frame(h: usize, w: usize) -> RawFrame {
    let mut samples = Array2::<u16>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            samples[[row, col]] = (row * w + col) as u16;
        }
    }
    RawFrame::new(samples, 16)
}

/// Build a byte buffer with a valid DICOM signature (128-byte preamble +
/// "DICM") followed by `payload_len` filler bytes.
pub fn build_dicom_buffer(payload_len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; DICOM_PREAMBLE_LEN];
    buf.extend_from_slice(DICOM_MAGIC);
    buf.extend(std::iter::repeat(0xABu8).take(payload_len));
    buf
}

/// Build a buffer of the right length whose magic bytes are wrong.
pub fn build_bad_magic_buffer() -> Vec<u8> {
    let mut buf = vec![0u8; DICOM_PREAMBLE_LEN];
    buf.extend_from_slice(b"DCIM");
    buf.extend_from_slice(&[0u8; 16]);
    buf
}

/// Write bytes to a named temp file and return the handle.
///
/// The file stays alive as long as the returned `NamedTempFile` is not
/// dropped.
pub fn write_temp_file(data: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(data).expect("write temp data");
    f.flush().expect("flush");
    f
}
