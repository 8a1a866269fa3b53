//! PNG input decoder.
//!
//! Decodes any 8- or 16-bit PNG colour type into an RGBA8 [`Framebuffer`].

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PNG decoder producing framebuffers.
pub struct PngDecoder;

impl PngDecoder {
    /// Decode a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a decodable PNG.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Framebuffer> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let fb = Self::decode(BufReader::new(file))?;

        tracing::debug!(
            path = %path.display(),
            width = fb.width(),
            height = fb.height(),
            "read PNG"
        );
        Ok(fb)
    }

    /// Decode PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a decodable PNG.
    pub fn from_bytes(bytes: &[u8]) -> Result<Framebuffer> {
        Self::decode(bytes)
    }

    fn decode<R: Read>(source: R) -> Result<Framebuffer> {
        let mut decoder = png::Decoder::new(source);
        // Palette -> RGB(A), low bit depths -> 8 bit, 16 bit -> 8 bit
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        let (color_type, bit_depth) = reader.output_color_type();

        if bit_depth != png::BitDepth::Eight {
            return Err(Error::UnsupportedImage(format!("bit depth {bit_depth:?}")));
        }

        let data = &buf[..info.buffer_size()];
        let row_len = info.line_size;
        let channels = color_type.samples();
        let mut rgba = Vec::with_capacity((info.width as usize) * (info.height as usize) * 4);

        for row in data.chunks_exact(row_len) {
            for px in row[..(info.width as usize) * channels].chunks_exact(channels) {
                let pixel = match color_type {
                    png::ColorType::Grayscale => [px[0], px[0], px[0], 255],
                    png::ColorType::GrayscaleAlpha => [px[0], px[0], px[0], px[1]],
                    png::ColorType::Rgb => [px[0], px[1], px[2], 255],
                    png::ColorType::Rgba => [px[0], px[1], px[2], px[3]],
                    png::ColorType::Indexed => {
                        return Err(Error::UnsupportedImage("unexpanded palette".to_string()))
                    }
                };
                rgba.extend_from_slice(&pixel);
            }
        }

        Framebuffer::from_rgba_pixels(info.width, info.height, &rgba)
    }
}
