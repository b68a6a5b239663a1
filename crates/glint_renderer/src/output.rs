//! Image serialization.
//!
//! The framebuffer already holds gamma-corrected colors in final
//! image order, so both writers are a single linear pass. The output
//! format is picked from the file extension.

use crate::integrator::color_to_rgb8;
use crate::Framebuffer;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors surfaced while writing the rendered image.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("unsupported output format {0:?} (expected .ppm or .png)")]
    UnsupportedFormat(String),
}

/// Write the framebuffer as plain-text PPM (P3).
pub fn write_ppm<W: Write>(fb: &Framebuffer, mut out: W) -> Result<(), OutputError> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", fb.width(), fb.height())?;
    writeln!(out, "255")?;

    for color in fb.pixels() {
        let [r, g, b] = color_to_rgb8(*color);
        writeln!(out, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save the framebuffer as a P3 PPM file.
pub fn save_ppm(fb: &Framebuffer, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(fb, &mut writer)?;
    writer.flush()?;
    info!("image saved as {}", path.display());
    Ok(())
}

/// Save the framebuffer as an 8-bit PNG.
pub fn save_png(fb: &Framebuffer, path: &Path) -> Result<(), OutputError> {
    let img = image::RgbImage::from_fn(fb.width(), fb.height(), |x, y| {
        image::Rgb(color_to_rgb8(fb.get(x, y)))
    });
    img.save(path)?;
    info!("image saved as {}", path.display());
    Ok(())
}

/// Save the framebuffer, choosing the format from the extension.
pub fn save(fb: &Framebuffer, path: &Path) -> Result<(), OutputError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ppm") => save_ppm(fb, path),
        Some("png") => save_png(fb, path),
        other => Err(OutputError::UnsupportedFormat(
            other.unwrap_or("").to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn two_pixel_buffer() -> Framebuffer {
        let mut fb = Framebuffer::new(2, 1);
        fb.set(0, 0, Color::new(1.0, 1.0, 1.0));
        fb.set(1, 0, Color::new(0.0, 0.5, 1.0));
        fb
    }

    #[test]
    fn test_ppm_format() {
        let fb = two_pixel_buffer();
        let mut out = Vec::new();
        write_ppm(&fb, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n0 127 255\n");
    }

    #[test]
    fn test_ppm_rows_are_storage_order() {
        // Pixel (0, 0) is the top-left of the image and must be the
        // first triple in the file.
        let mut fb = Framebuffer::new(1, 2);
        fb.set(0, 0, Color::new(1.0, 0.0, 0.0));
        fb.set(0, 1, Color::new(0.0, 1.0, 0.0));

        let mut out = Vec::new();
        write_ppm(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n1 2\n255\n255 0 0\n0 255 0\n");
    }

    #[test]
    fn test_unsupported_extension() {
        let fb = two_pixel_buffer();
        let err = save(&fb, Path::new("render.bmp")).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedFormat(_)));
    }
}
