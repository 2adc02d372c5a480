#![cfg(feature = "host")]
//! Host-side PNG snapshots of canvases, for docs and tests.

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};

use crate::canvas::PixelCanvas;

/// Write a canvas as an RGB PNG, `scale` image pixels per LED.
pub fn write_canvas_png<const W: usize, const H: usize>(
    canvas: &PixelCanvas<W, H>,
    output_path: impl AsRef<Path>,
    scale: u32,
) -> Result<(), Box<dyn Error>> {
    assert!(scale > 0, "scale must be positive");
    let output_path = output_path.as_ref();
    let width = W as u32 * scale;
    let height = H as u32 * scale;
    let mut bytes = vec![0u8; (width * height * 3) as usize];

    for y in 0..H {
        for x in 0..W {
            let pixel = canvas[(x, y)];
            for local_y in 0..scale {
                for local_x in 0..scale {
                    let image_x = x as u32 * scale + local_x;
                    let image_y = y as u32 * scale + local_y;
                    let offset = ((image_y * width + image_x) * 3) as usize;
                    bytes[offset] = pixel.r;
                    bytes[offset + 1] = pixel.g;
                    bytes[offset + 2] = pixel.b;
                }
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&bytes)?;
    Ok(())
}
