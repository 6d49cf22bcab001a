use crate::pixel::{Rgb332, Rgb444};
use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage, RgbImage};
use indicatif::ProgressBar;
use itertools::Itertools;
use std::io::Write;

/// Half of the 640x480 VGA mode, which is what the frame buffer holds.
pub const VBUF_WIDTH: u32 = 320;
pub const VBUF_HEIGHT: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemFormat {
    Rgb444,
    Rgb332,
}

impl MemFormat {
    pub fn line(&self, [r, g, b]: [u8; 3]) -> String {
        let color = Rgb444::from_rgb888([r, g, b]);
        match self {
            MemFormat::Rgb444 => color.to_string(),
            MemFormat::Rgb332 => Rgb332::from_12bit(color.bits() as u32).to_string(),
        }
    }
}

/// Stretches to exactly `width` x `height`; the aspect ratio is not preserved.
pub fn fit_to_frame_buffer(image: DynamicImage, size: Option<(u32, u32)>) -> RgbImage {
    match size {
        Some((width, height)) if (width, height) != (image.width(), image.height()) => {
            image.resize_exact(width, height, FilterType::Lanczos3).to_rgb8()
        }
        _ => image.to_rgb8(),
    }
}

/// Writes one line per pixel in row-major order and returns the pixel count.
pub fn write_mem<W: Write>(
    image: &RgbImage,
    format: MemFormat,
    mut output: W,
    progress: &ProgressBar,
) -> Result<u64> {
    let mut count = 0u64;
    for (y, x) in (0..image.height()).cartesian_product(0..image.width()) {
        writeln!(output, "{}", format.line(image.get_pixel(x, y).0))
            .context("error while writing mem file")?;
        count += 1;
        if x + 1 == image.width() {
            progress.inc(1);
        }
    }
    output.flush().context("error while flushing mem file")?;
    Ok(count)
}
