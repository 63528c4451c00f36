use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{bail, Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, ImageFormat, RgbImage};

use crate::frame::Frame;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }
    Ok(())
}

/// Writes a single rendered image as PNG
pub fn write_png(image: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write image {:?}", path))?;
    log::info!("Wrote image to file {:?}", path);
    Ok(())
}

/// Writes frames as an animated GIF, `delay_ms` per frame
pub fn write_gif(frames: &[Frame], path: impl AsRef<Path>, delay_ms: u32, looping: bool) -> Result<()> {
    let path = path.as_ref();
    if frames.is_empty() {
        bail!("No frames to write to {:?}", path);
    }
    ensure_parent(path)?;

    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    if looping {
        encoder.set_repeat(Repeat::Infinite)?;
    }

    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    let gif_frames = frames.iter().map(|frame| {
        let rgba = DynamicImage::ImageRgb8(frame.image.clone()).to_rgba8();
        image::Frame::from_parts(rgba, 0, 0, delay)
    });
    encoder
        .encode_frames(gif_frames)
        .with_context(|| format!("Failed to encode animation {:?}", path))?;

    log::info!("Wrote {} frames to {:?}", frames.len(), path);
    Ok(())
}
