use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::FrameRGBA;

/// Still image container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StillFormat {
    /// Lossless, keeps alpha.
    Png,
    /// Lossy, flattened over a background.
    Jpeg,
}

impl StillFormat {
    /// Guess from a file extension (`.jpg`/`.jpeg` are JPEG, everything else PNG).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("jpg" | "jpeg") => Self::Jpeg,
            _ => Self::Png,
        }
    }
}

/// Create the parent directory of `path` when missing.
pub fn ensure_parent_dir(path: &Path) -> ReelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn check_frame(frame: &FrameRGBA) -> ReelResult<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(ReelError::encode("frame has zero width or height"));
    }
    if frame.data.len() != frame.width as usize * frame.height as usize * 4 {
        return Err(ReelError::encode(
            "frame.data size mismatch with width*height*4",
        ));
    }
    Ok(())
}

/// Write `frame` as a straight-alpha PNG.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> ReelResult<()> {
    check_frame(frame)?;
    ensure_parent_dir(path)?;
    let data = frame.to_straight_rgba8(None);
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Write `frame` as a JPEG, flattening alpha over `bg_rgba`.
pub fn write_jpeg(frame: &FrameRGBA, path: &Path, bg_rgba: [u8; 4]) -> ReelResult<()> {
    check_frame(frame)?;
    ensure_parent_dir(path)?;
    let rgb: Vec<u8> = frame
        .to_straight_rgba8(Some([bg_rgba[0], bg_rgba[1], bg_rgba[2], 255]))
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    image::save_buffer_with_format(
        path,
        &rgb,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Jpeg,
    )
    .with_context(|| format!("write jpeg '{}'", path.display()))?;
    Ok(())
}

/// Write the reel thumbnail.
pub fn write_thumbnail_jpeg(frame: &FrameRGBA, path: &Path) -> ReelResult<()> {
    write_jpeg(frame, path, [0, 0, 0, 255])
}

/// Write `frame` in the format implied by the extension of `path`.
pub fn write_still(frame: &FrameRGBA, path: &Path, bg_rgba: [u8; 4]) -> ReelResult<()> {
    match StillFormat::from_path(path) {
        StillFormat::Png => write_png(frame, path),
        StillFormat::Jpeg => write_jpeg(frame, path, bg_rgba),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/still.rs"]
mod tests;
