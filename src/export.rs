//! PNG export of the upscaled frame, with a small JSON sidecar describing
//! which moment of the cycle it shows.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::clock::phase;
use crate::display::PixelBuffer;
use crate::error::{DuskfallError, Result};

/// Sidecar written next to every exported image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameMeta {
    /// Scene resolution before upscaling
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub elapsed_seconds: f64,
    pub phase: f64,
}

impl FrameMeta {
    pub fn new(buffer: &PixelBuffer, scale: u32, elapsed_seconds: f64) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            scale,
            elapsed_seconds,
            phase: phase(elapsed_seconds),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// `duskfall-<elapsed ms>.png` inside `dir`
pub fn timestamped_path(dir: impl AsRef<Path>, elapsed_seconds: f64) -> PathBuf {
    let millis = (elapsed_seconds.max(0.0) * 1000.0).round() as u64;
    dir.as_ref().join(format!("duskfall-{:010}.png", millis))
}

/// `duskfall-<index>.png` inside `dir`, for numbered frame sequences
pub fn sequence_path(dir: impl AsRef<Path>, index: u32) -> PathBuf {
    dir.as_ref().join(format!("duskfall-{:06}.png", index))
}

/// Sidecar path for an image path (`frame.png` -> `frame.json`)
pub fn sidecar_path(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().with_extension("json")
}

/// Upscale `buffer` by `scale` with nearest-neighbour filtering and save it
/// as PNG, plus the JSON sidecar. Parent directories are created.
pub fn export_png(
    buffer: &PixelBuffer,
    scale: u32,
    elapsed_seconds: f64,
    path: impl AsRef<Path>,
) -> Result<FrameMeta> {
    let path = path.as_ref();
    if scale == 0 || buffer.width() == 0 || buffer.height() == 0 {
        return Err(DuskfallError::InvalidSize {
            width: buffer.width().saturating_mul(scale),
            height: buffer.height().saturating_mul(scale),
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let upscaled = buffer.upscaled(scale)?;
    image::save_buffer_with_format(
        path,
        upscaled.as_bytes(),
        upscaled.width(),
        upscaled.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;

    let meta = FrameMeta::new(buffer, scale, elapsed_seconds);
    let sidecar = sidecar_path(path);
    fs::write(&sidecar, serde_json::to_string_pretty(&meta)?)?;
    debug!("wrote {} and {}", path.display(), sidecar.display());

    Ok(meta)
}
