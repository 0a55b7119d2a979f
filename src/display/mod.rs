mod pixel_buffer;
#[cfg(feature = "window")]
mod window;

pub use pixel_buffer::PixelBuffer;
#[cfg(feature = "window")]
pub use window::{Display, InputEvent, RenderTarget};

/// Default scene resolution (before upscaling)
pub const DEFAULT_WIDTH: u32 = 160;
pub const DEFAULT_HEIGHT: u32 = 90;

/// Default nearest-neighbour upscale factor
pub const DEFAULT_SCALE: u32 = 4;

/// Largest scale the viewer will step up to
pub const MAX_SCALE: u32 = 16;
