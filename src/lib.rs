//! duskfall: an animated pixel-art sunset computed entirely from maths.
//!
//! A frame is a pure function of `(width, height, elapsed_seconds)`:
//! value-noise clouds over a three-stop sky gradient, a mirrored and
//! rippling sea with a specular streak, a sun with a glow, all quantised
//! through an 8x8 Bayer matrix to a handful of levels per channel.
//!
//! ```no_run
//! let frame = duskfall::render_frame(160, 90, 12.5);
//! assert_eq!(frame.as_bytes().len(), 160 * 90 * 4);
//! ```

pub mod clock;
pub mod constants;
pub mod display;
pub mod dither;
pub mod error;
pub mod export;
pub mod frame;
pub mod noise;
pub mod palette;
pub mod scene;
pub mod scheduler;
pub mod util;

pub use display::PixelBuffer;
pub use error::{DuskfallError, Result};
pub use frame::{render_frame, FrameRequest};
