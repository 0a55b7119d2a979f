use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{FullscreenType, Window, WindowContext};
use sdl2::EventPump;

use super::PixelBuffer;
use crate::error::{DuskfallError, Result};

/// Texture format whose in-memory byte order is R, G, B, A
#[cfg(target_endian = "little")]
const TEXTURE_FORMAT: PixelFormatEnum = PixelFormatEnum::ABGR8888;
#[cfg(target_endian = "big")]
const TEXTURE_FORMAT: PixelFormatEnum = PixelFormatEnum::RGBA8888;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    fullscreen: bool,
}

/// Streaming texture sized to the scene resolution
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    /// Window drawable size changed
    Resized,
}

impl Display {
    /// Open a resizable window of the given pixel size
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        fullscreen: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init().map_err(DuskfallError::display)?;
        let video_subsystem = sdl_context.video().map_err(DuskfallError::display)?;

        // Nearest-neighbour sampling when the texture is stretched
        sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "0");

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .allow_highdpi()
            .build()
            .map_err(|e| DuskfallError::display(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| DuskfallError::display(e.to_string()))?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(DuskfallError::display)?;

        let mut display = Self {
            canvas,
            event_pump,
            fullscreen: false,
        };
        if fullscreen {
            display.toggle_fullscreen()?;
        }

        Ok((display, texture_creator))
    }

    /// Drawable size in physical pixels
    pub fn output_size(&self) -> Result<(u32, u32)> {
        self.canvas.output_size().map_err(DuskfallError::display)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) -> Result<()> {
        let mode = if self.fullscreen {
            FullscreenType::Off
        } else {
            FullscreenType::Desktop
        };
        self.canvas
            .window_mut()
            .set_fullscreen(mode)
            .map_err(DuskfallError::display)?;
        self.fullscreen = !self.fullscreen;
        Ok(())
    }

    /// Upload the frame and draw it `scale`x enlarged, centred, letterboxed in black
    pub fn present(
        &mut self,
        target: &mut RenderTarget,
        buffer: &PixelBuffer,
        scale: u32,
    ) -> Result<()> {
        if (target.width, target.height) != (buffer.width(), buffer.height()) {
            return Err(DuskfallError::InvalidSize {
                width: buffer.width(),
                height: buffer.height(),
            });
        }

        target
            .texture
            .update(None, buffer.as_bytes(), buffer.pitch())
            .map_err(|e| DuskfallError::display(e.to_string()))?;

        let (out_w, out_h) = self.output_size()?;
        let dst_w = buffer.width().saturating_mul(scale);
        let dst_h = buffer.height().saturating_mul(scale);
        let dst = Rect::new(
            (out_w as i32 - dst_w as i32) / 2,
            (out_h as i32 - dst_h as i32) / 2,
            dst_w,
            dst_h,
        );

        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
        self.canvas
            .copy(&target.texture, None, dst)
            .map_err(DuskfallError::display)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k),
                    repeat: false,
                    ..
                } => events.push(InputEvent::KeyDown(k)),
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..) | WindowEvent::Resized(..),
                    ..
                } => events.push(InputEvent::Resized),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let texture = texture_creator
            .create_texture_streaming(TEXTURE_FORMAT, width, height)
            .map_err(|e| DuskfallError::display(e.to_string()))?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
