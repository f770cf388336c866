use std::borrow::Cow;

use crate::foundation::error::{TickgifError, TickgifResult};
use crate::raster::frame::IndexedFrame;
use crate::raster::palette::Palette;

/// Delay applied to every animation step, in hundredths of a second.
pub const FRAME_DELAY_CS: u16 = 100;

/// Playback disposal policy for one animation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposal {
    /// Pixels persist until explicitly overwritten by a later frame.
    ///
    /// This is what makes delta frames valid: a delta repaints only the
    /// changed pixels, leaving the rest of the canvas as drawn before.
    Keep,
    /// The canvas is cleared before the next frame is drawn.
    ///
    /// Used for transparent renders, where a kept frame could never erase a
    /// pixel back to transparency.
    Background,
}

/// One animation step: an indexed frame plus its timing metadata.
#[derive(Clone, Debug)]
pub struct AnimationFrame {
    /// The frame's indexed pixels and placement rectangle.
    pub frame: IndexedFrame,
    /// Display duration in hundredths of a second.
    pub delay_cs: u16,
    /// Disposal applied after the delay elapses.
    pub disposal: Disposal,
}

/// An ordered frame sequence ready for the GIF container.
///
/// Frame 0 is always a full frame; the sequence loops indefinitely. The
/// shared palette is written as the global color table and every frame's
/// pixels index into it.
#[derive(Clone, Debug)]
pub struct AnimationSequence {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Palette shared by every frame.
    pub palette: Palette,
    /// Animation steps in playback order.
    pub frames: Vec<AnimationFrame>,
}

impl AnimationSequence {
    /// An empty sequence for the given canvas and palette.
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            width,
            height,
            palette,
            frames: Vec::new(),
        }
    }

    /// Append one animation step.
    pub fn push(&mut self, frame: IndexedFrame, delay_cs: u16, disposal: Disposal) {
        self.frames.push(AnimationFrame {
            frame,
            delay_cs,
            disposal,
        });
    }

    /// Encode the sequence into a complete GIF byte stream.
    ///
    /// Fails on an empty frame list or a frame that does not fit the canvas;
    /// both are internal contract violations and no partial output is
    /// returned.
    pub fn encode(&self) -> TickgifResult<Vec<u8>> {
        if self.frames.is_empty() {
            return Err(TickgifError::encode("animation has no frames"));
        }

        let width = to_u16(self.width, "canvas width")?;
        let height = to_u16(self.height, "canvas height")?;
        let palette_bytes = self.palette.to_rgb_bytes();

        let mut buf = Vec::new();
        {
            let mut encoder = gif::Encoder::new(&mut buf, width, height, &palette_bytes)
                .map_err(|e| TickgifError::encode(format!("gif encoder: {e}")))?;
            encoder
                .set_repeat(gif::Repeat::Infinite)
                .map_err(|e| TickgifError::encode(format!("gif loop extension: {e}")))?;

            for step in &self.frames {
                let f = &step.frame;
                if f.left + f.width > self.width || f.top + f.height > self.height {
                    return Err(TickgifError::encode(format!(
                        "frame {}x{}+{}+{} exceeds {}x{} canvas",
                        f.width, f.height, f.left, f.top, self.width, self.height
                    )));
                }

                let mut out = gif::Frame::default();
                out.left = to_u16(f.left, "frame left")?;
                out.top = to_u16(f.top, "frame top")?;
                out.width = to_u16(f.width, "frame width")?;
                out.height = to_u16(f.height, "frame height")?;
                out.delay = step.delay_cs;
                out.dispose = match step.disposal {
                    Disposal::Keep => gif::DisposalMethod::Keep,
                    Disposal::Background => gif::DisposalMethod::Background,
                };
                out.transparent = self.palette.transparent_index();
                out.buffer = Cow::Borrowed(f.pixels.as_slice());
                encoder
                    .write_frame(&out)
                    .map_err(|e| TickgifError::encode(format!("gif frame: {e}")))?;
            }
        }

        Ok(buf)
    }
}

fn to_u16(value: u32, what: &str) -> TickgifResult<u16> {
    value
        .try_into()
        .map_err(|_| TickgifError::encode(format!("{what} {value} exceeds u16")))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
