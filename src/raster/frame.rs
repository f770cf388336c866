/// A palette-indexed raster with an explicit placement offset.
///
/// Two kinds occur in an output sequence: full frames covering the whole
/// canvas (`left == top == 0`, full dimensions) and delta frames covering only
/// the sub-rectangle that changed since the previous frame, placed at its
/// original offset on playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    /// Horizontal placement offset within the canvas.
    pub left: u32,
    /// Vertical placement offset within the canvas.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major palette indices, `width * height` entries.
    pub pixels: Vec<u8>,
}

impl IndexedFrame {
    /// A frame filled with a single palette index, placed at the origin.
    pub fn solid(width: u32, height: u32, index: u8) -> Self {
        Self {
            left: 0,
            top: 0,
            width,
            height,
            pixels: vec![index; (width as usize) * (height as usize)],
        }
    }

    /// Palette index at `(x, y)` in frame-local coordinates.
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Copy `sprite`'s indices into this frame with its top-left corner at
    /// `(x, y)`, clipped to this frame's bounds.
    ///
    /// This is a raw index copy with no blending; both frames must share one
    /// palette (sprite palettes are a prefix of the request palette).
    pub fn stamp(&mut self, sprite: &IndexedFrame, x: i64, y: i64) {
        let dst_w = i64::from(self.width);
        let dst_h = i64::from(self.height);

        for sy in 0..i64::from(sprite.height) {
            let dy = y + sy;
            if dy < 0 || dy >= dst_h {
                continue;
            }
            let src_start = (sy * i64::from(sprite.width)) as usize;
            let sx0 = (-x).max(0);
            let sx1 = (dst_w - x).min(i64::from(sprite.width));
            if sx0 >= sx1 {
                continue;
            }
            let dst_start = (dy * dst_w + x + sx0) as usize;
            let count = (sx1 - sx0) as usize;
            self.pixels[dst_start..dst_start + count]
                .copy_from_slice(&sprite.pixels[src_start + sx0 as usize..src_start + sx0 as usize + count]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;
