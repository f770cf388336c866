use vello_cpu::kurbo::{Affine, BezPath, Rect, RoundedRect, Shape as _};

use crate::fonts::text::TextBrush;
use crate::foundation::color::Rgb;
use crate::foundation::error::{TickgifError, TickgifResult};

/// Full-color drawing surface backed by the `vello_cpu` rasterizer.
///
/// Draw calls are recorded into a render context and rasterized once by
/// [`Surface::finish`], which returns premultiplied RGBA8 bytes ready for
/// quantization. The surface starts fully transparent.
pub struct Surface {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    width: u32,
    height: u32,
}

impl Surface {
    /// Create a transparent surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> TickgifResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| TickgifError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| TickgifError::validation("surface height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(TickgifError::validation("surface dimensions must be > 0"));
        }

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint_transform(Affine::IDENTITY);

        Ok(Self {
            ctx,
            pixmap: vello_cpu::Pixmap::new(w, h),
            width,
            height,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill an axis-aligned rectangle with a solid color.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        self.ctx.set_transform(Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&Rect::new(x, y, x + w, y + h));
    }

    /// Fill a rounded rectangle with a solid color.
    ///
    /// The radius is clamped so opposing corners cannot overlap.
    pub fn fill_rounded_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Rgb) {
        let radius = radius.min(w * 0.5).min(h * 0.5).max(0.0);
        let rr = RoundedRect::new(x, y, x + w, y + h, radius);
        let mut path = BezPath::new();
        for el in rr.path_elements(0.1) {
            path.push(el);
        }

        self.ctx.set_transform(Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&path);
    }

    /// Draw a shaped text layout with its top-left corner at `(x, y)`.
    ///
    /// Glyph color comes from the brush baked into each run.
    pub fn draw_layout(
        &mut self,
        layout: &parley::Layout<TextBrush>,
        font: &vello_cpu::peniko::FontData,
        x: f64,
        y: f64,
    ) {
        self.ctx.set_transform(Affine::translate((x, y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(Affine::IDENTITY);
    }

    /// Rasterize all recorded draws and return premultiplied RGBA8 bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.pixmap.data_as_u8_slice().to_vec()
    }
}

fn paint(color: Rgb) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255)
}
