use crate::fonts::library::FontHandle;
use crate::foundation::color::Rgb;
use crate::foundation::error::{TickgifError, TickgifResult};

/// RGBA brush color carried through shaped glyph runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgb> for TextBrush {
    fn from(c: Rgb) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Stateful helper for shaping and measuring plain text with Parley.
///
/// One shaper is created per request before the frame fan-out; the parallel
/// region never shapes text.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    /// Construct a shaper with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a single line of text in `font` at `size_px`.
    pub fn shape(
        &mut self,
        text: &str,
        font: &FontHandle,
        size_px: f32,
        color: Rgb,
    ) -> TickgifResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(TickgifError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.data().to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TickgifError::font(format!(
                "no font families registered from font '{}'",
                font.name()
            ))
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| {
                TickgifError::font(format!("font '{}' family has no name", font.name()))
            })?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush::from(color)));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Measure the rendered width/height of `text` in `font` at `size_px`.
    pub fn measure(
        &mut self,
        text: &str,
        font: &FontHandle,
        size_px: f32,
    ) -> TickgifResult<(f64, f64)> {
        let layout = self.shape(text, font, size_px, Rgb::BLACK)?;
        Ok(Self::layout_size(&layout))
    }

    /// Width/height of an already-built layout from its line metrics.
    pub fn layout_size(layout: &parley::Layout<TextBrush>) -> (f64, f64) {
        let mut w = 0.0f64;
        let mut h = 0.0f64;
        for line in layout.lines() {
            let m = line.metrics();
            w = w.max(f64::from(m.advance));
            h += f64::from(m.ascent + m.descent + m.leading);
        }
        (w.max(1.0), h.max(1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/text.rs"]
mod tests;
