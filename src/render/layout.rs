use crate::config::model::TimeUnit;
use crate::config::resolve::ResolvedConfig;
use crate::fonts::library::FontLibrary;
use crate::fonts::text::TextShaper;
use crate::foundation::error::TickgifResult;
use crate::render::sprites::SPRITE_PAD;

/// Canvas dimensions and every positional offset downstream components need.
///
/// Computed once per request from the resolved config and shared by the base
/// frame builder and the compositor, so column positions can never drift
/// apart. A pure function of the configuration: recomputing with the same
/// input yields identical geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Final canvas width in pixels.
    pub width: u32,
    /// Final canvas height in pixels.
    pub height: u32,
    /// Enabled columns in display order.
    pub columns: Vec<TimeUnit>,

    glyph_w: f64,
    glyph_h: f64,
    column_width: f64,
    gap: f64,
    top_pad: f64,
    label_gap: f64,
    label_height: f64,
    separator_width: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Layout {
    /// Measure the two-digit numeral glyph and derive all geometry.
    ///
    /// Explicit non-zero `width`/`height` in the config are honored verbatim;
    /// when they exceed the auto-computed size the content block is centered
    /// in the larger canvas. Dimensions are ceiling-rounded to whole pixels.
    pub fn compute(
        cfg: &ResolvedConfig,
        fonts: &FontLibrary,
        shaper: &mut TextShaper,
    ) -> TickgifResult<Layout> {
        let size = f64::from(cfg.number_size);
        let font = fonts.resolve(&cfg.number_font);
        let (glyph_w, glyph_h) = shaper.measure("00", &font, cfg.number_size)?;

        let column_pad = (size * 0.25).max(6.0);
        let column_width = glyph_w + 2.0 * column_pad;
        let gap = (size * 0.03).max(1.0);
        let top_pad = (size * 0.35).max(12.0);
        let label_gap = (size * 0.08).max(3.0);
        let label_height = f64::from(cfg.label_size) * 1.3;

        let columns = cfg.units.clone();
        let n = columns.len() as f64;
        let label_band = if cfg.show_labels {
            label_gap + label_height
        } else {
            0.0
        };

        let auto_width = (column_width * n + gap * (n - 1.0)).ceil() as u32;
        let auto_height = (top_pad + glyph_h + label_band + top_pad).ceil() as u32;

        let width = if cfg.width > 0 { cfg.width } else { auto_width };
        let height = if cfg.height > 0 { cfg.height } else { auto_height };

        Ok(Layout {
            width,
            height,
            columns,
            glyph_w,
            glyph_h,
            column_width,
            gap,
            top_pad,
            label_gap,
            label_height,
            separator_width: (size * 0.04).max(2.0),
            origin_x: (f64::from(width) - f64::from(auto_width)).max(0.0) * 0.5,
            origin_y: (f64::from(height) - f64::from(auto_height)).max(0.0) * 0.5,
        })
    }

    /// Left edge of column `i`.
    pub fn column_x(&self, i: usize) -> f64 {
        self.origin_x + (i as f64) * (self.column_width + self.gap)
    }

    /// Horizontal center of column `i`.
    pub fn column_center_x(&self, i: usize) -> f64 {
        self.column_x(i) + self.column_width * 0.5
    }

    /// Top edge of the numeral glyph box.
    pub fn digit_top(&self) -> f64 {
        self.origin_y + self.top_pad
    }

    /// Top edge of the label band below the numerals.
    pub fn label_top(&self) -> f64 {
        self.digit_top() + self.glyph_h + self.label_gap
    }

    /// Placement of a digit sprite of width `sprite_w` for column `i`.
    ///
    /// The sprite carries [`SPRITE_PAD`] pixels of padding on each side, so
    /// it is shifted up by the padding to align the glyph with the top pad.
    pub fn sprite_pos(&self, i: usize, sprite_w: u32) -> (i64, i64) {
        let x = self.column_center_x(i) - f64::from(sprite_w) * 0.5;
        let y = self.digit_top() - SPRITE_PAD;
        (x.round() as i64, y.round() as i64)
    }

    /// Separator stroke between columns `i` and `i + 1` as `(x, y, w, h)`.
    ///
    /// A vertical bar centered in the inter-column gap, spanning the middle
    /// half of the glyph height.
    pub fn separator_rect(&self, i: usize) -> (f64, f64, f64, f64) {
        let mid = self.column_x(i) + self.column_width + self.gap * 0.5;
        (
            mid - self.separator_width * 0.5,
            self.digit_top() + self.glyph_h * 0.25,
            self.separator_width,
            self.glyph_h * 0.5,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
