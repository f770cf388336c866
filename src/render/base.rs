use crate::config::resolve::ResolvedConfig;
use crate::fonts::library::FontLibrary;
use crate::fonts::text::TextShaper;
use crate::foundation::error::TickgifResult;
use crate::raster::frame::IndexedFrame;
use crate::raster::palette::Palette;
use crate::raster::quantize::quantize;
use crate::raster::surface::Surface;
use crate::render::layout::Layout;

/// Render the static portion of a frame: background, labels, and separators.
///
/// Built once per request and copied (not rebuilt) for every time frame.
/// Labels and separators are drawn onto the full-color surface first and the
/// whole surface is quantized once, so their anti-aliased edges land on the
/// palette's interpolation entries.
pub fn build_base_frame(
    cfg: &ResolvedConfig,
    layout: &Layout,
    palette: &Palette,
    fonts: &FontLibrary,
    shaper: &mut TextShaper,
) -> TickgifResult<IndexedFrame> {
    let mut surface = Surface::new(layout.width, layout.height)?;
    let w = f64::from(layout.width);
    let h = f64::from(layout.height);

    if cfg.rounded {
        surface.fill_rounded_rect(0.0, 0.0, w, h, f64::from(cfg.corner_radius), cfg.background);
    } else {
        surface.fill_rect(0.0, 0.0, w, h, cfg.background);
    }

    if cfg.show_labels {
        let font = fonts.resolve(&cfg.label_font);
        let font_data = font.to_font_data();
        for (i, unit) in layout.columns.iter().enumerate() {
            let label = shaper.shape(unit.label(), &font, cfg.label_size, cfg.label)?;
            let (text_w, _) = TextShaper::layout_size(&label);
            surface.draw_layout(
                &label,
                &font_data,
                layout.column_center_x(i) - text_w * 0.5,
                layout.label_top(),
            );
        }
    }

    if cfg.show_separators {
        for i in 0..layout.columns.len().saturating_sub(1) {
            let (x, y, sw, sh) = layout.separator_rect(i);
            surface.fill_rect(x, y, sw, sh, cfg.separator);
        }
    }

    Ok(quantize(
        &surface.finish(),
        layout.width,
        layout.height,
        palette,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/base.rs"]
mod tests;
