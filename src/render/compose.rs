use crate::countdown::TimeParts;
use crate::raster::frame::IndexedFrame;
use crate::render::layout::Layout;
use crate::render::sprites::DigitSprites;

/// Stamp the digit sprites for one instant onto a copy of the base frame.
///
/// Columns are processed in display order; stamping is a raw palette-index
/// copy clipped to the canvas. Values are already range-checked to 0..=99 by
/// the duration decomposition, matching the 100-entry sprite set.
pub fn composite_frame(
    base: &IndexedFrame,
    layout: &Layout,
    sprites: &DigitSprites,
    parts: TimeParts,
) -> IndexedFrame {
    let mut frame = base.clone();
    for (i, unit) in layout.columns.iter().enumerate() {
        let (x, y) = layout.sprite_pos(i, sprites.width());
        frame.stamp(sprites.glyph(parts.for_unit(*unit)), x, y);
    }
    frame
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
