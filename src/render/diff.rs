use crate::foundation::error::{TickgifError, TickgifResult};
use crate::raster::frame::IndexedFrame;

/// Reduce `current` to the minimal sub-rectangle that differs from `previous`.
///
/// Comparison is raw palette-index equality: both frames share one palette,
/// so index equality implies color equality. When no pixel differs the result
/// is a degenerate 1x1 index-0 frame at the origin, a true no-op placeholder
/// required because the container disallows zero-sized frames. Played back
/// with "do not dispose" disposal, the delta repaints only the changed pixels
/// and leaves the rest of the canvas as drawn by prior frames.
pub fn diff_frames(
    previous: &IndexedFrame,
    current: &IndexedFrame,
) -> TickgifResult<IndexedFrame> {
    if previous.width != current.width || previous.height != current.height {
        return Err(TickgifError::validation(
            "diff requires equally sized frames",
        ));
    }

    let w = current.width as usize;
    let mut min_x = usize::MAX;
    let mut max_x = 0usize;
    let mut min_y = usize::MAX;
    let mut max_y = 0usize;

    for y in 0..current.height as usize {
        let prev_row = &previous.pixels[y * w..(y + 1) * w];
        let cur_row = &current.pixels[y * w..(y + 1) * w];
        if prev_row == cur_row {
            continue;
        }
        let first = cur_row
            .iter()
            .zip(prev_row)
            .position(|(c, p)| c != p)
            .unwrap_or(0);
        let last = w
            - 1
            - cur_row
                .iter()
                .rev()
                .zip(prev_row.iter().rev())
                .position(|(c, p)| c != p)
                .unwrap_or(0);
        min_x = min_x.min(first);
        max_x = max_x.max(last);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_x == usize::MAX {
        return Ok(IndexedFrame::solid(1, 1, 0));
    }

    let out_w = max_x - min_x + 1;
    let out_h = max_y - min_y + 1;
    let mut pixels = Vec::with_capacity(out_w * out_h);
    for y in min_y..=max_y {
        let row = &current.pixels[y * w + min_x..y * w + min_x + out_w];
        pixels.extend_from_slice(row);
    }

    Ok(IndexedFrame {
        left: min_x as u32,
        top: min_y as u32,
        width: out_w as u32,
        height: out_h as u32,
        pixels,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/diff.rs"]
mod tests;
