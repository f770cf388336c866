use crate::foundation::color::Rgb;
use crate::raster::frame::IndexedFrame;
use crate::raster::palette::Palette;

/// Map a premultiplied RGBA8 surface onto the nearest palette index per pixel.
///
/// The search is an exact nearest-neighbor scan in straight-alpha RGB space
/// (pixels are un-premultiplied first; alpha is otherwise ignored), ties
/// breaking to the lowest index. Fully transparent pixels map to the
/// palette's transparent slot, or index 0 when none is declared. O(pixels x
/// palette entries), which is fine for sprite- and canvas-sized surfaces.
pub fn quantize(pixels: &[u8], width: u32, height: u32, palette: &Palette) -> IndexedFrame {
    debug_assert_eq!(pixels.len(), (width as usize) * (height as usize) * 4);

    let clear_index = palette.transparent_index().unwrap_or(0);
    let mut out = Vec::with_capacity((width as usize) * (height as usize));
    for px in pixels.chunks_exact(4) {
        let a = px[3];
        if a == 0 {
            out.push(clear_index);
            continue;
        }
        out.push(palette.nearest(unpremultiply(px[0], px[1], px[2], a)));
    }

    IndexedFrame {
        left: 0,
        top: 0,
        width,
        height,
        pixels: out,
    }
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> Rgb {
    if a == 255 {
        return Rgb::new(r, g, b);
    }
    let a = u16::from(a);
    let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
    Rgb::new(un(r), un(g), un(b))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/quantize.rs"]
mod tests;
