use crate::foundation::color::Rgb;

/// Interpolation steps inserted between background and the text color.
pub const TEXT_RAMP_STEPS: usize = 6;

/// Interpolation steps inserted between background and each decoration color.
pub const DECOR_RAMP_STEPS: usize = 3;

/// An ordered, indexed color palette shared by every frame of one render.
///
/// Invariants: the background color is always index 0; declared foreground
/// colors are always present as exact entries; interpolation entries exist
/// only so anti-aliased glyph edges quantize without visible banding. Small
/// enough that an exhaustive nearest-neighbor scan per pixel is cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    transparent: Option<u8>,
}

impl Palette {
    /// A one-entry palette holding only `color`.
    pub fn single(color: Rgb) -> Self {
        Self {
            colors: vec![color],
            transparent: None,
        }
    }

    /// Build a palette of `background`, a [`TEXT_RAMP_STEPS`]-step ramp to
    /// `text` plus the exact text color, then per decoration color a
    /// [`DECOR_RAMP_STEPS`]-step ramp plus the exact color.
    ///
    /// Decoration colors already present in the palette are skipped so the
    /// nearest-neighbor search stays unambiguous.
    pub fn build(background: Rgb, text: Rgb, decorations: &[Rgb]) -> Self {
        let mut colors = Vec::with_capacity(
            2 + TEXT_RAMP_STEPS + decorations.len() * (DECOR_RAMP_STEPS + 1),
        );
        colors.push(background);
        push_ramp(&mut colors, background, text, TEXT_RAMP_STEPS);
        colors.push(text);

        for &decoration in decorations {
            if colors.contains(&decoration) {
                continue;
            }
            push_ramp(&mut colors, background, decoration, DECOR_RAMP_STEPS);
            colors.push(decoration);
        }

        Self {
            colors,
            transparent: None,
        }
    }

    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries (never true for built palettes).
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if present.
    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.colors.get(usize::from(index)).copied()
    }

    /// All entries in index order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Append an entry (e.g. a transparent sentinel slot) and return its index.
    pub fn push(&mut self, color: Rgb) -> u8 {
        debug_assert!(self.colors.len() < 256);
        self.colors.push(color);
        (self.colors.len() - 1) as u8
    }

    /// Declare `index` as the GIF transparent index for frames using this
    /// palette.
    pub fn set_transparent(&mut self, index: u8) {
        debug_assert!(usize::from(index) < self.colors.len());
        self.transparent = Some(index);
    }

    /// The declared transparent index, if any.
    pub fn transparent_index(&self) -> Option<u8> {
        self.transparent
    }

    /// Exact nearest entry to `color` by squared RGB distance.
    ///
    /// Ties break to the lowest index, which also keeps sentinel entries
    /// (duplicates appended last) from capturing opaque pixels.
    pub fn nearest(&self, color: Rgb) -> u8 {
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = entry.dist_sq(color);
            if dist < best_dist {
                best = i;
                best_dist = dist;
                if dist == 0 {
                    break;
                }
            }
        }
        best as u8
    }

    /// Flat `[r, g, b, ...]` bytes in the form the GIF encoder consumes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.colors.len() * 3);
        for c in &self.colors {
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }
}

fn push_ramp(colors: &mut Vec<Rgb>, from: Rgb, to: Rgb, steps: usize) {
    for i in 1..=steps {
        let t = i as f64 / (steps + 1) as f64;
        colors.push(from.lerp(to, t));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/palette.rs"]
mod tests;
