use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::fonts::library::FontLibrary;
use crate::fonts::text::TextShaper;
use crate::foundation::color::Rgb;
use crate::foundation::error::TickgifResult;
use crate::raster::frame::IndexedFrame;
use crate::raster::palette::Palette;
use crate::raster::quantize::quantize;
use crate::raster::surface::Surface;

/// Padding around the digit glyph inside each sprite, in pixels per side.
pub const SPRITE_PAD: f64 = 6.0;

/// Cache key for one rendered digit sprite set.
///
/// Font size is keyed by its bit pattern so the key stays `Eq + Hash`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    /// Background color the digits are rendered over.
    pub background: Rgb,
    /// Digit color.
    pub foreground: Rgb,
    /// Numeral font name.
    pub font: String,
    /// Numeral font size as raw `f32` bits.
    pub size_bits: u32,
}

impl SpriteKey {
    /// Pack a style into a comparable key.
    pub fn new(background: Rgb, foreground: Rgb, font: &str, size: f32) -> Self {
        Self {
            background,
            foreground,
            font: font.to_string(),
            size_bits: size.to_bits(),
        }
    }

    /// The font size this key was built from.
    pub fn size(&self) -> f32 {
        f32::from_bits(self.size_bits)
    }
}

/// The 100 pre-rendered, pre-quantized two-digit glyphs for one style.
///
/// The palette used to build the sprites is a strict prefix of the request
/// palette for the same background/text colors, which is what makes raw index
/// stamping onto the base frame valid.
#[derive(Clone, Debug)]
pub struct DigitSprites {
    width: u32,
    height: u32,
    palette: Palette,
    glyphs: Vec<IndexedFrame>,
}

impl DigitSprites {
    /// Sprite width in pixels (shared by all 100 glyphs).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sprite height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Palette the sprites were quantized against.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Sprite for `value`, clamped to the covered range 0..=99.
    pub fn glyph(&self, value: u8) -> &IndexedFrame {
        &self.glyphs[usize::from(value.min(99))]
    }
}

/// Process-wide cache of [`DigitSprites`] keyed by style.
///
/// Lookups take the read lock; a miss builds outside any lock and inserts
/// under the write lock. Concurrent misses for the same key may both build;
/// builds are deterministic, so the entries are value-identical and the last
/// writer wins. Entries are never evicted: the key space is bounded by the
/// style combinations actually requested and each entry is a set of small
/// bitmaps.
#[derive(Debug, Default)]
pub struct SpriteCache {
    entries: RwLock<HashMap<SpriteKey, Arc<DigitSprites>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SpriteCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the sprite set for `key`, building it on first use.
    ///
    /// The second return value reports whether the lookup was a cache hit.
    pub fn get_or_build(
        &self,
        key: &SpriteKey,
        fonts: &FontLibrary,
    ) -> TickgifResult<(Arc<DigitSprites>, bool)> {
        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            if let Some(entry) = entries.get(key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Ok((entry.clone(), true));
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let built = Arc::new(build_digit_sprites(key, fonts)?);

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.clone(), built.clone());
        Ok((built, false))
    }

    /// Number of cached sprite sets.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total lookups that found an existing entry.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total lookups that had to build.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

/// Render and quantize all 100 two-digit glyphs for one style.
fn build_digit_sprites(key: &SpriteKey, fonts: &FontLibrary) -> TickgifResult<DigitSprites> {
    let font = fonts.resolve(&key.font);
    let font_data = font.to_font_data();
    let size = key.size();

    let mut shaper = TextShaper::new();
    let (glyph_w, glyph_h) = shaper.measure("00", &font, size)?;
    let width = (glyph_w + 2.0 * SPRITE_PAD).ceil() as u32;
    let height = (glyph_h + 2.0 * SPRITE_PAD).ceil() as u32;

    let palette = Palette::build(key.background, key.foreground, &[]);

    let mut glyphs = Vec::with_capacity(100);
    for value in 0..100u32 {
        let text = format!("{value:02}");
        let layout = shaper.shape(&text, &font, size, key.foreground)?;
        let (text_w, _) = TextShaper::layout_size(&layout);

        let mut surface = Surface::new(width, height)?;
        surface.fill_rect(0.0, 0.0, f64::from(width), f64::from(height), key.background);
        surface.draw_layout(
            &layout,
            &font_data,
            (f64::from(width) - text_w) * 0.5,
            SPRITE_PAD,
        );
        glyphs.push(quantize(&surface.finish(), width, height, &palette));
    }

    Ok(DigitSprites {
        width,
        height,
        palette,
        glyphs,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/sprites.rs"]
mod tests;
