use std::path::PathBuf;

use rayon::prelude::*;

use crate::config::model::{ExpireBehavior, RenderConfig};
use crate::config::resolve::ResolvedConfig;
use crate::countdown::TimeParts;
use crate::encode::gif::{AnimationSequence, Disposal, FRAME_DELAY_CS};
use crate::fonts::library::FontLibrary;
use crate::fonts::text::TextShaper;
use crate::foundation::error::TickgifResult;
use crate::raster::frame::IndexedFrame;
use crate::raster::palette::Palette;
use crate::raster::quantize::quantize;
use crate::raster::surface::Surface;
use crate::render::base::build_base_frame;
use crate::render::compose::composite_frame;
use crate::render::diff::diff_frames;
use crate::render::layout::Layout;
use crate::render::sprites::{SpriteCache, SpriteKey};

/// Frames in a running countdown animation, one per second.
pub const RUNNING_FRAME_COUNT: usize = 60;

/// Countdown lifecycle, resolved once per request.
///
/// A pure function of the expired flag and the configured expire behavior;
/// it never changes mid-animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Sixty per-second frames, looping.
    Running,
    /// One frame through the normal pipeline with every value forced to zero.
    ExpiredShowZeros,
    /// One 1x1 fully transparent frame; the pipeline is bypassed entirely.
    ExpiredHidden,
    /// One frame of the configured custom text.
    ExpiredCustomText,
}

impl Lifecycle {
    /// Resolve the lifecycle for a request.
    pub fn of(expired: bool, behavior: ExpireBehavior) -> Self {
        if !expired {
            return Lifecycle::Running;
        }
        match behavior {
            ExpireBehavior::ShowZeros => Lifecycle::ExpiredShowZeros,
            ExpireBehavior::Hide => Lifecycle::ExpiredHidden,
            ExpireBehavior::CustomText => Lifecycle::ExpiredCustomText,
        }
    }
}

/// The rendering pipeline host.
///
/// Owns the process-wide shared state (the font library and the digit
/// sprite cache) and drives the full pipeline for each request. Constructed
/// explicitly (no globals) so tests can run against a fresh, empty cache.
#[derive(Debug)]
pub struct Generator {
    fonts: FontLibrary,
    sprites: SpriteCache,
}

impl Generator {
    /// Create a generator loading bundled fonts from `font_root`.
    ///
    /// Fails only when the fallback font is unreadable, which is an
    /// unrecoverable precondition for any rendering.
    pub fn new(font_root: impl Into<PathBuf>) -> TickgifResult<Self> {
        Ok(Self {
            fonts: FontLibrary::new(font_root)?,
            sprites: SpriteCache::new(),
        })
    }

    /// The shared font library.
    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// The shared digit sprite cache.
    pub fn sprites(&self) -> &SpriteCache {
        &self.sprites
    }

    /// Run the full pipeline for one request at the injected instant `now`.
    ///
    /// Deterministic: for a fixed `(cfg, now)` two invocations produce
    /// byte-identical output.
    #[tracing::instrument(skip_all, fields(expired = cfg.expired))]
    pub fn generate(
        &self,
        cfg: &RenderConfig,
        now: time::OffsetDateTime,
    ) -> TickgifResult<Vec<u8>> {
        let resolved = ResolvedConfig::resolve(cfg);
        match Lifecycle::of(resolved.expired, resolved.expire_behavior) {
            Lifecycle::Running => {
                self.countdown_animation(&resolved, now, RUNNING_FRAME_COUNT, false)
            }
            Lifecycle::ExpiredShowZeros => self.countdown_animation(&resolved, now, 1, true),
            Lifecycle::ExpiredHidden => hidden_frame(&resolved),
            Lifecycle::ExpiredCustomText => self.custom_text_frame(&resolved),
        }
    }

    /// The normal pipeline: layout, sprites, base frame, per-second
    /// compositing fanned out over the worker pool, then a sequential diff
    /// pass and final assembly.
    fn countdown_animation(
        &self,
        cfg: &ResolvedConfig,
        now: time::OffsetDateTime,
        frame_count: usize,
        force_zero: bool,
    ) -> TickgifResult<Vec<u8>> {
        let mut shaper = TextShaper::new();
        let layout = Layout::compute(cfg, &self.fonts, &mut shaper)?;
        let palette = request_palette(cfg);

        let key = SpriteKey::new(cfg.background, cfg.text, &cfg.number_font, cfg.number_size);
        let (sprites, cache_hit) = self.sprites.get_or_build(&key, &self.fonts)?;
        tracing::debug!(cache_hit, cached_styles = self.sprites.len(), "digit sprites ready");

        let base = build_base_frame(cfg, &layout, &palette, &self.fonts, &mut shaper)?;

        // Fonts and sprites are resolved; no IO happens past this point.
        // Each frame derives its value from the absolute remaining time, so
        // the fan-out has no cross-frame dependencies and the collect
        // preserves index order.
        let started = std::time::Instant::now();
        let composed: Vec<IndexedFrame> = (0..frame_count)
            .into_par_iter()
            .map(|i| {
                let parts = if force_zero {
                    TimeParts::ZERO
                } else {
                    TimeParts::at(cfg.end_time, now, i as i64)
                };
                composite_frame(&base, &layout, &sprites, parts)
            })
            .collect();
        tracing::debug!(
            frames = composed.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "frames composited"
        );

        // Diffing needs consecutive neighbors in order, so it runs as a
        // sequential pass over the completed frame array.
        let mut sequence = AnimationSequence::new(layout.width, layout.height, palette);
        if cfg.transparent {
            // A kept delta can never erase a pixel back to transparency, so
            // transparent renders ship full frames cleared between steps.
            for frame in composed {
                sequence.push(frame, FRAME_DELAY_CS, Disposal::Background);
            }
        } else {
            for (i, frame) in composed.iter().enumerate() {
                let step = if i == 0 {
                    frame.clone()
                } else {
                    diff_frames(&composed[i - 1], frame)?
                };
                sequence.push(step, FRAME_DELAY_CS, Disposal::Keep);
            }
        }

        sequence.encode()
    }

    /// One frame of the configured custom text, centered.
    ///
    /// The canvas is sized to fit the text but never smaller than the normal
    /// layout for this config, so swapping a running countdown's image for
    /// its expired state keeps visual continuity.
    fn custom_text_frame(&self, cfg: &ResolvedConfig) -> TickgifResult<Vec<u8>> {
        let mut shaper = TextShaper::new();
        let layout = Layout::compute(cfg, &self.fonts, &mut shaper)?;

        let font = self.fonts.resolve(&cfg.expire_font);
        let text = shaper.shape(&cfg.expire_text, &font, cfg.expire_size, cfg.expire_color)?;
        let (text_w, text_h) = TextShaper::layout_size(&text);

        let pad = (f64::from(cfg.expire_size) * 0.35).max(12.0);
        let width = layout.width.max((text_w + 2.0 * pad).ceil() as u32);
        let height = layout.height.max((text_h + 2.0 * pad).ceil() as u32);

        let mut palette = Palette::build(cfg.background, cfg.expire_color, &[]);
        apply_transparency(&mut palette, cfg);

        let mut surface = Surface::new(width, height)?;
        let (w, h) = (f64::from(width), f64::from(height));
        if cfg.rounded {
            surface.fill_rounded_rect(0.0, 0.0, w, h, f64::from(cfg.corner_radius), cfg.background);
        } else {
            surface.fill_rect(0.0, 0.0, w, h, cfg.background);
        }
        surface.draw_layout(
            &text,
            &font.to_font_data(),
            (w - text_w) * 0.5,
            (h - text_h) * 0.5,
        );

        let frame = quantize(&surface.finish(), width, height, &palette);
        let mut sequence = AnimationSequence::new(width, height, palette);
        sequence.push(frame, FRAME_DELAY_CS, Disposal::Keep);
        sequence.encode()
    }
}

/// The full request palette: background, text ramp, and the enabled
/// decoration colors, plus the transparency slot the flags call for.
///
/// The sprite palette for the same colors is a strict prefix of this palette,
/// which keeps raw sprite-index stamping valid.
fn request_palette(cfg: &ResolvedConfig) -> Palette {
    let mut decorations = Vec::with_capacity(2);
    if cfg.show_labels {
        decorations.push(cfg.label);
    }
    if cfg.show_separators {
        decorations.push(cfg.separator);
    }

    let mut palette = Palette::build(cfg.background, cfg.text, &decorations);
    apply_transparency(&mut palette, cfg);
    palette
}

/// Declare the palette's transparent slot per the config flags.
///
/// Transparent renders mark the background entry itself. Opaque rounded
/// renders append a sentinel copy of the background as the last entry so the
/// corners punch through while interior background pixels stay opaque
/// index 0; the quantizer routes only fully transparent source pixels there.
fn apply_transparency(palette: &mut Palette, cfg: &ResolvedConfig) {
    if cfg.transparent {
        palette.set_transparent(0);
    } else if cfg.rounded {
        let sentinel = palette.push(cfg.background);
        palette.set_transparent(sentinel);
    }
}

/// The `expired_hidden` terminal state: a single-frame, 1x1, fully
/// transparent image that bypasses the rendering pipeline.
fn hidden_frame(cfg: &ResolvedConfig) -> TickgifResult<Vec<u8>> {
    let mut palette = Palette::single(cfg.background);
    palette.set_transparent(0);

    let mut sequence = AnimationSequence::new(1, 1, palette);
    sequence.push(IndexedFrame::solid(1, 1, 0), FRAME_DELAY_CS, Disposal::Keep);
    sequence.encode()
}

#[cfg(test)]
#[path = "../tests/unit/generator.rs"]
mod tests;
