//! Tickgif renders a live countdown timer as a compact, looping animated GIF.
//!
//! Given a [`RenderConfig`] (colors, fonts, visible time units, expiry
//! behavior) and an injected "now" instant, [`Generator::generate`] produces a
//! finished GIF byte stream: sixty one-second frames while the countdown is
//! running, or a single terminal frame once it has expired.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `RenderConfig -> ResolvedConfig` (every zero-means-default
//!    policy applied exactly once)
//! 2. **Layout**: measure the two-digit numeral glyph and derive the canvas
//!    size and all column/label/separator offsets ([`Layout`])
//! 3. **Sprites**: render and quantize the 100 two-digit glyphs once per
//!    distinct style, cached process-wide ([`SpriteCache`])
//! 4. **Compose**: copy the base frame and stamp cached digit sprites for each
//!    second of remaining time, fanned out across a rayon worker pool
//! 5. **Diff**: reduce frames 1..59 to the minimal changed bounding box
//! 6. **Encode**: assemble (frame, delay, disposal) triples into a GIF
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the pipeline is a pure function of (config, now); two
//!   invocations produce byte-identical output.
//! - **No IO after setup**: fonts and sprites are resolved before the frame
//!   fan-out; the parallel region touches no shared mutable state.
//! - **Never fail on bad styling**: malformed colors, unknown fonts, and
//!   non-positive sizes silently fall back to documented defaults.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod countdown;
mod encode;
mod fonts;
mod foundation;
mod generator;
mod raster;
mod render;

pub use config::model::{
    DEFAULT_CORNER_RADIUS, DEFAULT_LABEL_FONT_SIZE, DEFAULT_NUMBER_FONT_SIZE, ExpireBehavior,
    RenderConfig, TimeUnit,
};
pub use config::resolve::ResolvedConfig;
pub use countdown::TimeParts;
pub use encode::gif::{AnimationFrame, AnimationSequence, Disposal, FRAME_DELAY_CS};
pub use fonts::library::{FALLBACK_FONT_NAME, FontHandle, FontLibrary};
pub use fonts::text::{TextBrush, TextShaper};
pub use foundation::color::Rgb;
pub use foundation::error::{TickgifError, TickgifResult};
pub use generator::{Generator, Lifecycle, RUNNING_FRAME_COUNT};
pub use raster::frame::IndexedFrame;
pub use raster::palette::{DECOR_RAMP_STEPS, Palette, TEXT_RAMP_STEPS};
pub use raster::quantize::quantize;
pub use raster::surface::Surface;
pub use render::base::build_base_frame;
pub use render::compose::composite_frame;
pub use render::diff::diff_frames;
pub use render::layout::Layout;
pub use render::sprites::{DigitSprites, SPRITE_PAD, SpriteCache, SpriteKey};
