use time::OffsetDateTime;

use crate::config::model::{
    DEFAULT_CORNER_RADIUS, DEFAULT_LABEL_FONT_SIZE, DEFAULT_NUMBER_FONT_SIZE, ExpireBehavior,
    RenderConfig, TimeUnit,
};
use crate::foundation::color::Rgb;

/// A [`RenderConfig`] with every zero-means-default policy applied.
///
/// Resolution happens exactly once at pipeline entry: hex colors are parsed
/// with silent fallback, non-positive sizes get their defaults, decoration
/// colors inherit the numeral color, and an empty unit set defaults to all
/// four columns. Rendering must always produce some valid image for any
/// syntactically parseable request, so nothing here can fail.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// Instant the countdown reaches zero.
    pub end_time: OffsetDateTime,
    /// Background color; palette index 0.
    pub background: Rgb,
    /// Numeral color.
    pub text: Rgb,
    /// Unit-label color.
    pub label: Rgb,
    /// Separator color.
    pub separator: Rgb,
    /// Numeral font name (may still be unknown; the font provider falls back).
    pub number_font: String,
    /// Numeral font size in pixels, always positive.
    pub number_size: f32,
    /// Unit-label font name.
    pub label_font: String,
    /// Unit-label font size in pixels, always positive.
    pub label_size: f32,
    /// Enabled columns in display order; never empty.
    pub units: Vec<TimeUnit>,
    /// Draw unit captions.
    pub show_labels: bool,
    /// Draw column separators.
    pub show_separators: bool,
    /// Background is transparent in the output.
    pub transparent: bool,
    /// Background is clipped to a rounded rectangle.
    pub rounded: bool,
    /// Corner radius in pixels, always positive.
    pub corner_radius: f32,
    /// Explicit canvas width, or zero for auto-layout.
    pub width: u32,
    /// Explicit canvas height, or zero for auto-layout.
    pub height: u32,
    /// Whether the countdown has already ended.
    pub expired: bool,
    /// Terminal state rendered when `expired` is set.
    pub expire_behavior: ExpireBehavior,
    /// Text for the custom-text terminal state.
    pub expire_text: String,
    /// Font name for the expiry text.
    pub expire_font: String,
    /// Font size for the expiry text, always positive.
    pub expire_size: f32,
    /// Color for the expiry text.
    pub expire_color: Rgb,
}

impl ResolvedConfig {
    /// Apply every documented default to `cfg`.
    pub fn resolve(cfg: &RenderConfig) -> Self {
        let background = Rgb::from_hex(&cfg.bg_color).unwrap_or(Rgb::WHITE);
        let text = Rgb::from_hex(&cfg.text_color).unwrap_or(Rgb::BLACK);
        let label = Rgb::from_hex(&cfg.label_color).unwrap_or(text);
        let separator = Rgb::from_hex(&cfg.separator_color).unwrap_or(text);

        let number_size = positive_or(cfg.number_font_size, DEFAULT_NUMBER_FONT_SIZE);
        let label_size = positive_or(cfg.label_font_size, DEFAULT_LABEL_FONT_SIZE);

        let mut units = Vec::with_capacity(4);
        for (unit, enabled) in [
            (TimeUnit::Days, cfg.show_days),
            (TimeUnit::Hours, cfg.show_hours),
            (TimeUnit::Minutes, cfg.show_minutes),
            (TimeUnit::Seconds, cfg.show_seconds),
        ] {
            if enabled {
                units.push(unit);
            }
        }
        // Deliberate policy: a request that enables nothing gets all four
        // columns rather than an error.
        if units.is_empty() {
            units.extend(TimeUnit::ALL);
        }

        Self {
            end_time: cfg.end_time,
            background,
            text,
            label,
            separator,
            number_font: cfg.number_font.clone(),
            number_size,
            label_font: cfg.label_font.clone(),
            label_size,
            units,
            show_labels: cfg.show_labels,
            show_separators: cfg.show_separators,
            transparent: cfg.transparent,
            rounded: cfg.rounded,
            corner_radius: positive_or(cfg.corner_radius, DEFAULT_CORNER_RADIUS),
            width: cfg.width,
            height: cfg.height,
            expired: cfg.expired,
            expire_behavior: cfg.expire_behavior,
            expire_text: cfg.expire_text.clone(),
            expire_font: cfg.expire_font.clone(),
            expire_size: positive_or(cfg.expire_font_size, number_size),
            expire_color: Rgb::from_hex(&cfg.expire_color).unwrap_or(text),
        }
    }
}

fn positive_or(value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/resolve.rs"]
mod tests;
