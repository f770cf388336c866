use time::OffsetDateTime;

/// Default numeral font size in pixels when the request leaves it unset.
pub const DEFAULT_NUMBER_FONT_SIZE: f32 = 70.0;

/// Default unit-label font size in pixels when the request leaves it unset.
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 16.0;

/// Default corner radius in pixels for rounded renders.
pub const DEFAULT_CORNER_RADIUS: f32 = 12.0;

/// One of the four horizontally arranged countdown columns, in display order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Whole days remaining.
    Days,
    /// Hours remaining, modulo 24.
    Hours,
    /// Minutes remaining, modulo 60.
    Minutes,
    /// Seconds remaining, modulo 60.
    Seconds,
}

impl TimeUnit {
    /// All units in display order (left to right).
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// Column caption drawn below the numerals when labels are enabled.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Days => "Days",
            TimeUnit::Hours => "Hours",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Seconds => "Seconds",
        }
    }
}

/// What to render once a countdown has ended.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExpireBehavior {
    /// Keep the normal layout with every unit frozen at "00".
    #[default]
    ShowZeros,
    /// Emit a single 1x1 fully transparent frame.
    Hide,
    /// Render the configured text centered on the configured background.
    CustomText,
}

/// The complete styling/timing contract for one render request.
///
/// Zero and empty values mean "use the documented default"; the policy is
/// applied once by [`ResolvedConfig::resolve`](crate::ResolvedConfig::resolve)
/// so downstream components never re-check for unset fields. Explicit non-zero
/// `width`/`height` are honored verbatim and never overwritten.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Instant the countdown reaches zero, RFC 3339 in transit.
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,

    /// Background color as `#rrggbb`; malformed values fall back to white.
    pub bg_color: String,
    /// Numeral color as `#rrggbb`; malformed values fall back to black.
    pub text_color: String,
    /// Unit-label color; empty inherits the numeral color.
    pub label_color: String,
    /// Separator color; empty inherits the numeral color.
    pub separator_color: String,

    /// Numeral font name; empty or unknown resolves to the bundled default.
    pub number_font: String,
    /// Numeral font size in pixels; non-positive means the default.
    pub number_font_size: f32,
    /// Unit-label font name; empty or unknown resolves to the bundled default.
    pub label_font: String,
    /// Unit-label font size in pixels; non-positive means the default.
    pub label_font_size: f32,

    /// Show the days column.
    pub show_days: bool,
    /// Show the hours column.
    pub show_hours: bool,
    /// Show the minutes column.
    pub show_minutes: bool,
    /// Show the seconds column.
    pub show_seconds: bool,
    /// Draw unit captions below the numerals.
    pub show_labels: bool,
    /// Draw vertical separators between adjacent columns.
    pub show_separators: bool,

    /// Mark the background color as transparent in the output.
    pub transparent: bool,
    /// Clip the background to a rounded rectangle.
    pub rounded: bool,
    /// Corner radius in pixels for rounded renders; non-positive means the
    /// default.
    pub corner_radius: f32,

    /// Canvas width in pixels; zero auto-computes from the layout.
    pub width: u32,
    /// Canvas height in pixels; zero auto-computes from the layout.
    pub height: u32,

    /// Whether the countdown has already ended.
    pub expired: bool,
    /// Terminal state rendered when `expired` is set.
    pub expire_behavior: ExpireBehavior,
    /// Text for [`ExpireBehavior::CustomText`].
    pub expire_text: String,
    /// Font name for the expiry text; empty resolves to the bundled default.
    pub expire_font: String,
    /// Font size for the expiry text; non-positive inherits the numeral size.
    pub expire_font_size: f32,
    /// Color for the expiry text; empty inherits the numeral color.
    pub expire_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            end_time: OffsetDateTime::UNIX_EPOCH,
            bg_color: String::new(),
            text_color: String::new(),
            label_color: String::new(),
            separator_color: String::new(),
            number_font: String::new(),
            number_font_size: 0.0,
            label_font: String::new(),
            label_font_size: 0.0,
            show_days: false,
            show_hours: false,
            show_minutes: false,
            show_seconds: false,
            show_labels: false,
            show_separators: false,
            transparent: false,
            rounded: false,
            corner_radius: 0.0,
            width: 0,
            height: 0,
            expired: false,
            expire_behavior: ExpireBehavior::default(),
            expire_text: String::new(),
            expire_font: String::new(),
            expire_font_size: 0.0,
            expire_color: String::new(),
        }
    }
}
