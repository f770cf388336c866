use super::*;

#[test]
fn malformed_colors_fall_back_to_documented_defaults() {
    let cfg = RenderConfig {
        bg_color: "not-a-color".to_string(),
        text_color: "#zzzzzz".to_string(),
        ..RenderConfig::default()
    };
    let rc = ResolvedConfig::resolve(&cfg);
    assert_eq!(rc.background, Rgb::WHITE);
    assert_eq!(rc.text, Rgb::BLACK);
}

#[test]
fn decoration_colors_inherit_the_text_color() {
    let cfg = RenderConfig {
        text_color: "#336699".to_string(),
        ..RenderConfig::default()
    };
    let rc = ResolvedConfig::resolve(&cfg);
    assert_eq!(rc.label, Rgb::new(0x33, 0x66, 0x99));
    assert_eq!(rc.separator, Rgb::new(0x33, 0x66, 0x99));

    let cfg = RenderConfig {
        text_color: "#336699".to_string(),
        label_color: "#ff0000".to_string(),
        ..RenderConfig::default()
    };
    let rc = ResolvedConfig::resolve(&cfg);
    assert_eq!(rc.label, Rgb::new(255, 0, 0));
}

#[test]
fn non_positive_sizes_get_defaults() {
    let cfg = RenderConfig::default();
    let rc = ResolvedConfig::resolve(&cfg);
    assert_eq!(rc.number_size, DEFAULT_NUMBER_FONT_SIZE);
    assert_eq!(rc.label_size, DEFAULT_LABEL_FONT_SIZE);
    assert_eq!(rc.corner_radius, DEFAULT_CORNER_RADIUS);

    let cfg = RenderConfig {
        number_font_size: -3.0,
        expire_font_size: 0.0,
        ..RenderConfig::default()
    };
    let rc = ResolvedConfig::resolve(&cfg);
    assert_eq!(rc.number_size, DEFAULT_NUMBER_FONT_SIZE);
    // The expiry text inherits the numeral size when unset.
    assert_eq!(rc.expire_size, rc.number_size);
}

#[test]
fn empty_unit_set_defaults_to_all_four() {
    let rc = ResolvedConfig::resolve(&RenderConfig::default());
    assert_eq!(rc.units, TimeUnit::ALL.to_vec());
}

#[test]
fn enabled_units_keep_display_order() {
    let cfg = RenderConfig {
        show_minutes: true,
        show_seconds: true,
        ..RenderConfig::default()
    };
    let rc = ResolvedConfig::resolve(&cfg);
    assert_eq!(rc.units, vec![TimeUnit::Minutes, TimeUnit::Seconds]);
}

#[test]
fn explicit_dimensions_are_preserved() {
    let cfg = RenderConfig {
        width: 800,
        height: 250,
        ..RenderConfig::default()
    };
    let rc = ResolvedConfig::resolve(&cfg);
    assert_eq!((rc.width, rc.height), (800, 250));
}
