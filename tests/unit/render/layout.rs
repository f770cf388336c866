use super::*;
use crate::config::model::RenderConfig;

fn resolved(mutate: impl FnOnce(&mut RenderConfig)) -> ResolvedConfig {
    let mut cfg = RenderConfig::default();
    mutate(&mut cfg);
    ResolvedConfig::resolve(&cfg)
}

fn compute(cfg: &ResolvedConfig) -> Layout {
    let fonts = FontLibrary::new("fonts").unwrap();
    let mut shaper = TextShaper::new();
    Layout::compute(cfg, &fonts, &mut shaper).unwrap()
}

#[test]
fn layout_is_idempotent() {
    let cfg = resolved(|c| {
        c.show_labels = true;
        c.show_separators = true;
    });
    let a = compute(&cfg);
    let b = compute(&cfg);
    assert_eq!(a, b);
}

#[test]
fn auto_dimensions_are_positive_and_hold_four_columns() {
    let layout = compute(&resolved(|_| {}));
    assert_eq!(layout.columns.len(), 4);
    assert!(layout.width > 0);
    assert!(layout.height > 0);
    // Four columns of two digits at the default 70px size cannot fit in a
    // tiny canvas.
    assert!(layout.width > 200);
}

#[test]
fn explicit_dimensions_are_never_overwritten() {
    let layout = compute(&resolved(|c| {
        c.width = 900;
        c.height = 400;
    }));
    assert_eq!((layout.width, layout.height), (900, 400));
}

#[test]
fn labels_add_height() {
    let without = compute(&resolved(|_| {}));
    let with = compute(&resolved(|c| c.show_labels = true));
    assert!(with.height > without.height);
    assert_eq!(with.width, without.width);
}

#[test]
fn fewer_columns_narrow_the_canvas() {
    let four = compute(&resolved(|_| {}));
    let two = compute(&resolved(|c| {
        c.show_minutes = true;
        c.show_seconds = true;
    }));
    assert_eq!(two.columns.len(), 2);
    assert!(two.width < four.width);
}

#[test]
fn columns_advance_left_to_right() {
    let layout = compute(&resolved(|_| {}));
    for i in 1..layout.columns.len() {
        assert!(layout.column_x(i) > layout.column_x(i - 1));
        assert!(layout.column_center_x(i - 1) > layout.column_x(i - 1));
    }
}

#[test]
fn separators_sit_between_columns() {
    let layout = compute(&resolved(|c| c.show_separators = true));
    for i in 0..layout.columns.len() - 1 {
        let (x, y, w, h) = layout.separator_rect(i);
        assert!(x > layout.column_center_x(i));
        assert!(x + w < layout.column_center_x(i + 1));
        assert!(y > 0.0);
        assert!(h > 0.0);
    }
}

#[test]
fn explicit_oversize_canvas_centers_the_content() {
    let auto = compute(&resolved(|_| {}));
    let wide = compute(&resolved(|c| c.width = 2000));
    // Content block shifts right by half the extra width.
    let shift = wide.column_x(0) - auto.column_x(0);
    assert!((shift - f64::from(2000 - auto.width) * 0.5).abs() < 1.0);
}

#[test]
fn sprite_position_tracks_the_column_center() {
    let layout = compute(&resolved(|_| {}));
    let sprite_w = 80;
    let (x0, y) = layout.sprite_pos(0, sprite_w);
    let expected = layout.column_center_x(0) - f64::from(sprite_w) * 0.5;
    assert!((x0 as f64 - expected).abs() <= 1.0);
    assert!(y >= 0);
}
