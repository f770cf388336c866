use super::*;

fn library() -> FontLibrary {
    FontLibrary::new("fonts").unwrap()
}

#[test]
fn builds_one_sprite_per_two_digit_value() {
    let fonts = library();
    let cache = SpriteCache::new();
    let key = SpriteKey::new(Rgb::WHITE, Rgb::BLACK, "", 40.0);

    let (sprites, hit) = cache.get_or_build(&key, &fonts).unwrap();
    assert!(!hit);
    assert!(sprites.width() > 0);
    assert!(sprites.height() > 0);

    for value in [0u8, 7, 42, 99] {
        let glyph = sprites.glyph(value);
        assert_eq!((glyph.width, glyph.height), (sprites.width(), sprites.height()));
        assert!(glyph.pixels.iter().all(|&i| usize::from(i) < sprites.palette().len()));
    }
}

#[test]
fn out_of_range_values_clamp_to_99() {
    let fonts = library();
    let cache = SpriteCache::new();
    let key = SpriteKey::new(Rgb::WHITE, Rgb::BLACK, "", 32.0);
    let (sprites, _) = cache.get_or_build(&key, &fonts).unwrap();
    assert_eq!(sprites.glyph(200), sprites.glyph(99));
}

#[test]
fn second_lookup_is_a_hit() {
    let fonts = library();
    let cache = SpriteCache::new();
    let key = SpriteKey::new(Rgb::WHITE, Rgb::BLACK, "", 36.0);

    let (first, hit) = cache.get_or_build(&key, &fonts).unwrap();
    assert!(!hit);
    let (second, hit) = cache.get_or_build(&key, &fonts).unwrap();
    assert!(hit);
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
    assert_eq!((cache.hits(), cache.misses()), (1, 1));
}

#[test]
fn different_colors_build_distinct_palettes() {
    let fonts = library();
    let cache = SpriteCache::new();
    let black = SpriteKey::new(Rgb::WHITE, Rgb::BLACK, "", 36.0);
    let red = SpriteKey::new(Rgb::WHITE, Rgb::new(255, 0, 0), "", 36.0);

    let (a, _) = cache.get_or_build(&black, &fonts).unwrap();
    let (b, hit) = cache.get_or_build(&red, &fonts).unwrap();
    assert!(!hit);
    assert_eq!(cache.len(), 2);
    assert_ne!(a.palette(), b.palette());
}

#[test]
fn digits_actually_mark_the_sprite() {
    let fonts = library();
    let cache = SpriteCache::new();
    let key = SpriteKey::new(Rgb::WHITE, Rgb::BLACK, "", 40.0);
    let (sprites, _) = cache.get_or_build(&key, &fonts).unwrap();

    // "88" has plenty of ink; some pixel must be non-background.
    let glyph = sprites.glyph(88);
    assert!(glyph.pixels.iter().any(|&i| i != 0));
    // Distinct values produce distinct bitmaps.
    assert_ne!(sprites.glyph(11), sprites.glyph(88));
}

#[test]
fn sprite_palette_is_a_prefix_of_the_request_palette() {
    let sprite = Palette::build(Rgb::WHITE, Rgb::BLACK, &[]);
    let request = Palette::build(Rgb::WHITE, Rgb::BLACK, &[Rgb::new(255, 0, 0)]);
    assert_eq!(&request.colors()[..sprite.len()], sprite.colors());
}
