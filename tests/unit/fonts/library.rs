use super::*;

fn library() -> FontLibrary {
    FontLibrary::new("fonts").expect("bundled fonts present in repo")
}

#[test]
fn missing_fallback_font_is_fatal() {
    let err = FontLibrary::new("no/such/dir").unwrap_err();
    assert!(matches!(err, TickgifError::Font(_)));
}

#[test]
fn empty_name_resolves_to_fallback() {
    let lib = library();
    assert_eq!(lib.resolve("").name(), FALLBACK_FONT_NAME);
}

#[test]
fn unknown_name_falls_back_silently() {
    let lib = library();
    let handle = lib.resolve("Comic Sans MS");
    assert_eq!(handle.name(), FALLBACK_FONT_NAME);
    assert_eq!(handle.data().len(), lib.fallback().data().len());
}

#[test]
fn known_name_loads_and_caches() {
    let lib = library();
    let first = lib.resolve("DejaVu Sans Bold");
    assert_eq!(first.name(), "DejaVu Sans Bold");
    assert!(!first.data().is_empty());

    // Second resolution hits the cache and shares the same bytes.
    let second = lib.resolve("DejaVu Sans Bold");
    assert!(std::ptr::eq(first.data().as_ptr(), second.data().as_ptr()));
}

#[test]
fn fallback_bytes_parse_as_a_font() {
    let lib = library();
    assert!(probe_family(lib.fallback().data()).is_some());
    assert!(probe_family(b"definitely not a font").is_none());
}
