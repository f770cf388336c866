use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::foundation::error::{TickgifError, TickgifResult};

/// Logical name of the bundled fallback face.
pub const FALLBACK_FONT_NAME: &str = "DejaVu Sans";

const FALLBACK_FONT_FILE: &str = "DejaVuSans.ttf";

/// Static table mapping request font names to bundled font files.
///
/// Unknown names resolve to the fallback face; more faces can be added here.
fn font_file_for(name: &str) -> Option<&'static str> {
    match name {
        "DejaVu Sans" => Some("DejaVuSans.ttf"),
        "DejaVu Sans Bold" => Some("DejaVuSans-Bold.ttf"),
        _ => None,
    }
}

/// Opaque shared handle to the raw bytes of one named font.
///
/// Created on first resolution of a name and retained for the process
/// lifetime; the font set is small and bounded, so there is no eviction.
#[derive(Clone)]
pub struct FontHandle {
    name: Arc<str>,
    bytes: Arc<Vec<u8>>,
}

impl FontHandle {
    fn new(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: Arc::from(name),
            bytes: Arc::new(bytes),
        }
    }

    /// Logical name this handle was resolved under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw font file bytes.
    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    /// Font data in the form the glyph rasterizer consumes.
    pub fn to_font_data(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.bytes.as_ref().clone()),
            0,
        )
    }
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle")
            .field("name", &self.name)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

/// Resolves logical font names to shared [`FontHandle`]s.
///
/// Lookups take a read lock; cache population takes the write lock with a
/// double check. Any read or parse failure silently falls back to the bundled
/// default face; font unavailability must never abort a render. The only
/// fatal case is the fallback face itself being unreadable at construction.
pub struct FontLibrary {
    root: PathBuf,
    fallback: FontHandle,
    cache: RwLock<HashMap<String, FontHandle>>,
}

impl FontLibrary {
    /// Load the fallback face from `root` and prime the cache with it.
    pub fn new(root: impl Into<PathBuf>) -> TickgifResult<Self> {
        let root = root.into();
        let path = root.join(FALLBACK_FONT_FILE);
        let bytes = std::fs::read(&path).map_err(|e| {
            TickgifError::font(format!("read fallback font '{}': {e}", path.display()))
        })?;
        if probe_family(&bytes).is_none() {
            return Err(TickgifError::font(format!(
                "fallback font '{}' contains no parseable font family",
                path.display()
            )));
        }

        let fallback = FontHandle::new(FALLBACK_FONT_NAME, bytes);
        let mut cache = HashMap::new();
        cache.insert(FALLBACK_FONT_NAME.to_string(), fallback.clone());

        Ok(Self {
            root,
            fallback,
            cache: RwLock::new(cache),
        })
    }

    /// The bundled default face.
    pub fn fallback(&self) -> &FontHandle {
        &self.fallback
    }

    /// Resolve `name` to a font handle, falling back to the default face on
    /// empty names, unknown names, and any read or parse failure.
    pub fn resolve(&self, name: &str) -> FontHandle {
        if name.is_empty() {
            return self.fallback.clone();
        }

        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(handle) = cache.get(name) {
                return handle.clone();
            }
        }

        let Some(file) = font_file_for(name) else {
            return self.fallback.clone();
        };

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        // Double-check after acquiring the write lock.
        if let Some(handle) = cache.get(name) {
            return handle.clone();
        }

        let path = self.root.join(file);
        let Ok(bytes) = std::fs::read(&path) else {
            return self.fallback.clone();
        };
        if probe_family(&bytes).is_none() {
            return self.fallback.clone();
        }

        let handle = FontHandle::new(name, bytes);
        cache.insert(name.to_string(), handle.clone());
        handle
    }
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self
            .cache
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len();
        f.debug_struct("FontLibrary")
            .field("root", &self.root)
            .field("cached", &cached)
            .finish()
    }
}

/// Parse-check font bytes by registering them into a throwaway collection.
fn probe_family(bytes: &[u8]) -> Option<String> {
    let mut font_ctx = parley::FontContext::default();
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
    let (family_id, _) = families.first()?;
    font_ctx
        .collection
        .family_name(*family_id)
        .map(|name| name.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/library.rs"]
mod tests;
