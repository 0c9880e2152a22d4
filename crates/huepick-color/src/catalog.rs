//! Named-color catalog
//!
//! A read-only lookup table mapping human-readable names to packed ARGB
//! values. The catalog is explicitly constructed and passed to whoever
//! needs it - there is no lazily populated process-wide list. The
//! surrounding application typically builds one at startup (its own
//! palette, or [`NamedColorCatalog::web_colors`]) and queries it when
//! labeling picked colors.

use huepick_core::argb;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    pub name: String,
    /// Packed ARGB value
    pub color: u32,
}

impl NamedColor {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, color: u32) -> Self {
        Self { name: name.into(), color }
    }
}

/// A read-only collection of named colors.
#[derive(Debug, Clone, Default)]
pub struct NamedColorCatalog {
    entries: Vec<NamedColor>,
}

impl NamedColorCatalog {
    /// Build a catalog from any sequence of entries.
    pub fn new(entries: impl IntoIterator<Item = NamedColor>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Build the standard 16-entry HTML basic palette.
    pub fn web_colors() -> Self {
        let named = [
            ("black", argb::compose(0x00, 0x00, 0x00)),
            ("silver", argb::compose(0xC0, 0xC0, 0xC0)),
            ("gray", argb::compose(0x80, 0x80, 0x80)),
            ("white", argb::compose(0xFF, 0xFF, 0xFF)),
            ("maroon", argb::compose(0x80, 0x00, 0x00)),
            ("red", argb::compose(0xFF, 0x00, 0x00)),
            ("purple", argb::compose(0x80, 0x00, 0x80)),
            ("fuchsia", argb::compose(0xFF, 0x00, 0xFF)),
            ("green", argb::compose(0x00, 0x80, 0x00)),
            ("lime", argb::compose(0x00, 0xFF, 0x00)),
            ("olive", argb::compose(0x80, 0x80, 0x00)),
            ("yellow", argb::compose(0xFF, 0xFF, 0x00)),
            ("navy", argb::compose(0x00, 0x00, 0x80)),
            ("blue", argb::compose(0x00, 0x00, 0xFF)),
            ("teal", argb::compose(0x00, 0x80, 0x80)),
            ("aqua", argb::compose(0x00, 0xFF, 0xFF)),
        ];
        Self::new(named.map(|(name, color)| NamedColor::new(name, color)))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }

    /// Look up a color by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.color)
    }

    /// Find the entry closest to `color` by squared RGB distance.
    ///
    /// Returns `None` for an empty catalog. Ties go to the earlier entry.
    pub fn nearest(&self, color: u32) -> Option<&NamedColor> {
        let (r, g, b) = argb::extract_rgb(color);
        self.entries.iter().min_by_key(|e| {
            let (er, eg, eb) = argb::extract_rgb(e.color);
            let dr = er as i64 - r as i64;
            let dg = eg as i64 - g as i64;
            let db = eb as i64 - b as i64;
            dr * dr + dg * dg + db * db
        })
    }
}
