//! Read-back checks: catalogue category counts, band coverage, key icons, plus a direct font cmap check

use std::fs;
use std::path::Path;

use skrifa::GlyphId;

use crate::catalogue::Catalogue;
use crate::category::CategoryDefinition;
use crate::codepoint::format_hex;
use crate::error::IconMetaError;
use crate::font::GlyphMap;

/// PUA bands as published in the documentation headings (half-open).
pub const DOCUMENTED_RANGES: &[(u32, u32)] = &[
    (0xE700, 0xE900),
    (0xEA00, 0xEC00),
    (0xED00, 0xEF00),
    (0xF000, 0xF200),
    (0xF300, 0xF500),
    (0xF600, 0xF800),
];

/// Icons that every generated catalogue is expected to carry.
pub const KEY_ICONS: &[(u32, &str)] = &[
    (0xE72A, "Forward"),
    (0xE72B, "Back"),
    (0xE721, "Search"),
    (0xE80F, "Home"),
    (0xE713, "Settings"),
];

pub fn read_catalogue(path: &Path) -> Result<Catalogue, IconMetaError> {
    let text = fs::read_to_string(path).map_err(|err| IconMetaError::CatalogueRead {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|err| IconMetaError::CatalogueRead {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub definition: CategoryDefinition,
    pub count: usize,
}

/// Icon count per declared category, in priority order.
pub fn category_breakdown(catalogue: &Catalogue) -> Vec<CategoryCount> {
    let mut definitions = catalogue.categories.clone();
    definitions.sort_by_key(|def| def.priority);

    definitions
        .into_iter()
        .map(|definition| {
            let count = catalogue
                .icons
                .iter()
                .filter(|icon| icon.category == definition.key)
                .count();
            CategoryCount { definition, count }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCount {
    pub start: u32,
    pub end: u32,
    pub count: usize,
}

impl RangeCount {
    pub fn label(&self) -> String {
        format!("{}-{}", format_hex(self.start), format_hex(self.end))
    }
}

/// Icon counts per documented band. Icons outside every band are not counted.
pub fn range_coverage(catalogue: &Catalogue) -> Vec<RangeCount> {
    DOCUMENTED_RANGES
        .iter()
        .map(|&(start, end)| RangeCount {
            start,
            end,
            count: catalogue
                .icons
                .iter()
                .filter(|icon| (start..end).contains(&icon.code_point))
                .count(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyIconStatus {
    Found,
    Mismatch(String),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIconCheck {
    pub code_point: u32,
    pub expected: String,
    pub status: KeyIconStatus,
}

impl KeyIconCheck {
    pub fn is_ok(&self) -> bool {
        self.status == KeyIconStatus::Found
    }
}

/// Look up each expected `(code point, name)` pair in the catalogue.
pub fn verify_key_icons(catalogue: &Catalogue, expected: &[(u32, String)]) -> Vec<KeyIconCheck> {
    expected
        .iter()
        .map(|(code_point, name)| {
            let status = match catalogue.icon(*code_point) {
                Some(icon) if icon.name == *name => KeyIconStatus::Found,
                Some(icon) => KeyIconStatus::Mismatch(icon.name.clone()),
                None => KeyIconStatus::Missing,
            };
            KeyIconCheck {
                code_point: *code_point,
                expected: name.clone(),
                status,
            }
        })
        .collect()
}

pub fn default_key_icons() -> Vec<(u32, String)> {
    KEY_ICONS
        .iter()
        .map(|&(cp, name)| (cp, name.to_string()))
        .collect()
}

/// Band counted by [`check_font`], E700 through F800 inclusive.
pub const FONT_ICON_BAND: (u32, u32) = (0xE700, 0xF801);

/// Band the glyph sample is drawn from, E700 through E900 inclusive.
pub const FONT_SAMPLE_BAND: (u32, u32) = (0xE700, 0xE901);

pub const FONT_SAMPLE_SIZE: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGlyph {
    pub code_point: u32,
    pub name: String,
    pub glyph: Option<GlyphId>,
}

/// What a font's preferred cmap holds, independent of any documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCheck {
    pub key_glyphs: Vec<KeyGlyph>,
    pub sample: Vec<(u32, GlyphId)>,
    pub total: usize,
    pub in_icon_band: usize,
}

impl FontCheck {
    pub fn all_key_glyphs_present(&self) -> bool {
        self.key_glyphs.iter().all(|key| key.glyph.is_some())
    }
}

/// Look the expected icons up directly in the glyph map and count its coverage.
pub fn check_font(glyphs: &GlyphMap, expected: &[(u32, String)]) -> FontCheck {
    let key_glyphs = expected
        .iter()
        .map(|(code_point, name)| KeyGlyph {
            code_point: *code_point,
            name: name.clone(),
            glyph: glyphs.glyph(*code_point),
        })
        .collect();

    let (sample_start, sample_end) = FONT_SAMPLE_BAND;
    let sample = glyphs
        .code_points()
        .filter(|cp| (sample_start..sample_end).contains(cp))
        .take(FONT_SAMPLE_SIZE)
        .filter_map(|cp| glyphs.glyph(cp).map(|gid| (cp, gid)))
        .collect();

    let (band_start, band_end) = FONT_ICON_BAND;
    FontCheck {
        key_glyphs,
        sample,
        total: glyphs.len(),
        in_icon_band: glyphs.count_in(band_start, band_end),
    }
}
