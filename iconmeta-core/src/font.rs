//! Font glyph reader: best-cmap code point mapping plus descriptor strings

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use read_fonts::tables::name::NameId;
use read_fonts::TableProvider;
use skrifa::raw::ReadError;
use skrifa::{FontRef as SkrifaFontRef, GlyphId, MetadataProvider};

use crate::error::IconMetaError;

/// Code point to glyph id mapping taken from a font's preferred cmap subtable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMap {
    glyphs: BTreeMap<u32, GlyphId>,
}

impl GlyphMap {
    pub fn glyph(&self, code_point: u32) -> Option<GlyphId> {
        self.glyphs.get(&code_point).copied()
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.glyphs.contains_key(&code_point)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of mapped code points inside `[start, end)`.
    pub fn count_in(&self, start: u32, end: u32) -> usize {
        self.glyphs.range(start..end).count()
    }

    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.glyphs.keys().copied()
    }
}

impl FromIterator<(u32, GlyphId)> for GlyphMap {
    fn from_iter<I: IntoIterator<Item = (u32, GlyphId)>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}

/// Strings read from the `name` and `head` tables, when the font has them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontInfo {
    pub full_name: Option<String>,
    pub version: Option<String>,
    pub copyright: Option<String>,
}

/// A parsed font: its glyph map and descriptor strings.
///
/// The font bytes are only held while parsing; nothing here borrows them.
#[derive(Debug, Clone, Default)]
pub struct FontFile {
    pub glyphs: GlyphMap,
    pub info: FontInfo,
}

impl FontFile {
    /// Read and parse the font at `path`.
    pub fn load(path: &Path) -> Result<Self, IconMetaError> {
        let data = fs::read(path).map_err(|err| IconMetaError::FontLoad {
            path: path.to_path_buf(),
            source: Box::new(err),
        })?;

        let font = Self::from_bytes(&data).map_err(|err| IconMetaError::FontLoad {
            path: path.to_path_buf(),
            source: Box::new(err),
        })?;

        debug!(
            "{}: {} mapped code points",
            path.display(),
            font.glyphs.len()
        );
        Ok(font)
    }

    /// Parse an in-memory font. Fails when the data is not a font or has no `cmap`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ReadError> {
        let font = SkrifaFontRef::new(data)?;
        // charmap() quietly yields nothing without a cmap; a missing table is a load failure
        font.cmap()?;

        let glyphs = font.charmap().mappings().collect();
        Ok(Self {
            glyphs,
            info: collect_info(data),
        })
    }
}

fn collect_info(data: &[u8]) -> FontInfo {
    let Ok(font) = read_fonts::FontRef::new(data) else {
        return FontInfo::default();
    };

    let version = font
        .head()
        .ok()
        .map(|head| format!("{:.2}", head.font_revision().to_f64()));

    FontInfo {
        full_name: best_name(&font, NameId::FULL_NAME),
        version,
        copyright: best_name(&font, NameId::COPYRIGHT_NOTICE),
    }
}

/// (platform, encoding, language) of the Windows US English record.
const WINDOWS_ENGLISH: (u16, u16, u16) = (3, 1, 0x0409);

/// Pick the Windows English record for `wanted`, else the first non-empty
/// Unicode record in table order.
fn best_name(font: &read_fonts::FontRef, wanted: NameId) -> Option<String> {
    let name_table = font.name().ok()?;
    let data = name_table.string_data();

    let mut fallback = None;
    for record in name_table
        .name_record()
        .iter()
        .filter(|record| record.is_unicode() && record.name_id() == wanted)
    {
        let Ok(entry) = record.string(data) else {
            continue;
        };
        let rendered = entry.to_string().trim().to_string();
        if rendered.is_empty() {
            continue;
        }
        let key = (
            record.platform_id(),
            record.encoding_id(),
            record.language_id(),
        );
        if key == WINDOWS_ENGLISH {
            return Some(rendered);
        }
        fallback.get_or_insert(rendered);
    }
    fallback
}
