//! Font fixtures for tests and benchmarks, assembled with write-fonts.
#![allow(dead_code)]

use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::head::Head;
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::types::{Fixed, GlyphId, NameId};
use write_fonts::FontBuilder;

const WINDOWS_PLATFORM: u16 = 3;
const WINDOWS_UNICODE_BMP: u16 = 1;
pub const ENGLISH_US: u16 = 0x0409;
pub const GERMAN: u16 = 0x0407;

/// A font that only carries a `cmap`.
///
/// Code points are sorted and deduplicated; the n-th one maps to glyph n + 1.
pub fn cmap_only_font(code_points: &[u32]) -> Vec<u8> {
    FixtureFont::with_code_points(code_points).build()
}

/// Builder for small test fonts with optional `cmap`, `head` and `name` tables.
#[derive(Debug, Default)]
pub struct FixtureFont {
    code_points: Option<Vec<u32>>,
    revision: Option<f64>,
    names: Vec<(u16, NameId, String)>,
}

impl FixtureFont {
    /// A font without any tables; `build` on it yields an empty sfnt.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code_points(code_points: &[u32]) -> Self {
        Self {
            code_points: Some(code_points.to_vec()),
            ..Default::default()
        }
    }

    pub fn revision(mut self, revision: f64) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn full_name(self, language_id: u16, value: &str) -> Self {
        self.name(language_id, NameId::FULL_NAME, value)
    }

    pub fn copyright(self, language_id: u16, value: &str) -> Self {
        self.name(language_id, NameId::COPYRIGHT_NOTICE, value)
    }

    /// Add a Windows Unicode BMP name record.
    fn name(mut self, language_id: u16, name_id: NameId, value: &str) -> Self {
        self.names.push((language_id, name_id, value.to_string()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut builder = FontBuilder::new();

        if let Some(code_points) = &self.code_points {
            let mut cps = code_points.clone();
            cps.sort_unstable();
            cps.dedup();
            let mappings = cps
                .iter()
                .filter_map(|cp| char::from_u32(*cp))
                .enumerate()
                .map(|(idx, ch)| (ch, GlyphId::new(idx as u32 + 1)));
            let cmap = Cmap::from_mappings(mappings).expect("cmap mappings");
            builder.add_table(&cmap).expect("add cmap");
        }

        if let Some(revision) = self.revision {
            let head = Head {
                font_revision: Fixed::from_f64(revision),
                units_per_em: 1000,
                ..Default::default()
            };
            builder.add_table(&head).expect("add head");
        }

        if !self.names.is_empty() {
            let mut records: Vec<NameRecord> = self
                .names
                .iter()
                .map(|(language_id, name_id, value)| {
                    NameRecord::new(
                        WINDOWS_PLATFORM,
                        WINDOWS_UNICODE_BMP,
                        *language_id,
                        *name_id,
                        value.clone().into(),
                    )
                })
                .collect();
            records.sort();
            builder.add_table(&Name::new(records)).expect("add name");
        }

        builder.build()
    }
}
