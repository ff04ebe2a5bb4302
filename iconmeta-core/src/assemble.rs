//! Joins documentation rows with the font's glyph map into icon records

use log::{info, warn};

use crate::catalogue::{Catalogue, FontDescriptor, IconRecord, Translation};
use crate::category::classify;
use crate::codepoint::{escaped_literal, glyph_token, parse_hex};
use crate::doctable::DocTable;
use crate::error::EntryIssue;
use crate::font::GlyphMap;
use crate::keywords::generate_keywords;
use crate::translate::translate;

/// Counts and dropped rows from one assembly pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub validated: usize,
    pub skipped: Vec<EntryIssue>,
}

impl AssemblyReport {
    pub fn skipped_invalid(&self) -> usize {
        self.skipped
            .iter()
            .filter(|issue| matches!(issue, EntryIssue::InvalidHex { .. }))
            .count()
    }

    pub fn skipped_missing(&self) -> usize {
        self.skipped
            .iter()
            .filter(|issue| matches!(issue, EntryIssue::MissingGlyph { .. }))
            .count()
    }

    pub fn total(&self) -> usize {
        self.validated + self.skipped.len()
    }
}

/// Build verified icon records for every documented row whose code point the font maps.
///
/// Rows are visited in ascending hex order. Rows with bad hex or without a
/// glyph are logged, recorded in the report, and left out.
pub fn assemble(doc: &DocTable, glyphs: &GlyphMap) -> (Vec<IconRecord>, AssemblyReport) {
    let mut icons = Vec::new();
    let mut report = AssemblyReport::default();

    for (hex, name) in doc.iter() {
        let Some(code_point) = parse_hex(hex) else {
            let issue = EntryIssue::InvalidHex {
                hex: hex.to_string(),
                name: name.to_string(),
            };
            warn!("{issue}");
            report.skipped.push(issue);
            continue;
        };

        if !glyphs.contains(code_point) {
            let issue = EntryIssue::MissingGlyph {
                hex: hex.to_string(),
                name: name.to_string(),
            };
            warn!("{issue}");
            report.skipped.push(issue);
            continue;
        }

        report.validated += 1;
        icons.push(build_icon(hex, code_point, name));
    }

    info!(
        "generated metadata for {} icons ({} missing from font, {} invalid)",
        report.validated,
        report.skipped_missing(),
        report.skipped_invalid()
    );
    (icons, report)
}

/// Annotate one glyph-verified row.
pub fn build_icon(hex: &str, code_point: u32, name: &str) -> IconRecord {
    let category = classify(hex, name);
    IconRecord {
        glyph: glyph_token(code_point),
        code_point,
        unicode_string: escaped_literal(code_point),
        name: name.to_string(),
        category,
        keywords: generate_keywords(name, hex, category),
        i18n: Translation {
            en: name.to_string(),
            zh: translate(name, category).to_string(),
        },
        verified: true,
    }
}

/// Run the assembler and wrap its output in a catalogue.
pub fn build_catalogue(
    doc: &DocTable,
    glyphs: &GlyphMap,
    font: FontDescriptor,
) -> (Catalogue, AssemblyReport) {
    let (icons, report) = assemble(doc, glyphs);
    (Catalogue::new(font, icons), report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use skrifa::GlyphId;

    fn glyphs(cps: &[u32]) -> GlyphMap {
        cps.iter().map(|&cp| (cp, GlyphId::new(1))).collect()
    }

    #[test]
    fn only_mapped_code_points_survive() {
        let doc = DocTable::parse("| E72A | Forward |\n| E72B | Back |\n");
        let (icons, report) = assemble(&doc, &glyphs(&[0xE72B]));

        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].name, "Back");
        assert_eq!(report.validated, 1);
        assert_eq!(report.skipped_missing(), 1);
        assert_eq!(report.skipped_invalid(), 0);
        assert_eq!(
            report.skipped,
            vec![EntryIssue::MissingGlyph {
                hex: "E72A".to_string(),
                name: "Forward".to_string()
            }]
        );
    }

    #[test]
    fn overflowing_hex_counts_as_invalid() {
        let doc = DocTable::parse("| 1ffffffff | Huge |\n| e700 | GlobalNavButton |\n");
        let (icons, report) = assemble(&doc, &glyphs(&[0xE700]));

        assert_eq!(icons.len(), 1);
        assert_eq!(report.skipped_invalid(), 1);
        assert_eq!(report.skipped[0].name(), "Huge");
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn builds_fully_annotated_record() {
        let icon = build_icon("E80F", 0xE80F, "Home");

        assert_eq!(icon.glyph, "ue80f");
        assert_eq!(icon.unicode_string, "\\ue80f");
        assert_eq!(icon.category, Category::Media);
        assert_eq!(icon.i18n.en, "Home");
        assert_eq!(icon.i18n.zh, "主页");
        assert!(icon.keywords.contains(&"home".to_string()));
        assert!(icon.keywords.contains(&"media".to_string()));
        assert!(icon.verified);
    }

    #[test]
    fn records_follow_hex_order() {
        let doc = DocTable::parse("| e80f | Home |\n| e700 | GlobalNavButton |\n");
        let (icons, _) = assemble(&doc, &glyphs(&[0xE700, 0xE80F]));

        let names: Vec<&str> = icons.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["GlobalNavButton", "Home"]);
    }
}
