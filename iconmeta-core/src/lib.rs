//! iconmeta-core: icon font metadata catalogue pipeline
//!
//! Turns a vendor documentation table (`| e72b | Back |` rows) and an icon
//! font into the `IconMetadata.json` catalogue read by icon pickers.
//!
//! ## Pipeline
//!
//! 1. [`font::FontFile`] reads the font's preferred cmap and descriptor strings.
//! 2. [`doctable::DocTable`] scans the documentation for rows.
//! 3. [`assemble::assemble`] drops rows the font cannot render, then
//!    classifies ([`category::classify`]), tags ([`keywords::generate_keywords`])
//!    and translates ([`translate::translate`]) the rest.
//! 4. [`output::write_catalogue`] writes the JSON atomically.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use iconmeta_core::assemble::build_catalogue;
//! use iconmeta_core::catalogue::FontDescriptor;
//! use iconmeta_core::doctable::{DocTable, EMBEDDED_SOURCE};
//! use iconmeta_core::font::FontFile;
//! use iconmeta_core::output::write_catalogue;
//!
//! let font = FontFile::load(Path::new("Segoe Fluent Icons.ttf"))?;
//! let doc = DocTable::embedded();
//! let descriptor = FontDescriptor::from_font_info(&font.info, EMBEDDED_SOURCE);
//!
//! let (catalogue, report) = build_catalogue(&doc, &font.glyphs, descriptor);
//! write_catalogue(Path::new("IconMetadata.json"), &catalogue)?;
//! println!("{} icons, {} dropped", report.validated, report.skipped.len());
//! # Ok::<(), iconmeta_core::error::IconMetaError>(())
//! ```

pub mod assemble;
pub mod catalogue;
pub mod category;
pub mod codepoint;
pub mod doctable;
pub mod error;
pub mod font;
pub mod keywords;
pub mod output;
pub mod stats;
#[cfg(test)]
mod testing;
pub mod translate;
