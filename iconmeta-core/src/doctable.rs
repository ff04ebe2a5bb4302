//! Documentation table parsing (`| e700 | GlobalNavButton |` rows)

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::IconMetaError;

/// The Segoe Fluent Icons reference table, PUA E700 through F8CC.
pub const EMBEDDED_DOCUMENTATION: &str = include_str!("../data/segoe-fluent-icons.md");

/// Provenance string recorded for the embedded table.
pub const EMBEDDED_SOURCE: &str = "Microsoft Official Documentation";

static ROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\|\s*([a-f0-9]+)\s*\|\s*([A-Za-z0-9_]+)\s*\|").expect("row pattern compiles")
});

/// Hex code point (uppercased) to documented icon name.
///
/// Iteration is ordered by the hex string. A later row with the same hex
/// replaces the earlier one; the upstream tables rely on this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocTable {
    entries: BTreeMap<String, String>,
}

impl DocTable {
    /// Scan `text` for table rows. Text without any rows gives an empty table.
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();
        for caps in ROW_PATTERN.captures_iter(text) {
            entries.insert(caps[1].to_ascii_uppercase(), caps[2].to_string());
        }
        Self { entries }
    }

    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_DOCUMENTATION)
    }

    pub fn get(&self, hex: &str) -> Option<&str> {
        self.entries
            .get(&hex.to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(hex, name)| (hex.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load documentation text from disk.
pub fn read_documentation(path: &Path) -> Result<String, IconMetaError> {
    fs::read_to_string(path).map_err(|source| IconMetaError::DocumentationRead {
        path: path.to_path_buf(),
        source,
    })
}
