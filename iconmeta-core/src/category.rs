//! Icon categories and the code point range classifier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codepoint::parse_hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Navigation,
    Actions,
    Media,
    Communication,
    Files,
    Status,
    Ui,
    Devices,
    Accessibility,
    Business,
    Advanced,
    Specialized,
    New,
    Uncategorized,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Navigation => "navigation",
            Category::Actions => "actions",
            Category::Media => "media",
            Category::Communication => "communication",
            Category::Files => "files",
            Category::Status => "status",
            Category::Ui => "ui",
            Category::Devices => "devices",
            Category::Accessibility => "accessibility",
            Category::Business => "business",
            Category::Advanced => "advanced",
            Category::Specialized => "specialized",
            Category::New => "new",
            Category::Uncategorized => "uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// Display metadata for one category, as written to the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub key: Category,
    pub name: String,
    pub name_zh: String,
    pub priority: u32,
}

const DEFINITIONS: &[(Category, &str, &str, u32)] = &[
    (Category::Navigation, "Navigation", "导航", 1),
    (Category::Actions, "Actions", "操作", 2),
    (Category::Media, "Media", "媒体", 3),
    (Category::Communication, "Communication", "通信", 4),
    (Category::Files, "Files", "文件", 5),
    (Category::Status, "Status", "状态", 6),
    (Category::Ui, "UI Elements", "界面", 7),
    (Category::Devices, "Devices", "设备", 8),
    (Category::Accessibility, "Accessibility", "辅助功能", 9),
    (Category::Business, "Business", "商务", 10),
    (Category::Advanced, "Advanced", "高级", 11),
    (Category::Specialized, "Specialized", "专用", 12),
    (Category::New, "New", "新增", 13),
    (Category::Uncategorized, "Uncategorized", "未分类", 999),
];

/// The fixed category list in catalogue order (ascending priority).
pub fn category_definitions() -> Vec<CategoryDefinition> {
    DEFINITIONS
        .iter()
        .map(|&(key, name, name_zh, priority)| CategoryDefinition {
            key,
            name: name.to_string(),
            name_zh: name_zh.to_string(),
            priority,
        })
        .collect()
}

const E8_STATUS_HINTS: &[&str] = &["battery", "signal", "wifi", "status", "vpn"];
const E9_STATUS_HINTS: &[&str] = &["bar", "status", "volume", "battery"];

/// Assign a category from the code point band, consulting the name in the
/// E800, E900 and EA00 bands.
pub fn classify(hex: &str, name: &str) -> Category {
    let Some(code) = parse_hex(hex) else {
        return Category::Uncategorized;
    };
    let lower = name.to_lowercase();
    let mentions = |hints: &[&str]| hints.iter().any(|hint| lower.contains(hint));

    match code {
        0xE700..=0xE7FF => Category::Navigation,
        0xE800..=0xE8FF if mentions(E8_STATUS_HINTS) => Category::Status,
        0xE800..=0xE8FF => Category::Media,
        0xE900..=0xE9FF if mentions(E9_STATUS_HINTS) => Category::Status,
        0xE900..=0xE9FF => Category::Files,
        0xEA00..=0xEAFF if lower.contains("solid") => Category::Media,
        0xEA00..=0xEAFF => Category::Ui,
        0xEB00..=0xEBFF => Category::Communication,
        0xEC00..=0xECFF => Category::Devices,
        0xED00..=0xEEFF => Category::Accessibility,
        0xEF00..=0xEFFF => Category::Specialized,
        0xF000..=0xF2FF => Category::Business,
        0xF300..=0xF5FF => Category::Advanced,
        0xF600..=0xF8FF => Category::New,
        _ => Category::Uncategorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_navigation() {
        assert_eq!(classify("E721", "Search"), Category::Navigation);
    }

    #[test]
    fn e800_band_prefers_status_hints() {
        assert_eq!(classify("E850", "BatteryCharging0"), Category::Status);
        assert_eq!(classify("E8C0", "VPNOverlay"), Category::Status);
        assert_eq!(classify("E80F", "Home"), Category::Media);
    }

    #[test]
    fn e900_band_prefers_status_hints() {
        assert_eq!(classify("E995", "Volume1"), Category::Status);
        assert_eq!(classify("E9A0", "Toolbar"), Category::Status);
        assert_eq!(classify("E9F5", "Processing"), Category::Files);
    }

    #[test]
    fn ea00_band_solid_names_are_media() {
        assert_eq!(classify("EA3A", "ReturnKeySolid"), Category::Media);
        assert_eq!(classify("EA37", "List"), Category::Ui);
    }

    #[test]
    fn band_edges_are_half_open() {
        assert_eq!(classify("E6FF", "X"), Category::Uncategorized);
        assert_eq!(classify("E7FF", "X"), Category::Navigation);
        assert_eq!(classify("EB00", "X"), Category::Communication);
        assert_eq!(classify("ED00", "X"), Category::Accessibility);
        assert_eq!(classify("EEFF", "X"), Category::Accessibility);
        assert_eq!(classify("EF00", "X"), Category::Specialized);
        assert_eq!(classify("F2FF", "X"), Category::Business);
        assert_eq!(classify("F300", "X"), Category::Advanced);
        assert_eq!(classify("F8FF", "X"), Category::New);
        assert_eq!(classify("F900", "X"), Category::Uncategorized);
    }

    #[test]
    fn unparseable_hex_is_uncategorized() {
        assert_eq!(classify("XYZ", "Home"), Category::Uncategorized);
        assert_eq!(classify("", "Home"), Category::Uncategorized);
    }

    #[test]
    fn definitions_cover_every_category_once() {
        let defs = category_definitions();
        assert_eq!(defs.len(), 14);
        assert_eq!(defs.last().map(|d| d.key), Some(Category::Uncategorized));
        assert_eq!(defs.last().map(|d| d.priority), Some(999));
        assert!(defs.windows(2).all(|w| w[0].priority < w[1].priority));
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let json = serde_json::to_string(&Category::Ui).expect("serialize");
        assert_eq!(json, "\"ui\"");
        assert_eq!(Category::Accessibility.to_string(), "accessibility");
    }
}
