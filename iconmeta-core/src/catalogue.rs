//! Catalogue data model, serialized field-for-field as `IconMetadata.json`

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::category::{category_definitions, Category, CategoryDefinition};
use crate::codepoint::{format_hex, parse_hex};
use crate::doctable::EMBEDDED_SOURCE;
use crate::font::FontInfo;

pub const SCHEMA_REF: &str = "./IconMetadata.schema.json";

pub const DEFAULT_FONT_NAME: &str = "Segoe Fluent Icons";
pub const DEFAULT_FONT_VERSION: &str = "1.0";
pub const DEFAULT_COPYRIGHT: &str = "© 2021 Microsoft Corporation. All Rights Reserved.";

/// Generator tag recorded in `font.generated_by`.
pub const GENERATED_BY: &str = concat!("iconmeta ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub font: FontDescriptor,
    pub categories: Vec<CategoryDefinition>,
    pub icons: Vec<IconRecord>,
}

impl Catalogue {
    pub fn new(font: FontDescriptor, icons: Vec<IconRecord>) -> Self {
        Self {
            schema: SCHEMA_REF.to_string(),
            font,
            categories: category_definitions(),
            icons,
        }
    }

    pub fn icon(&self, code_point: u32) -> Option<&IconRecord> {
        self.icons.iter().find(|icon| icon.code_point == code_point)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub name: String,
    pub version: String,
    pub copyright: String,
    pub source: String,
    pub generated_by: String,
}

impl FontDescriptor {
    /// Descriptor from whatever the font declares, with the Segoe defaults filling gaps.
    pub fn from_font_info(info: &FontInfo, source: impl Into<String>) -> Self {
        Self {
            name: info
                .full_name
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_NAME.to_string()),
            version: info
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_VERSION.to_string()),
            copyright: info
                .copyright
                .clone()
                .unwrap_or_else(|| DEFAULT_COPYRIGHT.to_string()),
            source: source.into(),
            generated_by: GENERATED_BY.to_string(),
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::from_font_info(&FontInfo::default(), EMBEDDED_SOURCE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub glyph: String,
    #[serde(
        rename = "unicode",
        serialize_with = "serialize_code_point",
        deserialize_with = "deserialize_code_point"
    )]
    pub code_point: u32,
    pub unicode_string: String,
    pub name: String,
    pub category: Category,
    pub keywords: Vec<String>,
    pub i18n: Translation,
    pub verified: bool,
}

impl IconRecord {
    pub fn hex(&self) -> String {
        format_hex(self.code_point)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub en: String,
    pub zh: String,
}

fn serialize_code_point<S>(code_point: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    format_hex(*code_point).serialize(serializer)
}

fn deserialize_code_point<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_hex(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid unicode: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_icon() -> IconRecord {
        IconRecord {
            glyph: "ue72b".to_string(),
            code_point: 0xE72B,
            unicode_string: "\\ue72b".to_string(),
            name: "Back".to_string(),
            category: Category::Navigation,
            keywords: vec!["back".to_string()],
            i18n: Translation {
                en: "Back".to_string(),
                zh: "后退".to_string(),
            },
            verified: true,
        }
    }

    #[test]
    fn icon_fields_use_catalogue_names() {
        let value = serde_json::to_value(sample_icon()).expect("serialize");

        assert_eq!(value["unicode"], "E72B");
        assert_eq!(value["glyph"], "ue72b");
        assert_eq!(value["unicode_string"], "\\ue72b");
        assert_eq!(value["category"], "navigation");
        assert_eq!(value["i18n"]["zh"], "后退");
        assert_eq!(value["verified"], true);
    }

    #[test]
    fn top_level_keys_keep_declaration_order() {
        let catalogue = Catalogue::new(FontDescriptor::default(), vec![sample_icon()]);
        let json = serde_json::to_string(&catalogue).expect("serialize");

        let schema = json.find("\"$schema\"").expect("schema");
        let font = json.find("\"font\"").expect("font");
        let categories = json.find("\"categories\"").expect("categories");
        let icons = json.find("\"icons\"").expect("icons");
        assert!(schema < font && font < categories && categories < icons);
    }

    #[test]
    fn rejects_non_hex_unicode_on_read() {
        let mut value = serde_json::to_value(sample_icon()).expect("serialize");
        value["unicode"] = "not-hex".into();

        assert!(serde_json::from_value::<IconRecord>(value).is_err());
    }

    #[test]
    fn descriptor_prefers_font_strings() {
        let info = FontInfo {
            full_name: Some("Icons Pro".to_string()),
            version: None,
            copyright: Some("(c) Someone".to_string()),
        };
        let descriptor = FontDescriptor::from_font_info(&info, "docs.md");

        assert_eq!(descriptor.name, "Icons Pro");
        assert_eq!(descriptor.version, DEFAULT_FONT_VERSION);
        assert_eq!(descriptor.copyright, "(c) Someone");
        assert_eq!(descriptor.source, "docs.md");
        assert!(descriptor.generated_by.starts_with("iconmeta "));
    }
}
