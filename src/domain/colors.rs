//! Product color reconciliation.
//!
//! Colors live in two places: the `product_colors` join table and the deprecated inline
//! `products.colors` JSON array. The legacy array itself has two shapes (bare hex strings
//! and objects). Every entry is first classified into a [`ColorSource`], then turned into
//! a [`ColorDescriptor`].

use std::collections::HashSet;

use serde_json::Value;
use uuid::Uuid;

use crate::models::{ColorDescriptor, StandardColor};

pub const FALLBACK_HEX: &str = "#000000";
const CUSTOM_NAME: &str = "Custom";
const UNKNOWN_NAME: &str = "Unknown";

/// A `product_colors` row together with the standard color it points to, if any.
#[derive(Debug, Clone)]
pub struct JoinedColorRow {
    pub row_id: Uuid,
    pub standard_color_id: Option<Uuid>,
    pub custom_hex: Option<String>,
    pub standard: Option<StandardColor>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Join row referencing the shared vocabulary.
    StandardRef {
        color_id: Uuid,
        standard: Option<StandardColor>,
    },
    /// Join row carrying its own hex value.
    CustomHex { row_id: Uuid, hex: String },
    /// Legacy inline `"#RRGGBB"` string.
    LegacyHexString(String),
    /// Legacy inline object with a `hex_code` key.
    LegacyObject {
        id: Option<String>,
        name: Option<String>,
        hex_code: Option<String>,
        custom: Option<bool>,
    },
    Unrecognized,
}

impl ColorSource {
    fn is_legacy_hex(&self) -> bool {
        matches!(self, ColorSource::LegacyHexString(_))
    }
}

/// `#RRGGBB`, either case.
pub fn is_hex_color(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

pub fn classify_join_row(row: &JoinedColorRow) -> ColorSource {
    match (&row.custom_hex, row.standard_color_id) {
        (Some(hex), _) => ColorSource::CustomHex {
            row_id: row.row_id,
            hex: hex.clone(),
        },
        (None, Some(color_id)) => ColorSource::StandardRef {
            color_id,
            standard: row.standard.clone(),
        },
        (None, None) => ColorSource::Unrecognized,
    }
}

pub fn classify_legacy_entry(entry: &Value) -> ColorSource {
    match entry {
        Value::String(s) if is_hex_color(s) => ColorSource::LegacyHexString(s.clone()),
        Value::Object(obj) if obj.contains_key("hex_code") => ColorSource::LegacyObject {
            id: obj.get("id").and_then(scalar_to_string),
            name: obj.get("name").and_then(Value::as_str).map(str::to_owned),
            hex_code: obj.get("hex_code").and_then(Value::as_str).map(str::to_owned),
            custom: obj.get("custom").and_then(Value::as_bool),
        },
        _ => ColorSource::Unrecognized,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Classifies the legacy inline field. Anything other than an array yields nothing.
pub fn legacy_sources(field: Option<&Value>) -> Vec<ColorSource> {
    match field {
        Some(Value::Array(entries)) => entries.iter().map(classify_legacy_entry).collect(),
        _ => Vec::new(),
    }
}

/// The standard-color table only matters for bare legacy hex strings.
pub fn needs_standard_lookup(sources: &[ColorSource]) -> bool {
    sources.iter().any(ColorSource::is_legacy_hex)
}

/// Turns one classified entry into its output form.
///
/// `standards` is `None` when the vocabulary could not be loaded; hex strings then fall
/// through to custom colors.
pub fn describe(source: ColorSource, standards: Option<&[StandardColor]>) -> Option<ColorDescriptor> {
    match source {
        ColorSource::StandardRef { color_id, standard } => Some(ColorDescriptor {
            id: color_id.to_string(),
            name: standard
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| CUSTOM_NAME.to_string()),
            hex_code: standard
                .map(|s| s.hex_code)
                .unwrap_or_else(|| FALLBACK_HEX.to_string()),
            custom: false,
        }),
        ColorSource::CustomHex { row_id, hex } => Some(ColorDescriptor {
            id: row_id.to_string(),
            name: CUSTOM_NAME.to_string(),
            hex_code: hex,
            custom: true,
        }),
        ColorSource::LegacyHexString(hex) => {
            let matched = standards
                .unwrap_or_default()
                .iter()
                .find(|s| s.hex_code.eq_ignore_ascii_case(&hex));
            Some(match matched {
                Some(standard) => ColorDescriptor {
                    id: standard.id.to_string(),
                    name: standard.name.clone(),
                    hex_code: standard.hex_code.clone(),
                    custom: false,
                },
                None => ColorDescriptor {
                    id: format!("color-{hex}"),
                    name: CUSTOM_NAME.to_string(),
                    hex_code: hex,
                    custom: true,
                },
            })
        }
        ColorSource::LegacyObject {
            id,
            name,
            hex_code,
            custom,
        } => {
            let hex_code = hex_code
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| FALLBACK_HEX.to_string());
            // Objects without an id were never tied to the vocabulary.
            let custom = custom.unwrap_or(id.is_none());
            Some(ColorDescriptor {
                id: id.unwrap_or_else(|| format!("color-{hex_code}")),
                name: name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                hex_code,
                custom,
            })
        }
        ColorSource::Unrecognized => None,
    }
}

/// Describes every source in order, keeping the first descriptor per id.
pub fn resolve(sources: Vec<ColorSource>, standards: Option<&[StandardColor]>) -> Vec<ColorDescriptor> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter_map(|source| describe(source, standards))
        .filter(|color| seen.insert(color.id.clone()))
        .collect()
}

/// Effective color list of a product. Join rows win outright; the legacy field is only
/// read when there are none.
pub fn resolve_product_colors(
    join_rows: &[JoinedColorRow],
    legacy: Option<&Value>,
    standards: Option<&[StandardColor]>,
) -> Vec<ColorDescriptor> {
    if !join_rows.is_empty() {
        let sources = join_rows.iter().map(classify_join_row).collect();
        return resolve(sources, None);
    }
    resolve(legacy_sources(legacy), standards)
}
