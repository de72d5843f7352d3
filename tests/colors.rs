use landing_storefront_api::domain::colors::{
    ColorSource, FALLBACK_HEX, JoinedColorRow, classify_legacy_entry, is_hex_color,
    legacy_sources, needs_standard_lookup, resolve_product_colors,
};
use landing_storefront_api::models::StandardColor;
use serde_json::json;
use uuid::Uuid;

fn standard(name: &str, hex: &str) -> StandardColor {
    StandardColor {
        id: Uuid::new_v4(),
        name: name.to_string(),
        hex_code: hex.to_string(),
        sort_order: 0,
    }
}

fn standard_row(color: &StandardColor) -> JoinedColorRow {
    JoinedColorRow {
        row_id: Uuid::new_v4(),
        standard_color_id: Some(color.id),
        custom_hex: None,
        standard: Some(color.clone()),
    }
}

fn custom_row(hex: &str) -> JoinedColorRow {
    JoinedColorRow {
        row_id: Uuid::new_v4(),
        standard_color_id: None,
        custom_hex: Some(hex.to_string()),
        standard: None,
    }
}

#[test]
fn join_rows_shadow_legacy_field() {
    let red = standard("Red", "#FF0000");
    let rows = vec![standard_row(&red)];
    let legacy = json!(["#00FF00", { "hex_code": "#0000FF", "name": "Blue" }]);

    let colors = resolve_product_colors(&rows, Some(&legacy), Some(std::slice::from_ref(&red)));

    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].id, red.id.to_string());
    assert_eq!(colors[0].name, "Red");
    assert_eq!(colors[0].hex_code, "#FF0000");
    assert!(!colors[0].custom);
}

#[test]
fn custom_join_row_uses_row_id() {
    let row = custom_row("#123ABC");
    let row_id = row.row_id;

    let colors = resolve_product_colors(&[row], None, None);

    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].id, row_id.to_string());
    assert_eq!(colors[0].name, "Custom");
    assert_eq!(colors[0].hex_code, "#123ABC");
    assert!(colors[0].custom);
}

#[test]
fn dangling_standard_reference_falls_back() {
    let color_id = Uuid::new_v4();
    let row = JoinedColorRow {
        row_id: Uuid::new_v4(),
        standard_color_id: Some(color_id),
        custom_hex: None,
        standard: None,
    };

    let colors = resolve_product_colors(&[row], None, None);

    assert_eq!(colors[0].id, color_id.to_string());
    assert_eq!(colors[0].name, "Custom");
    assert_eq!(colors[0].hex_code, FALLBACK_HEX);
    assert!(!colors[0].custom);
}

#[test]
fn legacy_hex_matches_standard_case_insensitively() {
    let navy = standard("Navy", "#000080");
    let legacy = json!(["#000080"]);
    let lower = json!(["#00ff00"]);
    let green = standard("Green", "#00FF00");

    let colors = resolve_product_colors(&[], Some(&legacy), Some(std::slice::from_ref(&navy)));
    assert_eq!(colors[0].id, navy.id.to_string());
    assert_eq!(colors[0].name, "Navy");
    assert!(!colors[0].custom);

    let colors = resolve_product_colors(&[], Some(&lower), Some(std::slice::from_ref(&green)));
    assert_eq!(colors[0].name, "Green");
    assert_eq!(colors[0].hex_code, "#00FF00");
    assert!(!colors[0].custom);
}

#[test]
fn unmatched_legacy_hex_becomes_custom() {
    let legacy = json!(["#ABCDEF"]);

    let colors = resolve_product_colors(&[], Some(&legacy), Some(&[standard("Red", "#FF0000")][..]));

    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].id, "color-#ABCDEF");
    assert_eq!(colors[0].name, "Custom");
    assert_eq!(colors[0].hex_code, "#ABCDEF");
    assert!(colors[0].custom);
}

#[test]
fn failed_standard_lookup_degrades_to_custom() {
    let legacy = json!(["#FF0000"]);

    let colors = resolve_product_colors(&[], Some(&legacy), None);

    assert_eq!(colors[0].name, "Custom");
    assert!(colors[0].custom);
}

#[test]
fn legacy_objects_get_fallbacks() {
    let legacy = json!([
        { "hex_code": "#111111" },
        { "id": "c-1", "name": "Sand", "hex_code": "#C2B280", "custom": false },
        { "id": "c-2", "hex_code": "" }
    ]);

    let colors = resolve_product_colors(&[], Some(&legacy), Some(&[][..]));

    assert_eq!(colors.len(), 3);
    assert_eq!(colors[0].id, "color-#111111");
    assert_eq!(colors[0].name, "Unknown");
    assert!(colors[0].custom);

    assert_eq!(colors[1].id, "c-1");
    assert_eq!(colors[1].name, "Sand");
    assert!(!colors[1].custom);

    assert_eq!(colors[2].id, "c-2");
    assert_eq!(colors[2].hex_code, FALLBACK_HEX);
}

#[test]
fn other_shapes_are_skipped() {
    let legacy = json!(["red", 42, null, { "name": "No hex" }, "#12345", "#A1B2C3"]);

    let colors = resolve_product_colors(&[], Some(&legacy), Some(&[][..]));

    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].hex_code, "#A1B2C3");
}

#[test]
fn duplicate_ids_keep_first() {
    let legacy = json!(["#ABCDEF", "#ABCDEF", { "id": "color-#ABCDEF", "hex_code": "#ABCDEF", "name": "Dup" }]);

    let colors = resolve_product_colors(&[], Some(&legacy), Some(&[][..]));

    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].name, "Custom");
}

#[test]
fn missing_or_non_array_legacy_field_is_empty() {
    assert!(resolve_product_colors(&[], None, None).is_empty());
    assert!(resolve_product_colors(&[], Some(&json!({ "hex_code": "#FFFFFF" })), None).is_empty());
    assert!(legacy_sources(Some(&json!("#FFFFFF"))).is_empty());
}

#[test]
fn classification_and_lookup_need() {
    assert!(is_hex_color("#a1B2c3"));
    assert!(!is_hex_color("a1B2c3"));
    assert!(!is_hex_color("#a1B2c"));
    assert!(!is_hex_color("#GGGGGG"));

    assert_eq!(
        classify_legacy_entry(&json!("#FFFFFF")),
        ColorSource::LegacyHexString("#FFFFFF".to_string())
    );
    assert_eq!(classify_legacy_entry(&json!(true)), ColorSource::Unrecognized);

    let objects_only = legacy_sources(Some(&json!([{ "hex_code": "#FFFFFF" }])));
    assert!(!needs_standard_lookup(&objects_only));
    let with_hex = legacy_sources(Some(&json!([{ "hex_code": "#FFFFFF" }, "#000000"])));
    assert!(needs_standard_lookup(&with_hex));
}
