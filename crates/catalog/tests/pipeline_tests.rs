//! End-to-end tests: upstream rows through to storefront and index shapes.

use product_catalog::prelude::*;
use serde_json::json;

const ROWS: &str = r#"[
    {"id": 1, "name": "RIMOWA 21寸托运箱拉杆箱 SALSA AIR系列果绿色", "price": 1249900,
     "image": "https://img/1.jpg", "brand": "RIMOWA", "category": "拉杆箱"},
    {"id": 2, "name": "Steel Kettle 1.7L", "price": 2999, "image": "https://img/2.jpg",
     "brand": "", "category": "Kitchen", "description": "Boils fast"},
    {"id": 3, "name": "", "price": 1, "image": ""}
]"#;

#[test]
fn test_rows_to_products() {
    let items = CatalogItem::load_many(ROWS).unwrap();
    let products: Vec<Product> = items.into_iter().map(Product::from).collect();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].brand.as_deref(), Some("RIMOWA"));
    assert_eq!(products[1].brand, None);
    assert_eq!(products[1].description, "Boils fast");

    // The storefront sees the optional fields only when they carry a value.
    let value = serde_json::to_value(&products[1]).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 2,
            "name": "Steel Kettle 1.7L",
            "price": 2999,
            "image": "https://img/2.jpg",
            "description": "Boils fast",
            "category": "Kitchen",
        })
    );
}

#[test]
fn test_rows_to_bulk_body() {
    let items = CatalogItem::load_many(ROWS).unwrap();
    let (body, report) = build_bulk(&items, &IndexSettings::default(), |_| {}).unwrap();

    assert_eq!(report.indexed, 2);
    assert_eq!(report.skipped, 1);

    let lines: Vec<serde_json::Value> = body
        .as_str()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);

    assert_eq!(
        lines[1]["suggest_keywords"],
        json!({
            "input": ["RIMOWA", "21寸托运箱拉杆箱", "SALSA", "AIR系列果绿色", "RIMOWA", "拉杆箱"],
            "weight": 10,
        })
    );
    assert_eq!(
        lines[3]["suggest_keywords"]["input"],
        json!(["Steel", "Kettle", "1.7L", "Kitchen"])
    );
}

#[test]
fn test_suggestion_list_from_completion_options() {
    let params = SuggestParams::new("sal").unwrap();
    let tags = HighlightTags::default();

    let suggestions: Vec<SearchSuggestion> = ["SALSA", "SALSA AIR系列"]
        .iter()
        .map(|text| SearchSuggestion::from_completion(text, &params.keyword, None, &tags))
        .collect();

    let value = serde_json::to_value(&suggestions).unwrap();
    assert_eq!(
        value,
        json!([{"text": "<em>SAL</em>SA"}, {"text": "<em>SAL</em>SA AIR系列"}])
    );

    // The older endpoint returned bare strings; both parse to the same shape.
    let parsed: Vec<SearchSuggestion> =
        serde_json::from_value(json!(["<em>SAL</em>SA", {"text": "<em>SAL</em>SA AIR系列", "id": 1}]))
            .unwrap();
    assert_eq!(parsed[0], suggestions[0]);
    assert_eq!(parsed[1].id, Some(ProductId::new(1)));
}
