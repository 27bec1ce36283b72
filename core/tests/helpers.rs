use formkit_core::helpers::links::{file_url, image_url, ImageRequest, ImageSize};
use formkit_core::helpers::query::url_get_params;
use formkit_core::helpers::records::{is_diff, sort_records, value_or_default};
use formkit_core::helpers::timing::elapsed_ms;
use serde_json::json;
use std::time::{Duration, Instant};

#[test]
fn query_params_single_repeated_and_bare() {
    let p = url_get_params("?b=2&a=1&tag=x&flag&tag=y+z&name=J%C3%B6rg");
    assert_eq!(p.get("a"), Some(&Some("1".to_string())));
    assert_eq!(p.get("b"), Some(&Some("2".to_string())));
    assert_eq!(p.get("tag"), Some(&Some("x;y z".to_string())));
    assert_eq!(p.get("flag"), Some(&None));
    assert_eq!(p.get("name"), Some(&Some("Jörg".to_string())));

    let keys: Vec<&str> = p.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "flag", "name", "tag"]);
}

#[test]
fn query_params_edge_cases() {
    assert!(url_get_params("").is_empty());
    assert!(url_get_params("?").is_empty());
    assert!(url_get_params("&&").is_empty());

    let p = url_get_params("#empty=&x&x=1");
    assert_eq!(p.get("empty"), Some(&Some(String::new())));
    assert_eq!(p.get("x"), Some(&Some(";1".to_string())));
}

#[test]
fn image_urls() {
    let mut req = ImageRequest {
        cdn_url: "https://cdn.example.com".to_string(),
        image: Some("cat.jpg".to_string()),
        size: ImageSize::Mid,
        undefined_image: None,
    };
    assert_eq!(image_url(&req), "https://cdn.example.com/images/mid/cat.jpg");

    req.image = None;
    assert_eq!(image_url(&req), "https://cdn.example.com/static/dummy.png");

    req.cdn_url = "https://cdn.example.com/".to_string();
    assert_eq!(image_url(&req), "https://cdn.example.com//static/dummy.png");
    req.cdn_url = "https://cdn.example.com".to_string();

    req.image = Some(String::new());
    req.undefined_image = Some("avatar.svg".to_string());
    assert_eq!(image_url(&req), "https://cdn.example.com/static/avatar.svg");
}

#[test]
fn image_size_wire_names() {
    let s: ImageSize = serde_json::from_value(json!("sqr")).unwrap();
    assert_eq!(s, ImageSize::Sqr);
    assert_eq!(serde_json::to_value(ImageSize::Max).unwrap(), json!("max"));
}

#[test]
fn file_urls() {
    assert_eq!(
        file_url("https://cdn.example.com", "report.pdf"),
        "https://cdn.example.com/files/report.pdf"
    );
    // The CDN prefix is used verbatim.
    assert_eq!(
        file_url("https://cdn.example.com/", "report.pdf"),
        "https://cdn.example.com//files/report.pdf"
    );
}

#[test]
fn value_or_default_skips_empty() {
    assert_eq!(value_or_default(Some("x"), Some("d")), Some("x".to_string()));
    assert_eq!(value_or_default(Some(""), Some("d")), Some("d".to_string()));
    assert_eq!(value_or_default(None, Some("d")), Some("d".to_string()));
    assert_eq!(value_or_default(None, None), None);
    // Whitespace is a value here, unlike in the form sanitizer.
    assert_eq!(value_or_default(Some(" "), None), Some(" ".to_string()));
}

#[test]
fn is_diff_is_deep() {
    assert!(!is_diff(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 2}]})));
    assert!(is_diff(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 3}]})));
    assert!(is_diff(&json!([1, 2]), &json!([2, 1])));
    assert!(!is_diff(&json!({"x": 1, "y": 2}), &json!({"y": 2, "x": 1})));
}

fn ids(v: &[serde_json::Value]) -> Vec<i64> {
    v.iter().map(|r| r["id"].as_i64().unwrap()).collect()
}

#[test]
fn sort_records_by_fields() {
    let data = vec![
        json!({"id": 1, "group": "b", "score": 10}),
        json!({"id": 2, "group": "a", "score": 5}),
        json!({"id": 3, "group": "b", "score": 2}),
        json!({"id": 4, "score": 7}),
        json!({"id": 5, "group": "a", "score": 5}),
    ];

    assert_eq!(ids(&sort_records(&data, &["score"], false)), vec![3, 2, 5, 4, 1]);
    assert_eq!(ids(&sort_records(&data, &["group", "score"], false)), vec![2, 5, 3, 1, 4]);
    assert_eq!(ids(&sort_records(&data, &["group", "score"], true)), vec![4, 1, 3, 5, 2]);
    assert_eq!(ids(&sort_records(&data, &[], false)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn elapsed_ms_measures_from_start() {
    assert_eq!(elapsed_ms(None), 0.0);
    let start = Instant::now() - Duration::from_millis(25);
    let ms = elapsed_ms(Some(start));
    assert!(ms >= 25.0, "{}", ms);
}
