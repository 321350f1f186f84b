use chart_csv::api::CHART_CONFIGURATION_JSON_SCHEMA_V1;
use chart_csv::core::{ChartConfiguration, ChartKind};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn default_configuration_is_bar_over_first_two_headers() {
    let config = ChartConfiguration::default_for_headers(&headers(&["group", "score", "year"]))
        .expect("two headers available");

    assert_eq!(*config.kind(), ChartKind::Bar);
    assert_eq!(config.x_axis_key(), Some("group"));
    assert_eq!(config.y_axis_key(), Some("score"));
}

#[test]
fn default_configuration_needs_two_headers() {
    assert!(ChartConfiguration::default_for_headers(&headers(&["only"])).is_none());
    assert!(ChartConfiguration::default_for_headers(&[]).is_none());
}

#[test]
fn switching_kind_resets_fields_and_clears_other_pair() {
    let config = ChartConfiguration::bar("score", "group")
        .with_kind_reset(ChartKind::Pie, &headers(&["group", "score"]));

    assert_eq!(*config.kind(), ChartKind::Pie);
    assert_eq!(config.category_key(), Some("group"));
    assert_eq!(config.value_key(), Some("score"));
    assert_eq!(config.x_axis_key(), None);
    assert_eq!(config.y_axis_key(), None);
}

#[test]
fn switching_kind_with_short_field_list_leaves_selection_incomplete() {
    let config =
        ChartConfiguration::pie("a", "b").with_kind_reset(ChartKind::Line, &headers(&["a"]));
    assert_eq!(config.x_axis_key(), Some("a"));
    assert_eq!(config.y_axis_key(), None);
}

#[test]
fn kind_labels_are_case_insensitive() {
    assert_eq!(ChartKind::from_label(" Bar "), ChartKind::Bar);
    assert_eq!(ChartKind::from_label("PIE"), ChartKind::Pie);
    assert_eq!("line".parse::<ChartKind>(), Ok(ChartKind::Line));

    let other = ChartKind::from_label("Scatter");
    assert_eq!(other, ChartKind::Other("Scatter".to_owned()));
    assert!(!other.is_supported());
    assert_eq!(other.required_fields(), None);
    assert_eq!(other.to_string(), "Scatter");
}

#[test]
fn bar_configuration_serializes_axis_keys() {
    let json = serde_json::to_value(ChartConfiguration::bar("student", "score"))
        .expect("serialize configuration");
    assert_eq!(
        json,
        serde_json::json!({ "kind": "bar", "xAxisKey": "student", "yAxisKey": "score" })
    );
}

#[test]
fn pie_configuration_serializes_slice_keys() {
    let json = serde_json::to_value(ChartConfiguration::pie("group", "count"))
        .expect("serialize configuration");
    assert_eq!(
        json,
        serde_json::json!({ "kind": "pie", "categoryKey": "group", "valueKey": "count" })
    );
}

#[test]
fn configuration_rejects_fields_of_the_other_kind() {
    let result = serde_json::from_str::<ChartConfiguration>(
        r#"{ "kind": "pie", "xAxisKey": "a", "valueKey": "b" }"#,
    );
    assert!(result.is_err());
}

#[test]
fn configuration_json_contract_roundtrip() {
    let config = ChartConfiguration::line("week", "attendance");
    let json = config
        .to_json_contract_v1_pretty()
        .expect("configuration should serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let restored =
        ChartConfiguration::from_json_compat_str(&json).expect("contract should deserialize");
    assert_eq!(restored, config);
}

#[test]
fn configuration_json_compat_accepts_bare_object() {
    let restored =
        ChartConfiguration::from_json_compat_str(r#"{ "kind": "pie", "categoryKey": "c" }"#)
            .expect("bare configuration");
    assert_eq!(restored.category_key(), Some("c"));
    assert_eq!(restored.value_key(), None);
}

#[test]
fn configuration_json_contract_rejects_unknown_schema() {
    let payload = format!(
        r#"{{ "schema_version": {}, "configuration": {{ "kind": "bar" }} }}"#,
        CHART_CONFIGURATION_JSON_SCHEMA_V1 + 1
    );
    assert!(ChartConfiguration::from_json_compat_str(&payload).is_err());
}
