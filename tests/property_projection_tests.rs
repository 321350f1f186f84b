use chart_csv::core::{
    ChartConfiguration, PIE_VALUE_KEY, parse_table, project_points, try_parse_number,
};
use proptest::prelude::*;

fn value_cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (-10_000i32..10_000).prop_map(|v| v.to_string()),
        (-1_000.0f64..1_000.0).prop_map(|v| format!("{v:.2}")),
        (0u32..100).prop_map(|v| format!("{v}%")),
        Just("n/a".to_owned()),
        Just(String::new()),
        Just("absent".to_owned()),
    ]
}

fn table_text(rows: &[(String, String)]) -> String {
    let mut text = String::from("label,amount");
    for (label, value) in rows {
        text.push('\n');
        text.push_str(label);
        text.push(',');
        text.push_str(value);
    }
    text
}

proptest! {
    #[test]
    fn projected_points_are_exactly_the_numeric_rows(
        rows in proptest::collection::vec(("[a-z]{1,5}", value_cell_strategy()), 0..40)
    ) {
        let table = parse_table(&table_text(&rows));
        let points = project_points(&table, &ChartConfiguration::bar("label", "amount"))
            .expect("bar projection");

        let expected: Vec<(String, f64)> = rows
            .iter()
            .filter_map(|(label, value)| try_parse_number(value.as_str()).map(|v| (label.clone(), v)))
            .collect();

        prop_assert_eq!(points.len(), expected.len());
        for (point, (label, value)) in points.iter().zip(&expected) {
            prop_assert_eq!(&point.name, label);
            prop_assert_eq!(point.value_key.as_str(), "amount");
            prop_assert_eq!(point.value, *value);
            prop_assert!(!point.value.is_nan());
        }
    }

    #[test]
    fn pie_and_bar_agree_on_names_and_values(
        rows in proptest::collection::vec(("[a-z]{1,5}", value_cell_strategy()), 0..40)
    ) {
        let table = parse_table(&table_text(&rows));
        let bar = project_points(&table, &ChartConfiguration::bar("label", "amount"))
            .expect("bar projection");
        let pie = project_points(&table, &ChartConfiguration::pie("label", "amount"))
            .expect("pie projection");

        prop_assert_eq!(bar.len(), pie.len());
        for (b, p) in bar.iter().zip(&pie) {
            prop_assert_eq!(&b.name, &p.name);
            prop_assert_eq!(b.value, p.value);
            prop_assert_eq!(p.value_key.as_str(), PIE_VALUE_KEY);
        }
    }

    #[test]
    fn projection_is_deterministic(
        rows in proptest::collection::vec(("[a-z]{1,5}", value_cell_strategy()), 0..20)
    ) {
        let table = parse_table(&table_text(&rows));
        let config = ChartConfiguration::line("label", "amount");
        let first = project_points(&table, &config).expect("line projection");
        let second = project_points(&table, &config).expect("line projection");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn try_parse_number_never_returns_nan(text in ".{0,24}") {
        if let Some(value) = try_parse_number(text.as_str()) {
            prop_assert!(!value.is_nan());
        }
    }
}
