use chart_csv::core::parse_table;
use proptest::prelude::*;

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 ]{0,6}",
        Just(String::new()),
        Just("$1,234.5".to_owned()),
    ]
}

fn line_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(cell_strategy(), 0..6)
}

proptest! {
    #[test]
    fn row_count_matches_rows_and_parsing_is_idempotent(text in "[a-z0-9,\\r\\n \\t$.%-]{0,200}") {
        let first = parse_table(&text);
        let second = parse_table(&text);

        prop_assert_eq!(first.row_count(), first.rows().len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_row_has_one_entry_per_distinct_header(
        headers in proptest::collection::vec("[a-z]{1,4}", 1..6),
        lines in proptest::collection::vec(line_strategy(), 0..12),
    ) {
        let mut text = headers.join(",");
        for line in &lines {
            text.push('\n');
            text.push_str(&line.join(","));
        }

        let table = parse_table(&text);
        let mut distinct = headers.clone();
        distinct.sort();
        distinct.dedup();

        for row in table.rows() {
            prop_assert_eq!(row.len(), distinct.len());
            for header in &distinct {
                prop_assert!(row.contains_key(header));
            }
        }

        let expected_rows = lines
            .iter()
            .filter(|line| !line.join(",").trim().is_empty())
            .count();
        prop_assert_eq!(table.row_count(), expected_rows);
    }

    #[test]
    fn inserted_blank_lines_do_not_change_rows(
        rows in proptest::collection::vec("[a-z0-9]{1,3},[0-9]{1,3}", 1..10),
        blank in "[ \\t]{0,3}",
    ) {
        let compact = format!("k,v\n{}", rows.join("\n"));
        let padded = format!("k,v\n{}", rows.join(&format!("\n{blank}\n")));

        prop_assert_eq!(parse_table(&compact), parse_table(&padded));
    }
}
