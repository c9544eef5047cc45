//! Tests for filter evaluation.

use std::collections::BTreeMap;
use std::thread;

use super::*;

// ==================== Test Helpers ====================

fn make_row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .collect()
}

fn make_spec(qualifier: &str, comparator: Comparator, value: &str) -> FilterSpec {
    FilterSpec::new("a", qualifier, comparator, value)
}

// ==================== String Comparison ====================

#[test]
fn test_string_equal() {
    let row = make_row(&[("a:insta", "jon")]);
    assert!(check_filter(&row, &make_spec("insta", Comparator::Equal, "jon")));
}

#[test]
fn test_string_not_equal() {
    let row = make_row(&[("a:insta", "jon")]);
    assert!(check_filter(&row, &make_spec("insta", Comparator::NotEqual, "bob")));
    assert!(!check_filter(&row, &make_spec("insta", Comparator::NotEqual, "jon")));
}

#[test]
fn test_string_equal_is_case_sensitive() {
    let row = make_row(&[("a:insta", "Jon")]);
    assert!(!check_filter(&row, &make_spec("insta", Comparator::Equal, "jon")));
}

#[test]
fn test_string_ordering_is_lexicographic() {
    let row = make_row(&[("a:name", "bob")]);
    assert!(check_filter(&row, &make_spec("name", Comparator::Less, "jon")));
    assert!(check_filter(&row, &make_spec("name", Comparator::GreaterOrEqual, "alice")));
    assert!(!check_filter(&row, &make_spec("name", Comparator::Greater, "bob")));
}

// ==================== Integer Comparison ====================

#[test]
fn test_integer_greater_or_equal() {
    let row = make_row(&[("a:count", "5")]);
    assert!(check_filter(&row, &make_spec("count", Comparator::GreaterOrEqual, "4")));
}

#[test]
fn test_integer_equal_false() {
    let row = make_row(&[("a:count", "111")]);
    assert!(!check_filter(&row, &make_spec("count", Comparator::Equal, "2222")));
}

#[test]
fn test_integer_numeric_not_lexicographic() {
    // "5" > "40" as strings, but 5 < 40 as numbers
    let row = make_row(&[("a:count", "5")]);
    assert!(check_filter(&row, &make_spec("count", Comparator::Less, "40")));
    assert!(!check_filter(&row, &make_spec("count", Comparator::Greater, "40")));
}

#[test]
fn test_integer_equal_ignores_leading_zeros() {
    let row = make_row(&[("a:count", "007")]);
    assert!(check_filter(&row, &make_spec("count", Comparator::Equal, "7")));
}

#[test]
fn test_integer_negative_values() {
    let row = make_row(&[("a:balance", "-10")]);
    assert!(check_filter(&row, &make_spec("balance", Comparator::Less, "-2")));
    assert!(check_filter(&row, &make_spec("balance", Comparator::LessOrEqual, "-10")));
}

// ==================== Date/Time Comparison ====================

#[test]
fn test_datetime_less_false() {
    let row = make_row(&[("a:time", "2018-04-04T07:10:49.812255+00:00")]);
    assert!(!check_filter(
        &row,
        &make_spec("time", Comparator::Less, "2018-04-04T07:10:47.812255+00:00")
    ));
}

#[test]
fn test_datetime_greater_or_equal_true() {
    let row = make_row(&[("a:time", "2018-04-04T07:10:49.812255+00:00")]);
    assert!(check_filter(
        &row,
        &make_spec(
            "time",
            Comparator::GreaterOrEqual,
            "2018-04-04T07:10:47.812255+00:00"
        )
    ));
}

#[test]
fn test_datetime_compares_across_offsets() {
    // Same instant, different offsets
    let row = make_row(&[("a:time", "2018-04-04T09:10:49+02:00")]);
    assert!(check_filter(
        &row,
        &make_spec("time", Comparator::Equal, "2018-04-04T07:10:49+00:00")
    ));
}

#[test]
fn test_datetime_chronological_not_lexicographic() {
    // Lexicographically "2018-04-04T08..." > "2018-04-04T07...", chronologically earlier
    let row = make_row(&[("a:time", "2018-04-04T08:00:00+05:00")]);
    assert!(check_filter(
        &row,
        &make_spec("time", Comparator::Less, "2018-04-04T07:00:00+00:00")
    ));
}

#[test]
fn test_integer_wider_than_i64_compares_numerically() {
    // 2^64 sorts before "5" as text
    let row = make_row(&[("a:count", "18446744073709551616")]);
    assert!(check_filter(&row, &make_spec("count", Comparator::Greater, "5")));
    assert!(!check_filter(&row, &make_spec("count", Comparator::LessOrEqual, "5")));
    assert!(check_filter(
        &row,
        &make_spec("count", Comparator::Equal, "0018446744073709551616")
    ));
}

#[test]
fn test_datetime_literal_without_seconds() {
    // 08:00Z against 09:00Z
    let row = make_row(&[("a:time", "2018-04-04T10:00:00+02:00")]);
    assert!(check_filter(
        &row,
        &make_spec("time", Comparator::Less, "2018-04-04T09:00+00:00")
    ));
    assert!(check_filter(
        &row,
        &make_spec("time", Comparator::GreaterOrEqual, "2018-04-04 07:59+00:00")
    ));
}

// ==================== Mixed Types ====================

#[test]
fn test_mixed_types_fall_back_to_strings() {
    let row = make_row(&[("a:count", "abc")]);
    // "abc" vs "5": strings, "abc" > "5"
    assert!(check_filter(&row, &make_spec("count", Comparator::Greater, "5")));
    assert!(check_filter(&row, &make_spec("count", Comparator::NotEqual, "5")));
    assert!(!check_filter(&row, &make_spec("count", Comparator::Equal, "5")));
}

#[test]
fn test_mixed_int_and_time_fall_back_to_strings() {
    let row = make_row(&[("a:time", "2018-04-04T07:10:49+00:00")]);
    assert!(check_filter(&row, &make_spec("time", Comparator::Greater, "2017")));
    assert!(!check_filter(&row, &make_spec("time", Comparator::Greater, "3000")));
}

// ==================== Missing Column ====================

#[test]
fn test_missing_column_passes_by_default() {
    let row = make_row(&[("a:other", "jon")]);
    let spec = make_spec("insta", Comparator::Equal, "jon");

    assert!(!spec.filter_if_missing);
    assert!(check_filter(&row, &spec));
}

#[test]
fn test_missing_column_filtered_when_filter_if_missing() {
    let row = make_row(&[("a:other", "jon")]);
    let spec = make_spec("insta", Comparator::Equal, "jon").with_filter_if_missing(true);

    assert!(!check_filter(&row, &spec));
}

#[test]
fn test_missing_column_empty_row() {
    let row = Row::new();
    assert!(check_filter(&row, &make_spec("insta", Comparator::NotEqual, "x")));
    assert!(!check_filter(
        &row,
        &make_spec("insta", Comparator::NotEqual, "x").with_filter_if_missing(true)
    ));
}

#[test]
fn test_present_column_ignores_filter_if_missing() {
    let row = make_row(&[("a:insta", "jon")]);
    let spec = make_spec("insta", Comparator::Equal, "bob").with_filter_if_missing(false);

    assert!(!check_filter(&row, &spec));
}

#[test]
fn test_family_must_match() {
    let row = make_row(&[("b:insta", "jon")]);
    let spec = make_spec("insta", Comparator::Equal, "jon").with_filter_if_missing(true);

    assert!(!check_filter(&row, &spec));
}

#[test]
fn test_latest_version_only_does_not_affect_verdict() {
    let row = make_row(&[("a:insta", "jon")]);
    let latest = make_spec("insta", Comparator::Equal, "jon");
    let all = latest.clone().with_latest_version_only(false);

    assert_eq!(check_filter(&row, &latest), check_filter(&row, &all));
}

// ==================== Row Types ====================

#[test]
fn test_btree_map_row() {
    let row: BTreeMap<String, String> =
        BTreeMap::from([("a:count".to_string(), "5".to_string())]);
    assert!(check_filter(&row, &make_spec("count", Comparator::Greater, "4")));
}

#[test]
fn test_borrowed_str_row() {
    let row = std::collections::HashMap::from([("a:count", "5")]);
    assert!(check_filter(&row, &make_spec("count", Comparator::Greater, "4")));
}

// ==================== Evaluator ====================

#[test]
fn test_evaluator_filter_rows_keeps_order() {
    let rows = vec![
        make_row(&[("a:count", "1")]),
        make_row(&[("a:count", "10")]),
        make_row(&[("a:name", "no count")]),
        make_row(&[("a:count", "3")]),
    ];
    let spec = make_spec("count", Comparator::GreaterOrEqual, "3").with_filter_if_missing(true);
    let evaluator = FilterEvaluator::new(&spec);

    let matched = evaluator.filter_rows(&rows);

    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].get("a:count").map(String::as_str), Some("10"));
    assert_eq!(matched[1].get("a:count").map(String::as_str), Some("3"));
}

#[test]
fn test_evaluator_filter_rows_empty() {
    let rows: Vec<Row> = vec![];
    let spec = make_spec("count", Comparator::Equal, "1");

    assert!(FilterEvaluator::new(&spec).filter_rows(&rows).is_empty());
}

#[test]
fn test_evaluator_spec_accessor() {
    let spec = make_spec("count", Comparator::Equal, "1");
    assert_eq!(FilterEvaluator::new(&spec).spec(), &spec);
}

#[test]
fn test_evaluator_shared_across_threads() {
    let spec = make_spec("count", Comparator::Greater, "50");
    let evaluator = &FilterEvaluator::new(&spec);
    let rows: Vec<Row> = (0..100)
        .map(|i| make_row(&[("a:count", &i.to_string())]))
        .collect();

    let counts: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = rows
            .chunks(25)
            .map(|chunk| scope.spawn(move || evaluator.filter_rows(chunk).len()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts.iter().sum::<usize>(), 49);
}

// ==================== Parse Then Evaluate ====================

#[test]
fn test_parse_then_evaluate() {
    let spec = FilterParser::parse(
        "SingleColumnValueFilter('a', 'time', >=, 'binary:2018-04-04T07:10:47.812255+00:00')",
    )
    .unwrap();
    let row = make_row(&[("a:time", "2018-04-04T07:10:49.812255+00:00")]);

    assert!(check_filter(&row, &spec));
}
