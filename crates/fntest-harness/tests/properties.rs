//! Property suites for padding, idempotence and the catch boundary

use fntest_fixtures::{ten_over, triple, CaptureSink};
use fntest_harness::{join_display, FunctionTest};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prefix_is_padded_and_never_truncated(
        name in "[A-Za-z0-9 _-]{0,40}",
        width in 0_usize..120,
    ) {
        let sink = CaptureSink::new();
        let mut harness = FunctionTest::simple(|x: i32| x)
            .with_sink(sink.clone())
            .with_line_length(width);

        harness.test(&name, 7, (7,));

        let output = sink.contents();
        let bare = format!("TESTING {}: ", name);
        let status_at = output.find(" OK (").expect("an OK line");
        let column = &output[..status_at];
        prop_assert!(column.starts_with(&bare));
        prop_assert_eq!(column.chars().count(), bare.chars().count().max(width));
        prop_assert!(column[bare.len()..].chars().all(|c| c == '.'));
    }

    #[test]
    fn pure_functions_are_idempotent(
        i in -1000_i32..1000,
        j in -1000_i32..1000,
        expected in proptest::collection::vec(-1000_i32..1000, 0..5),
    ) {
        let sink = CaptureSink::new();
        let mut harness = FunctionTest::new(
            triple,
            |a: &Vec<i32>, b: &Vec<i32>| a == b,
            |value: &Vec<i32>| join_display(value, ", "),
        )
        .with_sink(sink.clone());

        let first = harness.test("first", expected.clone(), (i, j));
        let second = harness.test("second", expected, (i, j));

        prop_assert_eq!(first.passed, second.passed);
        prop_assert_eq!(first.actual, second.actual);
    }

    #[test]
    fn panics_never_escape(x in any::<i32>()) {
        let sink = CaptureSink::new();
        let mut harness = FunctionTest::simple(ten_over).with_sink(sink.clone());

        let expected = if x == 0 { 0 } else { 10 / x };
        let outcome = harness.test("quotient", expected, (x,));

        prop_assert_eq!(outcome.passed, x != 0);
        if x == 0 {
            prop_assert!(sink.contents().contains("EXCEPTION"));
        }
    }

    #[test]
    fn status_lines_match_the_contract(name in "[a-z]{1,12}") {
        let sink = CaptureSink::new();
        let mut harness = FunctionTest::simple(|x: i32| x + 1).with_sink(sink.clone());

        harness.test(&name, 1, (0,));

        let pattern = regex::Regex::new(r"^TESTING [a-z]{1,12}: \.* OK \(\d+ ms\)\n$").unwrap();
        prop_assert!(pattern.is_match(&sink.contents()));
    }

    #[test]
    fn verbose_block_always_has_four_lines(
        i in -100_i32..100,
        j in -100_i32..100,
    ) {
        let sink = CaptureSink::new();
        let mut harness = FunctionTest::new(
            triple,
            |a: &Vec<i32>, b: &Vec<i32>| a == b,
            |value: &Vec<i32>| join_display(value, ", "),
        )
        .with_sink(sink.clone());

        harness.test("mismatch", vec![], (i, j));

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 4);
        prop_assert!(lines[1].starts_with(" RESULT:   "));
        prop_assert!(lines[2].starts_with(" EXPECTED: "));
        prop_assert_eq!(lines[3].as_str(), ".");
    }
}
