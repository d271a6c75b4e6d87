#![allow(clippy::unwrap_used, clippy::expect_used)]

use diffcheck_assert::{Abort, AssertConfig, Checker, TestSink, WriterSink};
use diffcheck_core::diff::{align, render_alignment, FnCostModel};
use diffcheck_core::{Outcome, ReportConfig, Value, ValueMap};
use std::collections::BTreeMap;

fn output(sink: WriterSink<Vec<u8>>) -> String {
    String::from_utf8(sink.into_inner()).unwrap()
}

#[test]
fn test_mapping_diff_through_checker() {
    let mut sink = WriterSink::new(Vec::new());
    let mut check = Checker::new(&mut sink).without_position();

    let exp = BTreeMap::from([(2, 1), (3, 5)]);
    let act = BTreeMap::from([(1, 2), (3, 4)]);
    assert!(!check.equal("m", act, exp));

    assert_eq!(
        output(sink),
        concat!(
            "Unexpected m: both 2 entries\n",
            "  Difference(expected ---  actual +++)\n",
            "    --- \"2\": \"1\"\n",
            "    --- \"3\": \"5\"\n",
            "    +++ \"3\": \"4\"\n",
            "    +++ \"1\": \"2\"\n",
        )
    );
}

#[test]
fn test_collection_length_compares_with_literal() {
    let mut sink = WriterSink::new(Vec::new());
    let mut check = Checker::new(&mut sink).without_position();

    let items = vec!["a", "b", "c"];
    assert!(check.equal("len", items.len(), 3));
    assert!(!check.equal("len", items.len(), 2u64));
    assert!(check.not_equal("len", items.len(), -1isize));

    assert!(sink.failed());
    assert_eq!(output(sink), "len is expected to be \"2\", but got \"3\"\n");
}

#[test]
fn test_multiline_string_equal_diffs_lines() {
    let mut sink = WriterSink::new(Vec::new());
    let mut check = Checker::new(&mut sink).without_position();

    assert!(!check.string_equal("doc", "title\nbody\nend", "title\nend"));

    assert_eq!(
        output(sink),
        concat!(
            "Unexpected doc: exp 2, act 3 lines\n",
            "  Difference(expected ---  actual +++)\n",
            "    +++   2: \"body\"\n",
        )
    );
}

#[test]
fn test_label_prefixes_whole_report() {
    let mut sink = WriterSink::new(Vec::new()).with_label("case");
    let mut check = Checker::new(&mut sink).without_position();

    check.equal("v", vec![1], Vec::<i32>::new());

    assert_eq!(
        output(sink),
        concat!(
            "case: Unexpected v: exp 0, act 1 lines\n",
            "case:   Difference(expected ---  actual +++)\n",
            "case:     +++   1: \"1\"\n",
        )
    );
}

#[test]
fn test_position_is_the_test_line() {
    let mut sink = WriterSink::new(Vec::new());
    let mut check = Checker::new(&mut sink);

    let line = line!() + 1;
    check.is_true("ready", false);

    assert_eq!(
        output(sink),
        format!("checker_tests.rs:{}: ready unexpectedly got false\n", line)
    );
}

#[test]
fn test_config_controls_wrapping_and_context() {
    let report = ReportConfig {
        include_position: false,
        wrap_width: 20,
        show_matched: true,
    };
    let mut sink = WriterSink::new(Vec::new());
    let mut check = Checker::with_config(&mut sink, AssertConfig::new(report));

    check.equal("n", 1, 2);
    check.equal("s", vec!["a", "x"], vec!["a", "b"]);

    assert_eq!(
        output(sink),
        concat!(
            "n is expected to be\n",
            "  \"2\"\n",
            "but got\n",
            "  \"1\"\n",
            "Unexpected s: both 2 lines\n",
            "  Difference(expected ---  actual +++)\n",
            "          1: \"a\"\n",
            "    ---   2: \"b\"\n",
            "    +++   2: \"x\"\n",
        )
    );
}

#[test]
fn test_engine_error_is_not_a_mismatch() {
    let mut sink = WriterSink::new(Vec::new());
    let mut check = Checker::new(&mut sink).without_position();

    let exp = ["a"];
    let act = ["b"];
    let costs = FnCostModel::new(|_, _| -1, |_| 1, |_| 1);
    let result = align(exp.len(), act.len(), &costs)
        .map(|a| Outcome::Diff(render_alignment(&exp, &act, &a, false)));
    assert!(!check.outcome("custom", result));

    assert!(sink.failed());
    let out = output(sink);
    assert!(out.starts_with("assert: [ERR_INVALID_COST_MODEL]"), "{}", out);
    assert!(!out.contains("Unexpected"));
}

#[test]
fn test_json_values_with_collisions() {
    let mut sink = WriterSink::new(Vec::new());
    let mut check = Checker::new(&mut sink).without_position();

    let exp: ValueMap = [(Value::from(1), Value::from("x"))].into_iter().collect();
    let act = Value::from(serde_json::json!({"1": "x"}));
    assert!(!check.equal("keys", act, exp));

    assert_eq!(
        output(sink),
        concat!(
            "Unexpected keys: both 1 entries\n",
            "  Difference(expected ---  actual +++)\n",
            "    --- \"1\": \"x\"\n",
            "    +++ \"1\": \"x\"\n",
        )
    );
}

fn setup_then_check(check: &mut Checker<'_, dyn TestSink + '_>) -> Result<(), Abort> {
    check.no_error_or_die(&"42".parse::<i32>())?;
    check.should_or_die("x".parse::<i32>().is_ok(), "x is not a number")?;
    check.fatal("unreachable")
}

#[test]
fn test_fatal_sequence_through_dyn_sink() {
    let mut sink = WriterSink::new(Vec::new());
    {
        let dyn_sink: &mut dyn TestSink = &mut sink;
        let mut check = Checker::new(dyn_sink).without_position();
        assert_eq!(setup_then_check(&mut check), Err(Abort::Failed));
    }
    assert_eq!(output(sink), "x is not a number\n");
}
