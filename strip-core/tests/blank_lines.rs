//! Blank-line suppression at deletion seams.

use strip_core::strip::rules::DEFAULT_RULES;
use strip_core::strip::scanner::strip_source;

fn strip(source: &str) -> String {
    strip_source(source, &DEFAULT_RULES, false).text()
}

#[test]
fn blank_lines_around_removed_statement_collapse_to_one() {
    let source = "\ta();\n\n\ttt_record(\"x\");\n\n\tb();\n";
    assert_eq!(strip(source), "\ta();\n\n\tb();\n");
}

#[test]
fn suppression_is_consumed_by_the_next_line() {
    // Only the blank line immediately after the deletion is suppressed;
    // later blanks are unrelated and stay.
    let source = "\ta();\n\n\ttt_record(\"x\");\n\tb();\n\n\tc();\n";
    assert_eq!(strip(source), "\ta();\n\n\tb();\n\n\tc();\n");
}

#[test]
fn blank_line_before_dropped_region_collapses() {
    let source = "a();\n\
                  \n\
                  #ifndef __STRIP__ /* See strip.py */\n\
                  secret();\n\
                  #endif /* See strip.py */\n\
                  \n\
                  b();\n";
    assert_eq!(strip(source), "a();\n\nb();\n");
}

#[test]
fn blank_line_before_dropped_unit_region_collapses() {
    let source = "a();\n\
                  \n\
                  #ifdef __UNIT_TEST__\n\
                  mock();\n\
                  #endif /* __UNIT_TEST__ */\n\
                  \n\
                  b();\n";
    assert_eq!(strip(source), "a();\n\nb();\n");
}

#[test]
fn lone_blank_lines_are_kept() {
    let source = "a();\n\n\nb();\n";
    assert_eq!(strip(source), source);
}
