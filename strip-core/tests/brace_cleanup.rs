//! Brace collapsing and the empty-block diagnostic.

use strip_core::strip::report::DiagnosticKind;
use strip_core::strip::rules::DEFAULT_RULES;
use strip_core::strip::scanner::strip_source;

fn strip(source: &str) -> String {
    strip_source(source, &DEFAULT_RULES, false).text()
}

#[test]
fn single_remaining_statement_loses_braces() {
    let source = "void f(void)\n\
                  {\n\
                  \twhile (x) {\n\
                  \t\ta();\n\
                  \t\ttt_record(\"x\");\n\
                  \t}\n\
                  }\n";
    let expected = "void f(void)\n\
                    {\n\
                    \twhile (x)\n\
                    \t\ta();\n\
                    }\n";
    assert_eq!(strip(source), expected);
}

#[test]
fn block_with_two_remaining_statements_keeps_braces() {
    let source = "\tif (x) {\n\
                  \t\ta();\n\
                  \t\tb();\n\
                  \t\ttt_record(\"x\");\n\
                  \t}\n";
    let expected = "\tif (x) {\n\
                    \t\ta();\n\
                    \t\tb();\n\
                    \t}\n";
    assert_eq!(strip(source), expected);
}

#[test]
fn empty_block_reports_diagnostic() {
    let source = "void f(void)\n\
                  {\n\
                  \tif (cond) {\n\
                  \t\ttt_record(\"x\");\n\
                  \t}\n\
                  }\n";
    let report = strip_source(source, &DEFAULT_RULES, false);
    assert_eq!(
        report.text(),
        "void f(void)\n{\n\tif (cond) {\n\t}\n}\n"
    );
    assert!(!report.is_clean());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].line, 5);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::EmptyBlock);
}

#[test]
fn do_while_closing_line_keeps_its_tail() {
    let source = "\tdo {\n\
                  \t\ta();\n\
                  \t\ttt_record(\"x\");\n\
                  \t} while (cond);\n";
    let expected = "\tdo\n\
                    \t\ta();\n\
                    \twhile (cond);\n";
    assert_eq!(strip(source), expected);
}

#[test]
fn untouched_blocks_are_never_collapsed() {
    let source = "\tif (x) {\n\
                  \t\ta();\n\
                  \t}\n";
    assert_eq!(strip(source), source);
}

#[test]
fn labeled_region_resets_brace_check() {
    // Deleting marker-delimited regions is not a statement deletion; the
    // enclosing block keeps its braces even if one statement remains.
    let source = "\tif (x) {\n\
                  \t\ta();\n\
                  #ifndef __STRIP__ /* See strip.py */\n\
                  \t\tb();\n\
                  #endif /* See strip.py */\n\
                  \t}\n";
    let expected = "\tif (x) {\n\
                    \t\ta();\n\
                    \t}\n";
    assert_eq!(strip(source), expected);
}

#[test]
fn opening_brace_in_column_zero_is_not_collapsible() {
    let source = "{\n\
                  \ta();\n\
                  \ttt_record(\"x\");\n\
                  }\n";
    let report = strip_source(source, &DEFAULT_RULES, false);
    assert_eq!(report.text(), "{\n\ta();\n}\n");
    assert!(report.is_clean());
}
