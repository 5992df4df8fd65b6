//! Stripping an already-stripped file must change nothing: the first pass
//! removes every construct the scanner recognizes, so a second pass has
//! nothing left to match.

use proptest::prelude::*;
use strip_core::strip::rules::DEFAULT_RULES;
use strip_core::strip::scanner::strip_source;

fn fragments() -> Vec<String> {
    [
        "int x;\n",
        "\n",
        "\tfoo(1, 2);\n",
        "// scratch comment\n",
        "// SPDX-License-Identifier: BSD-2-Clause\n",
        "\ttt_record(\"ev\");\n",
        "\ttt_freeze();\n",
        "\tUNIT_LOG(\"x\", unit);\n",
        "#ifndef __STRIP__ /* See strip.py */\n\
         secret();\n\
         #endif /* See strip.py */\n",
        "#ifdef __UNIT_TEST__\n\
         mock();\n\
         #else /* __UNIT_TEST__ */\n\
         real();\n\
         #endif /* __UNIT_TEST__ */\n",
        "#if LINUX_VERSION_CODE < KERNEL_VERSION(5, 18, 0)\n\
         old();\n\
         #else\n\
         new();\n\
         #endif\n",
        "void f(void)\n\
         {\n\
         \tif (x) {\n\
         \t\ta();\n\
         \t\tb();\n\
         \t}\n\
         }\n",
        "void g(void)\n\
         {\n\
         \twhile (x) {\n\
         \t\ta();\n\
         \t\ttt_record(\"x\");\n\
         \t}\n\
         }\n",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn fragment() -> impl Strategy<Value = String> {
    prop::sample::select(fragments())
}

proptest! {
    #[test]
    fn stripping_is_idempotent(fragments in prop::collection::vec(fragment(), 0..12)) {
        let source: String = fragments.concat();
        let once = strip_source(&source, &DEFAULT_RULES, false);
        let twice = strip_source(&once.text(), &DEFAULT_RULES, false);
        prop_assert_eq!(once.text(), twice.text());
    }

    #[test]
    fn alt_mode_stripping_is_idempotent(fragments in prop::collection::vec(fragment(), 0..12)) {
        let source: String = fragments.concat();
        let once = strip_source(&source, &DEFAULT_RULES, true);
        let twice = strip_source(&once.text(), &DEFAULT_RULES, true);
        prop_assert_eq!(once.text(), twice.text());
    }
}
