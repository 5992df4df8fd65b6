//! Marker strings and call patterns the scanner matches against.
//!
//! A [`StripRules`] is the compiled form: the exact line prefixes for every
//! region marker plus the record-call regex. The default vocabulary matches
//! the marker table in the crate documentation; a different vocabulary can
//! be compiled from a [`MarkerSpec`] and [`CallSpec`] (the `strip-config`
//! crate builds these from TOML).

use once_cell::sync::Lazy;
use regex::Regex;

/// The conditional-marker vocabulary of a codebase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpec {
    /// Symbol tested by the tool's own labeled regions.
    pub strip_symbol: String,
    /// Comment tag naming the labeled-region markers.
    pub tag: String,
    /// Symbol guarding test-only code.
    pub unit_test_symbol: String,
    /// Prefix of version-gated `#if` lines.
    pub version_guard: String,
}

impl Default for MarkerSpec {
    fn default() -> Self {
        Self {
            strip_symbol: "__STRIP__".to_string(),
            tag: "See strip.py".to_string(),
            unit_test_symbol: "__UNIT_TEST__".to_string(),
            version_guard: "#if LINUX_VERSION_CODE".to_string(),
        }
    }
}

/// The call names whose statements are removed from stripped output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSpec {
    /// Argument-less call removed wherever it stands alone.
    pub freeze: String,
    /// Trace-record call family, matched with arity suffixes 1 through 4.
    pub record: String,
    /// Test-logging calls, removed outside alternate-output mode.
    pub test_hooks: Vec<String>,
}

impl Default for CallSpec {
    fn default() -> Self {
        Self {
            freeze: "tt_freeze".to_string(),
            record: "tt_record".to_string(),
            test_hooks: vec!["UNIT_LOG".to_string(), "UNIT_HOOK".to_string()],
        }
    }
}

/// Compiled marker vocabulary.
///
/// Region markers are matched as prefixes of the raw line, so they must
/// start in column zero; call patterns are matched against the trimmed line.
#[derive(Debug, Clone)]
pub struct StripRules {
    pub(crate) labeled_ifndef: String,
    pub(crate) labeled_ifndef_alt: String,
    pub(crate) labeled_ifdef: String,
    pub(crate) labeled_ifdef_alt: String,
    pub(crate) labeled_else: String,
    pub(crate) labeled_endif: String,
    pub(crate) unit_ifdef: String,
    pub(crate) unit_ifndef: String,
    pub(crate) unit_else: String,
    pub(crate) unit_endif: String,
    pub(crate) version_if: String,
    pub(crate) freeze_statement: String,
    pub(crate) record_pattern: Regex,
    pub(crate) test_hooks: Vec<String>,
}

impl StripRules {
    /// Compile a marker vocabulary. Fails only if the record call name
    /// produces an invalid regular expression.
    pub fn compile(markers: &MarkerSpec, calls: &CallSpec) -> Result<Self, regex::Error> {
        let tag = &markers.tag;
        Ok(Self {
            labeled_ifndef: format!("#ifndef {} /* {} */", markers.strip_symbol, tag),
            labeled_ifndef_alt: format!("#ifndef {} /* {} --alt */", markers.strip_symbol, tag),
            labeled_ifdef: format!("#ifdef {} /* {} */", markers.strip_symbol, tag),
            labeled_ifdef_alt: format!("#ifdef {} /* {} --alt */", markers.strip_symbol, tag),
            labeled_else: format!("#else /* {} */", tag),
            labeled_endif: format!("#endif /* {} */", tag),
            unit_ifdef: format!("#ifdef {}", markers.unit_test_symbol),
            unit_ifndef: format!("#ifndef {}", markers.unit_test_symbol),
            unit_else: format!("#else /* {} */", markers.unit_test_symbol),
            unit_endif: format!("#endif /* {} */", markers.unit_test_symbol),
            version_if: markers.version_guard.clone(),
            freeze_statement: format!("{}();", calls.freeze),
            record_pattern: Regex::new(&format!(
                r"^(//[ \t]*)?{}[1-4]?\(",
                regex::escape(&calls.record)
            ))?,
            test_hooks: calls.test_hooks.iter().map(|h| format!("{}(", h)).collect(),
        })
    }

    pub(crate) fn is_test_hook(&self, pline: &str) -> bool {
        self.test_hooks.iter().any(|hook| pline.starts_with(hook.as_str()))
    }
}

impl Default for StripRules {
    fn default() -> Self {
        StripRules::compile(&MarkerSpec::default(), &CallSpec::default())
            .expect("default marker patterns are valid")
    }
}

/// Shared rules for the default vocabulary.
pub static DEFAULT_RULES: Lazy<StripRules> = Lazy::new(StripRules::default);
