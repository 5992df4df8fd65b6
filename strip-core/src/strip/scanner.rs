//! The stripping state machine.
//!
//! A [`Scanner`] consumes one file line by line. Each line runs through an
//! ordered sequence of checks; the first check that claims the line wins,
//! and unmatched lines fall through to default retention. The order is
//! significant: labeled regions swallow their body before any call-removal
//! rule sees it, while trace and test-hook calls are removed even inside
//! the dropped branch of a test-only or version-gated region, so that their
//! enclosing-block cleanup still runs.

use std::fs;
use std::io;
use std::path::Path;

use crate::strip::buffer::OutputBuffer;
use crate::strip::report::{Diagnostic, DiagnosticKind, ScanReport};
use crate::strip::rules::StripRules;
use crate::strip::text;

/// Comment content that is always retained, wherever it appears.
const LICENSE_TAG: &str = "SPDX-License";

/// Statement count used while no collapsible block is being tracked; large
/// enough that such a block never looks like a single-statement one.
const NO_BLOCK: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionKind {
    /// Regions delimited by this tool's own named markers.
    Labeled,
    /// Test-only regions.
    UnitTest,
    /// Version-gated regions, delimited by bare `#else`/`#endif`.
    Version,
}

/// Whether the current branch of a region retains or drops its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Drop,
    Keep,
}

#[derive(Debug, Clone, Copy)]
struct Region {
    kind: RegionKind,
    branch: Branch,
}

/// Per-file scan state. Create one scanner per input file.
pub struct Scanner<'r> {
    rules: &'r StripRules,
    alt_mode: bool,

    /// The current line begins inside an unterminated `/* ... */` comment.
    in_comment: bool,
    /// Dropping continuation lines of a removed statement until one ends
    /// in `;`.
    skip_statement: bool,
    /// Open conditional regions, outermost first. Regions may nest while
    /// the enclosing one is in its Keep branch; a Drop branch swallows
    /// everything except its own markers.
    regions: Vec<Region>,
    out: OutputBuffer,
    /// Index in `out` of the most recent line ending in `{`. Valid only
    /// while no nested block has opened inside it.
    open_brace: Option<usize>,
    /// Statement-terminating lines seen since `open_brace` was set.
    statements_in_block: u32,
    /// A line was deleted inside the current block; re-examine the braces
    /// when it closes.
    check_braces: bool,
    /// The line before a deleted region was blank, so a duplicate blank
    /// line produced by the deletion should be dropped too.
    suppress_blank: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'r> Scanner<'r> {
    pub fn new(rules: &'r StripRules, alt_mode: bool) -> Self {
        Self {
            rules,
            alt_mode,
            in_comment: false,
            skip_statement: false,
            regions: Vec::new(),
            out: OutputBuffer::new(),
            open_brace: None,
            statements_in_block: NO_BLOCK,
            check_braces: false,
            suppress_blank: false,
            diagnostics: Vec::new(),
        }
    }

    /// Run the scanner over a whole source text.
    pub fn scan(mut self, source: &str) -> ScanReport {
        for (index, line) in source.split_inclusive('\n').enumerate() {
            self.process_line(index + 1, line);
        }
        ScanReport {
            lines: self.out.into_lines(),
            diagnostics: self.diagnostics,
        }
    }

    fn process_line(&mut self, line_num: usize, raw: &str) {
        let pline = raw.trim();

        // `//` lines only ever comment out debugging code; license
        // identifiers must survive no matter where they appear.
        if pline.starts_with("//") && !pline.contains(LICENSE_TAG) {
            return;
        }

        // The part of the line outside any /* ... */ comment decides whether
        // the line terminates a statement. Tracked for every line, including
        // ones a later check drops.
        let (non_comment, still_open) = text::split_comment(pline, self.in_comment);
        self.in_comment = still_open;

        if self.handle_labeled_markers(line_num, raw) {
            return;
        }

        if pline == self.rules.freeze_statement {
            self.note_deletion_in_block();
            return;
        }

        if self.skip_statement {
            if pline.ends_with(';') {
                self.skip_statement = false;
            }
            self.check_braces = true;
            return;
        }

        if let Some(caps) = self.rules.record_pattern.captures(pline) {
            // A record call commented out with `//` was never a statement,
            // so it cannot leave an enclosing construct without a body.
            if caps.get(1).is_none() {
                self.out.remove_enclosing_header(text::leading_space(raw));
            }
            if !pline.ends_with(';') {
                self.skip_statement = true;
            }
            self.note_deletion_in_block();
            return;
        }

        if !self.alt_mode && self.rules.is_test_hook(pline) {
            if !pline.ends_with(';') {
                self.skip_statement = true;
            }
            self.note_deletion_in_block();
            return;
        }

        if self.handle_unit_markers(line_num, raw) {
            return;
        }
        if self.handle_version_markers(raw) {
            return;
        }

        if pline.is_empty() {
            let whitespace_only = !raw.is_empty() && raw.chars().all(char::is_whitespace);
            if !whitespace_only || !self.suppress_blank {
                self.out.push(raw);
            }
            self.suppress_blank = false;
            return;
        }
        self.suppress_blank = false;

        let mut line = raw.to_string();
        if pline.starts_with('}') && self.check_braces {
            self.check_braces = false;
            if let Some(open) = self.open_brace.take() {
                if self.statements_in_block == 0 {
                    self.diagnostics
                        .push(Diagnostic::new(line_num, DiagnosticKind::EmptyBlock));
                }
                if self.statements_in_block == 1 {
                    self.out.unbrace_open(open);
                    line = text::remove_close(&line);
                    if line.trim().is_empty() {
                        return;
                    }
                }
            }
        }
        if pline.ends_with('{') && !line.starts_with('{') {
            self.statements_in_block = 0;
            self.open_brace = Some(self.out.len());
        }
        if non_comment.ends_with(';') {
            self.statements_in_block = self.statements_in_block.saturating_add(1);
        }
        self.out.push(line);
    }

    /// Regions delimited by this tool's own named markers. Returns true if
    /// the line was consumed.
    fn handle_labeled_markers(&mut self, line_num: usize, raw: &str) -> bool {
        let rules = self.rules;
        match self.regions.last().copied() {
            Some(top) if top.kind == RegionKind::Labeled => {
                if raw.starts_with(&rules.labeled_endif) {
                    self.regions.pop();
                    self.check_braces = false;
                    return true;
                }
                if raw.starts_with(&rules.labeled_else) {
                    self.keep_top_branch();
                    return true;
                }
                if top.branch == Branch::Drop {
                    return true;
                }
            }
            Some(_)
                if raw.starts_with(&rules.labeled_endif)
                    || raw.starts_with(&rules.labeled_else) =>
            {
                // Closing a region that is not the innermost open one:
                // reject rather than guess which region was meant.
                self.diagnostics.push(Diagnostic::new(
                    line_num,
                    DiagnosticKind::MismatchedRegionMarker,
                ));
                return true;
            }
            _ => {}
        }

        if raw.starts_with(&rules.labeled_ifndef)
            || (!self.alt_mode && raw.starts_with(&rules.labeled_ifndef_alt))
        {
            self.open_region(RegionKind::Labeled, Branch::Drop);
            self.check_braces = false;
            return true;
        }
        if raw.starts_with(&rules.labeled_ifdef)
            || (!self.alt_mode && raw.starts_with(&rules.labeled_ifdef_alt))
        {
            // Only the marker lines vanish; drop a blank line directly above
            // so the kept body does not sit under a doubled gap.
            self.out.pop_blank_tail();
            self.regions.push(Region {
                kind: RegionKind::Labeled,
                branch: Branch::Keep,
            });
            self.check_braces = false;
            return true;
        }
        false
    }

    /// Test-only conditional regions. Ordinary text in alternate-output
    /// mode.
    fn handle_unit_markers(&mut self, line_num: usize, raw: &str) -> bool {
        if self.alt_mode {
            return false;
        }
        let rules = self.rules;
        match self.regions.last().copied() {
            Some(top) if top.kind == RegionKind::UnitTest => {
                if raw.starts_with(&rules.unit_endif) {
                    self.regions.pop();
                    return true;
                }
                if raw.starts_with(&rules.unit_else) {
                    self.keep_top_branch();
                    return true;
                }
                if top.branch == Branch::Drop {
                    return true;
                }
            }
            Some(_)
                if raw.starts_with(&rules.unit_endif) || raw.starts_with(&rules.unit_else) =>
            {
                self.diagnostics.push(Diagnostic::new(
                    line_num,
                    DiagnosticKind::MismatchedRegionMarker,
                ));
                return true;
            }
            _ => {}
        }
        if raw.starts_with(&rules.unit_ifdef) {
            self.open_region(RegionKind::UnitTest, Branch::Drop);
            return true;
        }
        if raw.starts_with(&rules.unit_ifndef) {
            self.open_region(RegionKind::UnitTest, Branch::Keep);
            return true;
        }
        false
    }

    /// Version-gated regions. Their end markers are the bare preprocessor
    /// keywords, so they are only meaningful while a version region is
    /// innermost; anywhere else a bare `#else`/`#endif` is ordinary text.
    fn handle_version_markers(&mut self, raw: &str) -> bool {
        if self.alt_mode {
            return false;
        }
        match self.regions.last().copied() {
            Some(top) if top.kind == RegionKind::Version => {
                if raw.starts_with("#endif") {
                    self.regions.pop();
                    return true;
                }
                if raw.starts_with("#else") {
                    self.keep_top_branch();
                    return true;
                }
                if top.branch == Branch::Drop {
                    return true;
                }
            }
            _ => {}
        }
        if raw.starts_with(&self.rules.version_if) {
            self.open_region(RegionKind::Version, Branch::Drop);
            return true;
        }
        false
    }

    fn open_region(&mut self, kind: RegionKind, branch: Branch) {
        if self.out.last_is_blank() {
            self.suppress_blank = true;
        }
        self.regions.push(Region { kind, branch });
    }

    fn keep_top_branch(&mut self) {
        if let Some(top) = self.regions.last_mut() {
            top.branch = Branch::Keep;
        }
    }

    /// Common bookkeeping for a statement deleted inside the current block.
    fn note_deletion_in_block(&mut self) {
        if self.out.last_is_blank() {
            self.suppress_blank = true;
        }
        self.check_braces = true;
    }
}

/// Strip a whole source text with the given rules.
pub fn strip_source(source: &str, rules: &StripRules, alt_mode: bool) -> ScanReport {
    Scanner::new(rules, alt_mode).scan(source)
}

/// Read `path` and strip its contents.
pub fn strip_file(path: &Path, rules: &StripRules, alt_mode: bool) -> io::Result<ScanReport> {
    let source = fs::read_to_string(path)?;
    Ok(strip_source(&source, rules, alt_mode))
}
