//! Command-line interface for the stripper.
//!
//! Usage:
//!   strip [--alt] [--config `<file>`] `<file>`                - Strip one file to stdout
//!   strip [--alt] [--config `<file>`] `<file>`... `<destdir>` - Strip files into a directory
//!
//! With a single path argument the stripped content goes to standard
//! output. With more than one, the last argument names a destination
//! directory and every preceding file is stripped into it under its own
//! name. The exit status is nonzero if any file produced a diagnostic.

use clap::{Arg, ArgAction, Command};
use std::fs;
use std::path::Path;

use strip_config::Loader;
use strip_core::strip::report::ScanReport;
use strip_core::strip::rules::StripRules;
use strip_core::strip::scanner;

fn main() {
    let matches = Command::new("strip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Removes code not intended for the public distribution of a source tree")
        .arg_required_else_help(true)
        .arg(
            Arg::new("alt")
                .long("alt")
                .help("Produce output for building outside the public tree (keep test-only and version-gated code)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Marker configuration file (TOML), layered over the built-in defaults"),
        )
        .arg(
            Arg::new("paths")
                .help("Input files, optionally followed by a destination directory")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .get_matches();

    let alt_mode = matches.get_flag("alt");
    let rules = load_rules(matches.get_one::<String>("config").map(String::as_str));
    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .expect("paths are required")
        .collect();

    let clean = if paths.len() == 1 {
        strip_to_stdout(Path::new(paths[0]), &rules, alt_mode)
    } else {
        let (files, dest) = paths.split_at(paths.len() - 1);
        let dest_dir = Path::new(dest[0]);
        let mut clean = true;
        for file in files {
            clean &= strip_into_dir(Path::new(file), dest_dir, &rules, alt_mode);
        }
        clean
    };

    if !clean {
        std::process::exit(1);
    }
}

/// Build scanner rules from the embedded defaults plus an optional user
/// configuration file.
fn load_rules(config_path: Option<&str>) -> StripRules {
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    config.rules().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Strip a single file and print the result. Returns false if the scan
/// produced diagnostics.
fn strip_to_stdout(path: &Path, rules: &StripRules, alt_mode: bool) -> bool {
    let report = scan_file(path, rules, alt_mode);
    print!("{}", report.text());
    report_diagnostics(path, &report)
}

/// Strip one file into the destination directory under its own name.
/// Returns false if the scan produced diagnostics.
fn strip_into_dir(src: &Path, dest_dir: &Path, rules: &StripRules, alt_mode: bool) -> bool {
    let name = src.file_name().unwrap_or_else(|| {
        eprintln!("{}: not a file name", src.display());
        std::process::exit(1);
    });
    let dst = dest_dir.join(name);
    println!("Stripping {} into {}", src.display(), dst.display());
    let report = scan_file(src, rules, alt_mode);
    if let Err(e) = fs::write(&dst, report.text()) {
        eprintln!("Cannot write {}: {}", dst.display(), e);
        std::process::exit(1);
    }
    report_diagnostics(src, &report)
}

fn scan_file(path: &Path, rules: &StripRules, alt_mode: bool) -> ScanReport {
    scanner::strip_file(path, rules, alt_mode).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path.display(), e);
        std::process::exit(1);
    })
}

fn report_diagnostics(path: &Path, report: &ScanReport) -> bool {
    for diagnostic in &report.diagnostics {
        eprintln!("{}:{}", path.display(), diagnostic);
    }
    report.is_clean()
}
