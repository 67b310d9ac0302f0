//! Source file discovery.
//!
//! Walks the source root (or each configured include) and keeps the files
//! that can contain JSX, minus ignored paths.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::{TEST_FILE_PATTERNS, is_glob_pattern};

/// Result of scanning files.
pub struct ScanResult {
    pub files: HashSet<String>,
    /// Paths that could not be read while walking.
    pub skipped_count: usize,
}

/// Compiled ignore settings: literal path prefixes and glob patterns.
struct IgnoreRules {
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(base: &Path, patterns: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut prefixes = Vec::new();
        let mut globs = Vec::new();

        for p in patterns {
            if !is_glob_pattern(p) {
                prefixes.push(base.join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => globs.push(pattern),
                Err(e) if verbose => eprintln!(
                    "{} Invalid ignore pattern '{}': {}",
                    "warning:".bold().yellow(),
                    p,
                    e
                ),
                Err(_) => {}
            }
        }

        if ignore_test_files {
            globs.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, globs }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
            || self.globs.iter().any(|g| g.matches_path(path))
    }
}

/// Directories to walk: the base dir, or every include that resolves.
fn scan_roots(base: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let joined = base.join(inc);
        if is_glob_pattern(inc) {
            match glob(&joined.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
                Err(e) if verbose => eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    "warning:".bold().yellow(),
                    inc,
                    e
                ),
                Err(_) => {}
            }
        } else if joined.exists() {
            roots.push(joined);
        } else if verbose {
            eprintln!(
                "{} Include path does not exist: {}",
                "warning:".bold().yellow(),
                joined.display()
            );
        }
    }
    roots
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let base = Path::new(base_dir);
    let ignores = IgnoreRules::new(base, ignore_patterns, ignore_test_files, verbose);

    let mut files = HashSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignores.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            if entry.file_type().is_file() && is_scannable_file(entry.path()) {
                files.insert(entry.path().to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Only files that can contain JSX are worth parsing.
fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "jsx" | "js")
    )
}
