//! `.wrapcheckrc.json` loading.
//!
//! The config only decides which files are scanned. Detection itself takes
//! no options.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".wrapcheckrc.json";

/// Skipped when `ignoreTestFiles` is on.
pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

const DEFAULT_IGNORES: &[&str] = &[
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directories (or directory globs) to scan. Empty means the whole root.
    pub includes: Vec<String>,
    /// Paths to skip: literal prefixes or globs.
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: DEFAULT_IGNORES.iter().map(|p| p.to_string()).collect(),
            ignore_test_files: true,
        }
    }
}

/// Patterns without `*` or `?` are literal paths, so `app/[locale]` needs no
/// escaping.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

impl Config {
    /// Reject glob patterns the `glob` crate cannot compile.
    pub fn validate(&self) -> Result<()> {
        let ignores = self.ignores.iter().map(|p| ("ignores", p));
        let includes = self
            .includes
            .iter()
            .filter(|p| is_glob_pattern(p))
            .map(|p| ("includes", p));

        for (field, pattern) in ignores.chain(includes) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, pattern))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

/// Look for the config file from `start_dir` upwards, stopping at the
/// repository root (a directory containing `.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    // Relative roots like "." cannot be walked upwards.
    let start = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Loaded configuration and where it came from.
pub struct ConfigLoadResult {
    pub config: Config,
    /// `None` when no config file was found and defaults are used.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(ConfigLoadResult {
        config,
        path: Some(path),
    })
}
