use std::{
    cell::OnceCell,
    collections::{HashMap, HashSet},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::{iter::Either, prelude::*};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, load_config},
    core::{
        file_scanner::scan_files,
        parsers::jsx::{ParsedJSX, parse_jsx_source},
    },
    issues::ParseErrorIssue,
};

/// Everything one parse pass over the file list produced.
#[derive(Default)]
struct ParsedSources {
    files: HashMap<String, ParsedJSX>,
    errors: Vec<ParseErrorIssue>,
}

/// State for one `check` run: the files the config selects and (once
/// requested) their parsed ASTs.
///
/// `--source-root` picks the directory; the config file found from there
/// decides what is scanned, falling back to `Config::default`.
pub struct CheckContext {
    pub files: HashSet<String>,
    pub verbose: bool,
    sources: OnceCell<ParsedSources>,
}

impl CheckContext {
    /// Resolve the config and collect source files. Nothing is parsed yet.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let root_str = root
            .to_str()
            .with_context(|| format!("Source root is not valid UTF-8: {:?}", root))?;

        let loaded = load_config(&root)?;
        if verbose {
            if let Some(config_path) = &loaded.path {
                eprintln!("Using config: {}", config_path.display());
            } else {
                eprintln!("Note: No {} found, using default configuration", CONFIG_FILE_NAME);
            }
        }
        let config = loaded.config;

        let scanned = scan_files(
            root_str,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );
        if scanned.skipped_count > 0 {
            let hint = if verbose { "" } else { " (use -v for details)" };
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scanned.skipped_count,
                hint
            );
        }

        Ok(Self {
            files: scanned.files,
            verbose,
            sources: OnceCell::new(),
        })
    }

    fn sources(&self) -> &ParsedSources {
        self.sources.get_or_init(|| {
            let verbose = self.verbose;
            // One SourceMap per file keeps the workers independent.
            let (files, mut errors): (HashMap<_, _>, Vec<_>) =
                self.files.par_iter().partition_map(|file_path| {
                    let result = std::fs::read_to_string(file_path)
                        .with_context(|| format!("Failed to read file: {}", file_path))
                        .and_then(|code| {
                            parse_jsx_source(code, file_path, Arc::new(Default::default()))
                        });
                    match result {
                        Ok(parsed) => Either::Left((file_path.clone(), parsed)),
                        Err(e) => {
                            if verbose {
                                eprintln!("{} {} - {}", "warning:".bold().yellow(), file_path, e);
                            }
                            Either::Right(ParseErrorIssue {
                                file_path: file_path.clone(),
                                error: e.to_string(),
                            })
                        }
                    }
                });
            errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));
            ParsedSources { files, errors }
        })
    }

    /// ASTs of every file that parsed, keyed by path. Parsing runs on the
    /// rayon pool the first time either accessor is called.
    pub fn parsed_files(&self) -> &HashMap<String, ParsedJSX> {
        &self.sources().files
    }

    /// Files that could not be read or parsed.
    pub fn parsed_files_errors(&self) -> &Vec<ParseErrorIssue> {
        &self.sources().errors
    }
}
