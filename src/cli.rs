//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use selfinc::VERSION;
use selfinc::config::CheckConfig;

use crate::commands;

/// selfinc - header self-sufficiency checker
#[derive(Parser, Debug)]
#[command(
    name = "selfinc",
    version = VERSION,
    about = "Checks headers of a header-only library for self-sufficiency",
    long_about = "Walks a header tree, generates a one-include probe translation unit\n\
                  for each header, and compiles it in isolation.\n\n\
                  A header passes when it compiles with nothing else included first.\n\
                  The first failing header halts the run."
)]
pub struct Cli {
    /// Root of the header tree (default: the directory above the current one)
    pub root: Option<PathBuf>,

    /// Compiler executable to invoke
    #[arg(short, long)]
    pub compiler: Option<String>,

    /// Compiler flags, passed through verbatim (e.g. "-I.. -std=c++17");
    /// default adds the root's parent to the include search path
    #[arg(short, long, allow_hyphen_values = true)]
    pub flags: Option<String>,

    /// File name to skip (repeatable), for headers that are intentionally
    /// not self-sufficient
    #[arg(long = "exclude-file", value_name = "NAME")]
    pub excluded_files: Vec<String>,

    /// Directory to skip (repeatable), as a path relative to the root or a
    /// bare name matched at any depth
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub excluded_dirs: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Fold the parsed arguments over the default configuration
    #[must_use]
    pub fn into_config(self) -> CheckConfig {
        let mut config = match self.root {
            Some(root) => CheckConfig::for_root(root),
            None => CheckConfig::default(),
        };
        if let Some(compiler) = self.compiler {
            config.compiler = compiler;
        }
        if let Some(flags) = self.flags {
            config.flags = flags;
        }
        // Explicit exclusions replace the defaults; absent ones keep them
        if !self.excluded_files.is_empty() {
            config.excluded_files = self.excluded_files;
        }
        if !self.excluded_dirs.is_empty() {
            config.excluded_dirs = self.excluded_dirs;
        }
        config
    }
}

/// Run the CLI, reporting whether every probed header passed
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    commands::check(&cli.into_config())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_defaults() {
        let cli = Cli::parse_from([
            "selfinc",
            "include/mylib",
            "--compiler",
            "clang++",
            "--flags",
            "-Iinclude -std=c++17",
            "--exclude-file",
            "forwards.h",
            "--exclude-dir",
            "detail",
        ]);
        let config = cli.into_config();

        assert_eq!(config.root, PathBuf::from("include/mylib"));
        assert_eq!(config.compiler, "clang++");
        assert_eq!(config.flags, "-Iinclude -std=c++17");
        assert_eq!(config.excluded_files, vec!["forwards.h".to_string()]);
        assert_eq!(config.excluded_dirs, vec!["detail".to_string()]);
    }

    #[test]
    fn test_defaults_survive_when_unset() {
        let cli = Cli::parse_from(["selfinc", "include/mylib"]);
        let config = cli.into_config();

        assert_eq!(config.compiler, "g++");
        assert!(config.flags.starts_with("-I"));
        assert!(config.excluded_files.is_empty());
    }

    #[test]
    fn test_no_arguments_keep_historical_exclusions() {
        let cli = Cli::parse_from(["selfinc"]);
        let config = cli.into_config();

        assert_eq!(config.root, PathBuf::from(".."));
        let expected: Vec<String> = selfinc::config::DEFAULT_EXCLUDED_FILES
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(config.excluded_files, expected);
    }
}
