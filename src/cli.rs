//! Command-line interface for paircheck.

use clap::Parser;
use std::path::PathBuf;

use crate::check::PairCheck;
use crate::config::{self, CheckerSpec, Config};
use crate::facts::CompilationUnit;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Checks key-value pairs for common logger libraries (logr, klog, zap).
///
/// Paircheck consumes call-facts files exported by a host analysis driver
/// (one JSON document per compilation unit) and reports calls to registered
/// key-value logging functions whose trailing arguments have an odd count.
#[derive(Parser)]
#[command(name = "paircheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Call-facts files, one JSON document per compilation unit
    #[arg(required = true)]
    pub facts: Vec<PathBuf>,

    /// Comma-separated list of disabled logger checkers (logr,klog,zap or custom)
    #[arg(long, value_delimiter = ',')]
    pub disable: Vec<String>,

    /// Add an extra logger checker, format: name:packageImport:funcs,
    /// example: mylogger:example.com/mylogger:(example.com/mylogger.Logger).Info
    #[arg(long = "logger")]
    pub loggers: Vec<String>,

    /// File with one extra logger checker declaration per line
    #[arg(long)]
    pub pattern_file: Option<PathBuf>,

    /// YAML configuration file (disable list and custom checkers)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Assemble the effective configuration from the flag surface.
///
/// Flag-supplied entries extend whatever the config file declares;
/// any malformed declaration aborts before analysis.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::parse_file(path)?,
        None => Config::default(),
    };

    config.disable.extend(cli.disable.iter().cloned());

    for spec in &cli.loggers {
        config.checkers.push(CheckerSpec::parse(spec)?);
    }

    if let Some(path) = &cli.pattern_file {
        config.checkers.extend(config::load_spec_file(path)?);
    }

    Ok(config)
}

/// Run the checker over the given facts files.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    // Validate format
    if cli.format != "pretty" && cli.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            cli.format
        );
        return Ok(EXIT_ERROR);
    }

    // Configuration errors are fatal before any analysis runs
    let config = match build_config(cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    let check = PairCheck::from_config(&config)?;

    // Analyze each compilation unit; a facts file that cannot be read or
    // parsed is a host failure, not a finding
    let mut diagnostics = Vec::new();
    let mut units = 0;
    for path in &cli.facts {
        let unit = CompilationUnit::parse_file(path)
            .map_err(|e| anyhow::anyhow!("cannot load facts file {}: {}", path.display(), e))?;
        diagnostics.extend(check.run_unit(&unit));
        units += 1;
    }

    // Output results
    match cli.format.as_str() {
        "json" => report::write_json(units, &diagnostics)?,
        _ => report::write_pretty(units, &diagnostics),
    }

    if diagnostics.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FINDINGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli {
            facts: vec![PathBuf::from("facts.json")],
            disable: Vec::new(),
            loggers: Vec::new(),
            pattern_file: None,
            config: None,
            format: "pretty".to_string(),
        }
    }

    #[test]
    fn test_build_config_from_flags() {
        let mut cli = base_cli();
        cli.disable = vec!["logr".to_string(), "zap".to_string()];
        cli.loggers =
            vec!["mylogger:example.com/mylogger:(example.com/mylogger.Logger).Info".to_string()];

        let config = build_config(&cli).unwrap();
        assert_eq!(config.disable, vec!["logr".to_string(), "zap".to_string()]);
        assert_eq!(config.checkers.len(), 1);
        assert_eq!(config.checkers[0].name, "mylogger");
    }

    #[test]
    fn test_build_config_rejects_bad_logger_flag() {
        let mut cli = base_cli();
        cli.loggers = vec!["not-a-declaration".to_string()];
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_build_config_merges_pattern_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.txt");
        std::fs::write(&path, "filelogger:example.com/file:example.com/file.Infow\n").unwrap();

        let mut cli = base_cli();
        cli.loggers = vec!["flaglogger:example.com/flag:example.com/flag.Infow".to_string()];
        cli.pattern_file = Some(path);

        let config = build_config(&cli).unwrap();
        let names: Vec<_> = config.checkers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["flaglogger", "filelogger"]);
    }
}
