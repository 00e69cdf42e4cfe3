//! Configuration surface: disable lists and custom checker declarations.
//!
//! Custom checkers arrive three ways, all validated the same:
//! - a one-line declaration, `name:packageImport:func1,func2,...`
//! - a declaration file with one such line per entry
//! - a YAML config file carrying both a disable list and checker entries
//!
//! Malformed declarations fail loading with a descriptive error before any
//! analysis runs; they never silently register nothing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checkers::LoggerChecker;

/// Errors raised while loading checker configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid logger checker {spec:?}: {reason}")]
    Spec { spec: String, reason: &'static str },
    #[error("logger checker {name:?}: {reason}")]
    Checker { name: String, reason: &'static str },
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A custom checker declaration, from flags or a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerSpec {
    /// Unique checker name.
    pub name: String,
    /// Canonical import path of the logging package.
    pub package_import: String,
    /// Qualified function names taking the key-value variadic.
    pub funcs: Vec<String>,
}

impl CheckerSpec {
    /// Parse the one-line `name:packageImport:func1,func2` form.
    pub fn parse(spec: &str) -> Result<CheckerSpec, ConfigError> {
        if spec.matches(':').count() != 2 {
            return Err(ConfigError::Spec {
                spec: spec.to_string(),
                reason: "expected name:packageImport:funcs",
            });
        }

        let mut parts = spec.splitn(3, ':');
        // Three parts are guaranteed by the separator count above.
        let name = parts.next().unwrap_or_default();
        let package_import = parts.next().unwrap_or_default();
        let funcs = parts.next().unwrap_or_default();

        let parsed = CheckerSpec {
            name: name.to_string(),
            package_import: package_import.to_string(),
            funcs: funcs.split(',').map(|s| s.to_string()).collect(),
        };
        parsed.validate()?;
        Ok(parsed)
    }

    /// Validate a declaration regardless of how it was sourced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(self.error("empty name"));
        }
        if self.package_import.is_empty() {
            return Err(self.error("empty package import"));
        }
        if self.funcs.is_empty() {
            return Err(self.error("empty function list"));
        }
        if self.funcs.iter().any(|f| f.is_empty()) {
            return Err(self.error("empty function name"));
        }
        Ok(())
    }

    /// Convert into a registrable definition.
    pub fn into_checker(self) -> LoggerChecker {
        LoggerChecker {
            name: self.name,
            package_import: self.package_import,
            funcs: self.funcs.into_iter().collect(),
        }
    }

    fn error(&self, reason: &'static str) -> ConfigError {
        ConfigError::Checker {
            name: self.name.clone(),
            reason,
        }
    }
}

/// Load a declaration file: one `name:packageImport:funcs` line per entry.
///
/// Blank lines and `#` comments are skipped; every remaining line is
/// validated like a flag-supplied declaration.
pub fn load_spec_file<P: AsRef<Path>>(path: P) -> Result<Vec<CheckerSpec>, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut specs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        specs.push(CheckerSpec::parse(line)?);
    }
    Ok(specs)
}

/// Top-level checker configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Checker names to deactivate (`logr`, `klog`, `zap`, or custom).
    #[serde(default)]
    pub disable: Vec<String>,
    /// Custom checker declarations, registered after the built-ins.
    #[serde(default)]
    pub checkers: Vec<CheckerSpec>,
}

impl Config {
    /// Parse and validate a YAML config file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every declaration in the config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for spec in &self.checkers {
            spec.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec() {
        let spec = CheckerSpec::parse(
            "mylogger:example.com/mylogger:(example.com/mylogger.Logger).Info,example.com/mylogger.Infow",
        )
        .unwrap();
        assert_eq!(spec.name, "mylogger");
        assert_eq!(spec.package_import, "example.com/mylogger");
        assert_eq!(
            spec.funcs,
            vec![
                "(example.com/mylogger.Logger).Info".to_string(),
                "example.com/mylogger.Infow".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_spec_wrong_separator_count() {
        assert!(CheckerSpec::parse("mylogger:example.com/mylogger").is_err());
        assert!(CheckerSpec::parse("a:b:c:d").is_err());
        assert!(CheckerSpec::parse("").is_err());
    }

    #[test]
    fn test_parse_spec_empty_fields() {
        assert!(CheckerSpec::parse(":example.com/mylogger:pkg.Info").is_err());
        assert!(CheckerSpec::parse("mylogger::pkg.Info").is_err());
        assert!(CheckerSpec::parse("mylogger:example.com/mylogger:").is_err());
        // An empty entry inside the list is an empty field too.
        assert!(CheckerSpec::parse("mylogger:example.com/mylogger:pkg.Info,,pkg.Errorw").is_err());
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = CheckerSpec::parse("mylogger:example.com/mylogger:").unwrap_err();
        assert!(err.to_string().contains("empty function"));

        let err = CheckerSpec::parse("no-separators-at-all").unwrap_err();
        assert!(err.to_string().contains("name:packageImport:funcs"));
    }

    #[test]
    fn test_load_spec_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom-checkers.txt");
        std::fs::write(
            &path,
            "# project loggers\n\
             mylogger:example.com/mylogger:(example.com/mylogger.Logger).Info\n\
             \n\
             other:example.com/other:example.com/other.Logw\n",
        )
        .unwrap();

        let specs = load_spec_file(&path).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "mylogger");
        assert_eq!(specs[1].name, "other");
    }

    #[test]
    fn test_load_spec_file_propagates_bad_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom-checkers.txt");
        std::fs::write(&path, "good:example.com/good:example.com/good.Infow\nbad-line\n").unwrap();

        assert!(load_spec_file(&path).is_err());
    }

    #[test]
    fn test_parse_config_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paircheck.yaml");
        std::fs::write(
            &path,
            r#"
disable:
  - logr
checkers:
  - name: mylogger
    package_import: example.com/mylogger
    funcs:
      - (example.com/mylogger.Logger).Info
"#,
        )
        .unwrap();

        let config = Config::parse_file(&path).unwrap();
        assert_eq!(config.disable, vec!["logr".to_string()]);
        assert_eq!(config.checkers.len(), 1);
    }

    #[test]
    fn test_parse_config_yaml_rejects_empty_funcs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paircheck.yaml");
        std::fs::write(
            &path,
            r#"
checkers:
  - name: mylogger
    package_import: example.com/mylogger
    funcs: []
"#,
        )
        .unwrap();

        let err = Config::parse_file(&path).unwrap_err();
        assert!(err.to_string().contains("empty function list"));
    }
}
