//! Output formatting for paircheck diagnostics.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::facts::Diagnostic;

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub units: usize,
    pub diagnostics: Vec<JsonDiagnostic>,
}

/// JSON diagnostic structure.
#[derive(Serialize, Deserialize)]
pub struct JsonDiagnostic {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub category: String,
    pub message: String,
}

impl JsonDiagnostic {
    fn from_diagnostic(d: &Diagnostic) -> JsonDiagnostic {
        JsonDiagnostic {
            file: d.file.clone(),
            line: d.span.start_line,
            column: d.span.start_col,
            end_line: d.span.end_line,
            end_column: d.span.end_col,
            category: d.category.clone(),
            message: d.message.clone(),
        }
    }
}

/// Build the JSON report structure.
pub fn json_report(units: usize, diagnostics: &[Diagnostic]) -> JsonReport {
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        units,
        diagnostics: diagnostics
            .iter()
            .map(JsonDiagnostic::from_diagnostic)
            .collect(),
    }
}

/// Write results in JSON format.
pub fn write_json(units: usize, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
    let report = json_report(units, diagnostics);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write results in pretty (human-readable) format.
pub fn write_pretty(units: usize, diagnostics: &[Diagnostic]) {
    // Header
    println!();
    print!("  ");
    print!("{}", "paircheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let plural = if units != 1 { "s" } else { "" };
    println!(
        "  {}{} compilation unit{}",
        "Checked: ".dimmed(),
        units,
        plural
    );
    println!();

    if diagnostics.is_empty() {
        println!("  {}", "✓ no findings".green());
        println!();
        return;
    }

    println!("  {} ({}):", "Findings".bold(), diagnostics.len());
    println!();

    for d in diagnostics {
        print!("    {} ", d.category.dimmed());
        print!("{}", d.file.blue());
        println!(
            "{}",
            format!(":{}:{}", d.span.start_line, d.span.start_col).dimmed()
        );
        println!("            {}", d.message);
        println!();
    }

    let plural = if diagnostics.len() != 1 { "s" } else { "" };
    println!(
        "  {}",
        format!("✗ {} finding{}", diagnostics.len(), plural).red()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::Span;

    fn diagnostic() -> Diagnostic {
        Diagnostic {
            file: "pkg/server/server.go".to_string(),
            span: Span {
                start_byte: 120,
                end_byte: 156,
                start_line: 14,
                start_col: 12,
                end_line: 14,
                end_col: 48,
            },
            category: "logging".to_string(),
            message: "odd number of arguments passed as key-value pairs for logging".to_string(),
        }
    }

    #[test]
    fn test_json_report_shape() {
        let report = json_report(2, &[diagnostic()]);
        assert_eq!(report.units, 2);
        assert_eq!(report.diagnostics.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["diagnostics"][0]["file"], "pkg/server/server.go");
        assert_eq!(json["diagnostics"][0]["line"], 14);
        assert_eq!(json["diagnostics"][0]["column"], 12);
        assert_eq!(json["diagnostics"][0]["category"], "logging");
    }

    #[test]
    fn test_json_report_empty() {
        let report = json_report(1, &[]);
        assert!(report.diagnostics.is_empty());
    }
}
