//! Paircheck - odd key-value argument detection for logging calls.
//!
//! Paircheck flags calls into structured-logging APIs where the trailing
//! variadic key-value arguments are supplied in an odd count, leaving a key
//! with no matching value. It is a single-pass checker: run once per
//! compilation unit, report, stop.
//!
//! # Architecture
//!
//! The host analysis framework owns parsing, type checking, and callee
//! resolution; paircheck consumes the resolved per-call facts:
//!
//! - `checkers`: logger definitions, the lookup registry, and vendor-path
//!   adaptation of qualified function names
//! - `facts`: the host-supplied call facts data model (spans, signatures,
//!   resolved callees, compilation units, diagnostics)
//! - `check`: call matching, parity evaluation, and the pass driver
//! - `config`: disable lists and custom checker declarations
//! - `report`: output formatting (pretty, JSON)
//!
//! # Adding a Logger
//!
//! Built-ins cover logr, klog, and zap. Extra loggers register through
//! `PairCheck::add_checker` or a `name:packageImport:funcs` declaration;
//! see `config` for the declaration forms.

pub mod check;
pub mod checkers;
pub mod cli;
pub mod config;
pub mod facts;
pub mod report;

pub use check::{PairCheck, CATEGORY_LOGGING, ODD_ARGS_MESSAGE};
pub use checkers::{builtin_names, LoggerChecker, QualifiedName, Registry};
pub use config::{load_spec_file, CheckerSpec, Config, ConfigError};
pub use facts::{
    CallArg, CallExpr, Callee, CompilationUnit, Diagnostic, ElemType, ResolvedFunction, Signature,
    Span,
};
