//! Call-site facts supplied by the host analysis framework.
//!
//! The host framework owns parsing, type checking, and call-to-declaration
//! resolution. What the checker consumes is the per-call residue of that
//! work: the resolved callee (if any), its static signature, and the
//! argument expressions with their source positions. All types here derive
//! serde so a driver can export facts across a process boundary (one JSON
//! document per compilation unit) and tests can construct them directly.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Source location span with byte offsets and line/column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start_byte: usize,
    /// End byte offset (0-indexed, exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// Start column (1-indexed).
    pub start_col: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// End column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Span from the start of `first` to the end of `last`.
    pub fn cover(first: &Span, last: &Span) -> Span {
        Span {
            start_byte: first.start_byte,
            end_byte: last.end_byte,
            start_line: first.start_line,
            start_col: first.start_col,
            end_line: last.end_line,
            end_col: last.end_col,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Element type of a variadic parameter, as resolved by the host type
/// system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElemType {
    /// The empty interface: accepts any value.
    EmptyInterface,
    /// Any other element type, carried by its display name (e.g. "error").
    Named(String),
}

/// Static signature of a resolved function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Number of formal parameters, counting the variadic slot.
    pub params: usize,
    /// Whether the final parameter is variadic.
    pub variadic: bool,
    /// Element type of the final parameter when variadic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variadic_elem: Option<ElemType>,
}

/// A callee the host resolved to a concrete function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFunction {
    /// Import path of the declaring package, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Fully qualified name exactly as the host type system renders it,
    /// e.g. `k8s.io/klog/v2.InfoS` or `(*go.uber.org/zap.SugaredLogger).Infow`.
    pub full_name: String,
    /// The function's static signature.
    pub signature: Signature,
}

/// What the host knows about a call's callee expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Callee {
    /// Statically known function or method declaration.
    Static(ResolvedFunction),
    /// Call through a function-typed value; there is no declaration to match.
    Dynamic,
    /// The host has no type information for the callee expression.
    Untyped,
}

impl Callee {
    /// The resolved declaration, if the callee is statically known.
    pub fn as_static(&self) -> Option<&ResolvedFunction> {
        match self {
            Callee::Static(func) => Some(func),
            _ => None,
        }
    }
}

/// One actual argument expression at a call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallArg {
    /// Source span of the argument expression.
    pub span: Span,
}

/// One call expression, as resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpr {
    /// Source file containing the call.
    pub file: String,
    /// The callee resolution.
    pub callee: Callee,
    /// Literal argument expressions at the call site, in order.
    #[serde(default)]
    pub args: Vec<CallArg>,
    /// Whether the call spreads a precomputed sequence into the variadic
    /// slot instead of passing individual arguments.
    #[serde(default)]
    pub spread: bool,
}

/// All call expressions of one compilation unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Package path or other unit label, for reporting.
    pub name: String,
    /// Every call expression in the unit's syntax tree, in traversal order.
    #[serde(default)]
    pub calls: Vec<CallExpr>,
}

impl CompilationUnit {
    /// Parse a facts file (one JSON document per compilation unit).
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let unit: CompilationUnit = serde_json::from_str(&content)?;
        Ok(unit)
    }
}

/// A single finding. Produced by the checker, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Source file the finding points into.
    pub file: String,
    /// Span of the offending arguments.
    pub span: Span,
    /// Finding category.
    pub category: String,
    /// Human-readable message.
    pub message: String,
}
