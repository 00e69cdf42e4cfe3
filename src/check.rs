//! Call matching and key-value parity analysis.
//!
//! `PairCheck` drives one pass over a compilation unit's call expressions:
//! match each resolved callee against the registry, then count the trailing
//! variadic arguments. An odd count means a key without a value and yields
//! exactly one diagnostic spanning the offending arguments. Everything else
//! (unresolved callees, non-variadic signatures, unregistered functions,
//! narrow variadic element types, spread calls) is not applicable and is
//! skipped silently.

use anyhow::Result;

use crate::checkers::{LoggerChecker, Registry};
use crate::config::{Config, ConfigError};
use crate::facts::{CallExpr, Callee, CompilationUnit, Diagnostic, ElemType, ResolvedFunction, Span};

/// Category attached to every finding.
pub const CATEGORY_LOGGING: &str = "logging";

/// Message attached to every finding.
pub const ODD_ARGS_MESSAGE: &str = "odd number of arguments passed as key-value pairs for logging";

/// The key-value parity checker.
///
/// Configure (register, disable) before analysis; `run` and `check_call`
/// take `&self`, so a configured checker can be shared across compilation
/// units analyzed in parallel.
#[derive(Debug, Clone)]
pub struct PairCheck {
    registry: Registry,
}

impl PairCheck {
    /// Checker with the built-in registry (logr, klog, zap).
    pub fn new() -> Self {
        Self {
            registry: Registry::with_builtins(),
        }
    }

    /// Checker over an explicit registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// Checker built from a validated configuration: built-ins, then custom
    /// checkers, then the disable list.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut registry = Registry::with_builtins();
        for spec in &config.checkers {
            spec.validate()?;
            registry.register(spec.clone().into_checker());
        }
        registry.disable(config.disable.iter().cloned());
        Ok(Self { registry })
    }

    /// Register an additional checker definition.
    pub fn add_checker(&mut self, checker: LoggerChecker) {
        self.registry.register(checker);
    }

    /// Deactivate checker names for the remainder of the run.
    pub fn disable<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry.disable(names);
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Whether a resolved function is a registered key-value logger.
    ///
    /// Fails closed when the declaring package is unknown. Membership is
    /// exact-string on the full name; no prefix matching.
    fn is_checked_logger_func(&self, func: &ResolvedFunction) -> bool {
        let Some(pkg) = &func.package else {
            return false;
        };

        match self.registry.funcs_for_import(pkg) {
            Some(funcs) => funcs.contains(&func.full_name),
            None => false,
        }
    }

    /// Evaluate one call expression.
    ///
    /// Returns a diagnostic when the call is a registered key-value logging
    /// call whose trailing variadic segment has odd length; `None` when the
    /// call is not applicable or the count is even.
    pub fn check_call(&self, call: &CallExpr) -> Option<Diagnostic> {
        let func = call.callee.as_static()?; // function values are not supported

        let sig = &func.signature;
        if !sig.variadic {
            return None;
        }

        if !self.is_checked_logger_func(func) {
            return None;
        }

        // Spread of a precomputed sequence cannot be counted statically.
        if call.spread {
            return None;
        }

        // The final parameter must accept any value; a narrower variadic is
        // not a key-value logger call.
        if sig.variadic_elem != Some(ElemType::EmptyInterface) {
            return None;
        }

        let start_index = sig.params.checked_sub(1)?; // variadic => nonzero
        let nargs = call.args.len();
        let variadic_len = nargs.checked_sub(start_index)?;
        if variadic_len % 2 == 0 {
            return None;
        }

        let first_arg = &call.args[start_index];
        let last_arg = &call.args[nargs - 1];
        Some(Diagnostic {
            file: call.file.clone(),
            span: Span::cover(&first_arg.span, &last_arg.span),
            category: CATEGORY_LOGGING.to_string(),
            message: ODD_ARGS_MESSAGE.to_string(),
        })
    }

    /// Pass driver over a stream of call expressions.
    ///
    /// Calls whose callee has no type information are skipped: untyped code
    /// is outside the analysis domain, not an error. A failure of the host
    /// traversal itself propagates unmodified.
    pub fn run<I>(&self, calls: I) -> Result<Vec<Diagnostic>>
    where
        I: IntoIterator<Item = Result<CallExpr>>,
    {
        let mut diagnostics = Vec::new();
        for call in calls {
            let call = call?;
            if matches!(call.callee, Callee::Untyped) {
                continue;
            }
            if let Some(diagnostic) = self.check_call(&call) {
                diagnostics.push(diagnostic);
            }
        }
        Ok(diagnostics)
    }

    /// Pass driver over one materialized compilation unit.
    pub fn run_unit(&self, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for call in &unit.calls {
            if matches!(call.callee, Callee::Untyped) {
                continue;
            }
            if let Some(diagnostic) = self.check_call(call) {
                diagnostics.push(diagnostic);
            }
        }
        diagnostics
    }
}

impl Default for PairCheck {
    fn default() -> Self {
        Self::new()
    }
}
