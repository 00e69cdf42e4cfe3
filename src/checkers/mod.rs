//! Logger checker definitions and the lookup registry.

mod builtin;
mod qualified;
mod vendor;

pub use builtin::builtin_names;
pub use qualified::QualifiedName;
pub use vendor::vendored_funcs;

use std::borrow::Cow;
use std::collections::HashSet;

/// A registered key-value logger definition.
///
/// `funcs` holds qualified function names exactly as the host type system
/// renders them. The definition is immutable once registered; vendor
/// adaptation derives new sets instead of mutating this one.
#[derive(Debug, Clone)]
pub struct LoggerChecker {
    /// Unique checker name (e.g. "klog"), used by the disable list.
    pub name: String,
    /// Canonical import path of the logging package.
    pub package_import: String,
    /// Qualified names of the key-value logging functions.
    pub funcs: HashSet<String>,
}

impl LoggerChecker {
    /// Create a definition from string slices.
    pub fn new(name: &str, package_import: &str, funcs: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            package_import: package_import.to_string(),
            funcs: funcs.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered registry of logger checkers with a disable-set.
///
/// Entries keep registration order, which lookup depends on: the first
/// active entry whose package import matches (exactly, or as a vendor
/// suffix) wins. Disabled entries are skipped at lookup time rather than
/// removed, so the definition table itself stays intact for the run.
///
/// Configure first, analyze after: lookups take `&self`, so once a
/// `Registry` is shared across compilation units nothing can mutate it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<LoggerChecker>,
    disabled: HashSet<String>,
}

impl Registry {
    /// Registry with no definitions at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in checkers (logr, klog, zap).
    pub fn with_builtins() -> Self {
        Self {
            entries: builtin::BUILTIN_CHECKERS.clone(),
            disabled: HashSet::new(),
        }
    }

    /// Register a checker definition.
    ///
    /// A name collision replaces the existing definition in place, keeping
    /// its registration position; the last registration wins.
    pub fn register(&mut self, checker: LoggerChecker) {
        match self.entries.iter_mut().find(|e| e.name == checker.name) {
            Some(existing) => *existing = checker,
            None => self.entries.push(checker),
        }
    }

    /// Mark checker names inactive for the remainder of the run.
    ///
    /// Disabling an unknown name is a no-op: there is nothing to disable.
    pub fn disable<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(names.into_iter().map(Into::into));
    }

    /// Whether a checker name is currently disabled.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.contains(name)
    }

    /// Registered checker names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Function-name set for the package at `pkg_path`, if any active
    /// checker covers it.
    ///
    /// Entries are scanned in registration order. Each entry is tried for
    /// an exact import match first, then for a `/vendor/` suffix match
    /// (which returns the vendor-adapted set). The first match of either
    /// kind wins, so an earlier entry's vendor-suffix match shadows a later
    /// entry's exact match. That ordering is part of the observable
    /// behavior and is kept even though overlapping vendor suffixes can in
    /// principle pick the wrong entry.
    pub fn funcs_for_import(&self, pkg_path: &str) -> Option<Cow<'_, HashSet<String>>> {
        for entry in &self.entries {
            if self.disabled.contains(&entry.name) {
                // Skip ignored logger checker.
                continue;
            }

            if entry.package_import == pkg_path {
                return Some(Cow::Borrowed(&entry.funcs));
            }

            let vendored_suffix = format!("/vendor/{}", entry.package_import);
            if pkg_path.ends_with(&vendored_suffix) {
                return Some(Cow::Owned(vendored_funcs(
                    &entry.funcs,
                    pkg_path,
                    &entry.package_import,
                )));
            }
        }

        None
    }
}
