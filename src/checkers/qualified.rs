//! Qualified function names as rendered by the host type system.
//!
//! Registry entries and resolved callees both use the host's textual form:
//! `<import>.<Func>` for package-level functions and
//! `(<*>?<import>.<Receiver>).<Method>` for methods. Parsing that form once
//! into a tagged variant keeps vendor rebasing symmetric for both shapes
//! instead of re-slicing strings at every use.

use std::fmt;

/// A parsed qualified function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifiedName {
    /// Package-level function: `<import>.<name>`.
    Function { import: String, name: String },
    /// Method on a named receiver: `(<*>?<import>.<receiver>).<name>`.
    Method {
        import: String,
        receiver: String,
        pointer: bool,
        name: String,
    },
}

impl QualifiedName {
    /// Parse the host's textual form.
    ///
    /// Returns `None` for malformed entries: no `.` separator, a receiver
    /// form missing its closing parenthesis, or a receiver without an
    /// import qualifier. Registry entries are user-authorable, so malformed
    /// input is expected and handled by the caller (dropped, not an error).
    pub fn parse(s: &str) -> Option<QualifiedName> {
        let dot = s.rfind('.')?;
        let (qualifier, name) = (&s[..dot], &s[dot + 1..]);

        let Some(inner) = qualifier.strip_prefix('(') else {
            return Some(QualifiedName::Function {
                import: qualifier.to_string(),
                name: name.to_string(),
            });
        };

        let inner = inner.strip_suffix(')')?;
        let (pointer, inner) = match inner.strip_prefix('*') {
            Some(rest) => (true, rest),
            None => (false, inner),
        };
        let recv_dot = inner.rfind('.')?;

        Some(QualifiedName::Method {
            import: inner[..recv_dot].to_string(),
            receiver: inner[recv_dot + 1..].to_string(),
            pointer,
            name: name.to_string(),
        })
    }

    /// Import path of the declaring package or receiver type.
    pub fn import(&self) -> &str {
        match self {
            QualifiedName::Function { import, .. } => import,
            QualifiedName::Method { import, .. } => import,
        }
    }

    /// Rebase onto a vendored copy of `canonical`.
    ///
    /// Package-level functions always move to the vendored path (their
    /// qualifier *is* the package). Receiver forms move only when the
    /// receiver's import equals the canonical path; a foreign receiver is
    /// returned unchanged, where it stays inert for matching.
    pub fn rebase(&self, canonical: &str, vendored: &str) -> QualifiedName {
        match self {
            QualifiedName::Function { name, .. } => QualifiedName::Function {
                import: vendored.to_string(),
                name: name.clone(),
            },
            QualifiedName::Method {
                import,
                receiver,
                pointer,
                name,
            } => {
                let import = if import == canonical {
                    vendored.to_string()
                } else {
                    import.clone()
                };
                QualifiedName::Method {
                    import,
                    receiver: receiver.clone(),
                    pointer: *pointer,
                    name: name.clone(),
                }
            }
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifiedName::Function { import, name } => write!(f, "{}.{}", import, name),
            QualifiedName::Method {
                import,
                receiver,
                pointer,
                name,
            } => {
                let star = if *pointer { "*" } else { "" };
                write!(f, "({}{}.{}).{}", star, import, receiver, name)
            }
        }
    }
}
