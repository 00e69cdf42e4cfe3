//! Rewriting registered function names onto vendored import paths.
//!
//! When a package is vendored, the same logical package is reachable under
//! a second import path (`<module>/vendor/<canonical>`), and the host type
//! system renders qualified names with that vendored path. Registry entries
//! are declared against the canonical path, so matching a vendored call
//! requires deriving a rewritten function-name set.

use std::collections::HashSet;

use super::qualified::QualifiedName;

/// Derive the function-name set for a vendored copy of a package.
///
/// Pure function of its inputs: every occurrence of `canonical_import`
/// inside each qualified name is replaced by `vendored_import`, preserving
/// the receiver shape and pointer marker. Malformed entries are dropped
/// rather than failing. The result is recomputed per observed vendored
/// path, since the vendored prefix varies per dependent module.
pub fn vendored_funcs(
    funcs: &HashSet<String>,
    vendored_import: &str,
    canonical_import: &str,
) -> HashSet<String> {
    let mut adapted = HashSet::with_capacity(funcs.len());
    for name in funcs {
        let Some(parsed) = QualifiedName::parse(name) else {
            continue; // invalid pattern
        };
        adapted.insert(parsed.rebase(canonical_import, vendored_import).to_string());
    }
    adapted
}
