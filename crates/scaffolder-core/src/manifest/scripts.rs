//! Rewriting of the tool's own script commands for the generated project
//!
//! Commands in the tool manifest invoke bundled runners by path, e.g.
//! `node ./bin/build.js`. A scaffolded project calls the runner by its
//! sub-command name instead, so the invocation is collapsed:
//!
//! ```text
//! <prefix> node <args> ./bin/<subcommand>.js <suffix>   =>   <prefix> <subcommand> <suffix>
//! ```
//!
//! The collapsed span starts at the word `node` and ends at the first
//! `./bin/<subcommand>.js` after it. `<subcommand>` is a single path segment.
//! Every invocation in a chained command is rewritten.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static INTERNAL_INVOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bnode\b.*?\./bin/([\w.-]+?)\.js\b").expect("internal invocation pattern")
});

/// Collapse an internal runner invocation to its sub-command name.
/// Commands without one come back unchanged.
pub fn rewrite_internal_invocation(command: &str) -> Cow<'_, str> {
    INTERNAL_INVOCATION.replace_all(command, "${1}")
}
