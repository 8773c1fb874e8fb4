//! Exclusion rules for template copying.
//! Decides whether a template entry is left out of the generated project,
//! matching on the entry's basename only.

use crate::constants::IGNORED_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

/// A single basename rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Case-sensitive equality with the basename
    Exact(String),
    /// `*` matches any run of characters, everything else is literal
    Wildcard(String),
}

impl ExclusionRule {
    /// Classifies a raw pattern: anything containing `*` is a wildcard.
    pub fn parse<S: Into<String>>(pattern: S) -> Self {
        let pattern = pattern.into();
        if pattern.contains('*') {
            Self::Wildcard(pattern)
        } else {
            Self::Exact(pattern)
        }
    }
}

/// Wraps glob metacharacters in brackets so they match themselves.
fn push_literal(glob: &mut String, c: char) {
    if matches!(c, '?' | '[' | ']' | '{' | '}') {
        glob.push('[');
        glob.push(c);
        glob.push(']');
    } else {
        glob.push(c);
    }
}

/// Converts a wildcard rule into a glob where only `*` is special.
///
/// Repeated stars are collapsed since `**` has a different meaning in globs.
fn to_glob(pattern: &str) -> String {
    let mut glob = String::with_capacity(pattern.len());
    let mut previous_star = false;

    for c in pattern.chars() {
        if c == '*' {
            if !previous_star {
                glob.push('*');
            }
            previous_star = true;
        } else {
            push_literal(&mut glob, c);
            previous_star = false;
        }
    }
    glob
}

/// Compiled set of exclusion rules.
///
/// Rule order is irrelevant: an entry is excluded as soon as any rule matches.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    exact: HashSet<OsString>,
    wildcards: GlobSet,
}

impl ExclusionRules {
    /// Compiles a rule set from raw patterns.
    ///
    /// # Errors
    /// * `Error::PatternError` if a wildcard cannot be compiled
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_rules(patterns.into_iter().map(ExclusionRule::parse))
    }

    /// Compiles an already classified rule set.
    pub fn from_rules<I>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = ExclusionRule>,
    {
        let mut exact = HashSet::new();
        let mut builder = GlobSetBuilder::new();

        for rule in rules {
            match rule {
                ExclusionRule::Exact(name) => {
                    exact.insert(OsString::from(name));
                }
                ExclusionRule::Wildcard(pattern) => {
                    let glob = Glob::new(&to_glob(&pattern)).map_err(|e| {
                        Error::PatternError(format!("invalid pattern '{pattern}': {e}"))
                    })?;
                    builder.add(glob);
                }
            }
        }

        let wildcards = builder.build().map_err(|e| Error::PatternError(e.to_string()))?;

        Ok(Self { exact, wildcards })
    }

    /// The fixed rule set for build artifacts, VCS metadata and OS clutter.
    pub fn with_defaults() -> Result<Self> {
        Self::from_patterns(IGNORED_PATTERNS)
    }

    /// Returns `false` if any rule matches `basename`.
    pub fn should_include<S: AsRef<OsStr>>(&self, basename: S) -> bool {
        let basename = basename.as_ref();
        if self.exact.contains(basename) || self.wildcards.is_match(basename) {
            debug!("Excluding '{}'", basename.to_string_lossy());
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_glob_escapes_literals() {
        assert_eq!(to_glob("*.log"), "*.log");
        assert_eq!(to_glob("a**b"), "a*b");
        assert_eq!(to_glob("what?*"), "what[?]*");
        assert_eq!(to_glob("{a,b}*"), "[{]a,b[}]*");
    }

    #[test]
    fn test_parse_classifies_rules() {
        assert_eq!(ExclusionRule::parse(".git"), ExclusionRule::Exact(".git".to_string()));
        assert_eq!(
            ExclusionRule::parse("*.log"),
            ExclusionRule::Wildcard("*.log".to_string())
        );
    }
}
