//! Path pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile descriptor `url` strings into matchable patterns
//! - Exact equality for single-file routes
//! - Prefix match for directory routes
//! - Wildcard (`.*`) match for script routes that declare one
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Wildcards are hand-compiled into literal pieces, no regex engine
//! - Deterministic: the same path always yields the same answer

/// A compiled path matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches the path exactly.
    Exact(String),
    /// Matches any path beginning with the prefix.
    Prefix(String),
    /// Matches literal pieces interleaved with `.*` wildcards.
    Wildcard(WildcardPattern),
}

impl PathPattern {
    /// Returns true if the path satisfies this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path == expected,
            Self::Prefix(prefix) => path.starts_with(prefix),
            Self::Wildcard(pattern) => pattern.matches(path),
        }
    }

    /// Returns true if a url string contains a wildcard marker.
    pub fn has_wildcard(url: &str) -> bool {
        url.contains(".*")
    }
}

/// A url split on `.*` markers. Matching walks the literal pieces in
/// order: the first is anchored at the start of the path, the last at the
/// end unless the pattern is open-ended (trailing `.*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    literals: Vec<String>,
    open_ended: bool,
}

impl WildcardPattern {
    /// Compile a url containing one or more `.*` markers.
    pub fn compile(url: &str) -> Self {
        Self {
            literals: url.split(".*").map(str::to_string).collect(),
            open_ended: url.ends_with(".*"),
        }
    }

    /// Returns true if the path satisfies the pattern. Each wildcard may
    /// consume zero or more characters.
    pub fn matches(&self, path: &str) -> bool {
        let Some((first, rest_literals)) = self.literals.split_first() else {
            return path.is_empty();
        };
        let Some(mut rest) = path.strip_prefix(first.as_str()) else {
            return false;
        };
        let Some((last, middle)) = rest_literals.split_last() else {
            // No wildcard at all: the single literal must consume everything.
            return rest.is_empty();
        };
        for literal in middle {
            match rest.find(literal.as_str()) {
                Some(index) => rest = &rest[index + literal.len()..],
                None => return false,
            }
        }
        if self.open_ended {
            // The trailing `.*` leaves an empty final piece; anything left
            // in the path is accepted.
            true
        } else {
            rest.ends_with(last.as_str())
        }
    }
}
