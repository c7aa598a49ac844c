//! Origin validation for inbound messages.
//!
//! The sender origin is checked before the payload is even looked at.
//! Origins compare exactly (scheme://host[:port]) after normalization;
//! a single `"*"` entry opts out of enforcement. An empty allowlist is
//! valid and rejects everything.

// =============================================================================
// ORIGIN POLICY
// =============================================================================

/// Which sender origins a synchronizer accepts messages from.
#[derive(Debug, Clone, PartialEq)]
pub enum OriginPolicy {
    /// Accept messages from any origin. Config value `"*"`.
    AllowAny,
    /// Accept only the listed origins, compared exactly after
    /// normalization.
    Allowlist(Vec<String>),
}

impl OriginPolicy {
    /// Build a policy from config entries. A `"*"` entry anywhere in the
    /// list means allow-any; otherwise entries are normalized and matched
    /// exactly.
    pub fn from_entries(entries: &[String]) -> Self {
        if entries.iter().any(|e| e.trim() == "*") {
            return Self::AllowAny;
        }
        Self::Allowlist(entries.iter().map(|e| normalize_origin(e)).collect())
    }

    /// Check whether a sender origin passes this policy.
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            Self::AllowAny => true,
            Self::Allowlist(allowed) => {
                let origin = normalize_origin(origin);
                allowed.iter().any(|a| *a == origin)
            }
        }
    }
}

/// Normalize an origin for comparison: trim whitespace and trailing
/// slashes, lowercase. Origins carry no path, so lowercasing is safe.
fn normalize_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_ascii_lowercase()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn allowlist(entries: &[&str]) -> OriginPolicy {
        OriginPolicy::from_entries(&entries.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    // -- Allowed origins --

    #[test]
    fn allows_listed_origin() {
        let policy = allowlist(&["https://docs.example.org"]);
        assert!(policy.allows("https://docs.example.org"));
    }

    #[test]
    fn allows_any_with_wildcard() {
        let policy = allowlist(&["*"]);
        assert_eq!(policy, OriginPolicy::AllowAny);
        assert!(policy.allows("https://anywhere.example"));
        assert!(policy.allows("null"));
    }

    #[test]
    fn wildcard_wins_even_when_mixed_with_entries() {
        let policy = allowlist(&["https://docs.example.org", "*"]);
        assert!(policy.allows("https://evil.example"));
    }

    #[test]
    fn allows_normalized_forms() {
        let policy = allowlist(&["https://Docs.Example.org/"]);
        assert!(policy.allows("https://docs.example.org"));
        assert!(policy.allows("  https://docs.example.org/ "));
    }

    #[test]
    fn allows_explicit_null_origin() {
        // Sandboxed frames report the opaque origin "null"; it must be
        // listed explicitly to pass.
        let policy = allowlist(&["null"]);
        assert!(policy.allows("null"));

        let strict = allowlist(&["https://docs.example.org"]);
        assert!(!strict.allows("null"));
    }

    // -- Blocked origins --

    #[test]
    fn blocks_unlisted_origin() {
        let policy = allowlist(&["https://docs.example.org"]);
        assert!(!policy.allows("https://evil.example"));
        assert!(!policy.allows("http://docs.example.org"));
        assert!(!policy.allows("https://docs.example.org.evil.example"));
    }

    #[test]
    fn blocks_prefix_tricks() {
        // Exact match only; a listed origin must not admit lookalikes
        // that merely start with it.
        let policy = allowlist(&["https://docs.example.org"]);
        assert!(!policy.allows("https://docs.example.org:8443"));
        assert!(!policy.allows("https://docs.example.organ"));
    }

    #[test]
    fn empty_allowlist_blocks_everything() {
        let policy = allowlist(&[]);
        assert!(!policy.allows("https://docs.example.org"));
        assert!(!policy.allows(""));
    }

    #[test]
    fn blocks_garbage_origins() {
        let policy = allowlist(&["https://docs.example.org"]);
        assert!(!policy.allows(""));
        assert!(!policy.allows("   "));
        assert!(!policy.allows("javascript:alert(1)"));
        assert!(!policy.allows("file:///etc/passwd"));
    }
}
