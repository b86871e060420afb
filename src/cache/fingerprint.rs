//! Deterministic fingerprinting of dependency lists
//!
//! The fingerprint is the identity of a cache entry: same dependency
//! multiset = same fingerprint = same install directory, across processes
//! and machines.

use sha2::{Digest, Sha256};

/// Compute a deterministic fingerprint for a list of dependency specifiers.
///
/// The specifiers are sorted lexicographically (byte order), joined with a
/// single newline, and hashed with SHA-256. Order of the input is
/// irrelevant; duplicates are preserved and change the fingerprint.
///
/// Returns the lowercase hex digest, always 64 characters.
pub fn deps_fingerprint(deps: &[String]) -> String {
    let mut sorted: Vec<&str> = deps.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    let canonical = sorted.join("\n");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check whether a string looks like a fingerprint (64 lowercase hex chars)
pub fn is_fingerprint(s: &str) -> bool {
    s.len() == 64
        && s.bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fingerprint_order_independent() {
        let a = deps_fingerprint(&specs(&["numpy==1.26.0", "requests"]));
        let b = deps_fingerprint(&specs(&["requests", "numpy==1.26.0"]));
        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_is_64_lowercase_hex() {
        let fp = deps_fingerprint(&specs(&["numpy==1.26.0", "requests"]));
        assert_eq!(fp.len(), 64);
        assert!(is_fingerprint(&fp));
    }

    #[test]
    fn fingerprint_differs_on_content() {
        let a = deps_fingerprint(&specs(&["requests"]));
        let b = deps_fingerprint(&specs(&["requests==2.32.0"]));
        assert_ne!(a, b);
    }

    #[test]
    fn fingerprint_counts_duplicates() {
        let once = deps_fingerprint(&specs(&["requests"]));
        let twice = deps_fingerprint(&specs(&["requests", "requests"]));
        assert_ne!(once, twice);
    }

    #[test]
    fn fingerprint_empty_list() {
        // SHA-256 of the empty string
        assert_eq!(
            deps_fingerprint(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn fingerprint_matches_known_digest() {
        // SHA-256 of "numpy==1.26.0\nrequests"
        let fp = deps_fingerprint(&specs(&["requests", "numpy==1.26.0"]));
        assert_eq!(
            fp,
            "0e70f0228f0b5506df325840074891fadd0201cc7442b654692e1295dc5595f1"
        );
    }

    #[test]
    fn is_fingerprint_rejects_junk() {
        assert!(!is_fingerprint("tmp"));
        assert!(!is_fingerprint(&"A".repeat(64)));
        assert!(!is_fingerprint(&"g".repeat(64)));
        assert!(is_fingerprint(&"0".repeat(64)));
    }
}
