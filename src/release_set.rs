//! Release listings reported by a package index

use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use pep508_rs::pep440_rs::Version;

/// The set of version strings one index reports as already published for a
/// package.
///
/// An empty set means "no data", not "no releases": a failed fetch degrades
/// to an empty set, which simply disables collision detection for that index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSet {
    versions: HashSet<String>,
}

impl ReleaseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Published versions equal to, or prefixed by, `base`, ordered from
    /// highest to lowest precedence.
    ///
    /// Prefix comparison is deliberate: a pre-release or local-build suffix
    /// on an already-published version still collides with the same base.
    /// The ordering exists only so the most recent conflicts are reported
    /// first; membership alone drives the resolution decision.
    pub fn matching(&self, base: &str) -> Vec<String> {
        let mut matches: Vec<String> = self
            .versions
            .iter()
            .filter(|version| version.starts_with(base))
            .cloned()
            .collect();
        matches.sort_by(|a, b| compare_precedence(b, a));
        matches
    }
}

impl FromIterator<String> for ReleaseSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            versions: iter.into_iter().collect(),
        }
    }
}

/// Orders two version strings by parsed precedence. Strings that fail to
/// parse sort below every parseable version, among themselves lexically.
fn compare_precedence(a: &str, b: &str) -> Ordering {
    match (Version::from_str(a).ok(), Version::from_str(b).ok()) {
        (Some(va), Some(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn release_set(versions: &[&str]) -> ReleaseSet {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    #[case(&["1.4.0", "1.3.2"], "1.4.0", vec!["1.4.0"])]
    #[case(&["1.4.0", "1.4.0rc1", "1.3.2"], "1.4.0", vec!["1.4.0", "1.4.0rc1"])]
    #[case(&["1.3.2", "1.2.0"], "1.4.0", vec![])]
    #[case(&[], "1.4.0", vec![])]
    fn matching_filters_by_prefix(
        #[case] versions: &[&str],
        #[case] base: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(release_set(versions).matching(base), expected);
    }

    #[test]
    fn matching_orders_by_precedence_descending() {
        let releases = release_set(&["1.4.2", "1.4.10", "1.4.0", "1.4.0rc1"]);

        // "1.4.10" outranks "1.4.2" numerically, "1.4.0rc1" trails "1.4.0"
        assert_eq!(
            releases.matching("1.4"),
            vec!["1.4.10", "1.4.2", "1.4.0", "1.4.0rc1"]
        );
    }

    #[test]
    fn matching_sorts_unparseable_versions_last() {
        let releases = release_set(&["1.4.0-garbage!", "1.4.1", "1.4.0"]);

        assert_eq!(
            releases.matching("1.4"),
            vec!["1.4.1", "1.4.0", "1.4.0-garbage!"]
        );
    }

    #[test]
    fn empty_set_reports_empty() {
        let releases = ReleaseSet::new();
        assert!(releases.is_empty());
        assert_eq!(releases.len(), 0);
    }
}
