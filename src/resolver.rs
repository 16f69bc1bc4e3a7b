//! Resolution of the final release version string

use crate::context::BuildContext;
use crate::release_set::ReleaseSet;
use crate::source::BaseVersion;

/// Outcome of version resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Final version string handed to the packaging step.
    pub version: String,
    /// Colliding versions on the primary index, highest precedence first.
    pub primary_conflicts: Vec<String>,
    /// Colliding versions on the secondary index, highest precedence first.
    pub secondary_conflicts: Vec<String>,
    /// A suffix was called for but no run number was available to apply.
    pub missing_run_number: bool,
}

/// Combines the base version, both release sets, and the build context into
/// the final version string.
///
/// A collision on either index is enough to trigger suffixing: a unique tag
/// is preferred over a clash on any one index. Without a run number there is
/// nothing to disambiguate with, so the base version is kept as-is and the
/// outcome is flagged as degraded rather than failing.
pub fn resolve(
    base: &BaseVersion,
    primary: &ReleaseSet,
    secondary: &ReleaseSet,
    ctx: &BuildContext,
) -> Resolution {
    let primary_conflicts = primary.matching(base.as_str());
    let secondary_conflicts = secondary.matching(base.as_str());

    let collision = !primary_conflicts.is_empty() || !secondary_conflicts.is_empty();
    let wants_suffix = collision || ctx.force_suffix;

    let (version, missing_run_number) = match (wants_suffix, &ctx.run_number) {
        (true, Some(run_number)) => (format!("{base}-{run_number}"), false),
        (true, None) => (base.as_str().to_string(), true),
        (false, _) => (base.as_str().to_string(), false),
    };

    Resolution {
        version,
        primary_conflicts,
        secondary_conflicts,
        missing_run_number,
    }
}
