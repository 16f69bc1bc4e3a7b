use std::time::Duration;

// =============================================================================
// Release index defaults
// =============================================================================

/// Primary release index queried for already-published versions.
pub const DEFAULT_PRIMARY_INDEX: &str = "pypi.org";

/// Secondary release index, queried with the same package name.
pub const DEFAULT_SECONDARY_INDEX: &str = "test.pypi.org";

/// Timeout for a single release-manifest fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// Environment bindings
// =============================================================================

/// Environment variable carrying the build run identifier.
pub const RUN_NUMBER_ENV: &str = "GITHUB_RUN_NUMBER";

/// Environment variable forcing the run-number suffix regardless of
/// collision detection. Presence alone enables it.
pub const FORCE_SUFFIX_ENV: &str = "GITHUB_FORCE_RUN_NUMBER";
