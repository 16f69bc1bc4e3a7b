//! Build invocation context, captured once at the process boundary

use crate::config::{FORCE_SUFFIX_ENV, RUN_NUMBER_ENV};

/// Immutable snapshot of the two flags that drive version suffixing.
///
/// Captured once in `main` and passed down, so the resolver stays a pure
/// function of its inputs instead of reading ambient process state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    /// Opaque identifier for the current build invocation, if any. Appended
    /// verbatim after a `-` separator when suffixing applies.
    pub run_number: Option<String>,
    /// Append the run-number suffix even without a detected collision.
    pub force_suffix: bool,
}

impl BuildContext {
    pub fn new(run_number: Option<String>, force_suffix: bool) -> Self {
        Self {
            run_number,
            force_suffix,
        }
    }

    /// Context from the CI environment. The force flag is enabled by the
    /// variable's presence, whatever its value.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(RUN_NUMBER_ENV).ok(),
            std::env::var(FORCE_SUFFIX_ENV).is_ok(),
        )
    }
}
