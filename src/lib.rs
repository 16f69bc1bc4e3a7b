//! Release version resolution for a packaging pipeline
//!
//! Reads the declared base version from a version file, checks whether that
//! version is already published on the configured release indexes, and
//! appends the build run number when the tag would otherwise collide (or
//! when forced). Index outages degrade collision detection instead of
//! blocking the release; only a missing version declaration is fatal.
//!
//! # Modules
//!
//! - [`source`]: base version extraction from the declaration file
//! - [`index`]: release index client (PyPI JSON API)
//! - [`release_set`]: published-version sets with precedence ordering
//! - [`resolver`]: the pure resolution decision
//! - [`pipeline`]: end-to-end orchestration
//! - [`context`]: build flags captured at the process boundary
//! - [`config`]: defaults and environment bindings
//! - [`error`]: fatal vs. recoverable error types

pub mod config;
pub mod context;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod release_set;
pub mod resolver;
pub mod source;
