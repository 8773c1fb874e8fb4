//! create-wp-theme scaffolds a WordPress theme project from a template tree.
//! It copies the template without build artifacts, personalizes the manifest,
//! stylesheet header and HTML entry point, then optionally initializes git
//! and installs dependencies.

/// Command-line interface module
pub mod cli;

/// Common constants: exclusion rules, artifact paths and markers
pub mod constants;

/// Filtered recursive copy of the template tree
pub mod copier;

/// Marker substitution for the manifest, style header and HTML entry
pub mod customize;

/// Error types and handling
pub mod error;

/// Basename exclusion rules
pub mod ignore;

/// Logger initialization
pub mod logger;

/// Project metadata intake and validation
pub mod metadata;

/// Materialization orchestration
/// Combines copying and customization into a single outcome
pub mod processor;

/// User confirmation
pub mod prompt;

/// External process steps run after materialization
pub mod runner;
