//! robogen supports the ROBODoc test and release workflow.
//! It generates randomized trees of C sources carrying ROBODoc headers for
//! exercising the documentation parser, and patches version numbers and
//! dates across the files touched by a release.

/// Command-line interface for the robogen binary
pub mod cli;

/// Generator and release configuration
pub mod config;

/// Default values
pub mod constants;

/// Error types and handling
pub mod error;

/// End-to-end fixture generation
pub mod fixtures;

/// ROBODoc header blocks
pub mod header;

/// Logger setup
pub mod logger;

/// Directory and file creation for fixture trees
pub mod materializer;

/// Randomized identifiers
pub mod naming;

/// Release version and date patching
pub mod patcher;

/// Template rendering for header blocks
pub mod renderer;

/// In-memory fixture trees
pub mod tree;
