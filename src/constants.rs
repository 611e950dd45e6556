//! Default values used throughout robogen.

/// Characters identifiers are drawn from
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Name of the single entry wrapping the generated tree
pub const DEFAULT_ROOT_NAME: &str = "source";

/// Interior levels below the root entry
pub const DEFAULT_DEPTH: usize = 3;

/// Children per interior node, one entry per level
pub const DEFAULT_FANOUT: [usize; 3] = [2, 5, 8];

/// Shortest file/directory identifier
pub const DEFAULT_NAME_MIN_LENGTH: usize = 4;

/// Longest file/directory identifier
pub const DEFAULT_NAME_MAX_LENGTH: usize = 5;

/// Length of the identifiers embedded in a header block
pub const DEFAULT_HEADER_NAME_LENGTH: usize = 10;

/// Extension of generated source files
pub const DEFAULT_EXTENSION: &str = "c";

/// Resampling attempts per identifier before giving up on sibling uniqueness
pub const MAX_RESAMPLE_ATTEMPTS: usize = 1024;

pub const DEFAULT_PACKAGE: &str = "robodoc";
pub const DEFAULT_TITLE: &str = "ROBODoc";
pub const DEFAULT_VERSION: &str = "4.99.45";
pub const DEFAULT_MONTH: &str = "Feb";
pub const DEFAULT_YEAR: &str = "2021";
