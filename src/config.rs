//! Configuration for the fixture generator and the release patcher.
//! Both configurations are plain values built in code; their `Default`
//! implementations reproduce the stock ROBODoc setup.

use crate::constants::*;
use crate::error::{Error, Result};
use crate::patcher::PatchRule;
use indexmap::IndexSet;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;

/// Settings for building and materializing a fixture tree.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureConfig {
    /// Directory the root entry is created in
    pub output_dir: PathBuf,
    /// Name of the root entry, used as the top-level directory
    pub root_name: String,
    /// Interior levels below the root entry
    pub depth: usize,
    /// Children per interior node, per level; the last entry repeats
    pub fanout: Vec<usize>,
    pub name_min_length: usize,
    pub name_max_length: usize,
    pub header_name_length: usize,
    /// Extension of generated source files, without the dot
    pub extension: String,
    pub alphabet: String,
    /// Fixed seed for reproducible trees
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            root_name: DEFAULT_ROOT_NAME.to_string(),
            depth: DEFAULT_DEPTH,
            fanout: DEFAULT_FANOUT.to_vec(),
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
            header_name_length: DEFAULT_HEADER_NAME_LENGTH,
            extension: DEFAULT_EXTENSION.to_string(),
            alphabet: DEFAULT_ALPHABET.to_string(),
            seed: None,
        }
    }
}

impl FixtureConfig {
    /// Distinct alphabet characters in first-seen order.
    pub fn alphabet_chars(&self) -> Vec<char> {
        self.alphabet
            .chars()
            .collect::<IndexSet<char>>()
            .into_iter()
            .collect()
    }

    /// Checks the settings before anything is allocated or written.
    ///
    /// # Errors
    /// * `Error::ConfigError` describing the first invalid field
    pub fn validate(&self) -> Result<()> {
        let available = self.alphabet_chars().len();
        if available == 0 {
            return Err(Error::ConfigError("alphabet is empty".to_string()));
        }
        if self.root_name.is_empty() || self.root_name.contains(['/', '\\']) {
            return Err(Error::ConfigError(format!(
                "invalid root name '{}'",
                self.root_name
            )));
        }
        if self.name_min_length == 0 || self.name_min_length > self.name_max_length {
            return Err(Error::ConfigError(format!(
                "invalid name length range {}..={}",
                self.name_min_length, self.name_max_length
            )));
        }
        if self.name_max_length > available || self.header_name_length > available {
            return Err(Error::NameLengthError {
                requested: self.name_max_length.max(self.header_name_length),
                available,
            });
        }
        if self.header_name_length == 0 {
            return Err(Error::ConfigError(
                "header names must not be empty".to_string(),
            ));
        }
        if self.depth > 0 && self.fanout.is_empty() {
            return Err(Error::ConfigError(
                "fan-out table is empty but depth is not zero".to_string(),
            ));
        }
        if self.fanout.contains(&0) {
            return Err(Error::ConfigError(
                "fan-out entries must be at least 1".to_string(),
            ));
        }
        if self.extension.is_empty() || self.extension.contains(['/', '\\', '.']) {
            return Err(Error::ConfigError(format!(
                "invalid extension '{}'",
                self.extension
            )));
        }
        Ok(())
    }
}

/// Version and date written into release files.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseInfo {
    /// Lower-case package name as used in archive names, e.g. `robodoc`
    pub package: String,
    /// Display name as used in titles, e.g. `ROBODoc`
    pub title: String,
    /// New version, `D.DD.DD`
    pub version: String,
    /// Month abbreviation, e.g. `Feb`
    pub month: String,
    /// Four digit year
    pub year: String,
}

impl Default for ReleaseInfo {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            month: DEFAULT_MONTH.to_string(),
            year: DEFAULT_YEAR.to_string(),
        }
    }
}

impl ReleaseInfo {
    pub fn new(version: &str, month: &str, year: &str) -> Self {
        Self {
            version: version.to_string(),
            month: month.to_string(),
            year: year.to_string(),
            ..Self::default()
        }
    }

    /// # Errors
    /// * `Error::ConfigError` if the version is not `D.DD.DD`, the month is
    ///   empty or contains whitespace, or the year is not four digits
    pub fn validate(&self) -> Result<()> {
        let version_shape = Regex::new(r"^\d\.\d\d\.\d\d$")?;
        if !version_shape.is_match(&self.version) {
            return Err(Error::ConfigError(format!(
                "version '{}' is not of the form D.DD.DD matched by the patch rules",
                self.version
            )));
        }
        if self.month.is_empty() || self.month.chars().any(char::is_whitespace) {
            return Err(Error::ConfigError(format!("invalid month '{}'", self.month)));
        }
        if self.year.len() != 4 || !self.year.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::ConfigError(format!("invalid year '{}'", self.year)));
        }
        if self.package.is_empty() || self.title.is_empty() {
            return Err(Error::ConfigError(
                "package and title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One file to patch and the rule that rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchTarget {
    /// Path relative to the release root
    pub path: PathBuf,
    pub rule: PatchRule,
}

impl PatchTarget {
    pub fn new(path: impl Into<PathBuf>, rule: PatchRule) -> Self {
        Self {
            path: path.into(),
            rule,
        }
    }
}

/// Settings for one release bump.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseConfig {
    /// Directory the target paths are relative to
    pub root: PathBuf,
    pub release: ReleaseInfo,
    pub targets: Vec<PatchTarget>,
    /// Tolerate rules that match no line, with a warning instead of an error
    pub allow_unmatched: bool,
    /// Compute and report patches without writing
    pub dry_run: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            release: ReleaseInfo::default(),
            targets: default_targets(),
            allow_unmatched: false,
            dry_run: false,
        }
    }
}

impl ReleaseConfig {
    pub fn validate(&self) -> Result<()> {
        self.release.validate()?;
        if self.targets.is_empty() {
            return Err(Error::ConfigError("no patch targets configured".to_string()));
        }
        Ok(())
    }
}

/// The files touched by a ROBODoc release.
pub fn default_targets() -> Vec<PatchTarget> {
    vec![
        PatchTarget::new("configure.ac", PatchRule::ConfigureInit),
        PatchTarget::new("INSTALL.md", PatchRule::ArchiveName),
        PatchTarget::new("README.md", PatchRule::ReadmeTitle),
        PatchTarget::new("Docs/robodoc.1.in", PatchRule::ManPageTitle),
        PatchTarget::new("Docs/manual.html", PatchRule::BareVersion),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fixture_config_is_valid() {
        assert!(FixtureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_alphabet_chars_dedupes() {
        let config = FixtureConfig {
            alphabet: "abcabcd".to_string(),
            ..FixtureConfig::default()
        };
        assert_eq!(config.alphabet_chars(), vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_name_length_exceeding_alphabet() {
        let config = FixtureConfig {
            alphabet: "abc".to_string(),
            ..FixtureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NameLengthError { available: 3, .. })
        ));
    }

    #[test]
    fn test_zero_fanout_rejected() {
        let config = FixtureConfig {
            fanout: vec![2, 0],
            ..FixtureConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_release_info_validation() {
        assert!(ReleaseInfo::default().validate().is_ok());
        assert!(ReleaseInfo::new("4.99", "Mar", "2022").validate().is_err());
        assert!(ReleaseInfo::new("4.99.45", "", "2022").validate().is_err());
        assert!(ReleaseInfo::new("4.99.45", "Mar", "22").validate().is_err());
    }

    #[test]
    fn test_version_outside_rule_shape_rejected() {
        for version in ["5.0.0", "4.100.1", "10.99.45"] {
            match ReleaseInfo::new(version, "Mar", "2022").validate() {
                Err(Error::ConfigError(msg)) => assert!(msg.contains("D.DD.DD")),
                other => panic!("Expected ConfigError for {version}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_default_targets() {
        let targets = default_targets();
        assert_eq!(targets.len(), 5);
        assert_eq!(
            targets[0],
            PatchTarget::new("configure.ac", PatchRule::ConfigureInit)
        );
        assert_eq!(
            targets[4],
            PatchTarget::new("Docs/manual.html", PatchRule::BareVersion)
        );
    }
}
