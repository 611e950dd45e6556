//! Release metadata patcher.
//! Rewrites version numbers and dates across the files touched by a release.

use crate::config::{PatchTarget, ReleaseConfig, ReleaseInfo};
use crate::error::{Error, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

mod rules;

pub use rules::{split_lines, PatchRule, Patched, RulePatterns};

/// Per-file result of a release bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatch {
    pub path: PathBuf,
    pub rule: PatchRule,
    /// Lines changed by the rule
    pub matches: usize,
}

/// Reads `path` as lines that keep their terminators.
pub fn read_all(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
    Ok(split_lines(&content))
}

/// Writes `lines` to `path`, replacing its previous content.
pub fn write_all(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.concat()).map_err(|e| Error::file_system(path, e))
}

/// Applies one rule to in-memory lines.
pub fn patch_lines(rule: PatchRule, lines: &[String], release: &ReleaseInfo) -> Result<Patched> {
    let patterns = RulePatterns::compile(release)?;
    Ok(patterns.apply(rule, lines, release))
}

/// Patches a single file in place.
///
/// # Errors
/// * `Error::FileSystemError` if the file cannot be read or written
pub fn patch_file(path: &Path, rule: PatchRule, release: &ReleaseInfo) -> Result<usize> {
    let lines = read_all(path)?;
    let patched = patch_lines(rule, &lines, release)?;
    write_all(path, &patched.lines)?;
    Ok(patched.matches)
}

/// Patches every configured target.
///
/// All targets are read and patched in memory first. Files are written only
/// when every target was readable and every rule matched at least once, or
/// unmatched rules are explicitly allowed. Nothing is written on a dry run.
///
/// # Errors
/// * `Error::ConfigError` for invalid release values
/// * `Error::FileSystemError` for a missing or unreadable target
/// * `Error::UnmatchedRuleError` for a rule that matched no line
pub fn patch_release(config: &ReleaseConfig) -> Result<Vec<FilePatch>> {
    config.validate()?;
    let release = &config.release;
    let patterns = RulePatterns::compile(release)?;

    let mut pending = Vec::with_capacity(config.targets.len());
    for PatchTarget { path, rule } in &config.targets {
        let full_path = config.root.join(path);
        let lines = read_all(&full_path)?;
        let patched = patterns.apply(*rule, &lines, release);
        debug!(
            "{}: rule '{}' matched {} lines",
            full_path.display(),
            rule,
            patched.matches
        );
        if patched.matches == 0 {
            if config.allow_unmatched {
                warn!("Rule '{}' matched nothing in {}", rule, full_path.display());
            } else {
                return Err(Error::UnmatchedRuleError {
                    path: full_path,
                    rule: rule.to_string(),
                });
            }
        }
        pending.push((full_path, *rule, patched));
    }

    let mut report = Vec::with_capacity(pending.len());
    for (path, rule, patched) in pending {
        if config.dry_run {
            info!("Would patch {} ({} lines)", path.display(), patched.matches);
        } else {
            write_all(&path, &patched.lines)?;
            debug!("Patched {}", path.display());
        }
        report.push(FilePatch {
            path,
            rule,
            matches: patched.matches,
        });
    }
    Ok(report)
}
