//! Per-file rewrite rules for release metadata.

use crate::config::ReleaseInfo;
use crate::error::Result;
use regex::{NoExpand, Regex};
use serde::Serialize;
use std::fmt;

/// How a target file's version or date is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchRule {
    /// `AC_INIT(...)` line of `configure.ac`, replaced as a whole
    ConfigureInit,
    /// `<package>-D.DD.DD` tokens, version replaced in place
    ArchiveName,
    /// `# <Title> Version D.DD.DD <Month> <Year>` title, replaced as a whole
    ReadmeTitle,
    /// `.TH <Title> "1" "<Month> <Year>"` manual page header, replaced as a whole
    ManPageTitle,
    /// Every bare `D.DD.DD` token, anywhere
    BareVersion,
}

impl fmt::Display for PatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatchRule::ConfigureInit => "configure-init",
            PatchRule::ArchiveName => "archive-name",
            PatchRule::ReadmeTitle => "readme-title",
            PatchRule::ManPageTitle => "man-page-title",
            PatchRule::BareVersion => "bare-version",
        };
        f.write_str(name)
    }
}

/// Rewritten lines and the number of lines a rule changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub lines: Vec<String>,
    pub matches: usize,
}

/// Compiled patterns for one release.
pub struct RulePatterns {
    configure_init: Regex,
    archive_name: Regex,
    readme_title: Regex,
    man_page_title: Regex,
    bare_version: Regex,
}

impl RulePatterns {
    pub fn compile(release: &ReleaseInfo) -> Result<Self> {
        let package = regex::escape(&release.package);
        let title = regex::escape(&release.title);
        Ok(Self {
            configure_init: Regex::new(r"^AC_INIT")?,
            archive_name: Regex::new(&format!(r"{package}-\d\.\d\d\.\d\d"))?,
            readme_title: Regex::new(&format!(r"^# {title} Version \d\.\d\d\.\d\d \S+ \d{{4}}"))?,
            man_page_title: Regex::new(&format!(r#"^\.TH {title} "1" "\S+ \d{{4}}""#))?,
            bare_version: Regex::new(r"\d\.\d\d\.\d\d")?,
        })
    }

    /// Applies `rule` to every line independently. Lines the rule does not
    /// match are passed through unchanged, including their line terminator.
    pub fn apply(&self, rule: PatchRule, lines: &[String], release: &ReleaseInfo) -> Patched {
        let mut matches = 0;
        let lines = lines
            .iter()
            .map(|line| {
                let (body, ending) = split_line_ending(line);
                match self.patch_line(rule, body, release) {
                    Some(patched) => {
                        matches += 1;
                        format!("{patched}{ending}")
                    }
                    None => line.clone(),
                }
            })
            .collect();
        Patched { lines, matches }
    }

    fn patch_line(&self, rule: PatchRule, body: &str, release: &ReleaseInfo) -> Option<String> {
        match rule {
            PatchRule::ConfigureInit => self
                .configure_init
                .is_match(body)
                .then(|| format!("AC_INIT([{}], [{}])", release.package, release.version)),
            PatchRule::ArchiveName => {
                let replacement = format!("{}-{}", release.package, release.version);
                replace_all(&self.archive_name, body, &replacement)
            }
            PatchRule::ReadmeTitle => self.readme_title.is_match(body).then(|| {
                format!(
                    "# {} Version {} {} {}",
                    release.title, release.version, release.month, release.year
                )
            }),
            PatchRule::ManPageTitle => self.man_page_title.is_match(body).then(|| {
                format!(
                    r#".TH {} "1" "{} {}" "@PACKAGE_STRING@""#,
                    release.title, release.month, release.year
                )
            }),
            PatchRule::BareVersion => replace_all(&self.bare_version, body, &release.version),
        }
    }
}

fn replace_all(pattern: &Regex, body: &str, replacement: &str) -> Option<String> {
    pattern
        .is_match(body)
        .then(|| pattern.replace_all(body, NoExpand(replacement)).into_owned())
}

/// Splits a line into its content and its terminator (`\r\n`, `\n` or none).
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Splits text into lines that keep their terminators.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}
