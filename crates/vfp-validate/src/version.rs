//! Version string parsing and model/tool compatibility rules.
//!
//! Two surface notations are accepted and normalize identically:
//! `MAJOR.MINOR.PATCH-PRERELEASE` and `MAJOR.MINOR.PATCHPRERELEASE`
//! (pre-release text appended directly). A hyphen with nothing after it
//! is rejected.
//!
//! Compatibility is decided before any model loading happens:
//! a major mismatch is always fatal; a pre-release on either side
//! requires both sides to match exactly on minor, patch, and
//! pre-release text; two stable versions only need matching majors.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, ValidationError};

fn version_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)(-?(?P<prerelease>[A-Za-z][0-9A-Za-z]*))?$",
        )
        .expect("version regex is valid")
    })
}

/// The component that decided a compatibility verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComponent {
    Major,
    Minor,
    Patch,
    Prerelease,
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Prerelease => "prerelease",
        };
        f.write_str(name)
    }
}

/// A parsed, notation-neutral version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
}

impl Version {
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }
}

impl FromStr for Version {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self> {
        let captures = version_regex()
            .captures(value.trim())
            .ok_or_else(|| ValidationError::MalformedVersion(value.to_string()))?;
        // The regex only matches all-digit components; parse failures
        // here would mean overflow, which is equally malformed.
        let part = |name: &str| -> Result<u64> {
            captures[name]
                .parse::<u64>()
                .map_err(|_| ValidationError::MalformedVersion(value.to_string()))
        };
        Ok(Self {
            major: part("major")?,
            minor: part("minor")?,
            patch: part("patch")?,
            prerelease: captures.name("prerelease").map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{prerelease}")?;
        }
        Ok(())
    }
}

/// Decide whether a model artifact may be used with this tool build.
///
/// Both arguments are the literal version strings; they are parsed here
/// so the diagnostics can quote exactly what was compared.
pub fn validate_versions_compatible(tool_version: &str, model_version: &str) -> Result<()> {
    let tool: Version = tool_version.parse()?;
    let model: Version = model_version.parse()?;

    let mismatch = |component| {
        Err(ValidationError::IncompatibleVersion {
            component,
            tool: tool_version.to_string(),
            model: model_version.to_string(),
        })
    };

    if tool.major != model.major {
        return mismatch(VersionComponent::Major);
    }

    // Pre-releases are never compatible with anything but an identical
    // pre-release.
    if tool.is_prerelease() || model.is_prerelease() {
        if tool.minor != model.minor {
            return mismatch(VersionComponent::Minor);
        }
        if tool.patch != model.patch {
            return mismatch(VersionComponent::Patch);
        }
        if tool.prerelease != model.prerelease {
            return mismatch(VersionComponent::Prerelease);
        }
    }

    Ok(())
}
