//! ---
//! scaffold_section: "01-version-metadata"
//! scaffold_subsection: "module"
//! scaffold_type: "source"
//! scaffold_scope: "code"
//! scaffold_description: "Structured release identifier and canonical rendering."
//! scaffold_version: "v3.6.11"
//! scaffold_owner: "tbd"
//! ---
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::info;

/// The release identifier for the current build of Scaffold.
pub const CURRENT: VersionInfo = VersionInfo::new(3, 6, 11);

/// Canonical rendering of [`CURRENT`], computed once per process.
pub static CURRENT_STRING: Lazy<String> = Lazy::new(|| CURRENT.to_string());

/// Structured version identifier: three ordered numeric components.
///
/// Values are immutable after construction. The canonical string form is
/// always the three components joined with `.` in major/minor/patch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Major release component.
    pub major: u64,
    /// Minor release component.
    pub minor: u64,
    /// Patch release component.
    pub patch: u64,
}

impl VersionInfo {
    /// Construct an identifier from its three components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the major component.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// Returns the minor component.
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// Returns the patch component.
    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns the components as an ordered tuple for programmatic
    /// consumers.
    #[must_use]
    pub const fn tuple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Human readable banner used in logging surfaces.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("Scaffold v{self}")
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Emit the current release banner through the logging layer.
///
/// Intended for process startup; installs no subscriber of its own.
pub fn announce() {
    info!(
        major = CURRENT.major,
        minor = CURRENT.minor,
        patch = CURRENT.patch,
        version = CURRENT_STRING.as_str(),
        "{}",
        CURRENT.banner()
    );
}
