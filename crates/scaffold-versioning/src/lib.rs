//! ---
//! scaffold_section: "01-version-metadata"
//! scaffold_subsection: "module"
//! scaffold_type: "source"
//! scaffold_scope: "code"
//! scaffold_description: "Version metadata for the Scaffold project."
//! scaffold_version: "v3.6.11"
//! scaffold_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Crate exposing the Scaffold release identifier in structured and
//! canonical string form, for embedding across packaging metadata and
//! diagnostic surfaces.

pub mod semver;

pub use semver::{announce, VersionInfo, CURRENT, CURRENT_STRING};
