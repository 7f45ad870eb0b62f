//! Formatting of scan manifests.
//!
//! A [`Manifest`] lists what a run would embed. It is printed by the
//! command-line `--manifest` mode and can be written next to the
//! generated module for inspection.

use crate::{Manifest, SynthesisError};
use std::fs;
use std::path::Path;

/// Formats the manifest as JSON.
pub fn format_manifest(manifest: &Manifest, pretty: bool) -> Result<String, SynthesisError> {
    let json = if pretty {
        serde_json::to_string_pretty(manifest)?
    } else {
        serde_json::to_string(manifest)?
    };
    Ok(json)
}

/// Writes the manifest as JSON to a file.
pub fn write_manifest_to_file(
    manifest: &Manifest,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), SynthesisError> {
    let content = format_manifest(manifest, pretty)?;
    fs::write(&path, content).map_err(|e| SynthesisError::io(path.as_ref(), e))?;
    Ok(())
}
