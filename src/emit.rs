//! Generation of the Rust module that embeds the assets.
//!
//! The module is laid out as: a header comment listing the sources, the
//! types shared by every mode, the helpers of the selected mode, one private
//! submodule per asset, the lookup table and the directory tree.

use crate::debug;
use crate::error::SynthesisError;
use crate::options::SynthesisOptions;
use crate::release;
use crate::toc;
use crate::tree::AssetTree;
use crate::types::Asset;
use std::io::Write;

const COMMON_TYPES: &str = r#"/// Error returned by the embedded asset accessors.
#[derive(Debug)]
pub enum AssetError {
    /// No asset or directory is registered under the name.
    NotFound(String),
    /// The asset could not be read from disk.
    Read {
        name: String,
        source: ::std::io::Error,
    },
    /// The embedded payload is corrupted or truncated.
    Decode {
        name: String,
        source: ::std::io::Error,
    },
}

impl ::std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            AssetError::NotFound(name) => write!(f, "asset {name} not found"),
            AssetError::Read { name, source } => write!(f, "error reading asset {name}: {source}"),
            AssetError::Decode { name, source } => write!(f, "error decoding asset {name}: {source}"),
        }
    }
}

impl ::std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match self {
            AssetError::NotFound(_) => None,
            AssetError::Read { source, .. } | AssetError::Decode { source, .. } => Some(source),
        }
    }
}

/// Metadata recorded for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetInfo {
    pub name: &'static str,
    pub size: u64,
    pub mode: u32,
    /// Seconds since the Unix epoch.
    pub mod_time: i64,
}

impl AssetInfo {
    pub fn modified(&self) -> ::std::time::SystemTime {
        let offset = ::std::time::Duration::from_secs(self.mod_time.unsigned_abs());
        if self.mod_time >= 0 {
            ::std::time::UNIX_EPOCH + offset
        } else {
            ::std::time::UNIX_EPOCH - offset
        }
    }
}

struct EmbeddedAsset {
    bytes: ::std::borrow::Cow<'static, [u8]>,
    info: AssetInfo,
}

type Loader = fn() -> Result<EmbeddedAsset, AssetError>;

struct AssetNode {
    load: Option<Loader>,
    children: &'static [(&'static str, AssetNode)],
}

"#;

/// Writes the generated module for `assets` into `sink`.
///
/// Nothing is read from disk beyond the asset files themselves. The first
/// failure aborts the whole emission; whatever was already written to
/// `sink` must then be discarded by the caller.
///
/// # Errors
///
/// [`SynthesisError::Emit`] names the asset whose file could not be read,
/// [`SynthesisError::Write`] reports a failing sink.
pub fn emit<W: Write>(
    options: &SynthesisOptions,
    tree: &AssetTree,
    assets: &[Asset],
    sink: &mut W,
) -> Result<(), SynthesisError> {
    let out: &mut dyn Write = sink;
    write_header(out, options, assets).map_err(SynthesisError::Write)?;
    out.write_all(COMMON_TYPES.as_bytes())
        .map_err(SynthesisError::Write)?;
    if options.reads_from_disk() {
        debug::write_debug(out, options, assets)?;
    } else {
        release::write_release(out, options, assets)?;
    }
    if options.http_file_system {
        toc::write_asset_fs(out).map_err(SynthesisError::Write)?;
    }
    toc::write_toc(out, assets).map_err(SynthesisError::Write)?;
    toc::write_tree(out, tree).map_err(SynthesisError::Write)?;
    out.flush().map_err(SynthesisError::Write)
}

fn write_header(
    out: &mut dyn Write,
    options: &SynthesisOptions,
    assets: &[Asset],
) -> std::io::Result<()> {
    writeln!(out, "// Code generated by synthesis. DO NOT EDIT.")?;
    writeln!(out, "// sources:")?;
    for asset in assets {
        writeln!(out, "// {}", asset.name.escape_debug())?;
    }
    writeln!(out)?;
    writeln!(out, "//! Embedded assets of the `{}` module.", options.package)?;
    if !options.tags.trim().is_empty() {
        writeln!(out, "#![cfg({})]", options.tags.trim())?;
    }
    writeln!(out, "#![allow(dead_code, clippy::all)]")?;
    writeln!(out)
}
