//! Table of contents: lookup by name, directory listing and the optional
//! file-system adapter.

use crate::tree::AssetTree;
use crate::types::Asset;
use std::collections::BTreeMap;
use std::io::{self, Write};

const TOC_FUNCTIONS: &str = r#"fn canonical_name(name: &str) -> String {
    name.replace('\\', "/")
}

fn find_loader(name: &str) -> Option<Loader> {
    let canonical = canonical_name(name);
    ASSETS
        .binary_search_by(|(entry, _)| (*entry).cmp(canonical.as_str()))
        .ok()
        .map(|index| ASSETS[index].1)
}

fn load(name: &str) -> Result<EmbeddedAsset, AssetError> {
    let loader = find_loader(name).ok_or_else(|| AssetError::NotFound(name.to_string()))?;
    loader()
}

/// Loads and returns the contents of the asset `name`.
pub fn asset(name: &str) -> Result<::std::borrow::Cow<'static, [u8]>, AssetError> {
    load(name).map(|a| a.bytes)
}

/// Like [`asset`], but panics if the asset cannot be loaded.
pub fn must_asset(name: &str) -> ::std::borrow::Cow<'static, [u8]> {
    match asset(name) {
        Ok(bytes) => bytes,
        Err(err) => panic!("must_asset({name}): {err}"),
    }
}

/// Returns the metadata of the asset `name`.
pub fn asset_info(name: &str) -> Result<AssetInfo, AssetError> {
    load(name).map(|a| a.info)
}

/// Returns the names of all assets, sorted.
pub fn asset_names() -> Vec<&'static str> {
    ASSETS.iter().map(|(name, _)| *name).collect()
}

/// Returns the entries directly below the directory `name`.
///
/// With assets `data/foo.txt` and `data/img/a.png`, `asset_dir("data")`
/// returns `["foo.txt", "img"]` and `asset_dir("")` returns `["data"]`.
/// `asset_dir("data/foo.txt")` and `asset_dir("missing")` fail with
/// [`AssetError::NotFound`].
pub fn asset_dir(name: &str) -> Result<Vec<&'static str>, AssetError> {
    let not_found = || AssetError::NotFound(name.to_string());
    let mut node = &ASSET_TREE;
    if !name.is_empty() {
        for segment in canonical_name(name).split('/') {
            node = node
                .children
                .iter()
                .find(|(child, _)| *child == segment)
                .map(|(_, child)| child)
                .ok_or_else(not_found)?;
        }
    }
    if node.load.is_some() {
        return Err(not_found());
    }
    Ok(node.children.iter().map(|(child, _)| *child).collect())
}

"#;

const ASSET_FS: &str = r#"/// Read-only file system view over the embedded assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetFs {
    /// Directory every opened name is resolved under.
    pub prefix: &'static str,
    /// Name (under `prefix`) opened when a lookup finds nothing.
    pub fallback: Option<&'static str>,
}

impl AssetFs {
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            fallback: None,
        }
    }

    pub fn with_fallback(self, fallback: &'static str) -> Self {
        Self {
            fallback: Some(fallback),
            ..self
        }
    }

    /// Opens the file or directory `name` below the prefix.
    pub fn open(&self, name: &str) -> Result<AssetFile, AssetError> {
        match self.open_exact(name) {
            Err(AssetError::NotFound(_)) => match self.fallback {
                Some(fallback) => self.open_exact(fallback),
                None => Err(AssetError::NotFound(name.to_string())),
            },
            other => other,
        }
    }

    fn open_exact(&self, name: &str) -> Result<AssetFile, AssetError> {
        let path = join_path(self.prefix, name);
        match load(&path) {
            Ok(asset) => Ok(AssetFile::File {
                info: asset.info,
                reader: ::std::io::Cursor::new(asset.bytes),
            }),
            Err(AssetError::NotFound(_)) => {
                let entries = asset_dir(&path)?;
                Ok(AssetFile::Dir { name: path, entries })
            }
            Err(err) => Err(err),
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in prefix.split(['/', '\\']).chain(name.split(['/', '\\'])) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }
    segments.join("/")
}

/// A file or directory opened through [`AssetFs`].
#[derive(Debug)]
pub enum AssetFile {
    File {
        info: AssetInfo,
        reader: ::std::io::Cursor<::std::borrow::Cow<'static, [u8]>>,
    },
    Dir {
        name: String,
        entries: Vec<&'static str>,
    },
}

impl AssetFile {
    pub fn is_dir(&self) -> bool {
        matches!(self, AssetFile::Dir { .. })
    }

    pub fn info(&self) -> Option<&AssetInfo> {
        match self {
            AssetFile::File { info, .. } => Some(info),
            AssetFile::Dir { .. } => None,
        }
    }

    /// Entry names of a directory, `None` for files.
    pub fn read_dir(&self) -> Option<&[&'static str]> {
        match self {
            AssetFile::File { .. } => None,
            AssetFile::Dir { entries, .. } => Some(entries.as_slice()),
        }
    }
}

impl ::std::io::Read for AssetFile {
    fn read(&mut self, buf: &mut [u8]) -> ::std::io::Result<usize> {
        match self {
            AssetFile::File { reader, .. } => ::std::io::Read::read(reader, buf),
            AssetFile::Dir { name, .. } => Err(::std::io::Error::other(format!("{name} is a directory"))),
        }
    }
}

impl ::std::io::Seek for AssetFile {
    fn seek(&mut self, pos: ::std::io::SeekFrom) -> ::std::io::Result<u64> {
        match self {
            AssetFile::File { reader, .. } => ::std::io::Seek::seek(reader, pos),
            AssetFile::Dir { name, .. } => Err(::std::io::Error::other(format!("{name} is a directory"))),
        }
    }
}

"#;

pub(crate) fn write_asset_fs(out: &mut dyn Write) -> io::Result<()> {
    out.write_all(ASSET_FS.as_bytes())
}

/// Writes the lookup functions and the sorted `ASSETS` table.
pub(crate) fn write_toc(out: &mut dyn Write, assets: &[Asset]) -> io::Result<()> {
    out.write_all(TOC_FUNCTIONS.as_bytes())?;
    // Sorted so that lookups can binary search.
    let sorted: BTreeMap<&str, &str> = assets
        .iter()
        .map(|a| (a.name.as_str(), a.func.as_str()))
        .collect();
    writeln!(out, "static ASSETS: &[(&str, Loader)] = &[")?;
    for (name, func) in sorted {
        writeln!(out, "    ({name:?}, {func}::load as Loader),")?;
    }
    writeln!(out, "];")?;
    writeln!(out)
}

/// Writes `ASSET_TREE`, the literal form of the directory index.
pub(crate) fn write_tree(out: &mut dyn Write, tree: &AssetTree) -> io::Result<()> {
    let mut literal = String::new();
    tree.to_node().write_literal(&mut literal, 0);
    writeln!(out, "static ASSET_TREE: AssetNode = {literal};")
}
