// Code generated by synthesis. DO NOT EDIT.
// sources:
// 1.txt
// a.txt
// foo/bar
// foo_bar
// std
// sub/b.txt
// sub/index.html
// type

//! Embedded assets of the `assets_dev` module.
#![allow(dead_code, clippy::all)]

/// Error returned by the embedded asset accessors.
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

fn read_from_disk(path: &::std::path::Path, name: &'static str) -> Result<EmbeddedAsset, AssetError> {
    let read_error = |source| AssetError::Read {
        name: name.to_string(),
        source,
    };
    let bytes = ::std::fs::read(path).map_err(read_error)?;
    let meta = ::std::fs::metadata(path).map_err(read_error)?;
    let mod_time = match meta.modified().map(|t| t.duration_since(::std::time::UNIX_EPOCH)) {
        Ok(Ok(since)) => since.as_secs() as i64,
        Ok(Err(before)) => -(before.duration().as_secs() as i64),
        Err(_) => 0,
    };
    let info = AssetInfo {
        name,
        size: meta.len(),
        mode: file_mode(&meta),
        mod_time,
    };
    Ok(EmbeddedAsset {
        bytes: ::std::borrow::Cow::Owned(bytes),
        info,
    })
}

#[cfg(unix)]
fn file_mode(meta: &::std::fs::Metadata) -> u32 {
    ::std::os::unix::fs::PermissionsExt::mode(&meta.permissions()) & 0o7777
}

#[cfg(not(unix))]
fn file_mode(meta: &::std::fs::Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o644 }
}

static ROOT_DIR: ::std::sync::OnceLock<::std::path::PathBuf> = ::std::sync::OnceLock::new();

/// Sets the directory asset names are resolved against.
///
/// Defaults to the current directory. Only the first call has an effect;
/// returns `false` if the root was already set.
pub fn set_root_dir(dir: impl Into<::std::path::PathBuf>) -> bool {
    ROOT_DIR.set(dir.into()).is_ok()
}

fn root_dir() -> &'static ::std::path::Path {
    ROOT_DIR
        .get()
        .map(|dir| dir.as_path())
        .unwrap_or(::std::path::Path::new("."))
}

mod _1_txt {
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {
        super::read_from_disk(&super::root_dir().join("1.txt"), "1.txt")
    }
}

mod a_txt {
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {
        super::read_from_disk(&super::root_dir().join("a.txt"), "a.txt")
    }
}

mod foo_bar {
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {
        super::read_from_disk(&super::root_dir().join("foo/bar"), "foo/bar")
    }
}

mod foo_bar2 {
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {
        super::read_from_disk(&super::root_dir().join("foo_bar"), "foo_bar")
    }
}

mod std {
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {
        super::read_from_disk(&super::root_dir().join("std"), "std")
    }
}

mod sub_b_txt {
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {
        super::read_from_disk(&super::root_dir().join("sub/b.txt"), "sub/b.txt")
    }
}

mod sub_index_html {
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {
        super::read_from_disk(&super::root_dir().join("sub/index.html"), "sub/index.html")
    }
}

mod type_ {
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {
        super::read_from_disk(&super::root_dir().join("type"), "type")
    }
}

fn canonical_name(name: &str) -> String {
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

static ASSETS: &[(&str, Loader)] = &[
    ("1.txt", _1_txt::load as Loader),
    ("a.txt", a_txt::load as Loader),
    ("foo/bar", foo_bar::load as Loader),
    ("foo_bar", foo_bar2::load as Loader),
    ("std", std::load as Loader),
    ("sub/b.txt", sub_b_txt::load as Loader),
    ("sub/index.html", sub_index_html::load as Loader),
    ("type", type_::load as Loader),
];

static ASSET_TREE: AssetNode = AssetNode { load: None, children: &[
    ("1.txt", AssetNode { load: Some(_1_txt::load as Loader), children: &[] }),
    ("a.txt", AssetNode { load: Some(a_txt::load as Loader), children: &[] }),
    ("foo", AssetNode { load: None, children: &[
        ("bar", AssetNode { load: Some(foo_bar::load as Loader), children: &[] }),
    ] }),
    ("foo_bar", AssetNode { load: Some(foo_bar2::load as Loader), children: &[] }),
    ("std", AssetNode { load: Some(std::load as Loader), children: &[] }),
    ("sub", AssetNode { load: None, children: &[
        ("b.txt", AssetNode { load: Some(sub_b_txt::load as Loader), children: &[] }),
        ("index.html", AssetNode { load: Some(sub_index_html::load as Loader), children: &[] }),
    ] }),
    ("type", AssetNode { load: Some(type_::load as Loader), children: &[] }),
] };
