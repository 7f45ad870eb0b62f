//! Debug and dev modes: the generated accessors read the files at call time.

use crate::error::SynthesisError;
use crate::options::SynthesisOptions;
use crate::types::Asset;
use std::io::Write;

const DISK_HELPERS: &str = r#"fn read_from_disk(path: &::std::path::Path, name: &'static str) -> Result<EmbeddedAsset, AssetError> {
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

"#;

const ROOT_DIR_HELPERS: &str = r#"static ROOT_DIR: ::std::sync::OnceLock<::std::path::PathBuf> = ::std::sync::OnceLock::new();

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

"#;

pub(crate) fn write_debug(
    out: &mut dyn Write,
    options: &SynthesisOptions,
    assets: &[Asset],
) -> Result<(), SynthesisError> {
    out.write_all(DISK_HELPERS.as_bytes())
        .map_err(SynthesisError::Write)?;
    if options.dev {
        out.write_all(ROOT_DIR_HELPERS.as_bytes())
            .map_err(SynthesisError::Write)?;
    }
    for asset in assets {
        write_debug_asset(out, options, asset)?;
    }
    Ok(())
}

fn write_debug_asset(
    out: &mut dyn Write,
    options: &SynthesisOptions,
    asset: &Asset,
) -> Result<(), SynthesisError> {
    let path_expr = if options.dev {
        format!("&super::root_dir().join({:?})", asset.name)
    } else {
        let path = asset
            .path
            .to_str()
            .ok_or_else(|| SynthesisError::InvalidName(asset.path.clone()))?;
        format!("::std::path::Path::new({path:?})")
    };
    write!(
        out,
        r#"mod {func} {{
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {{
        super::read_from_disk({path_expr}, {name:?})
    }}
}}

"#,
        func = asset.func,
        name = asset.name,
    )
    .map_err(|e| SynthesisError::emit(&asset.name, e))
}
