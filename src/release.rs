//! Release mode: asset contents are baked into the generated source.
//!
//! The two configuration axes select one of four [`EmitStrategy`] entries
//! from a fixed table. Each entry knows which helpers the module needs,
//! how to turn the file into a `static DATA: &[u8]` literal and how the
//! generated `bytes()` accessor hands the data out.

use crate::error::SynthesisError;
use crate::escape::{HexWriter, quoted_literal};
use crate::options::{CopySemantics, Encoding, SynthesisOptions};
use crate::types::Asset;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::time::UNIX_EPOCH;

const GUNZIP_HELPER: &str = r#"fn gunzip(data: &[u8], name: &str) -> Result<Vec<u8>, AssetError> {
    let mut decoder = ::flate2::read::GzDecoder::new(data);
    let mut buf = Vec::new();
    ::std::io::Read::read_to_end(&mut decoder, &mut buf).map_err(|source| AssetError::Decode {
        name: name.to_string(),
        source,
    })?;
    Ok(buf)
}

"#;

const GUNZIP_EVERY_CALL: &str = r#"    pub(super) fn bytes() -> Result<::std::borrow::Cow<'static, [u8]>, super::AssetError> {
        super::gunzip(DATA, NAME).map(::std::borrow::Cow::Owned)
    }
"#;

const GUNZIP_ONCE: &str = r#"    static CACHE: ::std::sync::OnceLock<Vec<u8>> = ::std::sync::OnceLock::new();

    pub(super) fn bytes() -> Result<::std::borrow::Cow<'static, [u8]>, super::AssetError> {
        if let Some(cached) = CACHE.get() {
            return Ok(::std::borrow::Cow::Borrowed(cached.as_slice()));
        }
        let decoded = super::gunzip(DATA, NAME)?;
        Ok(::std::borrow::Cow::Borrowed(CACHE.get_or_init(|| decoded).as_slice()))
    }
"#;

const BORROW_STATIC: &str = r#"    pub(super) fn bytes() -> Result<::std::borrow::Cow<'static, [u8]>, super::AssetError> {
        Ok(::std::borrow::Cow::Borrowed(DATA))
    }
"#;

const COPY_STATIC: &str = r#"    pub(super) fn bytes() -> Result<::std::borrow::Cow<'static, [u8]>, super::AssetError> {
        Ok(::std::borrow::Cow::Owned(DATA.to_vec()))
    }
"#;

type DataWriter = fn(&mut dyn Write, &mut dyn Read) -> io::Result<()>;

/// One of the four release-mode code shapes.
pub struct EmitStrategy {
    pub encoding: Encoding,
    pub copy: CopySemantics,
    helpers: &'static str,
    write_data: DataWriter,
    accessor: &'static str,
}

/// Indexed by `encoding * 2 + copy`.
static STRATEGIES: [EmitStrategy; 4] = [
    EmitStrategy {
        encoding: Encoding::Compressed,
        copy: CopySemantics::ZeroCopy,
        helpers: GUNZIP_HELPER,
        write_data: write_gzip_hex,
        accessor: GUNZIP_ONCE,
    },
    EmitStrategy {
        encoding: Encoding::Compressed,
        copy: CopySemantics::OwnedCopy,
        helpers: GUNZIP_HELPER,
        write_data: write_gzip_hex,
        accessor: GUNZIP_EVERY_CALL,
    },
    EmitStrategy {
        encoding: Encoding::Uncompressed,
        copy: CopySemantics::ZeroCopy,
        helpers: "",
        write_data: write_raw_hex,
        accessor: BORROW_STATIC,
    },
    EmitStrategy {
        encoding: Encoding::Uncompressed,
        copy: CopySemantics::OwnedCopy,
        helpers: "",
        write_data: write_quoted,
        accessor: COPY_STATIC,
    },
];

impl EmitStrategy {
    pub fn select(encoding: Encoding, copy: CopySemantics) -> &'static EmitStrategy {
        &STRATEGIES[encoding as usize * 2 + copy as usize]
    }

    pub fn for_options(options: &SynthesisOptions) -> &'static EmitStrategy {
        Self::select(options.encoding(), options.copy_semantics())
    }

    /// Writes the submodule of one asset, reading its file from disk.
    fn write_asset(
        &self,
        out: &mut dyn Write,
        options: &SynthesisOptions,
        asset: &Asset,
    ) -> Result<(), SynthesisError> {
        let failed = |e| SynthesisError::emit(&asset.name, e);
        #[cfg(feature = "logging")]
        tracing::debug!("Embedding {} as {}", asset.path.display(), asset.name);
        let file = File::open(&asset.path).map_err(failed)?;
        let mut reader = BufReader::new(file);
        write!(out, "mod {} {{\n    const NAME: &str = {:?};\n\n    static DATA: &[u8] = ", asset.func, asset.name)
            .map_err(failed)?;
        (self.write_data)(out, &mut reader).map_err(failed)?;
        out.write_all(b";\n\n").map_err(failed)?;
        out.write_all(self.accessor.as_bytes()).map_err(failed)?;
        let info = FileInfo::read(options, asset).map_err(failed)?;
        write!(
            out,
            r#"
    pub(super) fn load() -> Result<super::EmbeddedAsset, super::AssetError> {{
        let bytes = bytes()?;
        let info = super::AssetInfo {{
            name: NAME,
            size: {},
            mode: {:#o},
            mod_time: {},
        }};
        Ok(super::EmbeddedAsset {{ bytes, info }})
    }}
}}

"#,
            info.size, info.mode, info.mod_time
        )
        .map_err(failed)
    }
}

fn write_gzip_hex(out: &mut dyn Write, input: &mut dyn Read) -> io::Result<()> {
    out.write_all(b"b\"")?;
    let mut gz = GzEncoder::new(HexWriter::new(&mut *out), Compression::default());
    io::copy(input, &mut gz)?;
    gz.finish()?;
    out.write_all(b"\"")
}

fn write_raw_hex(out: &mut dyn Write, input: &mut dyn Read) -> io::Result<()> {
    out.write_all(b"b\"")?;
    io::copy(input, &mut HexWriter::new(&mut *out))?;
    out.write_all(b"\"")
}

fn write_quoted(out: &mut dyn Write, input: &mut dyn Read) -> io::Result<()> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    out.write_all(quoted_literal(&data).as_bytes())
}

/// Size, mode and modification time recorded for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    pub size: u64,
    pub mode: u32,
    pub mod_time: i64,
}

impl FileInfo {
    /// Reads the metadata of the asset file, then applies `no_metadata`
    /// zeroing and the `mode`/`mod_time` overrides, in that order.
    pub fn read(options: &SynthesisOptions, asset: &Asset) -> io::Result<Self> {
        let meta = fs::metadata(&asset.path)?;
        let mut info = if options.no_metadata {
            FileInfo {
                size: 0,
                mode: 0,
                mod_time: 0,
            }
        } else {
            FileInfo {
                size: meta.len(),
                mode: file_mode(&meta),
                mod_time: unix_time(&meta),
            }
        };
        if let Some(mode) = options.mode.filter(|m| *m > 0) {
            info.mode = mode & 0o777;
        }
        if let Some(mod_time) = options.mod_time.filter(|t| *t > 0) {
            info.mod_time = mod_time;
        }
        Ok(info)
    }
}

#[cfg(unix)]
fn file_mode(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn file_mode(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o644 }
}

fn unix_time(meta: &fs::Metadata) -> i64 {
    match meta.modified().map(|t| t.duration_since(UNIX_EPOCH)) {
        Ok(Ok(since)) => since.as_secs() as i64,
        Ok(Err(before)) => -(before.duration().as_secs() as i64),
        Err(_) => 0,
    }
}

pub(crate) fn write_release(
    out: &mut dyn Write,
    options: &SynthesisOptions,
    assets: &[Asset],
) -> Result<(), SynthesisError> {
    let strategy = EmitStrategy::for_options(options);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Embedding {} assets ({:?}, {:?})",
        assets.len(),
        strategy.encoding,
        strategy.copy
    );
    out.write_all(strategy.helpers.as_bytes())
        .map_err(SynthesisError::Write)?;
    for asset in assets {
        strategy.write_asset(out, options, asset)?;
    }
    Ok(())
}
