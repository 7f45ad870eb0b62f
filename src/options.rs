use crate::error::SynthesisError;
use crate::ident::is_identifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
/// One input root and whether its subdirectories are walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
    pub recursive: bool,
}
impl InputConfig {
    pub fn new(path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
        }
    }
    /// Parses the command-line form, where a trailing `/...` marks a recursive root.
    ///
    /// ```
    /// use synthesis::InputConfig;
    /// assert_eq!(InputConfig::parse("web/static/..."), InputConfig::new("web/static", true));
    /// assert_eq!(InputConfig::parse("web/index.html"), InputConfig::new("web/index.html", false));
    /// ```
    pub fn parse(arg: &str) -> Self {
        match arg.strip_suffix("/...") {
            Some(path) if path.is_empty() => Self::new("/", true),
            Some(path) => Self::new(path, true),
            None => Self::new(arg, false),
        }
    }
}
/// Whether payloads are gzip-compressed at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    Compressed = 0,
    Uncompressed = 1,
}
/// Whether the generated accessor hands out a view over the embedded
/// storage or a fresh buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopySemantics {
    ZeroCopy = 0,
    OwnedCopy = 1,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisOptions {
    pub input: Vec<InputConfig>,
    pub ignore: Vec<String>,
    pub debug: bool,
    pub dev: bool,
    pub no_compress: bool,
    pub no_mem_copy: bool,
    pub no_metadata: bool,
    pub http_file_system: bool,
    pub mode: Option<u32>,
    pub mod_time: Option<i64>,
    pub package: String,
    pub prefix: String,
    pub output: PathBuf,
    pub tags: String,
}
impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            ignore: Vec::new(),
            debug: false,
            dev: false,
            no_compress: false,
            no_mem_copy: false,
            no_metadata: false,
            http_file_system: false,
            mode: None,
            mod_time: None,
            package: "assets".to_string(),
            prefix: String::new(),
            output: PathBuf::new(),
            tags: String::new(),
        }
    }
}
impl SynthesisOptions {
    pub fn encoding(&self) -> Encoding {
        if self.no_compress {
            Encoding::Uncompressed
        } else {
            Encoding::Compressed
        }
    }
    pub fn copy_semantics(&self) -> CopySemantics {
        if self.no_mem_copy {
            CopySemantics::ZeroCopy
        } else {
            CopySemantics::OwnedCopy
        }
    }
    /// Debug and dev builds read assets from disk at access time.
    pub fn reads_from_disk(&self) -> bool {
        self.debug || self.dev
    }
    /// Checks the options and resolves the output path.
    ///
    /// An empty output becomes `<package>.rs`; an output naming an existing
    /// directory gets `<package>.rs` appended.
    pub fn validate(&mut self) -> Result<(), SynthesisError> {
        if !is_identifier(&self.package) {
            return Err(SynthesisError::Config(format!(
                "package name '{}' is not a valid Rust identifier",
                self.package
            )));
        }
        if self.input.is_empty() {
            return Err(SynthesisError::Config("no input paths given".to_string()));
        }
        for input in &self.input {
            std::fs::metadata(&input.path).map_err(|e| SynthesisError::io(&input.path, e))?;
        }
        let file_name = format!("{}.rs", self.package);
        if self.output.as_os_str().is_empty() {
            self.output = PathBuf::from(file_name);
        } else if self.output.is_dir() {
            self.output = self.output.join(file_name);
        }
        Ok(())
    }
    pub fn output_path(&self) -> &Path {
        &self.output
    }
}
#[derive(Debug, Default)]
pub struct SynthesisBuilder {
    options: SynthesisOptions,
}
impl SynthesisBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn input(mut self, path: impl Into<PathBuf>, recursive: bool) -> Self {
        self.options.input.push(InputConfig::new(path, recursive));
        self
    }
    pub fn inputs(mut self, inputs: Vec<InputConfig>) -> Self {
        self.options.input = inputs;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore = patterns;
        self
    }
    pub fn debug(mut self, yes: bool) -> Self {
        self.options.debug = yes;
        self
    }
    pub fn dev(mut self, yes: bool) -> Self {
        self.options.dev = yes;
        self
    }
    pub fn no_compress(mut self, yes: bool) -> Self {
        self.options.no_compress = yes;
        self
    }
    pub fn no_mem_copy(mut self, yes: bool) -> Self {
        self.options.no_mem_copy = yes;
        self
    }
    pub fn no_metadata(mut self, yes: bool) -> Self {
        self.options.no_metadata = yes;
        self
    }
    pub fn http_file_system(mut self, yes: bool) -> Self {
        self.options.http_file_system = yes;
        self
    }
    pub fn mode(mut self, mode: Option<u32>) -> Self {
        self.options.mode = mode;
        self
    }
    pub fn mod_time(mut self, mod_time: Option<i64>) -> Self {
        self.options.mod_time = mod_time;
        self
    }
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.options.package = package.into();
        self
    }
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = prefix.into();
        self
    }
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.options.output = output.into();
        self
    }
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.options.tags = tags.into();
        self
    }
    pub fn build(self) -> SynthesisOptions {
        self.options
    }
}
