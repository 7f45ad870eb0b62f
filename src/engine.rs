use crate::emit::emit;
use crate::error::SynthesisError;
use crate::ident::IdentifierAllocator;
use crate::options::{InputConfig, SynthesisOptions};
use crate::tree::AssetTree;
use crate::types::{Asset, Manifest};
use ignore::WalkBuilder;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
#[derive(Debug, Clone, Default)]
struct IgnoreSet {
    patterns: Vec<Regex>,
}
impl IgnoreSet {
    fn new(patterns: &[String]) -> Result<Self, SynthesisError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
                    SynthesisError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }
    fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
    /// Patterns must match the whole absolute path.
    fn is_ignored(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let text = absolute.to_string_lossy();
        self.patterns.iter().any(|re| re.is_match(&text))
    }
}
fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        _ => false,
    }
}
/// Walks input roots and collects the files to embed.
///
/// The scanner owns the state shared across roots: the identifier
/// allocator, the set of canonical paths already visited, and the names
/// handed out so far. Symbolic links are followed; a canonical path seen
/// twice is skipped, which ends symlink cycles and drops files reachable
/// through more than one link.
#[derive(Debug)]
pub struct Scanner {
    ignore: IgnoreSet,
    prefix: String,
    identifiers: IdentifierAllocator,
    visited: HashSet<PathBuf>,
    names: HashMap<String, PathBuf>,
    assets: Vec<Asset>,
}
impl Scanner {
    pub fn new(ignore_patterns: &[String], prefix: &str) -> Result<Self, SynthesisError> {
        Ok(Self {
            ignore: IgnoreSet::new(ignore_patterns)?,
            prefix: prefix.replace('\\', "/").trim_matches('/').to_string(),
            identifiers: IdentifierAllocator::new(),
            visited: HashSet::new(),
            names: HashMap::new(),
            assets: Vec::new(),
        })
    }
    fn walker(&self, input: &InputConfig) -> ignore::Walk {
        let mut builder = WalkBuilder::new(&input.path);
        builder
            .standard_filters(false)
            .follow_links(true)
            .max_depth(if input.recursive { None } else { Some(1) })
            .sort_by_file_name(|a, b| a.cmp(b));
        if !self.ignore.is_empty() {
            let ignore = self.ignore.clone();
            builder.filter_entry(move |entry| {
                let ignored = ignore.is_ignored(entry.path());
                #[cfg(feature = "logging")]
                if ignored {
                    tracing::debug!("Ignored: {}", entry.path().display());
                }
                !ignored
            });
        }
        builder.build()
    }
    /// Scans one root, appending its files in sorted walk order.
    ///
    /// # Errors
    ///
    /// Any walk failure (missing root, unreadable directory, broken link)
    /// aborts the scan. Symlink loops are not errors.
    pub fn scan_input(&mut self, input: &InputConfig) -> Result<(), SynthesisError> {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Scanning {} (recursive: {})",
            input.path.display(),
            input.recursive
        );
        if self.ignore.is_ignored(&input.path) {
            #[cfg(feature = "logging")]
            tracing::debug!("Input root ignored: {}", input.path.display());
            return Ok(());
        }
        for result in self.walker(input) {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) if is_loop(&err) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping symlink loop: {}", err);
                    continue;
                }
                Err(err) => return Err(SynthesisError::Walk(err.to_string())),
            };
            let path = entry.path();
            let canonical = fs::canonicalize(path).map_err(|e| SynthesisError::io(path, e))?;
            if !self.visited.insert(canonical) {
                #[cfg(feature = "logging")]
                tracing::debug!("Already visited: {}", path.display());
                continue;
            }
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if !is_file {
                continue;
            }
            self.add_file(&input.path, path)?;
        }
        Ok(())
    }
    fn add_file(&mut self, root: &Path, path: &Path) -> Result<(), SynthesisError> {
        let name = self.asset_name(root, path)?;
        if let Some(first) = self.names.get(&name) {
            return Err(SynthesisError::NameCollision {
                name,
                first: first.clone(),
                second: path.to_path_buf(),
            });
        }
        let absolute = std::path::absolute(path).map_err(|e| SynthesisError::io(path, e))?;
        self.names.insert(name.clone(), absolute.clone());
        let func = self.identifiers.allocate(&name);
        self.assets.push(Asset {
            path: absolute,
            name,
            func,
        });
        Ok(())
    }
    /// Derives the logical name: the path relative to its root, joined with
    /// `/`, minus the configured prefix. A root that is a file is named by
    /// its base name.
    fn asset_name(&self, root: &Path, path: &Path) -> Result<String, SynthesisError> {
        let invalid = || SynthesisError::InvalidName(path.to_path_buf());
        let relative = path.strip_prefix(root).unwrap_or(path);
        let mut segments = Vec::new();
        for component in relative.components() {
            if let Component::Normal(part) = component {
                segments.push(part.to_str().ok_or_else(invalid)?);
            }
        }
        if segments.is_empty() {
            let base = path.file_name().ok_or_else(invalid)?;
            segments.push(base.to_str().ok_or_else(invalid)?);
        }
        let mut name = segments.join("/");
        if !self.prefix.is_empty() && name.starts_with(&self.prefix) {
            name = name[self.prefix.len()..].trim_start_matches('/').to_string();
        }
        if name.is_empty() {
            return Err(invalid());
        }
        Ok(name)
    }
    pub fn finish(self) -> Vec<Asset> {
        self.assets
    }
}
/// Scans every input root with one shared [`Scanner`].
pub fn scan(
    inputs: &[InputConfig],
    ignore_patterns: &[String],
    prefix: &str,
) -> Result<Vec<Asset>, SynthesisError> {
    let mut scanner = Scanner::new(ignore_patterns, prefix)?;
    for input in inputs {
        scanner.scan_input(input)?;
    }
    Ok(scanner.finish())
}
/// Scans the inputs and builds the index without generating code.
pub fn manifest(options: &SynthesisOptions) -> Result<Manifest, SynthesisError> {
    let assets = scan(&options.input, &options.ignore, &options.prefix)?;
    let tree = AssetTree::build(&assets)?.to_node();
    Ok(Manifest { assets, tree })
}
/// Runs the whole pipeline and writes the generated module.
///
/// The code is written to a temporary file beside the destination and only
/// renamed into place once emission succeeded, so a failed run never leaves
/// a truncated module behind. Returns the path written.
pub fn translate(mut options: SynthesisOptions) -> Result<PathBuf, SynthesisError> {
    options.validate()?;
    let assets = scan(&options.input, &options.ignore, &options.prefix)?;
    let tree = AssetTree::build(&assets)?;
    let output = options.output_path().to_path_buf();
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut file = NamedTempFile::new_in(&dir).map_err(|e| SynthesisError::io(&dir, e))?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        emit(&options, &tree, &assets, &mut writer)?;
        writer.flush().map_err(|e| SynthesisError::io(&output, e))?;
    }
    file.persist(&output)
        .map_err(|e| SynthesisError::io(&output, e.error))?;
    #[cfg(feature = "logging")]
    tracing::debug!("Wrote {} assets to {}", assets.len(), output.display());
    Ok(output)
}
