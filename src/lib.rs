//! # Synthesis
//!
//! `synthesis` is an asset compiler: it walks one or more input roots and writes a
//! Rust module that embeds the files it found, together with lookup functions
//! (`asset`, `must_asset`, `asset_info`, `asset_names`, `asset_dir`) and a static
//! directory tree. The consuming program is built as a single artifact that does not
//! depend on loose files at run time.
//!
//! In release mode the contents are baked into the source, optionally gzip-compressed
//! and optionally handed out without copying. In debug mode the generated accessors
//! read the original files at call time, so edits show up without regenerating.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use synthesis::{SynthesisBuilder, translate};
//!
//! let options = SynthesisBuilder::new()
//!     .input("web/static", true)
//!     .ignore_patterns(vec![r".*\.map".into()])
//!     .package("static_files")
//!     .output("src/static_files.rs")
//!     .build();
//!
//! let written = translate(options).expect("Failed to generate assets");
//! println!("Wrote {}", written.display());
//! ```
//!
//! The generated file is then declared as a module (`mod static_files;`). Compressed
//! output needs `flate2` in the consuming crate.

mod debug;
mod emit;
mod engine;
mod error;
mod escape;
mod ident;
mod options;
pub mod output;
mod release;
mod toc;
mod tree;
mod types;

pub use emit::emit;
pub use engine::{Scanner, manifest, scan, translate};
pub use error::SynthesisError;
pub use escape::{HexWriter, quoted_literal};
pub use ident::{IdentifierAllocator, base_identifier};
pub use options::{CopySemantics, Encoding, InputConfig, SynthesisBuilder, SynthesisOptions};
pub use release::{EmitStrategy, FileInfo};
pub use tree::{AssetTree, TreeNode};
pub use types::{Asset, Manifest};
