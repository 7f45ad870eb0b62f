//! Command-line interface for synthesis.
//!
//! Each positional input is a file or directory; a trailing `/...` walks the
//! directory recursively. The generated module is written to `-o` (default
//! `<pkg>.rs`), or the scan manifest is printed with `--manifest`.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use synthesis::{InputConfig, SynthesisBuilder, SynthesisOptions, manifest, output, translate};

/// synthesis: embed files into a generated Rust module
#[derive(Parser)]
#[command(name = "synthesis", version, about, long_about = None)]
struct Cli {
    /// Input files or directories (`dir/...` for recursive)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Do not embed the assets; the generated accessors read them from disk
    #[arg(long)]
    debug: bool,

    /// Like --debug, but paths are relative to a root set at run time
    #[arg(long)]
    dev: bool,

    /// cfg predicate gating the generated module, e.g. `feature = "embed"`
    #[arg(long, default_value = "")]
    tags: String,

    /// Path prefix to strip off asset names
    #[arg(long, default_value = "")]
    prefix: String,

    /// Module name of the generated code
    #[arg(long = "pkg", default_value = "assets")]
    package: String,

    /// Hand out views over the embedded data instead of copies
    #[arg(long)]
    nomemcopy: bool,

    /// Do not gzip-compress the embedded data
    #[arg(long)]
    nocompress: bool,

    /// Do not preserve size, mode and modification time
    #[arg(long)]
    nometadata: bool,

    /// Also generate the `AssetFs` file-system adapter
    #[arg(long = "fs")]
    http_file_system: bool,

    /// File mode override for all assets (octal)
    #[arg(long, value_parser = parse_mode)]
    mode: Option<u32>,

    /// Modification time override for all assets (unix seconds)
    #[arg(long)]
    modtime: Option<i64>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Regex of absolute paths to ignore (can be repeated)
    #[arg(long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Print the JSON manifest of what would be embedded and exit
    #[arg(long)]
    manifest: bool,

    /// Pretty-print the manifest
    #[arg(short, long)]
    pretty: bool,
}

/// Parse an octal file mode such as `644` or `0o644`.
fn parse_mode(s: &str) -> Result<u32, String> {
    let digits = s.trim_start_matches("0o");
    u32::from_str_radix(digits, 8).map_err(|e| format!("invalid file mode '{}': {}", s, e))
}

impl Cli {
    fn into_options(self) -> (SynthesisOptions, bool, bool) {
        let inputs = self.inputs.iter().map(|arg| InputConfig::parse(arg)).collect();
        let mut builder = SynthesisBuilder::new()
            .inputs(inputs)
            .ignore_patterns(self.ignore_patterns)
            .debug(self.debug)
            .dev(self.dev)
            .no_compress(self.nocompress)
            .no_mem_copy(self.nomemcopy)
            .no_metadata(self.nometadata)
            .http_file_system(self.http_file_system)
            .mode(self.mode)
            .mod_time(self.modtime)
            .package(self.package)
            .prefix(self.prefix)
            .tags(self.tags);
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        (builder.build(), self.manifest, self.pretty)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, print_manifest, pretty) = cli.into_options();

    if print_manifest {
        run_manifest(&options, pretty);
        return;
    }

    match translate(options) {
        Ok(path) => eprintln!("Wrote {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn run_manifest(options: &SynthesisOptions, pretty: bool) {
    let result = manifest(options).and_then(|m| output::format_manifest(&m, pretty));
    match result {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
