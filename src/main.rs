/*
Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use z16asm::assemble;
use z16asm::emitter::listing::{format_section_usage, format_symbol_table};
use z16asm::file_reader::AsmFileReader;

/// A two-pass assembler for the Z16 16-bit instruction set architecture.
#[derive(Parser)]
#[command(name = "z16asm", version)]
struct Cli {
    /// Print the symbol table and per-section byte usage after assembly.
    #[arg(short = 'v')]
    verbose: bool,

    /// Print a line to stderr at each pass boundary.
    #[arg(short = 'd')]
    debug: bool,

    /// Override the default binary output path (default: the source path
    /// with its final extension replaced by `.bin`).
    #[arg(short = 'o', value_name = "binary_file")]
    output: Option<PathBuf>,

    /// The assembly source file to assemble.
    sourcefile: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("z16asm: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let reader = AsmFileReader;
    let output = assemble(&cli.sourcefile, &reader, cli.debug)?;

    let binary_path = cli.output.clone().unwrap_or_else(|| replace_extension(&cli.sourcefile, "bin"));
    let listing_path = replace_extension(&cli.sourcefile, "lst");

    fs::write(&binary_path, &output.image).with_context(|| format!("failed to write {}", binary_path.display()))?;
    fs::write(&listing_path, &output.listing).with_context(|| format!("failed to write {}", listing_path.display()))?;

    if cli.verbose {
        print!("{}", format_symbol_table(&output.symbols));
        print!("{}", format_section_usage(&output.lines));
    }

    println!(
        "assembled {} -> {} ({} bytes), listing -> {}",
        cli.sourcefile.display(),
        binary_path.display(),
        output.image.len(),
        listing_path.display()
    );

    Ok(())
}

/// Replaces the source path's final extension with `ext`, appending it if
/// the source path has none (spec.md §6).
fn replace_extension(source: &Path, ext: &str) -> PathBuf {
    let mut path = source.to_path_buf();
    path.set_extension(ext);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_an_existing_extension() {
        assert_eq!(replace_extension(Path::new("prog.asm"), "bin"), PathBuf::from("prog.bin"));
    }

    #[test]
    fn appends_when_there_is_no_extension() {
        assert_eq!(replace_extension(Path::new("prog"), "lst"), PathBuf::from("prog.lst"));
    }
}
