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

//! A two-pass assembler for the Z16 16-bit instruction set architecture:
//! [`parser`] splits source text into line records, [`assembler`] builds
//! the symbol table and resolves every address and machine word across
//! its two passes, and [`emitter`] renders the results into a flat binary
//! image and a source listing. [`assemble`] threads the three stages
//! together behind a single entry point.

pub mod assembler;
pub mod ast;
pub mod emitter;
pub mod errors;
pub mod file_reader;
pub mod immediate;
pub mod instructions;
pub mod parser;

use std::path::Path;

use anyhow::{Context, Result};

use assembler::symbol_table::SymbolTable;
use ast::AssemblyLine;
use file_reader::FileReader;

/// Everything a successful assembly produces: the flat binary memory
/// image, the rendered listing text, the completed symbol table (for the
/// CLI's `-v` dump), and the annotated line records themselves.
pub struct AssemblyOutput {
    pub image: Vec<u8>,
    pub listing: String,
    pub symbols: SymbolTable,
    pub lines: Vec<AssemblyLine>,
}

/// Runs the full pipeline — read, parse, pass 1, pass 2, emit — against
/// `source_path` via `reader`. When `debug` is set, prints a line to
/// stderr at each pass boundary (spec.md §6, the CLI's `-d` flag).
pub fn assemble<F: FileReader>(source_path: &Path, reader: &F, debug: bool) -> Result<AssemblyOutput> {
    let source = reader
        .read_to_string(source_path)
        .with_context(|| format!("failed to read {}", source_path.display()))?;
    if debug {
        eprintln!("[debug] read {} bytes from {}", source.len(), source_path.display());
    }

    let mut lines = parser::parse_source(&source).context("failed during parsing stage")?;
    if debug {
        eprintln!("[debug] parsed {} source lines", lines.len());
    }

    let (symbols, final_section) = assembler::build_symbol_table(&mut lines).context("failed during pass 1 (address assignment)")?;
    if debug {
        eprintln!("[debug] pass 1 complete: {} symbols defined", symbols.sorted_entries().len());
    }

    assembler::generate_bytecode(&mut lines, &symbols, final_section).context("failed during pass 2 (encoding)")?;
    if debug {
        eprintln!("[debug] pass 2 complete");
    }

    let image = emitter::memory::build_image(&lines);
    let listing = emitter::listing::build_listing(&lines);
    if debug {
        eprintln!("[debug] emitted {} byte memory image", image.len());
    }

    Ok(AssemblyOutput { image, listing, symbols, lines })
}
