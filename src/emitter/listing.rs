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

//! Renders the human-readable listing (spec.md §4.7): two header lines
//! followed by one record per source line — line number, resolved
//! address, encoded code slots, and the verbatim source text — plus the
//! `-v` verbose dump of the symbol table and per-section byte usage.

use crate::ast::{AssemblyLine, Section};
use crate::assembler::symbol_table::SymbolTable;

const CODE_COLUMN_WIDTH: usize = 18;

/// Builds the full listing text for a completed assembly.
pub fn build_listing(lines: &[AssemblyLine]) -> String {
    let mut out = String::new();
    out.push_str("Z16 Assembler Listing\n");
    out.push_str("Line  Address  Code                Source\n");

    for line in lines {
        let address = match line.section {
            Section::None => "       ".to_string(),
            _ => format!("0x{:04X}", line.address),
        };
        let code = format_code(&line.code, line.element_size);
        out.push_str(&format!(
            "{:>4}  {:<7}  {:<width$}  {}\n",
            line.line_number,
            address,
            code,
            line.original,
            width = CODE_COLUMN_WIDTH
        ));
    }

    out
}

/// Formats one line's `code[]` slots as 2-hex-digit bytes or 4-hex-digit
/// words, space-separated, per the element size that line was emitted at.
fn format_code(code: &[u16], element_size: u8) -> String {
    code.iter()
        .map(|word| match element_size {
            1 => format!("{:02X}", word & 0xFF),
            _ => format!("{:04X}", word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The `-v` symbol table dump: one `name = 0xADDR (section)` line per
/// label, in the table's deterministic sorted order.
pub fn format_symbol_table(symbols: &SymbolTable) -> String {
    let mut out = String::from("Symbol table:\n");
    for (name, symbol) in symbols.sorted_entries() {
        out.push_str(&format!("  {name:<24} = 0x{:04X}  ({})\n", symbol.address, section_name(symbol.section)));
    }
    out
}

/// The `-v` per-section byte usage: the highest address reached in each
/// of `.text` and `.data`.
pub fn format_section_usage(lines: &[AssemblyLine]) -> String {
    let text_end = section_end(lines, Section::Text);
    let data_end = section_end(lines, Section::Data);
    format!("Section usage:\n  .text = {text_end} bytes\n  .data = {data_end} bytes\n")
}

fn section_end(lines: &[AssemblyLine], section: Section) -> u16 {
    lines
        .iter()
        .filter(|line| line.section == section)
        .map(|line| line.address.wrapping_add((line.code_count() * line.element_size as usize) as u16))
        .max()
        .unwrap_or(0)
}

fn section_name(section: Section) -> &'static str {
    match section {
        Section::None => "none",
        Section::Text => ".text",
        Section::Data => ".data",
    }
}
