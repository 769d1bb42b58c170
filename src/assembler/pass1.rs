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

//! Pass 1 — address assignment: walks the parsed lines in order, builds
//! the symbol table, switches sections, advances the location counters,
//! and records each line's section, address, directive, and element size.
//!
//! Instruction mnemonics are not validated here — only that a line sits
//! in `.text` is checked, so it can be sized at 2 bytes. Unknown mnemonics
//! surface in pass 2, where the instruction table lookup actually happens.

use crate::ast::{AssemblyLine, Directive, Operand, Section};
use crate::errors::AssemblyError;
use crate::immediate::parse_immediate;

use super::location::LocationState;
use super::symbol_table::SymbolTable;

/// Returns the completed symbol table and the section the walk ended on —
/// pass 2 resumes its own location state from that section rather than
/// `Section::None`, mirroring the reference assembler's single
/// process-wide `currentSection` surviving from pass 1 into pass 2.
pub fn build_symbol_table(lines: &mut [AssemblyLine]) -> Result<(SymbolTable, Section), AssemblyError> {
    let mut symbols = SymbolTable::new();
    let mut state = LocationState::new();

    for line in lines.iter_mut() {
        if let Some(label) = line.label.clone() {
            symbols.add(&label, state.current_address(), state.section(), line.line_number)?;
        }

        line.section = state.section();
        line.address = state.current_address();

        let Some(mnemonic) = line.mnemonic.clone() else {
            continue;
        };

        match mnemonic.strip_prefix('.') {
            Some(directive) => size_directive(directive, &mnemonic, line, &mut state)?,
            None if state.section() == Section::Text => {
                line.element_size = 2;
                state.advance(2);
            }
            None => {}
        }
    }

    Ok((symbols, state.section()))
}

fn size_directive(directive: &str, mnemonic: &str, line: &mut AssemblyLine, state: &mut LocationState) -> Result<(), AssemblyError> {
    match directive.to_ascii_lowercase().as_str() {
        "text" => state.select(Section::Text),
        "data" => state.select(Section::Data),
        "org" => {
            let value = parse_numeric_operand(line, mnemonic)?;
            state.set_current(value as u16);
            line.address = state.current_address();
            line.directive = Some(Directive::Org(Operand::Immediate(value)));
        }
        "asciiz" => {
            let text = require_operand(line, mnemonic)?;
            let content = strip_quotes(&text);
            // Provisional; pass 2 overrides this to 2 once it has packed
            // the string into 16-bit character-pair slots (see its
            // `.asciiz` arm). `loc_data` advances by the raw byte count
            // either way.
            line.element_size = 1;
            state.advance((content.len() + 1) as u16);
            line.directive = Some(Directive::Asciiz(content));
        }
        "byte" => {
            let values = parse_value_list(line, mnemonic)?;
            line.element_size = 1;
            state.advance(values.len() as u16);
            line.directive = Some(Directive::Byte(values));
        }
        "word" => {
            let values = parse_value_list(line, mnemonic)?;
            line.element_size = 2;
            state.advance((values.len() * 2) as u16);
            line.directive = Some(Directive::Word(values));
        }
        "space" => {
            let size = parse_numeric_operand(line, mnemonic)?;
            line.element_size = 1;
            state.advance(size as u16);
            line.directive = Some(Directive::Space(size));
        }
        _ => {}
    }
    Ok(())
}

fn require_operand(line: &AssemblyLine, mnemonic: &str) -> Result<String, AssemblyError> {
    match line.operands.as_deref() {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(AssemblyError::MissingOperand {
            line: line.line_number,
            context: mnemonic.to_string(),
        }),
    }
}

/// A malformed numeric literal is reported as `MissingOperand` — spec.md
/// §7 enumerates no dedicated "malformed number" kind, and SPEC_FULL.md
/// §4.2 resolves this by folding it into an existing kind: the directive
/// did not receive a usable numeric value, the same failure shape as
/// receiving no operand at all.
fn parse_numeric_operand(line: &AssemblyLine, mnemonic: &str) -> Result<i32, AssemblyError> {
    let text = require_operand(line, mnemonic)?;
    parse_immediate(text.trim()).ok_or_else(|| AssemblyError::MissingOperand {
        line: line.line_number,
        context: format!("{mnemonic} (malformed numeric literal '{text}')"),
    })
}

/// Parses a `.byte`/`.word` value list. A token that isn't a numeric
/// literal is kept as an unresolved label (e.g. a jump table of code
/// addresses) and resolved once pass 2 has the completed symbol table.
fn parse_value_list(line: &AssemblyLine, mnemonic: &str) -> Result<Vec<Operand>, AssemblyError> {
    let text = require_operand(line, mnemonic)?;
    Ok(text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match parse_immediate(token) {
            Some(value) => Operand::Immediate(value),
            None => Operand::Label(token.to_string()),
        })
        .collect())
}

/// Strips a single pair of surrounding double quotes, if present.
fn strip_quotes(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => inner.to_string(),
        None => trimmed.to_string(),
    }
}
