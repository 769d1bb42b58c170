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

//! Pass 2 — encoding: walks the line records pass 1 built, resolves
//! label references against the completed symbol table, computes
//! PC-relative branch/jump offsets, and fills in each line's `code[]`.
//!
//! Resumes its own [`LocationState`] from the section pass 1's walk
//! ended on (see [`super::pass1::build_symbol_table`]) rather than
//! resetting to `Section::None` — this reproduces the reference
//! assembler's single `currentSection` global surviving unreset between
//! passes, including its `.org` re-application quirk below.

use crate::ast::{AssemblyLine, Directive, Operand, Section};
use crate::errors::AssemblyError;
use crate::instructions;

use super::encoder;
use super::location::LocationState;
use super::symbol_table::SymbolTable;

pub fn generate_bytecode(lines: &mut [AssemblyLine], symbols: &SymbolTable, resume_section: Section) -> Result<(), AssemblyError> {
    let mut state = LocationState::with_section(resume_section);

    for line in lines.iter_mut() {
        let Some(mnemonic) = line.mnemonic.clone() else {
            continue;
        };

        if let Some(directive) = mnemonic.strip_prefix('.') {
            encode_directive(directive, line, &mut state, symbols)?;
            continue;
        }

        // Unlike pass 1's element-sizing, the reference encoder does not
        // gate this on `section == TEXT` — any non-directive mnemonic is
        // looked up and encoded regardless of the section it sits in, so
        // an unrecognized mnemonic is still rejected here even if pass 1
        // never sized it. The PC for branch/jump offsets is this line's
        // own pass-1-recorded `address`, not pass 2's running counter —
        // the two agree except across the `.org` quirk above.
        let def = instructions::lookup(&mnemonic).ok_or_else(|| AssemblyError::UnknownMnemonic {
            line: line.line_number,
            name: mnemonic.clone(),
        })?;

        let address = line.address;
        let instruction = encoder::build_instruction(def, line.operands.as_deref(), line.line_number)?;
        let word = encoder::encode(&instruction, def, address, symbols, line.line_number)?;

        line.instruction = Some(instruction);
        line.code = vec![word];
        line.element_size = 2;
        state.advance_text(2);
    }

    Ok(())
}

fn encode_directive(directive: &str, line: &mut AssemblyLine, state: &mut LocationState, symbols: &SymbolTable) -> Result<(), AssemblyError> {
    match directive.to_ascii_lowercase().as_str() {
        "text" => state.select(Section::Text),
        "data" => state.select(Section::Data),
        // Preserved verbatim from the reference: only re-applies when
        // pass 2's own section cursor matches what pass 1 recorded for
        // this line — see the module doc comment above.
        "org" => {
            if state.section() == line.section {
                state.set_current(line.address);
            }
        }
        "asciiz" => {
            if let Some(Directive::Asciiz(content)) = &line.directive {
                let advance = (content.len() + 1) as u16;
                line.code = pack_asciiz(content);
                // Pass 1 sizes `.asciiz` by raw byte count (spec.md §4.5),
                // but each `code[]` slot here holds two packed characters
                // (spec.md §3) — the memory image stride between slots is
                // 2 bytes, not 1, so this overrides pass 1's tentative
                // `element_size` now that the packed slot count is known.
                line.element_size = 2;
                state.advance(advance);
            }
        }
        "byte" => {
            if let Some(Directive::Byte(values)) = line.directive.clone() {
                let line_number = line.line_number;
                line.code = values
                    .iter()
                    .map(|operand| resolve_operand(operand, symbols, line_number).map(|value| (value as u16) & 0xFF))
                    .collect::<Result<Vec<u16>, AssemblyError>>()?;
                state.advance(line.code.len() as u16);
            }
        }
        "word" => {
            if let Some(Directive::Word(values)) = line.directive.clone() {
                let line_number = line.line_number;
                line.code = values
                    .iter()
                    .map(|operand| resolve_operand(operand, symbols, line_number).map(|value| value as u16))
                    .collect::<Result<Vec<u16>, AssemblyError>>()?;
                state.advance((line.code.len() * 2) as u16);
            }
        }
        "space" => {
            if let Some(Directive::Space(size)) = line.directive {
                state.advance(size as u16);
            }
        }
        _ => {}
    }
    Ok(())
}

fn resolve_operand(operand: &Operand, symbols: &SymbolTable, line: usize) -> Result<i32, AssemblyError> {
    match operand {
        Operand::Immediate(value) => Ok(*value),
        Operand::Label(name) => Ok(symbols.lookup(name, line)?.address as i32),
    }
}

/// Packs a NUL-terminated byte string two bytes per 16-bit slot,
/// little-endian (low byte first); an odd-length string leaves the high
/// byte of its final slot as 0.
fn pack_asciiz(content: &str) -> Vec<u16> {
    let mut bytes: Vec<u8> = content.bytes().collect();
    bytes.push(0);
    bytes
        .chunks(2)
        .map(|chunk| {
            let low = chunk[0] as u16;
            let high = chunk.get(1).copied().unwrap_or(0) as u16;
            low | (high << 8)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::pass1::build_symbol_table;
    use crate::parser::parse_source;

    fn assemble(source: &str) -> Vec<AssemblyLine> {
        let mut lines = parse_source(source).unwrap();
        let (symbols, final_section) = build_symbol_table(&mut lines).unwrap();
        generate_bytecode(&mut lines, &symbols, final_section).unwrap();
        lines
    }

    #[test]
    fn add_matches_the_worked_scenario() {
        let lines = assemble("add x1, x2\n");
        assert_eq!(lines[0].code, vec![0x0440]);
    }

    #[test]
    fn self_branch_matches_the_worked_scenario() {
        let lines = assemble("start: beq x0, start\n");
        assert_eq!(lines[0].code, vec![0xF002]);
    }

    #[test]
    fn asciiz_empty_string_emits_a_single_nul() {
        let lines = assemble(".data\n.asciiz \"\"\n");
        assert_eq!(lines[1].code, vec![0x0000]);
    }

    #[test]
    fn asciiz_odd_length_pads_high_byte_with_zero() {
        let lines = assemble(".data\n.asciiz \"abc\"\n");
        // 'a','b','c','\0' -> ('a'|'b'<<8), ('c'|0<<8)
        assert_eq!(lines[1].code, vec![('a' as u16) | (('b' as u16) << 8), 'c' as u16]);
    }

    #[test]
    fn asciiz_slots_are_two_bytes_wide() {
        // Each code[] slot packs two characters; the memory image needs a
        // 2-byte stride between slots, not the 1 pass 1 provisionally sets.
        let lines = assemble(".data\n.asciiz \"abc\"\nnext: .byte 0\n");
        assert_eq!(lines[1].element_size, 2);
        assert_eq!(lines[2].address, 4);
    }

    #[test]
    fn byte_values_are_masked_to_eight_bits() {
        let lines = assemble(".data\n.byte 0x1FF, -1\n");
        assert_eq!(lines[1].code, vec![0xFF, 0xFF]);
    }

    #[test]
    fn word_directive_can_reference_a_label() {
        let lines = assemble(".data\ntable: .word table\n");
        assert_eq!(lines[1].code, vec![0x0000]);
    }

    #[test]
    fn unknown_mnemonic_is_rejected_in_pass_two() {
        let mut lines = parse_source("frobnicate x1, x2\n").unwrap();
        let (symbols, final_section) = build_symbol_table(&mut lines).unwrap();
        let err = generate_bytecode(&mut lines, &symbols, final_section).unwrap_err();
        assert!(matches!(err, AssemblyError::UnknownMnemonic { .. }));
    }
}
