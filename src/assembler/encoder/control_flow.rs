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

//! B-type (branch) and J-type (jump) builders and encoders. Both resolve a
//! label operand against the symbol table and encode a signed, PC-relative
//! word offset; this is the only place label resolution happens, since
//! every other format's operands are already fully known at build time.

use crate::assembler::symbol_table::SymbolTable;
use crate::ast::{Instruction, Register};
use crate::errors::AssemblyError;
use crate::instructions::InstructionDef;

use super::operands::{parse_register, require_operands, split_operands, take_one, take_two};

/// `mnemonic rs1, label`.
pub fn build_b(def: &'static InstructionDef, operands: Option<&str>, line: usize) -> Result<Instruction, AssemblyError> {
    let text = require_operands(operands, def.mnemonic, line)?;
    let parts = split_operands(text);
    let (first, second) = take_two(&parts, def.mnemonic, line)?;
    let rs1 = parse_register(first, line)?;
    Ok(Instruction::B(def.mnemonic, rs1, second.to_string()))
}

pub fn encode_b(
    def: &InstructionDef,
    rs1: Register,
    label: &str,
    address: u16,
    symbols: &SymbolTable,
    line: usize,
) -> Result<u16, AssemblyError> {
    let target = symbols.lookup(label, line)?.address;
    let offset = (target as i32 - (address as i32 + 2)) >> 1;
    if !(-8..=7).contains(&offset) {
        return Err(AssemblyError::OffsetOutOfRange {
            line,
            kind: "branch",
            offset,
        });
    }
    Ok((offset as u16 & 0xF) << 12 | (rs1.index() & 0x7) << 6 | (def.funct3 & 0x7) << 3 | (def.opcode & 0x7))
}

/// `mnemonic label` — a single jump target.
pub fn build_j(def: &'static InstructionDef, operands: Option<&str>, line: usize) -> Result<Instruction, AssemblyError> {
    let text = require_operands(operands, def.mnemonic, line)?;
    let parts = split_operands(text);
    let label = take_one(&parts, def.mnemonic, line)?;
    Ok(Instruction::J(def.mnemonic, label.to_string()))
}

pub fn encode_j(
    def: &InstructionDef,
    mnemonic: &str,
    label: &str,
    address: u16,
    symbols: &SymbolTable,
    line: usize,
) -> Result<u16, AssemblyError> {
    let target = symbols.lookup(label, line)?.address;
    let offset = (target as i32 - address as i32) >> 1;
    if !(-128..=127).contains(&offset) {
        return Err(AssemblyError::OffsetOutOfRange {
            line,
            kind: "jump",
            offset,
        });
    }
    let link: u16 = if mnemonic.eq_ignore_ascii_case("jal") { 1 } else { 0 };
    Ok((link & 0x1) << 15 | (offset as u16 & 0xFF) << 7 | (def.opcode & 0xF))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Section;

    #[test]
    fn self_branch_at_address_zero_matches_the_worked_scenario() {
        let def = crate::instructions::lookup("beq").unwrap();
        let mut symbols = SymbolTable::new();
        symbols.add("start", 0, Section::Text, 1).unwrap();
        let word = encode_b(def, Register::X0, "start", 0, &symbols, 1).unwrap();
        assert_eq!(word, 0xF002);
    }

    #[test]
    fn branch_offset_boundaries() {
        let def = crate::instructions::lookup("beq").unwrap();
        let mut symbols = SymbolTable::new();
        symbols.add("back", 0, Section::Text, 1).unwrap();
        symbols.add("fwd7", 16, Section::Text, 1).unwrap();
        symbols.add("fwd8", 18, Section::Text, 1).unwrap();

        assert!(encode_b(def, Register::X0, "back", 14, &symbols, 2).is_ok());
        assert!(encode_b(def, Register::X0, "back", 16, &symbols, 2).is_err());
        assert!(encode_b(def, Register::X0, "fwd7", 0, &symbols, 2).is_ok());
        assert!(encode_b(def, Register::X0, "fwd8", 0, &symbols, 2).is_err());
    }

    #[test]
    fn jump_offset_boundaries() {
        let def = crate::instructions::lookup("j").unwrap();
        let mut symbols = SymbolTable::new();
        symbols.add("near", 0, Section::Text, 1).unwrap();
        symbols.add("max_fwd", 254, Section::Text, 1).unwrap();
        symbols.add("over_fwd", 256, Section::Text, 1).unwrap();

        assert!(encode_j(def, "j", "max_fwd", 0, &symbols, 2).is_ok());
        assert!(encode_j(def, "j", "over_fwd", 0, &symbols, 2).is_err());
        assert!(encode_j(def, "j", "near", 256, &symbols, 2).is_ok());
        assert!(encode_j(def, "j", "near", 258, &symbols, 2).is_err());
    }

    #[test]
    fn jal_sets_the_link_bit() {
        let def = crate::instructions::lookup("jal").unwrap();
        let mut symbols = SymbolTable::new();
        symbols.add("target", 0, Section::Text, 1).unwrap();
        let word = encode_j(def, "jal", "target", 0, &symbols, 1).unwrap();
        assert_eq!(word & 0x8000, 0x8000);
    }

    #[test]
    fn undefined_label_is_rejected() {
        let def = crate::instructions::lookup("beq").unwrap();
        let symbols = SymbolTable::new();
        assert!(encode_b(def, Register::X0, "nowhere", 0, &symbols, 1).is_err());
    }
}
