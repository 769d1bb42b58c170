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

//! Dispatches each instruction mnemonic to its format's operand builder
//! and word encoder. One submodule per related pair of formats, mirroring
//! the Z16 ISA's own grouping (register-register/register-immediate ALU
//! ops, control flow, loads/stores, the two remaining one-off formats).

mod arithmetic;
mod control_flow;
mod load_store;
mod misc;
mod operands;

use crate::assembler::symbol_table::SymbolTable;
use crate::ast::{Format, Instruction};
use crate::errors::AssemblyError;
use crate::instructions::InstructionDef;

/// Parses a line's raw operand text into a typed [`Instruction`], per its
/// format. Registers are validated and immediates parsed here; a
/// branch/jump's label operand is carried as an unresolved name until
/// [`encode`] has a symbol table to look it up against.
pub fn build_instruction(
    def: &'static InstructionDef,
    operands: Option<&str>,
    line: usize,
) -> Result<Instruction, AssemblyError> {
    match def.format {
        Format::R => arithmetic::build_r(def, operands, line),
        Format::I => arithmetic::build_i(def, operands, line),
        Format::B => control_flow::build_b(def, operands, line),
        Format::J => control_flow::build_j(def, operands, line),
        Format::L => load_store::build_l(def, operands, line),
        Format::U => misc::build_u(def, operands, line),
        Format::S => misc::build_s(def, operands, line),
    }
}

/// Packs an already-built [`Instruction`] into its 16-bit machine word.
/// `address` is this line's own program counter, needed for the
/// PC-relative B/J-type offset computation.
pub fn encode(
    instruction: &Instruction,
    def: &InstructionDef,
    address: u16,
    symbols: &SymbolTable,
    line: usize,
) -> Result<u16, AssemblyError> {
    match instruction {
        Instruction::R(_, rd, rs2) => Ok(arithmetic::encode_r(def, *rd, *rs2)),
        Instruction::I(_, rd, imm) => Ok(arithmetic::encode_i(def, *rd, *imm)),
        Instruction::B(_, rs1, label) => control_flow::encode_b(def, *rs1, label, address, symbols, line),
        Instruction::J(mnemonic, label) => control_flow::encode_j(def, mnemonic, label, address, symbols, line),
        Instruction::L(_, rd_or_rs2, imm, rs1) => Ok(load_store::encode_l(def, *rd_or_rs2, *imm, *rs1)),
        Instruction::U(_, rd, imm) => Ok(misc::encode_u(def, *rd, *imm)),
        Instruction::S(_, svc) => Ok(misc::encode_s(*svc)),
    }
}
