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

//! The static, read-only mnemonic table: for every Z16 mnemonic, the
//! instruction format it belongs to and the opcode/funct3/funct4 fields
//! pass 2 packs into the machine word. Ported field-for-field from the
//! `instructionSet` table of the reference Z16 assembler.

use crate::ast::Format;

#[derive(Debug, Copy, Clone)]
pub struct InstructionDef {
    pub mnemonic: &'static str,
    pub format: Format,
    pub opcode: u16,
    pub funct3: u16,
    pub funct4: u16,
}

const fn def(mnemonic: &'static str, format: Format, opcode: u16, funct3: u16, funct4: u16) -> InstructionDef {
    InstructionDef {
        mnemonic,
        format,
        opcode,
        funct3,
        funct4,
    }
}

pub static INSTRUCTION_SET: &[InstructionDef] = &[
    def("add", Format::R, 0, 0, 0x0),
    def("sub", Format::R, 0, 0, 0x1),
    def("slt", Format::R, 0, 1, 0x0),
    def("sltu", Format::R, 0, 2, 0x0),
    def("sll", Format::R, 0, 3, 0x2),
    def("srl", Format::R, 0, 3, 0x4),
    def("sra", Format::R, 0, 3, 0x8),
    def("or", Format::R, 0, 4, 0x1),
    def("and", Format::R, 0, 5, 0x0),
    def("xor", Format::R, 0, 6, 0x4),
    def("mv", Format::R, 0, 7, 0x8),
    def("jr", Format::R, 0, 7, 0x0),
    def("jalr", Format::R, 0, 0, 0x8),
    def("addi", Format::I, 1, 0, 0),
    def("slti", Format::I, 1, 1, 0),
    def("sltui", Format::I, 1, 2, 0),
    def("slli", Format::I, 1, 3, 0),
    def("srli", Format::I, 1, 3, 0),
    def("srai", Format::I, 1, 3, 0),
    def("ori", Format::I, 1, 4, 0),
    def("andi", Format::I, 1, 5, 0),
    def("xori", Format::I, 1, 6, 0),
    def("li", Format::I, 1, 7, 0),
    def("beq", Format::B, 2, 0, 0),
    def("bne", Format::B, 2, 1, 0),
    def("bz", Format::B, 2, 2, 0),
    def("bnz", Format::B, 2, 3, 0),
    def("blt", Format::B, 2, 4, 0),
    def("bge", Format::B, 2, 5, 0),
    def("bltu", Format::B, 2, 6, 0),
    def("bgeu", Format::B, 2, 7, 0),
    def("lb", Format::L, 3, 0, 0),
    def("lw", Format::L, 3, 2, 0),
    def("lbu", Format::L, 3, 4, 0),
    def("sb", Format::L, 3, 0, 0),
    def("sw", Format::L, 3, 2, 0),
    def("j", Format::J, 5, 0, 0),
    def("jal", Format::J, 5, 0, 0),
    def("lui", Format::U, 6, 0, 0),
    def("auipc", Format::U, 6, 0, 0),
    def("ecall", Format::S, 7, 0, 0),
];

/// Looks up a mnemonic, case-insensitively, returning its static definition.
pub fn lookup(mnemonic: &str) -> Option<&'static InstructionDef> {
    INSTRUCTION_SET
        .iter()
        .find(|def| def.mnemonic.eq_ignore_ascii_case(mnemonic))
}
