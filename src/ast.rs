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

//! The typed representations built out of a source line's raw text: the
//! section cursor, the eight general-purpose registers, operand forms, and
//! the directive/instruction shapes pass 1 and pass 2 dispatch on.

use std::fmt;

/// One of the two addressable sections, or the state before either has been
/// selected.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Section {
    #[default]
    None,
    Text,
    Data,
}

/// One of the eight Z16 general-purpose registers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Register {
    X0,
    X1,
    X2,
    X3,
    X4,
    X5,
    X6,
    X7,
}

impl Register {
    /// Decodes a register token (`x0`..`x7` or an ABI alias) to a register,
    /// or `None` if the token names no register at all.
    pub fn parse(token: &str) -> Option<Register> {
        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            "x0" | "t0" => Some(Register::X0),
            "x1" | "ra" => Some(Register::X1),
            "x2" | "sp" => Some(Register::X2),
            "x3" | "s0" => Some(Register::X3),
            "x4" | "s1" => Some(Register::X4),
            "x5" | "t1" => Some(Register::X5),
            "x6" | "a0" => Some(Register::X6),
            "x7" | "a1" => Some(Register::X7),
            _ => None,
        }
    }

    /// The 3-bit register index encoded in every instruction format.
    pub fn index(self) -> u16 {
        match self {
            Register::X0 => 0,
            Register::X1 => 1,
            Register::X2 => 2,
            Register::X3 => 3,
            Register::X4 => 4,
            Register::X5 => 5,
            Register::X6 => 6,
            Register::X7 => 7,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.index())
    }
}

/// A value that names either an immediate number or a not-yet-resolved
/// label — the two forms a `.word` element or a directive expression can
/// take before pass 2 has a symbol table to resolve labels against.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Immediate(i32),
    Label(String),
}

/// The directive forms pass 1 sizes and pass 2 materializes into `code[]`.
/// Operand lists for `.byte`/`.word` are kept as raw tokens: pass 1 only
/// needs their count to size the section, and each token's value (number or
/// label) is resolved in pass 2 once the symbol table exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Text,
    Data,
    Org(Operand),
    Asciiz(String),
    Byte(Vec<Operand>),
    Word(Vec<Operand>),
    Space(i32),
}

/// One of the seven Z16 instruction encoding formats.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Format {
    R,
    I,
    B,
    L,
    J,
    U,
    S,
}

/// A fully parsed instruction, operands already decoded into registers,
/// immediates, or label names. Built during pass 2, once register and
/// immediate syntax can be validated and (for branches/jumps) the symbol
/// table is available to resolve label operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    // R-type: two register operands.
    R(&'static str, Register, Register),
    // I-type: destination register and a signed immediate.
    I(&'static str, Register, i32),
    // B-type: a register to compare and a branch target label.
    B(&'static str, Register, String),
    // L-type: rd/rs2, signed offset, base register, syntax `rd, imm(rs1)`.
    L(&'static str, Register, i32, Register),
    // J-type: a single jump target label.
    J(&'static str, String),
    // U-type: destination register and an upper immediate.
    U(&'static str, Register, i32),
    // S-type: a single service-call immediate.
    S(&'static str, i32),
}

/// One physical source line, threaded through parsing, pass 1, and pass 2.
///
/// Fields are filled in progressively: `parser` sets `line_number`,
/// `original`, `label`, `mnemonic`, `operands`; pass 1 sets `section`,
/// `address`, `directive`, and `element_size` (the per-slot stride, known
/// as soon as a line's size is known); pass 2 sets `instruction` and
/// `code`.
#[derive(Debug, Clone, Default)]
pub struct AssemblyLine {
    pub line_number: usize,
    pub original: String,
    pub section: Section,
    pub address: u16,
    pub label: Option<String>,
    pub mnemonic: Option<String>,
    pub operands: Option<String>,
    pub directive: Option<Directive>,
    pub instruction: Option<Instruction>,
    pub code: Vec<u16>,
    pub element_size: u8,
}

impl AssemblyLine {
    pub fn code_count(&self) -> usize {
        self.code.len()
    }
}
