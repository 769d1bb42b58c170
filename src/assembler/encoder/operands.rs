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

//! Operand-string tokenizing shared by every format's instruction builder:
//! splitting on commas, register decoding, and the L-type `imm(rs1)`
//! offset-register syntax.

use crate::ast::Register;
use crate::errors::AssemblyError;
use crate::immediate::parse_immediate;

/// Splits a raw operand remainder on commas, trimming whitespace around
/// each piece and dropping empty pieces from stray leading/trailing commas.
pub fn split_operands(text: &str) -> Vec<&str> {
    text.split(',').map(str::trim).filter(|piece| !piece.is_empty()).collect()
}

pub fn parse_register(token: &str, line: usize) -> Result<Register, AssemblyError> {
    Register::parse(token).ok_or_else(|| AssemblyError::InvalidRegister {
        line,
        token: token.to_string(),
    })
}

/// Parses the L-type `imm(rs1)` syntax, e.g. `4(x1)` or `%lo(buf)(x2)`.
/// The whole token names a base-register operand, so a malformed one —
/// missing parens or an unparseable offset — is reported as
/// `InvalidRegister` rather than a dedicated "malformed number" kind
/// spec.md §7 doesn't define (SPEC_FULL.md §4.2).
pub fn parse_offset_register(token: &str, line: usize) -> Result<(i32, Register), AssemblyError> {
    let malformed = || AssemblyError::InvalidRegister {
        line,
        token: token.to_string(),
    };

    let open = token.find('(').ok_or_else(malformed)?;
    let close = token.rfind(')').filter(|&index| index > open).ok_or_else(malformed)?;

    let imm = parse_immediate(token[..open].trim()).ok_or_else(malformed)?;
    let register = parse_register(token[open + 1..close].trim(), line)?;
    Ok((imm, register))
}

fn missing_operand(line: usize, context: &str) -> AssemblyError {
    AssemblyError::MissingOperand {
        line,
        context: context.to_string(),
    }
}

/// Fails with `MissingOperand` if the line carried no operand text at all.
pub fn require_operands<'a>(operands: Option<&'a str>, mnemonic: &str, line: usize) -> Result<&'a str, AssemblyError> {
    match operands {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing_operand(line, mnemonic)),
    }
}

/// Fails with `MissingOperand` unless the comma-split operand list has
/// exactly two entries — catches both missing and extra operands.
pub fn take_two<'a>(parts: &[&'a str], mnemonic: &str, line: usize) -> Result<(&'a str, &'a str), AssemblyError> {
    match parts {
        [first, second] => Ok((*first, *second)),
        _ => Err(missing_operand(line, mnemonic)),
    }
}

/// Fails with `MissingOperand` unless the comma-split operand list has
/// exactly one entry.
pub fn take_one<'a>(parts: &[&'a str], mnemonic: &str, line: usize) -> Result<&'a str, AssemblyError> {
    match parts {
        [only] => Ok(*only),
        _ => Err(missing_operand(line, mnemonic)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_operands_trims_and_drops_empties() {
        assert_eq!(split_operands(" x1 , x2 "), vec!["x1", "x2"]);
        assert_eq!(split_operands("x1,"), vec!["x1"]);
    }

    #[test]
    fn offset_register_parses_immediate_and_register() {
        let (imm, reg) = parse_offset_register("4(x1)", 1).unwrap();
        assert_eq!(imm, 4);
        assert_eq!(reg, Register::X1);
    }

    #[test]
    fn offset_register_rejects_missing_parens() {
        assert!(parse_offset_register("x1", 1).is_err());
    }

    #[test]
    fn take_two_rejects_extra_operand() {
        let parts = ["x1", "x2", "x3"];
        assert!(take_two(&parts, "add", 1).is_err());
    }
}
