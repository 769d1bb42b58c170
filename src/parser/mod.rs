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

//! Splits source text into [`AssemblyLine`] records: one physical line of
//! comment-stripped, structurally-parsed label/mnemonic/operand text each.
//! Registers, immediates, and directive bodies are *not* resolved here —
//! that happens in pass 1 (sizing) and pass 2 (encoding), once a symbol
//! table exists.

use pest::Parser;
use pest_derive::Parser;

use crate::ast::AssemblyLine;
use crate::errors::AssemblyError;

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
struct LineParser;

/// Parses an entire source file into one [`AssemblyLine`] per physical line.
pub fn parse_source(source: &str) -> Result<Vec<AssemblyLine>, AssemblyError> {
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| parse_line(raw, index + 1))
        .collect()
}

/// Parses a single physical source line (spec §4.1).
fn parse_line(original: &str, line_number: usize) -> Result<AssemblyLine, AssemblyError> {
    let stripped = strip_comment(original);
    let trimmed = stripped.trim();

    let mut line = AssemblyLine {
        line_number,
        original: original.to_string(),
        ..Default::default()
    };

    if trimmed.is_empty() {
        return Ok(line);
    }

    let mut pairs = LineParser::parse(Rule::line, trimmed)?;
    let line_pair = pairs.next().expect("line rule always produces one pair");

    for pair in line_pair.into_inner() {
        match pair.as_rule() {
            Rule::label => {
                let text = pair.as_str().trim_end_matches(':').trim_end();
                line.label = Some(text.to_string());
            }
            Rule::body => {
                let mut inner = pair.into_inner();
                let mnemonic = inner.next().expect("body always has a mnemonic");
                line.mnemonic = Some(mnemonic.as_str().to_ascii_lowercase());
                if let Some(operands) = inner.next() {
                    line.operands = Some(operands.as_str().trim_end().to_string());
                }
            }
            Rule::EOI => {}
            _ => unreachable!("unexpected rule in line: {:?}", pair.as_rule()),
        }
    }

    Ok(line)
}

/// Truncates a line at the first `#` or `;`, whichever comes first.
fn strip_comment(line: &str) -> &str {
    match line.find(['#', ';']) {
        Some(index) => &line[..index],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line() {
        let line = parse_line("   ", 1).unwrap();
        assert!(line.label.is_none());
        assert!(line.mnemonic.is_none());
    }

    #[test]
    fn comment_only_line() {
        let line = parse_line("  # just a comment", 1).unwrap();
        assert!(line.mnemonic.is_none());
    }

    #[test]
    fn label_only() {
        let line = parse_line("start:", 1).unwrap();
        assert_eq!(line.label.as_deref(), Some("start"));
        assert!(line.mnemonic.is_none());
    }

    #[test]
    fn label_and_instruction() {
        let line = parse_line("start: add x1, x2  ; go", 1).unwrap();
        assert_eq!(line.label.as_deref(), Some("start"));
        assert_eq!(line.mnemonic.as_deref(), Some("add"));
        assert_eq!(line.operands.as_deref(), Some("x1, x2"));
    }

    #[test]
    fn mnemonic_is_lowercased_operands_preserved() {
        let line = parse_line("ADDI x3, 5", 1).unwrap();
        assert_eq!(line.mnemonic.as_deref(), Some("addi"));
        assert_eq!(line.operands.as_deref(), Some("x3, 5"));
    }

    #[test]
    fn directive_mnemonic() {
        let line = parse_line(".asciiz \"hi\"", 1).unwrap();
        assert_eq!(line.mnemonic.as_deref(), Some(".asciiz"));
        assert_eq!(line.operands.as_deref(), Some("\"hi\""));
    }

    #[test]
    fn original_text_is_untouched() {
        let raw = "  start:   add   x1,x2   # note";
        let line = parse_line(raw, 7).unwrap();
        assert_eq!(line.original, raw);
        assert_eq!(line.line_number, 7);
    }
}
