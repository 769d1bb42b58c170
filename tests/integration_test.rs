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

use std::path::Path;

use z16asm::assemble;
use z16asm::errors::AssemblyError;
use z16asm::file_reader::MockFileReader;

fn reader_with(source: &str) -> MockFileReader {
    let mut reader = MockFileReader::default();
    reader.add_file("test.asm", source);
    reader
}

#[test]
fn a_single_instruction_assembles_to_the_worked_scenario_bytes() {
    let reader = reader_with("add x1, x2\n");
    let output = assemble(Path::new("test.asm"), &reader, false).unwrap();
    assert_eq!(output.image, vec![0x40, 0x04]);
}

#[test]
fn self_referential_branch_loop() {
    let reader = reader_with("start: beq x0, start\n");
    let output = assemble(Path::new("test.asm"), &reader, false).unwrap();
    assert_eq!(output.image, vec![0x02, 0xF0]);
    assert_eq!(output.symbols.find("start").unwrap().address, 0);
}

#[test]
fn text_then_data_mix_with_labels_and_a_string() {
    let source = "\
.text
start: li x1, 1
       j start
.data
msg: .asciiz \"hi\"
";
    let reader = reader_with(source);
    let output = assemble(Path::new("test.asm"), &reader, false).unwrap();

    // li x1, 1 at 0x0000, j start at 0x0002; .data's string starts fresh at 0
    // because loc_data is independent of loc_text (spec.md §1 Non-goals).
    assert_eq!(output.symbols.find("start").unwrap().address, 0);
    assert_eq!(output.symbols.find("msg").unwrap().address, 0);
    // "hi\0" packs into two 16-bit slots: ('h'|'i'<<8), (0).
    assert_eq!(output.image.len(), 4);
}

#[test]
fn org_relocates_a_label_within_a_section() {
    let reader = reader_with(".text\n.org 0x10\nstart: add x1, x2\n");
    let output = assemble(Path::new("test.asm"), &reader, false).unwrap();
    assert_eq!(output.symbols.find("start").unwrap().address, 0x10);
    assert_eq!(output.image.len(), 0x12);
}

#[test]
fn scrambling_case_does_not_change_the_emitted_binary() {
    let lower = reader_with("start: add x1, x2\nj start\n");
    let upper = reader_with("START: ADD X1, X2\nJ START\n");

    let lower_output = assemble(Path::new("test.asm"), &lower, false).unwrap();
    let upper_output = assemble(Path::new("test.asm"), &upper, false).unwrap();

    assert_eq!(lower_output.image, upper_output.image);
}

#[test]
fn undefined_label_is_a_fatal_undefined_label_error() {
    let reader = reader_with("j nowhere\n");
    let err = assemble(Path::new("test.asm"), &reader, false).unwrap_err();
    let assembly_err = err.downcast_ref::<AssemblyError>().expect("should be an AssemblyError");
    assert!(matches!(assembly_err, AssemblyError::UndefinedLabel { .. }));
}

#[test]
fn duplicate_label_is_a_fatal_duplicate_label_error() {
    let reader = reader_with("start: add x1, x2\nstart: add x1, x2\n");
    let err = assemble(Path::new("test.asm"), &reader, false).unwrap_err();
    let assembly_err = err.downcast_ref::<AssemblyError>().expect("should be an AssemblyError");
    assert!(matches!(assembly_err, AssemblyError::DuplicateLabel { .. }));
}

#[test]
fn branch_offset_one_past_the_boundary_is_rejected() {
    // Enough back-to-back instructions that the branch back to the first
    // one falls outside the branch format's [-8, 7] offset range.
    let mut source = String::new();
    source.push_str("start: add x1, x2\n");
    for _ in 0..8 {
        source.push_str("add x1, x2\n");
    }
    source.push_str("beq x0, start\n");

    let reader = reader_with(&source);
    let err = assemble(Path::new("test.asm"), &reader, false).unwrap_err();
    let assembly_err = err.downcast_ref::<AssemblyError>().expect("should be an AssemblyError");
    assert!(matches!(assembly_err, AssemblyError::OffsetOutOfRange { kind: "branch", .. }));
}

#[test]
fn listing_contains_a_record_per_source_line() {
    let reader = reader_with("start: add x1, x2\nj start\n");
    let output = assemble(Path::new("test.asm"), &reader, false).unwrap();
    assert_eq!(output.listing.lines().count() - 2, output.lines.len());
}

#[test]
fn missing_source_file_is_an_io_error() {
    let reader = MockFileReader::default();
    let err = assemble(Path::new("nope.asm"), &reader, false).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
}
