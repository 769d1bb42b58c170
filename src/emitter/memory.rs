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

//! Builds the flat binary memory image: a zero-filled byte buffer sized to
//! the highest address any line's emission reaches, with each line's
//! `code[]` scattered in at `address`, little-endian, per spec.md §4.7.
//! `.text` and `.data` are not required to be disjoint (spec.md §1
//! Non-goals) — a later line's bytes simply overwrite an earlier line's if
//! the two sections were placed to overlap by `.org`.

use crate::ast::{AssemblyLine, Section};

/// Computes the image length: the highest `address + codeCount *
/// elementSize` across every emitting line in `.text` or `.data`, or 1 if
/// nothing emitted any bytes at all.
pub fn image_length(lines: &[AssemblyLine]) -> usize {
    lines
        .iter()
        .filter(|line| matches!(line.section, Section::Text | Section::Data) && line.code_count() > 0)
        .map(|line| line.address as usize + line.code_count() * line.element_size as usize)
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Scatters every emitting line's `code[]` into a zero-filled byte buffer,
/// one byte (elementSize=1) or two little-endian bytes (elementSize=2)
/// per slot.
pub fn build_image(lines: &[AssemblyLine]) -> Vec<u8> {
    let mut image = vec![0u8; image_length(lines)];

    for line in lines {
        if !matches!(line.section, Section::Text | Section::Data) {
            continue;
        }
        for (index, word) in line.code.iter().enumerate() {
            let base = line.address as usize + index * line.element_size as usize;
            if line.element_size == 1 {
                image[base] = (*word & 0xFF) as u8;
            } else {
                image[base] = (*word & 0xFF) as u8;
                image[base + 1] = (*word >> 8) as u8;
            }
        }
    }

    image
}
