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

//! Tracks the two independent location counters (`.text`/`.data`) both
//! passes advance as they walk the line list, and the currently selected
//! section.

use crate::ast::Section;

#[derive(Debug, Clone, Copy)]
pub struct LocationState {
    section: Section,
    loc_text: u16,
    loc_data: u16,
}

impl Default for LocationState {
    fn default() -> Self {
        Self {
            section: Section::None,
            loc_text: 0,
            loc_data: 0,
        }
    }
}

impl LocationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with both counters at 0 but an already-selected section —
    /// pass 2 resumes from whichever section pass 1's walk ended on,
    /// rather than starting over at `Section::None`.
    pub fn with_section(section: Section) -> Self {
        Self {
            section,
            ..Self::default()
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn select(&mut self, section: Section) {
        self.section = section;
    }

    /// The address the next line in the current section will be placed at.
    /// Before either section has been selected there is no counter to
    /// read; this always reads 0.
    pub fn current_address(&self) -> u16 {
        match self.section {
            Section::None => 0,
            Section::Text => self.loc_text,
            Section::Data => self.loc_data,
        }
    }

    /// Unconditionally advances `loc_text`, independent of the currently
    /// selected section. Pass 2's instruction encoder does this (mirroring
    /// the reference's unconditional `loc_text += 2`) because it looks up
    /// and encodes any non-directive mnemonic regardless of section.
    pub fn advance_text(&mut self, count: u16) {
        self.loc_text = self.loc_text.wrapping_add(count);
    }

    /// Advances the current section's counter by `count` bytes/words. A
    /// no-op before any `.text`/`.data` directive has been seen.
    pub fn advance(&mut self, count: u16) {
        match self.section {
            Section::None => {}
            Section::Text => self.loc_text = self.loc_text.wrapping_add(count),
            Section::Data => self.loc_data = self.loc_data.wrapping_add(count),
        }
    }

    /// `.org`: relocates the current section's counter directly. A no-op
    /// before any `.text`/`.data` directive has been seen.
    pub fn set_current(&mut self, address: u16) {
        match self.section {
            Section::None => {}
            Section::Text => self.loc_text = address,
            Section::Data => self.loc_data = address,
        }
    }
}
