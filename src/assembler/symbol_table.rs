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

//! The label table built during pass 1 and consulted during pass 2.

use std::collections::HashMap;

use crate::ast::Section;
use crate::errors::AssemblyError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbol {
    pub address: u16,
    pub section: Section,
}

/// Case-insensitive label table: keys are always lower-cased before
/// insertion or lookup.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new label, failing with `DuplicateLabel` if one already
    /// exists under the same case-insensitive name.
    pub fn add(&mut self, name: &str, address: u16, section: Section, line: usize) -> Result<(), AssemblyError> {
        let key = name.to_ascii_lowercase();
        if self.symbols.contains_key(&key) {
            return Err(AssemblyError::DuplicateLabel {
                line,
                name: name.to_string(),
            });
        }
        self.symbols.insert(key, Symbol { address, section });
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(&name.to_ascii_lowercase())
    }

    pub fn lookup(&self, name: &str, line: usize) -> Result<&Symbol, AssemblyError> {
        self.find(name).ok_or_else(|| AssemblyError::UndefinedLabel {
            line,
            name: name.to_string(),
        })
    }

    /// Entries in a deterministic (sorted by name) order, for the verbose dump.
    pub fn sorted_entries(&self) -> Vec<(&str, &Symbol)> {
        let mut entries: Vec<_> = self.symbols.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_label_is_rejected() {
        let mut table = SymbolTable::new();
        table.add("loop", 0, Section::Text, 1).unwrap();
        let err = table.add("LOOP", 4, Section::Text, 5).unwrap_err();
        assert!(matches!(err, AssemblyError::DuplicateLabel { line: 5, .. }));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = SymbolTable::new();
        table.add("Start", 10, Section::Text, 1).unwrap();
        assert_eq!(table.find("START").unwrap().address, 10);
        assert_eq!(table.find("start").unwrap().address, 10);
    }

    #[test]
    fn undefined_label_is_an_error() {
        let table = SymbolTable::new();
        let err = table.lookup("nope", 3).unwrap_err();
        assert!(matches!(err, AssemblyError::UndefinedLabel { line: 3, .. }));
    }
}
