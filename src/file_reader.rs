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

//! An indirection over reading the source file, so the pipeline can be
//! exercised in tests without touching the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::AssemblyError;

pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> Result<String, AssemblyError>;
}

/// The production reader: reads straight from disk.
pub struct AsmFileReader;

impl FileReader for AsmFileReader {
    fn read_to_string(&self, path: &Path) -> Result<String, AssemblyError> {
        std::fs::read_to_string(path).map_err(|source| AssemblyError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// An in-memory reader for tests, so assembling a program doesn't require
/// writing a temp file to disk.
#[derive(Default)]
pub struct MockFileReader {
    files: HashMap<PathBuf, String>,
}

impl MockFileReader {
    pub fn add_file(&mut self, path: &str, content: &str) {
        self.files.insert(PathBuf::from(path), content.to_string());
    }
}

impl FileReader for MockFileReader {
    fn read_to_string(&self, path: &Path) -> Result<String, AssemblyError> {
        self.files.get(path).cloned().ok_or_else(|| AssemblyError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock file not found"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn asm_file_reader_reads_a_real_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "add x1, x2\n").unwrap();

        let content = AsmFileReader.read_to_string(file.path()).unwrap();
        assert_eq!(content, "add x1, x2\n");
    }

    #[test]
    fn asm_file_reader_reports_an_io_error_for_a_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere.asm");

        let err = AsmFileReader.read_to_string(&missing).unwrap_err();
        assert!(matches!(err, AssemblyError::Io { path, .. } if path == missing));
    }

    #[test]
    fn mock_file_reader_reports_an_io_error_for_an_unregistered_path() {
        let reader = MockFileReader::default();
        let err = reader.read_to_string(Path::new("missing.asm")).unwrap_err();
        assert!(matches!(err, AssemblyError::Io { .. }));
    }
}
