//! Study materials list.
//!
//! Collects the names of PDF files the user selects. Nothing is opened or
//! persisted; only the names are kept, in selection order.

use std::path::Path;

use crate::constants::mime;

/// A selected file as reported by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Describes a typed path: file name plus a MIME type guessed from the
    /// extension.
    pub fn from_path(path: &str) -> Self {
        let path = Path::new(path);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        Self::new(name, mime_for_extension(&extension))
    }
}

/// MIME type for a lowercase file extension.
fn mime_for_extension(extension: &str) -> &'static str {
    mime::BY_EXTENSION
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(mime::FALLBACK)
}

/// Ordered list of accepted PDF names. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct StudyMaterialsList {
    names: Vec<String>,
}

impl StudyMaterialsList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the PDFs from a selection and returns how many were accepted.
    pub fn add_selection(&mut self, files: &[FileDescriptor]) -> usize {
        let before = self.names.len();
        self.names.extend(
            files
                .iter()
                .filter(|file| file.mime_type == mime::PDF)
                .map(|file| file.name.clone()),
        );
        self.names.len() - before
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Splits dialog input into file descriptors.
///
/// Paths are separated by whitespace; a path wrapped in double quotes may
/// contain spaces. An unterminated quote runs to the end of the input.
pub fn parse_selection(input: &str) -> Vec<FileDescriptor> {
    split_paths(input)
        .iter()
        .map(|path| FileDescriptor::from_path(path))
        .collect()
}

fn split_paths(input: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in input.chars() {
        match c {
            '"' => {
                if quoted && !current.is_empty() {
                    paths.push(std::mem::take(&mut current));
                }
                quoted = !quoted;
            }
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    paths.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(current);
    }
    paths
}
