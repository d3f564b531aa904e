//! Reading XML documents from disk

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a document
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("File is empty: {0}")]
    Empty(String),
}

/// Read an XML file, rejecting files with no content
pub fn load_xml_file(path: &Path) -> Result<String, InputError> {
    let xml = fs::read_to_string(path)?;
    if xml.trim().is_empty() {
        return Err(InputError::Empty(path.display().to_string()));
    }
    Ok(xml)
}
