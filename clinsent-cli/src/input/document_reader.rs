//! Token document reading
//!
//! An input file holds either one document (`{"tokens": [...]}`) or a JSON
//! array of documents. Documents without an `id` are named after the file.

use crate::error::CliError;
use anyhow::{Context, Result};
use clinsent_core::Document;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentFile {
    One(Document),
    Many(Vec<Document>),
}

/// Reader for token document files
pub struct DocumentReader;

impl DocumentReader {
    /// Read every document stored in a file
    pub fn read(path: &Path) -> Result<Vec<Document>> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Self::parse(&content, &Self::file_label(path))
            .with_context(|| format!("Failed to parse documents in {}", path.display()))
    }

    /// Parse documents from JSON text, naming anonymous ones after `label`
    pub fn parse(content: &str, label: &str) -> Result<Vec<Document>> {
        let file: DocumentFile = serde_json::from_str(content)
            .map_err(|e| CliError::InvalidDocument(e.to_string()))?;

        let documents = match file {
            DocumentFile::One(mut doc) => {
                doc.id.get_or_insert_with(|| label.to_string());
                vec![doc]
            }
            DocumentFile::Many(mut docs) => {
                for (i, doc) in docs.iter_mut().enumerate() {
                    doc.id.get_or_insert_with(|| format!("{label}#{i}"));
                }
                docs
            }
        };

        log::debug!("Parsed {} document(s) from {}", documents.len(), label);
        Ok(documents)
    }

    fn file_label(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
