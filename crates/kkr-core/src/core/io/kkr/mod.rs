//! Reader and writer for KKR-CPA structure input files.
//!
//! The reader is permissive: section boundaries are found by keyword
//! containment, and records with unreadable numbers are skipped rather than
//! reported. The only fatal condition is a file with no position section.

mod lines;
mod positions;
mod types;
mod writer;

pub use lines::{is_comment_or_blank, is_end_marker, mentions};

use super::traits::InputFile;
use crate::core::models::document::Document;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum KkrError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Missing required section: no line mentions {marker}")]
    MissingSection { marker: &'static str },
}

pub struct KkrInputFile;

impl InputFile for KkrInputFile {
    type Error = KkrError;

    fn read_from(reader: &mut impl BufRead) -> Result<Document, Self::Error> {
        let raw = reader.lines().collect::<Result<Vec<String>, _>>()?;
        let lines: Vec<&str> = raw.iter().map(String::as_str).collect();
        parse_lines(&lines)
    }

    fn write_to(document: &Document, writer: &mut impl Write) -> Result<(), Self::Error> {
        writer::write_document(document, writer)?;
        Ok(())
    }
}

fn parse_lines(lines: &[&str]) -> Result<Document, KkrError> {
    let table = types::parse_type_table(lines);

    let marker = lines
        .iter()
        .position(|l| lines::is_position_marker(l))
        .ok_or(KkrError::MissingSection {
            marker: "'atmicx' or 'atmtyp'",
        })?;
    let position_table = positions::parse_position_table(&lines[marker..]);

    let header_end = table.section_start;
    let footer_start = position_table
        .end
        .map_or(lines.len(), |offset| marker + offset);

    debug!(
        "Parsed {} type definition(s) and {} position(s).",
        table.definitions.len(),
        position_table.positions.len()
    );

    Ok(Document::from_parts(
        to_owned(&lines[..header_end]),
        table.type_count,
        table.definitions,
        position_table.header,
        position_table.positions,
        to_owned(&lines[footer_start..]),
    ))
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

/// Parses input-file text held in memory.
pub fn parse_str(text: &str) -> Result<Document, KkrError> {
    KkrInputFile::read_from(&mut text.as_bytes())
}

/// Renders the canonical text of a document.
pub fn to_string(document: &Document) -> Result<String, KkrError> {
    let mut buffer = Vec::new();
    KkrInputFile::write_to(document, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Loads a document from `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document, KkrError> {
    let path = path.as_ref();
    info!("Loading input file {:?}", path);
    KkrInputFile::read_from_path(path)
}

/// Writes `document` to `path`, creating parent directories as needed.
pub fn save<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), KkrError> {
    let path = path.as_ref();
    info!("Writing input file {:?}", path);
    KkrInputFile::write_to_path(document, path)
}
