use crate::core::models::document::Document;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing structure input formats.
///
/// Implementors handle format-specific parsing and serialization; the path
/// helpers are shared.
pub trait InputFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a document from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed document.
    ///
    /// # Errors
    ///
    /// Returns an error if a required section is missing or reading fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Document, Self::Error>;

    /// Writes a document to a writer.
    ///
    /// # Arguments
    ///
    /// * `document` - The document to write.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(document: &Document, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a document from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Document, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a document to a file path, creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be created, or
    /// writing fails.
    fn write_to_path<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), Self::Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(document, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
