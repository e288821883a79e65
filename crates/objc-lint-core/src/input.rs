//! Reading declaration streams produced by a front end.
//!
//! The stream is a sequence of JSON objects, one per declaration, separated
//! by whitespace. A front end can emit declarations as it visits them
//! without wrapping the whole translation unit in an array.

use crate::decl::Declaration;
use serde_json::de::IoRead;
use serde_json::StreamDeserializer;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading declarations.
#[derive(Debug, Error)]
pub enum InputError {
    /// IO error opening an input file.
    #[error("Failed to open {path}: {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed declaration in the stream.
    #[error("Invalid declaration at line {line}, column {column}: {message}")]
    Json {
        /// Line of the error in the stream.
        line: usize,
        /// Column of the error in the stream.
        column: usize,
        /// Deserializer message.
        message: String,
    },
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

/// Lazy, single-pass iterator over the declarations of a stream.
pub struct Declarations<R: Read> {
    inner: StreamDeserializer<'static, IoRead<R>, Declaration>,
}

impl<R: Read> Iterator for Declarations<R> {
    type Item = Result<Declaration, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| item.map_err(InputError::from))
    }
}

/// Reads declarations from `reader` as they are requested.
#[must_use]
pub fn read_declarations<R: Read>(reader: R) -> Declarations<R> {
    Declarations {
        inner: serde_json::Deserializer::from_reader(reader).into_iter(),
    }
}

/// Opens `path` and reads declarations from it.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn read_declarations_from_file(
    path: &Path,
) -> Result<Declarations<std::io::BufReader<std::fs::File>>, InputError> {
    let file = std::fs::File::open(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(read_declarations(std::io::BufReader::new(file)))
}
