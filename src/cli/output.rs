//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use nomen::{CommentInsertion, NomenError, OutputFormat};

/// Writes `insertion` in the requested format.
///
/// The filter format echoes `selection` after the comment block so an editor
/// can replace the selection with the output.
pub fn write_insertion<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    insertion: &CommentInsertion,
    selection: &str,
) -> Result<(), NomenError> {
    match format {
        OutputFormat::Filter => write!(writer, "{}{selection}", insertion.to_text())
            .map_err(|error| io_error(&error))?,
        OutputFormat::Insertion => {
            writer
                .write_all(insertion.to_text().as_bytes())
                .map_err(|error| io_error(&error))?;
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(insertion).map_err(|error| NomenError::Io {
                message: format!("failed to encode insertion as JSON: {error}"),
            })?;
            writeln!(writer, "{line}").map_err(|error| io_error(&error))?;
        }
    }

    writer.flush().map_err(|error| io_error(&error))
}

/// Converts an I/O error to a [`NomenError::Io`].
pub(crate) fn io_error(error: &io::Error) -> NomenError {
    NomenError::Io {
        message: error.to_string(),
    }
}
