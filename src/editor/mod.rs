//! Editor-side plumbing: locating a selection inside a document and applying
//! insert edits to a text buffer.
//!
//! Editors hand `nomen` either the selected text itself (on stdin or as an
//! argument) or a document path plus a line range. In the latter case the
//! comment block is inserted into the document at the start of the range.

use std::io::{IsTerminal, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::comment::CommentInsertion;
use crate::error::NomenError;

/// Where the selected text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Selected text passed directly on the command line.
    Literal(String),
    /// Whole lines of a document on disk, edited in place.
    FileRange {
        /// Document to read and rewrite.
        path: Utf8PathBuf,
        /// Lines forming the selection.
        range: LineRange,
    },
    /// Selected text piped on standard input.
    Stdin,
}

/// A 1-based, inclusive range of document lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    /// Creates a range; `end` defaults to `start`.
    ///
    /// # Errors
    ///
    /// Returns [`NomenError::InvalidSelection`] when `start` is zero or `end`
    /// precedes `start`.
    pub fn new(start: u32, end: Option<u32>) -> Result<Self, NomenError> {
        let last = end.unwrap_or(start);
        if start == 0 {
            return Err(NomenError::InvalidSelection {
                message: "line numbers start at 1".to_owned(),
            });
        }
        if last < start {
            return Err(NomenError::InvalidSelection {
                message: format!("end line {last} precedes start line {start}"),
            });
        }

        Ok(Self { start, end: last })
    }

    /// First selected line.
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Last selected line.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }
}

/// A selection located inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Byte offset of the selection start.
    pub start: usize,
    /// Selected text, including the final line break when present.
    pub text: &'a str,
}

/// One insertion into a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Byte offset at which `text` is inserted.
    pub offset: usize,
    /// Inserted text.
    pub text: String,
}

/// Locates the whole lines covered by `range` in `document`.
///
/// # Errors
///
/// Returns [`NomenError::InvalidSelection`] when the range starts past the
/// last line of the document.
pub fn select_lines(document: &str, range: LineRange) -> Result<Selection<'_>, NomenError> {
    let mut offset = 0_usize;
    let mut lines_seen = 0_u32;
    let mut start = None;
    let mut end = document.len();

    for (number, line) in (1_u32..).zip(document.split_inclusive('\n')) {
        lines_seen = number;
        if number == range.start() {
            start = Some(offset);
        }
        offset += line.len();
        if number == range.end() {
            end = offset;
            break;
        }
    }

    // An empty document, or one ending in a line break, has an empty last line.
    let open_last_line = document.is_empty() || document.ends_with('\n');
    if start.is_none() && open_last_line && range.start() == lines_seen.saturating_add(1) {
        start = Some(document.len());
    }

    let start_offset = start.ok_or_else(|| NomenError::InvalidSelection {
        message: format!(
            "start line {} is past the end of the document",
            range.start()
        ),
    })?;
    let text = document
        .get(start_offset..end)
        .ok_or_else(|| NomenError::InvalidSelection {
            message: format!("lines {}-{} are not addressable", range.start(), range.end()),
        })?;

    Ok(Selection {
        start: start_offset,
        text,
    })
}

/// Edits inserting `insertion` at `offset`: header first, then body.
#[must_use]
pub fn insertion_edits(offset: usize, insertion: &CommentInsertion) -> Vec<TextEdit> {
    vec![
        TextEdit {
            offset,
            text: insertion.header.clone(),
        },
        TextEdit {
            offset,
            text: insertion.body.clone(),
        },
    ]
}

/// Applies insert edits to `document`.
///
/// Edits are positioned against the original document. Edits sharing an
/// offset keep their relative order.
///
/// # Errors
///
/// Returns [`NomenError::InvalidSelection`] when an offset lies past the end
/// of the document or inside a multi-byte character.
pub fn apply_edits(document: &str, edits: &[TextEdit]) -> Result<String, NomenError> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| edit.offset);

    let inserted: usize = edits.iter().map(|edit| edit.text.len()).sum();
    let mut output = String::with_capacity(document.len() + inserted);
    let mut cursor = 0_usize;

    for edit in ordered {
        let preceding =
            document
                .get(cursor..edit.offset)
                .ok_or_else(|| NomenError::InvalidSelection {
                    message: format!("edit offset {} is not a character boundary", edit.offset),
                })?;
        output.push_str(preceding);
        output.push_str(&edit.text);
        cursor = edit.offset;
    }

    let rest = document
        .get(cursor..)
        .ok_or_else(|| NomenError::InvalidSelection {
            message: format!("edit offset {cursor} is not a character boundary"),
        })?;
    output.push_str(rest);

    Ok(output)
}

/// Reads the selection piped on stdin.
///
/// Returns `None` when stdin is an interactive terminal, in which case no
/// editor supplied a selection.
///
/// # Errors
///
/// Returns [`NomenError::Io`] when stdin cannot be read as UTF-8.
pub fn read_stdin_selection() -> Result<Option<String>, NomenError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut selection = String::new();
    stdin
        .lock()
        .read_to_string(&mut selection)
        .map_err(|error| NomenError::io("failed to read selection from stdin", &error))?;

    Ok(Some(selection))
}

/// Reads a UTF-8 document from disk.
///
/// # Errors
///
/// Returns [`NomenError::Io`] when the parent directory or file cannot be
/// opened or read.
pub fn read_document(path: &Utf8Path) -> Result<String, NomenError> {
    let (dir, file_name) = open_parent(path)?;
    dir.read_to_string(file_name)
        .map_err(|error| NomenError::io(&format!("failed to read '{path}'"), &error))
}

/// Replaces the contents of a document on disk.
///
/// # Errors
///
/// Returns [`NomenError::Io`] when the file cannot be written.
pub fn write_document(path: &Utf8Path, contents: &str) -> Result<(), NomenError> {
    let (dir, file_name) = open_parent(path)?;
    dir.write(file_name, contents)
        .map_err(|error| NomenError::io(&format!("failed to write '{path}'"), &error))
}

fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), NomenError> {
    let file_name = path.file_name().ok_or_else(|| NomenError::Io {
        message: format!("'{path}' does not name a file"),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| NomenError::io(&format!("failed to open '{parent}'"), &error))?;

    Ok((dir, file_name))
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
