//! Name-suggestion mode: comment the selected function with a generated name.

use std::io::{self, Write};

use camino::Utf8Path;
use nomen::ai::{GeminiNameSuggestionService, NameSuggestionService, suggest_name_comment};
use nomen::editor::{
    LineRange, SelectionMode, apply_edits, insertion_edits, read_document, read_stdin_selection,
    select_lines, write_document,
};
use nomen::{CommentStyle, NomenConfig, NomenError};

use super::output::write_insertion;

/// Runs name-suggestion mode against the Gemini API.
///
/// # Errors
///
/// Returns an error if the API key is missing, configuration is invalid, the
/// model request fails, or reading input or writing output fails.
pub fn run(config: &NomenConfig) -> Result<(), NomenError> {
    let api_key = config.resolve_api_key()?;
    let service = GeminiNameSuggestionService::new(config.gemini_config(api_key));
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    run_with_service(&mut writer, config, &service, read_stdin_selection)
}

fn run_with_service<W, F>(
    writer: &mut W,
    config: &NomenConfig,
    service: &dyn NameSuggestionService,
    read_stdin: F,
) -> Result<(), NomenError>
where
    W: Write,
    F: FnOnce() -> Result<Option<String>, NomenError>,
{
    let format = config.output_format()?;
    let style = config.comment_style();

    let selection = match config.selection_mode()? {
        SelectionMode::FileRange { path, range } => {
            return edit_file(&path, range, service, &style);
        }
        SelectionMode::Literal(text) => text,
        SelectionMode::Stdin => {
            let Some(text) = read_stdin()? else {
                tracing::debug!("abandon: no selection available");
                return Ok(());
            };
            text
        }
    };

    let insertion = suggest_name_comment(service, &selection, &style)?;
    tracing::debug!(%format, "writing name suggestion");
    write_insertion(writer, format, &insertion, &selection)
}

fn edit_file(
    path: &Utf8Path,
    range: LineRange,
    service: &dyn NameSuggestionService,
    style: &CommentStyle,
) -> Result<(), NomenError> {
    let document = read_document(path)?;
    let selection = select_lines(&document, range)?;
    let insertion = suggest_name_comment(service, selection.text, style)?;
    let edited = apply_edits(&document, &insertion_edits(selection.start, &insertion))?;

    write_document(path, &edited)?;
    tracing::info!(
        %path,
        line = range.start(),
        "inserted name suggestion"
    );
    Ok(())
}
