//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.nomen.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `NOMEN_API_KEY`, `NOMEN_MODEL`, and so on,
//!    with `GEMINI_API_KEY` / `GOOGLE_API_KEY` as key fallbacks
//! 4. **Command-line arguments** – `--api-key`/`-k`, `--model`/`-m`, ...
//!
//! # Configuration File
//!
//! Place `.nomen.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! api_key = "AIza-example"
//! model = "models/gemini-1.0-pro-latest"
//! comment_marker = "# "
//! output = "filter"
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::GeminiConfig;
use crate::ai::name_suggestion::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::comment::{CommentStyle, DEFAULT_COMMENT_MARKER, DEFAULT_HEADER_LABEL};
use crate::editor::{LineRange, SelectionMode};
use crate::error::NomenError;

/// Environment variables consulted, in order, when no API key is configured.
pub const FALLBACK_API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// How the generated comment is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comment block followed by the original selection, for editor filters.
    #[default]
    Filter,
    /// Comment block only.
    Insertion,
    /// Header and body as a JSON object.
    Json,
}

impl OutputFormat {
    /// Name used on the command line and in configuration files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Insertion => "insertion",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Parse error for [`OutputFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported output format '{value}': valid options are 'filter', 'insertion' or 'json'")]
pub struct OutputFormatParseError {
    value: String,
}

impl FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "filter" => Ok(Self::Filter),
            "insertion" => Ok(Self::Insertion),
            "json" => Ok(Self::Json),
            _ => Err(OutputFormatParseError {
                value: value.to_owned(),
            }),
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `NOMEN_API_KEY`, `GEMINI_API_KEY`, `GOOGLE_API_KEY`, or `--api-key`: API key
/// - `NOMEN_MODEL` or `--model`: Gemini model identifier
/// - `NOMEN_BASE_URL` or `--base-url`: API root
/// - `NOMEN_COMMENT_MARKER` or `--comment-marker`: Comment marker
/// - `NOMEN_OUTPUT` or `--output`: Output format
///
/// # Example
///
/// ```no_run
/// use nomen::NomenConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = NomenConfig::load().expect("failed to load configuration");
/// let api_key = config.resolve_api_key().expect("API key required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "NOMEN",
    discovery(
        dotfile_name = ".nomen.toml",
        config_file_name = "nomen.toml",
        app_name = "nomen"
    )
)]
pub struct NomenConfig {
    /// API key for the Generative Language API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-key <KEY>` or `-k <KEY>`
    /// - Environment: `NOMEN_API_KEY`, `GEMINI_API_KEY`, or `GOOGLE_API_KEY`
    /// - Config file: `api_key = "..."`
    #[ortho_config(cli_short = 'k')]
    pub api_key: Option<String>,

    /// Gemini model identifier.
    ///
    /// Bare ids such as `gemini-pro` are expanded to `models/gemini-pro`.
    /// Defaults to `models/gemini-1.0-pro-latest`.
    #[ortho_config(cli_short = 'm')]
    pub model: String,

    /// Root URL of the Generative Language API.
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// HTTP timeout for the model request, in seconds.
    #[ortho_config(cli_short = 't')]
    pub timeout_seconds: u64,

    /// Marker prefixed to every inserted comment line.
    ///
    /// Defaults to `"# "`. The marker is never derived from the file type.
    #[ortho_config(cli_short = 'c')]
    pub comment_marker: String,

    /// Label written on the header line above the explanation.
    #[ortho_config(cli_short = 'l')]
    pub header_label: String,

    /// Selected text passed directly instead of on stdin.
    ///
    /// Can be provided via:
    /// - CLI: `--selection <TEXT>` or `-s <TEXT>`
    #[ortho_config(cli_short = 's')]
    pub selection: Option<String>,

    /// Document to edit in place; requires `start_line`.
    ///
    /// Can be provided via:
    /// - CLI: `--file <PATH>` or `-f <PATH>`
    #[ortho_config(cli_short = 'f')]
    pub file: Option<String>,

    /// First selected line of `file` (1-based).
    #[ortho_config(cli_short = 'L')]
    pub start_line: Option<u32>,

    /// Last selected line of `file` (1-based, inclusive). Defaults to
    /// `start_line`.
    #[ortho_config(cli_short = 'E')]
    pub end_line: Option<u32>,

    /// Output format: `filter`, `insertion`, or `json`.
    ///
    /// Can be provided via:
    /// - CLI: `--output <FORMAT>` or `-o <FORMAT>`
    /// - Environment: `NOMEN_OUTPUT`
    /// - Config file: `output = "json"`
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,
}

impl Default for NomenConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            comment_marker: DEFAULT_COMMENT_MARKER.to_owned(),
            header_label: DEFAULT_HEADER_LABEL.to_owned(),
            selection: None,
            file: None,
            start_line: None,
            end_line: None,
            output: None,
        }
    }
}

impl NomenConfig {
    /// Resolves the API key from configuration or the fallback environment
    /// variables.
    ///
    /// Empty values are treated as missing.
    ///
    /// # Errors
    ///
    /// Returns [`NomenError::MissingApiKey`] when no source provides a key.
    pub fn resolve_api_key(&self) -> Result<String, NomenError> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| {
                FALLBACK_API_KEY_VARS
                    .iter()
                    .find_map(|name| env::var(name).ok().filter(|key| !key.is_empty()))
            })
            .ok_or(NomenError::MissingApiKey)
    }

    /// Builds the model client configuration for `api_key`.
    #[must_use]
    pub fn gemini_config(&self, api_key: impl Into<String>) -> GeminiConfig {
        GeminiConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_model(self.model.clone())
            .with_timeout(Duration::from_secs(self.timeout_seconds))
    }

    /// Comment marker and header label for inserted blocks.
    #[must_use]
    pub fn comment_style(&self) -> CommentStyle {
        CommentStyle::new(self.comment_marker.clone(), self.header_label.clone())
    }

    /// Parses the configured output format, defaulting to
    /// [`OutputFormat::Filter`].
    ///
    /// # Errors
    ///
    /// Returns [`NomenError::Configuration`] for unknown format names.
    pub fn output_format(&self) -> Result<OutputFormat, NomenError> {
        self.output.as_deref().map_or_else(
            || Ok(OutputFormat::default()),
            |raw| {
                raw.parse::<OutputFormat>()
                    .map_err(|error| NomenError::Configuration {
                        message: error.to_string(),
                    })
            },
        )
    }

    /// Determines where the selection comes from.
    ///
    /// # Errors
    ///
    /// Returns [`NomenError::Configuration`] when sources conflict or a line
    /// range is given without a file, and [`NomenError::InvalidSelection`]
    /// when the line range is malformed.
    pub fn selection_mode(&self) -> Result<SelectionMode, NomenError> {
        match (&self.selection, &self.file) {
            (Some(_), Some(_)) => Err(NomenError::Configuration {
                message: "use either --selection or --file, not both".to_owned(),
            }),
            (Some(text), None) => {
                self.reject_orphan_lines()?;
                Ok(SelectionMode::Literal(text.clone()))
            }
            (None, Some(path)) => {
                let start = self.start_line.ok_or_else(|| NomenError::Configuration {
                    message: "--start-line is required with --file".to_owned(),
                })?;
                Ok(SelectionMode::FileRange {
                    path: Utf8PathBuf::from(path),
                    range: LineRange::new(start, self.end_line)?,
                })
            }
            (None, None) => {
                self.reject_orphan_lines()?;
                Ok(SelectionMode::Stdin)
            }
        }
    }

    fn reject_orphan_lines(&self) -> Result<(), NomenError> {
        if self.start_line.is_some() || self.end_line.is_some() {
            return Err(NomenError::Configuration {
                message: "--start-line and --end-line require --file".to_owned(),
            });
        }
        Ok(())
    }
}
