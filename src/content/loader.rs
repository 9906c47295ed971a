//! Loader for level and settings files.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::LevelTemplate;
use super::validation::ValidationError;
use crate::core::GameSettings;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Ron {
        file: String,
        source: ron::error::SpannedError,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Json {
        file: String,
        source: serde_json::Error,
    },
    #[error("Failed to load {file}: unsupported extension (expected .ron or .json)")]
    UnsupportedFormat { file: String },
    #[error("Room '{0}' is not defined")]
    MissingRoom(String),
    #[error("Level failed validation with {} error(s): {}", .0.len(), join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_level_ron(contents: &str, file: &str) -> Result<LevelTemplate, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Ron {
            file: file.to_string(),
            source,
        })
}

pub fn parse_level_json(contents: &str, file: &str) -> Result<LevelTemplate, ContentLoadError> {
    serde_json::from_str(contents).map_err(|source| ContentLoadError::Json {
        file: file.to_string(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: path.display().to_string(),
        source,
    })
}

/// Load a level file, picking the format from its extension.
/// Validation happens when the level is instantiated.
pub fn load_level(path: &Path) -> Result<LevelTemplate, ContentLoadError> {
    let file = path.display().to_string();
    let contents = read_file(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => parse_level_ron(&contents, &file),
        Some("json") => parse_level_json(&contents, &file),
        _ => Err(ContentLoadError::UnsupportedFormat { file }),
    }
}

/// Load settings, falling back to defaults when the file does not exist.
/// A file that exists but fails to parse is an error.
pub fn load_settings(path: &Path) -> Result<GameSettings, ContentLoadError> {
    if !path.exists() {
        warn!(
            "Settings file {} not found, using defaults",
            path.display()
        );
        return Ok(GameSettings::default());
    }

    let contents = read_file(path)?;
    ron_options()
        .from_str(&contents)
        .map_err(|source| ContentLoadError::Ron {
            file: path.display().to_string(),
            source,
        })
}
