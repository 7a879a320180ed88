//! Loader for the RON settings file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerSettings;

/// Error type for settings loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse settings from RON text. `file_name` is only used in errors.
pub fn parse_settings(
    contents: &str,
    file_name: &str,
) -> Result<ControllerSettings, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load settings from a RON file on disk.
pub fn load_settings(path: &Path) -> Result<ControllerSettings, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_settings(&contents, &file_name)
}
