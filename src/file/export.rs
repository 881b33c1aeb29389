// Text exports of patterns (JSON and RON)

use crate::file::FileError;
use crate::model::Pattern;
use std::str::FromStr;

/// Text format for exporting a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Ron,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Ron => "ron",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "ron" => Ok(ExportFormat::Ron),
            other => Err(FileError::UnknownFormat(other.to_string())),
        }
    }
}

/// Serialize a pattern to a human-editable text format
pub fn export_pattern(pattern: &Pattern, format: ExportFormat) -> Result<String, FileError> {
    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(pattern)?,
        ExportFormat::Ron => {
            ron::ser::to_string_pretty(pattern, ron::ser::PrettyConfig::default())?
        }
    };
    Ok(text)
}

/// Parse a pattern from a text export
pub fn import_pattern(text: &str, format: ExportFormat) -> Result<Pattern, FileError> {
    let pattern: Pattern = match format {
        ExportFormat::Json => serde_json::from_str(text)?,
        ExportFormat::Ron => ron::from_str(text)?,
    };
    Ok(pattern)
}
