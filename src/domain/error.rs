use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::mapping::RowError;
use crate::domain::structure::StructureRole;

/// Library-wide error type for vinaprep operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input directory could not be listed.
    #[error("Cannot read {role} directory '{}': {source}", .path.display())]
    InputDirectory {
        role: StructureRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two inputs of one role would be prepared into the same output file.
    #[error(
        "{role} inputs '{}' and '{}' would both be prepared as '{}'",
        .first.display(),
        .second.display(),
        .prepared.display()
    )]
    PreparedCollision { role: StructureRole, first: PathBuf, second: PathBuf, prepared: PathBuf },

    /// Mapping file could not be read.
    #[error("Cannot read mapping file '{}': {source}", .path.display())]
    MappingRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Mapping header does not start with the required column prologue.
    #[error("Mapping file header must start with '{expected}', found '{found}'")]
    MappingHeader { expected: &'static str, found: String },

    /// One or more mapping rows failed validation.
    #[error("Mapping file has {} invalid row(s):\n{}", .errors.len(), format_row_errors(.errors))]
    MalformedMapping { errors: Vec<RowError> },

    /// Template rendering failed.
    #[error("Failed to render {template}: {details}")]
    TemplateRender { template: String, details: String },

    /// External tool could not be launched.
    #[error("Failed to run '{tool}': {details}")]
    ExternalTool { tool: String, details: String },

    /// Explicitly requested config file is missing.
    #[error("Config file not found: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    /// Config file already exists and overwrite was not requested.
    #[error("Config file already exists: {}. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

    /// Config values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Interactive prompt failed.
    #[error("{0}")]
    Prompt(String),
}

fn format_row_errors(errors: &[RowError]) -> String {
    errors.iter().map(|err| format!("  {}", err)).collect::<Vec<_>>().join("\n")
}

impl AppError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::TemplateRender {
            template: err.name().unwrap_or("template").to_string(),
            details: err.to_string(),
        }
    }
}
