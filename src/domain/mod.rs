pub mod artifacts;
pub mod error;
pub mod mapping;
pub mod settings;
pub mod shell;
pub mod structure;
pub mod verification;

pub use artifacts::{DockingConfig, JobScript, ResultsLayout, config_file_name, job_file_name};
pub use error::AppError;
pub use mapping::{
    MAPPING_HEADER, MappingParse, MappingRow, RowError, RowErrorKind, parse_mapping,
};
pub use settings::{
    DockingSettings, SETTINGS_FILE, SchedulerSettings, Settings, ToolSettings, parse_settings,
};
pub use shell::shell_quote;
pub use structure::{StructureFile, StructureRole, prepared_path, prepared_reference};
pub use verification::{RoleVerification, VerificationReport};
