//! Tool and scheduler settings loaded from `vinaprep.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Default settings file name looked up in the working directory.
pub const SETTINGS_FILE: &str = "vinaprep.toml";

/// Complete settings, resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// External preparation tools and the docking engine.
    #[serde(default)]
    pub tools: ToolSettings,
    /// Docking engine parameters written into every config file.
    #[serde(default)]
    pub docking: DockingSettings,
    /// Batch scheduler directives and submission command.
    #[serde(default)]
    pub scheduler: SchedulerSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.tools.validate()?;
        self.docking.validate()?;
        self.scheduler.validate()?;
        Ok(())
    }
}

/// External command-line tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSettings {
    /// Receptor preparation command.
    #[serde(default = "default_receptor_prep")]
    pub receptor_prep: String,
    /// Extra arguments appended after `-r <in> -o <out>`.
    #[serde(default)]
    pub receptor_prep_args: Vec<String>,
    /// Ligand preparation command.
    #[serde(default = "default_ligand_prep")]
    pub ligand_prep: String,
    /// Extra arguments appended after `-l <in> -o <out>`.
    #[serde(default = "default_ligand_prep_args")]
    pub ligand_prep_args: Vec<String>,
    /// Docking engine binary invoked from job scripts.
    #[serde(default = "default_vina")]
    pub vina: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            receptor_prep: default_receptor_prep(),
            receptor_prep_args: Vec::new(),
            ligand_prep: default_ligand_prep(),
            ligand_prep_args: default_ligand_prep_args(),
            vina: default_vina(),
        }
    }
}

impl ToolSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("tools.receptor_prep", &self.receptor_prep),
            ("tools.ligand_prep", &self.ligand_prep),
            ("tools.vina", &self.vina),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::invalid_config(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}

fn default_receptor_prep() -> String {
    "prepare_receptor4.py".to_string()
}

fn default_ligand_prep() -> String {
    "prepare_ligand4.py".to_string()
}

fn default_ligand_prep_args() -> Vec<String> {
    vec!["-A".to_string(), "hydrogens".to_string()]
}

fn default_vina() -> String {
    "vina".to_string()
}

/// Docking engine parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DockingSettings {
    /// Search effort passed to the engine.
    #[serde(default = "default_exhaustiveness")]
    pub exhaustiveness: u32,
}

impl Default for DockingSettings {
    fn default() -> Self {
        Self { exhaustiveness: default_exhaustiveness() }
    }
}

impl DockingSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.exhaustiveness == 0 {
            return Err(AppError::invalid_config("docking.exhaustiveness must be greater than 0"));
        }
        Ok(())
    }
}

fn default_exhaustiveness() -> u32 {
    20
}

/// PBS-style scheduler directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerSettings {
    /// Command used to submit a job script.
    #[serde(default = "default_submit_command")]
    pub submit_command: String,
    #[serde(default = "default_one")]
    pub nodes: u32,
    /// Processors per node.
    #[serde(default = "default_one")]
    pub ppn: u32,
    /// Wall-clock limit as `H:MM:SS`.
    #[serde(default = "default_walltime")]
    pub walltime: String,
    /// Memory per process.
    #[serde(default = "default_memory")]
    pub pmem: String,
    #[serde(default = "default_memory")]
    pub mem: String,
    /// Account charged for the job. Empty omits the directive.
    #[serde(default = "default_account")]
    pub account: String,
    #[serde(default = "default_job_name_prefix")]
    pub job_name_prefix: String,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            submit_command: default_submit_command(),
            nodes: default_one(),
            ppn: default_one(),
            walltime: default_walltime(),
            pmem: default_memory(),
            mem: default_memory(),
            account: default_account(),
            job_name_prefix: default_job_name_prefix(),
        }
    }
}

impl SchedulerSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.submit_command.trim().is_empty() {
            return Err(AppError::invalid_config("scheduler.submit_command must not be empty"));
        }
        if self.nodes == 0 {
            return Err(AppError::invalid_config("scheduler.nodes must be greater than 0"));
        }
        if self.ppn == 0 {
            return Err(AppError::invalid_config("scheduler.ppn must be greater than 0"));
        }
        if !is_walltime(&self.walltime) {
            return Err(AppError::invalid_config(format!(
                "scheduler.walltime '{}' must be formatted as H:MM:SS",
                self.walltime
            )));
        }
        if self.pmem.trim().is_empty() || self.mem.trim().is_empty() {
            return Err(AppError::invalid_config("scheduler memory limits must not be empty"));
        }
        if self.job_name_prefix.trim().is_empty() {
            return Err(AppError::invalid_config("scheduler.job_name_prefix must not be empty"));
        }
        Ok(())
    }

    /// Scheduler job name for a mapping id.
    pub fn job_name(&self, id: u64) -> String {
        format!("{}_{}", self.job_name_prefix, id)
    }
}

fn is_walltime(value: &str) -> bool {
    let parts: Vec<&str> = value.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return false;
    };
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    digits(hours)
        && minutes.len() == 2
        && seconds.len() == 2
        && digits(minutes)
        && digits(seconds)
        && minutes.parse::<u32>().is_ok_and(|m| m < 60)
        && seconds.parse::<u32>().is_ok_and(|s| s < 60)
}

fn default_submit_command() -> String {
    "qsub".to_string()
}

fn default_one() -> u32 {
    1
}

fn default_walltime() -> String {
    "2:00:00".to_string()
}

fn default_memory() -> String {
    "1gb".to_string()
}

fn default_account() -> String {
    "cdm8_f_g_bc_default".to_string()
}

fn default_job_name_prefix() -> String {
    "vina".to_string()
}

/// Parse and validate settings from TOML content.
pub fn parse_settings(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
