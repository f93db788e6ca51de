//! Rendering of generated config files and job scripts.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, shell_quote};

const CONFIG_TEMPLATE: &str = "config.txt";
const JOB_TEMPLATE: &str = "job.sh";

/// Values substituted into a docking config file.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigContext<'a> {
    pub receptor: &'a str,
    pub ligand: &'a str,
    pub center_x: &'a str,
    pub center_y: &'a str,
    pub center_z: &'a str,
    pub size_x: &'a str,
    pub size_y: &'a str,
    pub size_z: &'a str,
    pub exhaustiveness: u32,
}

/// Values substituted into a batch job script.
#[derive(Debug, Clone, Serialize)]
pub struct JobContext<'a> {
    pub job_name: &'a str,
    pub nodes: u32,
    pub ppn: u32,
    pub walltime: &'a str,
    pub pmem: &'a str,
    pub mem: &'a str,
    pub account: &'a str,
    pub vina: &'a str,
    pub config: &'a str,
    pub out: &'a str,
    pub log: &'a str,
}

/// Template environment with the embedded vinaprep templates loaded.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("shell_quote", |value: String| -> String { shell_quote(&value) });
        env.add_template(CONFIG_TEMPLATE, include_str!("../assets/vinaprep/config.txt.j2"))?;
        env.add_template(JOB_TEMPLATE, include_str!("../assets/vinaprep/job.sh.j2"))?;
        Ok(Self { env })
    }

    pub fn render_config(&self, context: &ConfigContext<'_>) -> Result<String, AppError> {
        Ok(self.env.get_template(CONFIG_TEMPLATE)?.render(context)?)
    }

    pub fn render_job(&self, context: &JobContext<'_>) -> Result<String, AppError> {
        Ok(self.env.get_template(JOB_TEMPLATE)?.render(context)?)
    }
}

/// Commented default settings file written by `vinaprep init`.
pub fn default_settings_toml() -> &'static str {
    include_str!("../assets/vinaprep/vinaprep.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Settings, parse_settings};

    fn job_context<'a>(account: &'a str, log: &'a str) -> JobContext<'a> {
        JobContext {
            job_name: "vina_1",
            nodes: 1,
            ppn: 1,
            walltime: "2:00:00",
            pmem: "1gb",
            mem: "1gb",
            account,
            vina: "/opt/vina/vina",
            config: "config_1.txt",
            out: "results/1/out.pdbqt",
            log,
        }
    }

    #[test]
    fn renders_config_in_fixed_key_order() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine
            .render_config(&ConfigContext {
                receptor: "recA",
                ligand: "ligA",
                center_x: "10.0",
                center_y: "12.0",
                center_z: "8.0",
                size_x: "20",
                size_y: "20",
                size_z: "20",
                exhaustiveness: 20,
            })
            .unwrap();

        assert_eq!(
            rendered,
            "receptor = recA\nligand = ligA\n\ncenter_x = 10.0\ncenter_y = 12.0\ncenter_z = 8.0\n\n\
             size_x = 20\nsize_y = 20\nsize_z = 20\n\nexhaustiveness = 20\n"
        );
    }

    #[test]
    fn renders_job_script_with_directives() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render_job(&job_context("acct_1", "results/1/log")).unwrap();

        assert!(rendered.starts_with("#!/bin/bash\n#PBS -N vina_1\n"));
        assert!(rendered.contains("#PBS -l nodes=1:ppn=1\n"));
        assert!(rendered.contains("#PBS -l walltime=2:00:00\n"));
        assert!(rendered.contains("#PBS -l pmem=1gb\n#PBS -l mem=1gb\n#PBS -A acct_1\n#PBS -j oe\n"));
        assert!(rendered.contains("cd \"$PBS_O_WORKDIR\""));
        assert!(rendered.ends_with(
            "/opt/vina/vina --config config_1.txt --out results/1/out.pdbqt --log results/1/log\n"
        ));
    }

    #[test]
    fn empty_account_omits_directive() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render_job(&job_context("", "results/1/log")).unwrap();

        assert!(!rendered.contains("#PBS -A"));
        assert!(rendered.contains("#PBS -l mem=1gb\n#PBS -j oe\n"));
    }

    #[test]
    fn quotes_unsafe_paths_in_command_line() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render_job(&job_context("", "my results/1/log")).unwrap();

        assert!(rendered.contains("--log 'my results/1/log'"));
    }

    #[test]
    fn default_settings_file_matches_built_in_defaults() {
        let parsed = parse_settings(default_settings_toml()).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
