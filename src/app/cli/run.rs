//! Run and configs command implementations.

use std::path::{Path, PathBuf};

use clap::Args;

use super::prompt;
use crate::app::api::{InvalidRowPolicy, RunOptions};
use crate::domain::AppError;

#[derive(Args)]
pub struct RunArgs {
    /// Mapping file (NUM, RECEPTOR, LIGAND, xc, yc, zc, xs, ys, zs)
    #[arg(short, long)]
    mapping: Option<PathBuf>,
    /// Directory containing receptor .pdb/.mol2 files
    #[arg(short, long)]
    receptors: Option<PathBuf>,
    /// Directory containing ligand .pdb/.mol2 files
    #[arg(short, long)]
    ligands: Option<PathBuf>,
    /// Results directory name
    #[arg(short = 'o', long)]
    results: Option<String>,
    /// Submit each job script to the scheduler
    #[arg(short, long, conflicts_with = "no_submit")]
    submit: bool,
    /// Write job scripts without submitting them
    #[arg(long)]
    no_submit: bool,
    /// Reuse existing .pdbqt files instead of running the preparation tools
    #[arg(long)]
    skip_prepare: bool,
    /// Write configs for valid rows even when other rows are malformed
    #[arg(long)]
    skip_invalid_rows: bool,
}

fn row_policy(skip_invalid_rows: bool) -> InvalidRowPolicy {
    if skip_invalid_rows { InvalidRowPolicy::Skip } else { InvalidRowPolicy::Abort }
}

/// Fill in missing values interactively.
fn resolve_run_inputs(args: RunArgs) -> Result<RunOptions, AppError> {
    let mapping = prompt::path_or_prompt(args.mapping, "Enter map file name", "map file")?;
    let (receptors, ligands) = if args.skip_prepare {
        (args.receptors.unwrap_or_default(), args.ligands.unwrap_or_default())
    } else {
        (
            prompt::path_or_prompt(args.receptors, "Enter receptor directory", "receptor directory")?,
            prompt::path_or_prompt(args.ligands, "Enter ligand directory", "ligand directory")?,
        )
    };
    let results = match args.results {
        Some(value) => value,
        None => prompt::text("Enter a name for results directory", "results directory")?,
    };
    let submit = match (args.submit, args.no_submit) {
        (true, _) => true,
        (_, true) => false,
        _ => prompt::submit_flag()?,
    };

    Ok(RunOptions {
        mapping,
        receptors,
        ligands,
        results,
        submit,
        skip_prepare: args.skip_prepare,
        invalid_rows: row_policy(args.skip_invalid_rows),
    })
}

pub fn run_pipeline(args: RunArgs, config: Option<&Path>) -> Result<(), AppError> {
    let options = resolve_run_inputs(args)?;
    let result = crate::app::api::run(&options, config)?;

    if result.verification.as_ref().is_some_and(|report| !report.is_complete()) {
        println!("⚠️  Some structures were not prepared; their jobs will fail until fixed.");
    }
    println!(
        "✅ Results will be written under {}/ ({} job(s))",
        options.results,
        result.jobs.scripts.len()
    );
    Ok(())
}

pub fn run_configs(
    mapping: &Path,
    skip_invalid_rows: bool,
    config: Option<&Path>,
) -> Result<(), AppError> {
    crate::app::api::configs(mapping, row_policy(skip_invalid_rows), config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_args() -> RunArgs {
        RunArgs {
            mapping: Some(PathBuf::from("map.csv")),
            receptors: Some(PathBuf::from("rec")),
            ligands: Some(PathBuf::from("lig")),
            results: Some("results".to_string()),
            submit: false,
            no_submit: true,
            skip_prepare: false,
            skip_invalid_rows: false,
        }
    }

    #[test]
    fn supplied_arguments_need_no_prompt() {
        let options = resolve_run_inputs(full_args()).unwrap();

        assert_eq!(options.mapping, PathBuf::from("map.csv"));
        assert_eq!(options.receptors, PathBuf::from("rec"));
        assert_eq!(options.ligands, PathBuf::from("lig"));
        assert_eq!(options.results, "results");
        assert!(!options.submit);
        assert_eq!(options.invalid_rows, InvalidRowPolicy::Abort);
    }

    #[test]
    fn submit_flag_and_row_policy_are_carried_over() {
        let args = RunArgs { submit: true, no_submit: false, skip_invalid_rows: true, ..full_args() };

        let options = resolve_run_inputs(args).unwrap();

        assert!(options.submit);
        assert_eq!(options.invalid_rows, InvalidRowPolicy::Skip);
    }

    #[test]
    fn skip_prepare_does_not_ask_for_input_directories() {
        let args = RunArgs { receptors: None, ligands: None, skip_prepare: true, ..full_args() };

        let options = resolve_run_inputs(args).unwrap();

        assert!(options.skip_prepare);
        assert_eq!(options.receptors, PathBuf::new());
        assert_eq!(options.ligands, PathBuf::new());
    }
}
