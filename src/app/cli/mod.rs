//! CLI Adapter.

mod init;
mod prepare;
mod prompt;
mod run;

use std::path::PathBuf;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vinaprep")]
#[command(version)]
#[command(
    about = "Prepare docking structures and emit AutoDock Vina batch jobs",
    long_about = None
)]
struct Cli {
    /// Settings file (defaults to ./vinaprep.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare structures, write configs and job scripts, optionally submit
    #[clap(visible_alias = "r")]
    Run(run::RunArgs),
    /// Convert receptors and ligands to .pdbqt and verify the outputs
    #[clap(visible_alias = "p")]
    Prepare {
        /// Directory containing receptor .pdb/.mol2 files
        #[arg(short, long)]
        receptors: PathBuf,
        /// Directory containing ligand .pdb/.mol2 files
        #[arg(short, long)]
        ligands: PathBuf,
    },
    /// Check that every structure has a prepared .pdbqt
    #[clap(visible_alias = "v")]
    Verify {
        /// Directory containing receptor .pdb/.mol2 files
        #[arg(short, long)]
        receptors: PathBuf,
        /// Directory containing ligand .pdb/.mol2 files
        #[arg(short, long)]
        ligands: PathBuf,
        /// Exit with status 1 when any output is missing
        #[arg(long)]
        strict: bool,
    },
    /// Write config_<id>.txt files from a mapping file
    #[clap(visible_alias = "c")]
    Configs {
        /// Mapping file (NUM, RECEPTOR, LIGAND, xc, yc, zc, xs, ys, zs)
        #[arg(short, long)]
        mapping: PathBuf,
        /// Write configs for valid rows even when other rows are malformed
        #[arg(long)]
        skip_invalid_rows: bool,
    },
    /// Write a default vinaprep.toml
    #[clap(visible_alias = "i")]
    Init {
        /// Overwrite an existing vinaprep.toml
        #[arg(short, long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Run(args) => run::run_pipeline(args, config).map(|_| 0),
        Commands::Prepare { receptors, ligands } => {
            prepare::run_prepare(&receptors, &ligands, config).map(|_| 0)
        }
        Commands::Verify { receptors, ligands, strict } => {
            prepare::run_verify(&receptors, &ligands, strict, config)
        }
        Commands::Configs { mapping, skip_invalid_rows } => {
            run::run_configs(&mapping, skip_invalid_rows, config).map(|_| 0)
        }
        Commands::Init { force } => init::run_init(force).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
