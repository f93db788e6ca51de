//! Output verification: check that every input has a prepared `.pdbqt`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::app::commands::discover::DiscoveredInputs;
use crate::domain::{AppError, RoleVerification, StructureFile, StructureRole, VerificationReport};

/// Check prepared outputs for both roles and maintain the failure logs in
/// `work_dir`.
///
/// Each role's failure log lists the raw inputs whose output is missing; it
/// is removed when every output of that role exists.
pub fn execute(work_dir: &Path, inputs: &DiscoveredInputs) -> Result<VerificationReport, AppError> {
    let receptors = verify_role(work_dir, StructureRole::Receptor, &inputs.receptors)?;
    let ligands = verify_role(work_dir, StructureRole::Ligand, &inputs.ligands)?;
    Ok(VerificationReport { receptors, ligands })
}

fn verify_role(
    work_dir: &Path,
    role: StructureRole,
    files: &[StructureFile],
) -> Result<RoleVerification, AppError> {
    let missing: Vec<_> =
        files.iter().filter(|file| !file.prepared.is_file()).map(|file| file.source.clone()).collect();
    let report = RoleVerification { role, expected: files.len(), missing };

    let log_path = work_dir.join(role.failure_log());
    if report.is_complete() {
        remove_if_present(&log_path)?;
        println!("✅ All {} {} prepared", report.expected, role.plural());
    } else {
        let mut log = fs::File::create(&log_path)?;
        for path in &report.missing {
            writeln!(log, "{}", path.display())?;
        }
        println!(
            "⚠️  {} of {} {} not prepared. See {}",
            report.missing.len(),
            report.expected,
            role.plural(),
            role.failure_log()
        );
    }

    Ok(report)
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
        _ => Ok(()),
    }
}
