//! Input discovery: list receptor and ligand structure files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, StructureFile, StructureRole};

/// Structure files found in the two input directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredInputs {
    pub receptors: Vec<StructureFile>,
    pub ligands: Vec<StructureFile>,
}

impl DiscoveredInputs {
    pub fn of_role(&self, role: StructureRole) -> &[StructureFile] {
        match role {
            StructureRole::Receptor => &self.receptors,
            StructureRole::Ligand => &self.ligands,
        }
    }
}

/// Scan both directories and print a count per role.
pub fn execute(receptor_dir: &Path, ligand_dir: &Path) -> Result<DiscoveredInputs, AppError> {
    let receptors = scan(StructureRole::Receptor, receptor_dir)?;
    report(StructureRole::Receptor, receptors.len(), receptor_dir);
    let ligands = scan(StructureRole::Ligand, ligand_dir)?;
    report(StructureRole::Ligand, ligands.len(), ligand_dir);
    Ok(DiscoveredInputs { receptors, ligands })
}

fn report(role: StructureRole, count: usize, dir: &Path) {
    println!("🔍 Found {} {} in {}", count, role.plural(), dir.display());
}

/// List `.pdb` and `.mol2` files directly inside `dir`, as absolute paths
/// sorted by file name. Subdirectories are not searched.
///
/// Fails when two inputs share a prepared output path (`x.pdb` next to
/// `x.mol2`), since one tool run would overwrite the other's result.
pub fn scan(role: StructureRole, dir: &Path) -> Result<Vec<StructureFile>, AppError> {
    let to_error = |source: std::io::Error| AppError::InputDirectory {
        role,
        path: dir.to_path_buf(),
        source,
    };

    let root = std::path::absolute(dir).map_err(to_error)?;
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(&root).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        let path = root.join(entry.file_name());
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let files: Vec<StructureFile> =
        paths.into_iter().filter_map(|path| StructureFile::from_path(role, path)).collect();
    ensure_distinct_outputs(role, &files)?;
    Ok(files)
}

fn ensure_distinct_outputs(role: StructureRole, files: &[StructureFile]) -> Result<(), AppError> {
    let mut seen: HashMap<&Path, &Path> = HashMap::new();
    for file in files {
        if let Some(first) = seen.insert(&file.prepared, &file.source) {
            return Err(AppError::PreparedCollision {
                role,
                first: first.to_path_buf(),
                second: file.source.clone(),
                prepared: file.prepared.clone(),
            });
        }
    }
    Ok(())
}
