//! Structure files discovered in the receptor and ligand input directories.

use std::fmt;
use std::path::{Path, PathBuf};

/// File extensions recognised as raw structure inputs (case-sensitive).
pub const STRUCTURE_EXTENSIONS: [&str; 2] = ["pdb", "mol2"];

/// Extension of a docking-ready structure.
pub const PREPARED_EXTENSION: &str = "pdbqt";

/// Which side of a docking pair a structure file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureRole {
    Receptor,
    Ligand,
}

impl StructureRole {
    pub const ALL: [StructureRole; 2] = [StructureRole::Receptor, StructureRole::Ligand];

    pub fn name(&self) -> &'static str {
        match self {
            StructureRole::Receptor => "receptor",
            StructureRole::Ligand => "ligand",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            StructureRole::Receptor => "receptors",
            StructureRole::Ligand => "ligands",
        }
    }

    /// Log collecting the preparation tool's stdout for this role.
    pub fn warnings_log(&self) -> &'static str {
        match self {
            StructureRole::Receptor => "receptor_preparation_warnings.log",
            StructureRole::Ligand => "ligand_preparation_warnings.log",
        }
    }

    /// Log listing inputs whose prepared output is missing.
    pub fn failure_log(&self) -> &'static str {
        match self {
            StructureRole::Receptor => "receptors_failed.log",
            StructureRole::Ligand => "ligands_failed.log",
        }
    }

    /// Flag the preparation tool expects before the input path.
    pub fn input_flag(&self) -> &'static str {
        match self {
            StructureRole::Receptor => "-r",
            StructureRole::Ligand => "-l",
        }
    }
}

impl fmt::Display for StructureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw structure input with its expected prepared output resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureFile {
    pub role: StructureRole,
    /// Absolute path of the raw input.
    pub source: PathBuf,
    /// File name without extension.
    pub stem: String,
    /// Where the preparation tool is asked to write its output.
    pub prepared: PathBuf,
}

impl StructureFile {
    /// Build an entity from an input path. Returns `None` unless the file name
    /// carries a recognised structure extension.
    pub fn from_path(role: StructureRole, source: PathBuf) -> Option<Self> {
        if !has_structure_extension(&source) {
            return None;
        }
        let stem = source.file_stem()?.to_string_lossy().into_owned();
        let prepared = prepared_path(&source);
        Some(Self { role, source, stem, prepared })
    }
}

/// True when the path's final extension is `.pdb` or `.mol2`.
pub fn has_structure_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| STRUCTURE_EXTENSIONS.contains(&ext))
}

/// Canonical prepared-output path: the final extension replaced by `.pdbqt`.
pub fn prepared_path(source: &Path) -> PathBuf {
    source.with_extension(PREPARED_EXTENSION)
}

/// Resolve a structure reference from the mapping file to the file the
/// docking engine should read. Raw structure names map to their prepared
/// output; anything else is passed through untouched.
pub fn prepared_reference(reference: &str) -> String {
    let path = Path::new(reference);
    if has_structure_extension(path) {
        prepared_path(path).to_string_lossy().into_owned()
    } else {
        reference.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdb_input_maps_to_pdbqt() {
        let file =
            StructureFile::from_path(StructureRole::Receptor, PathBuf::from("/data/rec/1abc.pdb"))
                .unwrap();
        assert_eq!(file.stem, "1abc");
        assert_eq!(file.prepared, PathBuf::from("/data/rec/1abc.pdbqt"));
    }

    #[test]
    fn mol2_input_replaces_whole_extension() {
        let file =
            StructureFile::from_path(StructureRole::Ligand, PathBuf::from("/data/lig/aspirin.mol2"))
                .unwrap();
        assert_eq!(file.prepared, PathBuf::from("/data/lig/aspirin.pdbqt"));
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert!(!has_structure_extension(Path::new("rec.PDB")));
        assert!(!has_structure_extension(Path::new("rec.pdbqt")));
        assert!(!has_structure_extension(Path::new("notes.txt")));
        assert!(has_structure_extension(Path::new("a.b.mol2")));
    }

    #[test]
    fn from_path_rejects_other_extensions() {
        assert!(StructureFile::from_path(StructureRole::Ligand, PathBuf::from("x.sdf")).is_none());
    }

    #[test]
    fn prepared_reference_rewrites_only_raw_structures() {
        assert_eq!(prepared_reference("rec/1abc.pdb"), "rec/1abc.pdbqt");
        assert_eq!(prepared_reference("lig.mol2"), "lig.pdbqt");
        assert_eq!(prepared_reference("recA"), "recA");
        assert_eq!(prepared_reference("ready.pdbqt"), "ready.pdbqt");
    }

    #[test]
    fn roles_name_their_logs() {
        assert_eq!(StructureRole::Receptor.failure_log(), "receptors_failed.log");
        assert_eq!(StructureRole::Ligand.warnings_log(), "ligand_preparation_warnings.log");
    }
}
