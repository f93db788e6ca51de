use std::path::PathBuf;

use crate::domain::structure::StructureRole;

/// Prepared-output check for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleVerification {
    pub role: StructureRole,
    pub expected: usize,
    /// Raw inputs whose prepared output does not exist.
    pub missing: Vec<PathBuf>,
}

impl RoleVerification {
    pub fn prepared(&self) -> usize {
        self.expected - self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Outcome of checking prepared outputs for both roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub receptors: RoleVerification,
    pub ligands: RoleVerification,
}

impl VerificationReport {
    pub fn is_complete(&self) -> bool {
        self.receptors.is_complete() && self.ligands.is_complete()
    }

    pub fn roles(&self) -> [&RoleVerification; 2] {
        [&self.receptors, &self.ligands]
    }
}
