//! Shared testing utilities for vinaprep CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MAPPING_HEADER: &str = "NUM, RECEPTOR, LIGAND, xc, yc, zc, xs, ys, zs";

/// Fake preparation tool: logs its argv and writes the `-o` target unless the
/// input name contains `broken`.
const FAKE_PREP: &str = r#"#!/bin/sh
echo "$0 $*" >> "$(dirname "$0")/calls.log"
in=""
out=""
while [ $# -gt 0 ]; do
    case "$1" in
        -r|-l) in="$2"; shift 2 ;;
        -o) out="$2"; shift 2 ;;
        *) shift ;;
    esac
done
echo "preparing $in"
case "$in" in
    *broken*) exit 1 ;;
esac
echo "REMARK prepared" > "$out"
"#;

/// Fake scheduler: records each submitted script.
const FAKE_QSUB: &str = r#"#!/bin/sh
echo "$1" >> "$(dirname "$0")/submitted.log"
echo "42.fake-scheduler"
"#;

/// Testing harness providing an isolated work directory with fake tools.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with fake tools and a settings file
    /// pointing at them.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake tool directory");

        let ctx = Self { root, work_dir, bin_dir };
        ctx.install_tool("fake_prep", FAKE_PREP);
        ctx.install_tool("fake_qsub", FAKE_QSUB);
        ctx.write_settings("");
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory holding the fake tools and their call logs.
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Build a command for invoking the compiled `vinaprep` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vinaprep").expect("Failed to locate vinaprep binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write `vinaprep.toml` wired to the fake tools, followed by `extra`.
    pub fn write_settings(&self, extra: &str) {
        let prep = self.bin_dir.join("fake_prep");
        let qsub = self.bin_dir.join("fake_qsub");
        let content = format!(
            "[tools]\nreceptor_prep = \"{}\"\nligand_prep = \"{}\"\n\n[scheduler]\nsubmit_command = \"{}\"\n{}",
            prep.display(),
            prep.display(),
            qsub.display(),
            extra
        );
        fs::write(self.work_dir.join("vinaprep.toml"), content).expect("Failed to write settings");
    }

    /// Create a structure file relative to the work directory.
    pub fn add_structure(&self, rel: &str) {
        let path = self.work_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create structure directory");
        }
        fs::write(path, "ATOM      1  N   ALA A   1\n").expect("Failed to write structure");
    }

    /// Write a mapping file with the standard header and the given rows.
    pub fn write_mapping(&self, name: &str, rows: &[&str]) {
        let mut content = String::from(MAPPING_HEADER);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(self.work_dir.join(name), content).expect("Failed to write mapping");
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.work_dir.join(rel).exists()
    }

    /// Lines the fake tools appended to `calls.log`.
    pub fn tool_calls(&self) -> Vec<String> {
        Self::lines(&self.bin_dir.join("calls.log"))
    }

    /// Scripts the fake scheduler received.
    pub fn submitted(&self) -> Vec<String> {
        Self::lines(&self.bin_dir.join("submitted.log"))
    }

    /// The standard one-receptor, one-ligand layout with a single mapping row.
    pub fn seed_single_pair(&self) {
        self.add_structure("rec/recA.pdb");
        self.add_structure("lig/ligA.pdb");
        self.write_mapping("map.csv", &["1,rec/recA.pdb,lig/ligA.pdb,10.0,12.0,8.0,20,20,20"]);
    }

    fn lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[cfg(unix)]
    fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");
    }

    #[cfg(not(unix))]
    fn install_tool(&self, name: &str, script: &str) {
        fs::write(self.bin_dir.join(name), script).expect("Failed to write fake tool");
    }

    /// Root of the temporary tree, for paths outside the work directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
