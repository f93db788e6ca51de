use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{OutputTarget, ToolInvocation, ToolRunner, ToolStatus};

/// Records invocations and emulates preparation tools by writing the file
/// named after `-o`.
#[derive(Default)]
pub struct FakeToolRunner {
    pub invocations: Mutex<Vec<ToolInvocation>>,
    failing_inputs: Mutex<HashSet<PathBuf>>,
    missing_programs: Mutex<HashSet<String>>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the tool exit 1 without output for this input path.
    pub fn fail_for(&self, input: impl Into<PathBuf>) {
        self.failing_inputs.lock().unwrap().insert(input.into());
    }

    /// Make every invocation of `program` fail to start.
    pub fn missing_program(&self, program: &str) {
        self.missing_programs.lock().unwrap().insert(program.to_string());
    }

    pub fn programs(&self) -> Vec<String> {
        self.invocations.lock().unwrap().iter().map(|i| i.program.clone()).collect()
    }

    pub fn calls_to(&self, program: &str) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().iter().filter(|i| i.program == program).cloned().collect()
    }

    fn value_after(args: &[OsString], flag: &str) -> Option<PathBuf> {
        args.iter().position(|arg| arg == flag).and_then(|i| args.get(i + 1)).map(PathBuf::from)
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolStatus, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.missing_programs.lock().unwrap().contains(&invocation.program) {
            return Err(AppError::ExternalTool {
                tool: invocation.program.clone(),
                details: "No such file or directory".to_string(),
            });
        }

        let input = Self::value_after(&invocation.args, "-r")
            .or_else(|| Self::value_after(&invocation.args, "-l"));

        if let OutputTarget::AppendTo(log) = &invocation.stdout {
            let mut file = OpenOptions::new().create(true).append(true).open(log)?;
            writeln!(file, "{}", invocation.display())?;
        }

        if input.as_ref().is_some_and(|input| self.failing_inputs.lock().unwrap().contains(input)) {
            return Ok(ToolStatus { code: Some(1) });
        }

        if let Some(output) = Self::value_after(&invocation.args, "-o") {
            fs::write(output, "REMARK prepared\n")?;
        }

        Ok(ToolStatus { code: Some(0) })
    }
}
