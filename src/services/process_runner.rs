use std::fs::OpenOptions;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{OutputTarget, ToolInvocation, ToolRunner, ToolStatus};

/// Runs tools as child processes, blocking until each exits.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolStatus, AppError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command.current_dir(&invocation.current_dir);
        command.stdin(Stdio::null());

        if let OutputTarget::AppendTo(log) = &invocation.stdout {
            let file = OpenOptions::new().create(true).append(true).open(log).map_err(|e| {
                AppError::ExternalTool {
                    tool: invocation.program.clone(),
                    details: format!("cannot open log {}: {}", log.display(), e),
                }
            })?;
            command.stdout(Stdio::from(file));
        }

        let status = command.status().map_err(|e| AppError::ExternalTool {
            tool: invocation.program.clone(),
            details: e.to_string(),
        })?;

        Ok(ToolStatus { code: status.code() })
    }
}
