//! Job generation: one scheduler script and results directory per config,
//! optionally submitted.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, DockingConfig, JobScript, ResultsLayout, job_file_name};
use crate::ports::{ToolInvocation, ToolRunner};
use crate::services::JobContext;

/// Options for job generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOptions {
    /// Results root, relative to the working directory unless absolute.
    pub results: String,
    /// Hand each script to the scheduler after writing it.
    pub submit: bool,
}

/// A script the scheduler did not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub id: u64,
    pub reason: String,
}

/// Scripts written and, when submitting, what the scheduler accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobBatch {
    pub scripts: Vec<JobScript>,
    pub submitted: Vec<u64>,
    pub failed_submissions: Vec<SubmissionFailure>,
}

/// Create the results layout and write `job_<id>.sh` for every config.
///
/// Existing directories are reused. A failed write stops the batch and leaves
/// earlier scripts in place.
pub fn execute<R: ToolRunner>(
    ctx: &AppContext<R>,
    configs: &[DockingConfig],
    options: &JobOptions,
) -> Result<JobBatch, AppError> {
    let layout = ResultsLayout::new(&options.results);
    fs::create_dir_all(ctx.resolve(layout.root()))?;

    let mut batch = JobBatch::default();
    for config in configs {
        let script = write_job(ctx, &layout, config)?;

        if options.submit {
            submit(ctx, &script, &mut batch);
        }
        batch.scripts.push(script);
    }

    println!("✅ Wrote {} job sh files", batch.scripts.len());
    if options.submit {
        println!("✅ Submitted {} job sh files", batch.submitted.len());
        if !batch.failed_submissions.is_empty() {
            println!("⚠️  {} job(s) were not submitted", batch.failed_submissions.len());
        }
    }
    Ok(batch)
}

fn write_job<R: ToolRunner>(
    ctx: &AppContext<R>,
    layout: &ResultsLayout,
    config: &DockingConfig,
) -> Result<JobScript, AppError> {
    let output_dir = layout.job_dir(config.id);
    fs::create_dir_all(ctx.resolve(&output_dir))?;

    let settings = ctx.settings();
    let scheduler = &settings.scheduler;
    let job_name = scheduler.job_name(config.id);
    let out = layout.out_file(config.id).to_string_lossy().into_owned();
    let log = layout.log_file(config.id).to_string_lossy().into_owned();
    let content = ctx.templates().render_job(&JobContext {
        job_name: &job_name,
        nodes: scheduler.nodes,
        ppn: scheduler.ppn,
        walltime: &scheduler.walltime,
        pmem: &scheduler.pmem,
        mem: &scheduler.mem,
        account: &scheduler.account,
        vina: &settings.tools.vina,
        config: &config.file_name,
        out: &out,
        log: &log,
    })?;

    let file_name = job_file_name(config.id);
    let path = ctx.work_dir().join(&file_name);
    fs::write(&path, content)?;
    make_executable(&path)?;

    Ok(JobScript { id: config.id, path, file_name, output_dir })
}

fn submit<R: ToolRunner>(ctx: &AppContext<R>, script: &JobScript, batch: &mut JobBatch) {
    let submit_command = ctx.settings().scheduler.submit_command.as_str();
    let invocation = ToolInvocation::new(submit_command, ctx.work_dir()).arg(&script.file_name);

    let reason = match ctx.runner().run(&invocation) {
        Ok(status) if status.success() => {
            batch.submitted.push(script.id);
            return;
        }
        Ok(status) => match status.code {
            Some(code) => format!("{} exited with status {}", invocation.display(), code),
            None => format!("{} was terminated by a signal", invocation.display()),
        },
        Err(err) => err.to_string(),
    };

    eprintln!("⚠️  Submission of {} failed: {}", script.file_name, reason);
    batch.failed_submissions.push(SubmissionFailure { id: script.id, reason });
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), AppError> {
    Ok(())
}
