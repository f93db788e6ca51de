mod tool_runner;

pub use tool_runner::{OutputTarget, ToolInvocation, ToolRunner, ToolStatus};
