mod process_runner;
mod template_engine;

pub use process_runner::ProcessToolRunner;
pub use template_engine::{ConfigContext, JobContext, TemplateEngine, default_settings_toml};
