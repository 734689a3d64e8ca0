pub mod config;
mod context;
mod orchestrator;
mod report;
mod writer;

pub use context::RunContext;
pub use orchestrator::{run_pipeline, run_pipeline_reported};
pub use report::{ProgressReporter, RunReport, StageName, StageReport};
pub use writer::{slice_file_name, OutputCategory};
