//! Filter-chain orchestration

pub mod chain;
pub mod finalize;
pub mod launcher;
pub mod orchestrator;
pub mod workspace;

pub use chain::FilterChain;
pub use finalize::{copy_file, finalize, finalize_with, FinalOutput, OutputLocation, Promote};
pub use orchestrator::{Orchestrator, PostExecuteOutcome, RunReport, RunState};
pub use workspace::WorkingFile;
