pub mod probes;
pub mod suite;
pub mod tools;

pub use crate::domain::model::{SuiteReport, ToolCommand, ToolKind, ToolOutcome};
pub use crate::domain::ports::ProcessRunner;
pub use crate::utils::error::Result;
