pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SuiteConfig;

pub use adapters::SystemProcessRunner;
pub use self::core::{probes::ProbeRunner, suite::TestSuite};
pub use utils::error::{Result, SuiteError};
