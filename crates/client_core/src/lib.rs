//! Client side of the program runner: sends execution requests to the server
//! and renders their output into an [`OutputRegion`].

pub mod config;
mod dispatcher;
pub mod error;
pub mod output;
pub mod transport;
pub mod triggers;

pub use config::{load_settings, Settings};
pub use dispatcher::{CommandDispatcher, ExecutionOutcome};
pub use error::DispatchError;
pub use output::{OutputRegion, RegionWrite, TextRegion};
pub use transport::RunClient;
pub use triggers::{Trigger, TriggerSet};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
