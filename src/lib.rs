pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use app::demos::build_demo;
pub use app::persistence::{Persistence, SaveOutcome};
pub use config::{toml_config::SamplerConfig, CliConfig};
pub use crate::core::runner::{DemoRun, DemoRunner};
pub use domain::model::{DemoReport, Principle};
pub use utils::error::{Result, SamplerError};
