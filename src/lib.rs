pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::GeneratorEngine, pipeline::PostalCodePipeline};
pub use utils::error::{CodeGenError, Result};
