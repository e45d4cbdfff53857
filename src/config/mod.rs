pub mod cli;

use crate::core::codes::DATASET_PREFIXES;
use crate::domain::ports::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "postal-gen")]
#[command(about = "Generates the postal code dataset as a sorted JSON array")]
pub struct CliConfig {
    /// Directory the JSON file is written into.
    #[arg(long, default_value = "data")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn prefixes(&self) -> &[i64] {
        &DATASET_PREFIXES
    }
}
