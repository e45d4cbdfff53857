use crate::core::codes::generate_codes;
use crate::core::{CodeBlock, ConfigProvider, MergeResult, Pipeline, Result, Storage};

/// File name of the dataset inside the configured output directory.
pub const OUTPUT_FILE: &str = "postal_codes.json";

pub struct PostalCodePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PostalCodePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PostalCodePipeline<S, C> {
    async fn generate(&self) -> Result<Vec<CodeBlock>> {
        let mut blocks = Vec::new();
        for &prefix in self.config.prefixes() {
            tracing::debug!("Generating block for prefix {}", prefix);
            blocks.push(CodeBlock {
                prefix,
                codes: generate_codes(prefix),
            });
        }
        Ok(blocks)
    }

    async fn merge(&self, blocks: Vec<CodeBlock>) -> Result<MergeResult> {
        let mut codes: Vec<String> = blocks.into_iter().flat_map(|b| b.codes).collect();
        // Fixed-width digit strings, so lexicographic order equals numeric order.
        codes.sort();

        let json_output = serde_json::to_string_pretty(&codes)?;
        Ok(MergeResult { codes, json_output })
    }

    async fn write(&self, result: MergeResult) -> Result<String> {
        tracing::debug!("Writing {} codes to {}", result.codes.len(), OUTPUT_FILE);
        self.storage
            .write_file(OUTPUT_FILE, result.json_output.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILE))
    }
}
