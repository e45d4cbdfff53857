use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Generating postal code blocks...");
        let blocks = self.pipeline.generate().await?;
        let total: usize = blocks.iter().map(|b| b.codes.len()).sum();
        tracing::info!("Generated {} codes in {} blocks", total, blocks.len());

        tracing::info!("Merging and sorting...");
        let merged = self.pipeline.merge(blocks).await?;
        tracing::info!("Merged into {} codes", merged.codes.len());

        tracing::info!("Writing output...");
        let output_path = self.pipeline.write(merged).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
