use crate::domain::model::{CodeBlock, MergeResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn prefixes(&self) -> &[i64];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn generate(&self) -> Result<Vec<CodeBlock>>;
    async fn merge(&self, blocks: Vec<CodeBlock>) -> Result<MergeResult>;
    async fn write(&self, result: MergeResult) -> Result<String>;
}
