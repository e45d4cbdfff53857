use serde::{Deserialize, Serialize};

/// One generated block: a prefix and its 1000 codes in ascending order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeBlock {
    pub prefix: i64,
    pub codes: Vec<String>,
}

/// All blocks merged and sorted, plus the JSON document written to disk.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub codes: Vec<String>,
    pub json_output: String,
}
