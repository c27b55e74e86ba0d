//! リモートサービスのインターフェース
//!
//! ネイティブ版（reqwest）とWASM版（fetch）がそれぞれ実装する。
//! ブラウザ側のFutureはJsValueを保持するので `?Send`。

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{EntityType, FormInput, ResearchResult, VerificationResult};

#[async_trait(?Send)]
pub trait ResearchService {
    /// POST {base}/verify
    async fn verify(&self, input: &FormInput) -> Result<VerificationResult>;

    /// POST {base}/research
    async fn generate_research(
        &self,
        entity_info: &VerificationResult,
        entity_type: EntityType,
    ) -> Result<ResearchResult>;
}
