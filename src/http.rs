//! リサーチサービスのHTTPクライアント（ネイティブ版）
//!
//! POSTしてステータスと本文を読み、正規化は `decode_response` に任せる。
//! リトライはしない。

use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;
use research_tool_common::{
    decode_response, ApiEndpoint, EntityType, Error, FormInput, ResearchRequest, ResearchResult,
    ResearchService, VerificationResult, VerifyRequest,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub struct HttpResearchService {
    http: Client,
    endpoint: ApiEndpoint,
}

impl HttpResearchService {
    pub fn new(endpoint: ApiEndpoint, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoint(), config.timeout())
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> research_tool_common::Result<T> {
        tracing::debug!(url, "POST");

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        tracing::debug!(url, status = status.as_u16(), bytes = text.len(), "response received");

        decode_response(status.as_u16(), &text).inspect_err(|e| {
            tracing::warn!(url, kind = e.kind(), "{}", e);
        })
    }
}

#[async_trait(?Send)]
impl ResearchService for HttpResearchService {
    async fn verify(&self, input: &FormInput) -> research_tool_common::Result<VerificationResult> {
        self.post(&self.endpoint.verify_url(), &VerifyRequest::from(input))
            .await
    }

    async fn generate_research(
        &self,
        entity_info: &VerificationResult,
        entity_type: EntityType,
    ) -> research_tool_common::Result<ResearchResult> {
        let request = ResearchRequest { entity_info, entity_type };
        self.post(&self.endpoint.research_url(), &request).await
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    tracing::warn!("transport error: {}", e);
    Error::Transport(e.to_string())
}
