//! リモートサービスの通信契約
//!
//! リクエスト本体の型と、レスポンスエンベロープの正規化。
//! HTTPライブラリには依存しない（ステータスと本文文字列だけを見る）。
//!
//! 正常系:   `{"success": true, "data": ...}`
//! 業務エラー: `{"success": false, "error": "..."}`
//! HTTPエラー: `{"error": {"brief_description": "..."}}`

use crate::error::{Error, Result};
use crate::types::{EntityType, FormInput, VerificationResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// デフォルトのAPIベースURL
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// ベースURLを上書きする環境変数
pub const API_URL_ENV: &str = "RESEARCH_TOOL_API_URL";

const HTTP_ERROR_FALLBACK: &str = "An unexpected error occurred";
const SERVICE_ERROR_FALLBACK: &str = "Request failed";

/// POST {base}/verify の本体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest<'a> {
    pub name: &'a str,
    pub affiliation: &'a str,
    pub entity_type: EntityType,
}

impl<'a> From<&'a FormInput> for VerifyRequest<'a> {
    fn from(input: &'a FormInput) -> Self {
        Self {
            name: &input.name,
            affiliation: &input.affiliation,
            entity_type: input.entity_type,
        }
    }
}

/// POST {base}/research の本体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest<'a> {
    pub entity_info: &'a VerificationResult,
    pub entity_type: EntityType,
}

/// APIエンドポイント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base_url: String,
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self { base_url: DEFAULT_API_URL.to_string() };
        }
        Self { base_url: trimmed.to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn verify_url(&self) -> String {
        format!("{}/verify", self.base_url)
    }

    pub fn research_url(&self) -> String {
        format!("{}/research", self.base_url)
    }
}

/// レスポンスを正規化して `data` を取り出す
///
/// 判定順序:
/// 1. 本文がJSONでなければ Transport
/// 2. 2xx以外なら `error.brief_description`（なければ既定文言）で Service
/// 3. `success` が真値でなければ `error`（なければ既定文言）で Service
///    （エンベロープの形でないJSONもここに落ちる）
/// 4. `data` を `T` としてデコード（欠落・型不一致は Transport）
///
/// # Examples
/// ```
/// use research_tool_common::{decode_response, Error, VerificationResult};
///
/// let body = r#"{"error": {"brief_description": "Rate limit exceeded"}}"#;
/// let result = decode_response::<VerificationResult>(429, body);
/// assert_eq!(result, Err(Error::Service("Rate limit exceeded".into())));
/// ```
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;

    if !(200..=299).contains(&status) {
        let message = value
            .get("error")
            .and_then(brief_description)
            .unwrap_or(HTTP_ERROR_FALLBACK);
        tracing::debug!(status, error = message, "service returned http error");
        return Err(Error::Service(message.to_string()));
    }

    // 形の崩れた本文も success が真でなければ業務エラー扱い
    if !value.get("success").is_some_and(is_truthy) {
        let message = value
            .get("error")
            .and_then(|e| e.as_str().or_else(|| brief_description(e)))
            .filter(|m| !m.is_empty())
            .unwrap_or(SERVICE_ERROR_FALLBACK);
        return Err(Error::Service(message.to_string()));
    }

    let data = value
        .get("data")
        .filter(|d| !d.is_null())
        .cloned()
        .ok_or_else(|| Error::Transport("Response is missing data".to_string()))?;

    Ok(serde_json::from_value(data)?)
}

/// 空文字は未設定とみなす
fn brief_description(error: &Value) -> Option<&str> {
    error
        .get("brief_description")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

/// JSON値の真偽（false / null / 0 / 空文字 が偽）
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
