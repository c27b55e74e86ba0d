//! リサーチサービス連携（fetch版）
//!
//! POSTしてステータスと本文を読み、正規化は `decode_response` に任せる。

use async_trait::async_trait;
use research_tool_common::{
    decode_response, ApiEndpoint, EntityType, Error, FormInput, ResearchRequest, ResearchResult,
    ResearchService, Result, VerificationResult, VerifyRequest, DEFAULT_API_URL,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetch APIを使うサービス実装
#[derive(Debug, Clone)]
pub struct FetchResearchService {
    endpoint: ApiEndpoint,
}

impl FetchResearchService {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self { endpoint }
    }

    /// ビルド時の RESEARCH_TOOL_API_URL を使う（未設定ならデフォルト）
    pub fn from_build_env() -> Self {
        let base_url = option_env!("RESEARCH_TOOL_API_URL").unwrap_or(DEFAULT_API_URL);
        Self::new(ApiEndpoint::new(base_url))
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        let body = serde_json::to_string(body)?;
        let (status, text) = fetch_json(url, &body).await.map_err(js_error)?;

        decode_response(status, &text).inspect_err(|e| {
            gloo::console::warn!(format!("{} failed ({}): {}", url, e.kind(), e));
        })
    }
}

#[async_trait(?Send)]
impl ResearchService for FetchResearchService {
    async fn verify(&self, input: &FormInput) -> Result<VerificationResult> {
        self.post(&self.endpoint.verify_url(), &VerifyRequest::from(input)).await
    }

    async fn generate_research(
        &self,
        entity_info: &VerificationResult,
        entity_type: EntityType,
    ) -> Result<ResearchResult> {
        let request = ResearchRequest { entity_info, entity_type };
        self.post(&self.endpoint.research_url(), &request).await
    }
}

/// fetch呼び出し（ステータスと本文テキストを返す）
async fn fetch_json(url: &str, body: &str) -> std::result::Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// JS例外を通信エラーへ
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));

    gloo::console::error!(format!("request failed: {}", message));
    Error::Transport(message)
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_uses_error_message() {
        let value: JsValue = js_sys::Error::new("Failed to fetch").into();
        assert_eq!(js_error(value), Error::Transport("Failed to fetch".to_string()));
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_uses_string_value() {
        let value = JsValue::from_str("window is not available");
        assert_eq!(js_error(value), Error::Transport("window is not available".to_string()));
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_opaque_value() {
        match js_error(JsValue::from_f64(42.0)) {
            Error::Transport(message) => assert!(message.contains("42"), "{}", message),
            other => panic!("Transport になっていない: {:?}", other),
        }
    }

    #[wasm_bindgen_test]
    async fn wasm_fetch_json_returns_status_and_text() {
        let (status, text) = fetch_json("data:text/plain,hello", "{}")
            .await
            .expect("fetch失敗");
        assert_eq!(status, 200);
        assert_eq!(text, "hello");
    }

    #[wasm_bindgen_test]
    async fn wasm_verify_unreachable_is_transport() {
        let service = FetchResearchService::new(ApiEndpoint::new("http://127.0.0.1:9/api"));
        let input = FormInput {
            name: "Ada Lovelace".to_string(),
            affiliation: "University of London".to_string(),
            entity_type: EntityType::Academic,
        };

        let result = service.verify(&input).await;
        assert!(matches!(result, Err(Error::Transport(_))), "{:?}", result);
    }
}
