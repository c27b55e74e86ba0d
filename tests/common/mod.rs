//! テスト用のリサーチサービス（axum）
//!
//! 固定レスポンスを返し、受け取ったリクエストを記録する。

#![allow(dead_code)]

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use research_tool_common::ApiEndpoint;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// 固定レスポンス
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(data: Value) -> Self {
        Self::json(200, json!({"success": true, "timestamp": "2024-05-01T00:00:00", "data": data}))
    }

    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body: body.to_string() }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self { status, body: body.to_string() }
    }
}

/// 受信したリクエスト（Content-Type, 本体）
#[derive(Default)]
pub struct Recorded {
    pub verify: Mutex<Vec<(String, Value)>>,
    pub research: Mutex<Vec<(String, Value)>>,
}

impl Recorded {
    pub fn verify_calls(&self) -> Vec<(String, Value)> {
        self.verify.lock().unwrap().clone()
    }

    pub fn research_calls(&self) -> Vec<(String, Value)> {
        self.research.lock().unwrap().clone()
    }
}

pub fn ada_json() -> Value {
    json!({
        "full_name": "Ada Lovelace",
        "affiliation": "University of London",
        "title": "Mathematician",
        "confidence_score": 95,
        "brief_description": "Wrote the first published algorithm",
        "verification_status": "success"
    })
}

pub fn report_json() -> Value {
    json!({
        "research_focus": ["Analytical Engine", "Symbolic computation"],
        "projects_publications": ["Notes on the Analytical Engine (1843)"],
        "institutional_connections": [],
        "funding_history": [],
        "public_mentions": ["Ada Lovelace Day"],
        "strategic_insights": ["Position as pioneer of programming"],
        "entity_type": "academic",
        "generated_at": "2024-05-01T12:34:56.123456"
    })
}

/// モックサービスを起動
pub async fn spawn_service(verify: Reply, research: Reply) -> anyhow::Result<(ApiEndpoint, Arc<Recorded>)> {
    let recorded = Arc::new(Recorded::default());

    let verify_handler = {
        let recorded = recorded.clone();
        move |headers: HeaderMap, body: String| {
            let recorded = recorded.clone();
            let reply = verify.clone();
            async move {
                recorded.verify.lock().unwrap().push(capture(&headers, &body));
                respond(reply)
            }
        }
    };

    let research_handler = {
        let recorded = recorded.clone();
        move |headers: HeaderMap, body: String| {
            let recorded = recorded.clone();
            let reply = research.clone();
            async move {
                recorded.research.lock().unwrap().push(capture(&headers, &body));
                respond(reply)
            }
        }
    };

    let app = Router::new()
        .route("/api/verify", post(verify_handler))
        .route("/api/research", post(research_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((ApiEndpoint::new(format!("http://{}/api", addr)), recorded))
}

/// 何も待ち受けていないエンドポイント
pub async fn closed_endpoint() -> anyhow::Result<ApiEndpoint> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(ApiEndpoint::new(format!("http://{}/api", addr)))
}

fn capture(headers: &HeaderMap, body: &str) -> (String, Value) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (content_type, serde_json::from_str(body).unwrap_or(Value::Null))
}

fn respond(reply: Reply) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body)
}
