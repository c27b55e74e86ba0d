//! AI Research Tool Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態・サービス契約

pub mod types;
pub mod error;
pub mod envelope;
pub mod service;
pub mod state;
pub mod store;

pub use types::{
    EntityType, FormInput, ResearchResult, ResearchSection, SectionLayout, VerificationResult,
};
pub use error::{Error, Result};
pub use envelope::{
    decode_response, ApiEndpoint, ResearchRequest, VerifyRequest, API_URL_ENV, DEFAULT_API_URL,
};
pub use service::ResearchService;
pub use state::{
    ActivePage, AppState, FormField, PendingResearch, PendingVerification, RequestId,
};
pub use store::AppStore;
