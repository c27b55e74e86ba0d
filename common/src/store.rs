//! アプリケーションストア
//!
//! `AppState` とサービスをまとめて持ち、検証・リサーチの一連の流れを実行する。
//! グローバルには置かず、ビュー側へ参照で渡す。

use crate::service::ResearchService;
use crate::state::{AppState, FormField};

pub struct AppStore<S> {
    state: AppState,
    service: S,
}

impl<S: ResearchService> AppStore<S> {
    pub fn new(service: S) -> Self {
        Self { state: AppState::new(), service }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn update_field(&mut self, field: FormField, value: &str) {
        self.state.update_field(field, value);
    }

    /// 検証を実行（失敗は状態のエラーに入る）
    pub async fn submit_verification(&mut self) {
        let Some(pending) = self.state.begin_verification() else {
            return;
        };
        let outcome = self.service.verify(&pending.input).await;
        self.state.complete_verification(pending.ticket, outcome);
    }

    /// リサーチ生成を実行（成功時はリサーチページへ）
    pub async fn submit_research(&mut self) {
        let Some(pending) = self.state.begin_research() else {
            return;
        };
        let outcome = self
            .service
            .generate_research(&pending.entity_info, pending.entity_type)
            .await;
        self.state.complete_research(pending.ticket, outcome);
    }
}
