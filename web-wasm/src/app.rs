//! メインアプリケーションコンポーネント
//!
//! `AppState` をシグナルに入れてコンテキストで配る。
//! 通信を挟むアクションは begin → spawn_local で await → complete の順。

use leptos::prelude::*;
use leptos::task::spawn_local;
use research_tool_common::{ActivePage, AppState, FormField, ResearchService};

use crate::api::backend::FetchResearchService;
use crate::components::{
    footer::Footer,
    header::Header,
    research_page::ResearchPage,
    verify_page::VerifyPage,
};

/// ビューに配るストア
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState>,
    service: StoredValue<FetchResearchService>,
}

impl AppContext {
    pub fn new(service: FetchResearchService) -> Self {
        Self {
            state: RwSignal::new(AppState::new()),
            service: StoredValue::new(service),
        }
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.state.update(|s| s.update_field(field, &value));
    }

    pub fn set_active_page(&self, page: ActivePage) {
        self.state.update(|s| s.set_active_page(page));
    }

    /// 検証を実行
    pub fn submit_verification(&self) {
        let mut pending = None;
        self.state.update(|s| pending = s.begin_verification());
        let Some(pending) = pending else {
            return;
        };

        let state = self.state;
        let service = self.service.get_value();
        spawn_local(async move {
            let outcome = service.verify(&pending.input).await;
            state.update(|s| {
                s.complete_verification(pending.ticket, outcome);
            });
        });
    }

    /// リサーチ生成を実行
    pub fn submit_research(&self) {
        let mut pending = None;
        self.state.update(|s| pending = s.begin_research());
        let Some(pending) = pending else {
            return;
        };

        let state = self.state;
        let service = self.service.get_value();
        spawn_local(async move {
            let outcome = service
                .generate_research(&pending.entity_info, pending.entity_type)
                .await;
            state.update(|s| {
                s.complete_research(pending.ticket, outcome);
            });
        });
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(FetchResearchService::from_build_env());
    provide_context(ctx);

    // ページが変わったときだけ描き直す（入力中のフォーカスを保つ）
    let state = ctx.state;
    let active_page = Memo::new(move |_| state.with(|s| s.active_page()));

    view! {
        <div class="app">
            <Header />

            <main class="container">
                {move || match active_page.get() {
                    ActivePage::Verify => view! { <VerifyPage /> }.into_any(),
                    ActivePage::Research => view! { <ResearchPage /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
