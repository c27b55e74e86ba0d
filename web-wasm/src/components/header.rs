//! ヘッダーコンポーネント

use leptos::prelude::*;
use research_tool_common::ActivePage;
use crate::app::AppContext;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;

    let active_page = Memo::new(move |_| state.with(|s| s.active_page()));
    let can_view_research = Memo::new(move |_| state.with(|s| s.can_view_research()));
    let nav_class = move |page: ActivePage| {
        if active_page.get() == page {
            "nav-button active"
        } else {
            "nav-button"
        }
    };

    view! {
        <header class="header">
            <div class="header-inner">
                <div class="brand">
                    <div class="logo">"AI"</div>
                    <h1>"AI Research Tool"</h1>
                </div>
                <nav class="nav">
                    <button
                        class=move || nav_class(ActivePage::Verify)
                        on:click=move |_| ctx.set_active_page(ActivePage::Verify)
                    >
                        "Verify Entity"
                    </button>
                    // 結果がないうちは押せない
                    <button
                        class=move || nav_class(ActivePage::Research)
                        disabled=move || !can_view_research.get()
                        on:click=move |_| ctx.set_active_page(ActivePage::Research)
                    >
                        "Research Results"
                    </button>
                </nav>
            </div>
        </header>
    }
}
