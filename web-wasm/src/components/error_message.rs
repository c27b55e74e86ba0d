//! エラーメッセージコンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <div class="error-message" role="alert">
                <span class="error-icon">"!"</span>
                <p>{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
