//! ローディング表示付きボタン

use leptos::prelude::*;

#[component]
pub fn LoadingButton<F>(
    #[prop(into)] is_loading: Signal<bool>,
    text: &'static str,
    loading_text: &'static str,
    on_click: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="btn btn-primary"
            class:loading=move || is_loading.get()
            disabled=move || is_loading.get()
            on:click={
                let on_click = on_click.clone();
                move |_| on_click(())
            }
        >
            {move || if is_loading.get() { loading_text } else { text }}
        </button>
    }
}
