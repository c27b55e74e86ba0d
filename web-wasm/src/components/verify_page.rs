//! 本人確認ページ

use leptos::prelude::*;
use research_tool_common::{EntityType, FormField, VerificationResult};
use crate::app::AppContext;
use crate::components::{error_message::ErrorMessage, loading_button::LoadingButton};

#[component]
pub fn VerifyPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;

    let loading = Memo::new(move |_| state.with(|s| s.loading()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let verification = Memo::new(move |_| state.with(|s| s.verification_result().cloned()));

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Entity Verification"</h2>
                <p class="text-muted">
                    "Verify an academic professional or startup founder to generate research."
                </p>
            </div>

            <div class="card-body">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        placeholder="John Smith"
                        prop:value=move || state.with(|s| s.form().name.clone())
                        on:input=move |ev| ctx.update_field(FormField::Name, event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="affiliation">"Affiliation"</label>
                    <input
                        type="text"
                        id="affiliation"
                        name="affiliation"
                        placeholder="Stanford University or Acme Inc."
                        prop:value=move || state.with(|s| s.form().affiliation.clone())
                        on:input=move |ev| ctx.update_field(FormField::Affiliation, event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="entityType">"Entity Type"</label>
                    <select
                        id="entityType"
                        name="entityType"
                        on:change=move |ev| ctx.update_field(FormField::EntityType, event_target_value(&ev))
                    >
                        {EntityType::ALL
                            .into_iter()
                            .map(|entity_type| {
                                view! {
                                    <option
                                        value=entity_type.as_str()
                                        selected=move || state.with(|s| s.form().entity_type == entity_type)
                                    >
                                        {entity_type.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <LoadingButton
                    is_loading=loading
                    text="Verify Entity"
                    loading_text="Verifying..."
                    on_click=move |_| ctx.submit_verification()
                />

                <ErrorMessage message=error />

                // 通信中は結果カードを隠す
                {move || {
                    verification
                        .get()
                        .filter(|_| !loading.get())
                        .map(|result| view! { <VerificationCard result=result /> })
                }}
            </div>
        </div>
    }
}

/// 検証結果カード
#[component]
fn VerificationCard(result: VerificationResult) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;
    let loading = Memo::new(move |_| state.with(|s| s.loading()));
    let confidence = result.confidence_label();

    view! {
        <div class="result-card">
            <div class="result-header">
                <h3>"Verification Result"</h3>
            </div>
            <dl class="result-grid">
                <div>
                    <dt>"Full Name"</dt>
                    <dd>{result.full_name}</dd>
                </div>
                <div>
                    <dt>"Affiliation"</dt>
                    <dd>{result.affiliation}</dd>
                </div>
                <div>
                    <dt>"Title"</dt>
                    <dd>{result.title}</dd>
                </div>
                <div>
                    <dt>"Confidence Score"</dt>
                    <dd>{confidence}</dd>
                </div>
                <div class="wide">
                    <dt>"Description"</dt>
                    <dd>{result.brief_description}</dd>
                </div>
            </dl>
            <LoadingButton
                is_loading=loading
                text="Generate Research"
                loading_text="Generating Research..."
                on_click=move |_| ctx.submit_research()
            />
        </div>
    }
}
