//! リサーチ結果ページ

use leptos::prelude::*;
use research_tool_common::{ResearchSection, SectionLayout};
use crate::app::AppContext;

#[component]
pub fn ResearchPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;

    let report = Memo::new(move |_| state.with(|s| s.research_result().cloned()));
    let subject = Memo::new(move |_| {
        state.with(|s| {
            s.verification_result()
                .map(|r| r.full_name.clone())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "the entity".to_string())
        })
    });

    move || match report.get() {
        None => view! {
            <div class="card empty-state">
                <p class="text-muted">"No research data available. Please verify an entity first."</p>
            </div>
        }
        .into_any(),
        Some(report) => view! {
            <div class="card">
                <div class="card-header">
                    <h2>"Research Results"</h2>
                    <p class="text-muted">{move || format!("Comprehensive research for {}", subject.get())}</p>
                </div>
                <div class="research-sections">
                    {report
                        .sections()
                        .map(|(section, items)| {
                            view! { <ResearchSectionView section=section items=items.to_vec() /> }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ResearchSectionView(section: ResearchSection, items: Vec<String>) -> impl IntoView {
    let (section_class, list_class) = section_classes(section);

    view! {
        <section class=section_class>
            <h3>{section.title()}</h3>
            {if items.is_empty() {
                view! { <p class="text-muted empty">{ResearchSection::EMPTY_TEXT}</p> }.into_any()
            } else {
                view! {
                    <ul class=list_class>
                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}

/// (セクションのclass, リストのclass)
fn section_classes(section: ResearchSection) -> (&'static str, &'static str) {
    let section_class = if section.shaded() {
        "research-section shaded"
    } else {
        "research-section"
    };
    let list_class = match section.layout() {
        SectionLayout::Stacked => "section-list stacked",
        SectionLayout::Grid => "section-list grid",
    };
    (section_class, list_class)
}
