//! 端末セッション
//!
//! `AppStore` を端末から操作する。フォーム入力 → 検証 → リサーチの順に進め、
//! 状態に残ったエラーは `RequestFailed` として返す。

use crate::cli::OutputFormat;
use crate::error::{ResearchToolError, Result};
use crate::render;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use research_tool_common::{AppStore, EntityType, FormField, FormInput, ResearchService};
use std::future::Future;
use std::time::Duration;

pub struct Session<S> {
    store: AppStore<S>,
    format: OutputFormat,
}

impl<S: ResearchService> Session<S> {
    pub fn new(service: S, format: OutputFormat) -> Self {
        Self { store: AppStore::new(service), format }
    }

    pub fn store(&self) -> &AppStore<S> {
        &self.store
    }

    /// フォームに入力する
    pub fn fill(&mut self, input: &FormInput) {
        self.store.update_field(FormField::Name, &input.name);
        self.store.update_field(FormField::Affiliation, &input.affiliation);
        self.store.update_field(FormField::EntityType, input.entity_type.as_str());
    }

    /// 本人確認を実行して結果を表示
    pub async fn verify(&mut self) -> Result<()> {
        with_spinner("Verifying...", self.store.submit_verification()).await;
        self.check_error()?;

        if let Some(result) = self.store.state().verification_result() {
            match self.format {
                OutputFormat::Text => println!("{}", render::render_verification(result)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
            }
        }
        Ok(())
    }

    /// リサーチレポートを生成して表示
    pub async fn research(&mut self) -> Result<()> {
        with_spinner("Generating Research...", self.store.submit_research()).await;
        self.check_error()?;

        let state = self.store.state();
        if let Some(report) = state.research_result() {
            match self.format {
                OutputFormat::Text => println!(
                    "{}",
                    render::render_research(report, state.verification_result())
                ),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            }
        }
        Ok(())
    }

    /// 対話モード
    ///
    /// 失敗しても終了せず、続けるかどうかを尋ねる。
    pub async fn run_interactive(&mut self) -> Result<()> {
        println!("🔎 AI Research Tool - 本人確認とリサーチ\n");

        loop {
            let input = prompt_form(self.store.state().form())?;
            self.fill(&input);

            match self.verify().await {
                Ok(()) => {
                    let generate = Confirm::new()
                        .with_prompt("Generate Research?")
                        .default(true)
                        .interact()?;
                    if generate {
                        if let Err(e) = self.research().await {
                            eprintln!("✗ {}", e);
                        }
                    }
                }
                Err(ResearchToolError::RequestFailed(message)) => eprintln!("✗ {}", message),
                Err(e) => return Err(e),
            }

            let again = Confirm::new()
                .with_prompt("別の対象を確認しますか？")
                .default(false)
                .interact()?;
            if !again {
                break;
            }
        }

        Ok(())
    }

    fn check_error(&self) -> Result<()> {
        match self.store.state().error() {
            Some(message) => Err(ResearchToolError::RequestFailed(message.to_string())),
            None => Ok(()),
        }
    }
}

/// フォームを対話入力（前回値を初期値にする）
fn prompt_form(previous: &FormInput) -> Result<FormInput> {
    let name: String = Input::new()
        .with_prompt("Name")
        .with_initial_text(previous.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let affiliation: String = Input::new()
        .with_prompt("Affiliation")
        .with_initial_text(previous.affiliation.clone())
        .allow_empty(true)
        .interact_text()?;

    let labels: Vec<&str> = EntityType::ALL.iter().map(|t| t.label()).collect();
    let default = EntityType::ALL
        .iter()
        .position(|t| *t == previous.entity_type)
        .unwrap_or(0);
    let selected = Select::new()
        .with_prompt("Entity Type")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(FormInput {
        name,
        affiliation,
        entity_type: EntityType::ALL[selected],
    })
}

async fn with_spinner<F: Future<Output = ()>>(message: &'static str, fut: F) {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    fut.await;

    spinner.finish_and_clear();
}
