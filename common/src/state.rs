//! アプリケーション状態
//!
//! 入力フォーム・表示ページ・ローディング・エラー・検証結果・リサーチ結果を保持する。
//! 通信を挟むアクションは `begin_*` / `complete_*` の2段階に分かれていて、
//! 呼び出し側（CLI・Leptos）はその間でサービスを await する。
//!
//! リクエストごとに単調増加の `RequestId` を発行し、実行中のIDと一致しない
//! 完了通知は捨てる。`loading()` は「実行中のIDがある」と同値。

use crate::error::Error;
use crate::types::{EntityType, FormInput, ResearchResult, VerificationResult};

pub const MISSING_FIELDS_MESSAGE: &str = "Name and affiliation are required fields";
pub const VERIFY_FIRST_MESSAGE: &str = "Please verify an entity first";
pub const VERIFY_FAILED_FALLBACK: &str = "Failed to verify entity. Please try again.";
pub const RESEARCH_FAILED_FALLBACK: &str = "Failed to generate research. Please try again.";

/// 表示中のページ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivePage {
    #[default]
    Verify,
    Research,
}

impl ActivePage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivePage::Verify => "verify",
            ActivePage::Research => "research",
        }
    }
}

impl std::str::FromStr for ActivePage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verify" => Ok(ActivePage::Verify),
            "research" => Ok(ActivePage::Research),
            _ => Err(format!("Unknown page: {}", s)),
        }
    }
}

/// フォームの項目名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Affiliation,
    EntityType,
}

impl std::str::FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "affiliation" => Ok(FormField::Affiliation),
            "entityType" | "entity_type" => Ok(FormField::EntityType),
            _ => Err(format!("Unknown form field: {}", s)),
        }
    }
}

/// リクエスト識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// 開始済みの検証リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct PendingVerification {
    pub ticket: RequestId,
    pub input: FormInput,
}

/// 開始済みのリサーチリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct PendingResearch {
    pub ticket: RequestId,
    pub entity_info: VerificationResult,
    pub entity_type: EntityType,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    active_page: ActivePage,
    form: FormInput,
    error: Option<String>,
    verification_result: Option<VerificationResult>,
    research_result: Option<ResearchResult>,
    in_flight: Option<RequestId>,
    last_request: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // =============================================
    // 読み取り
    // =============================================

    pub fn active_page(&self) -> ActivePage {
        self.active_page
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn verification_result(&self) -> Option<&VerificationResult> {
        self.verification_result.as_ref()
    }

    pub fn research_result(&self) -> Option<&ResearchResult> {
        self.research_result.as_ref()
    }

    /// リサーチページへ移動できるか（ナビゲーションの無効化判定）
    pub fn can_view_research(&self) -> bool {
        self.research_result.is_some()
    }

    // =============================================
    // 単純な更新
    // =============================================

    /// フォーム項目を更新（検証はしない）
    pub fn update_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.set_name(value),
            FormField::Affiliation => self.set_affiliation(value),
            FormField::EntityType => {
                let entity_type = value.parse::<EntityType>().unwrap_or_else(|e: String| {
                    tracing::warn!("{}, defaulting to academic", e);
                    EntityType::Academic
                });
                self.set_entity_type(entity_type);
            }
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
    }

    pub fn set_affiliation(&mut self, affiliation: &str) {
        self.form.affiliation = affiliation.to_string();
    }

    pub fn set_entity_type(&mut self, entity_type: EntityType) {
        self.form.entity_type = entity_type;
    }

    /// ページ切替（リサーチ結果の有無はビュー側で判定する）
    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // =============================================
    // 検証
    // =============================================

    /// 検証を開始する
    ///
    /// 名前か所属が空なら通信せずにエラーを設定して `None` を返す。
    pub fn begin_verification(&mut self) -> Option<PendingVerification> {
        if self.form.name.is_empty() || self.form.affiliation.is_empty() {
            self.reject(Error::Validation(MISSING_FIELDS_MESSAGE.to_string()));
            return None;
        }

        let ticket = self.start_request();
        Some(PendingVerification { ticket, input: self.form.clone() })
    }

    /// 検証の完了を反映する
    ///
    /// 失敗時は直前の検証結果を残す。古いチケットなら何もせず `false`。
    pub fn complete_verification(
        &mut self,
        ticket: RequestId,
        outcome: crate::Result<VerificationResult>,
    ) -> bool {
        if !self.finish_request(ticket) {
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(full_name = %result.full_name, "entity verified");
                self.verification_result = Some(result);
            }
            Err(e) => self.fail(e, VERIFY_FAILED_FALLBACK),
        }
        true
    }

    // =============================================
    // リサーチ
    // =============================================

    /// リサーチ生成を開始する
    ///
    /// 検証結果がなければ通信せずにエラーを設定して `None` を返す。
    pub fn begin_research(&mut self) -> Option<PendingResearch> {
        let Some(entity_info) = self.verification_result.clone() else {
            self.reject(Error::Validation(VERIFY_FIRST_MESSAGE.to_string()));
            return None;
        };

        let ticket = self.start_request();
        Some(PendingResearch {
            ticket,
            entity_info,
            entity_type: self.form.entity_type,
        })
    }

    /// リサーチ生成の完了を反映する
    ///
    /// 成功時のみリサーチページへ切り替える。
    pub fn complete_research(
        &mut self,
        ticket: RequestId,
        outcome: crate::Result<ResearchResult>,
    ) -> bool {
        if !self.finish_request(ticket) {
            return false;
        }

        match outcome {
            Ok(result) => {
                self.research_result = Some(result);
                self.active_page = ActivePage::Research;
            }
            Err(e) => self.fail(e, RESEARCH_FAILED_FALLBACK),
        }
        true
    }

    // =============================================
    // 内部処理
    // =============================================

    fn start_request(&mut self) -> RequestId {
        self.last_request += 1;
        let ticket = RequestId(self.last_request);
        if let Some(previous) = self.in_flight.replace(ticket) {
            tracing::debug!(previous = previous.get(), current = ticket.get(), "request superseded");
        }
        self.error = None;
        ticket
    }

    fn finish_request(&mut self, ticket: RequestId) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket = ticket.get(), "discarding stale completion");
            return false;
        }
        self.in_flight = None;
        true
    }

    fn reject(&mut self, error: Error) {
        tracing::debug!(kind = error.kind(), "{}", error);
        self.error = Some(error.to_string());
    }

    fn fail(&mut self, error: Error, fallback: &str) {
        tracing::warn!(kind = error.kind(), "{}", error);
        let message = match error.message() {
            "" => fallback.to_string(),
            m => m.to_string(),
        };
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AppState {
        let mut state = AppState::new();
        state.update_field(FormField::Name, "Ada Lovelace");
        state.update_field(FormField::Affiliation, "University of London");
        state
    }

    fn verified(name: &str) -> VerificationResult {
        VerificationResult {
            full_name: name.to_string(),
            affiliation: "University of London".to_string(),
            title: "Mathematician".to_string(),
            confidence_score: 90.0,
            brief_description: String::new(),
            verification_status: Some("success".to_string()),
        }
    }

    fn research(focus: &str) -> ResearchResult {
        ResearchResult {
            research_focus: vec![focus.to_string()],
            ..Default::default()
        }
    }

    /// 検証済み状態を作る
    fn with_verification() -> AppState {
        let mut state = filled();
        let pending = state.begin_verification().expect("検証が開始されない");
        assert!(state.complete_verification(pending.ticket, Ok(verified("Ada Lovelace"))));
        state
    }

    // =============================================
    // 初期状態・フォーム
    // =============================================

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.active_page(), ActivePage::Verify);
        assert_eq!(state.form(), &FormInput::default());
        assert!(!state.loading());
        assert!(state.error().is_none());
        assert!(state.verification_result().is_none());
        assert!(state.research_result().is_none());
        assert!(!state.can_view_research());
    }

    #[test]
    fn test_update_field_idempotent() {
        let mut state = AppState::new();
        state.update_field(FormField::Name, "Ada");
        let once = state.clone();
        state.update_field(FormField::Name, "Ada");

        assert_eq!(state.form().name, "Ada");
        assert_eq!(state, once);
    }

    #[test]
    fn test_update_field_entity_type() {
        let mut state = AppState::new();
        state.update_field(FormField::EntityType, "startup");
        assert_eq!(state.form().entity_type, EntityType::Startup);

        // 不明な値は academic 扱い
        state.update_field(FormField::EntityType, "company");
        assert_eq!(state.form().entity_type, EntityType::Academic);
    }

    #[test]
    fn test_form_field_from_str() {
        assert_eq!("name".parse::<FormField>(), Ok(FormField::Name));
        assert_eq!("entityType".parse::<FormField>(), Ok(FormField::EntityType));
        assert!("email".parse::<FormField>().is_err());
    }

    // =============================================
    // 検証
    // =============================================

    #[test]
    fn test_begin_verification_requires_name_and_affiliation() {
        for (name, affiliation) in [("", ""), ("Ada", ""), ("", "London")] {
            let mut state = AppState::new();
            state.set_name(name);
            state.set_affiliation(affiliation);

            assert!(state.begin_verification().is_none());
            assert_eq!(state.error(), Some(MISSING_FIELDS_MESSAGE));
            assert!(!state.loading());
        }
    }

    #[test]
    fn test_begin_verification_sets_loading_and_clears_error() {
        let mut state = filled();
        state.set_error("previous");

        let pending = state.begin_verification().expect("検証が開始されない");
        assert!(state.loading());
        assert!(state.error().is_none());
        assert_eq!(pending.input, *state.form());
        assert_eq!(state.in_flight(), Some(pending.ticket));
    }

    #[test]
    fn test_complete_verification_success() {
        let state = with_verification();
        assert!(!state.loading());
        assert!(state.error().is_none());
        assert_eq!(state.verification_result().map(|r| r.full_name.as_str()), Some("Ada Lovelace"));
    }

    #[test]
    fn test_complete_verification_failure_keeps_previous_result() {
        let mut state = with_verification();

        let pending = state.begin_verification().expect("検証が開始されない");
        let applied = state.complete_verification(pending.ticket, Err(Error::Service("X".into())));

        assert!(applied);
        assert_eq!(state.error(), Some("X"));
        assert!(!state.loading());
        assert_eq!(state.verification_result().map(|r| r.full_name.as_str()), Some("Ada Lovelace"));
    }

    #[test]
    fn test_complete_verification_empty_message_uses_fallback() {
        let mut state = filled();
        let pending = state.begin_verification().expect("検証が開始されない");
        state.complete_verification(pending.ticket, Err(Error::Transport(String::new())));

        assert_eq!(state.error(), Some(VERIFY_FAILED_FALLBACK));
    }

    // =============================================
    // リサーチ
    // =============================================

    #[test]
    fn test_begin_research_requires_verification() {
        let mut state = filled();
        assert!(state.begin_research().is_none());
        assert_eq!(state.error(), Some(VERIFY_FIRST_MESSAGE));
        assert!(!state.loading());
    }

    #[test]
    fn test_begin_research_uses_current_entity_type() {
        let mut state = with_verification();
        state.update_field(FormField::EntityType, "startup");

        let pending = state.begin_research().expect("リサーチが開始されない");
        assert_eq!(pending.entity_type, EntityType::Startup);
        assert_eq!(pending.entity_info.full_name, "Ada Lovelace");
        assert!(state.loading());
    }

    #[test]
    fn test_complete_research_success_switches_page() {
        let mut state = with_verification();
        let pending = state.begin_research().expect("リサーチが開始されない");

        assert!(state.complete_research(pending.ticket, Ok(research("Computing"))));
        assert_eq!(state.active_page(), ActivePage::Research);
        assert!(state.can_view_research());
        assert!(!state.loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_complete_research_failure_keeps_page() {
        let mut state = with_verification();
        let pending = state.begin_research().expect("リサーチが開始されない");

        state.complete_research(pending.ticket, Err(Error::Service("Y".into())));
        assert_eq!(state.active_page(), ActivePage::Verify);
        assert_eq!(state.error(), Some("Y"));
        assert!(state.research_result().is_none());
        assert!(!state.loading());
    }

    #[test]
    fn test_complete_research_failure_keeps_previous_report() {
        let mut state = with_verification();
        let first = state.begin_research().expect("リサーチが開始されない");
        state.complete_research(first.ticket, Ok(research("Computing")));
        state.set_active_page(ActivePage::Verify);

        let second = state.begin_research().expect("リサーチが開始されない");
        state.complete_research(second.ticket, Err(Error::Transport("connection reset".into())));

        assert_eq!(state.active_page(), ActivePage::Verify);
        assert_eq!(state.research_result().map(|r| r.research_focus.clone()), Some(vec!["Computing".to_string()]));
    }

    // =============================================
    // チケット
    // =============================================

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = filled();
        let first = state.begin_verification().expect("検証が開始されない");
        state.set_name("Charles Babbage");
        let second = state.begin_verification().expect("検証が開始されない");
        assert!(second.ticket > first.ticket);

        // 後発が先に完了
        assert!(state.complete_verification(second.ticket, Ok(verified("Charles Babbage"))));
        assert!(!state.complete_verification(first.ticket, Ok(verified("Ada Lovelace"))));

        assert_eq!(
            state.verification_result().map(|r| r.full_name.as_str()),
            Some("Charles Babbage")
        );
        assert!(!state.loading());
    }

    #[test]
    fn test_superseded_request_keeps_loading() {
        let mut state = with_verification();
        let research_pending = state.begin_research().expect("リサーチが開始されない");
        let verify_pending = state.begin_verification().expect("検証が開始されない");

        // 古いリサーチ完了は捨てられ、ページも変わらない
        assert!(!state.complete_research(research_pending.ticket, Ok(research("Computing"))));
        assert!(state.loading());
        assert_eq!(state.active_page(), ActivePage::Verify);
        assert!(state.research_result().is_none());

        assert!(state.complete_verification(verify_pending.ticket, Err(Error::Service("Z".into()))));
        assert!(!state.loading());
        assert_eq!(state.error(), Some("Z"));
    }

    #[test]
    fn test_set_active_page() {
        let mut state = AppState::new();
        state.set_active_page(ActivePage::Research);
        assert_eq!(state.active_page(), ActivePage::Research);
        assert_eq!("verify".parse::<ActivePage>(), Ok(ActivePage::Verify));
    }
}
