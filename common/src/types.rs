//! 検証・リサーチの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - FormInput: 入力フォーム（/verify のリクエスト本体）
//! - VerificationResult: 第1段階（本人確認）の出力
//! - ResearchResult: 第2段階（リサーチレポート）の出力

use serde::{Deserialize, Serialize};

/// 対象の種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// 研究者
    #[default]
    Academic,
    /// スタートアップ創業者
    Startup,
}

impl EntityType {
    pub const ALL: [EntityType; 2] = [EntityType::Academic, EntityType::Startup];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Academic => "academic",
            EntityType::Startup => "startup",
        }
    }

    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Academic => "Academic Professional",
            EntityType::Startup => "Startup Founder",
        }
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "academic" => Ok(EntityType::Academic),
            "startup" => Ok(EntityType::Startup),
            _ => Err(format!("Unknown entity type: {}. Use academic or startup", s)),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 入力フォーム
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub name: String,
    pub affiliation: String,
    pub entity_type: EntityType,
}

/// 本人確認の結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationResult {
    pub full_name: String,
    pub affiliation: String,
    pub title: String,
    /// 一致度 (0-100)
    pub confidence_score: f64,
    pub brief_description: String,

    /// サービス側の判定（"success" / "failed"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,
}

impl VerificationResult {
    /// 一致度の表示文字列（例: "95%"）
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence_score)
    }
}

/// リサーチレポート
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchResult {
    pub research_focus: Vec<String>,
    pub projects_publications: Vec<String>,
    pub institutional_connections: Vec<String>,
    pub funding_history: Vec<String>,
    pub public_mentions: Vec<String>,
    pub strategic_insights: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,

    /// 生成日時（ISO-8601）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl ResearchResult {
    /// 表示順のセクション一覧
    pub fn sections(&self) -> impl Iterator<Item = (ResearchSection, &[String])> {
        ResearchSection::ALL
            .into_iter()
            .map(move |section| (section, self.items(section)))
    }

    pub fn items(&self, section: ResearchSection) -> &[String] {
        match section {
            ResearchSection::ResearchFocus => &self.research_focus,
            ResearchSection::ProjectsPublications => &self.projects_publications,
            ResearchSection::InstitutionalConnections => &self.institutional_connections,
            ResearchSection::FundingHistory => &self.funding_history,
            ResearchSection::PublicMentions => &self.public_mentions,
            ResearchSection::StrategicInsights => &self.strategic_insights,
        }
    }
}

/// レポートのセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResearchSection {
    ResearchFocus,
    ProjectsPublications,
    InstitutionalConnections,
    FundingHistory,
    PublicMentions,
    StrategicInsights,
}

/// セクションの並べ方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    /// 縦積みリスト
    Stacked,
    /// 2列グリッド
    Grid,
}

impl ResearchSection {
    pub const ALL: [ResearchSection; 6] = [
        ResearchSection::ResearchFocus,
        ResearchSection::ProjectsPublications,
        ResearchSection::InstitutionalConnections,
        ResearchSection::FundingHistory,
        ResearchSection::PublicMentions,
        ResearchSection::StrategicInsights,
    ];

    /// 空セクションの表示文言
    pub const EMPTY_TEXT: &'static str = "No data available";

    pub fn title(&self) -> &'static str {
        match self {
            ResearchSection::ResearchFocus => "Research Focus",
            ResearchSection::ProjectsPublications => "Projects & Publications",
            ResearchSection::InstitutionalConnections => "Institutional Connections",
            ResearchSection::FundingHistory => "Funding History",
            ResearchSection::PublicMentions => "Public Mentions",
            ResearchSection::StrategicInsights => "Strategic Insights",
        }
    }

    pub fn layout(&self) -> SectionLayout {
        match self {
            ResearchSection::ProjectsPublications
            | ResearchSection::FundingHistory
            | ResearchSection::StrategicInsights => SectionLayout::Stacked,
            _ => SectionLayout::Grid,
        }
    }

    /// 背景を塗るセクション（交互）
    pub fn shaded(&self) -> bool {
        matches!(self.layout(), SectionLayout::Stacked)
    }
}
