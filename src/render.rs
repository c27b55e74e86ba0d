//! 端末向けの表示
//!
//! 検証結果カードとリサーチレポートをプレーンテキストに整形する。

use chrono::{DateTime, NaiveDateTime};
use research_tool_common::{ResearchResult, ResearchSection, SectionLayout, VerificationResult};

const RULE: &str = "────────────────────────────────────────";

/// 検証結果
pub fn render_verification(result: &VerificationResult) -> String {
    [
        "Verification Result".to_string(),
        RULE.to_string(),
        format!("  Full Name:        {}", result.full_name),
        format!("  Affiliation:      {}", result.affiliation),
        format!("  Title:            {}", result.title),
        format!("  Confidence Score: {}", result.confidence_label()),
        format!("  Description:      {}", result.brief_description),
    ]
    .join("\n")
}

/// リサーチレポート
pub fn render_research(report: &ResearchResult, entity: Option<&VerificationResult>) -> String {
    let subject = entity
        .map(|e| e.full_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("the entity");

    let mut lines = vec![
        "Research Results".to_string(),
        format!("Comprehensive research for {}", subject),
    ];
    if let Some(generated) = report.generated_at.as_deref().and_then(format_generated_at) {
        lines.push(format!("Generated at {}", generated));
    }

    for (section, items) in report.sections() {
        lines.push(String::new());
        lines.push(section.title().to_string());
        lines.push(RULE.to_string());

        if items.is_empty() {
            lines.push(format!("  {}", ResearchSection::EMPTY_TEXT));
            continue;
        }
        lines.extend(items.iter().enumerate().map(|(i, item)| match section.layout() {
            SectionLayout::Stacked => format!("  {}. {}", i + 1, item),
            SectionLayout::Grid => format!("  • {}", item),
        }));
    }

    lines.join("\n")
}

/// ISO-8601の生成日時を "YYYY-MM-DD HH:MM" に整形
pub fn format_generated_at(value: &str) -> Option<String> {
    let naive = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()?;
    Some(naive.format("%Y-%m-%d %H:%M").to_string())
}
