use clap::{Parser, Subcommand, ValueEnum};
use research_tool_common::EntityType;

#[derive(Parser)]
#[command(name = "research-tool")]
#[command(about = "研究者・スタートアップ創業者の本人確認とリサーチレポート生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 出力形式 (text/json)
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名前と所属で本人確認する
    Verify {
        /// 名前
        #[arg(short, long, default_value = "")]
        name: String,

        /// 所属（大学・企業など）
        #[arg(short, long, default_value = "")]
        affiliation: String,

        /// 種別 (academic/startup)
        #[arg(short = 't', long, default_value = "academic")]
        entity_type: EntityTypeArg,

        /// 確認後にリサーチレポートも生成
        #[arg(short, long)]
        research: bool,
    },

    /// 対話的に確認・リサーチを行う
    Interactive,

    /// 設定を表示/編集
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// タイムアウト秒数を設定（0で無制限）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EntityTypeArg {
    Academic,
    Startup,
}

impl From<EntityTypeArg> for EntityType {
    fn from(arg: EntityTypeArg) -> Self {
        match arg {
            EntityTypeArg::Academic => EntityType::Academic,
            EntityTypeArg::Startup => EntityType::Startup,
        }
    }
}
