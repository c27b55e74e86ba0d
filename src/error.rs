use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResearchToolError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    /// ストアに残ったエラー（終了コードを非0にする）
    #[error("{0}")]
    RequestFailed(String),
}

pub type Result<T> = std::result::Result<T, ResearchToolError>;
