//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Displayは画面にそのまま出すメッセージ
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 送信前の入力チェック失敗（通信なし）
    #[error("{0}")]
    Validation(String),

    /// 通信失敗・レスポンス本体が読めない
    #[error("{0}")]
    Transport(String),

    /// サービスが業務エラーを返した
    #[error("{0}")]
    Service(String),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Error::Validation(m) | Error::Transport(m) | Error::Service(m) => m,
        }
    }

    /// ログ用の種別名
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::Transport(_) => "transport",
            Error::Service(_) => "service",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
