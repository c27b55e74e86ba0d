//! AI Research Tool ネイティブクライアント
//!
//! reqwest版のサービス実装と、`AppStore` を端末から操作するビュー層

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod render;
pub mod session;
