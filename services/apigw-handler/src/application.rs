// アプリケーション層モジュール
pub mod insert_handler;

// 再エクスポート
pub use insert_handler::{InsertHandler, InsertHandlerError, Invocation};
