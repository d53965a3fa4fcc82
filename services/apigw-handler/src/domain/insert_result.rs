// 書き込み成功時のレスポンス内容
//
// 明示ボディ・デフォルトレコードのどちらの経路でも同じメッセージを返す。

use serde::Serialize;

/// 書き込み成功時のメッセージ
pub const SUCCESS_MESSAGE: &str = "Successfully inserted data!";

/// 成功レスポンスのJSON本文
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertResult {
    pub message: String,
}

impl InsertResult {
    /// 成功レスポンスを作成
    pub fn success() -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// JSON文字列にシリアライズ
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
