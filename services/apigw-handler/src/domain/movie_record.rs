/// 映画レコードのドメインモデル
///
/// リクエストボディのJSONからテーブルに書き込むレコードを抽出する。
/// ボディが無い場合は固定値のデフォルトレコードを生成する。
use std::collections::HashMap;

use serde_json::Value;
use serde_json::value::RawValue;
use thiserror::Error;
use uuid::Uuid;

/// デフォルトレコードの公開年
pub const DEFAULT_YEAR: &str = "2012";

/// デフォルトレコードのタイトル
pub const DEFAULT_TITLE: &str = "The Amazing Spider-Man 2";

/// 必須キー名
pub const YEAR_KEY: &str = "year";
pub const TITLE_KEY: &str = "title";
pub const ID_KEY: &str = "id";

/// ペイロードからのレコード抽出エラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PayloadError {
    /// 必須キーが存在しない
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// 解析済みのリクエストボディ
///
/// u64/i64に収まらない整数はf64に丸められるため、
/// トップレベルの各値の元表記も合わせて保持する。
#[derive(Debug)]
pub struct Payload {
    value: Value,
    raw_fields: HashMap<String, Box<RawValue>>,
}

impl Payload {
    /// ボディをJSONとして解析
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;

        let raw_fields = if value.is_object() {
            serde_json::from_slice(body)?
        } else {
            HashMap::new()
        };

        Ok(Self { value, raw_fields })
    }

    /// 解析済みのJSON値
    pub fn value(&self) -> &Value {
        &self.value
    }

    fn required_field(&self, key: &'static str) -> Result<String, PayloadError> {
        let value = self.value.get(key).ok_or(PayloadError::MissingField(key))?;
        let raw = self.raw_fields.get(key).map(|raw| raw.get().trim());

        Ok(coerce_to_string(value, raw))
    }
}

/// テーブルに書き込む1件のレコード
///
/// すべてのフィールドは書き込み用の文字列形式で保持する。
/// `year`はテーブル上では数値型（N）として書き込まれる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    /// 公開年（数値の文字列表現）
    pub year: String,
    /// タイトル
    pub title: String,
    /// 一意識別子
    pub id: String,
}

impl MovieRecord {
    /// 明示的な値でレコードを作成
    pub fn new(year: impl Into<String>, title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            title: title.into(),
            id: id.into(),
        }
    }

    /// ボディ無しリクエスト用のデフォルトレコードを生成
    ///
    /// `id`は呼び出しごとに新しいUUID v4となる。
    pub fn default_with_new_id() -> Self {
        Self::new(DEFAULT_YEAR, DEFAULT_TITLE, Uuid::new_v4().to_string())
    }

    /// 解析済みペイロードからレコードを抽出
    ///
    /// `year`, `title`, `id`の順に参照し、最初に見つからなかったキーで失敗する。
    /// 欠落したフィールドを補完することはない。
    pub fn from_payload(payload: &Payload) -> Result<Self, PayloadError> {
        let year = payload.required_field(YEAR_KEY)?;
        let title = payload.required_field(TITLE_KEY)?;
        let id = payload.required_field(ID_KEY)?;

        Ok(Self { year, title, id })
    }
}

/// 必須キーの存在状況（値はログに出さない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadPresence {
    pub has_year: bool,
    pub has_title: bool,
    pub has_id: bool,
}

impl PayloadPresence {
    /// ペイロードの必須キー存在状況を調べる
    ///
    /// オブジェクト以外のJSON値はすべてのキーが欠落しているものとして扱う。
    pub fn inspect(payload: &Payload) -> Self {
        let value = payload.value();
        Self {
            has_year: value.get(YEAR_KEY).is_some(),
            has_title: value.get(TITLE_KEY).is_some(),
            has_id: value.get(ID_KEY).is_some(),
        }
    }
}

/// JSON値を書き込み用の文字列に変換
///
/// 文字列はそのまま、整数は元の表記、その他の数値はJSON表記、
/// それ以外はコンパクトなJSON表記を使う。
fn coerce_to_string(value: &Value, raw: Option<&str>) -> String {
    match (value, raw) {
        (Value::String(s), _) => s.clone(),
        (Value::Number(_), Some(raw)) if is_integer_literal(raw) => raw.to_string(),
        (Value::Number(n), _) => n.to_string(),
        (other, _) => other.to_string(),
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
