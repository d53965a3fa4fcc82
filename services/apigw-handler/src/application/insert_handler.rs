/// 書き込みハンドラー
///
/// API Gateway経由のリクエストボディからレコードを取り出し（または
/// デフォルトレコードを生成し）、RecordRepositoryへ書き込む。
/// 失敗時はエラー内容と分類をログに出力した上で、そのまま呼び出し元へ返す。
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{InsertResult, MovieRecord, Payload, PayloadError, PayloadPresence};
use crate::infrastructure::{RecordRepository, RepositoryError};

/// ログに付与するイベント種別
const EVENT_TYPE: &str = "dynamodb_write";

/// ログに付与する書き込み操作名
const PUT_ITEM_OPERATION: &str = "put_item";

/// 書き込みハンドラーのエラー型
#[derive(Debug, Error)]
pub enum InsertHandlerError {
    /// ボディがJSONとして解析できない
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// 必須フィールドが欠落
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// 書き込み先テーブル名が未設定
    #[error("Missing environment variable: TABLE_NAME")]
    MissingTableName,

    /// リポジトリ操作エラー
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<PayloadError> for InsertHandlerError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::MissingField(key) => InsertHandlerError::MissingField(key),
        }
    }
}

impl InsertHandlerError {
    /// ログ出力用のエラー分類名
    pub fn error_type(&self) -> &'static str {
        match self {
            InsertHandlerError::InvalidJson(_) => "InvalidJson",
            InsertHandlerError::MissingField(_) => "MissingField",
            InsertHandlerError::MissingTableName => "MissingTableName",
            InsertHandlerError::Repository(_) => "RepositoryError",
        }
    }
}

/// 1回の呼び出しの入力
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// ログ相関用のリクエストID
    pub request_id: &'a str,
    /// 呼び出し時点で解決したテーブル名
    pub table_name: Option<&'a str>,
    /// リクエストボディ（未指定または空ならデフォルトレコードを書き込む）
    pub body: Option<&'a [u8]>,
}

/// レコード書き込みリクエストを処理するハンドラー
pub struct InsertHandler<R>
where
    R: RecordRepository,
{
    /// レコードリポジトリ
    repository: R,
}

impl<R> InsertHandler<R>
where
    R: RecordRepository,
{
    /// 新しいInsertHandlerを作成
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 書き込みリクエストを処理
    ///
    /// # 処理フロー
    /// 1. テーブル名とイベント種別をログ出力
    /// 2. ボディがあればJSONとして解析し、必須キーの有無をログ出力してレコードを抽出
    /// 3. ボディが無ければデフォルトレコードを生成
    /// 4. レコードを書き込み、成功レスポンスを返却
    ///
    /// いずれかの段階で失敗した場合、エラーをログ出力してから返す。
    /// 書き込み前に失敗した場合はリポジトリを呼び出さない。
    pub async fn handle(&self, invocation: &Invocation<'_>) -> Result<InsertResult, InsertHandlerError> {
        let request_id = invocation.request_id;

        info!(
            request_id = request_id,
            table_name = invocation.table_name,
            event_type = EVENT_TYPE,
            "Processing request"
        );

        match self.process(invocation).await {
            Ok(result) => Ok(result),
            Err(err) => {
                error!(
                    request_id = request_id,
                    error = %err,
                    error_type = err.error_type(),
                    "Error processing request"
                );
                Err(err)
            }
        }
    }

    async fn process(&self, invocation: &Invocation<'_>) -> Result<InsertResult, InsertHandlerError> {
        let request_id = invocation.request_id;

        match invocation.body.filter(|body| !body.is_empty()) {
            Some(body) => {
                let payload = Payload::parse(body)?;

                let presence = PayloadPresence::inspect(&payload);
                info!(
                    request_id = request_id,
                    has_year = presence.has_year,
                    has_title = presence.has_title,
                    has_id = presence.has_id,
                    "Received payload"
                );

                let record = MovieRecord::from_payload(&payload)?;
                self.write(invocation.table_name, &record).await?;

                info!(
                    request_id = request_id,
                    operation = PUT_ITEM_OPERATION,
                    "Successfully inserted data"
                );
            }
            None => {
                info!(
                    request_id = request_id,
                    "Received request without payload, using default data"
                );

                let record = MovieRecord::default_with_new_id();
                self.write(invocation.table_name, &record).await?;

                info!(
                    request_id = request_id,
                    operation = PUT_ITEM_OPERATION,
                    "Successfully inserted default data"
                );
            }
        }

        Ok(InsertResult::success())
    }

    async fn write(&self, table_name: Option<&str>, record: &MovieRecord) -> Result<(), InsertHandlerError> {
        let table_name = table_name.ok_or(InsertHandlerError::MissingTableName)?;
        self.repository.put(table_name, record).await?;
        Ok(())
    }
}
