/// DynamoDBへ映画レコードを書き込むためのレコードリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::MovieRecord;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗（スロットリング、バリデーションエラー等）
    #[error("Write error: {0}")]
    WriteError(String),
}

/// レコード永続化用トレイト
///
/// 実際のDynamoDB実装とテスト用モックを差し替え可能にする。
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// 指定テーブルにレコードを1件書き込む
    ///
    /// 同じキーのアイテムが存在する場合は上書きされる。
    async fn put(&self, table_name: &str, record: &MovieRecord) -> Result<(), RepositoryError>;
}

/// RecordRepositoryのDynamoDB実装
///
/// クライアントはプロセス内で共有され、呼び出しごとに再作成しない。
#[derive(Debug, Clone)]
pub struct DynamoRecordRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
}

impl DynamoRecordRepository {
    /// 新しいDynamoRecordRepositoryを作成
    pub fn new(client: DynamoDbClient) -> Self {
        Self { client }
    }

    /// レコードをDynamoDBアイテムに変換
    ///
    /// `year`は数値型（N）、`title`と`id`は文字列型（S）として書き込む。
    pub(crate) fn to_item(record: &MovieRecord) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("year".to_string(), AttributeValue::N(record.year.clone())),
            ("title".to_string(), AttributeValue::S(record.title.clone())),
            ("id".to_string(), AttributeValue::S(record.id.clone())),
        ])
    }
}

#[async_trait]
impl RecordRepository for DynamoRecordRepository {
    async fn put(&self, table_name: &str, record: &MovieRecord) -> Result<(), RepositoryError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(Self::to_item(record)))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
