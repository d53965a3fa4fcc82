/// DynamoDB接続設定
///
/// クライアントはプロセス起動時（コールドスタート）に一度だけ作成し、
/// テーブル名は呼び出しごとに環境変数から解決する。
use aws_sdk_dynamodb::Client as DynamoDbClient;

/// テーブル名を保持する環境変数名
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

/// プロセス単位で共有するDynamoDB設定
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
}

impl DynamoDbConfig {
    /// 環境からAWS設定を読み込み、DynamoDBクライアントを作成
    ///
    /// AWS認証情報とリージョンはaws-configのデフォルトチェーンで解決される。
    pub async fn from_env() -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        Self::new(DynamoDbClient::new(&aws_config))
    }

    /// 明示的なクライアントで作成（テスト用）
    pub fn new(client: DynamoDbClient) -> Self {
        Self { client }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// 書き込み先テーブル名を環境変数から解決
    ///
    /// 未設定の場合は`None`を返す。検証は書き込み時に行われる。
    pub fn resolve_table_name() -> Option<String> {
        std::env::var(TABLE_NAME_ENV).ok().filter(|name| !name.is_empty())
    }
}
