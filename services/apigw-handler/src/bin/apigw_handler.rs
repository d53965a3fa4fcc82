/// API Gateway HTTP API Lambdaエントリポイント
///
/// HTTPリクエストのボディからレコードを取り出し（ボディが無ければ
/// デフォルトレコードを生成し）、DynamoDBテーブルへ書き込む。
/// 失敗時はエラーをそのままLambdaランタイムへ返し、ランタイム標準の
/// エラー報告に委ねる。
use apigw_handler::application::{InsertHandler, Invocation};
use apigw_handler::domain::InsertResult;
use apigw_handler::infrastructure::{
    DynamoDbConfig, DynamoRecordRepository, RecordRepository, init_logging,
};
use lambda_http::http::header::{CONTENT_TYPE, HeaderValue};
use lambda_http::{Body, Error, Request, RequestExt, Response, run, service_fn};
use tracing::info;

/// Lambdaコンテキストが取得できない場合のリクエストID
const UNKNOWN_REQUEST_ID: &str = "unknown";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // DynamoDBクライアントはコールドスタート時に一度だけ作成し、以降の呼び出しで再利用する
    let config = DynamoDbConfig::from_env().await;
    let handler = InsertHandler::new(DynamoRecordRepository::new(config.client().clone()));

    info!("Lambda関数を初期化");

    run(service_fn(|request: Request| handle_request(&handler, request))).await
}

/// HTTPリクエストハンドラー
///
/// # 処理フロー
/// 1. LambdaコンテキストからリクエストIDを取得
/// 2. 環境変数からテーブル名を解決（呼び出しごと）
/// 3. InsertHandlerでレコードを書き込み
/// 4. 成功時はJSONレスポンスを返却、失敗時はエラーを返却
async fn handle_request<R>(handler: &InsertHandler<R>, request: Request) -> Result<Response<Body>, Error>
where
    R: RecordRepository,
{
    let request_id = request
        .lambda_context_ref()
        .map(|ctx| ctx.request_id.as_str())
        .unwrap_or(UNKNOWN_REQUEST_ID);

    let table_name = DynamoDbConfig::resolve_table_name();

    let body: Option<&[u8]> = match request.body() {
        Body::Empty => None,
        body => Some(body.as_ref()),
    };

    let invocation = Invocation {
        request_id,
        table_name: table_name.as_deref(),
        body,
    };

    let result = handler.handle(&invocation).await?;

    build_response(&result)
}

/// 成功レスポンスを構築
///
/// ステータス200、`Content-Type: application/json`、JSON本文を持つ。
fn build_response(result: &InsertResult) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(200)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(Body::Text(result.to_json()?))?;

    Ok(response)
}
