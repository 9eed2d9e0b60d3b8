//! # 에러 처리 모듈
//!
//! API에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 응답 본문의 키는 기존 클라이언트와의 호환을 위해 두 가지로 나뉩니다:
//! - `"erro"`: 조회 결과 없음(404), 잘못된 입력(400)
//! - `"error"`: 데이터베이스 연결 실패 및 기타 저장소 오류(500)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 데이터베이스 연결 실패 시 클라이언트에 반환하는 고정 메시지
pub const CONNECTION_ERROR_MESSAGE: &str = "Erro ao conectar ao banco de dados";

/// 쿼리 실행 실패 시 클라이언트에 반환하는 고정 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 데이터베이스에 연결할 수 없음 (HTTP 500)
    ///
    /// `#[source]`만 사용하고 `#[from]`은 사용하지 않습니다.
    /// sqlx::Error의 자동 변환은 아래 `Database` variant가 담당하므로,
    /// 연결 실패는 `Database::connect()`에서만 명시적으로 만들어집니다.
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// 조회 결과가 없음 (HTTP 404)
    /// 라우트마다 다른 메시지를 그대로 클라이언트에 전달합니다.
    #[error("{0}")]
    NotFound(String),

    /// 잘못된 요청 (HTTP 400)
    /// 본문 형식 오류, 필수 필드 누락, 잘못된 경로 파라미터 등
    #[error("{0}")]
    BadRequest(String),

    /// 쿼리 실행 중 발생한 데이터베이스 오류 (HTTP 500)
    /// `?` 연산자로 sqlx::Error가 자동으로 이 variant로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 데이터베이스 관련 에러는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 고정된 메시지만 반환합니다.
    fn into_response(self) -> Response {
        // match: enum의 각 variant마다 (상태 코드, JSON 본문) 튜플을 만듭니다.
        // 모든 variant를 빠짐없이 처리해야 컴파일됩니다 (exhaustive matching).
        let (status, body) = match self {
            // ref: 값을 이동(move)하지 않고 참조만 빌려옵니다.
            // 에러 내용은 로그에만 쓰고 응답에는 고정 메시지를 넣습니다.
            AppError::Connection(ref e) => {
                tracing::error!("Database connection failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": CONNECTION_ERROR_MESSAGE }),
                )
            }
            // ref 없이 바인딩하면 msg의 소유권이 이동합니다.
            // 메시지를 그대로 응답에 넣을 것이므로 clone이 필요 없습니다.
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "erro": msg })),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "erro": msg })),
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": INTERNAL_ERROR_MESSAGE }),
                )
            }
        };

        // Axum은 (StatusCode, Json<Value>) 튜플을 HTTP 응답으로 변환합니다.
        (status, Json(body)).into_response()
    }
}
