//! # 부동산(imóveis) 라우트 핸들러
//!
//! `imoveis` 테이블의 조회/생성/수정/삭제를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET    /properties`              → 전체 목록 조회
//! - `GET    /properties/{id}`         → 단일 조회
//! - `GET    /properties/type/{type}`  → 유형(tipo)으로 필터
//! - `GET    /properties/city/{city}`  → 도시(cidade)로 필터
//! - `POST   /properties`              → 생성 (요청 본문을 그대로 에코)
//! - `PUT    /properties/{id}`         → 전체 필드 수정
//! - `DELETE /properties/{id}`         → 삭제
//!
//! ## 핸들러 공통 흐름
//! 1. 경로/본문 검증 (실패 시 400, 저장소에 접근하지 않음)
//! 2. `state.db.connect()`로 연결 획득 (실패 시 500)
//! 3. 쿼리 실행 후 `state.db.release(conn)`로 연결 반환
//! 4. 결과가 비어 있으면 라우트별 메시지로 404
//! 5. 결과를 JSON 봉투(`imoveis`, `imovel`, `mensagem`)에 담아 응답
//!
//! 3번에서 쿼리 결과를 `?`로 바로 전파하지 않고 변수에 담아 두는 것이 핵심입니다.
//! 먼저 연결을 닫고 나서 결과를 검사해야 에러 경로에서도 연결이 정확히 한 번 닫힙니다.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::SqliteConnection;

use crate::{
    app::AppState,
    db,
    error::AppError,
    models::{reject_client_id, PropertyInput},
};

/// 경로의 `{id}`를 정수로 꺼냅니다. 정수가 아니면 400입니다.
fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id).map_err(|_| {
        AppError::BadRequest("O id do imóvel deve ser um número inteiro".to_string())
    })
}

/// 경로의 `{type}`/`{city}` 문자열 필터를 꺼냅니다.
///
/// 퍼센트 인코딩을 풀었을 때 UTF-8이 아니면(예: `%FF`) axum은 평문 에러를 보냅니다.
/// 다른 입력 오류와 같은 400 `{"erro": ...}` 형태로 맞춥니다.
fn parse_filter(value: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    value.map(|Path(value)| value).map_err(|_| {
        AppError::BadRequest("O filtro deve ser um texto UTF-8 válido".to_string())
    })
}

/// 요청 본문을 JSON 값으로 꺼냅니다.
///
/// Content-Type 누락, 문법 오류 등 axum의 거절(rejection)도 모두 400 `{"erro": ...}`로 맞춥니다.
fn parse_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(format!("Corpo da requisição inválido: {}", e.body_text())))
}

/// `GET /properties`: 전체 부동산 목록을 조회합니다.
///
/// 결과가 0건이면 빈 목록이 아니라 404를 반환합니다.
pub async fn list_properties(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    // 연결 실패는 `?`로 바로 전파합니다. 닫을 연결이 아직 없기 때문입니다.
    let mut conn = state.db.connect().await?;
    // 쿼리 결과(Result)를 `?` 없이 그대로 받아 둡니다.
    // 여기서 `?`를 쓰면 에러일 때 release를 건너뛰고 함수가 끝나 버립니다.
    let result = db::list_properties(&mut conn).await;
    // conn의 소유권이 release로 이동(move)하므로, 이 줄 이후에는 conn을 쓸 수 없습니다.
    // 컴파일러가 "연결을 두 번 닫는" 실수를 막아 줍니다.
    state.db.release(conn).await;

    // 연결을 닫은 뒤에야 결과를 검사합니다. 에러면 여기서 AppError로 전파됩니다.
    let properties = result?;
    if properties.is_empty() {
        return Err(AppError::NotFound("Nenhum imovel encontrado".to_string()));
    }
    Ok(Json(json!({ "imoveis": properties })))
}

/// `GET /properties/{id}`: 단일 부동산을 조회합니다.
///
/// 단건 조회도 봉투 키는 목록과 같은 `"imoveis"`이며, 값만 배열이 아닌 객체입니다.
pub async fn get_property(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(id)?;

    let mut conn = state.db.connect().await?;
    let result = db::get_property(&mut conn, id).await;
    state.db.release(conn).await;

    let property = result?.ok_or_else(|| {
        AppError::NotFound("Nenhum imovel com esse id encontrado".to_string())
    })?;
    Ok(Json(json!({ "imoveis": property })))
}

/// `GET /properties/type/{type}`: 유형이 일치하는 부동산을 조회합니다.
pub async fn list_properties_by_type(
    State(state): State<AppState>,
    property_type: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let property_type = parse_filter(property_type)?;

    let mut conn = state.db.connect().await?;
    let result = db::list_properties_by_type(&mut conn, &property_type).await;
    state.db.release(conn).await;

    let properties = result?;
    if properties.is_empty() {
        return Err(AppError::NotFound(
            "Nenhum imovel com esse tipo encontrado".to_string(),
        ));
    }
    Ok(Json(json!({ "imoveis": properties })))
}

/// `GET /properties/city/{city}`: 도시가 일치하는 부동산을 조회합니다.
///
/// `Path<String>`은 퍼센트 인코딩을 풀어 줍니다 (`S%C3%A3o%20Paulo` → `São Paulo`).
pub async fn list_properties_by_city(
    State(state): State<AppState>,
    city: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let city = parse_filter(city)?;

    let mut conn = state.db.connect().await?;
    let result = db::list_properties_by_city(&mut conn, &city).await;
    state.db.release(conn).await;

    let properties = result?;
    if properties.is_empty() {
        return Err(AppError::NotFound(
            "Nenhum imovel com essa cidade encontrado".to_string(),
        ));
    }
    Ok(Json(json!({ "imoveis": properties })))
}

/// `POST /properties`: 새 부동산을 생성합니다.
///
/// 응답은 201과 함께 클라이언트가 보낸 본문을 그대로 돌려줍니다.
/// 저장소가 부여한 id는 응답에 포함되지 않으며, 같은 요청을 반복하면 매번 새 행이 생깁니다.
pub async fn create_property(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    // 검증은 모두 연결을 열기 전에 끝냅니다. 잘못된 입력이면 저장소에 접근하지 않습니다.
    let body = parse_body(payload)?;
    reject_client_id(&body)?;
    // body는 참조(&)로만 빌려주므로, 검증 후에도 응답에 그대로 에코할 수 있습니다.
    let input = PropertyInput::from_json(&body)?;

    let mut conn = state.db.connect().await?;
    let result = db::create_property(&mut conn, &input).await;
    state.db.release(conn).await;

    let id = result?;
    tracing::info!(id, cidade = %input.city, "Created property");

    Ok((StatusCode::CREATED, Json(json!({ "imovel": body }))))
}

/// `PUT /properties/{id}`: 부동산의 모든 필드를 덮어씁니다.
///
/// 존재 확인에서 대상이 없으면 UPDATE를 실행하지 않고 404를 반환합니다.
/// 본문의 `"id"`는 무시하고 경로의 id를 사용합니다.
pub async fn update_property(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(id)?;
    let input = PropertyInput::from_json(&parse_body(payload)?)?;

    let mut conn = state.db.connect().await?;
    // 존재 확인과 UPDATE를 하나의 함수로 묶어 결과를 한 번에 받습니다.
    // 어느 단계에서 실패하든 release는 정확히 한 번 실행됩니다.
    let result = update_existing(&mut conn, id, &input).await;
    state.db.release(conn).await;

    // Ok(false): 존재 확인에서 대상이 없었음 → UPDATE는 실행되지 않았습니다.
    if !result? {
        return Err(AppError::NotFound(format!(
            "Erro ao atualizar imóvel de id:{}",
            id
        )));
    }
    Ok(Json(json!({ "mensagem": "Imóvel atualizado com sucesso!" })))
}

/// `DELETE /properties/{id}`: 부동산을 삭제합니다.
///
/// 수정과 마찬가지로 존재 확인이 먼저이며, 없으면 DELETE를 실행하지 않습니다.
///
/// 404 메시지는 수정과 같은 `"... de id:{id}"` 형태지만, 동사는 일부러 "deletar"로 바꿨습니다.
pub async fn delete_property(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(id)?;

    let mut conn = state.db.connect().await?;
    let result = delete_existing(&mut conn, id).await;
    state.db.release(conn).await;

    if !result? {
        return Err(AppError::NotFound(format!(
            "Erro ao deletar imóvel de id:{}",
            id
        )));
    }
    Ok(Json(json!({ "mensagem": "Imóvel deletado com sucesso!" })))
}

/// 존재 확인 후 수정합니다. 대상이 없으면 `Ok(false)`.
async fn update_existing(
    conn: &mut SqliteConnection,
    id: i64,
    input: &PropertyInput,
) -> Result<bool, AppError> {
    // conn은 &mut로 빌린 것이므로 재차용(reborrow)되어 두 쿼리에 차례로 전달됩니다.
    if !db::property_exists(conn, id).await? {
        return Ok(false);
    }
    db::update_property(conn, id, input).await?;
    Ok(true)
}

/// 존재 확인 후 삭제합니다. 대상이 없으면 `Ok(false)`.
async fn delete_existing(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    if !db::property_exists(conn, id).await? {
        return Ok(false);
    }
    db::delete_property(conn, id).await?;
    Ok(true)
}
