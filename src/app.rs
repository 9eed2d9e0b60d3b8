//! # 라우터 구성 모듈
//!
//! 애플리케이션 상태(`AppState`)와 전체 라우트 테이블을 한 곳에서 만듭니다.
//! 저장소 설정은 전역 변수가 아니라 `create_router`의 인자로 명시적으로 전달됩니다.
//! `main`은 시작 시 이 함수를 한 번 호출하고, 테스트는 임시 DB로 같은 라우터를 만듭니다.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{db::Database, routes};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 연결 옵션만 담고 있으며, 요청 사이에 공유되는 가변 상태는 없습니다.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// 전체 라우터를 생성합니다.
///
/// `{id}`는 정수 id, `{type}`/`{city}`는 문자열 필터입니다.
/// `/properties/type/...`와 `/properties/{id}`는 세그먼트 수가 달라 서로 충돌하지 않습니다.
pub fn create_router(db: Database) -> Router {
    let state = AppState { db };

    let api_routes = Router::new()
        .route(
            "/properties",
            get(routes::list_properties).post(routes::create_property),
        )
        .route(
            "/properties/{id}",
            get(routes::get_property)
                .put(routes::update_property)
                .delete(routes::delete_property),
        )
        .route(
            "/properties/type/{type}",
            get(routes::list_properties_by_type),
        )
        .route(
            "/properties/city/{city}",
            get(routes::list_properties_by_city),
        )
        .route("/health", get(routes::health_check))
        .with_state(state);

    // 개발 편의를 위해 모든 출처를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_routes
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
