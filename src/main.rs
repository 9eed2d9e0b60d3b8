//! # 부동산(imóveis) API 서버 진입점
//!
//! `imoveis` 테이블 하나에 대한 CRUD HTTP API를 제공합니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩 및 데이터베이스 핸들 생성
//! 4. API 라우터 설정
//! 5. HTTP 서버 시작 (Ctrl+C / SIGTERM 시 정상 종료)
//!
//! 연결 풀과 마이그레이션은 없습니다.
//! 연결은 요청마다 열고 닫으며, 테이블은 `schema.sql`로 미리 만들어 둡니다.

mod app;
mod config;
mod db;
mod error;
mod models;
mod routes;

use anyhow::Result;
use config::Config;
use db::Database;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 imoveis, tower_http, axum 모듈을 debug 레벨로 설정
    // registry(): 로그 수집기를 만들고, .with()로 필터와 포맷터 레이어를 쌓습니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imoveis=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 로그를 터미널에 출력하는 포맷터 레이어
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩 ──
    // `?`: DATABASE_URL이 없으면 VarError가 anyhow::Error로 변환되어 main이 종료됩니다.
    let config = Config::from_env()?;
    tracing::info!("Starting imoveis server on {}", config.bind_addr());

    // URL만 검증하고 실제 연결은 하지 않습니다.
    // 저장소가 내려가 있어도 서버는 뜨고, 각 요청이 500을 반환합니다.
    let db = Database::new(&config.database_url)?;

    // ── 4단계: 라우터 설정 ──
    let app = app::create_router(db);

    // ── 5단계: 서버 시작 ──
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", config.bind_addr());

    // with_graceful_shutdown: 시그널을 받으면 새 연결을 받지 않고,
    // 처리 중인 요청이 끝난 뒤 serve가 반환됩니다.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Ctrl+C 또는 SIGTERM을 기다립니다.
///
/// 시그널 핸들러 설치에 실패하면 해당 시그널은 기다리지 않습니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // tokio::select!: 여러 Future 중 먼저 끝나는 쪽의 분기를 실행합니다.
    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down"),
    }
}
