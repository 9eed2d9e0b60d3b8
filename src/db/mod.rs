//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 코드를 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈을 호출하여 DB 작업을 수행합니다.
//!
//! ## 연결 관리
//! 이 서비스는 연결 풀을 사용하지 않습니다.
//! 요청마다 `Database::connect()`로 연결을 하나 열고,
//! 핸들러가 어떤 경로로 끝나든(성공, 결과 없음, 쿼리 에러) `Database::release()`로
//! 정확히 한 번 닫습니다.
//!
//! 하위 모듈:
//! - `properties`: `imoveis` 테이블 CRUD 쿼리

pub mod properties;

pub use properties::*;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

use crate::error::AppError;

/// 요청 단위 연결을 만들어 주는 저장소 핸들
///
/// 연결 자체가 아니라 연결 옵션만 들고 있으므로 clone 비용이 작고,
/// 요청 사이에 공유되는 가변 상태가 없습니다.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// 데이터베이스 URL을 파싱하여 핸들을 만듭니다.
    ///
    /// 서버 시작 시 한 번 호출됩니다. URL 형식이 잘못되었으면 여기서 실패하므로
    /// 잘못된 설정으로 서버가 뜨는 일이 없습니다.
    /// 실제 연결은 요청이 들어올 때 `connect()`에서 이루어집니다.
    pub fn new(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?;
        Ok(Self::from_options(options))
    }

    /// 이미 구성된 연결 옵션으로 핸들을 만듭니다.
    pub fn from_options(options: SqliteConnectOptions) -> Self {
        Self { options }
    }

    /// 새 연결을 엽니다.
    ///
    /// # 에러
    /// 저장소에 연결할 수 없으면 `AppError::Connection`을 반환합니다.
    /// 이 에러는 어떤 라우트에서든 고정된 500 응답으로 변환됩니다.
    pub async fn connect(&self) -> Result<SqliteConnection, AppError> {
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(AppError::Connection)
    }

    /// 연결을 닫습니다.
    ///
    /// 닫기 실패는 이미 만들어진 응답을 바꾸지 않으므로 경고 로그만 남깁니다.
    pub async fn release(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!("Failed to close database connection: {}", e);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::TestDb;
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        assert!(Database::new("sqlite:data/imoveis.db?pool=5").is_err());
    }

    #[test]
    fn accepts_sqlite_url() {
        assert!(Database::new("sqlite:data/imoveis.db").is_ok());
    }

    #[tokio::test]
    async fn connect_failure_is_connection_error() {
        let db = TestDb::unreachable();
        assert!(matches!(db.connect().await, Err(AppError::Connection(_))));
    }
}
