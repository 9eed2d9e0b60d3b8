//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (예: `sqlite:data/imoveis.db`)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 `main`에서 명시적으로 전달됩니다.
/// 전역 상태로 두지 않습니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 데이터베이스 연결 URL
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 3000)
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`은 필수이며, 없으면 `VarError`를 반환합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?, // 필수: 없으면 에러
            // unwrap_or_else(|_| ...): 환경변수가 없으면(Err) 클로저가 기본값을 만듭니다.
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()), // 선택: 기본값 제공
            // 파싱 실패 시에도 기본 포트로 동작합니다.
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse() // "3000" → 3000u16 (타입은 필드 선언 u16에서 추론)
                .unwrap_or(3000),
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_addr(&self) -> String {
        // format!: Python의 f-string과 비슷한 문자열 포맷팅 매크로
        format!("{}:{}", self.host, self.port)
    }
}
