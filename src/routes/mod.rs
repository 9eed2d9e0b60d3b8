//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `properties`: 부동산 CRUD 핸들러

pub mod health;
pub mod properties;

// app.rs에서 `routes::list_properties`처럼 바로 접근할 수 있게 재공개합니다.
pub use health::*;
pub use properties::*;
