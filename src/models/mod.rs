//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `property`: 부동산(Property)과 생성/수정 요청 본문
//!
//! `pub use property::*;`로 재공개하여 `crate::models::Property`처럼 짧게 접근합니다.

pub mod property;

pub use property::*;
