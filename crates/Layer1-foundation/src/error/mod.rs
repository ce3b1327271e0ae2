//! Error types for Atelier
//!
//! 모든 에러를 중앙에서 관리
//!
//! Resolver와 Gate는 에러를 반환하지 않습니다. 에러는 설정 파일 I/O와
//! 외부 협력자(모듈 카탈로그, 권한 조회 등)에서만 발생합니다.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Atelier 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 저장소 관련 (원격 테이블 CRUD 실패)
    // ========================================================================
    #[error("Storage error: {0}")]
    Storage(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 재시도 가능한 에러인지 확인
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Io(_))
    }

    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::InvalidInput(_))
    }

    /// Storage 에러 생성 헬퍼
    pub fn storage(message: impl Into<String>) -> Self {
        Error::Storage(message.into())
    }
}
