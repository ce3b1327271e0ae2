//! Storage module for Atelier
//!
//! - `json`: JSON - 설정 파일 저장/로드
//!
//! 업무 데이터는 외부 협력자(`core::traits`)가 담당합니다.

mod json;

pub use json::{JsonStore, PROJECT_DIR_NAME};
