//! 비동기로 채워지는 상태

use serde::{Deserialize, Serialize};

/// 비동기 로드 상태
///
/// "아직 로드되지 않음"과 "로드되었지만 비어 있음"을 구분합니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    /// 협력자 실패 (메시지)
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl<T> From<crate::Result<T>> for Loadable<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
