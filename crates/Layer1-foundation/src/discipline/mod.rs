//! Discipline - 업무 분야(architecture, interior design, scenography, communication)
//!
//! - `terminology.rs` - 분야별 용어 사전
//! - `features.rs` - 분야별 기능 플래그 (base + override 병합)
//!
//! Discipline은 빌드 시점에 고정된 닫힌 열거형입니다. 런타임에 생성/삭제되지 않습니다.

mod features;
mod terminology;

pub use features::{merge as merge_features, DisciplineFeatures, FeatureOverrides};
pub use terminology::{TermKey, Terminology};

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 업무 분야
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    #[default]
    Architecture,
    InteriorDesign,
    Scenography,
    Communication,
}

impl Discipline {
    /// 등록된 모든 분야 (선언 순서)
    pub const ALL: [Discipline; 4] = [
        Discipline::Architecture,
        Discipline::InteriorDesign,
        Discipline::Scenography,
        Discipline::Communication,
    ];

    /// 분야가 정해지지 않았을 때 사용하는 기본값
    pub const DEFAULT: Discipline = Discipline::Architecture;

    /// 식별자 (저장용)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::InteriorDesign => "interior_design",
            Self::Scenography => "scenography",
            Self::Communication => "communication",
        }
    }

    /// 표시 이름
    pub fn label(&self) -> &'static str {
        match self {
            Self::Architecture => "Architecture",
            Self::InteriorDesign => "Architecture intérieure",
            Self::Scenography => "Scénographie",
            Self::Communication => "Communication",
        }
    }

    /// Optional 분야를 기본값으로 보정
    pub fn or_default(discipline: Option<Discipline>) -> Discipline {
        discipline.unwrap_or(Self::DEFAULT)
    }

    /// 문자열 파싱, 알 수 없는 값은 기본 분야로 대체
    pub fn parse_or_default(value: Option<&str>) -> Discipline {
        match value.map(str::parse::<Discipline>) {
            Some(Ok(discipline)) => discipline,
            Some(Err(_)) => {
                tracing::debug!(value = ?value, "Unknown discipline, falling back to default");
                Self::DEFAULT
            }
            None => Self::DEFAULT,
        }
    }

    /// 분야 용어 사전
    pub fn terminology(&self) -> &'static Terminology {
        Terminology::of(*self)
    }

    /// 분야 기본 기능 플래그
    pub fn features(&self) -> DisciplineFeatures {
        DisciplineFeatures::base(*self)
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown discipline: {}", s)))
    }
}
