//! Atelier Config - 통합 설정
//!
//! 정적 카탈로그 위에 얹는 워크스페이스 단위 조정값입니다.
//! 병합 규칙은 모두 얕은 병합이며, 나중 값이 키 단위로 우선합니다.

use crate::discipline::{merge_features, Discipline, DisciplineFeatures, FeatureOverrides};
use crate::permission::CapabilityRequest;
use crate::storage::JsonStore;
use crate::view::ViewOverrides;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 설정 파일명
pub const ATELIER_CONFIG_FILE: &str = "config.json";

// ============================================================================
// Atelier Config (통합)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtelierConfig {
    /// 버전 (마이그레이션용)
    #[serde(default = "default_version")]
    pub version: u32,

    /// 분야별 조정값
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub disciplines: HashMap<Discipline, DisciplineConfig>,

    /// 이름 붙은 권한 조건 (예: "projects.deleteButton")
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub capabilities: HashMap<String, CapabilityRequest>,
}

/// 분야 하나의 조정값
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineConfig {
    #[serde(default)]
    pub views: ViewOverrides,
    #[serde(default)]
    pub features: FeatureOverrides,
}

impl DisciplineConfig {
    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: DisciplineConfig) {
        self.views.merge(other.views);
        self.features.merge(other.features);
    }
}

impl AtelierConfig {
    pub fn new() -> Self {
        Self {
            version: default_version(),
            ..Default::default()
        }
    }

    // ========================================================================
    // Save
    // ========================================================================

    /// 특정 저장소에 저장
    pub fn save_to(&self, store: &JsonStore) -> Result<()> {
        store.save(ATELIER_CONFIG_FILE, self)
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: AtelierConfig) {
        self.version = self.version.max(other.version);

        for (discipline, incoming) in other.disciplines {
            self.disciplines.entry(discipline).or_default().merge(incoming);
        }

        self.capabilities.extend(other.capabilities);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// 분야의 화면 override (없으면 None)
    pub fn views_for(&self, discipline: Discipline) -> Option<&ViewOverrides> {
        self.disciplines.get(&discipline).map(|c| &c.views)
    }

    /// 분야 기능 플래그 (base + override)
    pub fn features_for(&self, discipline: Discipline) -> DisciplineFeatures {
        merge_features(
            DisciplineFeatures::base(discipline),
            self.disciplines.get(&discipline).map(|c| &c.features),
        )
    }

    /// 이름 붙은 권한 조건
    pub fn capability(&self, name: &str) -> Option<&CapabilityRequest> {
        self.capabilities.get(name)
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn discipline(mut self, discipline: Discipline, config: DisciplineConfig) -> Self {
        self.disciplines.insert(discipline, config);
        self
    }

    pub fn named_capability(mut self, name: impl Into<String>, request: CapabilityRequest) -> Self {
        self.capabilities.insert(name.into(), request);
        self
    }
}

fn default_version() -> u32 {
    1
}
