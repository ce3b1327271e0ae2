//! 분야별 기능 플래그
//!
//! 분야 기본값(base)에 워크스페이스 커스텀 값(override)을 얕게 병합합니다.
//! override에 값이 있는 키만 base를 덮어씁니다.

use super::Discipline;
use serde::{Deserialize, Serialize};

/// 분야별 기능 플래그 (병합 결과)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineFeatures {
    /// 공모/입찰 관리
    pub tenders: bool,
    /// 공종(lot) 분할
    pub work_packages: bool,
    /// 면적 계산
    pub surface_areas: bool,
    /// 무드보드
    pub moodboards: bool,
    /// 매체 계획
    pub media_planning: bool,
    /// 단계별 보수 산정
    pub phase_fees: bool,
    /// 현장 방문 보고서
    pub site_reports: bool,
}

impl DisciplineFeatures {
    /// 분야 기본값
    pub fn base(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Architecture => Self {
                tenders: true,
                work_packages: true,
                surface_areas: true,
                moodboards: false,
                media_planning: false,
                phase_fees: true,
                site_reports: true,
            },
            Discipline::InteriorDesign => Self {
                tenders: false,
                work_packages: true,
                surface_areas: true,
                moodboards: true,
                media_planning: false,
                phase_fees: true,
                site_reports: true,
            },
            Discipline::Scenography => Self {
                tenders: true,
                work_packages: false,
                surface_areas: true,
                moodboards: true,
                media_planning: false,
                phase_fees: true,
                site_reports: false,
            },
            Discipline::Communication => Self {
                tenders: false,
                work_packages: false,
                surface_areas: false,
                moodboards: true,
                media_planning: true,
                phase_fees: false,
                site_reports: false,
            },
        }
    }
}

/// 워크스페이스 커스텀 기능 플래그 (부분 값)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_packages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_areas: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moodboards: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_planning: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_fees: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_reports: Option<bool>,
}

impl FeatureOverrides {
    /// 다른 override와 병합 (other가 우선)
    pub fn merge(&mut self, other: FeatureOverrides) {
        self.tenders = other.tenders.or(self.tenders);
        self.work_packages = other.work_packages.or(self.work_packages);
        self.surface_areas = other.surface_areas.or(self.surface_areas);
        self.moodboards = other.moodboards.or(self.moodboards);
        self.media_planning = other.media_planning.or(self.media_planning);
        self.phase_fees = other.phase_fees.or(self.phase_fees);
        self.site_reports = other.site_reports.or(self.site_reports);
    }
}

/// base + override 병합 (override가 키 단위로 우선)
pub fn merge(base: DisciplineFeatures, overrides: Option<&FeatureOverrides>) -> DisciplineFeatures {
    let Some(o) = overrides else {
        return base;
    };

    DisciplineFeatures {
        tenders: o.tenders.unwrap_or(base.tenders),
        work_packages: o.work_packages.unwrap_or(base.work_packages),
        surface_areas: o.surface_areas.unwrap_or(base.surface_areas),
        moodboards: o.moodboards.unwrap_or(base.moodboards),
        media_planning: o.media_planning.unwrap_or(base.media_planning),
        phase_fees: o.phase_fees.unwrap_or(base.phase_fees),
        site_reports: o.site_reports.unwrap_or(base.site_reports),
    }
}
