//! 워크스페이스 전환 guard
//!
//! 상태: `Idle` ↔ `Armed`
//!
//! - 이전 워크스페이스(Some)에서 다른 워크스페이스(Some)로 바뀔 때만 `Armed`
//! - 첫 로드(None → Some)와 같은 워크스페이스 재관측은 무시
//! - `Armed`에서 `check` 호출 시:
//!   - 경로가 모듈에 매핑되지 않거나 dashboard/settings → 검사 없이 `Idle`
//!   - 카탈로그나 활성화 레코드가 아직 없으면 `Pending` (armed 유지)
//!   - 그 외에는 활성화 판정 후 `Allowed` 또는 `RedirectHome`, 이후 `Idle`
//!
//! 호출자는 워크스페이스 변경을 발생 순서대로 `observe`해야 합니다.

use super::gate::is_module_enabled;
use atelier_foundation::{
    Module, ModulePathTable, WorkspaceModuleEnablement, ALWAYS_ALLOWED_MODULES,
};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// 리다이렉트 대상
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Idle,
    /// 워크스페이스 전환 후 검사 대기
    Armed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardOutcome {
    /// 할 일 없음 (전환 없음, 또는 검사 대상이 아닌 경로)
    Idle,
    /// 전환은 있었지만 입력이 아직 로드되지 않음
    Pending,
    /// 검사 결과 현재 경로 유지
    Allowed,
    /// 검사 결과 모듈이 비활성 - 홈으로 이동
    RedirectHome,
}

impl GuardOutcome {
    /// 실제로 활성화 판정을 수행했는지
    pub fn evaluated(&self) -> bool {
        matches!(self, Self::Allowed | Self::RedirectHome)
    }

    /// 리다이렉트 대상 경로
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::RedirectHome => Some(HOME_PATH),
            _ => None,
        }
    }
}

/// 워크스페이스 전환 guard
#[derive(Debug, Clone)]
pub struct WorkspaceSwitchGuard {
    previous: Option<Uuid>,
    state: GuardState,
    paths: ModulePathTable,
}

impl WorkspaceSwitchGuard {
    pub fn new() -> Self {
        Self::with_paths(ModulePathTable::builtin())
    }

    pub fn with_paths(paths: ModulePathTable) -> Self {
        Self {
            previous: None,
            state: GuardState::Idle,
            paths,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn previous(&self) -> Option<Uuid> {
        self.previous
    }

    /// 현재 워크스페이스 관측
    ///
    /// 전환으로 armed 되었으면 true를 돌려줍니다. `None`은 검사만 건너뛰고
    /// 마지막 워크스페이스는 기억합니다 (A → None → B도 전환).
    pub fn observe(&mut self, workspace: Option<Uuid>) -> bool {
        let Some(next) = workspace else {
            self.state = GuardState::Idle;
            return false;
        };

        match self.previous.replace(next) {
            Some(prev) if prev != next => {
                debug!(from = %prev, to = %next, "Workspace switched, guard armed");
                self.state = GuardState::Armed;
                true
            }
            _ => false,
        }
    }

    /// armed 상태에서 현재 경로 검사
    ///
    /// `modules`/`enablements`가 None이면 아직 로드되지 않은 것으로 봅니다.
    pub fn check(
        &mut self,
        path: &str,
        modules: Option<&[Module]>,
        enablements: Option<&[WorkspaceModuleEnablement]>,
    ) -> GuardOutcome {
        if self.state == GuardState::Idle {
            return GuardOutcome::Idle;
        }

        let slug = match self.paths.slug_for_path(path) {
            Some(slug) if !ALWAYS_ALLOWED_MODULES.contains(&slug) => slug,
            _ => {
                debug!(path, "Path not gated by a module, skipping check");
                self.state = GuardState::Idle;
                return GuardOutcome::Idle;
            }
        };

        let (Some(modules), Some(enablements)) = (modules, enablements) else {
            debug!(path, "Module data not loaded yet, check deferred");
            return GuardOutcome::Pending;
        };

        self.state = GuardState::Idle;

        if is_module_enabled(slug, modules, enablements) {
            GuardOutcome::Allowed
        } else {
            info!(module = slug, path, "Module disabled in new workspace, redirecting home");
            GuardOutcome::RedirectHome
        }
    }
}

impl Default for WorkspaceSwitchGuard {
    fn default() -> Self {
        Self::new()
    }
}
