//! 모듈 활성화 판정
//!
//! - 카탈로그에 없는 모듈 → 비활성
//! - core 모듈 → 항상 활성 (활성화 레코드와 무관)
//! - 그 외 → 워크스페이스 활성화 레코드가 있을 때만 활성

use atelier_foundation::{Module, ModulePathTable, WorkspaceModuleEnablement};

/// slug의 모듈이 워크스페이스에서 활성인지
pub fn is_module_enabled(
    slug: &str,
    modules: &[Module],
    enablements: &[WorkspaceModuleEnablement],
) -> bool {
    let Some(module) = modules.iter().find(|m| m.slug == slug) else {
        return false;
    };

    module.is_core || enablements.iter().any(|e| e.module_id == module.id)
}

/// 경로가 가리키는 모듈 (홈, 프로필 등 테이블에 없는 경로는 None)
pub fn module_for_path<'a>(
    path: &str,
    table: &ModulePathTable,
    modules: &'a [Module],
) -> Option<&'a Module> {
    let slug = table.slug_for_path(path)?;
    modules.iter().find(|m| m.slug == slug)
}

/// 로드된 카탈로그와 활성화 레코드에 대한 판정
#[derive(Debug, Clone, Copy)]
pub struct ModuleGate<'a> {
    modules: &'a [Module],
    enablements: &'a [WorkspaceModuleEnablement],
}

impl<'a> ModuleGate<'a> {
    pub fn new(modules: &'a [Module], enablements: &'a [WorkspaceModuleEnablement]) -> Self {
        Self {
            modules,
            enablements,
        }
    }

    pub fn is_enabled(&self, slug: &str) -> bool {
        is_module_enabled(slug, self.modules, self.enablements)
    }

    /// 활성 모듈 목록 (카탈로그 순서)
    pub fn enabled_modules(&self) -> Vec<&'a Module> {
        self.modules
            .iter()
            .filter(|m| self.is_enabled(&m.slug))
            .collect()
    }
}
