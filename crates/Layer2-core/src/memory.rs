//! In-memory collaborators
//!
//! 원격 저장소 대신 메모리에 데이터를 두는 Provider 구현입니다.
//! 테스트와 오프라인 데모, 임베딩 용도입니다.

use async_trait::async_trait;
use atelier_foundation::{
    default_modules, ActorPermissionProvider, ActorPermissions, AppRole, Error, Module,
    ModuleCatalogProvider, Result, WorkspaceEnablementProvider, WorkspaceModuleEnablement,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

// ============================================================================
// Module catalog
// ============================================================================

/// 모듈 카탈로그
#[derive(Debug, Default)]
pub struct InMemoryModuleCatalog {
    modules: RwLock<Vec<Module>>,
    unavailable: AtomicBool,
}

impl InMemoryModuleCatalog {
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            modules: RwLock::new(modules),
            unavailable: AtomicBool::new(false),
        }
    }

    /// 기본 카탈로그
    pub fn builtin() -> Self {
        Self::new(default_modules())
    }

    /// slug로 모듈 조회
    pub fn get(&self, slug: &str) -> Option<Module> {
        self.modules.read().iter().find(|m| m.slug == slug).cloned()
    }

    /// 저장소 장애 흉내 (true면 list가 Storage 에러)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl ModuleCatalogProvider for InMemoryModuleCatalog {
    async fn list(&self) -> Result<Vec<Module>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::storage("modules table unavailable"));
        }
        Ok(self.modules.read().clone())
    }
}

// ============================================================================
// Workspace enablements
// ============================================================================

/// 워크스페이스별 모듈 활성화 레코드
#[derive(Debug, Default)]
pub struct InMemoryEnablements {
    rows: RwLock<HashMap<Uuid, Vec<WorkspaceModuleEnablement>>>,
}

impl InMemoryEnablements {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모듈 활성화 (이미 있으면 무시)
    pub fn enable(&self, workspace_id: Uuid, module: &Module) {
        if module.is_core {
            // core 모듈은 레코드를 갖지 않음
            return;
        }
        let mut rows = self.rows.write();
        let workspace_rows = rows.entry(workspace_id).or_default();
        if !workspace_rows.iter().any(|r| r.module_id == module.id) {
            workspace_rows.push(WorkspaceModuleEnablement::new(workspace_id, module.id));
        }
    }

    /// 모듈 비활성화 (레코드 삭제)
    pub fn disable(&self, workspace_id: Uuid, module: &Module) {
        if let Some(workspace_rows) = self.rows.write().get_mut(&workspace_id) {
            workspace_rows.retain(|r| r.module_id != module.id);
        }
    }
}

#[async_trait]
impl WorkspaceEnablementProvider for InMemoryEnablements {
    async fn list(&self, workspace_id: Uuid) -> Result<Vec<WorkspaceModuleEnablement>> {
        Ok(self
            .rows
            .read()
            .get(&workspace_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Actor permissions
// ============================================================================

/// (사용자, 워크스페이스)별 권한 할당
#[derive(Debug, Default)]
pub struct InMemoryActorPermissions {
    assignments: RwLock<HashMap<(Uuid, Uuid), ActorPermissions>>,
}

impl InMemoryActorPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 명시적 권한 할당
    pub fn assign(&self, actor_id: Uuid, workspace_id: Uuid, permissions: ActorPermissions) {
        self.assignments
            .write()
            .insert((actor_id, workspace_id), permissions);
    }

    /// 역할 기본 권한으로 할당
    pub fn assign_role(&self, actor_id: Uuid, workspace_id: Uuid, role: AppRole) {
        self.assign(actor_id, workspace_id, ActorPermissions::from_role(role));
    }

    pub fn revoke(&self, actor_id: Uuid, workspace_id: Uuid) {
        self.assignments.write().remove(&(actor_id, workspace_id));
    }
}

#[async_trait]
impl ActorPermissionProvider for InMemoryActorPermissions {
    async fn resolve(&self, actor_id: Uuid, workspace_id: Uuid) -> Result<ActorPermissions> {
        self.assignments
            .read()
            .get(&(actor_id, workspace_id))
            .cloned()
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "no membership for actor {} in workspace {}",
                    actor_id, workspace_id
                ))
            })
    }
}
