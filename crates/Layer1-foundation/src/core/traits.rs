//! Core Traits - 외부 협력자 인터페이스
//!
//! Layer2 이상에서 구현합니다. 구현체는 원격 테이블 CRUD, 캐시, 테스트용
//! 메모리 저장소 등 어떤 것이든 될 수 있습니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View layer                                                 │
//! │  └── WorkspaceSession (Layer2) 조회                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Layer2-Core                                                │
//! │  ├── Terminology / View resolver                            │
//! │  ├── Module entitlement gate + workspace switch guard       │
//! │  └── Capability gate, sub-navigation filter                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Layer1-Foundation (이 레이어)                              │
//! │  ├── Provider trait 정의 (이 파일)                           │
//! │  └── 정적 카탈로그 (discipline, view, module, permission)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use crate::permission::ActorPermissions;
use crate::registry::{Module, WorkspaceModuleEnablement};
use crate::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// 전역 모듈 카탈로그 (캐시 가능)
#[async_trait]
pub trait ModuleCatalogProvider: Send + Sync {
    async fn list(&self) -> Result<Vec<Module>>;
}

/// 워크스페이스별 모듈 활성화 레코드
#[async_trait]
pub trait WorkspaceEnablementProvider: Send + Sync {
    async fn list(&self, workspace_id: Uuid) -> Result<Vec<WorkspaceModuleEnablement>>;
}

/// 사용자의 워크스페이스 권한/역할
#[async_trait]
pub trait ActorPermissionProvider: Send + Sync {
    async fn resolve(&self, actor_id: Uuid, workspace_id: Uuid) -> Result<ActorPermissions>;
}
