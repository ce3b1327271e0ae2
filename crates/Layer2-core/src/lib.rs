//! atelier-core: 분야별 화면 구성 및 권한 판정
//!
//! Layer2 - Layer1의 정적 데이터 위에서 동작하는 resolver와 gate
//!
//! # 주요 모듈
//!
//! - `terminology`: 분야 → 용어 사전
//! - `view`: 분야별 탭/블록/섹션 해석 (override 적용, 가시성 필터, 안정 정렬)
//! - `entitlement`: 모듈 활성화 판정 및 워크스페이스 전환 guard
//! - `capability`: 권한/역할 조건 평가
//! - `subnav`: 모듈 활성화 기반 하위 메뉴 필터
//! - `session`: 워크스페이스 단위 상태 facade (비동기 로드)
//! - `memory`: 메모리 기반 Provider 구현
//! - `config`: 계층형 설정 로더
//!
//! # 사용 예시
//!
//! ```ignore
//! use atelier_core::{InMemoryActorPermissions, InMemoryEnablements, InMemoryModuleCatalog};
//! use atelier_core::WorkspaceSession;
//!
//! let session = WorkspaceSession::builder(actor_id)
//!     .modules(Arc::new(InMemoryModuleCatalog::builtin()))
//!     .enablements(Arc::new(InMemoryEnablements::new()))
//!     .actors(Arc::new(actors))
//!     .config(ConfigLoader::new(Path::new(".")).load_all())
//!     .build()?;
//!
//! let outcome = session
//!     .switch_workspace(workspace_id, Some(Discipline::Scenography), "/campaigns")
//!     .await;
//! if let Some(home) = outcome.redirect_target() {
//!     // 홈으로 이동
//! }
//!
//! let tabs = session.tabs();
//! let label = session.term(TermKey::Project);
//! ```

pub mod capability;
pub mod config;
pub mod entitlement;
pub mod memory;
pub mod session;
pub mod subnav;
pub mod terminology;
pub mod view;

// Re-exports: Resolvers
pub use terminology::{resolve_terminology, resolve_terminology_str, term};
pub use view::{apply_overrides, visible_sorted, ViewResolver};

// Re-exports: Gates
pub use capability::{evaluate, evaluate_capability};
pub use entitlement::{
    is_module_enabled, module_for_path, GuardOutcome, GuardState, ModuleGate,
    WorkspaceSwitchGuard, HOME_PATH,
};
pub use subnav::{filter_sub_nav, is_sub_nav_visible};

// Re-exports: Session
pub use session::{WorkspaceSession, WorkspaceSessionBuilder};

// Re-exports: In-memory collaborators
pub use memory::{InMemoryActorPermissions, InMemoryEnablements, InMemoryModuleCatalog};

// Re-exports: Config
pub use config::{load_config_from_file, ConfigLoader};

// Re-exports from Layer1
pub use atelier_foundation::{
    AtelierConfig, CapabilityDecision, CapabilityRequest, Discipline, Error, Loadable, Result,
    TermKey, Terminology, ViewDef, ViewKind,
};
