//! # atelier-foundation
//!
//! Foundation layer for Atelier:
//! - Discipline: 업무 분야, 용어 사전, 기능 플래그
//! - View: 탭 / 종합 블록 / 폼 섹션 정의, 아이콘 레지스트리
//! - Registry: 모듈 카탈로그, 경로 → 모듈 테이블, 하위 메뉴 선행 모듈
//! - Permission: 권한 토큰, 역할, CapabilityRequest
//! - Config: 통합 설정 (AtelierConfig)
//! - Core: Loadable, 외부 협력자 trait
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Static catalogs (configuration-as-code)                │
//! │  ├── Discipline → Terminology, Features                 │
//! │  ├── Discipline × ViewKind → [ViewDef]                  │
//! │  └── Module paths, sub-nav requirements, permissions    │
//! │                     │                                   │
//! │                     ▼                                   │
//! │          AtelierConfig overrides (JSON)                 │
//! │                     │                                   │
//! │          ┌─────────┴─────────┐                         │
//! │          ▼                   ▼                         │
//! │   Resolvers (Layer2)   Gates (Layer2)                  │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod discipline;
pub mod error;
pub mod permission;
pub mod registry;
pub mod storage;
pub mod view;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Core (상태 타입 및 협력자 trait)
// ============================================================================
pub use core::{ActorPermissionProvider, Loadable, ModuleCatalogProvider, WorkspaceEnablementProvider};

// ============================================================================
// Discipline (분야)
// ============================================================================
pub use discipline::{
    merge_features, Discipline, DisciplineFeatures, FeatureOverrides, TermKey, Terminology,
};

// ============================================================================
// View (화면 정의)
// ============================================================================
pub use view::{
    ComponentRef, Icon, IconRegistry, SectionDef, SynthesisBlockDef, TabDef, ViewDef, ViewKind,
    ViewOverride, ViewOverrides,
};

// ============================================================================
// Registry (모듈 / 내비게이션)
// ============================================================================
pub use registry::{
    default_modules, slugs as module_slugs, Module, ModulePathTable, SubNavItem,
    SubNavRequirements, WorkspaceModuleEnablement, ALWAYS_ALLOWED_MODULES,
};

// ============================================================================
// Permission (권한 시스템)
// ============================================================================
pub use permission::{
    names as permission_names, ActorPermissions, AppRole, CapabilityDecision, CapabilityRequest,
    Permission, PermissionDef,
};

// ============================================================================
// Config / Storage
// ============================================================================
pub use config::{AtelierConfig, DisciplineConfig, ATELIER_CONFIG_FILE};
pub use storage::{JsonStore, PROJECT_DIR_NAME};
