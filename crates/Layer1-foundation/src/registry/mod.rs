//! Registry - 모듈 카탈로그와 내비게이션 테이블
//!
//! - `module.rs` - Module, WorkspaceModuleEnablement, 기본 모듈 카탈로그
//! - `navigation.rs` - 경로 → 모듈 테이블, 하위 내비게이션 선행 모듈 테이블

pub mod module;
pub mod navigation;

pub use module::{default_modules, slugs, Module, WorkspaceModuleEnablement};
pub use navigation::{ModulePathTable, SubNavItem, SubNavRequirements, ALWAYS_ALLOWED_MODULES};
