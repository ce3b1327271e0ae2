//! Permission system for Atelier
//!
//! - `types`: 권한 토큰과 닫힌 권한 카탈로그 (Permission, PermissionDef)
//! - `role`: 순서가 있는 역할 (AppRole)
//! - `request`: 화면 동작이 요구하는 조건 (CapabilityRequest)
//! - `actor`: 사용자의 해석된 권한/역할, 판정 결과 (ActorPermissions, CapabilityDecision)
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use atelier_foundation::permission::{names, AppRole, CapabilityRequest};
//!
//! // 삭제 버튼: projects.delete 권한 + admin 이상
//! let request = CapabilityRequest::new()
//!     .permission(names::PROJECTS_DELETE)
//!     .min_role(AppRole::Admin);
//! ```

mod actor;
mod request;
mod role;
mod types;

pub use actor::{ActorPermissions, CapabilityDecision};
pub use request::CapabilityRequest;
pub use role::AppRole;
pub use types::{catalog, categories, find as find_permission, names, Permission, PermissionDef};
