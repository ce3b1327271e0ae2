//! Core Module - 상태 타입과 외부 협력자 인터페이스
//!
//! - `types.rs`: Loadable (로딩 중 / 로드됨 / 실패)
//! - `traits.rs`: 모듈 카탈로그, 워크스페이스 활성화, 사용자 권한 Provider
//!
//! 원격 저장소 접근은 모두 이 trait 뒤에 숨겨집니다. Resolver와 Gate는
//! 이미 로드된 값만 다룹니다.

pub mod traits;
pub mod types;

pub use traits::{ActorPermissionProvider, ModuleCatalogProvider, WorkspaceEnablementProvider};
pub use types::Loadable;
