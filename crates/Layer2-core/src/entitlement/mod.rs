//! Module entitlement
//!
//! - `gate.rs` - 모듈 활성화 판정, 경로 → 모듈 해석
//! - `guard.rs` - 워크스페이스 전환 시 비활성 모듈 경로에서 홈으로 보내는 guard

mod gate;
mod guard;

pub use gate::{is_module_enabled, module_for_path, ModuleGate};
pub use guard::{GuardOutcome, GuardState, WorkspaceSwitchGuard, HOME_PATH};
