//! Config - 통합 설정 관리
//!
//! - `atelier.rs` - AtelierConfig (분야별 화면/기능 override, 이름 붙은 권한 조건)

mod atelier;

pub use atelier::{AtelierConfig, DisciplineConfig, ATELIER_CONFIG_FILE};
