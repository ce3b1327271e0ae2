//! View - 화면 구성 정의 (탭, 종합 블록, 폼 섹션)
//!
//! - `types.rs` - ViewDef, ViewKind, ComponentRef, ViewOverride
//! - `icon.rs` - 아이콘 이름 → 아이콘 참조 테이블 (fallback 포함)
//! - `catalog.rs` - 분야별 정적 정의 목록
//!
//! 정의는 코드로 선언되며(configuration-as-code) 런타임에 변경되지 않습니다.
//! 워크스페이스 단위 조정은 `ViewOverride`로 별도 계층에서 적용합니다.

mod catalog;
mod icon;
mod types;

pub use catalog::definitions;
pub use icon::{Icon, IconRegistry};
pub use types::{
    ComponentRef, SectionDef, SynthesisBlockDef, TabDef, ViewDef, ViewKind, ViewOverride,
    ViewOverrides,
};
