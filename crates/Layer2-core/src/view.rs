//! View-definition resolver
//!
//! 분야별 탭 / 종합 블록 / 폼 섹션 목록을 화면에 보일 순서로 해석합니다.
//!
//! 1. 분야의 원본 정의 조회 (분야 없음 → 기본 분야)
//! 2. 워크스페이스 override 적용 (visible / order)
//! 3. `visible = false` 제거
//! 4. `order` 오름차순 안정 정렬 (동률은 선언 순서)
//!
//! 어떤 입력에도 실패하지 않습니다. 없는 키는 보이지 않고, 해석되지 않는
//! 아이콘은 fallback 아이콘이 됩니다.

use atelier_foundation::view::definitions;
use atelier_foundation::{
    AtelierConfig, ComponentRef, Discipline, Icon, IconRegistry, ViewDef, ViewKind, ViewOverride,
    ViewOverrides,
};
use std::collections::HashMap;
use tracing::debug;

/// override 적용 (알 수 없는 키는 무시)
pub fn apply_overrides(defs: &[ViewDef], overrides: &[ViewOverride]) -> Vec<ViewDef> {
    let mut resolved = defs.to_vec();

    for o in overrides {
        match resolved.iter_mut().find(|d| d.key == o.key) {
            Some(def) => o.apply(def),
            None => debug!(key = %o.key, "Ignoring override for unknown view key"),
        }
    }

    resolved
}

/// 보이는 정의만 남기고 order로 안정 정렬
pub fn visible_sorted(defs: impl IntoIterator<Item = ViewDef>) -> Vec<ViewDef> {
    let mut visible: Vec<ViewDef> = defs.into_iter().filter(|d| d.visible).collect();
    // sort_by_key는 안정 정렬
    visible.sort_by_key(|d| d.order);
    visible
}

/// 화면 정의 resolver
#[derive(Debug, Clone, Default)]
pub struct ViewResolver {
    overrides: HashMap<Discipline, ViewOverrides>,
    icons: IconRegistry,
}

impl ViewResolver {
    /// override 없는 resolver
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AtelierConfig) -> Self {
        let overrides = config
            .disciplines
            .iter()
            .filter(|(_, c)| !c.views.is_empty())
            .map(|(d, c)| (*d, c.views.clone()))
            .collect();

        Self {
            overrides,
            icons: IconRegistry::builtin(),
        }
    }

    pub fn with_overrides(mut self, discipline: Discipline, overrides: ViewOverrides) -> Self {
        self.overrides.insert(discipline, overrides);
        self
    }

    /// 보이는 정의 목록 (정렬됨)
    pub fn resolve(&self, kind: ViewKind, discipline: Option<Discipline>) -> Vec<ViewDef> {
        let discipline = Discipline::or_default(discipline);
        let raw = definitions(discipline, kind);

        match self.overrides.get(&discipline).map(|o| o.for_kind(kind)) {
            Some(overrides) if !overrides.is_empty() => {
                visible_sorted(apply_overrides(raw, overrides))
            }
            _ => visible_sorted(raw.iter().copied()),
        }
    }

    pub fn tabs(&self, discipline: Option<Discipline>) -> Vec<ViewDef> {
        self.resolve(ViewKind::Tab, discipline)
    }

    pub fn blocks(&self, discipline: Option<Discipline>) -> Vec<ViewDef> {
        self.resolve(ViewKind::SynthesisBlock, discipline)
    }

    pub fn sections(&self, discipline: Option<Discipline>) -> Vec<ViewDef> {
        self.resolve(ViewKind::Section, discipline)
    }

    /// 키가 해당 분야에서 보이는지 (모르는 키는 false)
    pub fn is_visible(&self, kind: ViewKind, key: &str, discipline: Option<Discipline>) -> bool {
        self.find(kind, key, discipline).is_some()
    }

    /// 키를 그리는 컴포넌트 (보이지 않거나 모르는 키는 None)
    pub fn component_for(
        &self,
        kind: ViewKind,
        key: &str,
        discipline: Option<Discipline>,
    ) -> Option<ComponentRef> {
        self.find(kind, key, discipline).map(|d| d.component)
    }

    /// 정의의 아이콘 (해석 실패 시 fallback)
    pub fn icon_for(&self, def: &ViewDef) -> Icon {
        self.icons.lookup(def.icon)
    }

    fn find(&self, kind: ViewKind, key: &str, discipline: Option<Discipline>) -> Option<ViewDef> {
        self.resolve(kind, discipline).into_iter().find(|d| d.key == key)
    }
}
