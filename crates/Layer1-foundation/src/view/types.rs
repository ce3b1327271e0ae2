//! View 정의 타입

use serde::{Deserialize, Serialize};

/// 정의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// 엔티티 상세 화면의 탭
    Tab,
    /// 종합(synthèse) 화면의 블록
    SynthesisBlock,
    /// 생성/수정 폼의 섹션
    Section,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Tab, ViewKind::SynthesisBlock, ViewKind::Section];
}

/// 화면을 그리는 컴포넌트 참조 (이름)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentRef(&'static str);

impl ComponentRef {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// 화면 구성 정의
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDef {
    pub kind: ViewKind,
    /// 목록 내 고유 키
    pub key: &'static str,
    pub label: &'static str,
    /// 아이콘 이름 (IconRegistry로 해석)
    pub icon: &'static str,
    pub visible: bool,
    /// 오름차순, 동률은 선언 순서 유지
    pub order: i32,
    pub component: ComponentRef,
}

pub type TabDef = ViewDef;
pub type SynthesisBlockDef = ViewDef;
pub type SectionDef = ViewDef;

impl ViewDef {
    pub const fn new(
        kind: ViewKind,
        key: &'static str,
        label: &'static str,
        icon: &'static str,
        order: i32,
        component: &'static str,
    ) -> Self {
        Self {
            kind,
            key,
            label,
            icon,
            visible: true,
            order,
            component: ComponentRef::new(component),
        }
    }

    pub const fn tab(
        key: &'static str,
        label: &'static str,
        icon: &'static str,
        order: i32,
        component: &'static str,
    ) -> Self {
        Self::new(ViewKind::Tab, key, label, icon, order, component)
    }

    pub const fn block(
        key: &'static str,
        label: &'static str,
        icon: &'static str,
        order: i32,
        component: &'static str,
    ) -> Self {
        Self::new(ViewKind::SynthesisBlock, key, label, icon, order, component)
    }

    pub const fn section(
        key: &'static str,
        label: &'static str,
        icon: &'static str,
        order: i32,
        component: &'static str,
    ) -> Self {
        Self::new(ViewKind::Section, key, label, icon, order, component)
    }

    pub const fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }
}

/// 워크스페이스 단위 정의 조정 (visible/order만 변경 가능)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOverride {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl ViewOverride {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            visible: None,
            order: None,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// 정의에 적용 (키가 다르면 그대로)
    pub fn apply(&self, def: &mut ViewDef) {
        if self.key != def.key {
            return;
        }
        if let Some(visible) = self.visible {
            def.visible = visible;
        }
        if let Some(order) = self.order {
            def.order = order;
        }
    }
}

/// 종류별 override 목록
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOverrides {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<ViewOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<ViewOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<ViewOverride>,
}

impl ViewOverrides {
    pub fn for_kind(&self, kind: ViewKind) -> &[ViewOverride] {
        match kind {
            ViewKind::Tab => &self.tabs,
            ViewKind::SynthesisBlock => &self.blocks,
            ViewKind::Section => &self.sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty() && self.blocks.is_empty() && self.sections.is_empty()
    }

    /// 다른 override와 병합 (같은 키는 other가 필드 단위로 우선)
    pub fn merge(&mut self, other: ViewOverrides) {
        merge_list(&mut self.tabs, other.tabs);
        merge_list(&mut self.blocks, other.blocks);
        merge_list(&mut self.sections, other.sections);
    }
}

fn merge_list(base: &mut Vec<ViewOverride>, other: Vec<ViewOverride>) {
    for incoming in other {
        match base.iter_mut().find(|o| o.key == incoming.key) {
            Some(existing) => {
                existing.visible = incoming.visible.or(existing.visible);
                existing.order = incoming.order.or(existing.order);
            }
            None => base.push(incoming),
        }
    }
}
