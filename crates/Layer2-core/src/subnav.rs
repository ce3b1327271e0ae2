//! Sub-navigation filter
//!
//! 하위 메뉴 항목 중 선행 모듈이 비활성인 항목을 제거합니다.
//! 살아남은 항목의 순서는 입력 순서 그대로입니다.

use atelier_foundation::{SubNavItem, SubNavRequirements};

/// 단일 항목이 보이는지
pub fn is_sub_nav_visible(
    module_slug: &str,
    item_key: &str,
    requirements: &SubNavRequirements,
    module_enabled: impl Fn(&str) -> bool,
) -> bool {
    match requirements.required_module(module_slug, item_key) {
        Some(required) => module_enabled(required),
        None => true,
    }
}

/// 보이는 항목만 남김 (순서 유지)
pub fn filter_sub_nav(
    module_slug: &str,
    items: &[SubNavItem],
    requirements: &SubNavRequirements,
    module_enabled: impl Fn(&str) -> bool,
) -> Vec<SubNavItem> {
    items
        .iter()
        .filter(|item| is_sub_nav_visible(module_slug, &item.key, requirements, &module_enabled))
        .cloned()
        .collect()
}
