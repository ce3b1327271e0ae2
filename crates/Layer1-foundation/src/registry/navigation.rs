//! Navigation 테이블
//!
//! - 경로 prefix → 모듈 slug
//! - (모듈, 하위 메뉴 키) → 선행 모듈 slug

use super::module::slugs;
use serde::{Deserialize, Serialize};

/// 워크스페이스 전환 시 검사하지 않는 모듈
pub const ALWAYS_ALLOWED_MODULES: [&str; 2] = [slugs::DASHBOARD, slugs::SETTINGS];

const MODULE_PATHS: &[(&str, &str)] = &[
    ("/dashboard", slugs::DASHBOARD),
    ("/settings", slugs::SETTINGS),
    ("/crm", slugs::CRM),
    ("/projects", slugs::PROJECTS),
    ("/commercial", slugs::COMMERCIAL),
    ("/invoicing", slugs::INVOICING),
    ("/tenders", slugs::TENDERS),
    ("/campaigns", slugs::CAMPAIGNS),
    ("/team", slugs::TEAM),
    ("/messages", slugs::MESSAGING),
    ("/documents", slugs::DOCUMENTS),
    ("/resources", slugs::RESOURCES),
];

const SUB_NAV_REQUIREMENTS: &[(&str, &str, &str)] = &[
    (slugs::PROJECTS, "tenders", slugs::TENDERS),
    (slugs::PROJECTS, "resources", slugs::RESOURCES),
    (slugs::PROJECTS, "documents", slugs::DOCUMENTS),
    (slugs::CRM, "campaigns", slugs::CAMPAIGNS),
    (slugs::CRM, "quotes", slugs::COMMERCIAL),
    (slugs::COMMERCIAL, "invoices", slugs::INVOICING),
    (slugs::COMMERCIAL, "payment_reminders", slugs::INVOICING),
    (slugs::TEAM, "planning", slugs::RESOURCES),
    (slugs::DASHBOARD, "messages", slugs::MESSAGING),
];

// ============================================================================
// ModulePathTable
// ============================================================================

/// 경로 prefix → 모듈 slug 테이블
#[derive(Debug, Clone)]
pub struct ModulePathTable {
    entries: Vec<(String, String)>,
}

impl ModulePathTable {
    pub fn builtin() -> Self {
        Self::new(
            MODULE_PATHS
                .iter()
                .map(|(prefix, slug)| (prefix.to_string(), slug.to_string())),
        )
    }

    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// 경로가 가리키는 모듈 slug
    ///
    /// 세그먼트 경계에서만 일치합니다 (`/crm/contacts`는 `/crm`, `/crmx`는 불일치).
    /// 쿼리 문자열과 fragment는 무시합니다.
    pub fn slug_for_path(&self, path: &str) -> Option<&str> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        self.entries
            .iter()
            .find(|(prefix, _)| {
                path.strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
            .map(|(_, slug)| slug.as_str())
    }
}

impl Default for ModulePathTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Sub navigation
// ============================================================================

/// 하위 내비게이션 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubNavItem {
    pub key: String,
    pub label: String,
    pub path: String,
}

impl SubNavItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            path: path.into(),
        }
    }
}

/// (모듈, 항목 키) → 선행 모듈 테이블
#[derive(Debug, Clone)]
pub struct SubNavRequirements {
    entries: Vec<(String, String, String)>,
}

impl SubNavRequirements {
    pub fn builtin() -> Self {
        Self::new(SUB_NAV_REQUIREMENTS.iter().map(|(module, item, required)| {
            (module.to_string(), item.to_string(), required.to_string())
        }))
    }

    pub fn new(entries: impl IntoIterator<Item = (String, String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 항목이 요구하는 모듈 (없으면 제약 없음)
    pub fn required_module(&self, module_slug: &str, item_key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(module, item, _)| module == module_slug && item == item_key)
            .map(|(_, _, required)| required.as_str())
    }
}

impl Default for SubNavRequirements {
    fn default() -> Self {
        Self::builtin()
    }
}
