//! Module - 기능 영역 정의
//!
//! core 모듈은 항상 활성화되며 활성화 목록에 나타나지 않습니다.
//! core가 아닌 모듈은 워크스페이스 활성화 레코드가 있을 때만 활성화됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 모듈 slug 상수
pub mod slugs {
    pub const DASHBOARD: &str = "dashboard";
    pub const SETTINGS: &str = "settings";
    pub const CRM: &str = "crm";
    pub const PROJECTS: &str = "projects";
    pub const COMMERCIAL: &str = "commercial";
    pub const INVOICING: &str = "invoicing";
    pub const TENDERS: &str = "tenders";
    pub const CAMPAIGNS: &str = "campaigns";
    pub const TEAM: &str = "team";
    pub const MESSAGING: &str = "messaging";
    pub const DOCUMENTS: &str = "documents";
    pub const RESOURCES: &str = "resources";
}

/// 모듈 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,
    /// 고유 slug
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// core 모듈 여부 (항상 활성화)
    #[serde(default)]
    pub is_core: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl Module {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: slug.into(),
            name: name.into(),
            description: None,
            icon: None,
            is_core: false,
            sort_order: 0,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn core(mut self) -> Self {
        self.is_core = true;
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn sort_order(mut self, order: i32) -> Self {
        self.sort_order = order;
        self
    }
}

/// 워크스페이스의 모듈 활성화 레코드
///
/// 레코드가 존재하면 해당 (워크스페이스, 모듈)은 활성화 상태입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceModuleEnablement {
    pub workspace_id: Uuid,
    pub module_id: Uuid,
    pub enabled_at: DateTime<Utc>,
    #[serde(default)]
    pub enabled_by: Option<Uuid>,
}

impl WorkspaceModuleEnablement {
    pub fn new(workspace_id: Uuid, module_id: Uuid) -> Self {
        Self {
            workspace_id,
            module_id,
            enabled_at: Utc::now(),
            enabled_by: None,
        }
    }

    pub fn enabled_by(mut self, user_id: Uuid) -> Self {
        self.enabled_by = Some(user_id);
        self
    }
}

/// 기본 모듈 카탈로그 (id는 고정값)
pub fn default_modules() -> Vec<Module> {
    let entry = |n: u128, slug: &str, name: &str, icon: &str| {
        Module::new(slug, name)
            .with_id(Uuid::from_u128(0x6d6f_6475_6c65_0000_0000_0000_0000_0000 | n))
            .icon(icon)
            .sort_order(n as i32)
    };

    vec![
        entry(1, slugs::DASHBOARD, "Tableau de bord", "layout-dashboard").core(),
        entry(2, slugs::SETTINGS, "Paramètres", "settings").core(),
        entry(3, slugs::CRM, "CRM", "users").core(),
        entry(4, slugs::PROJECTS, "Projets", "layers").core(),
        entry(5, slugs::COMMERCIAL, "Commercial", "file-text")
            .description("Devis et propositions d'honoraires"),
        entry(6, slugs::INVOICING, "Facturation", "euro")
            .description("Factures, acomptes et relances"),
        entry(7, slugs::TENDERS, "Appels d'offres", "gavel")
            .description("Veille et réponses aux concours"),
        entry(8, slugs::CAMPAIGNS, "Campagnes", "megaphone")
            .description("Campagnes de prospection"),
        entry(9, slugs::TEAM, "Équipe", "users").description("Temps, absences et RH"),
        entry(10, slugs::MESSAGING, "Messagerie", "sticky-note"),
        entry(11, slugs::DOCUMENTS, "Documents", "folder-open"),
        entry(12, slugs::RESOURCES, "Ressources", "calendar")
            .description("Planification des ressources"),
    ]
}
