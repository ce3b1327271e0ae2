//! 권한 타입 정의
//!
//! 권한은 닫힌 집합의 문자열 토큰입니다 (예: "projects.delete").

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// 권한 토큰
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 카탈로그에 정의된 권한인지
    pub fn is_known(&self) -> bool {
        find(&self.0).is_some()
    }

    /// 카테고리 ("projects.delete" → "projects")
    pub fn category(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl Borrow<str> for Permission {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Permission {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Permission {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 권한 정의
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDef {
    /// 권한 이름 (예: "projects.delete")
    pub name: &'static str,
    /// 카테고리 (예: "projects")
    pub category: &'static str,
    pub description: &'static str,
    /// 파괴적 동작 여부 (삭제, 멤버 관리 등)
    pub destructive: bool,
}

impl PermissionDef {
    const fn new(name: &'static str, category: &'static str, description: &'static str) -> Self {
        Self {
            name,
            category,
            description,
            destructive: false,
        }
    }

    const fn destructive(self) -> Self {
        Self {
            destructive: true,
            ..self
        }
    }
}

// ============================================================
// 표준 카테고리 / 권한 이름
// ============================================================

pub mod categories {
    pub const PROJECTS: &str = "projects";
    pub const CRM: &str = "crm";
    pub const COMMERCIAL: &str = "commercial";
    pub const INVOICING: &str = "invoicing";
    pub const TENDERS: &str = "tenders";
    pub const TEAM: &str = "team";
    pub const TIME: &str = "time";
    pub const DOCUMENTS: &str = "documents";
    pub const MESSAGING: &str = "messaging";
    pub const MEMBERS: &str = "members";
    pub const WORKSPACE: &str = "workspace";
}

pub mod names {
    pub const PROJECTS_VIEW: &str = "projects.view";
    pub const PROJECTS_CREATE: &str = "projects.create";
    pub const PROJECTS_EDIT: &str = "projects.edit";
    pub const PROJECTS_DELETE: &str = "projects.delete";
    pub const CRM_VIEW: &str = "crm.view";
    pub const CRM_EDIT: &str = "crm.edit";
    pub const CRM_DELETE: &str = "crm.delete";
    pub const COMMERCIAL_VIEW: &str = "commercial.view";
    pub const COMMERCIAL_EDIT: &str = "commercial.edit";
    pub const INVOICING_VIEW: &str = "invoicing.view";
    pub const INVOICING_EDIT: &str = "invoicing.edit";
    pub const INVOICING_SEND: &str = "invoicing.send";
    pub const TENDERS_VIEW: &str = "tenders.view";
    pub const TENDERS_EDIT: &str = "tenders.edit";
    pub const TEAM_VIEW: &str = "team.view";
    pub const TEAM_MANAGE: &str = "team.manage";
    pub const TIME_TRACK: &str = "time.track";
    pub const TIME_APPROVE: &str = "time.approve";
    pub const DOCUMENTS_VIEW: &str = "documents.view";
    pub const DOCUMENTS_UPLOAD: &str = "documents.upload";
    pub const MESSAGING_USE: &str = "messaging.use";
    pub const MEMBERS_INVITE: &str = "members.invite";
    pub const MEMBERS_MANAGE: &str = "members.manage";
    pub const WORKSPACE_SETTINGS: &str = "workspace.settings";
    pub const WORKSPACE_MODULES: &str = "workspace.modules";
    pub const WORKSPACE_DELETE: &str = "workspace.delete";
}

use categories as c;
use names as n;

const CATALOG: &[PermissionDef] = &[
    PermissionDef::new(n::PROJECTS_VIEW, c::PROJECTS, "View projects"),
    PermissionDef::new(n::PROJECTS_CREATE, c::PROJECTS, "Create projects"),
    PermissionDef::new(n::PROJECTS_EDIT, c::PROJECTS, "Edit projects"),
    PermissionDef::new(n::PROJECTS_DELETE, c::PROJECTS, "Delete projects").destructive(),
    PermissionDef::new(n::CRM_VIEW, c::CRM, "View contacts and companies"),
    PermissionDef::new(n::CRM_EDIT, c::CRM, "Edit contacts and companies"),
    PermissionDef::new(n::CRM_DELETE, c::CRM, "Delete contacts and companies").destructive(),
    PermissionDef::new(n::COMMERCIAL_VIEW, c::COMMERCIAL, "View quotes"),
    PermissionDef::new(n::COMMERCIAL_EDIT, c::COMMERCIAL, "Edit quotes"),
    PermissionDef::new(n::INVOICING_VIEW, c::INVOICING, "View invoices"),
    PermissionDef::new(n::INVOICING_EDIT, c::INVOICING, "Edit invoices"),
    PermissionDef::new(n::INVOICING_SEND, c::INVOICING, "Send invoices to clients"),
    PermissionDef::new(n::TENDERS_VIEW, c::TENDERS, "View tenders"),
    PermissionDef::new(n::TENDERS_EDIT, c::TENDERS, "Edit tender responses"),
    PermissionDef::new(n::TEAM_VIEW, c::TEAM, "View team members and absences"),
    PermissionDef::new(n::TEAM_MANAGE, c::TEAM, "Manage HR records"),
    PermissionDef::new(n::TIME_TRACK, c::TIME, "Track own time"),
    PermissionDef::new(n::TIME_APPROVE, c::TIME, "Approve timesheets"),
    PermissionDef::new(n::DOCUMENTS_VIEW, c::DOCUMENTS, "View documents"),
    PermissionDef::new(n::DOCUMENTS_UPLOAD, c::DOCUMENTS, "Upload documents"),
    PermissionDef::new(n::MESSAGING_USE, c::MESSAGING, "Use workspace messaging"),
    PermissionDef::new(n::MEMBERS_INVITE, c::MEMBERS, "Invite members"),
    PermissionDef::new(n::MEMBERS_MANAGE, c::MEMBERS, "Change member roles").destructive(),
    PermissionDef::new(n::WORKSPACE_SETTINGS, c::WORKSPACE, "Edit workspace settings"),
    PermissionDef::new(n::WORKSPACE_MODULES, c::WORKSPACE, "Enable or disable modules"),
    PermissionDef::new(n::WORKSPACE_DELETE, c::WORKSPACE, "Delete the workspace").destructive(),
];

/// 전체 권한 카탈로그
pub fn catalog() -> &'static [PermissionDef] {
    CATALOG
}

/// 권한 정의 조회
pub fn find(name: &str) -> Option<&'static PermissionDef> {
    CATALOG.iter().find(|def| def.name == name)
}
