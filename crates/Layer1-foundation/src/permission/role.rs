//! 워크스페이스 역할 (viewer < member < admin < owner)

use super::types::{catalog, names, Permission};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// 워크스페이스 역할
///
/// 선언 순서가 곧 순위입니다. `Ord`로 "이 역할 이상" 비교가 가능합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    #[default]
    Viewer,
    Member,
    Admin,
    Owner,
}

const MEMBER_PERMISSIONS: &[&str] = &[
    names::PROJECTS_VIEW,
    names::PROJECTS_CREATE,
    names::PROJECTS_EDIT,
    names::CRM_VIEW,
    names::CRM_EDIT,
    names::COMMERCIAL_VIEW,
    names::TENDERS_VIEW,
    names::TEAM_VIEW,
    names::TIME_TRACK,
    names::DOCUMENTS_VIEW,
    names::DOCUMENTS_UPLOAD,
    names::MESSAGING_USE,
];

impl AppRole {
    pub const ALL: [AppRole; 4] = [AppRole::Viewer, AppRole::Member, AppRole::Admin, AppRole::Owner];

    /// 순위 (0..=3)
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// `min` 이상의 역할인지
    pub fn at_least(&self, min: AppRole) -> bool {
        self.rank() >= min.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Member => "member",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }

    /// 명시적 권한 할당이 없을 때 역할이 갖는 기본 권한
    pub fn default_permissions(&self) -> HashSet<Permission> {
        match self {
            Self::Owner => catalog().iter().map(|d| Permission::from(d.name)).collect(),
            Self::Admin => catalog()
                .iter()
                .filter(|d| d.name != names::WORKSPACE_DELETE)
                .map(|d| Permission::from(d.name))
                .collect(),
            Self::Member => MEMBER_PERMISSIONS.iter().copied().map(Permission::from).collect(),
            Self::Viewer => catalog()
                .iter()
                .filter(|d| d.name.ends_with(".view") || d.name == names::MESSAGING_USE)
                .map(|d| Permission::from(d.name))
                .collect(),
        }
    }
}

impl std::fmt::Display for AppRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown role: {}", s)))
    }
}
