//! CapabilityRequest - 화면 동작이 요구하는 조건
//!
//! 각 조건은 AND로 결합됩니다. `permissions`는 모두 필요(AND),
//! `any_permission`은 하나 이상 필요(OR)합니다. 비어 있는 조건은 제약이 없습니다.

use super::{AppRole, Permission};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRequest {
    /// 단일 권한
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Permission>,

    /// 모두 필요한 권한 목록
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,

    /// 하나 이상 필요한 권한 목록
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any_permission: Vec<Permission>,

    /// 최소 역할
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_role: Option<AppRole>,
}

impl CapabilityRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permission(mut self, permission: impl Into<Permission>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn all_of<I, P>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        self.permissions.extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn any_of<I, P>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        self.any_permission.extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn min_role(mut self, role: AppRole) -> Self {
        self.min_role = Some(role);
        self
    }

    /// 아무 조건도 없는 요청 (항상 허용)
    pub fn is_unconstrained(&self) -> bool {
        self.permission.is_none()
            && self.permissions.is_empty()
            && self.any_permission.is_empty()
            && self.min_role.is_none()
    }
}
