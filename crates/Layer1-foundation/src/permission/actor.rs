//! 사용자의 해석된 권한과 판정 결과

use super::{AppRole, Permission};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 워크스페이스 내 사용자의 권한/역할
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPermissions {
    pub permissions: HashSet<Permission>,
    pub role: AppRole,
}

impl ActorPermissions {
    pub fn new<I, P>(role: AppRole, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            permissions: permissions.into_iter().map(Into::into).collect(),
            role,
        }
    }

    /// 역할 기본 권한으로 생성
    pub fn from_role(role: AppRole) -> Self {
        Self {
            permissions: role.default_permissions(),
            role,
        }
    }

    pub fn has(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// 권한 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityDecision {
    Granted,
    Denied,
    /// 권한이 아직 로드되지 않음 - 아무것도 렌더링하지 않음
    Indeterminate,
}

impl CapabilityDecision {
    pub fn from_bool(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}
