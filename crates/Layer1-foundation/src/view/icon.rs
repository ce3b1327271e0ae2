//! 아이콘 레지스트리
//!
//! 아이콘 이름을 명시적으로 열거된 테이블에서 찾습니다.
//! 테이블에 없는 이름은 항상 `Icon::FALLBACK`으로 해석됩니다.

use serde::Serialize;

/// 아이콘 참조
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    LayoutDashboard,
    FileText,
    Users,
    Calendar,
    Euro,
    FolderOpen,
    Image,
    Ruler,
    Layers,
    ListChecks,
    HardHat,
    MapPin,
    Palette,
    Megaphone,
    Radio,
    Gavel,
    AlertTriangle,
    StickyNote,
    UserRound,
    HelpCircle,
}

/// 이름 → 아이콘 테이블
const ICONS: &[(&str, Icon)] = &[
    ("layout-dashboard", Icon::LayoutDashboard),
    ("file-text", Icon::FileText),
    ("users", Icon::Users),
    ("calendar", Icon::Calendar),
    ("euro", Icon::Euro),
    ("folder-open", Icon::FolderOpen),
    ("image", Icon::Image),
    ("ruler", Icon::Ruler),
    ("layers", Icon::Layers),
    ("list-checks", Icon::ListChecks),
    ("hard-hat", Icon::HardHat),
    ("map-pin", Icon::MapPin),
    ("palette", Icon::Palette),
    ("megaphone", Icon::Megaphone),
    ("radio", Icon::Radio),
    ("gavel", Icon::Gavel),
    ("alert-triangle", Icon::AlertTriangle),
    ("sticky-note", Icon::StickyNote),
    ("user-round", Icon::UserRound),
    ("help-circle", Icon::HelpCircle),
];

impl Icon {
    /// 해석 실패 시 사용되는 아이콘
    pub const FALLBACK: Icon = Icon::HelpCircle;

    /// 아이콘 이름
    pub fn name(&self) -> &'static str {
        ICONS
            .iter()
            .find(|(_, icon)| icon == self)
            .map(|(name, _)| *name)
            .unwrap_or("help-circle")
    }
}

/// 아이콘 레지스트리
#[derive(Debug, Clone, Copy)]
pub struct IconRegistry {
    table: &'static [(&'static str, Icon)],
}

impl IconRegistry {
    pub fn builtin() -> Self {
        Self { table: ICONS }
    }

    /// 이름으로 조회 (없으면 None)
    pub fn get(&self, name: &str) -> Option<Icon> {
        self.table
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, icon)| *icon)
    }

    /// 이름으로 조회, 없으면 fallback
    pub fn lookup(&self, name: &str) -> Icon {
        self.get(name).unwrap_or_else(|| {
            tracing::debug!(icon = name, "Unresolved icon name, using fallback");
            Icon::FALLBACK
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
