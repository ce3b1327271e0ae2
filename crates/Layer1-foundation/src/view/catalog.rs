//! 분야별 정적 정의 목록
//!
//! 선언 순서는 동일 order일 때의 표시 순서를 결정합니다.

use super::types::{ViewDef, ViewKind};
use crate::discipline::Discipline;

// ============================================================================
// Tabs
// ============================================================================

const ARCHITECTURE_TABS: &[ViewDef] = &[
    ViewDef::tab("synthese", "Synthèse", "layout-dashboard", 0, "ProjectSynthesisTab"),
    ViewDef::tab("phases", "Phases", "list-checks", 1, "ProjectPhasesTab"),
    ViewDef::tab("livrables", "Livrables", "file-text", 2, "ProjectDeliverablesTab"),
    ViewDef::tab("lots", "Lots", "layers", 3, "ProjectLotsTab"),
    ViewDef::tab("planning", "Planning", "calendar", 4, "ProjectPlanningTab"),
    ViewDef::tab("documents", "Documents", "folder-open", 4, "ProjectDocumentsTab"),
    ViewDef::tab("chantier", "Chantier", "hard-hat", 5, "ProjectSiteTab"),
    ViewDef::tab("equipe", "Équipe", "users", 6, "ProjectTeamTab"),
    ViewDef::tab("memoire", "Mémoire technique", "sticky-note", 7, "ProjectMemoTab").hidden(),
    ViewDef::tab("budget", "Budget", "euro", 8, "ProjectBudgetTab"),
];

const INTERIOR_DESIGN_TABS: &[ViewDef] = &[
    ViewDef::tab("synthese", "Synthèse", "layout-dashboard", 0, "ProjectSynthesisTab"),
    ViewDef::tab("moodboard", "Moodboard", "palette", 1, "ProjectMoodboardTab"),
    ViewDef::tab("planches", "Planches", "image", 2, "ProjectDeliverablesTab"),
    ViewDef::tab("pieces", "Pièces", "layers", 3, "ProjectRoomsTab"),
    ViewDef::tab("budget", "Budget", "euro", 4, "ProjectBudgetTab"),
    ViewDef::tab("documents", "Documents", "folder-open", 5, "ProjectDocumentsTab"),
    ViewDef::tab("equipe", "Équipe", "users", 6, "ProjectTeamTab"),
    ViewDef::tab("chantier", "Chantier", "hard-hat", 7, "ProjectSiteTab").hidden(),
];

const SCENOGRAPHY_TABS: &[ViewDef] = &[
    ViewDef::tab("synthese", "Synthèse", "layout-dashboard", 0, "ProjectSynthesisTab"),
    ViewDef::tab("memoire", "Note d'intention", "sticky-note", 1, "ProjectMemoTab").hidden(),
    ViewDef::tab("equipe", "Équipe", "users", 2, "ProjectTeamTab"),
];

const COMMUNICATION_TABS: &[ViewDef] = &[
    ViewDef::tab("synthese", "Synthèse", "layout-dashboard", 0, "ProjectSynthesisTab"),
    ViewDef::tab("supports", "Supports", "image", 1, "ProjectDeliverablesTab"),
    ViewDef::tab("planning", "Planning", "calendar", 2, "ProjectPlanningTab"),
    ViewDef::tab("media", "Plan média", "radio", 3, "CampaignMediaTab"),
    ViewDef::tab("budget", "Budget", "euro", 4, "ProjectBudgetTab"),
    ViewDef::tab("equipe", "Équipe", "users", 5, "ProjectTeamTab"),
    ViewDef::tab("memoire", "Recommandation", "sticky-note", 6, "ProjectMemoTab").hidden(),
];

// ============================================================================
// Synthesis blocks
// ============================================================================

const ARCHITECTURE_BLOCKS: &[ViewDef] = &[
    ViewDef::block("key_figures", "Chiffres clés", "layout-dashboard", 0, "KeyFiguresBlock"),
    ViewDef::block("phase_progress", "Avancement des phases", "list-checks", 1, "PhaseProgressBlock"),
    ViewDef::block("surfaces", "Surfaces", "ruler", 2, "SurfacesBlock"),
    ViewDef::block("fees", "Honoraires", "euro", 3, "FeesBlock"),
    ViewDef::block("deadlines", "Prochaines échéances", "calendar", 4, "DeadlinesBlock"),
    ViewDef::block("team", "Équipe", "users", 4, "TeamBlock"),
    ViewDef::block("risks", "Points de vigilance", "alert-triangle", 5, "RisksBlock").hidden(),
];

const INTERIOR_DESIGN_BLOCKS: &[ViewDef] = &[
    ViewDef::block("key_figures", "Chiffres clés", "layout-dashboard", 0, "KeyFiguresBlock"),
    ViewDef::block("moodboard", "Ambiance", "palette", 1, "MoodboardBlock"),
    ViewDef::block("budget", "Budget", "euro", 2, "BudgetBlock"),
    ViewDef::block("deadlines", "Prochaines échéances", "calendar", 3, "DeadlinesBlock"),
    ViewDef::block("surfaces", "Surfaces", "ruler", 4, "SurfacesBlock").hidden(),
    ViewDef::block("team", "Équipe", "users", 5, "TeamBlock"),
];

const SCENOGRAPHY_BLOCKS: &[ViewDef] = &[
    ViewDef::block("key_figures", "Chiffres clés", "layout-dashboard", 0, "KeyFiguresBlock"),
    ViewDef::block("venue", "Lieu", "map-pin", 1, "VenueBlock"),
    ViewDef::block("sequences", "Séquences", "layers", 2, "SequencesBlock"),
    ViewDef::block("deadlines", "Prochaines échéances", "calendar", 3, "DeadlinesBlock"),
    ViewDef::block("fees", "Honoraires", "euro", 4, "FeesBlock").hidden(),
    ViewDef::block("team", "Équipe", "users", 5, "TeamBlock"),
];

const COMMUNICATION_BLOCKS: &[ViewDef] = &[
    ViewDef::block("key_figures", "Chiffres clés", "layout-dashboard", 0, "KeyFiguresBlock"),
    ViewDef::block("media_plan", "Plan média", "radio", 1, "MediaPlanBlock"),
    ViewDef::block("budget", "Budget", "euro", 2, "BudgetBlock"),
    ViewDef::block("deadlines", "Prochaines échéances", "calendar", 3, "DeadlinesBlock"),
    ViewDef::block("team", "Équipe", "users", 4, "TeamBlock"),
];

// ============================================================================
// Form sections
// ============================================================================

const ARCHITECTURE_SECTIONS: &[ViewDef] = &[
    ViewDef::section("general", "Informations générales", "file-text", 0, "GeneralSection"),
    ViewDef::section("client", "Maîtrise d'ouvrage", "user-round", 1, "ClientSection"),
    ViewDef::section("site", "Terrain et adresse", "map-pin", 2, "SiteSection"),
    ViewDef::section("surfaces", "Surfaces", "ruler", 3, "SurfacesSection"),
    ViewDef::section("fees", "Honoraires", "euro", 4, "FeesSection"),
    ViewDef::section("tender", "Concours", "gavel", 5, "TenderSection").hidden(),
    ViewDef::section("notes", "Notes", "sticky-note", 6, "NotesSection"),
];

const INTERIOR_DESIGN_SECTIONS: &[ViewDef] = &[
    ViewDef::section("general", "Informations générales", "file-text", 0, "GeneralSection"),
    ViewDef::section("client", "Client", "user-round", 1, "ClientSection"),
    ViewDef::section("spaces", "Espaces", "layers", 2, "SpacesSection"),
    ViewDef::section("style", "Style et ambiance", "palette", 3, "StyleSection"),
    ViewDef::section("budget", "Budget", "euro", 4, "BudgetSection"),
    ViewDef::section("notes", "Notes", "sticky-note", 5, "NotesSection"),
];

const SCENOGRAPHY_SECTIONS: &[ViewDef] = &[
    ViewDef::section("general", "Informations générales", "file-text", 0, "GeneralSection"),
    ViewDef::section("client", "Commanditaire", "user-round", 1, "ClientSection"),
    ViewDef::section("venue", "Lieu d'exposition", "map-pin", 2, "VenueSection"),
    ViewDef::section("dates", "Dates d'ouverture", "calendar", 3, "OpeningDatesSection"),
    ViewDef::section("tender", "Concours", "gavel", 4, "TenderSection"),
    ViewDef::section("notes", "Notes", "sticky-note", 5, "NotesSection"),
];

const COMMUNICATION_SECTIONS: &[ViewDef] = &[
    ViewDef::section("general", "Informations générales", "file-text", 0, "GeneralSection"),
    ViewDef::section("client", "Annonceur", "user-round", 1, "ClientSection"),
    ViewDef::section("brief", "Brief", "megaphone", 2, "BriefSection"),
    ViewDef::section("channels", "Canaux", "radio", 3, "ChannelsSection"),
    ViewDef::section("budget", "Budget", "euro", 4, "BudgetSection"),
    ViewDef::section("site", "Adresse", "map-pin", 5, "SiteSection").hidden(),
    ViewDef::section("notes", "Notes", "sticky-note", 6, "NotesSection"),
];

/// 분야와 종류의 원본 정의 목록 (선언 순서, 필터링 전)
pub fn definitions(discipline: Discipline, kind: ViewKind) -> &'static [ViewDef] {
    use Discipline::*;
    use ViewKind::*;

    match (discipline, kind) {
        (Architecture, Tab) => ARCHITECTURE_TABS,
        (Architecture, SynthesisBlock) => ARCHITECTURE_BLOCKS,
        (Architecture, Section) => ARCHITECTURE_SECTIONS,
        (InteriorDesign, Tab) => INTERIOR_DESIGN_TABS,
        (InteriorDesign, SynthesisBlock) => INTERIOR_DESIGN_BLOCKS,
        (InteriorDesign, Section) => INTERIOR_DESIGN_SECTIONS,
        (Scenography, Tab) => SCENOGRAPHY_TABS,
        (Scenography, SynthesisBlock) => SCENOGRAPHY_BLOCKS,
        (Scenography, Section) => SCENOGRAPHY_SECTIONS,
        (Communication, Tab) => COMMUNICATION_TABS,
        (Communication, SynthesisBlock) => COMMUNICATION_BLOCKS,
        (Communication, Section) => COMMUNICATION_SECTIONS,
    }
}
