//! 분야별 용어 사전
//!
//! 모든 분야는 모든 키에 대해 값을 가진 완전한 사전을 가집니다.
//! 필드가 구조체로 고정되어 있으므로 부분 사전은 컴파일되지 않습니다.

use super::Discipline;
use serde::Serialize;

/// 용어 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKey {
    Project,
    Projects,
    Client,
    Clients,
    Deliverable,
    Deliverables,
    Phase,
    Phases,
    WorkPackage,
    Venue,
    Brief,
    Team,
}

impl TermKey {
    pub const ALL: [TermKey; 12] = [
        TermKey::Project,
        TermKey::Projects,
        TermKey::Client,
        TermKey::Clients,
        TermKey::Deliverable,
        TermKey::Deliverables,
        TermKey::Phase,
        TermKey::Phases,
        TermKey::WorkPackage,
        TermKey::Venue,
        TermKey::Brief,
        TermKey::Team,
    ];
}

/// 용어 사전
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminology {
    pub project: &'static str,
    pub projects: &'static str,
    pub client: &'static str,
    pub clients: &'static str,
    pub deliverable: &'static str,
    pub deliverables: &'static str,
    pub phase: &'static str,
    pub phases: &'static str,
    pub work_package: &'static str,
    pub venue: &'static str,
    pub brief: &'static str,
    pub team: &'static str,
}

const ARCHITECTURE: Terminology = Terminology {
    project: "Projet",
    projects: "Projets",
    client: "Maître d'ouvrage",
    clients: "Maîtres d'ouvrage",
    deliverable: "Livrable",
    deliverables: "Livrables",
    phase: "Phase",
    phases: "Phases",
    work_package: "Lot",
    venue: "Chantier",
    brief: "Programme",
    team: "Équipe de maîtrise d'œuvre",
};

const INTERIOR_DESIGN: Terminology = Terminology {
    project: "Projet",
    projects: "Projets",
    client: "Client",
    clients: "Clients",
    deliverable: "Planche",
    deliverables: "Planches",
    phase: "Étape",
    phases: "Étapes",
    work_package: "Pièce",
    venue: "Espace",
    brief: "Cahier des charges",
    team: "Équipe",
};

const SCENOGRAPHY: Terminology = Terminology {
    project: "Exposition",
    projects: "Expositions",
    client: "Commanditaire",
    clients: "Commanditaires",
    deliverable: "Rendu",
    deliverables: "Rendus",
    phase: "Phase",
    phases: "Phases",
    work_package: "Séquence",
    venue: "Lieu",
    brief: "Note d'intention",
    team: "Équipe",
};

const COMMUNICATION: Terminology = Terminology {
    project: "Campagne",
    projects: "Campagnes",
    client: "Annonceur",
    clients: "Annonceurs",
    deliverable: "Support",
    deliverables: "Supports",
    phase: "Étape",
    phases: "Étapes",
    work_package: "Action",
    venue: "Canal",
    brief: "Brief",
    team: "Équipe",
};

impl Terminology {
    /// 분야 사전 조회 (항상 성공)
    pub fn of(discipline: Discipline) -> &'static Terminology {
        match discipline {
            Discipline::Architecture => &ARCHITECTURE,
            Discipline::InteriorDesign => &INTERIOR_DESIGN,
            Discipline::Scenography => &SCENOGRAPHY,
            Discipline::Communication => &COMMUNICATION,
        }
    }

    /// 키로 용어 조회
    pub fn get(&self, key: TermKey) -> &'static str {
        match key {
            TermKey::Project => self.project,
            TermKey::Projects => self.projects,
            TermKey::Client => self.client,
            TermKey::Clients => self.clients,
            TermKey::Deliverable => self.deliverable,
            TermKey::Deliverables => self.deliverables,
            TermKey::Phase => self.phase,
            TermKey::Phases => self.phases,
            TermKey::WorkPackage => self.work_package,
            TermKey::Venue => self.venue,
            TermKey::Brief => self.brief,
            TermKey::Team => self.team,
        }
    }

    /// (키, 용어) 전체 목록
    pub fn entries(&self) -> impl Iterator<Item = (TermKey, &'static str)> + '_ {
        TermKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
