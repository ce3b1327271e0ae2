//! Terminology resolver
//!
//! 분야가 없거나(초기 렌더링 등) 알 수 없으면 기본 분야(architecture)의
//! 사전을 돌려줍니다. 실패하지 않습니다.

use atelier_foundation::{Discipline, TermKey, Terminology};

/// 분야 용어 사전
pub fn resolve_terminology(discipline: Option<Discipline>) -> &'static Terminology {
    Terminology::of(Discipline::or_default(discipline))
}

/// 저장된 분야 식별자(문자열)로 사전 조회
pub fn resolve_terminology_str(discipline: Option<&str>) -> &'static Terminology {
    Terminology::of(Discipline::parse_or_default(discipline))
}

/// 단일 용어 조회
pub fn term(discipline: Option<Discipline>, key: TermKey) -> &'static str {
    resolve_terminology(discipline).get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_discipline_complete() {
        for discipline in Discipline::ALL {
            let terms = resolve_terminology(Some(discipline));
            assert_eq!(terms.entries().count(), TermKey::ALL.len());
            assert!(terms.entries().all(|(_, v)| !v.is_empty()));
        }
    }

    #[test]
    fn test_fallback_to_architecture() {
        let architecture = resolve_terminology(Some(Discipline::Architecture));
        assert_eq!(resolve_terminology(None), architecture);
        assert_eq!(resolve_terminology_str(Some("unknown")), architecture);
        assert_eq!(resolve_terminology_str(None), architecture);
    }

    #[test]
    fn test_term() {
        assert_eq!(term(Some(Discipline::Communication), TermKey::Projects), "Campagnes");
        assert_eq!(term(None, TermKey::WorkPackage), "Lot");
    }
}
