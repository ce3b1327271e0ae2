//! Permission / role gate
//!
//! 요청에 있는 조건만 AND로 결합합니다. 없는 조건은 제약이 없습니다.
//! 사용자 권한이 아직 로드되지 않았으면 `Indeterminate`이며, 화면은 이때
//! 아무것도 그리지 않아야 합니다.

use atelier_foundation::{ActorPermissions, CapabilityDecision, CapabilityRequest, Loadable};

/// 요청이 사용자에게 허용되는지
pub fn evaluate(request: &CapabilityRequest, actor: &ActorPermissions) -> bool {
    let mut has_access = true;

    if let Some(permission) = &request.permission {
        has_access &= actor.permissions.contains(permission);
    }

    if !request.permissions.is_empty() {
        has_access &= request
            .permissions
            .iter()
            .all(|p| actor.permissions.contains(p));
    }

    if !request.any_permission.is_empty() {
        has_access &= request
            .any_permission
            .iter()
            .any(|p| actor.permissions.contains(p));
    }

    if let Some(min_role) = request.min_role {
        has_access &= actor.role.at_least(min_role);
    }

    has_access
}

/// 로드 상태를 포함한 판정
///
/// 협력자 실패(`Failed`)는 허용으로 바뀌지 않습니다.
pub fn evaluate_capability(
    request: &CapabilityRequest,
    actor: &Loadable<ActorPermissions>,
) -> CapabilityDecision {
    match actor {
        Loadable::Loading => CapabilityDecision::Indeterminate,
        Loadable::Loaded(actor) => CapabilityDecision::from_bool(evaluate(request, actor)),
        Loadable::Failed(_) => CapabilityDecision::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_foundation::AppRole;

    fn actor(role: AppRole, permissions: &[&str]) -> ActorPermissions {
        ActorPermissions::new(role, permissions.iter().copied())
    }

    #[test]
    fn test_empty_request_grants() {
        assert!(evaluate(&CapabilityRequest::new(), &actor(AppRole::Viewer, &[])));
    }

    #[test]
    fn test_permission_and_min_role_conjunction() {
        let request = CapabilityRequest::new().permission("x").min_role(AppRole::Admin);

        assert!(evaluate(&request, &actor(AppRole::Admin, &["x"])));
        assert!(evaluate(&request, &actor(AppRole::Owner, &["x"])));
        assert!(!evaluate(&request, &actor(AppRole::Member, &["x"])));
        assert!(!evaluate(&request, &actor(AppRole::Owner, &["y"])));
    }

    #[test]
    fn test_any_permission() {
        let request = CapabilityRequest::new().any_of(["a", "b"]);

        assert!(evaluate(&request, &actor(AppRole::Viewer, &["a"])));
        assert!(evaluate(&request, &actor(AppRole::Viewer, &["b", "c"])));
        assert!(!evaluate(&request, &actor(AppRole::Owner, &["c"])));
        assert!(!evaluate(&request, &actor(AppRole::Owner, &[])));
    }

    #[test]
    fn test_all_permissions_and_roles() {
        let member = actor(AppRole::Member, &["projects.edit"]);

        let both = CapabilityRequest::new().all_of(["projects.edit", "projects.delete"]);
        assert!(!evaluate(&both, &member));
        assert!(evaluate(&CapabilityRequest::new().min_role(AppRole::Member), &member));
        assert!(!evaluate(&CapabilityRequest::new().min_role(AppRole::Admin), &member));
    }

    #[test]
    fn test_every_clause_is_required() {
        let request = CapabilityRequest::new()
            .permission("p")
            .all_of(["a1", "a2"])
            .any_of(["o1", "o2"])
            .min_role(AppRole::Member);

        assert!(evaluate(&request, &actor(AppRole::Member, &["p", "a1", "a2", "o2"])));
        assert!(!evaluate(&request, &actor(AppRole::Member, &["a1", "a2", "o2"])));
        assert!(!evaluate(&request, &actor(AppRole::Member, &["p", "a1", "o2"])));
        assert!(!evaluate(&request, &actor(AppRole::Member, &["p", "a1", "a2"])));
        assert!(!evaluate(&request, &actor(AppRole::Viewer, &["p", "a1", "a2", "o1"])));
    }

    #[test]
    fn test_loading_is_never_granted() {
        let requests = [
            CapabilityRequest::new(),
            CapabilityRequest::new().permission("x"),
            CapabilityRequest::new().min_role(AppRole::Viewer),
        ];
        for request in &requests {
            assert_eq!(
                evaluate_capability(request, &Loadable::Loading),
                CapabilityDecision::Indeterminate
            );
            assert_eq!(
                evaluate_capability(request, &Loadable::Failed("offline".into())),
                CapabilityDecision::Denied
            );
        }
    }
}
