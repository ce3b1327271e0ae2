//! Resolver / gate 통합 테스트
//!
//! `cargo test -p atelier-core --test resolvers_test`

use atelier_core::{
    evaluate, evaluate_capability, filter_sub_nav, is_module_enabled, module_for_path,
    resolve_terminology, GuardOutcome, ViewResolver, WorkspaceSwitchGuard,
};
use atelier_foundation::view::definitions;
use atelier_foundation::{
    module_slugs, permission_names, ActorPermissions, AppRole, CapabilityDecision,
    CapabilityRequest, Discipline, Loadable, Module, ModulePathTable, SubNavItem,
    SubNavRequirements, TermKey, ViewKind, WorkspaceModuleEnablement,
};
use uuid::Uuid;

fn keys(defs: &[atelier_foundation::ViewDef]) -> Vec<&'static str> {
    defs.iter().map(|d| d.key).collect()
}

fn scenario_b_modules() -> Vec<Module> {
    vec![
        Module::new(module_slugs::CRM, "CRM").core(),
        Module::new(module_slugs::CAMPAIGNS, "Campagnes"),
    ]
}

// ============================================================================
// Terminology
// ============================================================================

#[test]
fn test_terminology_is_total_for_every_discipline() {
    for discipline in Discipline::ALL {
        let terms = resolve_terminology(Some(discipline));
        for key in TermKey::ALL {
            assert!(
                !terms.get(key).is_empty(),
                "{:?} is missing {:?}",
                discipline,
                key
            );
        }
    }
}

#[test]
fn test_terminology_falls_back_to_architecture() {
    assert_eq!(
        resolve_terminology(None),
        resolve_terminology(Some(Discipline::Architecture))
    );
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn test_resolved_views_are_exactly_the_visible_definitions() {
    let resolver = ViewResolver::new();
    let kinds = [ViewKind::Tab, ViewKind::SynthesisBlock, ViewKind::Section];

    for discipline in Discipline::ALL {
        for kind in kinds {
            let resolved = resolver.resolve(kind, Some(discipline));
            for def in definitions(discipline, kind) {
                let present = resolved.iter().any(|r| r.key == def.key);
                assert_eq!(present, def.visible, "{:?}/{:?}/{}", discipline, kind, def.key);
            }
        }
    }
}

#[test]
fn test_equal_order_keeps_declaration_order() {
    // planning과 documents는 둘 다 order 4
    let raw = definitions(Discipline::Architecture, ViewKind::Tab);
    let raw_planning = raw.iter().position(|d| d.key == "planning").unwrap();
    let raw_documents = raw.iter().position(|d| d.key == "documents").unwrap();
    assert_eq!(raw[raw_planning].order, raw[raw_documents].order);

    let resolved = ViewResolver::new().tabs(Some(Discipline::Architecture));
    let planning = resolved.iter().position(|d| d.key == "planning").unwrap();
    let documents = resolved.iter().position(|d| d.key == "documents").unwrap();

    assert_eq!(planning < documents, raw_planning < raw_documents);
}

#[test]
fn test_scenario_scenography_tabs() {
    let tabs = ViewResolver::new().tabs(Some(Discipline::Scenography));
    assert_eq!(keys(&tabs), vec!["synthese", "equipe"]);
}

// ============================================================================
// Modules
// ============================================================================

#[test]
fn test_core_module_enabled_without_rows() {
    for module in atelier_foundation::default_modules().iter().filter(|m| m.is_core) {
        assert!(is_module_enabled(
            &module.slug,
            &atelier_foundation::default_modules(),
            &[]
        ));
    }
}

#[test]
fn test_non_core_module_follows_enablement_row() {
    let workspace = Uuid::new_v4();
    let modules = scenario_b_modules();
    let campaigns = modules[1].id;

    let mut rows = vec![WorkspaceModuleEnablement::new(workspace, campaigns)];
    assert!(is_module_enabled(module_slugs::CAMPAIGNS, &modules, &rows));

    rows.clear();
    assert!(!is_module_enabled(module_slugs::CAMPAIGNS, &modules, &rows));
}

#[test]
fn test_unknown_module_is_disabled() {
    let modules = scenario_b_modules();
    assert!(!is_module_enabled("unknown", &modules, &[]));
}

#[test]
fn test_module_for_path() {
    let modules = scenario_b_modules();
    let table = ModulePathTable::builtin();

    let module = module_for_path("/campaigns/42", &table, &modules).unwrap();
    assert_eq!(module.slug, module_slugs::CAMPAIGNS);
    assert!(module_for_path("/profile", &table, &modules).is_none());
}

// ============================================================================
// Workspace switch guard
// ============================================================================

#[test]
fn test_guard_checks_once_for_null_a_a_b() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let modules = scenario_b_modules();
    let mut guard = WorkspaceSwitchGuard::new();

    let evaluated: usize = [None, Some(a), Some(a), Some(b)]
        .into_iter()
        .map(|workspace| {
            guard.observe(workspace);
            guard.check("/campaigns", Some(modules.as_slice()), Some(&[][..]))
        })
        .filter(GuardOutcome::evaluated)
        .count();

    assert_eq!(evaluated, 1);
}

#[test]
fn test_scenario_disabled_module_redirects_on_switch() {
    let modules = scenario_b_modules();
    let mut guard = WorkspaceSwitchGuard::new();
    guard.observe(Some(Uuid::new_v4()));
    guard.observe(Some(Uuid::new_v4()));

    let outcome = guard.check("/campaigns", Some(modules.as_slice()), Some(&[][..]));
    assert_eq!(outcome, GuardOutcome::RedirectHome);
    assert_eq!(outcome.redirect_target(), Some("/"));
}

#[test]
fn test_scenario_core_module_never_redirects() {
    let modules = scenario_b_modules();
    let workspace = Uuid::new_v4();
    let crm = modules[0].id;
    let enablement_states = [vec![], vec![WorkspaceModuleEnablement::new(workspace, crm)]];

    for rows in &enablement_states {
        let mut guard = WorkspaceSwitchGuard::new();
        guard.observe(Some(Uuid::new_v4()));
        guard.observe(Some(workspace));

        let outcome = guard.check("/crm", Some(modules.as_slice()), Some(rows.as_slice()));
        assert_ne!(outcome, GuardOutcome::RedirectHome);
    }
}

// ============================================================================
// Capabilities
// ============================================================================

fn actor(role: AppRole, permissions: &[&str]) -> ActorPermissions {
    ActorPermissions::new(role, permissions.iter().copied())
}

#[test]
fn test_permission_and_role_are_conjunctive() {
    let request = CapabilityRequest::new()
        .permission("x")
        .min_role(AppRole::Admin);

    for role in AppRole::ALL {
        for permissions in [&["x"][..], &[][..]] {
            let actor = actor(role, permissions);
            let expected = actor.has("x") && role.rank() >= AppRole::Admin.rank();
            assert_eq!(evaluate(&request, &actor), expected, "{:?} {:?}", role, permissions);
        }
    }
}

#[test]
fn test_any_permission_needs_intersection() {
    let request = CapabilityRequest::new().any_of(["a", "b"]);

    assert!(evaluate(&request, &actor(AppRole::Viewer, &["a"])));
    assert!(evaluate(&request, &actor(AppRole::Viewer, &["b", "c"])));
    assert!(!evaluate(&request, &actor(AppRole::Owner, &["c"])));
    assert!(!evaluate(&request, &actor(AppRole::Owner, &[])));
}

#[test]
fn test_loading_actor_is_never_granted() {
    let requests = [
        CapabilityRequest::new(),
        CapabilityRequest::new().permission(permission_names::PROJECTS_VIEW),
        CapabilityRequest::new().min_role(AppRole::Viewer),
    ];

    for request in &requests {
        let decision = evaluate_capability(request, &Loadable::Loading);
        assert_eq!(decision, CapabilityDecision::Indeterminate);
        assert!(!decision.is_granted());
    }
}

#[test]
fn test_scenario_member_permissions() {
    let member = actor(AppRole::Member, &[permission_names::PROJECTS_EDIT]);

    let edit_and_delete = CapabilityRequest::new()
        .all_of([permission_names::PROJECTS_EDIT, permission_names::PROJECTS_DELETE]);
    assert!(!evaluate(&edit_and_delete, &member));
    assert!(evaluate(&CapabilityRequest::new().min_role(AppRole::Member), &member));
    assert!(!evaluate(&CapabilityRequest::new().min_role(AppRole::Admin), &member));
}

// ============================================================================
// Sub-navigation
// ============================================================================

#[test]
fn test_sub_nav_drops_items_of_disabled_modules_in_order() {
    let items = vec![
        SubNavItem::new("quotes", "Devis", "/commercial/quotes"),
        SubNavItem::new("invoices", "Factures", "/commercial/invoices"),
        SubNavItem::new("contracts", "Contrats", "/commercial/contracts"),
        SubNavItem::new("payment_reminders", "Relances", "/commercial/reminders"),
    ];
    let requirements = SubNavRequirements::builtin();

    let filtered = filter_sub_nav(module_slugs::COMMERCIAL, &items, &requirements, |_| false);
    let filtered_keys: Vec<&str> = filtered.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(filtered_keys, vec!["quotes", "contracts"]);

    let all = filter_sub_nav(module_slugs::COMMERCIAL, &items, &requirements, |_| true);
    assert_eq!(all, items);
}
