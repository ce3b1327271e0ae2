//! WorkspaceSession 통합 테스트 - 메모리 Provider로 비동기 로드 검증
//!
//! `cargo test -p atelier-core --test session_test -- --nocapture`

use async_trait::async_trait;
use atelier_core::{
    GuardOutcome, InMemoryActorPermissions, InMemoryEnablements, InMemoryModuleCatalog,
    WorkspaceSession,
};
use atelier_foundation::{
    module_slugs, permission_names, ActorPermissionProvider, ActorPermissions, AppRole,
    AtelierConfig, CapabilityDecision, CapabilityRequest, Discipline, DisciplineConfig,
    FeatureOverrides, SubNavItem, TermKey, ViewKind, ViewOverride, ViewOverrides,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use uuid::Uuid;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Fixture {
    actor_id: Uuid,
    catalog: Arc<InMemoryModuleCatalog>,
    enablements: Arc<InMemoryEnablements>,
    actors: Arc<InMemoryActorPermissions>,
}

impl Fixture {
    fn new() -> Self {
        init_tracing();
        Self {
            actor_id: Uuid::new_v4(),
            catalog: Arc::new(InMemoryModuleCatalog::builtin()),
            enablements: Arc::new(InMemoryEnablements::new()),
            actors: Arc::new(InMemoryActorPermissions::new()),
        }
    }

    fn workspace(&self, role: AppRole, enabled: &[&str]) -> Uuid {
        let workspace_id = Uuid::new_v4();
        self.actors.assign_role(self.actor_id, workspace_id, role);
        for slug in enabled {
            let module = self.catalog.get(slug).expect("builtin module");
            self.enablements.enable(workspace_id, &module);
        }
        workspace_id
    }

    fn session(&self, config: AtelierConfig) -> WorkspaceSession {
        WorkspaceSession::builder(self.actor_id)
            .modules(self.catalog.clone())
            .enablements(self.enablements.clone())
            .actors(self.actors.clone())
            .config(config)
            .build()
            .expect("all providers set")
    }
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_requires_providers() {
    let result = WorkspaceSession::builder(Uuid::new_v4())
        .modules(Arc::new(InMemoryModuleCatalog::builtin()))
        .build();
    assert!(result.is_err());
}

// ============================================================================
// Workspace switch
// ============================================================================

#[tokio::test]
async fn test_first_load_never_redirects() {
    let fx = Fixture::new();
    let workspace = fx.workspace(AppRole::Member, &[]);
    let session = fx.session(AtelierConfig::new());

    let outcome = session
        .switch_workspace(workspace, None, "/campaigns")
        .await;

    assert_eq!(outcome, GuardOutcome::Idle);
    assert!(!session.is_module_enabled(module_slugs::CAMPAIGNS));
}

#[tokio::test]
async fn test_switch_to_workspace_without_module_redirects_home() {
    let fx = Fixture::new();
    let with_campaigns = fx.workspace(AppRole::Member, &[module_slugs::CAMPAIGNS]);
    let without_campaigns = fx.workspace(AppRole::Member, &[]);
    let session = fx.session(AtelierConfig::new());

    session
        .switch_workspace(with_campaigns, None, "/campaigns")
        .await;
    assert!(session.is_module_enabled(module_slugs::CAMPAIGNS));

    let outcome = session
        .switch_workspace(without_campaigns, None, "/campaigns/12")
        .await;
    assert_eq!(outcome, GuardOutcome::RedirectHome);
    assert_eq!(outcome.redirect_target(), Some("/"));

    // 한 번 검사한 뒤에는 다시 전환될 때까지 조용함
    assert_eq!(session.check_workspace_switch("/campaigns"), GuardOutcome::Idle);
}

#[tokio::test]
async fn test_switch_through_cleared_workspace_still_redirects() {
    let fx = Fixture::new();
    let with_campaigns = fx.workspace(AppRole::Member, &[module_slugs::CAMPAIGNS]);
    let without_campaigns = fx.workspace(AppRole::Member, &[]);
    let session = fx.session(AtelierConfig::new());

    session
        .switch_workspace(with_campaigns, None, "/campaigns")
        .await;
    session.clear_workspace();
    assert_eq!(session.check_workspace_switch("/campaigns"), GuardOutcome::Idle);

    let outcome = session
        .switch_workspace(without_campaigns, None, "/campaigns")
        .await;
    assert_eq!(outcome, GuardOutcome::RedirectHome);
}

#[tokio::test]
async fn test_switch_keeps_enabled_and_core_paths() {
    let fx = Fixture::new();
    let a = fx.workspace(AppRole::Member, &[]);
    let b = fx.workspace(AppRole::Member, &[module_slugs::CAMPAIGNS]);
    let session = fx.session(AtelierConfig::new());

    session.switch_workspace(a, None, "/crm").await;
    assert_eq!(
        session.switch_workspace(b, None, "/campaigns").await,
        GuardOutcome::Allowed
    );
    assert_eq!(session.switch_workspace(a, None, "/crm").await, GuardOutcome::Allowed);
    assert_eq!(session.switch_workspace(b, None, "/settings").await, GuardOutcome::Idle);
    assert_eq!(session.switch_workspace(a, None, "/profile").await, GuardOutcome::Idle);
}

#[tokio::test]
async fn test_refresh_enablements_after_toggle() {
    let fx = Fixture::new();
    let workspace = fx.workspace(AppRole::Admin, &[]);
    let session = fx.session(AtelierConfig::new());
    session.switch_workspace(workspace, None, "/").await;
    assert!(!session.is_module_enabled(module_slugs::TENDERS));

    let tenders = fx.catalog.get(module_slugs::TENDERS).unwrap();
    fx.enablements.enable(workspace, &tenders);
    session.refresh_enablements().await;
    assert!(session.is_module_enabled(module_slugs::TENDERS));

    fx.enablements.disable(workspace, &tenders);
    session.refresh_enablements().await;
    assert!(!session.is_module_enabled(module_slugs::TENDERS));
}

#[tokio::test]
async fn test_enabled_modules_include_core() {
    let fx = Fixture::new();
    let workspace = fx.workspace(AppRole::Member, &[module_slugs::MESSAGING]);
    let session = fx.session(AtelierConfig::new());
    assert!(session.enabled_modules().is_empty());

    session.switch_workspace(workspace, None, "/").await;
    let slugs: Vec<String> = session
        .enabled_modules()
        .into_iter()
        .map(|m| m.slug)
        .collect();

    for slug in [
        module_slugs::DASHBOARD,
        module_slugs::SETTINGS,
        module_slugs::CRM,
        module_slugs::PROJECTS,
        module_slugs::MESSAGING,
    ] {
        assert!(slugs.iter().any(|s| s == slug), "missing {}", slug);
    }
    assert!(!slugs.iter().any(|s| s == module_slugs::INVOICING));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_catalog_failure_disables_everything() {
    let fx = Fixture::new();
    fx.catalog.set_unavailable(true);
    let a = fx.workspace(AppRole::Owner, &[]);
    let b = fx.workspace(AppRole::Owner, &[]);
    let session = fx.session(AtelierConfig::new());

    session.switch_workspace(a, None, "/").await;
    assert!(!session.is_module_enabled(module_slugs::CRM));
    assert!(!session.modules_ready());

    // 카탈로그가 없으면 검사를 미룸
    let outcome = session.switch_workspace(b, None, "/campaigns").await;
    assert_eq!(outcome, GuardOutcome::Pending);

    // 복구 후 다음 전환에서 다시 로드
    fx.catalog.set_unavailable(false);
    session.switch_workspace(a, None, "/").await;
    assert!(session.modules_ready());
    assert!(session.is_module_enabled(module_slugs::CRM));
}

#[tokio::test]
async fn test_missing_membership_grants_nothing() {
    let fx = Fixture::new();
    let workspace = fx.workspace(AppRole::Owner, &[]);
    fx.actors.revoke(fx.actor_id, workspace);
    let session = fx.session(AtelierConfig::new());

    session.switch_workspace(workspace, None, "/").await;

    assert!(matches!(
        session.actor(),
        atelier_foundation::Loadable::Failed(_)
    ));
    assert_eq!(
        session.evaluate_capability(&CapabilityRequest::new()),
        CapabilityDecision::Denied
    );
}

// ============================================================================
// Capabilities
// ============================================================================

struct GatedActors {
    inner: InMemoryActorPermissions,
    gate: Arc<Notify>,
}

#[async_trait]
impl ActorPermissionProvider for GatedActors {
    async fn resolve(
        &self,
        actor_id: Uuid,
        workspace_id: Uuid,
    ) -> atelier_foundation::Result<ActorPermissions> {
        self.gate.notified().await;
        self.inner.resolve(actor_id, workspace_id).await
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_capability_indeterminate_while_loading() -> anyhow::Result<()> {
    init_tracing();
    let actor_id = Uuid::new_v4();
    let workspace = Uuid::new_v4();
    let gate = Arc::new(Notify::new());

    let inner = InMemoryActorPermissions::new();
    inner.assign_role(actor_id, workspace, AppRole::Owner);

    let session = Arc::new(
        WorkspaceSession::builder(actor_id)
            .modules(Arc::new(InMemoryModuleCatalog::builtin()))
            .enablements(Arc::new(InMemoryEnablements::new()))
            .actors(Arc::new(GatedActors {
                inner,
                gate: gate.clone(),
            }))
            .build()?,
    );

    let loading = tokio::spawn({
        let session = session.clone();
        async move { session.switch_workspace(workspace, None, "/").await }
    });

    tokio::time::timeout(Duration::from_secs(5), async {
        while session.workspace_id() != Some(workspace) {
            tokio::task::yield_now().await;
        }
    })
    .await?;

    let request = CapabilityRequest::new().min_role(AppRole::Viewer);
    assert_eq!(
        session.evaluate_capability(&request),
        CapabilityDecision::Indeterminate
    );

    gate.notify_one();
    loading.await?;

    assert_eq!(session.evaluate_capability(&request), CapabilityDecision::Granted);
    Ok(())
}

#[tokio::test]
async fn test_refresh_permissions_after_role_change() {
    let fx = Fixture::new();
    let workspace = fx.workspace(AppRole::Viewer, &[]);
    let session = fx.session(AtelierConfig::new());
    let request = CapabilityRequest::new().permission(permission_names::PROJECTS_EDIT);

    session.switch_workspace(workspace, None, "/").await;
    assert_eq!(session.evaluate_capability(&request), CapabilityDecision::Denied);

    fx.actors.assign_role(fx.actor_id, workspace, AppRole::Member);
    session.refresh_permissions().await;
    assert_eq!(session.evaluate_capability(&request), CapabilityDecision::Granted);
}

#[tokio::test]
async fn test_named_capabilities_from_config() {
    let fx = Fixture::new();
    let workspace = fx.workspace(AppRole::Member, &[]);
    let config = AtelierConfig::new()
        .named_capability(
            "project.edit",
            CapabilityRequest::new().permission(permission_names::PROJECTS_EDIT),
        )
        .named_capability(
            "invoice.send",
            CapabilityRequest::new()
                .permission(permission_names::INVOICING_SEND)
                .min_role(AppRole::Admin),
        );
    let session = fx.session(config);

    assert_eq!(
        session.evaluate_named("project.edit"),
        CapabilityDecision::Indeterminate
    );

    session.switch_workspace(workspace, None, "/").await;
    assert_eq!(session.evaluate_named("project.edit"), CapabilityDecision::Granted);
    assert_eq!(session.evaluate_named("invoice.send"), CapabilityDecision::Denied);
    assert_eq!(session.evaluate_named("unknown"), CapabilityDecision::Denied);
}

// ============================================================================
// Discipline-driven views
// ============================================================================

#[tokio::test]
async fn test_discipline_drives_terms_views_and_features() {
    let fx = Fixture::new();
    let workspace = fx.workspace(AppRole::Member, &[]);
    let config = AtelierConfig::new().discipline(
        Discipline::Scenography,
        DisciplineConfig {
            views: ViewOverrides {
                tabs: vec![ViewOverride::new("memoire").visible(true).order(5)],
                ..Default::default()
            },
            features: FeatureOverrides {
                tenders: Some(false),
                ..Default::default()
            },
        },
    );
    let session = fx.session(config);

    // 워크스페이스 선택 전에는 기본 분야
    assert_eq!(session.discipline(), Discipline::Architecture);
    assert_eq!(
        session.term(TermKey::Project),
        Discipline::Architecture.terminology().get(TermKey::Project)
    );

    session
        .switch_workspace(workspace, Some(Discipline::Scenography), "/projects")
        .await;

    assert_eq!(session.discipline(), Discipline::Scenography);
    assert_eq!(session.terminology(), Discipline::Scenography.terminology());

    let tabs: Vec<&str> = session.tabs().iter().map(|t| t.key).collect();
    assert_eq!(tabs, vec!["synthese", "equipe", "memoire"]);
    assert!(session.is_view_visible(ViewKind::Tab, "memoire"));
    assert!(session.component_for(ViewKind::Tab, "memoire").is_some());
    assert!(session.component_for(ViewKind::Tab, "lots").is_none());

    let features = session.features();
    assert!(!features.tenders);
    assert!(features.moodboards);

    session.clear_workspace();
    assert_eq!(session.workspace_id(), None);
    assert_eq!(session.discipline(), Discipline::Architecture);
}

#[tokio::test]
async fn test_sub_nav_follows_enablements() {
    let fx = Fixture::new();
    let workspace = fx.workspace(AppRole::Member, &[module_slugs::COMMERCIAL]);
    let session = fx.session(AtelierConfig::new());
    let items = vec![
        SubNavItem::new("quotes", "Devis", "/commercial/quotes"),
        SubNavItem::new("invoices", "Factures", "/commercial/invoices"),
    ];

    session.switch_workspace(workspace, None, "/commercial").await;
    let keys: Vec<String> = session
        .filter_sub_nav(module_slugs::COMMERCIAL, &items)
        .into_iter()
        .map(|i| i.key)
        .collect();
    assert_eq!(keys, vec!["quotes".to_string()]);
    assert!(!session.is_sub_nav_visible(module_slugs::COMMERCIAL, "invoices"));

    let invoicing = fx.catalog.get(module_slugs::INVOICING).unwrap();
    fx.enablements.enable(workspace, &invoicing);
    session.refresh_enablements().await;
    assert!(session.is_sub_nav_visible(module_slugs::COMMERCIAL, "invoices"));
}
