//! Workspace session
//!
//! 워크스페이스/세션 단위 상태를 명시적으로 들고 있는 facade입니다.
//! 화면 계층은 전역 컨텍스트 대신 이 객체를 참조로 전달받아 조회합니다.
//!
//! ```text
//! switch_workspace(id) ──► state = Loading ──► guard.observe(id)
//!                                │
//!                 tokio::join!(modules, enablements, actor)
//!                                │
//!                       state = Loaded / Failed ──► guard.check(path)
//! ```
//!
//! 상태 갱신은 짧은 lock 안에서만 일어나고 await 중에는 lock을 잡지 않습니다.
//! 로드가 끝났을 때 현재 워크스페이스가 바뀌어 있으면 결과를 버립니다.

use crate::capability::{evaluate_capability, evaluate as evaluate_request};
use crate::entitlement::{GuardOutcome, ModuleGate, WorkspaceSwitchGuard};
use crate::subnav;
use crate::terminology::resolve_terminology;
use crate::view::ViewResolver;
use atelier_foundation::{
    ActorPermissionProvider, ActorPermissions, AtelierConfig, CapabilityDecision,
    CapabilityRequest, ComponentRef, Discipline, DisciplineFeatures, Error, Loadable, Module,
    ModuleCatalogProvider, ModulePathTable, Result, SubNavItem, SubNavRequirements, TermKey,
    Terminology, ViewDef, ViewKind, WorkspaceEnablementProvider, WorkspaceModuleEnablement,
};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

// ============================================================================
// SessionState
// ============================================================================

#[derive(Debug, Default)]
struct SessionState {
    workspace_id: Option<Uuid>,
    discipline: Option<Discipline>,
    modules: Loadable<Vec<Module>>,
    enablements: Loadable<Vec<WorkspaceModuleEnablement>>,
    actor: Loadable<ActorPermissions>,
}

// ============================================================================
// WorkspaceSession
// ============================================================================

pub struct WorkspaceSession {
    actor_id: Uuid,
    modules: Arc<dyn ModuleCatalogProvider>,
    enablements: Arc<dyn WorkspaceEnablementProvider>,
    actors: Arc<dyn ActorPermissionProvider>,
    config: AtelierConfig,
    views: ViewResolver,
    sub_nav: SubNavRequirements,
    state: RwLock<SessionState>,
    guard: Mutex<WorkspaceSwitchGuard>,
}

impl WorkspaceSession {
    pub fn builder(actor_id: Uuid) -> WorkspaceSessionBuilder {
        WorkspaceSessionBuilder::new(actor_id)
    }

    pub fn actor_id(&self) -> Uuid {
        self.actor_id
    }

    pub fn workspace_id(&self) -> Option<Uuid> {
        self.state.read().workspace_id
    }

    pub fn config(&self) -> &AtelierConfig {
        &self.config
    }

    // ========================================================================
    // Workspace lifecycle
    // ========================================================================

    /// 워크스페이스 선택/전환
    ///
    /// 데이터를 다시 로드한 뒤 현재 경로에 대해 guard를 검사한 결과를 돌려줍니다.
    pub async fn switch_workspace(
        &self,
        workspace_id: Uuid,
        discipline: Option<Discipline>,
        current_path: &str,
    ) -> GuardOutcome {
        {
            let mut state = self.state.write();
            state.workspace_id = Some(workspace_id);
            state.discipline = discipline;
            state.enablements = Loadable::Loading;
            state.actor = Loadable::Loading;
        }
        self.guard.lock().observe(Some(workspace_id));

        self.load(workspace_id).await;
        self.check_workspace_switch(current_path)
    }

    /// 워크스페이스 해제 (로그아웃 등)
    pub fn clear_workspace(&self) {
        {
            let mut state = self.state.write();
            state.workspace_id = None;
            state.discipline = None;
            state.enablements = Loadable::Loading;
            state.actor = Loadable::Loading;
        }
        self.guard.lock().observe(None);
    }

    /// 모듈 활성화/비활성화 후 레코드 다시 로드
    pub async fn refresh_enablements(&self) {
        let Some(workspace_id) = self.workspace_id() else {
            return;
        };
        let result = self.enablements.list(workspace_id).await;
        self.store(workspace_id, |state| {
            state.enablements = loadable("workspace enablements", result)
        });
    }

    /// 역할 변경 후 권한 다시 로드
    pub async fn refresh_permissions(&self) {
        let Some(workspace_id) = self.workspace_id() else {
            return;
        };
        let result = self.actors.resolve(self.actor_id, workspace_id).await;
        self.store(workspace_id, |state| state.actor = loadable("actor permissions", result));
    }

    async fn load(&self, workspace_id: Uuid) {
        // 카탈로그는 전역이므로 한 번만 로드 (실패 시 재시도)
        let need_modules = !self.state.read().modules.is_loaded();

        let modules = async {
            if need_modules {
                Some(self.modules.list().await)
            } else {
                None
            }
        };

        let (modules, enablements, actor) = tokio::join!(
            modules,
            self.enablements.list(workspace_id),
            self.actors.resolve(self.actor_id, workspace_id),
        );

        self.store(workspace_id, |state| {
            if let Some(modules) = modules {
                state.modules = loadable("module catalog", modules);
            }
            state.enablements = loadable("workspace enablements", enablements);
            state.actor = loadable("actor permissions", actor);
        });
    }

    fn store(&self, workspace_id: Uuid, apply: impl FnOnce(&mut SessionState)) {
        let mut state = self.state.write();
        if state.workspace_id != Some(workspace_id) {
            debug!(workspace = %workspace_id, "Discarding stale workspace load");
            return;
        }
        apply(&mut state);
    }

    /// 워크스페이스 전환 후 현재 경로 검사
    ///
    /// 데이터가 아직 없으면 `Pending`이며, 로드 후 다시 호출하면 검사합니다.
    pub fn check_workspace_switch(&self, current_path: &str) -> GuardOutcome {
        let state = self.state.read();
        self.guard.lock().check(
            current_path,
            state.modules.loaded().map(Vec::as_slice),
            state.enablements.loaded().map(Vec::as_slice),
        )
    }

    // ========================================================================
    // Terminology / features
    // ========================================================================

    /// 현재 분야 (없으면 기본 분야)
    pub fn discipline(&self) -> Discipline {
        Discipline::or_default(self.state.read().discipline)
    }

    pub fn terminology(&self) -> &'static Terminology {
        resolve_terminology(self.state.read().discipline)
    }

    pub fn term(&self, key: TermKey) -> &'static str {
        self.terminology().get(key)
    }

    pub fn features(&self) -> DisciplineFeatures {
        self.config.features_for(self.discipline())
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn views(&self, kind: ViewKind) -> Vec<ViewDef> {
        self.views.resolve(kind, Some(self.discipline()))
    }

    pub fn tabs(&self) -> Vec<ViewDef> {
        self.views(ViewKind::Tab)
    }

    pub fn blocks(&self) -> Vec<ViewDef> {
        self.views(ViewKind::SynthesisBlock)
    }

    pub fn sections(&self) -> Vec<ViewDef> {
        self.views(ViewKind::Section)
    }

    pub fn is_view_visible(&self, kind: ViewKind, key: &str) -> bool {
        self.views.is_visible(kind, key, Some(self.discipline()))
    }

    pub fn component_for(&self, kind: ViewKind, key: &str) -> Option<ComponentRef> {
        self.views.component_for(kind, key, Some(self.discipline()))
    }

    pub fn view_resolver(&self) -> &ViewResolver {
        &self.views
    }

    // ========================================================================
    // Modules
    // ========================================================================

    /// 모듈 활성 여부 (데이터가 없으면 false)
    pub fn is_module_enabled(&self, slug: &str) -> bool {
        self.with_gate(|gate| gate.is_some_and(|g| g.is_enabled(slug)))
    }

    /// 모듈 데이터가 모두 로드되었는지
    pub fn modules_ready(&self) -> bool {
        self.with_gate(|gate| gate.is_some())
    }

    pub fn enabled_modules(&self) -> Vec<Module> {
        self.with_gate(|gate| {
            gate.map(|g| g.enabled_modules().into_iter().cloned().collect())
                .unwrap_or_default()
        })
    }

    pub fn filter_sub_nav(&self, module_slug: &str, items: &[SubNavItem]) -> Vec<SubNavItem> {
        self.with_gate(|gate| {
            subnav::filter_sub_nav(module_slug, items, &self.sub_nav, |slug| {
                gate.is_some_and(|g| g.is_enabled(slug))
            })
        })
    }

    pub fn is_sub_nav_visible(&self, module_slug: &str, item_key: &str) -> bool {
        self.with_gate(|gate| {
            subnav::is_sub_nav_visible(module_slug, item_key, &self.sub_nav, |slug| {
                gate.is_some_and(|g| g.is_enabled(slug))
            })
        })
    }

    fn with_gate<R>(&self, f: impl FnOnce(Option<ModuleGate<'_>>) -> R) -> R {
        let state = self.state.read();
        let gate = match (state.modules.loaded(), state.enablements.loaded()) {
            (Some(modules), Some(enablements)) => Some(ModuleGate::new(modules, enablements)),
            _ => None,
        };
        f(gate)
    }

    // ========================================================================
    // Capabilities
    // ========================================================================

    pub fn actor(&self) -> Loadable<ActorPermissions> {
        self.state.read().actor.clone()
    }

    pub fn evaluate_capability(&self, request: &CapabilityRequest) -> CapabilityDecision {
        evaluate_capability(request, &self.state.read().actor)
    }

    /// 설정에 이름으로 선언된 조건 평가 (모르는 이름은 거부)
    pub fn evaluate_named(&self, name: &str) -> CapabilityDecision {
        let state = self.state.read();
        let actor = match &state.actor {
            Loadable::Loading => return CapabilityDecision::Indeterminate,
            Loadable::Failed(_) => return CapabilityDecision::Denied,
            Loadable::Loaded(actor) => actor,
        };

        match self.config.capability(name) {
            Some(request) => CapabilityDecision::from_bool(evaluate_request(request, actor)),
            None => {
                warn!(capability = name, "Unknown named capability, denying");
                CapabilityDecision::Denied
            }
        }
    }
}

fn loadable<T>(what: &str, result: Result<T>) -> Loadable<T> {
    if let Err(e) = &result {
        warn!("Failed to load {}: {}", what, e);
    }
    result.into()
}

// ============================================================================
// Builder
// ============================================================================

pub struct WorkspaceSessionBuilder {
    actor_id: Uuid,
    modules: Option<Arc<dyn ModuleCatalogProvider>>,
    enablements: Option<Arc<dyn WorkspaceEnablementProvider>>,
    actors: Option<Arc<dyn ActorPermissionProvider>>,
    config: AtelierConfig,
    paths: ModulePathTable,
    sub_nav: SubNavRequirements,
}

impl WorkspaceSessionBuilder {
    pub fn new(actor_id: Uuid) -> Self {
        Self {
            actor_id,
            modules: None,
            enablements: None,
            actors: None,
            config: AtelierConfig::new(),
            paths: ModulePathTable::builtin(),
            sub_nav: SubNavRequirements::builtin(),
        }
    }

    pub fn modules(mut self, provider: Arc<dyn ModuleCatalogProvider>) -> Self {
        self.modules = Some(provider);
        self
    }

    pub fn enablements(mut self, provider: Arc<dyn WorkspaceEnablementProvider>) -> Self {
        self.enablements = Some(provider);
        self
    }

    pub fn actors(mut self, provider: Arc<dyn ActorPermissionProvider>) -> Self {
        self.actors = Some(provider);
        self
    }

    pub fn config(mut self, config: AtelierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn paths(mut self, paths: ModulePathTable) -> Self {
        self.paths = paths;
        self
    }

    pub fn sub_nav(mut self, requirements: SubNavRequirements) -> Self {
        self.sub_nav = requirements;
        self
    }

    pub fn build(self) -> Result<WorkspaceSession> {
        let modules = self
            .modules
            .ok_or_else(|| Error::Config("module catalog provider is required".to_string()))?;
        let enablements = self
            .enablements
            .ok_or_else(|| Error::Config("enablement provider is required".to_string()))?;
        let actors = self
            .actors
            .ok_or_else(|| Error::Config("actor permission provider is required".to_string()))?;

        Ok(WorkspaceSession {
            actor_id: self.actor_id,
            modules,
            enablements,
            actors,
            views: ViewResolver::from_config(&self.config),
            config: self.config,
            sub_nav: self.sub_nav,
            state: RwLock::new(SessionState::default()),
            guard: Mutex::new(WorkspaceSwitchGuard::with_paths(self.paths)),
        })
    }
}
