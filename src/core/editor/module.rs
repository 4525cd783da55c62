//=========================================================================
// Framework Editor Module
//=========================================================================
//
// Editor module lifecycle: registers the framework's editor extensions
// with an `EditorHost` on startup and removes them on shutdown.
//
// Startup order:
//   1. style set
//   2. menu / toolbar extensibility managers
//   3. graph-node factories, pin-connection factory
//   4. compilers (NpcBehavior, StateMachine)
//   5. behavior tasks (Wait, MoveTo, Restart, RandomBranch)
//   6. debugger category + categories-changed (when available)
//   7. asset-type actions
//
// Shutdown removes exactly what startup recorded, in reverse order.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::{
    asset_actions::{AssetEditor, NpcBehaviorAssetActions, StateMachineAssetActions},
    blueprint::{Blueprint, BlueprintKind},
    compiler::{BlueprintCompiler, GraphBlueprintCompiler},
    debugger::{CategoryState, StateMachineCategory},
    extensibility::ExtensibilityManager,
    factories::{NpcBehaviorGraphFactory, StateMachineGraphFactory, StateMachineGraphPinConnectionFactory},
    host::EditorHost,
    registry::RegistrationHandle,
    style::StyleSet,
    tasks::{MoveToTaskFactory, RandomBranchTaskFactory, RestartTaskFactory, WaitTaskFactory},
};

//=== ModuleError =========================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModuleError {
    #[error("module {0} is already started")]
    AlreadyStarted(&'static str),

    #[error("module {0} is not started")]
    NotStarted(&'static str),
}

//=== EditorModule ========================================================

pub trait EditorModule {
    fn name(&self) -> &'static str;

    fn startup(&mut self, host: &mut EditorHost) -> Result<(), ModuleError>;

    fn shutdown(&mut self, host: &mut EditorHost) -> Result<(), ModuleError>;

    fn is_started(&self) -> bool;
}

//=== FrameworkEditorModule ===============================================

/// Debugger category the framework registers.
pub const DEBUGGER_CATEGORY: &str = "UmbraFramework";

/// Handles recorded during startup. Compilers keep whatever entry they
/// displaced so shutdown can put it back.
#[derive(Default)]
struct Registrations {
    style: bool,
    node_factories: Vec<RegistrationHandle>,
    pin_factories: Vec<RegistrationHandle>,
    compilers: Vec<(BlueprintKind, Option<Box<dyn BlueprintCompiler>>)>,
    tasks: Vec<RegistrationHandle>,
    debugger_category: bool,
    asset_actions: Vec<RegistrationHandle>,
}

#[derive(Default)]
pub struct FrameworkEditorModule {
    registrations: Option<Registrations>,
    menu_extensibility: Option<ExtensibilityManager>,
    toolbar_extensibility: Option<ExtensibilityManager>,
}

impl FrameworkEditorModule {
    pub const NAME: &'static str = "UmbraFrameworkEditor";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_extensibility(&mut self) -> Option<&mut ExtensibilityManager> {
        self.menu_extensibility.as_mut()
    }

    pub fn toolbar_extensibility(&mut self) -> Option<&mut ExtensibilityManager> {
        self.toolbar_extensibility.as_mut()
    }

    //--- Asset Editors ----------------------------------------------------

    pub fn create_npc_editor(&self, blueprint: &Blueprint) -> AssetEditor {
        info!("Opening NPC behavior editor for {}", blueprint.name);
        AssetEditor::npc_behavior(blueprint)
    }

    pub fn create_state_machine_editor(&self, blueprint: &Blueprint) -> AssetEditor {
        info!("Opening state machine editor for {}", blueprint.name);
        AssetEditor::state_machine(blueprint)
    }

    //--- Startup Steps ----------------------------------------------------

    fn register_factories(host: &mut EditorHost, out: &mut Registrations) {
        out.node_factories.push(host.node_factories.register(Box::new(NpcBehaviorGraphFactory)));
        out.node_factories.push(host.node_factories.register(Box::new(StateMachineGraphFactory)));
        out.pin_factories
            .push(host.pin_factories.register(Box::new(StateMachineGraphPinConnectionFactory)));
    }

    fn register_compilers(host: &mut EditorHost, out: &mut Registrations) {
        for compiler in [GraphBlueprintCompiler::npc_behavior(), GraphBlueprintCompiler::state_machine()] {
            let kind = compiler.kind().clone();
            let displaced = host.compilers.register(kind.clone(), Box::new(compiler));
            out.compilers.push((kind, displaced));
        }
    }

    fn register_tasks(host: &mut EditorHost, out: &mut Registrations) {
        out.tasks.push(host.tasks.register(Box::new(WaitTaskFactory)));
        out.tasks.push(host.tasks.register(Box::new(MoveToTaskFactory)));
        out.tasks.push(host.tasks.register(Box::new(RestartTaskFactory)));
        out.tasks.push(host.tasks.register(Box::new(RandomBranchTaskFactory)));
    }

    fn register_debugger(host: &mut EditorHost, out: &mut Registrations) {
        let Some(debugger) = host.gameplay_debugger.as_mut() else {
            info!("No gameplay debugger, skipping {} category", DEBUGGER_CATEGORY);
            return;
        };

        out.debugger_category = debugger.register_category(
            DEBUGGER_CATEGORY,
            StateMachineCategory::make_instance,
            CategoryState::EnabledInGameAndSimulate,
        );
        debugger.notify_categories_changed();
    }

    fn register_asset_actions(host: &mut EditorHost, out: &mut Registrations) {
        out.asset_actions.push(host.asset_tools.register(Box::new(NpcBehaviorAssetActions)));
        out.asset_actions.push(host.asset_tools.register(Box::new(StateMachineAssetActions)));
    }
}

impl EditorModule for FrameworkEditorModule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn startup(&mut self, host: &mut EditorHost) -> Result<(), ModuleError> {
        if self.registrations.is_some() {
            return Err(ModuleError::AlreadyStarted(Self::NAME));
        }

        let mut out = Registrations::default();

        out.style = host.styles.register(StyleSet::framework());

        self.menu_extensibility = Some(ExtensibilityManager::new());
        self.toolbar_extensibility = Some(ExtensibilityManager::new());

        Self::register_factories(host, &mut out);
        Self::register_compilers(host, &mut out);
        Self::register_tasks(host, &mut out);
        Self::register_debugger(host, &mut out);
        Self::register_asset_actions(host, &mut out);

        self.registrations = Some(out);
        info!("{} started", Self::NAME);
        Ok(())
    }

    fn shutdown(&mut self, host: &mut EditorHost) -> Result<(), ModuleError> {
        let out = self.registrations.take().ok_or(ModuleError::NotStarted(Self::NAME))?;

        for handle in out.asset_actions {
            host.asset_tools.unregister(handle);
        }

        if out.debugger_category {
            match host.gameplay_debugger.as_mut() {
                Some(debugger) => {
                    debugger.unregister_category(DEBUGGER_CATEGORY);
                }
                None => warn!("Gameplay debugger went away before {} shutdown", Self::NAME),
            }
        }

        for handle in out.tasks {
            host.tasks.unregister(handle);
        }

        for (kind, displaced) in out.compilers {
            host.compilers.unregister(&kind);
            if let Some(previous) = displaced {
                host.compilers.register(kind, previous);
            }
        }

        for handle in out.pin_factories {
            host.pin_factories.unregister(handle);
        }
        for handle in out.node_factories {
            host.node_factories.unregister(handle);
        }

        self.menu_extensibility = None;
        self.toolbar_extensibility = None;

        if out.style {
            host.styles.unregister(StyleSet::FRAMEWORK);
        }

        info!("{} shut down", Self::NAME);
        Ok(())
    }

    fn is_started(&self) -> bool {
        self.registrations.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::editor::{
        blueprint::GeneratedClass,
        compiler::{CompileOptions, CompilerResultsLog},
        factories::GraphNode,
        EditorHostBuilder,
    };

    //--- Test Helpers -----------------------------------------------------

    struct ForeignCompiler;

    impl BlueprintCompiler for ForeignCompiler {
        fn name(&self) -> &str {
            "ForeignCompiler"
        }

        fn compile(
            &self,
            blueprint: &Blueprint,
            _: &CompileOptions,
            _: &mut CompilerResultsLog,
        ) -> Option<GeneratedClass> {
            Some(GeneratedClass {
                name: format!("Foreign{}", blueprint.name),
                parent_class: blueprint.parent_class.clone(),
                kind: blueprint.kind.clone(),
            })
        }
    }

    fn started(host: &mut EditorHost) -> FrameworkEditorModule {
        let mut module = FrameworkEditorModule::new();
        module.startup(host).unwrap();
        module
    }

    //=====================================================================
    // Startup
    //=====================================================================

    #[test]
    fn startup_registers_every_extension() {
        let mut host = EditorHost::default();
        let module = started(&mut host);

        assert!(module.is_started());
        assert!(host.styles.get(StyleSet::FRAMEWORK).is_some());
        assert_eq!(host.node_factories.len(), 2);
        assert_eq!(host.pin_factories.len(), 1);
        assert_eq!(host.compilers.len(), 2);
        assert_eq!(host.tasks.task_names(), vec!["Wait", "MoveTo", "Restart", "RandomBranch"]);
        assert_eq!(host.asset_tools.len(), 2);

        let debugger = host.gameplay_debugger.as_ref().unwrap();
        assert_eq!(
            debugger.category_state(DEBUGGER_CATEGORY),
            Some(CategoryState::EnabledInGameAndSimulate)
        );
        assert_eq!(debugger.change_notifications(), 1);
    }

    #[test]
    fn startup_without_debugger_skips_category() {
        let mut host = EditorHostBuilder::new().with_gameplay_debugger(false).build();
        let mut module = started(&mut host);

        assert!(host.gameplay_debugger.is_none());
        assert_eq!(host.compilers.len(), 2);

        module.shutdown(&mut host).unwrap();
        assert!(host.is_pristine());
    }

    #[test]
    fn startup_twice_is_rejected() {
        let mut host = EditorHost::default();
        let mut module = started(&mut host);

        assert_eq!(
            module.startup(&mut host),
            Err(ModuleError::AlreadyStarted(FrameworkEditorModule::NAME))
        );
        assert_eq!(host.tasks.len(), 4);
    }

    #[test]
    fn started_module_owns_extensibility_managers() {
        let mut host = EditorHost::default();
        let mut module = FrameworkEditorModule::new();
        assert!(module.menu_extensibility().is_none());

        module.startup(&mut host).unwrap();
        assert!(module.menu_extensibility().is_some());
        assert!(module.toolbar_extensibility().is_some());

        module.shutdown(&mut host).unwrap();
        assert!(module.toolbar_extensibility().is_none());
    }

    //=====================================================================
    // Shutdown
    //=====================================================================

    #[test]
    fn shutdown_restores_host() {
        let mut host = EditorHost::default();
        let mut module = started(&mut host);

        module.shutdown(&mut host).unwrap();

        assert!(!module.is_started());
        assert!(host.is_pristine());
        assert_eq!(host.gameplay_debugger.as_ref().unwrap().change_notifications(), 1);
    }

    #[test]
    fn shutdown_before_startup_is_rejected() {
        let mut host = EditorHost::default();
        let mut module = FrameworkEditorModule::new();

        assert_eq!(
            module.shutdown(&mut host),
            Err(ModuleError::NotStarted(FrameworkEditorModule::NAME))
        );
    }

    #[test]
    fn shutdown_keeps_foreign_registrations() {
        let mut host = EditorHost::default();
        host.styles.register(StyleSet::new("OtherStyle"));
        let foreign = host.tasks.register(Box::new(WaitTaskFactory));
        host.compilers.register(BlueprintKind::StateMachine, Box::new(ForeignCompiler));

        let mut module = started(&mut host);
        let fsm = Blueprint::new("Door", BlueprintKind::StateMachine).with_graph("States");
        let during = host
            .compilers
            .compile(&fsm, &CompileOptions::default(), &mut CompilerResultsLog::new())
            .unwrap();
        assert_eq!(during.name, "Door_C");

        module.shutdown(&mut host).unwrap();

        assert!(host.styles.get("OtherStyle").is_some());
        assert!(host.tasks.contains(foreign));
        assert_eq!(host.tasks.len(), 1);

        assert!(host.compilers.can_compile(&fsm));
        assert_eq!(host.compilers.len(), 1);
        let after = host
            .compilers
            .compile(&fsm, &CompileOptions::default(), &mut CompilerResultsLog::new())
            .unwrap();
        assert_eq!(after.name, "ForeignDoor");
    }

    #[test]
    fn restart_after_shutdown() {
        let mut host = EditorHost::default();
        let mut module = started(&mut host);
        module.shutdown(&mut host).unwrap();

        module.startup(&mut host).unwrap();
        assert_eq!(host.asset_tools.len(), 2);
    }

    //=====================================================================
    // Host Integration
    //=====================================================================

    #[test]
    fn registered_extensions_are_usable() {
        let mut host = EditorHost::default();
        let module = started(&mut host);

        let fsm = Blueprint::new("Door", BlueprintKind::StateMachine).with_graph("States");
        let class = host
            .compilers
            .compile(&fsm, &CompileOptions::default(), &mut CompilerResultsLog::new())
            .unwrap();
        assert_eq!(class.name, "Door_C");

        let visual = host
            .node_factories
            .create_node_visual(&GraphNode::new("NpcBehaviorGraphNode_Task", "Wait"));
        assert!(visual.is_some());

        assert_eq!(host.asset_tools.open_editor(&fsm), Some(module.create_state_machine_editor(&fsm)));

        let npc = Blueprint::new("Guard", BlueprintKind::NpcBehavior);
        assert_eq!(host.asset_tools.open_editor(&npc), Some(module.create_npc_editor(&npc)));
    }
}
