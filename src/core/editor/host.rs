//=========================================================================
// Editor Host
//=========================================================================
//
// The host framework's registries that editor modules extend.
//
// Architecture:
// ```text
//     EditorHostBuilder  ──build()──>  EditorHost
//         │                               ├─ styles
//         └─ with_gameplay_debugger()     ├─ node_factories / pin_factories
//                                         ├─ compilers
//                                         ├─ tasks
//                                         ├─ asset_tools
//                                         └─ gameplay_debugger (optional)
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{
    asset_actions::AssetTypeActions,
    compiler::CompilerRegistry,
    debugger::GameplayDebugger,
    factories::{GraphNodeFactory, PinConnectionFactory},
    registry::Registry,
    style::StyleRegistry,
    tasks::BehaviorTaskFactory,
};

//=== EditorHost ==========================================================

pub struct EditorHost {
    pub styles: StyleRegistry,
    pub node_factories: Registry<dyn GraphNodeFactory>,
    pub pin_factories: Registry<dyn PinConnectionFactory>,
    pub compilers: CompilerRegistry,
    pub tasks: Registry<dyn BehaviorTaskFactory>,
    pub asset_tools: Registry<dyn AssetTypeActions>,
    pub gameplay_debugger: Option<GameplayDebugger>,
}

impl EditorHost {
    pub fn builder() -> EditorHostBuilder {
        EditorHostBuilder::new()
    }

    /// True when no registry holds any entry.
    pub fn is_pristine(&self) -> bool {
        self.styles.is_empty()
            && self.node_factories.is_empty()
            && self.pin_factories.is_empty()
            && self.compilers.is_empty()
            && self.tasks.is_empty()
            && self.asset_tools.is_empty()
            && self.gameplay_debugger.as_ref().map_or(true, GameplayDebugger::is_empty)
    }
}

impl Default for EditorHost {
    fn default() -> Self {
        EditorHostBuilder::new().build()
    }
}

//=== EditorHostBuilder ===================================================

/// Builder for an [`EditorHost`].
///
/// # Default Values
///
/// - **Gameplay debugger**: available
#[derive(Debug, Clone)]
pub struct EditorHostBuilder {
    gameplay_debugger: bool,
}

impl EditorHostBuilder {
    pub fn new() -> Self {
        Self { gameplay_debugger: true }
    }

    /// Sets whether the host provides a gameplay debugger.
    pub fn with_gameplay_debugger(mut self, available: bool) -> Self {
        self.gameplay_debugger = available;
        self
    }

    pub fn build(self) -> EditorHost {
        EditorHost {
            styles: StyleRegistry::new(),
            node_factories: Registry::new(),
            pin_factories: Registry::new(),
            compilers: CompilerRegistry::new(),
            tasks: Registry::new(),
            asset_tools: Registry::new(),
            gameplay_debugger: self.gameplay_debugger.then(GameplayDebugger::new),
        }
    }
}

impl Default for EditorHostBuilder {
    fn default() -> Self {
        Self::new()
    }
}
