//=========================================================================
// Editor
//=========================================================================
//
// Editor-side glue for the framework's Blueprint asset types.
//
// Architecture:
//   FrameworkEditorModule ──startup/shutdown──> EditorHost
//                                                 ├─ StyleRegistry
//                                                 ├─ Registry<dyn GraphNodeFactory>
//                                                 ├─ Registry<dyn PinConnectionFactory>
//                                                 ├─ CompilerRegistry (by BlueprintKind)
//                                                 ├─ Registry<dyn BehaviorTaskFactory>
//                                                 ├─ Registry<dyn AssetTypeActions>
//                                                 └─ Option<GameplayDebugger>
//
//=========================================================================

//=== Module Declarations =================================================

pub mod asset_actions;
pub mod blueprint;
pub mod compiler;
pub mod debugger;
pub mod extensibility;
pub mod factories;
pub mod host;
pub mod module;
pub mod registry;
pub mod style;
pub mod tasks;

//=== Public API ==========================================================

pub use asset_actions::{AssetCategory, AssetEditor, AssetTypeActions, Color, EditorKind};
pub use blueprint::{Blueprint, BlueprintKind, GeneratedClass};
pub use compiler::{
    BlueprintCompiler, CompileError, CompileOptions, CompileType, CompilerRegistry,
    CompilerResultsLog, GraphBlueprintCompiler, Severity,
};
pub use debugger::{CategoryFactory, CategoryState, DebuggerCategory, GameplayDebugger};
pub use extensibility::{ExtensibilityManager, Extender, ExtensionPosition};
pub use factories::{ConnectionPolicy, GraphNode, GraphNodeFactory, NodeVisual, PinConnectionFactory};
pub use host::{EditorHost, EditorHostBuilder};
pub use module::{EditorModule, FrameworkEditorModule, ModuleError, DEBUGGER_CATEGORY};
pub use registry::{RegistrationHandle, Registry};
pub use style::{StyleRegistry, StyleSet};
pub use tasks::{BehaviorTask, BehaviorTaskFactory};
