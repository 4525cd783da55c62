//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use umbra_framework::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Input
pub use crate::core::input::{
    Action, ActionBindings, InputComponent, InputEvent, InputPhase, KeyCode, KeyMapping,
    Modifiers, NavigationAction,
};

// Navigation
pub use crate::core::navigation::{
    BoxPanel, ContainerId, FocusTransfer, LayoutContainer, NavigableBox, NavigableItem,
    NavigableWidget, NavigationConfig, NavigationOutcome, Widget, WidgetId, WidgetRelations,
};

// Editor
pub use crate::core::editor::{
    Blueprint, BlueprintKind, EditorHost, EditorModule, FrameworkEditorModule,
};

// Platform
pub use crate::platform::InputProcessor;
