//=========================================================================
// Asset Type Actions
//=========================================================================
//
// Per-asset-type editor integration: display name, colour, category and
// the asset editor opened for it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::blueprint::{Blueprint, BlueprintKind};
use super::registry::Registry;

//=== Types ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Content-browser category an asset type is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Blueprint,
    Gameplay,
    Misc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    NpcBehavior,
    StateMachine,
}

/// Asset editor instance opened on one Blueprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEditor {
    pub kind: EditorKind,
    pub blueprint: String,
}

impl AssetEditor {
    pub fn npc_behavior(blueprint: &Blueprint) -> Self {
        Self::open(EditorKind::NpcBehavior, blueprint)
    }

    pub fn state_machine(blueprint: &Blueprint) -> Self {
        Self::open(EditorKind::StateMachine, blueprint)
    }

    fn open(kind: EditorKind, blueprint: &Blueprint) -> Self {
        Self {
            kind,
            blueprint: blueprint.name.clone(),
        }
    }
}

//=== AssetTypeActions ====================================================

pub trait AssetTypeActions {
    fn name(&self) -> &str;

    fn supported_kind(&self) -> BlueprintKind;

    fn type_color(&self) -> Color;

    fn category(&self) -> AssetCategory;

    fn editor_kind(&self) -> EditorKind;

    /// Opens the asset editor for `blueprint`, or `None` if it is not of
    /// the supported kind.
    fn open_editor(&self, blueprint: &Blueprint) -> Option<AssetEditor> {
        if blueprint.kind != self.supported_kind() {
            return None;
        }
        Some(AssetEditor::open(self.editor_kind(), blueprint))
    }
}

//--- Framework Asset Types -----------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct NpcBehaviorAssetActions;

impl AssetTypeActions for NpcBehaviorAssetActions {
    fn name(&self) -> &str {
        "Npc Behavior"
    }

    fn supported_kind(&self) -> BlueprintKind {
        BlueprintKind::NpcBehavior
    }

    fn type_color(&self) -> Color {
        Color::rgb(201, 29, 85)
    }

    fn category(&self) -> AssetCategory {
        AssetCategory::Gameplay
    }

    fn editor_kind(&self) -> EditorKind {
        EditorKind::NpcBehavior
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StateMachineAssetActions;

impl AssetTypeActions for StateMachineAssetActions {
    fn name(&self) -> &str {
        "State Machine"
    }

    fn supported_kind(&self) -> BlueprintKind {
        BlueprintKind::StateMachine
    }

    fn type_color(&self) -> Color {
        Color::rgb(63, 126, 255)
    }

    fn category(&self) -> AssetCategory {
        AssetCategory::Gameplay
    }

    fn editor_kind(&self) -> EditorKind {
        EditorKind::StateMachine
    }
}

//=== Registry Lookups ====================================================

impl Registry<dyn AssetTypeActions> {
    pub fn actions_for(&self, kind: &BlueprintKind) -> Option<&dyn AssetTypeActions> {
        self.iter().find(|actions| actions.supported_kind() == *kind)
    }

    /// Opens the editor registered for `blueprint`'s kind.
    pub fn open_editor(&self, blueprint: &Blueprint) -> Option<AssetEditor> {
        self.actions_for(&blueprint.kind)?.open_editor(blueprint)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_open_matching_editor() {
        let npc = Blueprint::new("Guard", BlueprintKind::NpcBehavior);
        let fsm = Blueprint::new("Door", BlueprintKind::StateMachine);

        assert_eq!(NpcBehaviorAssetActions.open_editor(&npc), Some(AssetEditor::npc_behavior(&npc)));
        assert_eq!(NpcBehaviorAssetActions.open_editor(&fsm), None);
        assert_eq!(
            StateMachineAssetActions.open_editor(&fsm).map(|e| e.kind),
            Some(EditorKind::StateMachine)
        );
    }

    #[test]
    fn registry_routes_by_kind() {
        let mut tools: Registry<dyn AssetTypeActions> = Registry::new();
        tools.register(Box::new(NpcBehaviorAssetActions));
        tools.register(Box::new(StateMachineAssetActions));

        let fsm = Blueprint::new("Door", BlueprintKind::StateMachine);
        let other = Blueprint::new("Hud", BlueprintKind::Other("Widget".into()));

        assert_eq!(tools.actions_for(&BlueprintKind::NpcBehavior).map(|a| a.name()), Some("Npc Behavior"));
        assert_eq!(tools.open_editor(&fsm), Some(AssetEditor::state_machine(&fsm)));
        assert_eq!(tools.open_editor(&other), None);
    }
}
