//=========================================================================
// Editor Styles
//=========================================================================
//
// Named style sets mapping style keys to brush resources.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== StyleSet ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    name: String,
    brushes: HashMap<String, String>,
}

impl StyleSet {
    pub const FRAMEWORK: &'static str = "FrameworkStyle";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brushes: HashMap::new(),
        }
    }

    /// Class icons and node styles for the framework's asset types.
    pub fn framework() -> Self {
        Self::new(Self::FRAMEWORK)
            .with_brush("ClassIcon.NpcBehaviorBlueprint", "Icons/NpcBehavior_16x.png")
            .with_brush("ClassThumbnail.NpcBehaviorBlueprint", "Icons/NpcBehavior_64x.png")
            .with_brush("ClassIcon.StateMachineBlueprint", "Icons/StateMachine_16x.png")
            .with_brush("ClassThumbnail.StateMachineBlueprint", "Icons/StateMachine_64x.png")
    }

    pub fn with_brush(mut self, key: impl Into<String>, resource: impl Into<String>) -> Self {
        self.brushes.insert(key.into(), resource.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brush(&self, key: &str) -> Option<&str> {
        self.brushes.get(key).map(String::as_str)
    }
}

//=== StyleRegistry =======================================================

#[derive(Debug, Default)]
pub struct StyleRegistry {
    sets: HashMap<String, StyleSet>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `set` under its name. Returns `false` if the name is
    /// already taken.
    pub fn register(&mut self, set: StyleSet) -> bool {
        if self.sets.contains_key(set.name()) {
            warn!("Style set {} is already registered", set.name());
            return false;
        }
        debug!("Style set {} registered", set.name());
        self.sets.insert(set.name().to_string(), set);
        true
    }

    pub fn unregister(&mut self, name: &str) -> Option<StyleSet> {
        self.sets.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&StyleSet> {
        self.sets.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
