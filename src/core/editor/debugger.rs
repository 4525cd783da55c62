//=========================================================================
// Gameplay Debugger
//=========================================================================
//
// Optional host service listing named debugger categories. Each category
// is created on demand from a factory function.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::{debug, warn};

//=== Types ===============================================================

/// Where a category is active by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryState {
    EnabledInGameAndSimulate,
    EnabledInGame,
    EnabledInSimulate,
    Disabled,
    Hidden,
}

pub trait DebuggerCategory {
    /// Appends this category's current report lines.
    fn collect_lines(&self, lines: &mut Vec<String>);
}

pub type CategoryFactory = fn() -> Box<dyn DebuggerCategory>;

//=== StateMachineCategory ================================================

/// Reports the active state of each observed state machine.
#[derive(Debug, Default, Clone)]
pub struct StateMachineCategory {
    active: BTreeMap<String, String>,
}

impl StateMachineCategory {
    pub fn make_instance() -> Box<dyn DebuggerCategory> {
        Box::new(Self::default())
    }

    pub fn observe(&mut self, machine: impl Into<String>, state: impl Into<String>) {
        self.active.insert(machine.into(), state.into());
    }
}

impl DebuggerCategory for StateMachineCategory {
    fn collect_lines(&self, lines: &mut Vec<String>) {
        if self.active.is_empty() {
            lines.push(String::from("No active state machines"));
        }
        for (machine, state) in &self.active {
            lines.push(format!("{}: {}", machine, state));
        }
    }
}

//=== GameplayDebugger ====================================================

#[derive(Debug, Default)]
pub struct GameplayDebugger {
    categories: BTreeMap<String, (CategoryFactory, CategoryState)>,
    change_notifications: u32,
}

impl GameplayDebugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`. Returns `false` and keeps the existing entry if
    /// the name is taken.
    pub fn register_category(
        &mut self,
        name: impl Into<String>,
        factory: CategoryFactory,
        state: CategoryState,
    ) -> bool {
        let name = name.into();
        if self.categories.contains_key(&name) {
            warn!("Debugger category {} is already registered", name);
            return false;
        }
        debug!("Debugger category {} registered ({:?})", name, state);
        self.categories.insert(name, (factory, state));
        true
    }

    pub fn unregister_category(&mut self, name: &str) -> bool {
        self.categories.remove(name).is_some()
    }

    /// Tells the host UI to rebuild its category list.
    pub fn notify_categories_changed(&mut self) {
        self.change_notifications += 1;
    }

    pub fn change_notifications(&self) -> u32 {
        self.change_notifications
    }

    pub fn category_state(&self, name: &str) -> Option<CategoryState> {
        self.categories.get(name).map(|(_, state)| *state)
    }

    pub fn make_category(&self, name: &str) -> Option<Box<dyn DebuggerCategory>> {
        self.categories.get(name).map(|(factory, _)| factory())
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_make_category() {
        let mut debugger = GameplayDebugger::new();
        assert!(debugger.register_category(
            "UmbraFramework",
            StateMachineCategory::make_instance,
            CategoryState::EnabledInGameAndSimulate,
        ));

        assert_eq!(
            debugger.category_state("UmbraFramework"),
            Some(CategoryState::EnabledInGameAndSimulate)
        );

        let mut lines = Vec::new();
        debugger.make_category("UmbraFramework").unwrap().collect_lines(&mut lines);
        assert_eq!(lines, vec!["No active state machines".to_string()]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut debugger = GameplayDebugger::new();
        debugger.register_category("A", StateMachineCategory::make_instance, CategoryState::Disabled);

        assert!(!debugger.register_category("A", StateMachineCategory::make_instance, CategoryState::Hidden));
        assert_eq!(debugger.category_state("A"), Some(CategoryState::Disabled));
    }

    #[test]
    fn unregister_and_notify() {
        let mut debugger = GameplayDebugger::new();
        debugger.register_category("A", StateMachineCategory::make_instance, CategoryState::EnabledInGame);
        debugger.notify_categories_changed();

        assert!(debugger.unregister_category("A"));
        assert!(!debugger.unregister_category("A"));
        assert!(debugger.is_empty());
        assert_eq!(debugger.change_notifications(), 1);
    }

    #[test]
    fn state_machine_category_reports_states() {
        let mut category = StateMachineCategory::default();
        category.observe("Door", "Open");
        category.observe("Guard", "Patrol");

        let mut lines = Vec::new();
        category.collect_lines(&mut lines);
        assert_eq!(lines, vec!["Door: Open".to_string(), "Guard: Patrol".to_string()]);
    }
}
