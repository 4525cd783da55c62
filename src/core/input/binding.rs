//=========================================================================
// Action Bindings
//=========================================================================
//
// Input-handling capability: binds (key mapping, event phase) pairs to
// actions and resolves incoming events against those bindings.
//
// Architecture:
//   (key, modifiers, phase) → HashMap → Action
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{
    action::Action,
    event::{InputEvent, InputPhase, KeyCode, KeyMapping, Modifiers},
};

//=== InputComponent ======================================================

/// Input-handling object a container can attach to.
///
/// Hosts with their own input stack implement this to forward bindings;
/// [`ActionBindings`] is the in-crate implementation.
pub trait InputComponent<A: Action> {
    /// Binds a key mapping in the given phase to `action`.
    fn bind_key(&mut self, mapping: KeyMapping, phase: InputPhase, action: A);

    /// Removes every action binding.
    fn clear_action_bindings(&mut self);

    /// Resolves an event to the bound action, if any.
    fn resolve(&self, event: &InputEvent) -> Option<A>;
}

//=== ActionBindings ======================================================

/// Maps input events to actions via (key, modifiers, phase) lookups.
pub struct ActionBindings<A: Action> {
    /// Key bindings: (key, modifiers, phase) → action
    bindings: HashMap<(KeyCode, Modifiers, InputPhase), A>,
}

impl<A: Action> ActionBindings<A> {
    /// Creates an empty binding table.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Removes a binding for one phase (exact modifier match).
    pub fn unbind_key(&mut self, mapping: KeyMapping, phase: InputPhase) {
        self.bindings.remove(&(mapping.key, mapping.modifiers, phase));
    }

    /// Removes every binding for a key, across all modifiers and phases.
    pub fn unbind_key_all_variants(&mut self, key: KeyCode) {
        self.bindings.retain(|&(k, _, _), _| k != key);
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the action bound to `mapping` in `phase`.
    pub fn binding(&self, mapping: KeyMapping, phase: InputPhase) -> Option<A> {
        self.bindings.get(&(mapping.key, mapping.modifiers, phase)).copied()
    }

    /// Number of (key, modifiers, phase) bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<A: Action> Default for ActionBindings<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> InputComponent<A> for ActionBindings<A> {
    fn bind_key(&mut self, mapping: KeyMapping, phase: InputPhase, action: A) {
        let key = (mapping.key, mapping.modifiers, phase);
        if let Some(previous) = self.bindings.insert(key, action) {
            if previous != action {
                warn!(
                    "Binding {:?} {:?} rebound from {:?} to {:?}",
                    mapping, phase, previous, action
                );
            }
        } else {
            debug!("Bound {:?} {:?} to {:?}", mapping, phase, action);
        }
    }

    fn clear_action_bindings(&mut self) {
        debug!("Clearing {} action bindings", self.bindings.len());
        self.bindings.clear();
    }

    fn resolve(&self, event: &InputEvent) -> Option<A> {
        let (mapping, phase) = event.chord()?;
        self.binding(mapping, phase)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
