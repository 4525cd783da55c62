//=========================================================================
// Input
//
// Key events, key mappings and the input-handling capability that
// navigable containers bind their handlers through.
//
// Responsibilities:
// - Represent key events in pressed / repeat / released phases
// - Describe configured key mappings (key + exact modifiers)
// - Bind (mapping, phase) pairs to actions and resolve events
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod binding;
pub mod event;

//=== Public API ==========================================================

pub use action::{Action, NavigationAction};
pub use binding::{ActionBindings, InputComponent};
pub use event::{InputEvent, InputPhase, KeyCode, KeyMapping, Modifiers};
