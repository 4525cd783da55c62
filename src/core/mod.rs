//=========================================================================
// Core
//=========================================================================
//
// Host-independent framework systems.
//
//   input       → key events, phases, action bindings
//   navigation  → navigable containers and focus traversal
//   editor      → editor module glue for Blueprint asset types
//
//=========================================================================

pub mod editor;
pub mod input;
pub mod navigation;
