//=========================================================================
// Platform Adapter
//=========================================================================
//
// Bridges winit keyboard input to the navigation layer.
//
// Architecture:
// ```text
//  Winit Event Loop
//   ↓ WindowEvent
//  InputProcessor
//   ├─ tracks modifiers (ModifiersChanged)
//   └─ KeyEvent { state, repeat } → KeyDown / KeyRepeat / KeyUp
//   ↓ InputEvent
//  NavigableBox::handle_input
// ```
//
// The adapter owns no window or event loop; hosts forward the events
// they already receive.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== Public API ==========================================================

pub use input_processor::{phase_for, InputProcessor};
