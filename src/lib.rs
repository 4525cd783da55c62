//=========================================================================
// Umbra Framework: Library Root
//=========================================================================
//
// Focus-navigable UI containers and the editor module glue for NPC
// behavior and state machine Blueprints.
//
// Typical usage:
// ```no_run
// use umbra_framework::prelude::*;
//
// let mut relations = WidgetRelations::new();
// let mut menu = NavigableBox::vertical(NavigationConfig::default());
// menu.attach_input_component(Box::new(ActionBindings::<NavigationAction>::new()));
// menu.bind_inputs();
// menu.add_child(&mut relations, Box::new(NavigableItem::new("Play")))?;
// menu.focus_first();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the host-independent systems (input, navigation, editor).
// `platform` adapts winit keyboard events to `core::input` events.
//
pub mod core;
pub mod platform;
pub mod prelude;
