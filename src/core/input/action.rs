//=========================================================================
// Action Trait & Navigation Actions
//=========================================================================
//
// Actions are opaque identifiers produced by input bindings and
// interpreted by whoever owns the bindings.
//
// Navigable containers use `NavigationAction`; any other consumer can
// bind its own enum through the same `Action` trait.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for action enums resolved from key bindings.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Cheap passing and map lookups
/// - `Debug`: Logging support
///
/// # Example
///
/// ```
/// use umbra_framework::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Open, Close }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Copy + Eq + Hash + Debug {}

//=== NavigationAction ====================================================

/// Handlers a navigable container binds its configured keys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationAction {
    /// Move focus to the next widget (pressed + repeat).
    Next,

    /// Move focus to the previous widget (pressed + repeat).
    Previous,

    /// Confirm the focused widget (pressed only).
    Confirm,
}

impl Action for NavigationAction {}

//=========================================================================
// Unit Tests
//=========================================================================
