//=========================================================================
// Navigation
//=========================================================================
//
// Directional focus navigation over layout containers.
//
// Architecture:
//   NavigableBox<L: LayoutContainer>
//     ├─ LayoutContainer (BoxPanel)    → owns slots and children
//     ├─ FocusTransfer (ExclusiveFocus) → moves focus between members
//     ├─ InputComponent                → key → NavigationAction
//     └─ NavigationConfig              → key sets, wrap-around
//
//   WidgetRelations                    → widget → owner container
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod container;
pub mod focus;
pub mod layout;
pub mod relations;
pub mod widget;

//=== Public API ==========================================================

pub use config::{ConfigError, NavigationConfig};
pub use container::{DuplicateWidget, NavigableBox, NavigationOutcome};
pub use focus::{ExclusiveFocus, FocusMembers, FocusTransfer};
pub use layout::{Alignment, BoxPanel, LayoutContainer, Orientation, Padding, Slot, SlotSize};
pub use relations::WidgetRelations;
pub use widget::{Label, NavigableItem, NavigableWidget, Widget};

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU64, Ordering};

//=== Constants ===========================================================

/// Editor palette category for navigable containers.
pub const PALETTE_CATEGORY: &str = "Umbra Framework";

//=== Identifiers =========================================================

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Allocates a process-unique id.
    pub fn unique() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Stable identity of a navigable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn unique() -> Self {
        Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}
