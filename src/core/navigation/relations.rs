//=========================================================================
// Widget Relations
//=========================================================================
//
// Non-owning association table: widget id → owner container id.
//
// Containers own their children; this table only answers "which
// container is this widget in?" so widgets never hold a pointer back to
// their owner.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use super::{ContainerId, WidgetId};

//=== WidgetRelations =====================================================

#[derive(Debug, Default)]
pub struct WidgetRelations {
    owners: HashMap<WidgetId, ContainerId>,
}

impl WidgetRelations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `owner` as the container of `widget`.
    ///
    /// Returns the previous owner. A widget moved between containers
    /// without being removed first is logged.
    pub fn set_owner(&mut self, widget: WidgetId, owner: ContainerId) -> Option<ContainerId> {
        let previous = self.owners.insert(widget, owner);
        if let Some(previous) = previous {
            if previous != owner {
                warn!(
                    "Widget {:?} re-parented from {:?} to {:?} without removal",
                    widget, previous, owner
                );
            }
        }
        previous
    }

    /// Clears the owner of `widget`, returning it.
    pub fn clear_owner(&mut self, widget: WidgetId) -> Option<ContainerId> {
        self.owners.remove(&widget)
    }

    pub fn owner_of(&self, widget: WidgetId) -> Option<ContainerId> {
        self.owners.get(&widget).copied()
    }

    /// Widgets currently owned by `container`, in no particular order.
    pub fn children_of(&self, container: ContainerId) -> Vec<WidgetId> {
        self.owners
            .iter()
            .filter(|(_, &owner)| owner == container)
            .map(|(&widget, _)| widget)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_owner() {
        let mut relations = WidgetRelations::new();
        let widget = WidgetId::new(1);
        let owner = ContainerId::new(10);

        assert_eq!(relations.set_owner(widget, owner), None);
        assert_eq!(relations.owner_of(widget), Some(owner));

        assert_eq!(relations.clear_owner(widget), Some(owner));
        assert_eq!(relations.owner_of(widget), None);
        assert!(relations.is_empty());
    }

    #[test]
    fn reparent_returns_previous_owner() {
        let mut relations = WidgetRelations::new();
        let widget = WidgetId::new(1);

        relations.set_owner(widget, ContainerId::new(1));
        let previous = relations.set_owner(widget, ContainerId::new(2));

        assert_eq!(previous, Some(ContainerId::new(1)));
        assert_eq!(relations.owner_of(widget), Some(ContainerId::new(2)));
        assert_eq!(relations.len(), 1);
    }

    #[test]
    fn children_of_filters_by_owner() {
        let mut relations = WidgetRelations::new();
        let a = ContainerId::new(1);
        let b = ContainerId::new(2);

        relations.set_owner(WidgetId::new(1), a);
        relations.set_owner(WidgetId::new(2), b);
        relations.set_owner(WidgetId::new(3), a);

        let mut children = relations.children_of(a);
        children.sort();
        assert_eq!(children, vec![WidgetId::new(1), WidgetId::new(3)]);
    }

    #[test]
    fn clearing_unknown_widget_is_noop() {
        let mut relations = WidgetRelations::new();
        assert_eq!(relations.clear_owner(WidgetId::new(42)), None);
    }
}
