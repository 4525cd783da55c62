//=========================================================================
// Focus Transfer
//=========================================================================
//
// The focus-transfer utility: given a container and a target widget,
// performs whatever work moving input focus requires.
//
// Containers call it from their next / previous handlers; hosts with
// their own focus system (e.g. one that also routes keyboard focus to
// a native window) provide their own implementation.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{widget::NavigableWidget, ContainerId, WidgetId};

//=== FocusMembers ========================================================

/// View over the navigable members of one container.
pub trait FocusMembers {
    /// Member ids in navigation order.
    fn member_ids(&self) -> &[WidgetId];

    fn member_mut(&mut self, id: WidgetId) -> Option<&mut dyn NavigableWidget>;
}

//=== FocusTransfer =======================================================

pub trait FocusTransfer {
    /// Moves focus within `container` to `target`.
    ///
    /// Returns `false` when `target` is not a member.
    fn transfer_focus(
        &mut self,
        container: ContainerId,
        members: &mut dyn FocusMembers,
        target: WidgetId,
    ) -> bool;
}

//=== ExclusiveFocus ======================================================

/// Default transfer: every other focused member loses focus, then the
/// target gains it. Keeps at most one member focused.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExclusiveFocus;

impl FocusTransfer for ExclusiveFocus {
    fn transfer_focus(
        &mut self,
        container: ContainerId,
        members: &mut dyn FocusMembers,
        target: WidgetId,
    ) -> bool {
        if !members.member_ids().contains(&target) {
            debug!("{:?}: {:?} is not a member, focus unchanged", container, target);
            return false;
        }

        let others: Vec<WidgetId> = members
            .member_ids()
            .iter()
            .copied()
            .filter(|&id| id != target)
            .collect();

        for id in others {
            if let Some(widget) = members.member_mut(id) {
                if widget.is_focused() {
                    widget.lose_focus();
                }
            }
        }

        match members.member_mut(target) {
            Some(widget) => {
                widget.gain_focus();
                debug!("{:?}: focus → {:?}", container, target);
                true
            }
            None => false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::widget::{NavigableItem, Widget};

    //--- Test Helpers -----------------------------------------------------

    struct VecMembers {
        ids: Vec<WidgetId>,
        items: Vec<NavigableItem>,
    }

    impl VecMembers {
        fn new(labels: &[&str]) -> Self {
            let items: Vec<NavigableItem> = labels.iter().map(|l| NavigableItem::new(*l)).collect();
            Self {
                ids: items.iter().map(|i| i.id()).collect(),
                items,
            }
        }

        fn focused(&self) -> Vec<WidgetId> {
            self.items
                .iter()
                .filter(|i| i.is_focused())
                .map(|i| i.id())
                .collect()
        }
    }

    impl FocusMembers for VecMembers {
        fn member_ids(&self) -> &[WidgetId] {
            &self.ids
        }

        fn member_mut(&mut self, id: WidgetId) -> Option<&mut dyn NavigableWidget> {
            self.items
                .iter_mut()
                .find(|i| i.id() == id)
                .map(|i| i as &mut dyn NavigableWidget)
        }
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn exclusive_focus_moves_single_focus() {
        let mut members = VecMembers::new(&["A", "B", "C"]);
        let (a, c) = (members.ids[0], members.ids[2]);
        let container = ContainerId::new(1);

        assert!(ExclusiveFocus.transfer_focus(container, &mut members, a));
        assert_eq!(members.focused(), vec![a]);

        assert!(ExclusiveFocus.transfer_focus(container, &mut members, c));
        assert_eq!(members.focused(), vec![c]);
    }

    #[test]
    fn exclusive_focus_clears_multiple_stale_focus() {
        let mut members = VecMembers::new(&["A", "B", "C"]);
        members.items[0].gain_focus();
        members.items[2].gain_focus();
        let b = members.ids[1];

        ExclusiveFocus.transfer_focus(ContainerId::new(1), &mut members, b);
        assert_eq!(members.focused(), vec![b]);
    }

    #[test]
    fn unknown_target_leaves_focus_alone() {
        let mut members = VecMembers::new(&["A"]);
        members.items[0].gain_focus();
        let a = members.ids[0];

        let moved = ExclusiveFocus.transfer_focus(ContainerId::new(1), &mut members, WidgetId::new(u64::MAX));
        assert!(!moved);
        assert_eq!(members.focused(), vec![a]);
    }
}
