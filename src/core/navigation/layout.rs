//=========================================================================
// Layout Containers
//=========================================================================
//
// Generic slot-based layout abstraction. A layout owns its children;
// each child sits in a `Slot` together with its layout attributes.
//
// Architecture:
//   LayoutContainer (trait)
//     └─ BoxPanel { orientation, slots: Vec<Slot> }
//
// Layouts know nothing about focus. Navigation is composed on top by
// `NavigableBox`, which observes slot additions and removals.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{widget::Widget, WidgetId};

//=== Slot Attributes =====================================================

/// Padding around a slot's content, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn uniform(value: f32) -> Self {
        Self { left: value, top: value, right: value, bottom: value }
    }
}

/// How a slot claims space along the panel's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SlotSize {
    /// Only as much as the content wants.
    #[default]
    Auto,

    /// Share of the remaining space, weighted by the value.
    Fill(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Fill,
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

//=== Slot ================================================================

/// Attachment point holding one child widget.
pub struct Slot {
    content: Box<dyn Widget>,
    pub padding: Padding,
    pub size: SlotSize,
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
}

impl Slot {
    pub fn new(content: Box<dyn Widget>) -> Self {
        Self {
            content,
            padding: Padding::default(),
            size: SlotSize::default(),
            horizontal_alignment: Alignment::default(),
            vertical_alignment: Alignment::default(),
        }
    }

    pub fn content(&self) -> &dyn Widget {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> &mut dyn Widget {
        self.content.as_mut()
    }

    pub fn into_content(self) -> Box<dyn Widget> {
        self.content
    }
}

//=== LayoutContainer =====================================================

/// Slot-based container of child widgets.
pub trait LayoutContainer {
    /// Slots in layout order.
    fn slots(&self) -> &[Slot];

    /// Mutable access to a slot's layout attributes.
    fn slot_mut(&mut self, index: usize) -> Option<&mut Slot>;

    /// Appends a child in a new slot. Returns the slot index.
    fn add_child(&mut self, content: Box<dyn Widget>) -> usize;

    /// Inserts a child at `index`, clamped to the slot count. Returns the
    /// slot index actually used.
    fn insert_child_at(&mut self, index: usize, content: Box<dyn Widget>) -> usize;

    /// Removes the slot holding `id` and returns its content.
    fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>>;

    //--- Provided Queries -------------------------------------------------

    fn slot_count(&self) -> usize {
        self.slots().len()
    }

    /// Slot index of the child with `id`.
    fn slot_index_of(&self, id: WidgetId) -> Option<usize> {
        self.slots().iter().position(|slot| slot.content().id() == id)
    }

    fn child(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.slots()
            .iter()
            .find(|slot| slot.content().id() == id)
            .map(Slot::content)
    }

    fn child_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        let index = self.slot_index_of(id)?;
        self.slot_mut(index).map(Slot::content_mut)
    }
}

//=== BoxPanel ============================================================

/// Linear panel stacking its slots along one axis.
pub struct BoxPanel {
    orientation: Orientation,
    slots: Vec<Slot>,
}

impl BoxPanel {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            slots: Vec::new(),
        }
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl LayoutContainer for BoxPanel {
    fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    fn add_child(&mut self, content: Box<dyn Widget>) -> usize {
        self.slots.push(Slot::new(content));
        self.slots.len() - 1
    }

    fn insert_child_at(&mut self, index: usize, content: Box<dyn Widget>) -> usize {
        let index = index.min(self.slots.len());
        self.slots.insert(index, Slot::new(content));
        index
    }

    fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.slot_index_of(id)?;
        Some(self.slots.remove(index).into_content())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::widget::{Label, NavigableItem};

    #[test]
    fn add_child_appends_slots() {
        let mut panel = BoxPanel::vertical();
        let a = NavigableItem::new("A");
        let a_id = a.id();

        assert_eq!(panel.add_child(Box::new(a)), 0);
        assert_eq!(panel.add_child(Box::new(Label::new("B"))), 1);
        assert_eq!(panel.slot_count(), 2);
        assert_eq!(panel.slot_index_of(a_id), Some(0));
    }

    #[test]
    fn insert_child_at_clamps_index() {
        let mut panel = BoxPanel::horizontal();
        panel.add_child(Box::new(Label::new("first")));

        let index = panel.insert_child_at(10, Box::new(Label::new("last")));
        assert_eq!(index, 1);

        let index = panel.insert_child_at(0, Box::new(Label::new("front")));
        assert_eq!(index, 0);
        assert_eq!(panel.slot_count(), 3);
    }

    #[test]
    fn remove_child_returns_content() {
        let mut panel = BoxPanel::vertical();
        let item = NavigableItem::new("A");
        let id = item.id();
        panel.add_child(Box::new(item));

        let removed = panel.remove_child(id).unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(panel.slot_count(), 0);
        assert!(panel.remove_child(id).is_none());
    }

    #[test]
    fn child_mut_reaches_navigable_capability() {
        let mut panel = BoxPanel::vertical();
        let item = NavigableItem::new("A");
        let id = item.id();
        panel.add_child(Box::new(item));

        panel
            .child_mut(id)
            .and_then(|w| w.as_navigable_mut())
            .unwrap()
            .gain_focus();

        let focused = panel
            .child(id)
            .and_then(|w| w.as_navigable())
            .map(|n| n.is_focused());
        assert_eq!(focused, Some(true));
    }

    #[test]
    fn slot_attributes_are_editable() {
        let mut panel = BoxPanel::vertical();
        panel.add_child(Box::new(Label::new("A")));

        let slot = panel.slot_mut(0).unwrap();
        slot.padding = Padding::uniform(4.0);
        slot.size = SlotSize::Fill(1.0);

        assert_eq!(panel.slots()[0].padding, Padding::uniform(4.0));
        assert_eq!(panel.slots()[0].size, SlotSize::Fill(1.0));
        assert_eq!(panel.orientation(), Orientation::Vertical);
    }
}
