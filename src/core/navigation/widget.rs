//=========================================================================
// Widgets
//=========================================================================
//
// Capability traits for children of a layout container, plus two small
// concrete widgets usable by hosts and tests.
//
//   Widget              → anything that can sit in a slot
//   NavigableWidget     → a Widget that takes part in focus traversal
//
// A widget opts into navigation by overriding `as_navigable` /
// `as_navigable_mut`; containers never downcast.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::WidgetId;

//=== Widget ==============================================================

/// Child of a layout slot.
pub trait Widget {
    /// Stable identity of this widget.
    fn id(&self) -> WidgetId;

    /// Returns the navigable capability, if this widget has one.
    fn as_navigable(&self) -> Option<&dyn NavigableWidget> {
        None
    }

    /// Mutable variant of [`as_navigable`](Self::as_navigable).
    fn as_navigable_mut(&mut self) -> Option<&mut dyn NavigableWidget> {
        None
    }
}

//=== NavigableWidget =====================================================

/// UI element participating in directional focus traversal.
///
/// The owner container is not stored on the widget; look it up through
/// [`WidgetRelations`](super::WidgetRelations).
pub trait NavigableWidget: Widget {
    /// Current focus flag.
    fn is_focused(&self) -> bool;

    /// Sets the focus flag. Called by the focus-transfer utility.
    fn gain_focus(&mut self);

    /// Clears the focus flag.
    fn lose_focus(&mut self);

    /// Invoked once per confirm action while this widget is focused.
    fn confirm_state(&mut self);
}

//=== NavigableItem =======================================================

/// Minimal navigable widget: a label with a focus flag and a confirm
/// counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigableItem {
    id: WidgetId,
    label: String,
    focused: bool,
    confirmations: u32,
}

impl NavigableItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(WidgetId::unique(), label)
    }

    pub fn with_id(id: WidgetId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            focused: false,
            confirmations: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of times `confirm_state` has run on this item.
    pub fn confirm_count(&self) -> u32 {
        self.confirmations
    }
}

impl Widget for NavigableItem {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn as_navigable(&self) -> Option<&dyn NavigableWidget> {
        Some(self)
    }

    fn as_navigable_mut(&mut self) -> Option<&mut dyn NavigableWidget> {
        Some(self)
    }
}

impl NavigableWidget for NavigableItem {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn gain_focus(&mut self) {
        self.focused = true;
    }

    fn lose_focus(&mut self) {
        self.focused = false;
    }

    fn confirm_state(&mut self) {
        self.confirmations += 1;
    }
}

//=== Label ===============================================================

/// Static text. Occupies a slot but never joins navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    id: WidgetId,
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(WidgetId::unique(), text)
    }

    pub fn with_id(id: WidgetId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Label {
    fn id(&self) -> WidgetId {
        self.id
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_focus_round_trip() {
        let mut item = NavigableItem::new("Play");
        assert!(!item.is_focused());

        item.gain_focus();
        assert!(item.is_focused());

        item.lose_focus();
        assert!(!item.is_focused());
    }

    #[test]
    fn item_counts_confirmations() {
        let mut item = NavigableItem::new("Quit");
        item.confirm_state();
        item.confirm_state();
        assert_eq!(item.confirm_count(), 2);
    }

    #[test]
    fn item_exposes_navigable_capability() {
        let mut item = NavigableItem::new("Options");
        let id = item.id();

        let nav = item.as_navigable_mut().unwrap();
        nav.gain_focus();
        assert_eq!(nav.id(), id);
        assert!(item.as_navigable().unwrap().is_focused());
    }

    #[test]
    fn label_is_not_navigable() {
        let mut label = Label::new("Title");
        assert!(label.as_navigable().is_none());
        assert!(label.as_navigable_mut().is_none());
        assert_eq!(label.text(), "Title");
    }

    #[test]
    fn unique_ids_differ() {
        let a = NavigableItem::new("A");
        let b = NavigableItem::new("B");
        assert_ne!(a.id(), b.id());
    }
}
