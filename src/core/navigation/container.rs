//=========================================================================
// Navigable Box
//=========================================================================
//
// Focus-navigable container composed over a generic layout container.
//
// Architecture:
//   NavigableBox<L: LayoutContainer>
//     ├─ layout: L                  (owns children, slot order)
//     ├─ order: Vec<WidgetId>       (navigable children, slot order)
//     ├─ has_confirmed              (latch, cleared by reset_confirmation)
//     ├─ config: NavigationConfig   (key sets + wrap-around)
//     ├─ input: Option<Box<dyn InputComponent<NavigationAction>>>
//     └─ focus: Box<dyn FocusTransfer>
//
// Flow:
//   InputEvent → handle_input() → input.resolve() → navigate_next()
//                                                   navigate_previous()
//                                                   confirm()
//
// Focus location is not tracked here: it lives in the widgets' focus
// flags and is only ever changed through the focus-transfer utility.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::{debug, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::{
    config::NavigationConfig,
    focus::{ExclusiveFocus, FocusMembers, FocusTransfer},
    layout::{BoxPanel, LayoutContainer, Slot},
    relations::WidgetRelations,
    widget::{NavigableWidget, Widget},
    ContainerId, WidgetId, PALETTE_CATEGORY,
};
use crate::core::input::{InputComponent, InputEvent, InputPhase, NavigationAction};

//=== NavigationOutcome ===================================================

/// Result of one navigation handler call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Focus moved to an adjacent widget.
    Moved { from: WidgetId, to: WidgetId },

    /// Focus wrapped to the opposite end. `from` is `None` when nothing
    /// was focused.
    Wrapped { from: Option<WidgetId>, to: WidgetId },

    /// Focus placed on a widget while nothing was focused.
    Focused(WidgetId),

    /// The focused widget was confirmed and the latch is now set.
    Confirmed(WidgetId),

    /// Nothing to do (end reached without wrap-around, nothing focused).
    Unchanged,

    /// Navigation suppressed by the confirmation latch.
    Blocked,

    /// The container has no navigable widgets.
    Empty,

    /// The event resolved to no binding, or no input component is attached.
    Unbound,
}

impl NavigationOutcome {
    /// Returns the newly focused widget, if focus changed.
    pub fn focused(&self) -> Option<WidgetId> {
        match *self {
            Self::Moved { to, .. } | Self::Wrapped { to, .. } | Self::Focused(to) => Some(to),
            _ => None,
        }
    }
}

//=== DuplicateWidget =====================================================

/// A child was refused because its id already occupies a slot.
#[derive(Error)]
#[error("widget {id:?} is already a child of {container:?}")]
pub struct DuplicateWidget {
    pub id: WidgetId,
    pub container: ContainerId,

    /// The refused widget, returned to the caller.
    pub widget: Box<dyn Widget>,
}

impl fmt::Debug for DuplicateWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuplicateWidget")
            .field("id", &self.id)
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

//=== Members =============================================================
//
// Borrowed view handed to the focus-transfer utility. Splits the layout
// and order borrows from the rest of the container.
//
struct Members<'a, L: LayoutContainer> {
    layout: &'a mut L,
    order: &'a [WidgetId],
}

impl<L: LayoutContainer> FocusMembers for Members<'_, L> {
    fn member_ids(&self) -> &[WidgetId] {
        self.order
    }

    fn member_mut(&mut self, id: WidgetId) -> Option<&mut dyn NavigableWidget> {
        self.layout.child_mut(id)?.as_navigable_mut()
    }
}

//=== NavigableBox ========================================================

/// Layout container whose navigable children take part in directional
/// focus traversal.
///
/// # Example
///
/// ```
/// use umbra_framework::prelude::*;
///
/// let mut relations = WidgetRelations::new();
/// let mut menu = NavigableBox::vertical(NavigationConfig::default());
///
/// let play = NavigableItem::new("Play");
/// let quit = NavigableItem::new("Quit");
/// let (play_id, quit_id) = (play.id(), quit.id());
///
/// menu.add_child(&mut relations, Box::new(play)).unwrap();
/// menu.add_child(&mut relations, Box::new(quit)).unwrap();
///
/// // Nothing focused and wrap-around disabled: next does nothing.
/// assert_eq!(menu.navigate_next(), NavigationOutcome::Unchanged);
///
/// menu.focus_first();
/// assert_eq!(menu.navigate_next().focused(), Some(quit_id));
/// assert_eq!(relations.owner_of(play_id), Some(menu.id()));
/// ```
pub struct NavigableBox<L: LayoutContainer = BoxPanel> {
    id: ContainerId,
    layout: L,
    order: Vec<WidgetId>,
    has_confirmed: bool,
    config: NavigationConfig,
    input: Option<Box<dyn InputComponent<NavigationAction>>>,
    focus: Box<dyn FocusTransfer>,
}

impl NavigableBox<BoxPanel> {
    /// Empty vertical container.
    pub fn vertical(config: NavigationConfig) -> Self {
        Self::from_empty_layout(BoxPanel::vertical(), config)
    }

    /// Empty horizontal container.
    pub fn horizontal(config: NavigationConfig) -> Self {
        Self::from_empty_layout(BoxPanel::horizontal(), config)
    }
}

impl<L: LayoutContainer> NavigableBox<L> {
    //--- Construction -----------------------------------------------------

    fn from_empty_layout(layout: L, config: NavigationConfig) -> Self {
        Self {
            id: ContainerId::unique(),
            layout,
            order: Vec::new(),
            has_confirmed: false,
            config,
            input: None,
            focus: Box::new(ExclusiveFocus),
        }
    }

    /// Wraps an existing layout, adopting any navigable children it
    /// already holds in slot order.
    pub fn with_layout(layout: L, config: NavigationConfig, relations: &mut WidgetRelations) -> Self {
        let mut container = Self::from_empty_layout(layout, config);

        let adopted: Vec<WidgetId> = container
            .layout
            .slots()
            .iter()
            .filter(|slot| slot.content().as_navigable().is_some())
            .map(|slot| slot.content().id())
            .collect();

        for id in adopted {
            if container.order.contains(&id) {
                warn!("{:?}: layout holds {:?} twice, adopting the first", container.id, id);
                continue;
            }
            container.order.push(id);
            relations.set_owner(id, container.id);
        }

        container
    }

    /// Replaces the focus-transfer utility.
    pub fn with_focus_transfer(mut self, focus: Box<dyn FocusTransfer>) -> Self {
        self.focus = focus;
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable layout access for slot attributes. Adding or removing
    /// children must go through the container so navigation stays in sync.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.layout.slot_mut(index)
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect for key sets on the next
    /// `bind_inputs`, for wrap-around immediately.
    pub fn set_config(&mut self, config: NavigationConfig) {
        self.config = config;
    }

    pub fn set_wrap_around(&mut self, enabled: bool) {
        self.config.wrap_around = enabled;
    }

    /// Ids of navigable children in navigation order.
    pub fn navigable_ids(&self) -> &[WidgetId] {
        &self.order
    }

    /// Editor palette category this container is listed under.
    pub fn palette_category(&self) -> &'static str {
        PALETTE_CATEGORY
    }

    //--- Children ---------------------------------------------------------

    /// Appends `widget` in a new slot. Navigable widgets join the end of
    /// the navigation order and are recorded as owned by this container.
    ///
    /// Returns the slot index. A widget whose id already occupies a slot
    /// is handed back in the error.
    pub fn add_child(
        &mut self,
        relations: &mut WidgetRelations,
        widget: Box<dyn Widget>,
    ) -> Result<usize, DuplicateWidget> {
        let widget = self.check_unique(widget)?;
        let index = self.layout.add_child(widget);
        self.on_slot_added(relations, index);
        Ok(index)
    }

    /// Inserts `widget` at slot `index` (clamped). A navigable widget is
    /// placed in the navigation order after every navigable child in an
    /// earlier slot.
    pub fn insert_child_at(
        &mut self,
        relations: &mut WidgetRelations,
        index: usize,
        widget: Box<dyn Widget>,
    ) -> Result<usize, DuplicateWidget> {
        let widget = self.check_unique(widget)?;
        let index = self.layout.insert_child_at(index, widget);
        self.on_slot_added(relations, index);
        Ok(index)
    }

    fn check_unique(&self, widget: Box<dyn Widget>) -> Result<Box<dyn Widget>, DuplicateWidget> {
        let id = widget.id();
        if self.layout.slot_index_of(id).is_some() {
            warn!("{:?}: refused duplicate child {:?}", self.id, id);
            return Err(DuplicateWidget {
                id,
                container: self.id,
                widget,
            });
        }
        Ok(widget)
    }

    /// Removes the child with `id` from its slot and from the navigation
    /// order, clearing its owner. Returns the widget.
    pub fn remove_child(
        &mut self,
        relations: &mut WidgetRelations,
        id: WidgetId,
    ) -> Option<Box<dyn Widget>> {
        let widget = self.layout.remove_child(id)?;

        if widget.as_navigable().is_some() {
            self.order.retain(|&member| member != id);
            relations.clear_owner(id);
            debug!("{:?}: removed navigable {:?}", self.id, id);
        }

        Some(widget)
    }

    fn on_slot_added(&mut self, relations: &mut WidgetRelations, slot_index: usize) {
        let Some(slot) = self.layout.slots().get(slot_index) else {
            return;
        };
        let content = slot.content();
        if content.as_navigable().is_none() {
            return;
        }
        let id = content.id();

        let position = self
            .layout
            .slots()
            .iter()
            .take(slot_index)
            .filter(|s| s.content().as_navigable().is_some())
            .count();

        self.order.insert(position, id);
        relations.set_owner(id, self.id);
        debug!("{:?}: added navigable {:?} at {}", self.id, id, position);
    }

    //--- Input Component --------------------------------------------------

    /// Attaches an input-handling capability, returning the previous one.
    pub fn attach_input_component(
        &mut self,
        component: Box<dyn InputComponent<NavigationAction>>,
    ) -> Option<Box<dyn InputComponent<NavigationAction>>> {
        self.input.replace(component)
    }

    pub fn detach_input_component(&mut self) -> Option<Box<dyn InputComponent<NavigationAction>>> {
        self.input.take()
    }

    pub fn has_input_component(&self) -> bool {
        self.input.is_some()
    }

    /// Binds configured keys on the attached input component.
    ///
    /// - next / previous keys: pressed + repeat
    /// - confirm keys: pressed only
    ///
    /// Returns the number of bindings made; zero without a component.
    pub fn bind_inputs(&mut self) -> usize {
        let Some(input) = self.input.as_mut() else {
            debug!("{:?}: no input component, skipping bind", self.id);
            return 0;
        };

        let mut bound = 0;

        for &mapping in &self.config.next_keys {
            input.bind_key(mapping, InputPhase::Pressed, NavigationAction::Next);
            input.bind_key(mapping, InputPhase::Repeat, NavigationAction::Next);
            bound += 2;
        }

        for &mapping in &self.config.previous_keys {
            input.bind_key(mapping, InputPhase::Pressed, NavigationAction::Previous);
            input.bind_key(mapping, InputPhase::Repeat, NavigationAction::Previous);
            bound += 2;
        }

        for &mapping in &self.config.confirm_keys {
            input.bind_key(mapping, InputPhase::Pressed, NavigationAction::Confirm);
            bound += 1;
        }

        info!("{:?}: bound {} navigation inputs", self.id, bound);
        bound
    }

    /// Clears every action binding on the attached input component.
    pub fn unbind_inputs(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.clear_action_bindings();
            info!("{:?}: navigation inputs cleared", self.id);
        }
    }

    /// Resolves `event` through the input component and runs the bound
    /// handler.
    pub fn handle_input(&mut self, event: &InputEvent) -> NavigationOutcome {
        let action = match self.input.as_ref() {
            Some(input) => input.resolve(event),
            None => None,
        };

        match action {
            Some(NavigationAction::Next) => self.navigate_next(),
            Some(NavigationAction::Previous) => self.navigate_previous(),
            Some(NavigationAction::Confirm) => self.confirm(),
            None => NavigationOutcome::Unbound,
        }
    }

    //--- Handlers ---------------------------------------------------------

    /// Moves focus to the successor of the first focused widget that has
    /// one; otherwise wraps to the first widget if wrap-around is enabled.
    pub fn navigate_next(&mut self) -> NavigationOutcome {
        if self.has_confirmed {
            return NavigationOutcome::Blocked;
        }
        if self.order.is_empty() {
            return NavigationOutcome::Empty;
        }

        let len = self.order.len();
        let step = (0..len).find(|&i| i + 1 < len && self.is_member_focused(self.order[i]));

        if let Some(i) = step {
            let (from, to) = (self.order[i], self.order[i + 1]);
            return self.transfer(to, NavigationOutcome::Moved { from, to });
        }

        if self.config.wrap_around {
            let to = self.order[0];
            let from = self.focused_widget_id();
            return self.transfer(to, NavigationOutcome::Wrapped { from, to });
        }

        NavigationOutcome::Unchanged
    }

    /// Moves focus to the predecessor of the first focused widget that has
    /// one; otherwise wraps to the last widget if wrap-around is enabled.
    pub fn navigate_previous(&mut self) -> NavigationOutcome {
        if self.has_confirmed {
            return NavigationOutcome::Blocked;
        }
        if self.order.is_empty() {
            return NavigationOutcome::Empty;
        }

        let len = self.order.len();
        let step = (1..len).find(|&i| self.is_member_focused(self.order[i]));

        if let Some(i) = step {
            let (from, to) = (self.order[i], self.order[i - 1]);
            return self.transfer(to, NavigationOutcome::Moved { from, to });
        }

        if self.config.wrap_around {
            let to = self.order[len - 1];
            let from = self.focused_widget_id();
            return self.transfer(to, NavigationOutcome::Wrapped { from, to });
        }

        NavigationOutcome::Unchanged
    }

    /// Sets the confirmation latch and confirms the focused widget.
    pub fn confirm(&mut self) -> NavigationOutcome {
        let Some(id) = self.focused_widget_id() else {
            return NavigationOutcome::Unchanged;
        };

        self.has_confirmed = true;
        if let Some(widget) = self.member_mut(id) {
            widget.confirm_state();
        }

        info!("{:?}: confirmed {:?}", self.id, id);
        NavigationOutcome::Confirmed(id)
    }

    /// Clears the confirmation latch so navigation resumes.
    pub fn reset_confirmation(&mut self) {
        if self.has_confirmed {
            debug!("{:?}: confirmation reset", self.id);
        }
        self.has_confirmed = false;
    }

    pub fn has_confirmed(&self) -> bool {
        self.has_confirmed
    }

    /// Focuses the first navigable widget. `Empty` if there is none.
    ///
    /// Ignores the confirmation latch: this is the entry point hosts use
    /// when the container is first shown.
    pub fn focus_first(&mut self) -> NavigationOutcome {
        let Some(&to) = self.order.first() else {
            return NavigationOutcome::Empty;
        };
        let from = self.focused_widget_id();
        match from {
            Some(from) if from == to => NavigationOutcome::Unchanged,
            Some(from) => self.transfer(to, NavigationOutcome::Moved { from, to }),
            None => self.transfer(to, NavigationOutcome::Focused(to)),
        }
    }

    /// Calls `lose_focus` on every navigable child.
    pub fn unfocus_all(&mut self) {
        for index in 0..self.order.len() {
            let id = self.order[index];
            if let Some(widget) = self.member_mut(id) {
                widget.lose_focus();
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// First navigable child whose focus flag is set.
    pub fn focused_widget(&self) -> Option<&dyn NavigableWidget> {
        self.order
            .iter()
            .filter_map(|&id| self.member(id))
            .find(|widget| widget.is_focused())
    }

    pub fn focused_widget_id(&self) -> Option<WidgetId> {
        self.focused_widget().map(|widget| widget.id())
    }

    /// First navigable child, or `None` when there are none.
    pub fn first_widget(&self) -> Option<&dyn NavigableWidget> {
        self.order.first().and_then(|&id| self.member(id))
    }

    pub fn has_navigable_widgets(&self) -> bool {
        !self.order.is_empty()
    }

    pub fn navigable(&self, id: WidgetId) -> Option<&dyn NavigableWidget> {
        if self.order.contains(&id) {
            self.member(id)
        } else {
            None
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn member(&self, id: WidgetId) -> Option<&dyn NavigableWidget> {
        self.layout.child(id)?.as_navigable()
    }

    fn member_mut(&mut self, id: WidgetId) -> Option<&mut dyn NavigableWidget> {
        self.layout.child_mut(id)?.as_navigable_mut()
    }

    fn is_member_focused(&self, id: WidgetId) -> bool {
        self.member(id).is_some_and(|widget| widget.is_focused())
    }

    fn transfer(&mut self, target: WidgetId, outcome: NavigationOutcome) -> NavigationOutcome {
        let mut members = Members {
            layout: &mut self.layout,
            order: &self.order,
        };

        if self.focus.transfer_focus(self.id, &mut members, target) {
            outcome
        } else {
            warn!("{:?}: focus transfer to {:?} refused", self.id, target);
            NavigationOutcome::Unchanged
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
