// bubble-tabbar/src/widgets/bubble_tabbar/tabbar_widget.rs

use std::collections::HashMap;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
};
use tracing::{debug, trace, warn};

use crate::{
    Bubble, BubbleTabBarConfig, BubbleTabBarError, MenuItemId, MenuParser, MenuResource,
    RenderContext, SelectableItem, Selection, SelectionSource, TuiWidget, error::Result,
    transition,
};

/// Receives the id of a bubble whenever a selection request asks to notify.
pub trait BubbleClickListener: Send + Sync {
    fn on_bubble_click(&self, id: MenuItemId);
}

impl<F> BubbleClickListener for F
where
    F: Fn(MenuItemId) + Send + Sync,
{
    fn on_bubble_click(&self, id: MenuItemId) {
        self(id)
    }
}

/// A row of bubbles with single selection.
///
/// Bubbles come from a menu resource and are restyled with the bar's
/// [`BubbleTabBarConfig`]. Selection changes arrive from user taps (mouse
/// clicks, Enter/Space on the keyboard cursor, digit shortcuts) or from
/// [`BubbleTabBar::set_selected`] and [`BubbleTabBar::set_selected_with_id`];
/// all of them go through [`transition`].
pub struct BubbleTabBar {
    config: BubbleTabBarConfig,
    context: RenderContext,
    bubbles: Vec<Bubble>,
    selection: Selection,
    listener: Option<Box<dyn BubbleClickListener>>,

    /* runtime */
    cursor: usize,
    slots: Vec<Rect>,
    is_focused: bool,
    redraw_requested: bool,
}

impl std::fmt::Debug for BubbleTabBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BubbleTabBar")
            .field("config", &self.config)
            .field("bubbles", &self.bubbles)
            .field("selection", &self.selection)
            .field("listener", &self.listener.is_some())
            .field("cursor", &self.cursor)
            .field("is_focused", &self.is_focused)
            .finish()
    }
}

impl BubbleTabBar {
    /// Build a bar, loading `config.menu_resource` when it is set.
    pub fn new(config: BubbleTabBarConfig) -> Result<Self> {
        let menu = config.menu();
        let mut bar = Self {
            context: RenderContext {
                background: config.background_color,
            },
            config,
            bubbles: Vec::new(),
            selection: Selection::None,
            listener: None,
            cursor: 0,
            slots: Vec::new(),
            is_focused: false,
            redraw_requested: true,
        };
        if let Some(menu) = menu {
            bar.set_menu_resource(&menu)?;
        }
        Ok(bar)
    }

    /// Build a bar from an explicit menu, ignoring `config.menu_resource`.
    pub fn with_menu(config: BubbleTabBarConfig, menu: &MenuResource) -> Result<Self> {
        let mut bar = Self::new(BubbleTabBarConfig {
            menu_resource: None,
            ..config
        })?;
        bar.set_menu_resource(menu)?;
        Ok(bar)
    }

    /// Replace every bubble with the ones described by `menu`.
    ///
    /// An entry without an id, or reusing an earlier entry's id, fails the
    /// whole load before any bubble is built; the previous bubbles stay in
    /// place.
    pub fn set_menu_resource(&mut self, menu: &MenuResource) -> Result<()> {
        let models = MenuParser::parse(menu)?;
        if let Some((position, model)) = models.iter().find_position(|m| m.id.is_unset()) {
            warn!("rejecting menu: item #{position} ({:?}) has no id", model.title);
            return Err(BubbleTabBarError::InvalidMenuDefinition {
                position,
                title: model.title.clone(),
            });
        }
        let mut seen: HashMap<MenuItemId, usize> = HashMap::with_capacity(models.len());
        for (position, model) in models.iter().enumerate() {
            if let Some(&first) = seen.get(&model.id) {
                warn!("rejecting menu: item #{position} reuses id {}", model.id);
                return Err(BubbleTabBarError::DuplicateMenuId {
                    position,
                    first,
                    id: model.id,
                });
            }
            seen.insert(model.id, position);
        }

        let mut bubbles: Vec<Bubble> = Vec::with_capacity(models.len());
        let mut selection = Selection::None;
        for (index, mut model) in models.into_iter().enumerate() {
            self.config.apply_to(&mut model);
            debug!(id = %model.id, title = %model.title, "styled menu item");

            let checked = model.checked;
            let mut bubble = Bubble::new(&self.context, model);
            if checked {
                // last checked entry wins
                if let Some(prev) = selection.index() {
                    bubbles[prev].set_selected(false);
                }
                bubble.set_selected(true);
                selection = Selection::Selected {
                    index,
                    id: bubble.id(),
                };
            }
            bubbles.push(bubble);
        }

        self.bubbles = bubbles;
        self.selection = selection;
        self.cursor = selection.index().unwrap_or(0);
        self.slots.clear();
        self.redraw_requested = true;
        Ok(())
    }

    /// Register the listener, replacing any previous one.
    pub fn add_bubble_listener(&mut self, listener: impl BubbleClickListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Select the bubble at `position`, whether or not it is checkable.
    pub fn set_selected(&mut self, position: usize, call_listener: bool) -> Result<()> {
        let id = self
            .bubbles
            .get(position)
            .map(|b| b.id())
            .ok_or(BubbleTabBarError::PositionOutOfRange {
                position,
                len: self.bubbles.len(),
            })?;
        self.apply(position, id, SelectionSource::Programmatic { call_listener });
        Ok(())
    }

    /// Select the bubble carrying `id`. Unknown ids are ignored.
    pub fn set_selected_with_id(&mut self, id: MenuItemId, call_listener: bool) {
        match self.position_of(id) {
            Some(index) => self.apply(index, id, SelectionSource::Programmatic { call_listener }),
            None => trace!("no bubble with id {id}"),
        }
    }

    /// User interaction with the bubble at `index`. Returns whether the tap
    /// was honored.
    pub fn tap(&mut self, index: usize) -> bool {
        let Some(bubble) = self.bubbles.get(index) else {
            return false;
        };
        let (id, accepts_tap) = (bubble.id(), bubble.accepts_tap());
        self.cursor = index;
        self.redraw_requested = true;
        self.apply(index, id, SelectionSource::Tap { accepts_tap });
        accepts_tap
    }

    fn apply(&mut self, index: usize, id: MenuItemId, source: SelectionSource) {
        let outcome = transition(self.selection, index, id, source);
        trace!(?source, ?outcome, "selection request");

        if let Some(bubble) = outcome.toggle.and_then(|i| self.bubbles.get_mut(i)) {
            bubble.set_selected(!bubble.is_selected());
        }
        if let Some(bubble) = outcome.deselect.and_then(|i| self.bubbles.get_mut(i)) {
            bubble.set_selected(false);
        }
        if outcome.selection != self.selection {
            self.selection = outcome.selection;
            self.cursor = index;
            self.redraw_requested = true;
        }

        if let (Some(id), Some(listener)) = (outcome.notify, &self.listener) {
            listener.on_bubble_click(id);
        }
    }

    pub fn position_of(&self, id: MenuItemId) -> Option<usize> {
        self.bubbles.iter().position(|b| b.id() == id)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_id(&self) -> Option<MenuItemId> {
        self.selection.id()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn bubble(&self, index: usize) -> Option<&Bubble> {
        self.bubbles.get(index)
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Number of bubbles whose flag is set; never more than one.
    pub fn selected_count(&self) -> usize {
        self.bubbles.iter().filter(|b| b.is_selected()).count()
    }

    pub fn config(&self) -> &BubbleTabBarConfig {
        &self.config
    }

    /// Index of the bubble under the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rows the bar needs to draw its tallest bubble.
    pub fn height(&self) -> u16 {
        self.bubbles.iter().map(|b| b.height()).max().unwrap_or(1)
    }

    pub fn next_bubble(&mut self) {
        if !self.bubbles.is_empty() {
            self.cursor = (self.cursor + 1) % self.bubbles.len();
            self.redraw_requested = true;
        }
    }

    pub fn prev_bubble(&mut self) {
        if !self.bubbles.is_empty() {
            self.cursor = self
                .cursor
                .checked_sub(1)
                .unwrap_or(self.bubbles.len() - 1);
            self.redraw_requested = true;
        }
    }

    fn slot_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.slots.iter().position(|slot| slot.contains(position))
    }
}

impl TuiWidget for BubbleTabBar {
    fn need_draw(&self) -> bool {
        self.redraw_requested
    }

    fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        if self.bubbles.is_empty() {
            self.slots.clear();
            self.redraw_requested = false;
            return;
        }
        if self.config.background_color != Color::Reset {
            buf.set_style(area, Style::default().bg(self.config.background_color));
        }
        self.slots = Layout::horizontal(self.bubbles.iter().map(|_| Constraint::Fill(1)))
            .split(area)
            .to_vec();

        for (i, (bubble, slot)) in self.bubbles.iter().zip(&self.slots).enumerate() {
            bubble.render(*slot, buf);
            if self.is_focused && i == self.cursor {
                buf.set_style(
                    bubble.bounds(*slot),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                );
            }
        }
        self.redraw_requested = false;
    }

    fn key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Left => self.prev_bubble(),
            KeyCode::Right => self.next_bubble(),
            KeyCode::Home => {
                self.cursor = 0;
                self.redraw_requested = true;
            }
            KeyCode::End => {
                self.cursor = self.bubbles.len().saturating_sub(1);
                self.redraw_requested = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.tap(self.cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                if idx >= self.bubbles.len() {
                    return false;
                }
                self.tap(idx);
            }
            _ => return false,
        }
        true
    }

    fn mouse_event(&mut self, event: MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match self.slot_at(event.column, event.row) {
            Some(index) => {
                self.tap(index);
                true
            }
            None => false,
        }
    }

    fn focus(&mut self) {
        self.is_focused = true;
        self.redraw_requested = true;
    }

    fn unfocus(&mut self) {
        self.is_focused = false;
        self.redraw_requested = true;
    }

    fn is_focused(&self) -> bool {
        self.is_focused
    }
}
