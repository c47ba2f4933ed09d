// bubble-tabbar/src/widgets/bubble_tabbar/selection.rs
use crate::MenuItemId;

/// Which bubble the bar considers active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    None,
    Selected { index: usize, id: MenuItemId },
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Selected { index, .. } => Some(*index),
        }
    }

    pub fn id(&self) -> Option<MenuItemId> {
        match self {
            Selection::None => None,
            Selection::Selected { id, .. } => Some(*id),
        }
    }
}

/// How a selection request reached the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Direct user interaction. Only honored when the bubble accepts taps,
    /// and always notifies.
    Tap { accepts_tap: bool },
    /// `set_selected` / `set_selected_with_id`. Bypasses the checkable gate.
    Programmatic { call_listener: bool },
}

/// Effects of one selection request, to be applied to the bubbles in order:
/// clear `deselect`, flip `toggle`, store `selection`, then notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub selection: Selection,
    /// Index of a bubble whose `selected` flag is negated.
    pub toggle: Option<usize>,
    /// Index of a bubble whose `selected` flag is forced off.
    pub deselect: Option<usize>,
    /// Id to hand to the listener, if any.
    pub notify: Option<MenuItemId>,
}

impl SelectionOutcome {
    fn unchanged(current: Selection) -> Self {
        Self {
            selection: current,
            toggle: None,
            deselect: None,
            notify: None,
        }
    }
}

/// Selection transition rule.
///
/// Flags only move when the selection switches to a bubble with a different
/// id: the target's flag is negated and the previous bubble is cleared. The
/// first selection and re-selecting the current id leave every flag alone but
/// still move the selection and still notify.
pub fn transition(
    current: Selection,
    target_index: usize,
    target_id: MenuItemId,
    source: SelectionSource,
) -> SelectionOutcome {
    let call_listener = match source {
        SelectionSource::Tap { accepts_tap: false } => return SelectionOutcome::unchanged(current),
        SelectionSource::Tap { accepts_tap: true } => true,
        SelectionSource::Programmatic { call_listener } => call_listener,
    };

    let (toggle, deselect) = match current {
        Selection::Selected { index, id } if id != target_id => (Some(target_index), Some(index)),
        _ => (None, None),
    };

    SelectionOutcome {
        selection: Selection::Selected {
            index: target_index,
            id: target_id,
        },
        toggle,
        deselect,
        notify: call_listener.then_some(target_id),
    }
}
