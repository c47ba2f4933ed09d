// bubble-tabbar/src/nav/nav_controller.rs
use tracing::debug;

use crate::{BubbleTabBarError, MenuItemId, error::Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDestination {
    pub id: MenuItemId,
    pub label: String,
}

impl NavDestination {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: MenuItemId(id),
            label: label.into(),
        }
    }
}

type DestinationListener = Box<dyn Fn(&NavDestination) + Send + Sync>;

/// Minimal in-memory navigation graph with a back stack.
///
/// Top-level navigation follows the bottom-bar convention: selecting a
/// destination pops everything above the start destination, then pushes the
/// new one, and selecting the current destination again does nothing.
pub struct NavController {
    destinations: Vec<NavDestination>,
    start: usize,
    back_stack: Vec<usize>,
    listeners: Vec<DestinationListener>,
}

impl std::fmt::Debug for NavController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavController")
            .field("destinations", &self.destinations)
            .field("start", &self.start)
            .field("back_stack", &self.back_stack)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl NavController {
    pub fn new(destinations: Vec<NavDestination>, start: MenuItemId) -> Result<Self> {
        let start = destinations
            .iter()
            .position(|d| d.id == start)
            .ok_or(BubbleTabBarError::UnknownDestination(start))?;
        Ok(Self {
            destinations,
            start,
            back_stack: vec![start],
            listeners: Vec::new(),
        })
    }

    /// Register a destination-changed listener. It is called right away with
    /// the current destination.
    pub fn add_on_destination_changed_listener<F>(&mut self, listener: F)
    where
        F: Fn(&NavDestination) + Send + Sync + 'static,
    {
        listener(self.current());
        self.listeners.push(Box::new(listener));
    }

    pub fn current(&self) -> &NavDestination {
        // the back stack never drops below the start destination
        let top = self.back_stack.last().copied().unwrap_or(self.start);
        &self.destinations[top]
    }

    pub fn destination(&self, id: MenuItemId) -> Option<&NavDestination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn destinations(&self) -> &[NavDestination] {
        &self.destinations
    }

    pub fn back_stack(&self) -> Vec<MenuItemId> {
        self.back_stack
            .iter()
            .map(|&i| self.destinations[i].id)
            .collect()
    }

    /// Navigate to a top-level destination. Returns false when the graph
    /// has no such destination.
    pub fn navigate(&mut self, id: MenuItemId) -> bool {
        let Some(target) = self.destinations.iter().position(|d| d.id == id) else {
            debug!("no destination {id} in navigation graph");
            return false;
        };
        if self.back_stack.last() == Some(&target) {
            return true;
        }
        self.back_stack.truncate(1);
        if target != self.start {
            self.back_stack.push(target);
        }
        self.notify();
        true
    }

    /// Pop the top destination. Returns false at the start destination.
    pub fn pop_back(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            return false;
        }
        self.back_stack.pop();
        self.notify();
        true
    }

    fn notify(&self) {
        let current = self.current();
        debug!(id = %current.id, label = %current.label, "destination changed");
        for listener in &self.listeners {
            listener(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn graph() -> NavController {
        NavController::new(
            vec![
                NavDestination::new(1, "Home"),
                NavDestination::new(2, "Log"),
                NavDestination::new(3, "Profile"),
            ],
            MenuItemId(1),
        )
        .unwrap()
    }

    fn ids(stack: Vec<MenuItemId>) -> Vec<u32> {
        stack.into_iter().map(|id| id.0).collect()
    }

    #[test]
    fn unknown_start_is_rejected() {
        let err = NavController::new(vec![NavDestination::new(1, "Home")], MenuItemId(9))
            .unwrap_err();
        assert!(matches!(err, BubbleTabBarError::UnknownDestination(MenuItemId(9))));
    }

    #[test]
    fn top_level_navigation_keeps_start_below() {
        let mut nav = graph();
        assert!(nav.navigate(MenuItemId(2)));
        assert!(nav.navigate(MenuItemId(3)));
        assert_eq!(ids(nav.back_stack()), vec![1, 3]);
        assert_eq!(nav.current().label, "Profile");

        assert!(nav.navigate(MenuItemId(1)));
        assert_eq!(ids(nav.back_stack()), vec![1]);
    }

    #[test]
    fn unknown_destination_is_refused() {
        let mut nav = graph();
        assert!(!nav.navigate(MenuItemId(42)));
        assert_eq!(ids(nav.back_stack()), vec![1]);
    }

    #[test]
    fn pop_back_stops_at_start() {
        let mut nav = graph();
        nav.navigate(MenuItemId(2));
        assert!(nav.pop_back());
        assert_eq!(nav.current().id, MenuItemId(1));
        assert!(!nav.pop_back());
    }

    #[test]
    fn listeners_see_registration_and_changes_only() {
        let mut nav = graph();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        nav.add_on_destination_changed_listener(move |d: &NavDestination| {
            sink.lock().unwrap().push(d.id.0)
        });

        nav.navigate(MenuItemId(2));
        nav.navigate(MenuItemId(2));
        nav.pop_back();
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1]);
    }
}
