// bubble-tabbar/src/nav/nav_host.rs
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tracing::debug;

use crate::{BubbleTabBar, MenuItemId, NavController, NavDestination};

/// Keeps a [`BubbleTabBar`] and a [`NavController`] in step.
///
/// Bubble clicks request navigation; destination changes are mirrored into
/// the bar with `set_selected_with_id(id, false)` so the bar never asks to
/// navigate again. Both directions are queued and settled by [`NavHost::pump`].
#[derive(Debug)]
pub struct NavHost {
    bar: BubbleTabBar,
    nav: NavController,
    clicks: UnboundedReceiver<MenuItemId>,
    changes: UnboundedReceiver<MenuItemId>,
}

impl NavHost {
    pub fn new(mut bar: BubbleTabBar, mut nav: NavController) -> Self {
        let (click_tx, clicks) = unbounded_channel();
        bar.add_bubble_listener(move |id: MenuItemId| {
            let _ = click_tx.send(id);
        });

        let (change_tx, changes) = unbounded_channel();
        nav.add_on_destination_changed_listener(move |dest: &NavDestination| {
            let _ = change_tx.send(dest.id);
        });

        let mut host = Self {
            bar,
            nav,
            clicks,
            changes,
        };
        host.pump();
        host
    }

    /// Settle queued clicks and destination changes. Returns the number of
    /// clicks routed to navigation.
    pub fn pump(&mut self) -> usize {
        let mut routed = 0;
        loop {
            let mut progressed = false;
            while let Ok(id) = self.clicks.try_recv() {
                if !self.nav.navigate(id) {
                    debug!("bubble {id} has no destination");
                }
                routed += 1;
                progressed = true;
            }
            while let Ok(id) = self.changes.try_recv() {
                self.bar.set_selected_with_id(id, false);
                progressed = true;
            }
            if !progressed {
                return routed;
            }
        }
    }

    /// Navigate up and reflect the result in the bar.
    pub fn pop_back(&mut self) -> bool {
        let popped = self.nav.pop_back();
        self.pump();
        popped
    }

    pub fn bar(&self) -> &BubbleTabBar {
        &self.bar
    }

    /// Mutable access for input handling; call [`NavHost::pump`] afterwards.
    pub fn bar_mut(&mut self) -> &mut BubbleTabBar {
        &mut self.bar
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BubbleTabBarConfig, MenuResource, SelectableItem};

    fn host(start: u32) -> NavHost {
        let bar = BubbleTabBar::with_menu(
            BubbleTabBarConfig::default(),
            &MenuResource::Json(
                r#"[
                    { "id": 1, "title": "Home", "checkable": true, "checked": true },
                    { "id": 2, "title": "Log", "checkable": true },
                    { "id": 3, "title": "Profile", "checkable": true },
                    { "id": 4, "title": "Orphan", "checkable": true }
                ]"#
                .into(),
            ),
        )
        .unwrap();
        let nav = NavController::new(
            vec![
                NavDestination::new(1, "Home"),
                NavDestination::new(2, "Log"),
                NavDestination::new(3, "Profile"),
            ],
            MenuItemId(start),
        )
        .unwrap();
        NavHost::new(bar, nav)
    }

    fn flags(host: &NavHost) -> Vec<bool> {
        host.bar().bubbles().iter().map(|b| b.is_selected()).collect()
    }

    #[test]
    fn start_destination_is_reflected_in_bar() {
        let host = host(3);
        assert_eq!(host.bar().selected_id(), Some(MenuItemId(3)));
        assert_eq!(flags(&host), vec![false, false, true, false]);
    }

    #[test]
    fn tap_navigates() {
        let mut host = host(1);
        assert!(host.bar_mut().tap(1));
        assert_eq!(host.pump(), 1);
        assert_eq!(host.nav().current().id, MenuItemId(2));
        assert_eq!(host.bar().selected_id(), Some(MenuItemId(2)));
        assert_eq!(flags(&host), vec![false, true, false, false]);
    }

    #[test]
    fn back_navigation_syncs_bar_without_new_clicks() {
        let mut host = host(1);
        host.bar_mut().tap(2);
        host.pump();
        assert!(host.pop_back());
        assert_eq!(host.nav().current().id, MenuItemId(1));
        assert_eq!(host.bar().selected_id(), Some(MenuItemId(1)));
        assert_eq!(flags(&host), vec![true, false, false, false]);
        assert_eq!(host.pump(), 0);
    }

    #[test]
    fn click_without_destination_leaves_navigation_alone() {
        let mut host = host(1);
        host.bar_mut().tap(3);
        assert_eq!(host.pump(), 1);
        assert_eq!(host.nav().current().id, MenuItemId(1));
        assert_eq!(host.bar().selected_id(), Some(MenuItemId(4)));
    }
}
