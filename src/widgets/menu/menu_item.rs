// bubble-tabbar/src/widgets/menu/menu_item.rs
use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::{FontStyle, tui_theme};

/// Identifier of a menu entry and of the bubble built from it. `0` is reserved
/// for "no id" and rejected when a bar is built.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl MenuItemId {
    pub const UNSET: MenuItemId = MenuItemId(0);

    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for MenuItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of a menu resource.
///
/// The styling fields may be declared per item, but a [`crate::BubbleTabBar`]
/// overwrites them with its own shared styling before building the bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemModel {
    pub id: MenuItemId,
    pub title: String,
    pub icon: String,
    pub icon_color: Option<Color>,
    pub enabled: bool,
    pub checkable: bool,
    pub checked: bool,

    pub horizontal_padding: u16,
    pub vertical_padding: u16,
    pub icon_size: u16,
    pub icon_padding: u16,
    pub title_size: u16,
    pub corner_radius: u16,
    pub custom_font: FontStyle,
    pub disabled_icon_color: Color,
    pub bubble_color: Color,
    pub bubble_alpha: f32,
    pub selected_item_text_color: Color,
    pub selected_item_icon_color: Color,
}

impl Default for MenuItemModel {
    fn default() -> Self {
        Self {
            id: MenuItemId::UNSET,
            title: String::new(),
            icon: String::new(),
            icon_color: None,
            enabled: true,
            checkable: false,
            checked: false,
            horizontal_padding: 0,
            vertical_padding: 0,
            icon_size: 0,
            icon_padding: 0,
            title_size: 0,
            corner_radius: 0,
            custom_font: FontStyle::REGULAR,
            disabled_icon_color: tui_theme::DISABLED_ICON_DEFAULT,
            bubble_color: tui_theme::BUBBLE_DEFAULT,
            bubble_alpha: tui_theme::BUBBLE_ALPHA_DEFAULT,
            selected_item_text_color: tui_theme::SELECTED_TEXT_DEFAULT,
            selected_item_icon_color: tui_theme::SELECTED_ICON_DEFAULT,
        }
    }
}

impl MenuItemModel {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id: MenuItemId(id),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    pub fn checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
