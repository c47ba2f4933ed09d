// bubble-tabbar/src/widgets/bubble_tabbar/tabbar_config.rs
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::{BubbleTabBarError, FontStyle, MenuItemModel, MenuResource, error::Result, tui_theme};

/// Shared styling of a [`crate::BubbleTabBar`], read once at construction.
///
/// Sizes are in terminal cells. Every field has a default, so a config file
/// only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleTabBarConfig {
    /// Menu to load when the bar is built.
    pub menu_resource: Option<PathBuf>,
    /// Icon color of unselected and disabled bubbles.
    pub disabled_icon_color: Color,
    pub custom_font: FontStyle,
    /// Gap between icon and title.
    pub icon_padding: u16,
    pub horizontal_padding: u16,
    pub vertical_padding: u16,
    /// Minimum cells reserved for the icon.
    pub icon_size: u16,
    /// Maximum title width; `0` leaves titles whole.
    pub title_size: u16,
    /// Any non-zero radius draws rounded caps.
    pub corner_radius: u16,
    pub bubble_color: Color,
    pub selected_item_text_color: Color,
    pub selected_item_icon_color: Color,
    /// Opacity of the bubble color over the bar background.
    pub bubble_alpha: f32,
    pub background_color: Color,
}

impl Default for BubbleTabBarConfig {
    fn default() -> Self {
        Self {
            menu_resource: None,
            disabled_icon_color: tui_theme::DISABLED_ICON_DEFAULT,
            custom_font: FontStyle::REGULAR,
            icon_padding: 1,
            horizontal_padding: 2,
            vertical_padding: 0,
            icon_size: 1,
            title_size: 0,
            corner_radius: 1,
            bubble_color: tui_theme::BUBBLE_DEFAULT,
            selected_item_text_color: tui_theme::SELECTED_TEXT_DEFAULT,
            selected_item_icon_color: tui_theme::SELECTED_ICON_DEFAULT,
            bubble_alpha: tui_theme::BUBBLE_ALPHA_DEFAULT,
            background_color: tui_theme::BAR_BG_DEFAULT,
        }
    }
}

impl BubbleTabBarConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(BubbleTabBarError::ConfigSyntax)
    }

    /// Load a config file. A relative `menu_resource` is resolved against the
    /// directory holding the config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BubbleTabBarError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json_str(&text)?;
        if let Some(menu) = config.menu_resource.take() {
            config.menu_resource = Some(match path.parent() {
                Some(dir) if menu.is_relative() => dir.join(menu),
                _ => menu,
            });
        }
        Ok(config)
    }

    pub fn with_menu_resource(mut self, path: impl Into<PathBuf>) -> Self {
        self.menu_resource = Some(path.into());
        self
    }

    pub fn menu(&self) -> Option<MenuResource> {
        self.menu_resource.clone().map(MenuResource::File)
    }

    /// Overwrite the styling fields of `model` with the bar's values.
    pub fn apply_to(&self, model: &mut MenuItemModel) {
        model.horizontal_padding = self.horizontal_padding;
        model.vertical_padding = self.vertical_padding;
        model.icon_size = self.icon_size;
        model.icon_padding = self.icon_padding;
        model.custom_font = self.custom_font;
        model.disabled_icon_color = self.disabled_icon_color;
        model.title_size = self.title_size;
        model.corner_radius = self.corner_radius;
        model.bubble_color = self.bubble_color;
        model.bubble_alpha = self.bubble_alpha;
        model.selected_item_text_color = self.selected_item_text_color;
        model.selected_item_icon_color = self.selected_item_icon_color;
    }
}
