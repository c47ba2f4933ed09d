// bubble-tabbar/src/widgets/bubble/bubble_widget.rs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{FontStyle, MenuItemId, MenuItemModel, tui_theme};

/// What a bubble needs to know about the surface it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Background the bubble color is blended over.
    pub background: Color,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            background: tui_theme::BAR_BG_DEFAULT,
        }
    }
}

/// A selectable child of a tab bar.
pub trait SelectableItem {
    fn id(&self) -> MenuItemId;
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
    /// Whether a direct user tap is allowed to select this item.
    fn accepts_tap(&self) -> bool;
    /// Width the item would like for its current state.
    fn desired_width(&self) -> u16;
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A single tab: an icon that grows into a colored bubble with its title
/// when selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    id: MenuItemId,
    title: String,
    icon: String,
    icon_color: Option<Color>,
    enabled: bool,
    checkable: bool,
    selected: bool,

    horizontal_padding: u16,
    vertical_padding: u16,
    icon_size: u16,
    icon_padding: u16,
    title_size: u16,
    corner_radius: u16,
    font: FontStyle,
    disabled_icon_color: Color,
    selected_text_color: Color,
    selected_icon_color: Color,
    bubble_bg: Color,
}

impl Bubble {
    /// Build a bubble from a styled menu item. The bubble starts unselected.
    pub fn new(ctx: &RenderContext, model: MenuItemModel) -> Self {
        Self {
            id: model.id,
            bubble_bg: tui_theme::blend(model.bubble_color, ctx.background, model.bubble_alpha),
            title: model.title,
            icon: model.icon,
            icon_color: model.icon_color,
            enabled: model.enabled,
            checkable: model.checkable,
            selected: false,
            horizontal_padding: model.horizontal_padding,
            vertical_padding: model.vertical_padding,
            icon_size: model.icon_size,
            icon_padding: model.icon_padding,
            title_size: model.title_size,
            corner_radius: model.corner_radius,
            font: model.custom_font,
            disabled_icon_color: model.disabled_icon_color,
            selected_text_color: model.selected_item_text_color,
            selected_icon_color: model.selected_item_icon_color,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    /// Background color of the bubble once blended over the bar.
    pub fn bubble_bg(&self) -> Color {
        self.bubble_bg
    }

    pub fn height(&self) -> u16 {
        self.vertical_padding.saturating_mul(2).saturating_add(1)
    }

    /// Rectangle the bubble occupies when drawn into `area`: centered, and
    /// clipped to the area.
    pub fn bounds(&self, area: Rect) -> Rect {
        let width = self.desired_width().min(area.width);
        let height = self.height().min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    fn icon_width(&self) -> u16 {
        if self.icon.is_empty() {
            0
        } else {
            cells(self.icon.width()).max(self.icon_size)
        }
    }

    // Title cut to `title_size` cells; a size of 0 leaves it whole.
    fn visible_title(&self) -> &str {
        if self.title_size == 0 {
            return &self.title;
        }
        let mut width = 0usize;
        for (i, c) in self.title.char_indices() {
            width += c.width().unwrap_or(0);
            if width > self.title_size as usize {
                return &self.title[..i];
            }
        }
        &self.title
    }

    fn unselected_icon_color(&self) -> Color {
        if self.enabled {
            self.icon_color.unwrap_or(self.disabled_icon_color)
        } else {
            self.disabled_icon_color
        }
    }
}

// Display width clamped to what a terminal coordinate can hold.
fn cells(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

impl SelectableItem for Bubble {
    fn id(&self) -> MenuItemId {
        self.id
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn accepts_tap(&self) -> bool {
        self.enabled && self.checkable
    }

    fn desired_width(&self) -> u16 {
        let icon_width = self.icon_width();
        let mut width = self.horizontal_padding.saturating_mul(2).saturating_add(icon_width);
        if self.selected {
            let title_width = cells(self.visible_title().width());
            if title_width > 0 {
                if icon_width > 0 {
                    width = width.saturating_add(self.icon_padding);
                }
                width = width.saturating_add(title_width);
            }
        }
        if self.corner_radius > 0 {
            width = width.saturating_add(2);
        }
        width
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let rect = self.bounds(area);
        let has_caps = self.corner_radius > 0 && rect.width >= 2;
        let body = if has_caps {
            Rect {
                x: rect.x + 1,
                width: rect.width - 2,
                ..rect
            }
        } else {
            rect
        };

        if self.selected {
            buf.set_style(body, Style::default().bg(self.bubble_bg));
            if has_caps {
                let cap_style = Style::default().fg(self.bubble_bg);
                for y in rect.top()..rect.bottom() {
                    buf.set_string(rect.left(), y, tui_theme::CAP_LEFT, cap_style);
                    buf.set_string(rect.right() - 1, y, tui_theme::CAP_RIGHT, cap_style);
                }
            }
        }

        let y = rect.y + rect.height / 2;
        let right = body.right();
        let mut x = body.x.saturating_add(self.horizontal_padding);
        let icon_width = self.icon_width();

        if icon_width > 0 && x < right {
            let fg = if self.selected {
                self.selected_icon_color
            } else {
                self.unselected_icon_color()
            };
            buf.set_stringn(x, y, &self.icon, (right - x) as usize, Style::default().fg(fg));
            x = x.saturating_add(icon_width);
        }

        if self.selected {
            let title = self.visible_title();
            if !title.is_empty() {
                if icon_width > 0 {
                    x = x.saturating_add(self.icon_padding);
                }
                if x < right {
                    let style = Style::default()
                        .fg(self.selected_text_color)
                        .add_modifier(self.font.modifier());
                    buf.set_stringn(x, y, title, (right - x) as usize, style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Modifier;

    use super::*;

    fn styled(model: MenuItemModel) -> MenuItemModel {
        MenuItemModel {
            horizontal_padding: 1,
            icon_size: 1,
            icon_padding: 1,
            ..model
        }
    }

    fn home() -> Bubble {
        Bubble::new(
            &RenderContext::default(),
            styled(MenuItemModel::new(1, "Home").with_icon("H").checkable(true)),
        )
    }

    #[test]
    fn starts_unselected_with_model_identity() {
        let bubble = home();
        assert_eq!(bubble.id(), MenuItemId(1));
        assert!(!bubble.is_selected());
        assert!(bubble.accepts_tap());
        assert_eq!(bubble.title(), "Home");
    }

    #[test]
    fn title_only_counts_when_selected() {
        let mut bubble = home();
        assert_eq!(bubble.desired_width(), 3);
        bubble.set_selected(true);
        assert_eq!(bubble.desired_width(), 8);
    }

    #[test]
    fn corner_radius_adds_caps() {
        let model = MenuItemModel {
            corner_radius: 2,
            ..styled(MenuItemModel::new(1, "Home").with_icon("H"))
        };
        let bubble = Bubble::new(&RenderContext::default(), model);
        assert_eq!(bubble.desired_width(), 5);
    }

    #[test]
    fn title_size_truncates() {
        let model = MenuItemModel {
            title_size: 2,
            ..styled(MenuItemModel::new(1, "Home").with_icon("H"))
        };
        let mut bubble = Bubble::new(&RenderContext::default(), model);
        bubble.set_selected(true);
        assert_eq!(bubble.visible_title(), "Ho");
        assert_eq!(bubble.desired_width(), 6);
    }

    #[test]
    fn renders_selected_bubble() {
        let model = MenuItemModel {
            custom_font: FontStyle::new(Modifier::BOLD),
            ..styled(MenuItemModel::new(1, "Home").with_icon("H"))
        };
        let mut bubble = Bubble::new(&RenderContext::default(), model);
        bubble.set_selected(true);

        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        bubble.render(area, &mut buf);

        // width 8 centered in 20 -> x = 6..14
        assert_eq!(buf[(6, 0)].bg, bubble.bubble_bg());
        assert_eq!(buf[(13, 0)].bg, bubble.bubble_bg());
        assert_eq!(buf[(5, 0)].bg, Color::Reset);
        assert_eq!(buf[(7, 0)].symbol(), "H");
        assert_eq!(buf[(7, 0)].fg, tui_theme::SELECTED_ICON_DEFAULT);
        let title: String = (9..13).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(title, "Home");
        assert_eq!(buf[(9, 0)].fg, tui_theme::SELECTED_TEXT_DEFAULT);
        assert!(buf[(9, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn renders_unselected_icon_only() {
        let bubble = Bubble::new(
            &RenderContext::default(),
            styled(
                MenuItemModel::new(1, "Home")
                    .with_icon("H")
                    .with_icon_color(Color::Cyan),
            ),
        );
        let area = Rect::new(0, 0, 9, 1);
        let mut buf = Buffer::empty(area);
        bubble.render(area, &mut buf);

        // width 3 centered in 9 -> icon at x = 4
        assert_eq!(buf[(4, 0)].symbol(), "H");
        assert_eq!(buf[(4, 0)].fg, Color::Cyan);
        assert_eq!(buf[(3, 0)].bg, Color::Reset);
        let row: String = (0..9).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(row.trim(), "H");
    }

    #[test]
    fn disabled_icon_uses_disabled_color() {
        let bubble = Bubble::new(
            &RenderContext::default(),
            styled(
                MenuItemModel::new(1, "Home")
                    .with_icon("H")
                    .with_icon_color(Color::Cyan)
                    .checkable(true)
                    .enabled(false),
            ),
        );
        assert!(!bubble.accepts_tap());
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        bubble.render(area, &mut buf);
        assert_eq!(buf[(1, 0)].fg, tui_theme::DISABLED_ICON_DEFAULT);
    }

    #[test]
    fn vertical_padding_centers_content_row() {
        let model = MenuItemModel {
            vertical_padding: 1,
            ..styled(MenuItemModel::new(1, "Home").with_icon("H"))
        };
        let mut bubble = Bubble::new(&RenderContext::default(), model);
        bubble.set_selected(true);
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        bubble.render(area, &mut buf);
        assert_eq!(bubble.height(), 3);
        assert_eq!(buf[(1, 1)].symbol(), "H");
        assert_eq!(buf[(0, 0)].bg, bubble.bubble_bg());
        assert_eq!(buf[(0, 2)].bg, bubble.bubble_bg());
    }

    #[test]
    fn oversized_padding_saturates() {
        let model = MenuItemModel {
            horizontal_padding: 40_000,
            vertical_padding: 40_000,
            icon_padding: u16::MAX,
            corner_radius: 1,
            ..MenuItemModel::new(1, "Home").with_icon("H")
        };
        let mut bubble = Bubble::new(&RenderContext::default(), model);
        assert_eq!(bubble.height(), u16::MAX);
        assert_eq!(bubble.desired_width(), u16::MAX);
        bubble.set_selected(true);
        assert_eq!(bubble.desired_width(), u16::MAX);

        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        bubble.render(area, &mut buf);
        assert_eq!(bubble.bounds(area), area);
    }
}
