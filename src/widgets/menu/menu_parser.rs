// bubble-tabbar/src/widgets/menu/menu_parser.rs
use std::path::PathBuf;

use serde::Deserialize;
use tracing::trace;

use crate::{BubbleTabBarError, MenuItemModel, error::Result};

/// Where a menu definition comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuResource {
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON text.
    Json(String),
    /// Already-built entries, e.g. assembled in code.
    Items(Vec<MenuItemModel>),
}

impl From<PathBuf> for MenuResource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<Vec<MenuItemModel>> for MenuResource {
    fn from(items: Vec<MenuItemModel>) -> Self {
        Self::Items(items)
    }
}

// `{ "items": [ ... ] }` form of a menu document.
#[derive(Deserialize)]
struct WrappedMenu {
    items: Vec<MenuItemModel>,
}

/// Reads menu resources into ordered [`MenuItemModel`] lists.
///
/// Declaration order is preserved. Ids are passed through untouched; rejecting
/// id `0` is the bar's job.
pub struct MenuParser;

impl MenuParser {
    pub fn parse(resource: &MenuResource) -> Result<Vec<MenuItemModel>> {
        let items = match resource {
            MenuResource::File(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|source| BubbleTabBarError::MenuIo {
                        path: path.clone(),
                        source,
                    })?;
                Self::parse_str(&text)?
            }
            MenuResource::Json(text) => Self::parse_str(text)?,
            MenuResource::Items(items) => items.clone(),
        };
        trace!("parsed {} menu items", items.len());
        Ok(items)
    }

    pub fn parse_str(text: &str) -> Result<Vec<MenuItemModel>> {
        // both `[ {...}, ... ]` and `{ "items": [ ... ] }` are accepted
        let items = if text.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<MenuItemModel>>(text)
        } else {
            serde_json::from_str::<WrappedMenu>(text).map(|menu| menu.items)
        };
        items.map_err(BubbleTabBarError::MenuSyntax)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::MenuItemId;

    #[test]
    fn keeps_declaration_order_and_flags() {
        let items = MenuParser::parse_str(
            r#"[
                { "id": 3, "title": "Home", "icon": "H", "checkable": true, "checked": true },
                { "id": 1, "title": "Log", "icon": "L", "checkable": true },
                { "id": 2, "title": "About", "enabled": false, "icon_color": "magenta" }
            ]"#,
        )
        .unwrap();

        let ids: Vec<u32> = items.iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(items[0].checkable && items[0].checked);
        assert!(items[1].checkable && !items[1].checked);
        assert!(!items[2].checkable && !items[2].enabled);
        assert_eq!(items[2].icon_color, Some(Color::Magenta));
    }

    #[test]
    fn accepts_wrapped_document() {
        let items =
            MenuParser::parse_str(r#"{ "items": [ { "id": 7, "title": "Search" } ] }"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, MenuItemId(7));
        assert!(items[0].enabled);
        assert!(!items[0].checkable);
    }

    #[test]
    fn missing_id_passes_through_as_unset() {
        let items = MenuParser::parse_str(r#"[ { "title": "Nameless" } ]"#).unwrap();
        assert!(items[0].id.is_unset());
    }

    #[test]
    fn per_item_styling_is_read() {
        let items = MenuParser::parse_str(
            r#"[ { "id": 1, "bubble_color": "blue", "horizontal_padding": 5, "custom_font": "bold" } ]"#,
        )
        .unwrap();
        assert_eq!(items[0].bubble_color, Color::Blue);
        assert_eq!(items[0].horizontal_padding, 5);
        assert_eq!(items[0].custom_font.to_string(), "bold");
    }

    #[test]
    fn syntax_errors_propagate() {
        let err = MenuParser::parse(&MenuResource::Json("[ { \"id\": ".into())).unwrap_err();
        assert!(matches!(err, BubbleTabBarError::MenuSyntax(_)));
    }

    #[test]
    fn item_errors_keep_their_message() {
        let err = MenuParser::parse_str(r#"[ { "id": 1 }, { "id": -4 } ]"#).unwrap_err();
        let BubbleTabBarError::MenuSyntax(source) = err else {
            panic!("expected a syntax error, got {err:?}");
        };
        assert!(source.to_string().contains("-4"), "{source}");

        let err = MenuParser::parse_str(r#"{ "items": [ { "id": "seven" } ] }"#).unwrap_err();
        let BubbleTabBarError::MenuSyntax(source) = err else {
            panic!("expected a syntax error, got {err:?}");
        };
        assert!(source.to_string().contains("seven"), "{source}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = PathBuf::from("/definitely/not/here/menu.json");
        let err = MenuParser::parse(&MenuResource::File(path.clone())).unwrap_err();
        assert!(matches!(err, BubbleTabBarError::MenuIo { path: p, .. } if p == path));
    }

    #[test]
    fn items_are_cloned_through() {
        let items = vec![MenuItemModel::new(4, "Four").checkable(true)];
        assert_eq!(
            MenuParser::parse(&MenuResource::Items(items.clone())).unwrap(),
            items
        );
    }
}
