// bubble-tabbar/src/error.rs
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, BubbleTabBarError>;

#[derive(Debug, thiserror::Error)]
pub enum BubbleTabBarError {
    /// A menu entry was declared without an id (or with id `0`).
    #[error("menu item #{position} ({title:?}) has no id")]
    InvalidMenuDefinition { position: usize, title: String },
    /// Two menu entries share an id.
    #[error("menu item #{position} reuses id {id} of item #{first}")]
    DuplicateMenuId {
        position: usize,
        first: usize,
        id: crate::MenuItemId,
    },
    /// `set_selected` was called with a position past the last bubble.
    #[error("bubble position {position} out of range for {len} bubbles")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("failed to read {path}: {source}")]
    MenuIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed menu resource: {0}")]
    MenuSyntax(#[source] serde_json::Error),
    #[error("malformed bubble tab bar config: {0}")]
    ConfigSyntax(#[source] serde_json::Error),
    #[error("navigation graph has no destination {0}")]
    UnknownDestination(crate::MenuItemId),
    #[error("invalid font style {0:?}")]
    InvalidFontStyle(String),
}
