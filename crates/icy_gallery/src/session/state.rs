use crate::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing searched yet
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// State of the current search.
///
/// Replaced wholesale when a search finishes; the draw and hit-test paths only
/// ever see a committed session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    pub query: String,
    pub phase: Phase,
    pub status_text: String,
    pub error_message: Option<String>,
    /// In fetch order, laid out when `phase == Ready`
    pub tiles: Vec<Tile>,
    /// Search that produced this state; 0 before the first search
    pub generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            status_text: "enter a keyword to search".to_string(),
            ..Default::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Ready, but nothing to show
    pub fn is_empty_result(&self) -> bool {
        self.phase == Phase::Ready && self.tiles.is_empty()
    }
}
