use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split-pane layout configuration
pub struct AppLayout {
    pub messages_area: Rect,
    pub detail_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create split-pane layout:
    /// - Message list: 40% width (left)
    /// - Selected message: 60% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let [main, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .areas(area);

        let [messages, detail] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(main);

        Self { messages_area: messages, detail_area: detail, status_area: status }
    }
}
