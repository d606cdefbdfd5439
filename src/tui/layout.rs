use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Stacked layout for the converter screen
pub struct AppLayout {
    pub converter_area: Rect,
    pub quickref_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Top to bottom:
    /// - Converter: input/output/error rows
    /// - Quick reference: the value in all four bases plus bit/byte meta
    /// - History: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Converter (2 value rows + error row + borders)
                Constraint::Length(7), // Quick reference (4 base rows + meta + borders)
                Constraint::Min(3),    // History list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            converter_area: chunks[0],
            quickref_area: chunks[1],
            history_area: chunks[2],
            status_area: chunks[3],
        }
    }
}
