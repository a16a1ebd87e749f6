use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::board::{Board, Slot};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, masjid_name: &str, board: &Board) {
    let title_line = Line::from(Span::styled(
        masjid_name,
        theme::gold().add_modifier(Modifier::BOLD),
    ));

    let hijri = board.text(Slot::HijriDate);
    let date_line = if hijri.is_empty() {
        Line::from(Span::styled(board.text(Slot::Date), theme::bold()))
    } else {
        Line::from(vec![
            Span::styled(board.text(Slot::Date), theme::bold()),
            Span::styled("  ·  ", theme::dim()),
            Span::styled(hijri, theme::amber()),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold())
        .style(theme::base());

    let paragraph = Paragraph::new(vec![title_line, date_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
