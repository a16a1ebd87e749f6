use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::DhikrSlot;
use crate::tui::board::{Board, Slot};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, board: &Board) {
    let mut spans = Vec::new();
    for (i, slot) in DhikrSlot::all().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   ·   ", theme::dim()));
        }
        spans.push(Span::styled(
            format!("{} ", slot.display_name().to_uppercase()),
            theme::dim(),
        ));
        spans.push(Span::styled(board.text(Slot::Dhikr(slot)), theme::green()));
    }

    let block = Block::default()
        .title(Span::styled(" Dhikr ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
