use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::Poster;
use crate::tui::theme;

/// Draws the announcement card over the dashboard. While the card is
/// fading out the whole thing drops to the dim style.
pub fn render(frame: &mut Frame, area: Rect, poster: &Poster, fading: bool) {
    let width = area.width.saturating_sub(4).min(46);
    let height = area.height.min(10);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let body = if fading { theme::dim() } else { theme::bold() };
    let accent = if fading { theme::dim() } else { theme::gold() };

    // File names may not be plain ASCII, so pad by display width.
    let name = poster.file.as_str();
    let inner = UnicodeWidthStr::width(name).max(12);
    let pad = inner - UnicodeWidthStr::width(name);
    let left = pad / 2;
    let right = pad - left;
    let frame_top = format!("╭{}╮", "─".repeat(inner + 2));
    let frame_mid = format!("│ {}{}{} │", " ".repeat(left), name, " ".repeat(right));
    let frame_bot = format!("╰{}╯", "─".repeat(inner + 2));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(frame_top, accent)),
        Line::from(Span::styled(frame_mid, body)),
        Line::from(Span::styled(frame_bot, accent)),
        Line::from(""),
        Line::from(Span::styled(human_size(poster.size_bytes), theme::dim())),
    ];

    let block = Block::default()
        .title(Span::styled(" Announcements ", accent))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent)
        .style(theme::surface());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, popup);
}

fn human_size(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else {
        format!("{} KB", bytes.div_ceil(1000))
    }
}
